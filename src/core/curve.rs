//! Polylinien-Typ für Gesten, Umrisse und deren Teilstücke.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, GEOMETRY_EPSILON};
use super::BoundingBox;

/// Geordnete Punktfolge in Bild-Pixelkoordinaten.
///
/// Ein Ring ist eine Kurve, deren letzter Punkt den ersten wiederholt.
/// Der Typ selbst erzwingt keine Mindestlänge; die Kernel-Operationen
/// prüfen das selbst und liefern bei entarteten Kurven `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    points: Vec<Point>,
}

impl Curve {
    /// Erstellt eine Kurve aus einer Punktliste (unverändert übernommen).
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Erstellt eine Kurve aus `(x, y)`-Paaren.
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Iteriert über alle Segmente `(start, ende)` der Kurve.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Anzahl der Segmente (0 bei weniger als zwei Punkten).
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// `true` wenn erster und letzter Punkt zusammenfallen.
    pub fn is_closed(&self) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && same_point(first, last),
            _ => false,
        }
    }

    /// Anzahl paarweise verschiedener Stützpunkte (Schlusspunkt eines Rings zählt nicht doppelt).
    pub fn distinct_count(&self) -> usize {
        let mut distinct: Vec<Point> = Vec::with_capacity(self.points.len());
        for &p in &self.points {
            if !distinct.iter().any(|&q| same_point(p, q)) {
                distinct.push(p);
            }
        }
        distinct.len()
    }

    /// Entfernt direkt aufeinanderfolgende Duplikate.
    pub fn dedup_consecutive(&mut self) {
        self.points.dedup_by(|a, b| same_point(*a, *b));
    }

    /// Hängt Punkte an, ohne am Übergang ein Duplikat zu erzeugen.
    pub fn extend_joined<I: IntoIterator<Item = Point>>(&mut self, points: I) {
        for p in points {
            if self.last().is_some_and(|last| same_point(last, p)) {
                continue;
            }
            self.points.push(p);
        }
    }

    /// Schließt die Kurve zum Ring: der erste Punkt wird angehängt, falls nötig.
    pub fn close_ring(&mut self) {
        if let Some(first) = self.first() {
            if !self.is_closed() {
                self.points.push(first);
            }
        }
    }

    /// Liefert eine geschlossene Kopie (siehe [`Curve::close_ring`]).
    pub fn closed(mut self) -> Self {
        self.close_ring();
        self
    }

    /// Kurve in umgekehrter Laufrichtung.
    pub fn reversed(&self) -> Self {
        Self::new(self.points.iter().rev().copied().collect())
    }

    /// Achsenparalleles Begrenzungsrechteck aller Punkte.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }

    /// `true` wenn alle Koordinaten endlich sind (kein NaN/Inf).
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
    }

    /// Vorzeichenbehaftete Fläche eines Rings (Shoelace, positiv = gegen den Uhrzeigersinn).
    pub fn signed_area(&self) -> f64 {
        self.segments().map(|(a, b)| a.perp_dot(b)).sum::<f64>() * 0.5
    }

    /// Flächenschwerpunkt eines Rings.
    ///
    /// Bei (nahezu) verschwindender Fläche: Mittelwert der Stützpunkte.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }

        let area = self.signed_area();
        if area.abs() > GEOMETRY_EPSILON {
            let sum = self
                .segments()
                .fold(Point::ZERO, |acc, (a, b)| acc + (a + b) * a.perp_dot(b));
            return Some(sum / (6.0 * area));
        }

        let ring_len = if self.is_closed() {
            self.points.len() - 1
        } else {
            self.points.len()
        };
        let sum = self.points[..ring_len]
            .iter()
            .fold(Point::ZERO, |acc, &p| acc + p);
        Some(sum / ring_len as f64)
    }
}

impl From<Vec<Point>> for Curve {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl From<&[Point]> for Curve {
    fn from(points: &[Point]) -> Self {
        Self::new(points.to_vec())
    }
}

/// Zwei Punkte gelten als identisch, wenn sie numerisch zusammenfallen.
pub(crate) fn same_point(a: Point, b: Point) -> bool {
    a.distance_squared(b) <= GEOMETRY_EPSILON * GEOMETRY_EPSILON
}
