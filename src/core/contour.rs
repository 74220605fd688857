//! Persistierter Objekt-Umriss und sein Begrenzungsrechteck.

use serde::{Deserialize, Serialize};

use super::geometry::{is_simple_ring, Point};
use super::{Curve, ObjectId};

/// Achsenparalleles Rechteck in Pixelkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Kleinstes Rechteck um alle Punkte (`None` bei leerer Liste).
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Zoom-Ausschnitt: Rechteck um `buffer` Pixel je Seite vergrößert.
    ///
    /// Ragt der Ausschnitt über den Bildrand (`0..image_size`), wird der
    /// Überstand auf die Gegenseite verschoben und anschließend geklemmt.
    pub fn zoom_box(&self, buffer: f64, image_size: Point) -> Self {
        let (min_x, max_x) = pad_axis(self.min.x, self.max.x, buffer, image_size.x);
        let (min_y, max_y) = pad_axis(self.min.y, self.max.y, buffer, image_size.y);
        Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }
}

fn pad_axis(lo: f64, hi: f64, buffer: f64, size: f64) -> (f64, f64) {
    let mut lo = lo - buffer;
    let mut hi = hi + buffer;
    if lo < 0.0 {
        hi += -lo;
        lo = 0.0;
    }
    if hi > size {
        lo -= hi - size;
        hi = size;
    }
    (lo.max(0.0), hi)
}

/// Umriss eines annotierten Objekts.
///
/// Die Kurve ist immer ein einfacher, geschlossener Ring.
/// `parent` ist eine reine Nachschlage-Referenz in die [`super::ObjectTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    curve: Curve,
    /// Besitzendes Objekt
    pub owner: ObjectId,
    /// Klassen-Label (0-basiert)
    pub class_label: u32,
    /// Begrenzungsrechteck der Kurve
    pub bbox: BoundingBox,
    /// Flächenschwerpunkt, falls bekannt
    pub centroid: Option<Point>,
    /// Eltern-Objekt bei Teilregionen
    pub parent: Option<ObjectId>,
}

impl Contour {
    /// Erstellt einen Umriss aus einem Ring; `None` wenn der Ring nicht einfach/geschlossen ist.
    pub fn from_ring(
        curve: Curve,
        owner: ObjectId,
        class_label: u32,
        parent: Option<ObjectId>,
    ) -> Option<Self> {
        if !curve.is_finite() || !is_simple_ring(&curve) {
            return None;
        }
        let bbox = curve.bounding_box()?;
        let centroid = curve.centroid();
        Some(Self {
            curve,
            owner,
            class_label,
            bbox,
            centroid,
            parent,
        })
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }
}
