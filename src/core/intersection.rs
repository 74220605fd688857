//! Schnitt zweier Polylinien als getaggtes Ergebnis.

use super::curve::same_point;
use super::geometry::{distance_point_segment, segment_intersection, Point, SegmentHit};
use super::Curve;

/// Rohes Ergebnis einer Schnittabfrage, vor jeder Kanonisierung.
///
/// Punkte sind nach ihrer Lage entlang der *ersten* Kurve sortiert.
#[derive(Debug, Clone, PartialEq)]
pub enum IntersectionResult {
    /// Kurven berühren sich nicht
    None,
    /// Genau ein Schnittpunkt
    Point(Point),
    /// Mehrere getrennte Schnittpunkte (evtl. verrauschte Häufung)
    PointSet(Vec<Point>),
    /// Eine kollineare Überlappung
    Curve(Curve),
    /// Mehrere kollineare Überlappungen
    CurveSet(Vec<Curve>),
    /// Punkte und Überlappungen gemischt
    Collection { points: Vec<Point>, curves: Vec<Curve> },
}

impl IntersectionResult {
    /// Baut das Ergebnis aus bereits bereinigten Punkten und Überlappungen.
    pub fn from_parts(mut points: Vec<Point>, mut curves: Vec<Curve>) -> Self {
        match (points.len(), curves.len()) {
            (0, 0) => Self::None,
            (1, 0) => Self::Point(points.remove(0)),
            (_, 0) => Self::PointSet(points),
            (0, 1) => Self::Curve(curves.remove(0)),
            (0, _) => Self::CurveSet(curves),
            _ => Self::Collection { points, curves },
        }
    }

    /// Baut ein reines Punkt-Ergebnis (leer, einzeln oder Menge).
    pub fn from_points(points: Vec<Point>) -> Self {
        Self::from_parts(points, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Alle diskreten Schnittpunkte (Überlappungen nicht eingeschlossen).
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Point(p) => std::slice::from_ref(p),
            Self::PointSet(points) | Self::Collection { points, .. } => points,
            Self::None | Self::Curve(_) | Self::CurveSet(_) => &[],
        }
    }

    /// `true` wenn mindestens eine kollineare Überlappung enthalten ist.
    pub fn has_overlap(&self) -> bool {
        matches!(
            self,
            Self::Curve(_) | Self::CurveSet(_) | Self::Collection { .. }
        )
    }
}

/// Ein Treffer mit seiner Lage entlang der ersten Kurve (Segmentindex + t).
struct Hit {
    position: f64,
    point: Point,
}

/// Schneidet zwei Polylinien.
///
/// Treffer an einem gemeinsamen Eckpunkt zweier Nachbarsegmente werden nur
/// einmal gemeldet. Punkte, die auf einer Überlappung liegen, gehen in dieser auf.
pub fn intersect(a: &Curve, b: &Curve) -> IntersectionResult {
    let mut hits: Vec<Hit> = Vec::new();
    let mut overlaps: Vec<(f64, Point, Point)> = Vec::new();

    for (i, (a0, a1)) in a.segments().enumerate() {
        for (b0, b1) in b.segments() {
            match segment_intersection(a0, a1, b0, b1) {
                SegmentHit::Disjoint => {}
                SegmentHit::Point { point, t } => hits.push(Hit {
                    position: i as f64 + t,
                    point,
                }),
                SegmentHit::Overlap {
                    start,
                    end,
                    t_start,
                    ..
                } => overlaps.push((i as f64 + t_start, start, end)),
            }
        }
    }

    hits.sort_by(|x, y| x.position.total_cmp(&y.position));
    overlaps.sort_by(|x, y| x.0.total_cmp(&y.0));

    let curves = merge_overlaps(&overlaps);

    let mut points: Vec<Point> = Vec::with_capacity(hits.len());
    for hit in hits {
        if points.iter().any(|&p| same_point(p, hit.point)) {
            continue;
        }
        let on_overlap = overlaps
            .iter()
            .any(|&(_, start, end)| distance_point_segment(hit.point, start, end) <= 1e-9);
        if !on_overlap {
            points.push(hit.point);
        }
    }

    IntersectionResult::from_parts(points, curves)
}

/// Verbindet aneinanderstoßende Überlappungsstücke zu zusammenhängenden Kurven.
fn merge_overlaps(overlaps: &[(f64, Point, Point)]) -> Vec<Curve> {
    let mut curves: Vec<Curve> = Vec::new();
    for &(_, start, end) in overlaps {
        if let Some(current) = curves.last_mut() {
            if current.last().is_some_and(|last| same_point(last, start)) {
                current.extend_joined([end]);
                continue;
            }
        }
        curves.push(Curve::new(vec![start, end]));
    }
    curves
}

/// Gruppiert Rohpunkte zu Schnitt-Loci.
///
/// Ein Punkt schließt sich dem ersten Locus an, dessen Anker (erstes Mitglied)
/// pro Achse höchstens `tolerance` entfernt liegt; sonst eröffnet er einen neuen.
/// Die Reihenfolge der Loci folgt der Reihenfolge ihrer Anker.
pub fn cluster_loci(points: &[Point], tolerance: f64) -> Vec<Vec<Point>> {
    let mut loci: Vec<Vec<Point>> = Vec::new();
    for &p in points {
        let joined = loci.iter_mut().find(|locus| {
            let anchor = locus[0];
            (p.x - anchor.x).abs() <= tolerance && (p.y - anchor.y).abs() <= tolerance
        });
        match joined {
            Some(locus) => locus.push(p),
            None => loci.push(vec![p]),
        }
    }
    loci
}
