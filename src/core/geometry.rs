//! Geometrie-Kernel: Punkt-, Segment- und Kurven-Primitive.
//!
//! Die Arithmetik ist kontinuierlich (f64). Gerundet wird erst im
//! Resolver, wenn ein Kreuzungspunkt kanonisch gemacht wird.

use glam::DVec2;

use super::curve::same_point;
use super::Curve;

/// Punkt in Bild-Pixelkoordinaten.
pub type Point = DVec2;

/// Numerische Toleranz für Segment-Parameter und Kreuzprodukte.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Position eines Punktes auf einer Kurve (nächstgelegene Stelle).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveLocation {
    /// Index des Segments `points[segment] → points[segment + 1]`
    pub segment: usize,
    /// Parameter auf dem Segment (0 = Segmentstart, 1 = Segmentende)
    pub t: f64,
    /// Projizierter Punkt auf der Kurve
    pub point: Point,
    /// Abstand zwischen Suchpunkt und `point`
    pub distance: f64,
}

/// Ergebnis eines Segment-Segment-Schnitts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentHit {
    /// Kein gemeinsamer Punkt
    Disjoint,
    /// Genau ein gemeinsamer Punkt, `t` ist der Parameter auf dem ersten Segment
    Point { point: Point, t: f64 },
    /// Kollineare Überlappung positiver Länge von `t_start` bis `t_end` (erstes Segment)
    Overlap {
        start: Point,
        end: Point,
        t_start: f64,
        t_end: f64,
    },
}

/// Nächster Punkt auf dem Segment a–b zum Punkt p, plus Parameter t ∈ [0, 1].
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> (Point, f64) {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= GEOMETRY_EPSILON * GEOMETRY_EPSILON {
        return (a, 0.0);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (a + ab * t, t)
}

/// Abstand eines Punktes zum Segment a–b.
pub fn distance_point_segment(p: Point, a: Point, b: Point) -> f64 {
    closest_point_on_segment(p, a, b).0.distance(p)
}

/// Schneidet zwei Segmente (inkl. Endpunkte und kollinearer Überlappung).
pub fn segment_intersection(a0: Point, a1: Point, b0: Point, b1: Point) -> SegmentHit {
    let da = a1 - a0;
    let db = b1 - b0;
    let len_a = da.length();
    let len_b = db.length();
    if len_a <= GEOMETRY_EPSILON || len_b <= GEOMETRY_EPSILON {
        return SegmentHit::Disjoint;
    }

    let diff = b0 - a0;
    let denom = da.perp_dot(db);

    if denom.abs() > GEOMETRY_EPSILON * len_a * len_b {
        let t = diff.perp_dot(db) / denom;
        let u = diff.perp_dot(da) / denom;
        let eps_t = GEOMETRY_EPSILON / len_a;
        let eps_u = GEOMETRY_EPSILON / len_b;
        if t < -eps_t || t > 1.0 + eps_t || u < -eps_u || u > 1.0 + eps_u {
            return SegmentHit::Disjoint;
        }
        let t = t.clamp(0.0, 1.0);
        return SegmentHit::Point {
            point: a0 + da * t,
            t,
        };
    }

    // Parallel: nur kollineare Segmente können sich berühren
    if diff.perp_dot(da).abs() > GEOMETRY_EPSILON * len_a {
        return SegmentHit::Disjoint;
    }

    let len_sq = len_a * len_a;
    let tb0 = diff.dot(da) / len_sq;
    let tb1 = (b1 - a0).dot(da) / len_sq;
    let t_start = tb0.min(tb1).max(0.0);
    let t_end = tb0.max(tb1).min(1.0);
    let eps_t = GEOMETRY_EPSILON / len_a;

    if t_end < t_start - eps_t {
        return SegmentHit::Disjoint;
    }
    if (t_end - t_start) * len_a <= GEOMETRY_EPSILON {
        return SegmentHit::Point {
            point: a0 + da * t_start,
            t: t_start,
        };
    }

    SegmentHit::Overlap {
        start: a0 + da * t_start,
        end: a0 + da * t_end,
        t_start,
        t_end,
    }
}

/// `true` wenn sich die Segmente in mindestens einem Punkt berühren.
pub fn segments_touch(a0: Point, a1: Point, b0: Point, b1: Point) -> bool {
    !matches!(segment_intersection(a0, a1, b0, b1), SegmentHit::Disjoint)
}

/// Sucht die Stelle der Kurve mit minimalem Abstand zu `point`.
///
/// Bei Gleichstand gewinnt das Segment mit dem kleineren Index.
/// Einpunkt-Kurven liefern diesen Punkt, leere Kurven `None`.
pub fn locate_on_curve(curve: &Curve, point: Point) -> Option<CurveLocation> {
    let points = curve.points();
    match points {
        [] => None,
        [only] => Some(CurveLocation {
            segment: 0,
            t: 0.0,
            point: *only,
            distance: only.distance(point),
        }),
        _ => {
            let mut best: Option<CurveLocation> = None;
            for (segment, (a, b)) in curve.segments().enumerate() {
                let (projected, t) = closest_point_on_segment(point, a, b);
                let distance = projected.distance(point);
                if best.is_none_or(|current| distance < current.distance) {
                    best = Some(CurveLocation {
                        segment,
                        t,
                        point: projected,
                        distance,
                    });
                }
            }
            best
        }
    }
}

/// Nächstgelegener Punkt auf der Kurve (orthogonale Projektion).
pub fn nearest_point_on(curve: &Curve, point: Point) -> Option<Point> {
    locate_on_curve(curve, point).map(|loc| loc.point)
}

/// Abstand Punkt ↔ Kurve (`f64::INFINITY` für leere Kurven).
pub fn distance_point_curve(point: Point, curve: &Curve) -> f64 {
    locate_on_curve(curve, point).map_or(f64::INFINITY, |loc| loc.distance)
}

/// Minimaler Abstand zweier Kurven (0 sobald sie sich berühren).
pub fn distance_curve_curve(a: &Curve, b: &Curve) -> f64 {
    if a.is_empty() || b.is_empty() {
        return f64::INFINITY;
    }
    if a.segment_count() == 0 || b.segment_count() == 0 {
        let (single, other) = if a.segment_count() == 0 { (a, b) } else { (b, a) };
        return single
            .first()
            .map_or(f64::INFINITY, |p| distance_point_curve(p, other));
    }

    let mut best = f64::INFINITY;
    for (a0, a1) in a.segments() {
        for (b0, b1) in b.segments() {
            if segments_touch(a0, a1, b0, b1) {
                return 0.0;
            }
            best = best
                .min(distance_point_segment(a0, b0, b1))
                .min(distance_point_segment(a1, b0, b1))
                .min(distance_point_segment(b0, a0, a1))
                .min(distance_point_segment(b1, a0, a1));
        }
    }
    best
}

/// `true` wenn `point` höchstens `tolerance` von der Kurve entfernt liegt.
pub fn contains_point(curve: &Curve, point: Point, tolerance: f64) -> bool {
    distance_point_curve(point, curve) <= tolerance
}

/// Teilt eine Kurve an `point` in zwei Stücke.
///
/// `point` muss höchstens `tolerance` von der Kurve entfernt liegen und wird
/// selbst zum gemeinsamen Endpunkt beider Stücke. Liefert `None`, wenn der
/// Punkt zu weit weg liegt oder eines der Stücke weniger als zwei
/// verschiedene Punkte hätte (Schnitt am Kurvenanfang/-ende).
pub fn split_at(curve: &Curve, point: Point, tolerance: f64) -> Option<(Curve, Curve)> {
    if curve.segment_count() == 0 {
        return None;
    }
    let loc = locate_on_curve(curve, point)?;
    if loc.distance > tolerance {
        return None;
    }

    let points = curve.points();
    let mut head = Curve::new(points[..=loc.segment].to_vec());
    head.extend_joined([point]);
    head.dedup_consecutive();

    let mut tail = Curve::new(vec![point]);
    tail.extend_joined(points[loc.segment + 1..].iter().copied());

    if head.distinct_count() < 2 || tail.distinct_count() < 2 {
        return None;
    }
    Some((head, tail))
}

/// Prüft, ob ein Ring einfach ist (keine Selbstberührung außer an Nachbarsegmenten).
///
/// Erwartet einen geschlossenen Ring ohne aufeinanderfolgende Duplikate.
/// Benachbarte Segmente dürfen sich nur im gemeinsamen Eckpunkt berühren,
/// also nicht kollinear zurückfalten.
pub fn is_simple_ring(ring: &Curve) -> bool {
    // Kleinster gültiger Ring: drei verschiedene Ecken plus Schlusspunkt
    if !ring.is_closed() || ring.distinct_count() < 3 {
        return false;
    }
    let points = ring.points();
    let segment_count = ring.segment_count();

    for i in 0..segment_count {
        let (a0, a1) = (points[i], points[i + 1]);
        if same_point(a0, a1) {
            return false;
        }
        for j in (i + 1)..segment_count {
            let (b0, b1) = (points[j], points[j + 1]);
            let adjacent = j == i + 1 || (i == 0 && j == segment_count - 1);

            match segment_intersection(a0, a1, b0, b1) {
                SegmentHit::Disjoint => {}
                SegmentHit::Overlap { .. } => return false,
                SegmentHit::Point { point, .. } => {
                    if !adjacent {
                        return false;
                    }
                    let shared = if j == i + 1 { a1 } else { a0 };
                    if !same_point(point, shared) {
                        return false;
                    }
                }
            }
        }
    }
    true
}

/// Rundet einen Punkt komponentenweise auf ganze Pixel (Halbwerte zur geraden Zahl).
pub fn snap_to_pixel(point: Point) -> Point {
    Point::new(point.x.round_ties_even(), point.y.round_ties_even())
}
