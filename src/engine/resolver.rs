//! Kanonisierung roher Schnittergebnisse zu genau einem Kreuzungspunkt.

use crate::core::{snap_to_pixel, IntersectionResult, Point};

/// Der Schnitt lässt sich nicht auf einen einzelnen Kreuzungspunkt reduzieren.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Schnitt ist mehrdeutig")]
pub struct AmbiguousIntersection;

/// Reduziert ein Schnittergebnis auf einen pixelgenauen Kreuzungspunkt.
///
/// - `None` → `Ok(None)` (kein Schnitt)
/// - Einzelpunkt → gerundet
/// - Punktmenge → nur wenn alle gerundeten Mitglieder pro Achse höchstens
///   `tolerance` vom ersten entfernt liegen; Ergebnis ist der gerundete Mittelwert
/// - Überlappungen (auch gemischt) → mehrdeutig
pub fn resolve_crosspoint(
    result: &IntersectionResult,
    tolerance: f64,
) -> Result<Option<Point>, AmbiguousIntersection> {
    match result {
        IntersectionResult::None => Ok(None),
        IntersectionResult::Point(p) => {
            if !p.is_finite() {
                return Err(AmbiguousIntersection);
            }
            Ok(Some(snap_to_pixel(*p)))
        }
        IntersectionResult::PointSet(points) => collapse_cluster(points, tolerance).map(Some),
        IntersectionResult::Curve(_)
        | IntersectionResult::CurveSet(_)
        | IntersectionResult::Collection { .. } => Err(AmbiguousIntersection),
    }
}

/// Fasst eine Punktwolke zum gerundeten Mittelwert zusammen.
///
/// Summiert werden bereits gerundete Koordinaten, daher ist das Ergebnis
/// unabhängig von der Reihenfolge der Mitglieder.
fn collapse_cluster(points: &[Point], tolerance: f64) -> Result<Point, AmbiguousIntersection> {
    if points.iter().any(|p| !p.is_finite()) {
        return Err(AmbiguousIntersection);
    }
    let snapped: Vec<Point> = points.iter().map(|&p| snap_to_pixel(p)).collect();
    let (&anchor, _) = snapped.split_first().ok_or(AmbiguousIntersection)?;

    let scattered = snapped
        .iter()
        .any(|p| (p.x - anchor.x).abs() > tolerance || (p.y - anchor.y).abs() > tolerance);
    if scattered {
        return Err(AmbiguousIntersection);
    }

    let sum = snapped.iter().fold(Point::ZERO, |acc, &p| acc + p);
    Ok(snap_to_pixel(sum / snapped.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Curve;

    #[test]
    fn test_no_intersection_resolves_to_none() {
        assert_eq!(resolve_crosspoint(&IntersectionResult::None, 1.0), Ok(None));
    }

    #[test]
    fn test_single_point_is_rounded() {
        let result = IntersectionResult::Point(Point::new(4.7, 10.2));
        assert_eq!(
            resolve_crosspoint(&result, 1.0),
            Ok(Some(Point::new(5.0, 10.0)))
        );
    }

    #[test]
    fn test_tight_cluster_collapses_to_rounded_mean() {
        let result = IntersectionResult::PointSet(vec![
            Point::new(5.1, 5.0),
            Point::new(5.6, 5.2),
            Point::new(5.9, 4.6),
        ]);
        // gerundet: (5,5), (6,5), (6,5) → Mittel (5.67, 5) → (6, 5)
        assert_eq!(
            resolve_crosspoint(&result, 1.0),
            Ok(Some(Point::new(6.0, 5.0)))
        );
    }

    #[test]
    fn test_separated_points_are_ambiguous() {
        let result = IntersectionResult::PointSet(vec![Point::new(0.0, 0.0), Point::new(3.0, 0.0)]);
        assert_eq!(resolve_crosspoint(&result, 1.0), Err(AmbiguousIntersection));
    }

    #[test]
    fn test_overlaps_are_always_ambiguous() {
        let run = Curve::from_xy(&[(0.0, 0.0), (0.5, 0.0)]);
        assert_eq!(
            resolve_crosspoint(&IntersectionResult::Curve(run.clone()), 1.0),
            Err(AmbiguousIntersection)
        );
        assert_eq!(
            resolve_crosspoint(&IntersectionResult::CurveSet(vec![run.clone(), run]), 1.0),
            Err(AmbiguousIntersection)
        );
    }

    #[test]
    fn test_cluster_result_does_not_depend_on_order() {
        let members = [
            Point::new(7.2, 3.4),
            Point::new(7.9, 3.6),
            Point::new(7.4, 2.8),
            Point::new(8.3, 3.1),
        ];
        let expected = resolve_crosspoint(&IntersectionResult::PointSet(members.to_vec()), 1.0);
        assert!(expected.is_ok());

        let mut permuted = members.to_vec();
        for _ in 0..members.len() {
            permuted.rotate_left(1);
            assert_eq!(
                resolve_crosspoint(&IntersectionResult::PointSet(permuted.clone()), 1.0),
                expected
            );
            let reversed: Vec<Point> = permuted.iter().rev().copied().collect();
            assert_eq!(
                resolve_crosspoint(&IntersectionResult::PointSet(reversed), 1.0),
                expected
            );
        }
    }
}
