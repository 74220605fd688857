//! Freihand-Geste ohne Eltern-Umriss → einfacher geschlossener Ring.
//!
//! Eine von Hand gezeichnete geschlossene Form kreuzt sich typischerweise
//! genau einmal nahe Start/Ende. Die Geste wird per Index halbiert, der
//! Kreuzungspunkt der Hälften bestimmt und der überstehende Anfang bzw.
//! das überstehende Ende abgeschnitten.

use crate::core::{
    cluster_loci, contains_point, intersect, is_simple_ring, nearest_point_on, split_at, Curve,
    IntersectionResult, Point,
};
use crate::shared::EngineOptions;

use super::reject::{reject, EngineResult, RejectCode};
use super::resolver::resolve_crosspoint;

/// Schließt eine Freihand-Geste zu einem einfachen Ring.
pub fn close_loop(gesture: &[Point], options: &EngineOptions) -> EngineResult<Curve> {
    if gesture.len() < options.min_gesture_points.max(4) {
        return reject(RejectCode::Unknown, "Geste hat zu wenige Punkte");
    }
    if gesture.iter().any(|p| !p.is_finite()) {
        return reject(RejectCode::Unknown, "Geste enthält ungültige Koordinaten");
    }

    // Erste Hälfte bekommt bei ungerader Länge den zusätzlichen Punkt
    let half = gesture.len().div_ceil(2);
    let first_half = Curve::from(&gesture[..half]);
    let second_half = Curve::from(&gesture[half..]);

    let raw = intersect(&first_half, &second_half);

    if raw.is_empty() {
        let mut ring = Curve::from(gesture);
        ring.dedup_consecutive();
        return finish_ring(ring.closed());
    }

    if let IntersectionResult::PointSet(points) = &raw {
        let loci = cluster_loci(points, options.snap_tolerance);
        if loci.len() > 1 {
            return reject(
                RejectCode::SelfIntersects,
                &format!("{} getrennte Kreuzungen", loci.len()),
            );
        }
    }

    let crosspoint = match resolve_crosspoint(&raw, options.snap_tolerance) {
        Ok(Some(p)) => p,
        Ok(None) => return reject(RejectCode::Unknown, "Kreuzung verschwunden"),
        Err(_) => return reject(RejectCode::SelfIntersects, "Kreuzung ist mehrdeutig"),
    };

    // Der gerundete Kreuzungspunkt muss auf beiden Hälften liegen
    for half_curve in [&first_half, &second_half] {
        let on_curve = nearest_point_on(half_curve, crosspoint);
        if on_curve.is_none_or(|p| p.distance(crosspoint) > options.snap_tolerance) {
            return reject(RejectCode::Unknown, "Kreuzungspunkt liegt neben der Geste");
        }
    }

    let Some((head_a, tail_a)) = split_at(&first_half, crosspoint, options.snap_tolerance) else {
        return reject(RejectCode::Unknown, "erste Hälfte nicht teilbar");
    };
    let Some((head_b, tail_b)) = split_at(&second_half, crosspoint, options.snap_tolerance) else {
        return reject(RejectCode::Unknown, "zweite Hälfte nicht teilbar");
    };

    // Liegt das Anfangsstück am Übergang der Hälften, ist es Teil der Schleife
    let seam_points = [first_half.last(), second_half.first()];
    let head_touches_seam = seam_points
        .into_iter()
        .flatten()
        .any(|p| contains_point(&head_a, p, options.close_tolerance));

    let (first_piece, second_piece) = if head_touches_seam {
        (head_a, tail_b)
    } else {
        (tail_a, head_b)
    };

    let mut ring = first_piece;
    ring.extend_joined(second_piece.into_points());
    finish_ring(ring.closed())
}

fn finish_ring(ring: Curve) -> EngineResult<Curve> {
    if !is_simple_ring(&ring) {
        return reject(RejectCode::SelfIntersects, "Ergebnis ist kein einfacher Ring");
    }
    log::debug!("Umriss geschlossen: {} Punkte", ring.len());
    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_simple_square_is_closed_unchanged() {
        let gesture = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let ring = close_loop(&gesture, &EngineOptions::default()).expect("Ring erwartet");

        assert_eq!(
            ring.points(),
            pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]).as_slice()
        );
    }

    #[test]
    fn test_too_short_gesture_is_rejected() {
        let gesture = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert_eq!(
            close_loop(&gesture, &EngineOptions::default()),
            Err(RejectCode::Unknown)
        );
    }

    #[test]
    fn test_non_finite_gesture_is_rejected() {
        let gesture = pts(&[(0.0, 0.0), (f64::NAN, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert_eq!(
            close_loop(&gesture, &EngineOptions::default()),
            Err(RejectCode::Unknown)
        );
    }
}
