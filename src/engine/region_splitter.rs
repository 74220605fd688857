//! Teilungslinie über einen bestehenden Umriss → neue Kind-Region.
//!
//! Die Linie muss den Eltern-Ring genau zweimal kreuzen. Das Kind besteht aus
//! dem Linienstück zwischen den Kreuzungen plus dem Bogen des Eltern-Rings,
//! der nicht über dessen Naht (Start-/Endpunkt) läuft. Der Eltern-Ring wird
//! nur gelesen.

use crate::core::{
    cluster_loci, distance_point_curve, intersect, is_simple_ring, nearest_point_on, split_at,
    Curve, IntersectionResult, Point,
};
use crate::shared::EngineOptions;

use super::reject::{reject, EngineResult, RejectCode};
use super::resolver::resolve_crosspoint;

/// Ein Kreuzungs-Locus, einmal auf der Linie und einmal auf dem Eltern-Ring verortet.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    /// Projektion des Locus-Ankers auf die Linie (ungerundet)
    on_line: Point,
    /// Projektion des Locus-Ankers auf den Eltern-Ring (ungerundet)
    on_parent: Point,
    /// Kanonischer Kreuzungspunkt auf der Linie
    line_point: Point,
    /// Kanonischer Kreuzungspunkt auf dem Eltern-Ring
    parent_point: Point,
}

/// Schneidet mit `gesture` eine Kind-Region aus dem Eltern-Ring `parent`.
pub fn split_region(
    parent: &Curve,
    gesture: &[Point],
    options: &EngineOptions,
) -> EngineResult<Curve> {
    if !parent_is_valid(parent) {
        return reject(RejectCode::Unknown, "Eltern-Umriss ist kein einfacher Ring");
    }
    if gesture.iter().any(|p| !p.is_finite()) {
        return reject(RejectCode::Unknown, "Geste enthält ungültige Koordinaten");
    }

    let mut line = Curve::from(gesture);
    line.dedup_consecutive();
    if line.distinct_count() < 2 {
        return reject(RejectCode::MustCrossTwiceAtEndpoints, "Linie ist zu kurz");
    }

    let [first, second] = locate_crossings(&line, parent, options)?;

    // Linienstück zwischen den Kreuzungen
    let Some((l0, l1)) = split_at(&line, first.line_point, options.snap_tolerance) else {
        return reject(RejectCode::Unknown, "Linie an erster Kreuzung nicht teilbar");
    };
    let Some(line_rest) = piece_containing(l0, l1, second.on_line, options.close_tolerance) else {
        return reject(RejectCode::Unknown, "zweite Kreuzung auf keinem Linienstück");
    };
    let Some((m0, m1)) = split_at(&line_rest, second.line_point, options.snap_tolerance) else {
        return reject(RejectCode::Unknown, "Linie an zweiter Kreuzung nicht teilbar");
    };
    let spans_both = |piece: &Curve| {
        distance_point_curve(first.line_point, piece) < options.snap_tolerance
            && distance_point_curve(second.line_point, piece) < options.snap_tolerance
    };
    let kept_line = if spans_both(&m0) {
        m0
    } else if spans_both(&m1) {
        m1
    } else {
        return reject(RejectCode::Unknown, "kein Linienstück zwischen beiden Kreuzungen");
    };

    // Bogen des Eltern-Rings ohne dessen Naht
    let Some((p0, p1)) = split_at(parent, first.parent_point, options.snap_tolerance) else {
        return reject(RejectCode::Unknown, "Eltern-Ring an erster Kreuzung nicht teilbar");
    };
    let Some(parent_rest) = piece_containing(p0, p1, second.on_parent, options.close_tolerance)
    else {
        return reject(RejectCode::Unknown, "zweite Kreuzung auf keinem Ringstück");
    };
    let Some((q0, q1)) = split_at(&parent_rest, second.parent_point, options.snap_tolerance)
    else {
        return reject(RejectCode::Unknown, "Eltern-Ring an zweiter Kreuzung nicht teilbar");
    };
    let Some(arc) = arc_away_from_seam(parent, q0, q1, options.close_tolerance) else {
        return reject(RejectCode::Unknown, "Bogenwahl an der Naht nicht eindeutig");
    };

    let child = stitch(kept_line, &arc);
    if !is_simple_ring(&child) {
        return reject(RejectCode::SelfIntersects, "Kind-Region ist kein einfacher Ring");
    }
    log::debug!("Kind-Region erzeugt: {} Punkte", child.len());
    Ok(child)
}

/// Eltern-Ring: geschlossen, endlich, einfach, mindestens 3 verschiedene Ecken.
fn parent_is_valid(parent: &Curve) -> bool {
    if parent.len() < 4 || !parent.is_finite() || !parent.is_closed() {
        return false;
    }
    let mut ring = parent.clone();
    ring.dedup_consecutive();
    is_simple_ring(&ring)
}

/// Bestimmt die zwei Kreuzungs-Loci von Linie und Eltern-Ring.
fn locate_crossings(
    line: &Curve,
    parent: &Curve,
    options: &EngineOptions,
) -> EngineResult<[Crossing; 2]> {
    let raw = intersect(line, parent);
    let points = match &raw {
        IntersectionResult::None => {
            return reject(RejectCode::MustCrossTwiceAtEndpoints, "Linie berührt den Umriss nicht")
        }
        IntersectionResult::Point(_) => {
            return reject(RejectCode::MustCrossTwiceAtEndpoints, "nur eine Kreuzung")
        }
        IntersectionResult::Curve(_)
        | IntersectionResult::CurveSet(_)
        | IntersectionResult::Collection { .. } => {
            return reject(
                RejectCode::MustCrossTwiceAtEndpoints,
                "Linie verläuft entlang des Umrisses",
            )
        }
        IntersectionResult::PointSet(points) => points,
    };

    let loci = cluster_loci(points, options.snap_tolerance);
    let (first_locus, second_locus) = match loci.as_slice() {
        [_] => {
            return reject(RejectCode::MustCrossTwiceAtEndpoints, "Kreuzungen fallen zusammen")
        }
        [a, b] => (a, b),
        _ => {
            return reject(
                RejectCode::TooManyCrossings,
                &format!("{} Kreuzungen", loci.len()),
            )
        }
    };

    Ok([
        resolve_crossing(first_locus, line, parent, options)?,
        resolve_crossing(second_locus, line, parent, options)?,
    ])
}

/// Verortet einen Locus auf Linie und Ring und kanonisiert beide Lagen.
fn resolve_crossing(
    locus: &[Point],
    line: &Curve,
    parent: &Curve,
    options: &EngineOptions,
) -> EngineResult<Crossing> {
    let on_line = project_all(locus, line);
    let on_parent = project_all(locus, parent);

    let (Some(&line_anchor), Some(&parent_anchor)) = (on_line.first(), on_parent.first()) else {
        return reject(RejectCode::Unknown, "leerer Kreuzungs-Locus");
    };

    let canonical = |projected: Vec<Point>| {
        match resolve_crosspoint(&IntersectionResult::from_points(projected), options.snap_tolerance)
        {
            Ok(Some(p)) => Ok(p),
            Ok(None) | Err(_) => reject(RejectCode::SelfIntersects, "Kreuzung ist mehrdeutig"),
        }
    };

    Ok(Crossing {
        on_line: line_anchor,
        on_parent: parent_anchor,
        line_point: canonical(on_line)?,
        parent_point: canonical(on_parent)?,
    })
}

fn project_all(points: &[Point], curve: &Curve) -> Vec<Point> {
    points
        .iter()
        .filter_map(|&p| nearest_point_on(curve, p))
        .collect()
}

/// Wählt das Teilstück, auf dem `point` liegt (erstes gewinnt).
fn piece_containing(a: Curve, b: Curve, point: Point, tolerance: f64) -> Option<Curve> {
    if distance_point_curve(point, &a) < tolerance {
        Some(a)
    } else if distance_point_curve(point, &b) < tolerance {
        Some(b)
    } else {
        None
    }
}

/// Wählt den Bogen, dessen Endpunkte nicht an der Naht des Eltern-Rings liegen.
///
/// Liegt eine Kreuzung nahe der Naht, können beide Bögen die Naht berühren;
/// dann gibt es keine eindeutige Wahl.
fn arc_away_from_seam(parent: &Curve, q0: Curve, q1: Curve, tolerance: f64) -> Option<Curve> {
    let (seam_start, seam_end) = (parent.first()?, parent.last()?);
    let touches_seam = |piece: &Curve| {
        [piece.first(), piece.last()]
            .into_iter()
            .flatten()
            .any(|end| end.distance(seam_start) < tolerance || end.distance(seam_end) < tolerance)
    };

    match (touches_seam(&q0), touches_seam(&q1)) {
        (true, false) => Some(q1),
        (false, true) => Some(q0),
        _ => None,
    }
}

/// Linienstück + Bogen (in passender Richtung) zu einem geschlossenen Ring.
fn stitch(kept_line: Curve, arc: &Curve) -> Curve {
    let mut child = kept_line;
    let Some(tip) = child.last() else {
        return child;
    };
    let forward = match (arc.first(), arc.last()) {
        (Some(start), Some(end)) => tip.distance(start) < tip.distance(end),
        _ => true,
    };
    if forward {
        child.extend_joined(arc.points().iter().copied());
    } else {
        child.extend_joined(arc.reversed().into_points());
    }
    child.closed()
}
