//! Integrationstests für den Ablauf über die Objekt-Tabelle:
//! - Wurzel-Objekt per Freihand-Geste umreißen
//! - Kind-Region aus dem Eltern-Umriss schneiden
//! - Ablehnungen lassen die Tabelle unverändert

use approx::assert_abs_diff_eq;
use outline_annotator::{apply_gesture, Curve, EngineOptions, ObjectTable, Point, RejectCode};

const IMAGE_SIZE: Point = Point::new(100.0, 100.0);

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn square() -> Curve {
    Curve::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)])
}

#[test]
fn test_wurzel_objekt_erhaelt_umriss_und_zoom() {
    let options = EngineOptions::default();
    let mut table = ObjectTable::new();
    let root = table.add_object();

    apply_gesture(
        &mut table,
        root,
        &pts(&[(-2.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, -2.0)]),
        IMAGE_SIZE,
        &options,
    )
    .expect("Geste sollte akzeptiert werden");

    let obj = table.get(root).expect("Objekt erwartet");
    let contour = obj.contour.as_ref().expect("Umriss erwartet");
    assert_eq!(contour.curve(), &square());
    assert_eq!(contour.owner, root);
    assert_eq!(contour.parent, None);

    let centroid = contour.centroid.expect("Schwerpunkt erwartet");
    assert_abs_diff_eq!(centroid.x, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(centroid.y, 5.0, epsilon = 1e-9);

    let zoom = obj.zoom.expect("Zoom-Ausschnitt erwartet");
    assert!(zoom.contains(Point::new(0.0, 0.0)) && zoom.contains(Point::new(10.0, 10.0)));
    assert!(zoom.max.x <= IMAGE_SIZE.x && zoom.max.y <= IMAGE_SIZE.y);
}

#[test]
fn test_kind_region_wird_aus_eltern_umriss_geschnitten() {
    let options = EngineOptions::default();
    let mut table = ObjectTable::new();
    let root = table
        .seed_object(square(), None, None)
        .expect("Seed erwartet");
    assert!(table.set_class(root, 1, options.class_count));
    let child = table.add_child(root).expect("Kind erwartet");

    apply_gesture(
        &mut table,
        child,
        &pts(&[(5.0, -1.0), (5.0, 11.0)]),
        IMAGE_SIZE,
        &options,
    )
    .expect("Geste sollte akzeptiert werden");

    let obj = table.get(child).expect("Objekt erwartet");
    assert_eq!(obj.name(), "Object 1.1");
    let contour = obj.contour.as_ref().expect("Umriss erwartet");
    assert_eq!(contour.parent, Some(root));
    assert_eq!(contour.class_label, 1);
    assert_eq!(
        contour.curve().points(),
        pts(&[(5.0, 0.0), (5.0, 10.0), (10.0, 10.0), (10.0, 0.0), (5.0, 0.0)]).as_slice()
    );

    let centroid = contour.centroid.expect("Schwerpunkt erwartet");
    assert_abs_diff_eq!(centroid.x, 7.5, epsilon = 1e-9);
    assert_abs_diff_eq!(centroid.y, 5.0, epsilon = 1e-9);

    // Eltern-Umriss bleibt unangetastet
    let parent_contour = table
        .get(root)
        .and_then(|o| o.contour.as_ref())
        .expect("Eltern-Umriss erwartet");
    assert_eq!(parent_contour.curve(), &square());
}

#[test]
fn test_ablehnung_laesst_tabelle_unveraendert() {
    let options = EngineOptions::default();
    let mut table = ObjectTable::new();
    let root = table
        .seed_object(square(), None, None)
        .expect("Seed erwartet");
    let child = table.add_child(root).expect("Kind erwartet");
    let before = table.get(child).cloned();

    let result = apply_gesture(
        &mut table,
        child,
        &pts(&[(20.0, 20.0), (30.0, 30.0)]),
        IMAGE_SIZE,
        &options,
    );

    assert_eq!(result, Err(RejectCode::MustCrossTwiceAtEndpoints));
    assert_eq!(table.get(child).cloned(), before);
}

#[test]
fn test_kind_ohne_eltern_umriss_braucht_erst_eltern() {
    let mut table = ObjectTable::new();
    let root = table.add_object();
    let child = table.add_child(root).expect("Kind erwartet");

    let result = apply_gesture(
        &mut table,
        child,
        &pts(&[(5.0, -1.0), (5.0, 11.0)]),
        IMAGE_SIZE,
        &EngineOptions::default(),
    );

    assert_eq!(result, Err(RejectCode::NeedsParentFirst));
    assert_eq!(result.unwrap_err().code(), 3);
}

#[test]
fn test_bestehender_zoom_wird_nicht_ueberschrieben() {
    let options = EngineOptions::default();
    let mut table = ObjectTable::new();
    let root = table.add_object();
    let fixed = outline_annotator::BoundingBox {
        min: Point::new(1.0, 2.0),
        max: Point::new(3.0, 4.0),
    };
    if let Some(obj) = table.get_mut(root) {
        obj.zoom = Some(fixed);
    }

    apply_gesture(
        &mut table,
        root,
        &pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
        IMAGE_SIZE,
        &options,
    )
    .expect("Geste sollte akzeptiert werden");

    assert_eq!(table.get(root).and_then(|o| o.zoom), Some(fixed));
}
