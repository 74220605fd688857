//! Integrationstests für das JSON-Format der Kommandozeile.

use outline_annotator::{EngineOptions, GestureRequest, GestureResponse, Point, RejectCode};

fn run_json(json: &str) -> GestureResponse {
    let request: GestureRequest = serde_json::from_str(json).expect("Anfrage sollte parsen");
    request.run(&EngineOptions::default())
}

#[test]
fn test_anfrage_ohne_eltern_schliesst_geste() {
    let response = run_json(r#"{"parent": null, "gesture": [[0,0],[10,0],[10,10],[0,10]]}"#);

    let GestureResponse::Accepted { curve } = response else {
        panic!("Annahme erwartet, erhalten: {response:?}");
    };
    assert_eq!(curve.len(), 5);
    assert_eq!(curve.first(), Some(Point::new(0.0, 0.0)));
    assert!(curve.is_closed());
}

#[test]
fn test_anfrage_mit_eltern_teilt_region() {
    let response = run_json(
        r#"{
            "parent": [[0,0],[10,0],[10,10],[0,10],[0,0]],
            "gesture": [[5,-1],[5,11]]
        }"#,
    );

    let json = serde_json::to_value(&response).expect("JSON erwartet");
    assert_eq!(json["status"], "accepted");
    assert_eq!(
        json["curve"],
        serde_json::json!([[5.0, 0.0], [5.0, 10.0], [10.0, 10.0], [10.0, 0.0], [5.0, 0.0]])
    );
}

#[test]
fn test_ablehnung_enthaelt_code_und_meldung() {
    let response = run_json(
        r#"{
            "parent": [[0,0],[10,0],[10,10],[0,10],[0,0]],
            "gesture": [[2,-1],[2,11],[8,11],[8,-1]]
        }"#,
    );

    assert_eq!(
        response,
        GestureResponse::Rejected {
            code: RejectCode::TooManyCrossings,
            message: RejectCode::TooManyCrossings.user_message().to_string(),
        }
    );

    let json = serde_json::to_value(&response).expect("JSON erwartet");
    assert_eq!(json["code"], "TOO_MANY_CROSSINGS");
}
