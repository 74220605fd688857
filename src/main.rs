//! Outline Annotator.
//!
//! Löst eine Freihand-Geste aus einer JSON-Datei in einen Umriss auf
//! und gibt das Ergebnis als JSON aus.

use anyhow::Context;
use outline_annotator::{EngineOptions, GestureRequest, GestureResponse};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Outline Annotator v{} startet...", env!("CARGO_PKG_VERSION"));

    let path = std::env::args()
        .nth(1)
        .context("Aufruf: Outline-Annotator <request.json>")?;
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Anfrage-Datei nicht lesbar: {}", path))?;
    let request: GestureRequest = serde_json::from_str(&content)
        .with_context(|| format!("Anfrage-Datei fehlerhaft: {}", path))?;

    let options = EngineOptions::load_from_file(&EngineOptions::config_path());
    let response = request.run(&options);
    if let GestureResponse::Rejected { code, .. } = &response {
        log::info!("Geste abgelehnt: {}", code);
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
