//! Einstiegspunkt der Engine: wählt Loop-Schließen oder Region-Teilen.

use crate::core::{Contour, Curve, ObjectId, ObjectTable, Point};
use crate::shared::EngineOptions;

use super::loop_closer::close_loop;
use super::reject::{reject, EngineResult, RejectCode};
use super::region_splitter::split_region;

/// Schließt eine Freihand-Geste mit Standard-Optionen zu einem Ring.
pub fn resolve_loop(gesture: &[Point]) -> EngineResult<Curve> {
    close_loop(gesture, &EngineOptions::default())
}

/// Schneidet mit Standard-Optionen eine Kind-Region aus `parent`.
pub fn resolve_split(parent: &Curve, gesture: &[Point]) -> EngineResult<Curve> {
    split_region(parent, gesture, &EngineOptions::default())
}

/// Löst eine Geste auf: mit Eltern-Umriss wird geteilt, ohne wird geschlossen.
pub fn resolve_gesture(
    parent: Option<&Curve>,
    gesture: &[Point],
    options: &EngineOptions,
) -> EngineResult<Curve> {
    match parent {
        Some(parent) => split_region(parent, gesture, options),
        None => close_loop(gesture, options),
    }
}

/// Wendet eine Geste auf ein Objekt der Tabelle an.
///
/// Bei Erfolg erhält das Objekt einen neuen Umriss (und einen Zoom-Ausschnitt,
/// falls noch keiner gesetzt ist). Bei Ablehnung bleibt die Tabelle unverändert.
/// `image_size` begrenzt den Zoom-Ausschnitt.
pub fn apply_gesture(
    table: &mut ObjectTable,
    target: ObjectId,
    gesture: &[Point],
    image_size: Point,
    options: &EngineOptions,
) -> EngineResult<()> {
    let Some(object) = table.get(target) else {
        log::warn!("Geste für unbekanntes Objekt {}", target);
        return Err(RejectCode::Unknown);
    };
    let parent = object.parent;
    let class_label = object.class_label;

    let curve = match parent {
        None => close_loop(gesture, options)?,
        Some(parent_id) => {
            let Some(parent_contour) = table.parent_contour(target) else {
                return reject(
                    RejectCode::NeedsParentFirst,
                    &format!("Eltern-Objekt {} ohne Umriss", parent_id),
                );
            };
            split_region(parent_contour.curve(), gesture, options)?
        }
    };

    let Some(contour) = Contour::from_ring(curve, target, class_label, parent) else {
        return reject(RejectCode::Unknown, "Ergebnis ist kein gültiger Umriss");
    };
    let zoom = contour.bbox.zoom_box(options.zoom_buffer, image_size);

    let Some(object) = table.get_mut(target) else {
        return Err(RejectCode::Unknown);
    };
    if object.zoom.is_none() {
        object.zoom = Some(zoom);
    }
    object.contour = Some(contour);
    log::info!("Umriss für {} übernommen", object.name());
    Ok(())
}
