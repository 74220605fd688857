//! Geteilte Typen: Laufzeit-Optionen und das JSON-Format der Kommandozeile.

mod gesture_request;
pub mod options;

pub use gesture_request::{GestureRequest, GestureResponse};
pub use options::EngineOptions;
pub use options::{CLOSE_TOLERANCE, SNAP_TOLERANCE};
