//! JSON-Anfrage und -Antwort der Kommandozeile.

use serde::{Deserialize, Serialize};

use crate::core::{Curve, Point};
use crate::engine::{resolve_gesture, RejectCode};

use super::EngineOptions;

/// Eine Geste, optional mit Eltern-Umriss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureRequest {
    /// Geschlossener Eltern-Ring; `None` → Loop-Schließen
    #[serde(default)]
    pub parent: Option<Vec<Point>>,
    pub gesture: Vec<Point>,
}

/// Ergebnis einer Anfrage: neuer Umriss oder Ablehnungsgrund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GestureResponse {
    Accepted { curve: Curve },
    Rejected { code: RejectCode, message: String },
}

impl GestureRequest {
    /// Führt die Anfrage mit den gegebenen Optionen aus.
    pub fn run(&self, options: &EngineOptions) -> GestureResponse {
        let parent = self.parent.as_deref().map(Curve::from);
        match resolve_gesture(parent.as_ref(), &self.gesture, options) {
            Ok(curve) => GestureResponse::Accepted { curve },
            Err(code) => code.into(),
        }
    }
}

impl From<RejectCode> for GestureResponse {
    fn from(code: RejectCode) -> Self {
        Self::Rejected {
            message: code.user_message().to_string(),
            code,
        }
    }
}
