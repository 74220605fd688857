//! Ablehnungs-Codes der Kurven-Engine.

use serde::{Deserialize, Serialize};

/// Grund, warum eine Geste nicht in einen Umriss aufgelöst werden konnte.
///
/// Jede Ablehnung ist endgültig für diese Geste; der Aufrufer verwirft die
/// Vorschau und fordert eine neue Geste an.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectCode {
    /// Zwischenschritt ohne eindeutiges Ergebnis
    #[error("Kurve konnte nicht aufgelöst werden")]
    Unknown,
    /// Geste kreuzt sich selbst mehrdeutig
    #[error("Geste schneidet sich selbst zu oft")]
    SelfIntersects,
    /// Teilungslinie kreuzt den Eltern-Umriss nicht genau zweimal
    #[error("Linie muss den Eltern-Umriss genau zweimal kreuzen")]
    MustCrossTwiceAtEndpoints,
    /// Eltern-Objekt hat noch keinen Umriss
    #[error("Eltern-Objekt hat noch keinen Umriss")]
    NeedsParentFirst,
    /// Teilungslinie kreuzt den Eltern-Umriss mehr als zweimal
    #[error("Linie kreuzt den Eltern-Umriss mehr als zweimal")]
    TooManyCrossings,
}

impl RejectCode {
    /// Stabile Fall-Nummer (0..=4) für Aufrufer, die Meldungen per Index nachschlagen.
    pub fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::SelfIntersects => 1,
            Self::MustCrossTwiceAtEndpoints => 2,
            Self::NeedsParentFirst => 3,
            Self::TooManyCrossings => 4,
        }
    }

    /// Hinweis an den Benutzer, warum neu gezeichnet werden muss.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown problem.",
            Self::SelfIntersects => "Drawn line intersects itself too much.",
            Self::MustCrossTwiceAtEndpoints => {
                "New line needs to intersect main object at start and end point."
            }
            Self::NeedsParentFirst => "Please draw main object first.",
            Self::TooManyCrossings => {
                "Drawn line intersects with main object more than two times."
            }
        }
    }
}

/// Ergebnis eines Engine-Aufrufs.
pub type EngineResult<T> = Result<T, RejectCode>;

/// Protokolliert eine Ablehnung und gibt sie zurück.
pub(crate) fn reject<T>(code: RejectCode, reason: &str) -> EngineResult<T> {
    log::debug!("Geste abgelehnt ({:?}): {}", code, reason);
    Err(code)
}
