//! Zentrale Konfiguration der Kurven-Engine.
//!
//! `EngineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::bail;
use serde::{Deserialize, Serialize};

// ── Toleranzen ──────────────────────────────────────────────────────

/// Nachbarschafts-Toleranz in Pixeln: ab hier gelten Teilstücke als aneinanderliegend.
pub const CLOSE_TOLERANCE: f64 = 0.1;
/// Fang-Toleranz in Pixeln: Rauschen innerhalb dieses Abstands wird zu einem Punkt zusammengefasst.
pub const SNAP_TOLERANCE: f64 = 1.0;

// ── Gesten ──────────────────────────────────────────────────────────

/// Mindestanzahl an Punkten einer Freihand-Geste zum Schließen eines Umrisses.
pub const MIN_GESTURE_POINTS: usize = 4;

// ── Objekte ─────────────────────────────────────────────────────────

/// Rand (Pixel) um das Begrenzungsrechteck für den Zoom-Ausschnitt.
pub const ZOOM_BUFFER: f64 = 50.0;
/// Anzahl der Klassen beim Start.
pub const CLASS_COUNT: u32 = 2;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `outline_annotator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Toleranz für Nachbarschaft von Teilstücken (Pixel)
    pub close_tolerance: f64,
    /// Toleranz für das Zusammenfassen verrauschter Schnittpunkte (Pixel, pro Achse)
    pub snap_tolerance: f64,
    /// Mindestanzahl Punkte einer Geste ohne Eltern-Umriss
    #[serde(default = "default_min_gesture_points")]
    pub min_gesture_points: usize,
    /// Zoom-Rand um neue Umrisse
    #[serde(default = "default_zoom_buffer")]
    pub zoom_buffer: f64,
    /// Anzahl verfügbarer Klassen
    #[serde(default = "default_class_count")]
    pub class_count: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            close_tolerance: CLOSE_TOLERANCE,
            snap_tolerance: SNAP_TOLERANCE,
            min_gesture_points: MIN_GESTURE_POINTS,
            zoom_buffer: ZOOM_BUFFER,
            class_count: CLASS_COUNT,
        }
    }
}

/// Serde-Default für `min_gesture_points` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_min_gesture_points() -> usize {
    MIN_GESTURE_POINTS
}

/// Serde-Default für `zoom_buffer`.
fn default_zoom_buffer() -> f64 {
    ZOOM_BUFFER
}

/// Serde-Default für `class_count`.
fn default_class_count() -> u32 {
    CLASS_COUNT
}

impl EngineOptions {
    /// Prüft die Werte auf Verwendbarkeit durch die Engine.
    ///
    /// Beide Toleranzen müssen endlich und positiv sein, die Fang-Toleranz
    /// darf nicht kleiner als die Nachbarschafts-Toleranz sein.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("close_tolerance", self.close_tolerance),
            ("snap_tolerance", self.snap_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                bail!("{} muss positiv sein (ist {})", name, value);
            }
        }
        if self.snap_tolerance < self.close_tolerance {
            bail!(
                "snap_tolerance ({}) kleiner als close_tolerance ({})",
                self.snap_tolerance,
                self.close_tolerance
            );
        }
        if self.min_gesture_points < MIN_GESTURE_POINTS {
            bail!(
                "min_gesture_points muss mindestens {} sein (ist {})",
                MIN_GESTURE_POINTS,
                self.min_gesture_points
            );
        }
        if !self.zoom_buffer.is_finite() || self.zoom_buffer < 0.0 {
            bail!("zoom_buffer darf nicht negativ sein (ist {})", self.zoom_buffer);
        }
        if self.class_count == 0 {
            bail!("class_count muss mindestens 1 sein");
        }
        Ok(())
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler oder ungültigen Werten: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        self.validate()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("outline_annotator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("outline_annotator.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("outline_annotator_missing_options.toml");
        let _ = std::fs::remove_file(&path);

        assert_eq!(EngineOptions::load_from_file(&path), EngineOptions::default());
    }

    #[test]
    fn test_older_files_without_new_keys_still_load() {
        let opts: EngineOptions = toml::from_str("close_tolerance = 0.2\nsnap_tolerance = 2.0\n")
            .expect("TOML sollte parsen");

        assert_eq!(opts.close_tolerance, 0.2);
        assert_eq!(opts.snap_tolerance, 2.0);
        assert_eq!(opts.min_gesture_points, MIN_GESTURE_POINTS);
        assert_eq!(opts.class_count, CLASS_COUNT);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineOptions::default().validate().is_ok());
    }

    #[test]
    fn test_non_positive_or_inverted_tolerances_are_invalid() {
        let zero_close = EngineOptions {
            close_tolerance: 0.0,
            ..EngineOptions::default()
        };
        let nan_snap = EngineOptions {
            snap_tolerance: f64::NAN,
            ..EngineOptions::default()
        };
        let inverted = EngineOptions {
            close_tolerance: 2.0,
            snap_tolerance: 1.0,
            ..EngineOptions::default()
        };
        let no_classes = EngineOptions {
            class_count: 0,
            ..EngineOptions::default()
        };

        assert!(zero_close.validate().is_err());
        assert!(nan_snap.validate().is_err());
        assert!(inverted.validate().is_err());
        assert!(no_classes.validate().is_err());
    }

    #[test]
    fn test_invalid_file_values_fall_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "outline_annotator_invalid_options_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "close_tolerance = -1.0\nsnap_tolerance = 1.0\n")
            .expect("Schreiben sollte klappen");

        assert_eq!(EngineOptions::load_from_file(&path), EngineOptions::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_options_are_not_saved() {
        let path = std::env::temp_dir().join(format!(
            "outline_annotator_unsaved_options_{}.toml",
            std::process::id()
        ));
        let opts = EngineOptions {
            min_gesture_points: 2,
            ..EngineOptions::default()
        };

        assert!(opts.save_to_file(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_and_load_keep_values() {
        let path = std::env::temp_dir().join(format!(
            "outline_annotator_options_{}.toml",
            std::process::id()
        ));
        let opts = EngineOptions {
            class_count: 5,
            ..EngineOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern sollte klappen");

        assert_eq!(EngineOptions::load_from_file(&path), opts);
        let _ = std::fs::remove_file(&path);
    }
}
