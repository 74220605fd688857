//! Kurven-Engine: Freihand-Gesten zu Umrissen auflösen.
//!
//! Reine, synchrone Funktionen ohne Zustand zwischen Aufrufen.

pub mod loop_closer;
pub mod orchestrator;
pub mod region_splitter;
pub mod reject;
pub mod resolver;

pub use loop_closer::close_loop;
pub use orchestrator::{apply_gesture, resolve_gesture, resolve_loop, resolve_split};
pub use region_splitter::split_region;
pub use reject::{EngineResult, RejectCode};
pub use resolver::{resolve_crosspoint, AmbiguousIntersection};
