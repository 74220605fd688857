//! Outline Annotator Library.
//! Kurven-Engine für Freihand-Umrisse als Library exportiert für Tests und Wiederverwendung.

pub mod core;
pub mod engine;
pub mod shared;

pub use core::{
    AnnotationObject, BoundingBox, Contour, Curve, IntersectionResult, ObjectId, ObjectTable,
    Point,
};
pub use engine::{
    apply_gesture, close_loop, resolve_crosspoint, resolve_gesture, resolve_loop, resolve_split,
    split_region, AmbiguousIntersection, EngineResult, RejectCode,
};
pub use shared::{EngineOptions, GestureRequest, GestureResponse};
