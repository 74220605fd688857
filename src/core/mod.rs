//! Core-Domänentypen: Kurven, Geometrie-Kernel, Schnittpunkte, Umrisse, Objekt-Tabelle.

pub mod contour;
pub mod curve;
pub mod geometry;
pub mod intersection;
pub mod object_table;

pub use contour::{BoundingBox, Contour};
pub use curve::Curve;
pub use geometry::{
    closest_point_on_segment, contains_point, distance_curve_curve, distance_point_curve,
    distance_point_segment, is_simple_ring, locate_on_curve, nearest_point_on,
    segment_intersection, snap_to_pixel, split_at, CurveLocation, Point, SegmentHit,
    GEOMETRY_EPSILON,
};
pub use intersection::{cluster_loci, intersect, IntersectionResult};
pub use object_table::{AnnotationObject, ObjectId, ObjectTable};
