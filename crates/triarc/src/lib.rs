//! Planar segment arrangement and triangle detection for a drawing sandbox.
//!
//! A presentation layer feeds already-snapped strokes into an
//! [`arrangement::ArrangementEngine`], which keeps the segment set crossing-free
//! by splitting at intersection points. After each structural change the caller
//! rebuilds a [`triangles::TriangleIndex`] from the current segments and asks it
//! for the 3-cycles of the point graph, classified acute or not for rendering.
//!
//! The crate owns no window, input loop, or renderer; those live in whatever
//! front end drives it (see the `cli` crate for a batch one).

pub mod arrangement;
pub mod geom;
pub mod snap;
pub mod stroke;
pub mod triangles;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use arrangement::ArrangementEngine;
pub use geom::{GeomCfg, Point, Segment};
pub use nalgebra::Vector2 as Vec2;
pub use triangles::{Triangle, TriangleIndex};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arrangement::{ArrangementEngine, SegmentRef};
    pub use crate::geom::{segment_intersection, GeomCfg, Point, Segment};
    pub use crate::snap::{closest_point_on_segment, snap_point, SnapCfg};
    pub use crate::stroke::{draw_stroke, ReplayToken, StrokeCfg};
    pub use crate::triangles::{Triangle, TriangleIndex};
    pub use nalgebra::Vector2 as Vec2;
}
