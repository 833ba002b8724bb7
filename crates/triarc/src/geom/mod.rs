//! Geometry primitives on the integer grid.
//!
//! Purpose
//! - Provide exact-equality `Point`/`Segment` values plus the parametric
//!   segment-intersection test everything else is built on.
//!
//! Why an integer grid
//! - Endpoint dedup and "did we hit an existing endpoint" checks need exact
//!   equality. Intersection math runs in `f64` (nalgebra), and every produced
//!   coordinate is rounded to the nearest grid unit before it is compared or
//!   stored, so equality is decided once, in one place.

mod intersect;
mod types;

pub use intersect::segment_intersection;
pub use types::{GeomCfg, Point, Segment};
