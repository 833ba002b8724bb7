//! Crossing-free segment arrangement over a square boundary.
//!
//! Purpose
//! - Own the mutable segment sets (boundary edges + user strokes) and keep
//!   them free of undetected interior crossings: every insertion splits both
//!   the inserted stroke and whatever it crosses at the intersection points.
//!
//! Why tagged references
//! - Boundary and user segments live in separate collections that mutate
//!   together during a split pass. `SegmentRef` names a segment by collection
//!   plus index, so split bookkeeping never compares raw list lengths.

mod engine;
mod types;

pub use engine::ArrangementEngine;
pub use types::SegmentRef;
