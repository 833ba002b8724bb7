//! Triangle detection over the point graph of an arrangement.
//!
//! Purpose
//! - Derive a deduplicated point list plus a symmetric adjacency relation
//!   from the current segments, enumerate all 3-cycles, and classify each as
//!   acute or not for rendering.
//!
//! The index is rebuilt from scratch after every structural change, never
//! patched incrementally; it retains no references into the arrangement.

mod index;

pub use index::{Triangle, TriangleIndex};
