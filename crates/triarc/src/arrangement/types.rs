//! Identifier types for segments inside the arrangement.

use crate::geom::Point;

/// Reference to a segment by owning collection and index within it.
///
/// The derived `Ord` sorts all boundary refs before all user refs, each by
/// ascending index; the split pass relies on that to apply in-place
/// replacements from the back of each collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentRef {
    Boundary(usize),
    User(usize),
}

/// One intersection found while probing a new stroke against the arrangement.
#[derive(Clone, Copy, Debug)]
pub(super) struct Hit {
    pub target: SegmentRef,
    pub at: Point,
}
