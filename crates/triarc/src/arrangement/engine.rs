//! The arrangement engine: insertion with splitting, undo, reset.

use std::collections::BTreeMap;

use crate::geom::{segment_intersection, GeomCfg, Point, Segment};

use super::types::{Hit, SegmentRef};

/// Mutable planar arrangement: four boundary edges plus user strokes.
///
/// Invariant: after every completed [`add_segment`](Self::add_segment), no two
/// segments in boundary ∪ user cross at a point interior to both. Segments may
/// share endpoints, and duplicates are accepted as-is.
#[derive(Clone, Debug)]
pub struct ArrangementEngine {
    boundary: Vec<Segment>,
    user: Vec<Segment>,
    square: [Segment; 4],
    cfg: GeomCfg,
}

impl ArrangementEngine {
    /// Arrangement around an axis-aligned square with the given min corner
    /// and side length. Coordinates are otherwise unconstrained.
    pub fn new(min: Point, side: i64) -> Self {
        Self::with_cfg(min, side, GeomCfg::default())
    }

    pub fn with_cfg(min: Point, side: i64, cfg: GeomCfg) -> Self {
        let square = square_edges(min, side);
        Self {
            boundary: square.to_vec(),
            user: Vec::new(),
            square,
            cfg,
        }
    }

    /// Boundary edges in current (possibly split) form.
    #[inline]
    pub fn boundary(&self) -> &[Segment] {
        &self.boundary
    }

    /// User strokes in insertion order, in current (possibly split) form.
    #[inline]
    pub fn user(&self) -> &[Segment] {
        &self.user
    }

    /// All current segments, boundary first.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.boundary.iter().chain(self.user.iter()).copied()
    }

    /// Insert a stroke, splitting it and everything it crosses.
    ///
    /// Intersections that land on an endpoint of the hit segment leave that
    /// segment alone. The stroke's own cut points are ordered by squared
    /// distance from its start, and one sub-segment per consecutive pair of
    /// distinct points is appended to the user list.
    pub fn add_segment(&mut self, seg: Segment) {
        debug_assert!(!seg.is_degenerate(), "caller must reject zero-length strokes");

        let hits = self.collect_hits(seg);
        self.split_targets(&hits);

        let mut cuts: Vec<Point> = hits.iter().map(|h| h.at).collect();
        cuts.sort_by_key(|p| p.dist2(seg.start));
        cuts.dedup();

        let mut prev = seg.start;
        for p in cuts.into_iter().chain(std::iter::once(seg.end)) {
            if p != prev {
                self.user.push(Segment::new(prev, p));
                prev = p;
            }
        }
    }

    /// Remove the most recently appended user segment. No-op when empty.
    ///
    /// Splits of pre-existing segments caused by that insertion are not
    /// reverted; only the last appended piece is removed.
    pub fn undo_last(&mut self) -> Option<Segment> {
        self.user.pop()
    }

    /// Drop all user strokes and restore the four original square edges.
    pub fn reset(&mut self) {
        self.user.clear();
        self.boundary.clear();
        self.boundary.extend_from_slice(&self.square);
    }

    /// Probe `seg` against every current segment; keep interior hits only.
    fn collect_hits(&self, seg: Segment) -> Vec<Hit> {
        let boundary = self
            .boundary
            .iter()
            .enumerate()
            .map(|(i, s)| (SegmentRef::Boundary(i), *s));
        let user = self
            .user
            .iter()
            .enumerate()
            .map(|(i, s)| (SegmentRef::User(i), *s));

        let mut hits = Vec::new();
        for (target, existing) in boundary.chain(user) {
            if let Some(at) = segment_intersection(seg, existing, &self.cfg) {
                if existing.has_endpoint(at) {
                    continue;
                }
                hits.push(Hit { target, at });
            }
        }
        hits
    }

    /// Replace every hit segment in place by its chain of sub-segments.
    ///
    /// Hits are grouped per target so a target crossed more than once (only
    /// possible via duplicate segments) still splits correctly, and targets
    /// are processed back-to-front per collection so pending indices stay
    /// valid while the owning `Vec` grows.
    fn split_targets(&mut self, hits: &[Hit]) {
        let mut by_target: BTreeMap<SegmentRef, Vec<Point>> = BTreeMap::new();
        for h in hits {
            by_target.entry(h.target).or_default().push(h.at);
        }
        for (target, cuts) in by_target.into_iter().rev() {
            match target {
                SegmentRef::Boundary(i) => {
                    let chain = split_chain(self.boundary[i], cuts);
                    self.boundary.splice(i..=i, chain);
                }
                SegmentRef::User(i) => {
                    let chain = split_chain(self.user[i], cuts);
                    self.user.splice(i..=i, chain);
                }
            }
        }
    }
}

/// Sub-segments of `seg` cut at `cuts`, ordered from `seg.start`.
fn split_chain(seg: Segment, mut cuts: Vec<Point>) -> Vec<Segment> {
    cuts.sort_by_key(|p| p.dist2(seg.start));
    cuts.dedup();
    let mut out = Vec::with_capacity(cuts.len() + 1);
    let mut prev = seg.start;
    for p in cuts.into_iter().chain(std::iter::once(seg.end)) {
        if p != prev {
            out.push(Segment::new(prev, p));
            prev = p;
        }
    }
    out
}

fn square_edges(min: Point, side: i64) -> [Segment; 4] {
    let a = min;
    let b = Point::new(min.x + side, min.y);
    let c = Point::new(min.x + side, min.y + side);
    let d = Point::new(min.x, min.y + side);
    [
        Segment::new(a, b),
        Segment::new(b, c),
        Segment::new(c, d),
        Segment::new(d, a),
    ]
}
