//! Parametric line-segment intersection on the grid.

use super::types::{GeomCfg, Point, Segment};

/// Intersection point of two closed segments, rounded to the grid.
///
/// Solves for the line parameters `t` (along `a`) and `u` (along `b`); an
/// intersection exists only if both lie in `[0, 1]`. Parallel and collinear
/// pairs have a vanishing denominator and report `None`, including collinear
/// overlaps. Endpoint touches (`t` or `u` at 0 or 1) do report a point; the
/// caller decides whether those count.
pub fn segment_intersection(a: Segment, b: Segment, cfg: &GeomCfg) -> Option<Point> {
    let p1 = a.start.as_vec();
    let p2 = a.end.as_vec();
    let p3 = b.start.as_vec();
    let p4 = b.end.as_vec();

    let d1 = p1 - p2;
    let d3 = p3 - p4;
    let den = d1.x * d3.y - d1.y * d3.x;
    if den.abs() <= cfg.eps_den {
        return None;
    }

    let w = p1 - p3;
    let t = (w.x * d3.y - w.y * d3.x) / den;
    let u = -(d1.x * w.y - d1.y * w.x) / den;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(Point::from_rounded(p1 + t * (p2 - p1)))
}
