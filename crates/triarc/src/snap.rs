//! Cursor snapping for presentation layers.
//!
//! The core only ever sees already-snapped coordinates; these helpers are the
//! pure-geometry half of that contract. A raw cursor position snaps first to
//! the nearest existing endpoint within `point_radius`, then to the closest
//! point on an existing segment within `line_radius`, else it is just rounded
//! to the grid.

use nalgebra::Vector2;

use crate::geom::{Point, Segment};

/// Snap radii, in canvas units. Endpoint snapping wins over line snapping.
#[derive(Clone, Copy, Debug)]
pub struct SnapCfg {
    pub point_radius: f64,
    pub line_radius: f64,
}

impl Default for SnapCfg {
    fn default() -> Self {
        Self {
            point_radius: 20.0,
            line_radius: 10.0,
        }
    }
}

/// Closest point on the closed segment to `p` (clamped parametric
/// projection), rounded to the grid.
pub fn closest_point_on_segment(p: Vector2<f64>, seg: Segment) -> Point {
    let a = seg.start.as_vec();
    let d = seg.end.as_vec() - a;
    let norm2 = d.norm_squared();
    if norm2 <= 0.0 {
        return seg.start;
    }
    let u = ((p - a).dot(&d) / norm2).clamp(0.0, 1.0);
    Point::from_rounded(a + d * u)
}

/// Snap a raw cursor position against the current segments.
///
/// Both passes take the first candidate within radius in segment order, which
/// keeps snapping stable while the cursor moves.
pub fn snap_point(raw: Vector2<f64>, segments: &[Segment], cfg: &SnapCfg) -> Point {
    for s in segments {
        for endpoint in [s.start, s.end] {
            if (raw - endpoint.as_vec()).norm() <= cfg.point_radius {
                return endpoint;
            }
        }
    }
    for s in segments {
        let closest = closest_point_on_segment(raw, *s);
        if (raw - closest.as_vec()).norm() <= cfg.line_radius {
            return closest;
        }
    }
    Point::from_rounded(raw)
}
