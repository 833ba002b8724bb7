//! Basic value types: grid points, segments, and geometry tolerances.

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Denominator threshold below which two segments count as parallel.
    pub eps_den: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_den: 1e-9 }
    }
}

/// A point on the integer grid. Equality is exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Round an `f64` position to the nearest grid point.
    #[inline]
    pub fn from_rounded(v: Vector2<f64>) -> Self {
        Self {
            x: v.x.round() as i64,
            y: v.y.round() as i64,
        }
    }

    #[inline]
    pub fn as_vec(self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }

    /// Squared distance to `other`, exact in `i128`.
    #[inline]
    pub fn dist2(self, other: Point) -> i128 {
        let dx = self.x as i128 - other.x as i128;
        let dy = self.y as i128 - other.y as i128;
        dx * dx + dy * dy
    }
}

/// An ordered pair of grid points. Immutable value: splitting a segment means
/// replacing it in the owning collection, never mutating it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// True iff `p` equals one of the two endpoints.
    #[inline]
    pub fn has_endpoint(self, p: Point) -> bool {
        p == self.start || p == self.end
    }
}
