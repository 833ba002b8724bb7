//! Point graph with adjacency matrix and 3-cycle enumeration.

use std::collections::HashMap;

use crate::geom::{Point, Segment};

/// Three mutually adjacent points, in enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    /// True iff all three interior angles are strictly acute.
    ///
    /// Walks the directed boundary `a -> b -> c -> a` and takes the dot
    /// product of each edge vector with the next; every interior angle is
    /// acute exactly when all three products are strictly negative. Integer
    /// coordinates make the sign test exact in `i128`.
    pub fn is_acute(&self) -> bool {
        let v0 = edge(self.a, self.b);
        let v1 = edge(self.b, self.c);
        let v2 = edge(self.c, self.a);
        dot(v0, v1) < 0 && dot(v1, v2) < 0 && dot(v2, v0) < 0
    }

    #[inline]
    pub fn points(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }
}

#[inline]
fn edge(from: Point, to: Point) -> (i128, i128) {
    (to.x as i128 - from.x as i128, to.y as i128 - from.y as i128)
}

#[inline]
fn dot(u: (i128, i128), v: (i128, i128)) -> i128 {
    u.0 * v.0 + u.1 * v.1
}

/// Deduplicated points of the current segments plus an n×n boolean adjacency.
///
/// Invariants, by construction: the matrix is symmetric and has no
/// self-loops; point order is first-seen order over the segment list.
#[derive(Clone, Debug, Default)]
pub struct TriangleIndex {
    points: Vec<Point>,
    index_of: HashMap<Point, usize>,
    adj: Vec<bool>,
}

impl TriangleIndex {
    /// Rebuild from scratch over the given segments.
    ///
    /// Safe to call repeatedly with a grown or shrunk segment list; previous
    /// state is discarded entirely.
    pub fn rebuild<'a>(&mut self, segments: impl IntoIterator<Item = &'a Segment>) {
        self.points.clear();
        self.index_of.clear();

        let segments: Vec<Segment> = segments.into_iter().copied().collect();
        for s in &segments {
            self.intern(s.start);
            self.intern(s.end);
        }
        let n = self.points.len();
        self.adj = vec![false; n * n];
        for s in &segments {
            let i = self.index_of[&s.start];
            let j = self.index_of[&s.end];
            if i != j {
                self.adj[i * n + j] = true;
                self.adj[j * n + i] = true;
            }
        }
    }

    fn intern(&mut self, p: Point) -> usize {
        if let Some(&i) = self.index_of.get(&p) {
            return i;
        }
        let i = self.points.len();
        self.points.push(p);
        self.index_of.insert(p, i);
        i
    }

    /// Distinct points in first-seen order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn adjacent(&self, i: usize, j: usize) -> bool {
        self.adj[i * self.points.len() + j]
    }

    /// All 3-cycles, in lexicographic order of their point-index triples.
    pub fn find_triangles(&self) -> Vec<Triangle> {
        let n = self.points.len();
        let mut out = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if !self.adjacent(i, j) {
                    continue;
                }
                for k in (j + 1)..n {
                    if self.adjacent(j, k) && self.adjacent(k, i) {
                        out.push(Triangle {
                            a: self.points[i],
                            b: self.points[j],
                            c: self.points[k],
                        });
                    }
                }
            }
        }
        out
    }
}
