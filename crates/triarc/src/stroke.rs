//! Deterministic random strokes (replay tokens).
//!
//! Purpose
//! - Provide a small, reproducible sampler of strokes inside a canvas window
//!   for benchmarks and stress tests. Determinism uses a replay token
//!   `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Point, Segment};

/// Stroke sampler configuration: the sampling window and a minimum length so
/// draws do not collapse to near-degenerate segments.
#[derive(Clone, Copy, Debug)]
pub struct StrokeCfg {
    pub x_min: f64,
    pub y_min: f64,
    pub side: f64,
    pub min_len: f64,
}

impl Default for StrokeCfg {
    fn default() -> Self {
        Self {
            x_min: 200.0,
            y_min: 200.0,
            side: 400.0,
            min_len: 20.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one random stroke inside the window, at least `min_len` long.
pub fn draw_stroke(cfg: StrokeCfg, tok: ReplayToken) -> Segment {
    let mut rng = tok.to_std_rng();
    let side = cfg.side.max(1.0);
    let min_len = cfg.min_len.clamp(0.0, side / 2.0);
    let mut sample = |rng: &mut StdRng| {
        Point::from_rounded(nalgebra::Vector2::new(
            cfg.x_min + rng.gen::<f64>() * side,
            cfg.y_min + rng.gen::<f64>() * side,
        ))
    };
    for _ in 0..64 {
        let a = sample(&mut rng);
        let b = sample(&mut rng);
        if a != b && (a.dist2(b) as f64).sqrt() >= min_len {
            return Segment::new(a, b);
        }
    }
    // Window too small to honor min_len; fall back to its diagonal.
    Segment::new(
        Point::from_rounded(nalgebra::Vector2::new(cfg.x_min, cfg.y_min)),
        Point::from_rounded(nalgebra::Vector2::new(cfg.x_min + side, cfg.y_min + side)),
    )
}
