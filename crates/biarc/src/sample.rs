//! Random segment pairs (replayable).
//!
//! Purpose
//! - Deterministic inputs for benches, demos and seeded sweeps. Every draw is
//!   indexed by a `ReplayToken`, so any single pair can be regenerated.
//!
//! Model
//! - Segment 0 ends at a uniform point of `[-extent, extent]²` and points in
//!   a uniform random direction. Segment 1 starts at distance `gap` from
//!   segment 0's end and its direction turns away by an angle in `turn`.
//! - Lengths are uniform in `length`. All ranges are clamped to stay
//!   non-degenerate.

use std::f64::consts::{PI, TAU};
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::planar::{Segment, Vec2};

/// Sampler configuration.
#[derive(Clone, Debug)]
pub struct PairCfg {
    /// Half-width of the box holding segment 0's end.
    pub extent: f64,
    /// Segment lengths.
    pub length: Range<f64>,
    /// Distance between segment 0's end and segment 1's start.
    pub gap: Range<f64>,
    /// Absolute turning angle between the two directions, in `[0, π]`.
    pub turn: Range<f64>,
}

impl Default for PairCfg {
    fn default() -> Self {
        Self {
            extent: 10.0,
            length: 0.5..3.0,
            gap: 0.5..4.0,
            turn: 0.2..2.9,
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    #[inline]
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }
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

fn uniform<R: Rng>(rng: &mut R, r: &Range<f64>, floor: f64) -> f64 {
    let lo = r.start.max(floor);
    let hi = r.end.max(lo);
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

#[inline]
fn unit(theta: f64) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Draw one pair `(segment 0, segment 1)`.
pub fn draw_segment_pair(cfg: &PairCfg, tok: ReplayToken) -> (Segment, Segment) {
    let mut rng = tok.to_std_rng();
    let e = cfg.extent.abs();
    let p0 = if e > 0.0 {
        Vec2::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e))
    } else {
        Vec2::zeros()
    };
    let a0 = rng.gen::<f64>() * TAU;
    let len0 = uniform(&mut rng, &cfg.length, 1e-6);
    let len1 = uniform(&mut rng, &cfg.length, 1e-6);
    let gap = uniform(&mut rng, &cfg.gap, 1e-6);
    let gap_dir = rng.gen::<f64>() * TAU;
    let turn = uniform(&mut rng, &cfg.turn, 0.0).min(PI);
    let turn = if rng.gen::<bool>() { turn } else { -turn };

    let d0 = unit(a0);
    let d1 = unit(a0 + turn);
    let p1 = p0 + unit(gap_dir) * gap;
    (
        Segment::new(p0 - d0 * len0, p0),
        Segment::new(p1, p1 + d1 * len1),
    )
}

/// `count` consecutive pairs starting at `tok`.
pub fn draw_segment_pairs(
    cfg: &PairCfg,
    tok: ReplayToken,
    count: usize,
) -> Vec<(Segment, Segment)> {
    let mut out = Vec::with_capacity(count);
    let mut t = tok;
    for _ in 0..count {
        out.push(draw_segment_pair(cfg, t));
        t = t.next();
    }
    out
}
