//! Candidate meeting points.
//!
//! Both producers work on the same `Frame`; their outputs are concatenated in
//! a fixed order (algebraic roots first) before evaluation.

use crate::planar::{intersect_lines, normalize, Complex2, GeomCfg, Segment, Vec2};

use super::types::{ConnectOpts, Strategy};

/// Fixed endpoints and unit directions shared by candidate generation and evaluation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    /// Segment 0's end, where the connector starts.
    pub p0: Vec2,
    /// Segment 1's start, where the connector ends.
    pub p1: Vec2,
    pub d0: Vec2,
    pub d1: Vec2,
    /// Unit chord `p0 → p1`; non-finite when the endpoints coincide.
    pub conn: Vec2,
}

impl Frame {
    pub fn new(seg0: &Segment, seg1: &Segment) -> Self {
        Self {
            p0: seg0.end,
            p1: seg1.start,
            d0: seg0.direction(),
            d1: seg1.direction(),
            conn: normalize(seg1.start - seg0.end),
        }
    }
}

impl Strategy {
    /// Candidate meeting points produced by this strategy, in evaluation order.
    pub(crate) fn propose(self, frame: &Frame, opts: &ConnectOpts) -> Vec<Vec2> {
        match self {
            Strategy::Algebraic => algebraic_roots(frame, opts.tension, opts.shortest, &opts.geom),
            Strategy::Geometric => half_angle_meeting(frame, &opts.geom).into_iter().collect(),
        }
    }
}

/// Roots of `a·x² + b·x + c = 0` with
/// `a = d1 − t·d0`, `b = −2(d1·p0 − t·d0·p1)`, `c = d1·p0² − t·d0·p1²`.
///
/// This is `d1·(x − p0)² = t·d0·(x − p1)²`: the tangent directions of the
/// two circles agree at `x`. The `+` root comes first; the `−` root is only
/// added when `shortest` is false. A vanishing `a` falls back to `x = −c/b`.
fn algebraic_roots(frame: &Frame, t: f64, shortest: bool, cfg: &GeomCfg) -> Vec<Vec2> {
    let Frame { p0, p1, d0, d1, .. } = *frame;
    let d0t = d0 * t;
    let a = d1 - d0t;
    let b = (d1.cmul(&p0) - d0t.cmul(&p1)) * -2.0;
    let c = d1.cmul(&p0).cmul(&p0) - d0t.cmul(&p1).cmul(&p1);

    if a.norm() > cfg.eps_zero {
        let delta = b.cmul(&b) - a.cmul(&c) * 4.0;
        let root = delta.csqrt();
        let two_a = a * 2.0;
        let plus = (root - b).cdiv(&two_a);
        if shortest {
            vec![plus]
        } else {
            let minus = (-b - root).cdiv(&two_a);
            vec![plus, minus]
        }
    } else {
        vec![(-c).cdiv(&b)]
    }
}

/// Intersect the line through `p0` along `d0 + conn` with the line through
/// `p1` along `d1 + conn`. At that point both circles are tangent to the chord.
fn half_angle_meeting(frame: &Frame, cfg: &GeomCfg) -> Option<Vec2> {
    let d0r = frame.d0 + frame.conn;
    let d1r = frame.d1 + frame.conn;
    intersect_lines(frame.p0, d0r, frame.p1, d1r, cfg.eps_parallel)
}

/// All candidates in evaluation order, tagged with their producer.
pub(crate) fn collect(frame: &Frame, opts: &ConnectOpts) -> Vec<(Strategy, Vec2)> {
    [Strategy::Algebraic, Strategy::Geometric]
        .into_iter()
        .flat_map(|s| s.propose(frame, opts).into_iter().map(move |x| (s, x)))
        .collect()
}
