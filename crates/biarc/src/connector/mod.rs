//! Tangent-arc connector between two directed segments.
//!
//! Purpose
//! - Join segment 0's end to segment 1's start with two circular arcs: the
//!   first tangent to segment 0 at its end, the second tangent to segment 1
//!   at its start, meeting with a common tangent at an interior point.
//!
//! Model
//! - Candidate meeting points come from two producers (`Strategy`): the roots
//!   of a complex quadratic weighted by `tension`, and the intersection of
//!   the half-angle directions towards the chord.
//! - Every candidate goes through one evaluation routine that builds the two
//!   tangent circles, orders the arc angles along the direction of travel and
//!   scores the pair by total arc length. The shortest pair wins; the first
//!   candidate wins ties.
//!
//! Failure policy
//! - Degenerate segments and non-finite tension are rejected up front.
//! - Candidates without both tangent circles are dropped; if none survive the
//!   call fails with `NoFeasibleConnector`.
//! - A winner with non-finite values is returned inside `InvalidGeometry`.
//!
//! Code cross-refs: `planar::{intersect_lines, Complex2, Arc, Turn}`.

mod candidates;
mod evaluate;
mod types;

pub use types::{Candidate, ConnectError, ConnectOpts, Connector, Strategy};

use crate::planar::{GeomCfg, Segment, Vec2};
use candidates::Frame;

fn validate(seg0: &Segment, seg1: &Segment, opts: &ConnectOpts) -> Result<(), ConnectError> {
    for (index, seg) in [seg0, seg1].into_iter().enumerate() {
        let length = seg.length();
        if !length.is_finite() || length <= opts.geom.eps_length {
            return Err(ConnectError::DegenerateSegment { index, length });
        }
    }
    if !opts.tension.is_finite() {
        return Err(ConnectError::InvalidTension {
            tension: opts.tension,
        });
    }
    Ok(())
}

/// Strictly smaller score, with NaN ranked last.
#[inline]
fn beats(score: f64, best: f64) -> bool {
    score < best || (best.is_nan() && !score.is_nan())
}

/// Candidate meeting points in evaluation order.
pub fn candidates(
    seg0: &Segment,
    seg1: &Segment,
    opts: ConnectOpts,
) -> Result<Vec<(Strategy, Vec2)>, ConnectError> {
    validate(seg0, seg1, &opts)?;
    Ok(candidates::collect(&Frame::new(seg0, seg1), &opts))
}

/// Arcs and score implied by meeting point `x`; `None` if either tangent circle is missing.
pub fn evaluate(
    seg0: &Segment,
    seg1: &Segment,
    x: Vec2,
    strategy: Strategy,
    cfg: GeomCfg,
) -> Option<Candidate> {
    evaluate::evaluate_in_frame(&Frame::new(seg0, seg1), x, strategy, &cfg)
}

/// Connect `seg0.end` to `seg1.start` with two tangent arcs.
pub fn connect(
    seg0: &Segment,
    seg1: &Segment,
    opts: ConnectOpts,
) -> Result<Connector, ConnectError> {
    validate(seg0, seg1, &opts)?;
    let frame = Frame::new(seg0, seg1);
    let xs = candidates::collect(&frame, &opts);

    let mut best: Option<Candidate> = None;
    for &(strategy, x) in &xs {
        let Some(cand) = evaluate::evaluate_in_frame(&frame, x, strategy, &opts.geom) else {
            tracing::debug!(?strategy, x = ?(x.x, x.y), "candidate dropped: no tangent circles");
            continue;
        };
        tracing::trace!(?strategy, score = cand.score, "candidate");
        if best.as_ref().map_or(true, |b| beats(cand.score, b.score)) {
            best = Some(cand);
        }
    }

    let Some(best) = best else {
        return Err(ConnectError::NoFeasibleConnector {
            candidates: xs.len(),
        });
    };
    let out = Connector::from(best);
    if !out.is_finite() {
        tracing::warn!(arc0 = ?out.arc0, arc1 = ?out.arc1, "invalid connector parameters");
        return Err(ConnectError::InvalidGeometry(Box::new(out)));
    }
    Ok(out)
}

/// [`connect`] with `shortest = true` and `tension = 1`.
pub fn connect_with_defaults(seg0: &Segment, seg1: &Segment) -> Result<Connector, ConnectError> {
    connect(seg0, seg1, ConnectOpts::default())
}

#[cfg(test)]
mod tests;
