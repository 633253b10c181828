//! Turn a meeting point into two tangent arcs and a score.

use crate::planar::{
    dot, intersect_lines, is_finite, normalize, unwrap_sweep, Arc, Complex2, GeomCfg, Turn, Vec2,
};

use super::candidates::Frame;
use super::types::{Candidate, Strategy};

/// Build the arcs implied by meeting point `x`.
///
/// The tangent at `x` of the circle touching segment 0 at `p0` is `v²/d0`
/// (the reflection of `d0` across the chord `p0 → x`). Both centers lie on
/// the normal to that tangent through `x`. Returns `None` for a non-finite
/// `x` or when either center does not exist.
pub(crate) fn evaluate_in_frame(
    frame: &Frame,
    x: Vec2,
    strategy: Strategy,
    cfg: &GeomCfg,
) -> Option<Candidate> {
    if !is_finite(x) {
        return None;
    }
    let Frame { p0, p1, d0, d1, .. } = *frame;
    let v = normalize(x - p0);
    let connection = v.cmul(&v).cdiv(&d0);
    let normal = connection.rot90();

    let c0 = intersect_lines(p0, d0.rot90(), x, normal, cfg.eps_parallel)?;
    let c1 = intersect_lines(p1, d1.rot90(), x, normal, cfg.eps_parallel)?;
    let r0 = (c0 - x).norm();
    let r1 = (c1 - x).norm();

    // Arc 0 runs p0 → x; stored counter-clockwise.
    let (turn0, s0, e0) = orient(d0, c0 - p0, (x - c0).arg(), (p0 - c0).arg());
    // Arc 1 runs x → p1.
    let (turn1, s1, e1) = orient(d1, c1 - p1, (p1 - c1).arg(), (x - c1).arg());

    let arc0 = Arc {
        center: c0,
        radius: r0,
        start_angle: s0,
        end_angle: e0,
    };
    let arc1 = Arc {
        center: c1,
        radius: r1,
        start_angle: s1,
        end_angle: e1,
    };
    Some(Candidate {
        meeting_point: x,
        arc0,
        arc1,
        turn0,
        turn1,
        score: arc0.length() + arc1.length(),
        strategy,
    })
}

/// Order the two endpoint angles so the counter-clockwise sweep covers the arc.
///
/// `(a, b)` is the pair for clockwise travel. When the center lies to the left
/// of `dir` at the tangent point (`to_center` rotated by 90° opposes `dir`),
/// travel is counter-clockwise and the pair is swapped. The end angle is then
/// lifted by 2π if it lies below the start.
fn orient(dir: Vec2, to_center: Vec2, a: f64, b: f64) -> (Turn, f64, f64) {
    let (turn, start, end) = if dot(dir, to_center.rot90()) < 0.0 {
        (Turn::Left, b, a)
    } else {
        (Turn::Right, a, b)
    };
    (turn, start, unwrap_sweep(start, end))
}
