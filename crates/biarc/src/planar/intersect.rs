use super::complex::{cross, Vec2};
use super::types::GeomCfg;

/// Intersection of the lines `p0 + s·d0` and `p1 + t·d1`.
///
/// Returns `None` when `|cross(d0, d1)| < eps` (parallel or coincident) or
/// when the cross product is not finite. `eps` is absolute, so directions
/// should be unit length or close to it.
pub fn intersect_lines(p0: Vec2, d0: Vec2, p1: Vec2, d1: Vec2, eps: f64) -> Option<Vec2> {
    let c = cross(d0, d1);
    if !c.is_finite() || c.abs() < eps {
        return None;
    }
    let t = cross(d1, p0 - p1) / c;
    Some(p0 + d0 * t)
}

/// [`intersect_lines`] with `GeomCfg::default().eps_parallel`.
#[inline]
pub fn intersect_lines_default(p0: Vec2, d0: Vec2, p1: Vec2, d1: Vec2) -> Option<Vec2> {
    intersect_lines(p0, d0, p1, d1, GeomCfg::default().eps_parallel)
}
