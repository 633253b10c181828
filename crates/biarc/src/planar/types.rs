//! Plane value types and tolerances.
//!
//! - `GeomCfg`: centralizes epsilons for parallelism, zero tests and segment length.
//! - `Segment`: directed segment `start → end`.
//! - `Arc`: counter-clockwise circular arc in center/radius/angle form.
//! - `Turn`: travel orientation along an arc.

use std::f64::consts::TAU;

use super::complex::{normalize, Vec2};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Absolute threshold on `|cross(d0, d1)|` below which two lines are parallel.
    pub eps_parallel: f64,
    /// Magnitude below which a complex coefficient counts as zero.
    pub eps_zero: f64,
    /// Minimum segment length accepted at the connector boundary.
    pub eps_length: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_parallel: 1e-6,
            eps_zero: 1e-12,
            eps_length: 1e-12,
        }
    }
}

/// Directed line segment `start → end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    #[inline]
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
    /// Unit direction; non-finite for a zero-length segment.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        normalize(self.end - self.start)
    }
}

impl From<(Vec2, Vec2)> for Segment {
    #[inline]
    fn from((start, end): (Vec2, Vec2)) -> Self {
        Self::new(start, end)
    }
}

/// Circular arc swept counter-clockwise from `start_angle` to `end_angle`.
///
/// Invariants (for arcs built by the connector):
/// - `radius >= 0`.
/// - `0 <= end_angle - start_angle <= 2π`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: Vec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.sweep() * self.radius
    }
    #[inline]
    pub fn point_at(&self, theta: f64) -> Vec2 {
        self.center + Vec2::new(theta.cos(), theta.sin()) * self.radius
    }
    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.point_at(self.start_angle)
    }
    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.point_at(self.end_angle)
    }
    pub fn is_finite(&self) -> bool {
        self.center.x.is_finite()
            && self.center.y.is_finite()
            && self.radius.is_finite()
            && self.start_angle.is_finite()
            && self.end_angle.is_finite()
    }
    /// `n + 1` evenly spaced points, from start to end or end to start when `reversed`.
    pub fn sample(&self, n: usize, reversed: bool) -> Vec<Vec2> {
        let n = n.max(1);
        let step = self.sweep() / (n as f64);
        (0..=n)
            .map(|k| {
                let k = if reversed { n - k } else { k };
                self.point_at(self.start_angle + step * (k as f64))
            })
            .collect()
    }
}

/// Direction of travel along an arc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Counter-clockwise: travel follows increasing angle.
    Left,
    /// Clockwise: travel follows decreasing angle.
    Right,
}

/// Lift `end` by one full turn when it lies below `start`.
#[inline]
pub(crate) fn unwrap_sweep(start: f64, end: f64) -> f64 {
    if end < start {
        end + TAU
    } else {
        end
    }
}
