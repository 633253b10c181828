//! Complex-style arithmetic on plane vectors.
//!
//! A `Vec2` doubles as the complex number `x + iy`. Multiplying by a unit
//! vector rotates by its angle, multiplying by a general vector rotates and
//! scales; dividing undoes that. This is the only reason the complex view
//! exists here: rotation-and-scale composition in one product.

use nalgebra::Vector2;

/// Point, free vector, or complex number `x + iy`.
pub type Vec2 = Vector2<f64>;

/// Complex operations on `Vec2`.
///
/// Addition, subtraction, negation, scaling by `f64` and the Euclidean norm
/// come from nalgebra directly.
pub trait Complex2 {
    /// `(a+bi)(c+di)`.
    fn cmul(&self, rhs: &Self) -> Self;
    /// `(a+bi)/(c+di)`. Non-finite components when `rhs` is zero.
    fn cdiv(&self, rhs: &Self) -> Self;
    /// Principal square root: `√|z|·(cos θ/2, sin θ/2)` with `θ = atan2(y, x)`.
    fn csqrt(&self) -> Self;
    /// Multiplication by `i`: `(x, y) ↦ (−y, x)`.
    fn rot90(&self) -> Self;
    /// Polar angle `atan2(y, x)` in `(−π, π]`.
    fn arg(&self) -> f64;
}

impl Complex2 for Vec2 {
    #[inline]
    fn cmul(&self, rhs: &Self) -> Self {
        Vec2::new(
            self.x * rhs.x - self.y * rhs.y,
            self.x * rhs.y + self.y * rhs.x,
        )
    }

    #[inline]
    fn cdiv(&self, rhs: &Self) -> Self {
        let denom = rhs.x * rhs.x + rhs.y * rhs.y;
        Vec2::new(
            (self.x * rhs.x + self.y * rhs.y) / denom,
            (self.y * rhs.x - self.x * rhs.y) / denom,
        )
    }

    #[inline]
    fn csqrt(&self) -> Self {
        let r = self.norm().sqrt();
        let theta = self.arg() / 2.0;
        Vec2::new(r * theta.cos(), r * theta.sin())
    }

    #[inline]
    fn rot90(&self) -> Self {
        self.cmul(&Vec2::new(0.0, 1.0))
    }

    #[inline]
    fn arg(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// `a.x·b.x + a.y·b.y`.
#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Signed area of the parallelogram spanned by `a` and `b`: `a.x·b.y − a.y·b.x`.
/// Positive for a→b counterclockwise, zero for parallel vectors.
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// `v` scaled by `1/|v|`. Non-finite for the zero vector; callers avoid it.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v * (1.0 / v.norm())
}

/// True when both components are finite.
#[inline]
pub(crate) fn is_finite(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
