//! Planar algebra for the connector.
//!
//! Purpose
//! - One vector type (`Vec2`, nalgebra's `Vector2<f64>`) used as point, free
//!   vector and complex number, with complex-style products exposed through
//!   the `Complex2` trait.
//! - Exact line–line intersection with an explicit "no intersection" result.
//! - Small value types (`Segment`, `Arc`, `Turn`) and tolerances (`GeomCfg`).
//!
//! Conventions
//! - Angles are radians, measured counter-clockwise from +x.
//! - Tolerances are absolute; inputs to `intersect_lines` should be unit
//!   directions.

mod complex;
mod intersect;
mod types;

pub use complex::{cross, dot, normalize, Complex2, Vec2};
pub(crate) use complex::is_finite;
pub use intersect::{intersect_lines, intersect_lines_default};
pub use types::{Arc, GeomCfg, Segment, Turn};
pub(crate) use types::unwrap_sweep;
