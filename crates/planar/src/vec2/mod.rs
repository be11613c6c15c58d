//! Pointwise 2D vector utilities.
//!
//! Purpose
//! - Allocation-free helpers on `Vec2` with explicit numerical-edge-case policy:
//!   normalization never divides by a near-zero magnitude, truncation drops the
//!   fractional part toward zero, rounding ties go to even.
//!
//! Conventions
//! - `cross(u, v) = u.y*v.x - u.x*v.y` (operand order reversed relative to the
//!   textbook 2D cross). `is_triangle_ccw` is defined against this sign.
//! - `perpendicular_between` keeps its asymmetric second term on purpose; any
//!   change to it is a behavior change for winding-dependent callers.
//!
//! Code cross-refs: `types::VecCfg`, `crate::affine`

mod ops;
mod types;

pub use ops::{
    cross, half_vector, is_triangle_ccw, normalize, normalize_with, normalized, normalized_with,
    perpendicular, perpendicular_between, round, rounded, to_vec3, truncate, truncated,
};
pub use types::{VecCfg, HALF_VECTOR, NORMALIZE_EPS};
