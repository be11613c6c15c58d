//! 2D vector and affine-transform primitives for per-frame rendering code.
//!
//! Layout
//! - `vec2`: numerically safe pointwise operations on `Vec2` (normalize, round,
//!   truncate, cross, perpendiculars, winding).
//! - `affine`: the six-coefficient `Matrix2D` and its application to single
//!   vectors and to ranges of slices.
//!
//! Conventions
//! - Every mutating operation has a value-returning twin (`normalize`/`normalized`,
//!   `round`/`rounded`, `truncate`/`truncated`, `transform_into`/`transform`).
//! - The sign conventions of `cross`, `perpendicular_between` and `is_triangle_ccw`
//!   are load-bearing for winding-dependent callers and must not be "fixed".

pub mod affine;
pub mod api;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 2-component single-precision vector used throughout the crate.
pub type Vec2 = nalgebra::Vector2<f32>;
/// 3-component vector; only produced by widening a `Vec2`.
pub type Vec3 = nalgebra::Vector3<f32>;

pub use affine::{Matrix2D, Side, TransformError};
pub use vec2::{VecCfg, NORMALIZE_EPS};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::affine::{
        transform, transform_in_place, transform_into, transform_range, transform_range_within,
        transform_slice, Matrix2D, TransformError,
    };
    pub use crate::vec2::{
        cross, half_vector, is_triangle_ccw, normalize, normalized, perpendicular,
        perpendicular_between, round, rounded, to_vec3, truncate, truncated, VecCfg,
    };
    pub use crate::{Vec2, Vec3};
}
