//! Curated call surface for framework code (renderer, collision helpers,
//! transform hierarchy).
//!
//! Prefer these re-exports over reaching into `vec2`/`affine` directly; the
//! module paths underneath may move.

// Vector utilities
pub use crate::vec2::{
    cross, half_vector, is_triangle_ccw, normalize, normalize_with, normalized, normalized_with,
    perpendicular, perpendicular_between, round, rounded, to_vec3, truncate, truncated, VecCfg,
    HALF_VECTOR, NORMALIZE_EPS,
};
// Affine application
pub use crate::affine::{
    transform, transform_in_place, transform_into, transform_range, transform_range_within,
    transform_slice, Matrix2D, Side, TransformError,
};
pub use crate::{Vec2, Vec3};
