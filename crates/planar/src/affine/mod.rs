//! 2D affine transforms (six-coefficient `Matrix2D`) and their application.
//!
//! Purpose
//! - Apply `x ↦ (x*m11 + y*m21 + m31, x*m12 + y*m22 + m32)` to one vector, into a
//!   caller-owned output, or across ranges of slices without allocating.
//!
//! Batch semantics
//! - Ranges are validated before the first write; a bad index or length returns
//!   `TransformError::OutOfBounds` and leaves the destination untouched.
//! - `transform_range_within` covers the "source is destination" case: every output
//!   slot is computed from the original source value, even for overlapping ranges.
//!
//! Code cross-refs: `types::{Matrix2D, TransformError}`, `crate::vec2`

mod apply;
mod types;

pub use apply::{
    transform, transform_in_place, transform_into, transform_range, transform_range_within,
    transform_slice,
};
pub use types::{Matrix2D, Side, TransformError};

#[cfg(test)]
mod tests;
