//! `Matrix2D` value type and the batch-transform error.

use std::fmt;

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::Vec2;

/// 2D affine transform stored as a 3×2 matrix (row-vector convention).
///
/// The first two rows are the linear part, the third row is the translation:
/// `p' = (x*m11 + y*m21 + m31, x*m12 + y*m22 + m32)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2D {
    pub m11: f32,
    pub m12: f32,
    pub m21: f32,
    pub m22: f32,
    pub m31: f32,
    pub m32: f32,
}

impl Matrix2D {
    #[inline]
    pub fn new(m11: f32, m12: f32, m21: f32, m22: f32, m31: f32, m32: f32) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            m31,
            m32,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn from_translation(t: Vec2) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, t.x, t.y)
    }

    #[inline]
    pub fn from_scale(s: Vec2) -> Self {
        Self::new(s.x, 0.0, 0.0, s.y, 0.0, 0.0)
    }

    /// Counterclockwise rotation by `radians` about the origin.
    #[inline]
    pub fn from_rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Build from six coefficients in `m11, m12, m21, m22, m31, m32` order.
    #[inline]
    pub fn from_array(m: [f32; 6]) -> Self {
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 6] {
        [self.m11, self.m12, self.m21, self.m22, self.m31, self.m32]
    }

    /// Homogeneous 3×3 form `H` with `[x y 1] · H = [x' y' 1]`.
    pub fn to_homogeneous(&self) -> Matrix3<f32> {
        Matrix3::new(
            self.m11, self.m12, 0.0, //
            self.m21, self.m22, 0.0, //
            self.m31, self.m32, 1.0,
        )
    }

    /// Apply to a single position; same as [`super::transform`].
    #[inline]
    pub fn apply(&self, position: Vec2) -> Vec2 {
        super::apply::transform(position, self)
    }
}

impl Default for Matrix2D {
    fn default() -> Self {
        Self::identity()
    }
}

/// Which slice of a batch transform a range check refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Source,
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Destination => f.write_str("destination"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// `index + length` exceeds the slice length (or overflows).
    #[error("{side} range starting at {index} with length {length} is out of bounds for length {len}")]
    OutOfBounds {
        side: Side,
        index: usize,
        length: usize,
        len: usize,
    },
}
