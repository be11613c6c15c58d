//! Tolerances and constants shared by the vector utilities.

use serde::{Deserialize, Serialize};

/// Magnitudes at or below this are treated as zero by `normalize`.
pub const NORMALIZE_EPS: f32 = 1e-5;

/// Components of the constant returned by `half_vector`.
pub const HALF_VECTOR: [f32; 2] = [0.5, 0.5];

/// Vector tolerance configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VecCfg {
    /// Normalization falls back to the zero vector when `|v| <= eps_norm`.
    pub eps_norm: f32,
}

impl Default for VecCfg {
    fn default() -> Self {
        Self {
            eps_norm: NORMALIZE_EPS,
        }
    }
}
