use crate::{Vec2, Vec3};

use super::types::{VecCfg, HALF_VECTOR};

/// Scale `v` to unit length in place, or set it to exactly zero when
/// `|v| <= cfg.eps_norm`.
///
/// Finite input never produces NaN or infinity. A NaN magnitude fails the
/// `>` test and also lands on zero.
#[inline]
pub fn normalize_with(v: &mut Vec2, cfg: &VecCfg) {
    let mag = v.norm();
    if mag > cfg.eps_norm {
        v.x /= mag;
        v.y /= mag;
    } else {
        v.x = 0.0;
        v.y = 0.0;
    }
}

/// Value form of [`normalize_with`].
#[inline]
pub fn normalized_with(mut v: Vec2, cfg: &VecCfg) -> Vec2 {
    normalize_with(&mut v, cfg);
    v
}

/// In-place safe normalization with the default tolerance.
#[inline]
pub fn normalize(v: &mut Vec2) {
    normalize_with(v, &VecCfg::default());
}

/// Safe normalization with the default tolerance; `(0,0)` maps to `(0,0)`.
#[inline]
pub fn normalized(v: Vec2) -> Vec2 {
    normalized_with(v, &VecCfg::default())
}

/// Round each component to the nearest integer, ties to even
/// (`-1.5 → -2`, `2.5 → 2`).
#[inline]
pub fn round(v: &mut Vec2) {
    v.x = v.x.round_ties_even();
    v.y = v.y.round_ties_even();
}

#[inline]
pub fn rounded(mut v: Vec2) -> Vec2 {
    round(&mut v);
    v
}

/// Drop the fractional part of each component (toward zero, so `-1.5 → -1`).
///
/// Not a mathematical floor. NaN and infinities pass through unchanged.
#[inline]
pub fn truncate(v: &mut Vec2) {
    v.x = v.x.trunc();
    v.y = v.y.trunc();
}

#[inline]
pub fn truncated(mut v: Vec2) -> Vec2 {
    truncate(&mut v);
    v
}

/// The constant `(0.5, 0.5)`.
#[inline]
pub fn half_vector() -> Vec2 {
    Vec2::new(HALF_VECTOR[0], HALF_VECTOR[1])
}

/// Pseudo-cross product `u.y*v.x - u.x*v.y`.
///
/// Note the operand order: this is the negation of the usual `u.x*v.y - u.y*v.x`.
#[inline]
pub fn cross(u: Vec2, v: Vec2) -> f32 {
    u.y * v.x - u.x * v.y
}

/// `(second.y - first.y, -second.x - first.x)`.
///
/// The second term is `-second.x - first.x`, not `-(second.x - first.x)`, so this
/// is not a rotation of `second - first`. Callers depend on the exact formula;
/// changing it needs a compatibility review of every call site.
#[inline]
pub fn perpendicular_between(first: Vec2, second: Vec2) -> Vec2 {
    Vec2::new(second.y - first.y, -second.x - first.x)
}

/// Rotate 90° counterclockwise: `(-v.y, v.x)`.
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

#[inline]
pub fn to_vec3(v: Vec2) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

/// Winding of the ordered triple `(a, center, c)` under this crate's [`cross`] sign.
///
/// True iff `cross(center - a, c - center) < 0`; collinear triples are not CCW.
#[inline]
pub fn is_triangle_ccw(a: Vec2, center: Vec2, c: Vec2) -> bool {
    cross(center - a, c - center) < 0.0
}
