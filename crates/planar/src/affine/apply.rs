use crate::Vec2;

use super::types::{Matrix2D, Side, TransformError};

/// `(x*m11 + y*m21 + m31, x*m12 + y*m22 + m32)`.
#[inline]
pub fn transform(position: Vec2, matrix: &Matrix2D) -> Vec2 {
    Vec2::new(
        position.x * matrix.m11 + position.y * matrix.m21 + matrix.m31,
        position.x * matrix.m12 + position.y * matrix.m22 + matrix.m32,
    )
}

/// Write `transform(position, matrix)` into `out`.
#[inline]
pub fn transform_into(position: Vec2, matrix: &Matrix2D, out: &mut Vec2) {
    *out = transform(position, matrix);
}

#[inline]
fn check_range(side: Side, index: usize, length: usize, len: usize) -> Result<(), TransformError> {
    match index.checked_add(length) {
        Some(end) if end <= len => Ok(()),
        _ => Err(TransformError::OutOfBounds {
            side,
            index,
            length,
            len,
        }),
    }
}

/// Transform `src[src_index..src_index + length]` into `dst[dst_index..dst_index + length]`.
///
/// Both ranges are checked before anything is written. `length == 0` writes nothing.
pub fn transform_range(
    src: &[Vec2],
    src_index: usize,
    matrix: &Matrix2D,
    dst: &mut [Vec2],
    dst_index: usize,
    length: usize,
) -> Result<(), TransformError> {
    check_range(Side::Source, src_index, length, src.len())?;
    check_range(Side::Destination, dst_index, length, dst.len())?;
    tracing::trace!(src_index, dst_index, length, "transform_range");
    let src = &src[src_index..src_index + length];
    let dst = &mut dst[dst_index..dst_index + length];
    for (p, out) in src.iter().zip(dst.iter_mut()) {
        transform_into(*p, matrix, out);
    }
    Ok(())
}

/// Same as [`transform_range`] with source and destination in one buffer.
///
/// Each output slot is computed from the value the source slot held before the
/// call. Overlapping ranges shifted forward (`dst_index > src_index`) are walked
/// back to front so no source slot is overwritten before it is read.
pub fn transform_range_within(
    buf: &mut [Vec2],
    src_index: usize,
    matrix: &Matrix2D,
    dst_index: usize,
    length: usize,
) -> Result<(), TransformError> {
    check_range(Side::Source, src_index, length, buf.len())?;
    check_range(Side::Destination, dst_index, length, buf.len())?;
    tracing::trace!(src_index, dst_index, length, "transform_range_within");
    if dst_index > src_index {
        for i in (0..length).rev() {
            let p = buf[src_index + i];
            transform_into(p, matrix, &mut buf[dst_index + i]);
        }
    } else {
        for i in 0..length {
            let p = buf[src_index + i];
            transform_into(p, matrix, &mut buf[dst_index + i]);
        }
    }
    Ok(())
}

/// Transform all of `src` into the front of `dst`; `dst` must be at least as long.
pub fn transform_slice(
    src: &[Vec2],
    matrix: &Matrix2D,
    dst: &mut [Vec2],
) -> Result<(), TransformError> {
    transform_range(src, 0, matrix, dst, 0, src.len())
}

/// Transform every element of `buf` in place.
pub fn transform_in_place(buf: &mut [Vec2], matrix: &Matrix2D) {
    for p in buf.iter_mut() {
        let v = *p;
        transform_into(v, matrix, p);
    }
}
