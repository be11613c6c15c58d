use super::*;
use crate::Vec2;
use nalgebra::{vector, Vector3};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn sentinel() -> Vec2 {
    Vec2::new(-99.0, -99.0)
}

fn sample_matrix() -> Matrix2D {
    Matrix2D::new(2.0, 0.5, -1.0, 3.0, 10.0, -4.0)
}

fn points(n: usize) -> Vec<Vec2> {
    (0..n).map(|i| vector![i as f32, 1.0 - 2.0 * i as f32]).collect()
}

#[test]
fn transform_matches_formula() {
    let m = sample_matrix();
    let p = vector![1.5, -2.0];
    let q = transform(p, &m);
    // (1.5*2 + -2*-1 + 10, 1.5*0.5 + -2*3 - 4)
    assert_eq!(q, vector![15.0, -9.25]);
    assert_eq!(m.apply(p), q);
}

#[test]
fn identity_leaves_point_unchanged() {
    let p = vector![3.25, -7.5];
    assert_eq!(transform(p, &Matrix2D::identity()), p);
    assert_eq!(transform(p, &Matrix2D::default()), p);
}

#[test]
fn out_param_is_bit_identical() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..128 {
        let m = Matrix2D::from_array([
            rng.gen_range(-5.0f32..5.0),
            rng.gen_range(-5.0f32..5.0),
            rng.gen_range(-5.0f32..5.0),
            rng.gen_range(-5.0f32..5.0),
            rng.gen_range(-50.0f32..50.0),
            rng.gen_range(-50.0f32..50.0),
        ]);
        let p = Vec2::new(rng.gen_range(-100.0f32..100.0), rng.gen_range(-100.0f32..100.0));
        let mut out = sentinel();
        transform_into(p, &m, &mut out);
        let q = transform(p, &m);
        assert_eq!(out.x.to_bits(), q.x.to_bits());
        assert_eq!(out.y.to_bits(), q.y.to_bits());
    }
}

#[test]
fn out_param_overwrites_previous_contents() {
    let m = sample_matrix();
    let mut out = vector![f32::NAN, f32::INFINITY];
    transform_into(vector![1.5, -2.0], &m, &mut out);
    assert_eq!(out, vector![15.0, -9.25]);
}

#[test]
fn agrees_with_homogeneous_form() {
    let m = sample_matrix();
    let h = m.to_homogeneous();
    let p = vector![0.75, 4.0];
    let r = h.transpose() * Vector3::new(p.x, p.y, 1.0);
    let q = transform(p, &m);
    assert!((r.x - q.x).abs() < 1e-5 && (r.y - q.y).abs() < 1e-5);
    assert_eq!(r.z, 1.0);
}

#[test]
fn constructors() {
    let p = vector![1.0, 2.0];
    assert_eq!(
        transform(p, &Matrix2D::from_translation(vector![3.0, -1.0])),
        vector![4.0, 1.0]
    );
    assert_eq!(
        transform(p, &Matrix2D::from_scale(vector![2.0, 0.5])),
        vector![2.0, 1.0]
    );
    let r = transform(vector![1.0, 0.0], &Matrix2D::from_rotation(std::f32::consts::FRAC_PI_2));
    assert!(r.x.abs() < 1e-6 && (r.y - 1.0).abs() < 1e-6);
    let m = sample_matrix();
    assert_eq!(Matrix2D::from_array(m.to_array()), m);
}

#[test]
fn range_writes_only_target_slots() {
    let m = sample_matrix();
    let src = points(5);
    let mut dst = vec![sentinel(); 6];
    transform_range(&src, 1, &m, &mut dst, 2, 3).unwrap();
    assert_eq!(dst[0], sentinel());
    assert_eq!(dst[1], sentinel());
    for k in 0..3 {
        assert_eq!(dst[2 + k], transform(src[1 + k], &m));
    }
    assert_eq!(dst[5], sentinel());
}

#[test]
fn in_place_matches_separate_destination() {
    let m = sample_matrix();
    let orig = points(5);
    for (src_index, dst_index, length) in [(1, 2, 3), (2, 0, 3), (0, 0, 5), (1, 1, 3), (0, 4, 1)] {
        let mut separate = orig.clone();
        transform_range(&orig, src_index, &m, &mut separate, dst_index, length).unwrap();
        let mut aliased = orig.clone();
        transform_range_within(&mut aliased, src_index, &m, dst_index, length).unwrap();
        assert_eq!(aliased, separate, "src={src_index} dst={dst_index} len={length}");
    }
    let mut whole = orig.clone();
    transform_in_place(&mut whole, &m);
    let mut expected = vec![sentinel(); 5];
    transform_slice(&orig, &m, &mut expected).unwrap();
    assert_eq!(whole, expected);
}

#[test]
fn zero_length_is_noop() {
    let m = sample_matrix();
    let src = points(5);
    let mut dst = vec![sentinel(); 3];
    transform_range(&src, 5, &m, &mut dst, 3, 0).unwrap();
    transform_range(&src, 0, &m, &mut dst, 0, 0).unwrap();
    assert!(dst.iter().all(|p| *p == sentinel()));
    transform_slice(&[], &m, &mut dst).unwrap();
    assert!(dst.iter().all(|p| *p == sentinel()));
    let mut buf = points(2);
    transform_range_within(&mut buf, 1, &m, 0, 0).unwrap();
    assert_eq!(buf, points(2));
}

#[test]
fn out_of_bounds_reports_side_and_writes_nothing() {
    let m = sample_matrix();
    let src = points(5);
    let mut dst = vec![sentinel(); 5];

    let err = transform_range(&src, 3, &m, &mut dst, 0, 3).unwrap_err();
    assert_eq!(
        err,
        TransformError::OutOfBounds {
            side: Side::Source,
            index: 3,
            length: 3,
            len: 5
        }
    );
    let err = transform_range(&src, 0, &m, &mut dst, 4, 2).unwrap_err();
    assert!(matches!(
        err,
        TransformError::OutOfBounds {
            side: Side::Destination,
            ..
        }
    ));
    // index + length overflows usize
    assert!(transform_range(&src, usize::MAX, &m, &mut dst, 0, 2).is_err());
    assert!(dst.iter().all(|p| *p == sentinel()));

    // short destination
    let mut short = vec![sentinel(); 4];
    assert!(transform_slice(&src, &m, &mut short).is_err());
    assert!(short.iter().all(|p| *p == sentinel()));

    let mut buf = points(5);
    assert!(transform_range_within(&mut buf, 0, &m, 3, 3).is_err());
    assert_eq!(buf, points(5));
}

#[test]
fn error_message_names_the_side() {
    let err = TransformError::OutOfBounds {
        side: Side::Destination,
        index: 4,
        length: 2,
        len: 5,
    };
    let msg = err.to_string();
    assert!(msg.starts_with("destination range"));
    assert!(msg.contains("length 5"));
}

#[test]
fn non_finite_propagates() {
    let q = transform(vector![f32::NAN, 1.0], &Matrix2D::identity());
    assert!(q.x.is_nan());
    // 0 * inf in the off-diagonal term
    let r = transform(vector![f32::INFINITY, 0.0], &Matrix2D::identity());
    assert_eq!(r.x, f32::INFINITY);
    assert!(r.y.is_nan());
}

proptest! {
    #[test]
    fn within_equals_separate_or_rejects(
        src_index in 0usize..10,
        dst_index in 0usize..10,
        length in 0usize..10,
    ) {
        let m = sample_matrix();
        let orig = points(8);
        let mut separate = orig.clone();
        let expected = transform_range(&orig, src_index, &m, &mut separate, dst_index, length);
        let mut aliased = orig.clone();
        let got = transform_range_within(&mut aliased, src_index, &m, dst_index, length);
        prop_assert_eq!(got, expected);
        if got.is_ok() {
            prop_assert_eq!(aliased, separate);
        } else {
            prop_assert_eq!(aliased, orig);
        }
    }
}
