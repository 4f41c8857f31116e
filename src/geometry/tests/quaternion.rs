use crate::geometry::{Quaternion, Vec3, Vec4};
use crate::utility::Scalar;
use assert_approx_eq::assert_approx_eq;

#[cfg(not(feature = "double-precision"))]
use std::f32::consts::{FRAC_PI_2, PI};
#[cfg(feature = "double-precision")]
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn quaternion_identity() {
    let q = Quaternion::identity();
    assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 1.0));
    assert!(q.is_identity());
    assert!(q.is_normalized());
    assert_eq!(Quaternion::default(), q);
}

#[test]
fn quaternion_from_vec4() {
    let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
    let q = Quaternion::from_vec4(&v);
    assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(q.to_vec4(), v);
}

#[test]
fn quaternion_length() {
    let q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
    assert_eq!(q.length_squared(), 4.0);
    assert_eq!(q.length(), 2.0);
    assert_eq!(q.normalized(), Quaternion::new(0.5, 0.5, 0.5, 0.5));
}

#[test]
fn quaternion_normalize_too_short() {
    let mut q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    q.normalize();
    assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 0.0));
}

#[test]
fn quaternion_conjugate_invert() {
    let q = Quaternion::new(1.0, -2.0, 3.0, 4.0);
    assert_eq!(q.conjugate(), Quaternion::new(-1.0, 2.0, -3.0, 4.0));

    let unit = Quaternion::rotation_axis(&Vec3::unit_y(), 1.0);
    let inverse = unit.invert();
    let product = unit * inverse;
    assert!(product.is_identity());
}

#[test]
fn quaternion_hamilton_product() {
    let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    // i*j = k, j*i = -k
    assert_eq!(i * j, k);
    assert_eq!(&j * &i, -k);
    assert_eq!(i * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));
}

#[test]
fn quaternion_mul_assign() {
    let mut q = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    q *= Quaternion::new(0.0, 1.0, 0.0, 0.0);
    assert_eq!(q, Quaternion::new(0.0, 0.0, 1.0, 0.0));
}

#[test]
fn quaternion_rotation_axis_angle() {
    let q = Quaternion::rotation_axis(&Vec3::new(0.0, 0.0, 5.0), FRAC_PI_2);
    assert!(q.is_normalized());
    assert_approx_eq!(q.angle(), FRAC_PI_2, 1e-5);
    let axis = q.axis();
    assert_approx_eq!(axis.x, 0.0);
    assert_approx_eq!(axis.y, 0.0);
    assert_approx_eq!(axis.z, 1.0);
}

#[test]
fn quaternion_identity_angle_axis() {
    let q = Quaternion::identity();
    assert_eq!(q.angle(), 0.0);
    assert_eq!(q.axis(), Vec3::unit_x());
}

#[test]
fn quaternion_rotate_vector() {
    let q = Quaternion::rotation_axis(&Vec3::unit_z(), FRAC_PI_2);
    let rotated = q.rotate(&Vec3::unit_x());
    assert_approx_eq!(rotated.x, 0.0);
    assert_approx_eq!(rotated.y, 1.0);
    assert_approx_eq!(rotated.z, 0.0);

    let half_turn = Quaternion::rotation_axis(&Vec3::unit_y(), PI);
    let rotated = half_turn.rotate(&Vec3::new(1.0, 2.0, 0.0));
    assert_approx_eq!(rotated.x, -1.0, 1e-5);
    assert_approx_eq!(rotated.y, 2.0, 1e-5);
    assert_approx_eq!(rotated.z, 0.0, 1e-5);
}

#[test]
fn quaternion_dot() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(-1.0, 0.0, 1.0, 0.5);
    assert_eq!(Quaternion::dot(&a, &b), 4.0);
}

#[test]
fn quaternion_lerp_endpoints() {
    let start = Quaternion::identity();
    let end = Quaternion::rotation_axis(&Vec3::unit_x(), 1.0);
    let at_end = Quaternion::lerp(&start, &end, 1.0);
    assert_approx_eq!(at_end.x, end.x);
    assert_approx_eq!(at_end.w, end.w);
    let middle = Quaternion::lerp(&start, &end, 0.5);
    assert!(middle.is_normalized());
}

#[test]
fn quaternion_lerp_shortest_path() {
    let start = Quaternion::identity();
    let opposite = Quaternion::new(0.0, 0.0, 0.0, -1.0);
    // -q represents the same rotation as q
    let result = Quaternion::lerp(&start, &opposite, 0.5);
    assert_approx_eq!(result.w, 1.0);
}

#[test]
fn quaternion_slerp_halfway() {
    let start = Quaternion::identity();
    let end = Quaternion::rotation_axis(&Vec3::unit_z(), FRAC_PI_2);
    let half = Quaternion::slerp(&start, &end, 0.5);
    let expected = Quaternion::rotation_axis(&Vec3::unit_z(), FRAC_PI_2 * 0.5);
    assert_approx_eq!(half.x, expected.x);
    assert_approx_eq!(half.y, expected.y);
    assert_approx_eq!(half.z, expected.z);
    assert_approx_eq!(half.w, expected.w);
}

#[test]
fn quaternion_slerp_nearly_equal() {
    let start = Quaternion::identity();
    let slerped = Quaternion::slerp(&start, &start, 0.3);
    assert_approx_eq!(slerped.w, 1.0);
    assert_approx_eq!(slerped.length(), 1.0 as Scalar);
}

#[test]
fn quaternion_operators() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(0.5, 0.5, 0.5, 0.5);
    assert_eq!(a + b, Quaternion::new(1.5, 2.5, 3.5, 4.5));
    assert_eq!(a - b, Quaternion::new(0.5, 1.5, 2.5, 3.5));
    assert_eq!(a * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(-a, Quaternion::new(-1.0, -2.0, -3.0, -4.0));
}

#[test]
fn quaternion_componentwise_operators() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(0.5, -1.0, 2.0, 1.0);
    assert_eq!(a + b, Quaternion::new(1.5, 1.0, 5.0, 5.0));
    assert_eq!(&a - &b, Quaternion::new(0.5, 3.0, 1.0, 3.0));
    assert_eq!(a * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(-a, Quaternion::new(-1.0, -2.0, -3.0, -4.0));
}
