use crate::geometry::{Ray, Vec3, Vec4};
use crate::shapes::{BoundingBox, BoundingSphere, Plane, PlaneIntersectionType};
use assert_approx_eq::assert_approx_eq;

#[test]
fn plane_new() {
    let plane = Plane::new(&Vec3::unit_y(), 2.0);
    assert_eq!(plane.normal, Vec3::unit_y());
    assert_eq!(plane.d, 2.0);
}

#[test]
fn plane_from_point_normal() {
    let plane = Plane::from_point_normal(&Vec3::new(0.0, 0.0, 4.0), &Vec3::unit_z());
    assert_eq!(plane.d, -4.0);
    assert_eq!(plane.dot_coordinate(&Vec3::new(7.0, -3.0, 4.0)), 0.0);
    assert_eq!(plane.dot_coordinate(&Vec3::new(0.0, 0.0, 6.0)), 2.0);
}

#[test]
fn plane_from_points_winding() {
    let p1 = Vec3::new(0.0, 2.0, 0.0);
    let p2 = Vec3::new(0.0, 2.0, 1.0);
    let p3 = Vec3::new(1.0, 2.0, 0.0);
    let plane = Plane::from_points(&p1, &p2, &p3);
    assert_eq!(plane.normal, Vec3::unit_y());
    assert_eq!(plane.d, -2.0);

    let reversed = Plane::from_points(&p1, &p3, &p2);
    assert_eq!(reversed.normal, -Vec3::unit_y());
    assert_eq!(reversed.d, 2.0);
}

#[test]
fn plane_from_vec4() {
    let plane = Plane::from_vec4(&Vec4::new(1.0, 0.0, 0.0, -3.0));
    assert_eq!(plane.normal, Vec3::unit_x());
    assert_eq!(plane.d, -3.0);
    assert_eq!(plane.to_vec4(), Vec4::new(1.0, 0.0, 0.0, -3.0));
}

#[test]
fn plane_normalize_scales_d() {
    let plane = Plane::new(&Vec3::new(0.0, 3.0, 4.0), 10.0);
    let normalized = plane.normalized();
    assert_approx_eq!(normalized.normal.y, 0.6);
    assert_approx_eq!(normalized.normal.z, 0.8);
    assert_approx_eq!(normalized.d, 2.0);
    // the receiver is untouched
    assert_eq!(plane.d, 10.0);
}

#[test]
fn plane_normalize_degenerate() {
    let mut plane = Plane::new(&Vec3::zero(), 1.0);
    plane.normalize();
    assert_eq!(plane, Plane::new(&Vec3::zero(), 1.0));
}

#[test]
fn plane_negate() {
    let plane = Plane::new(&Vec3::new(1.0, -2.0, 0.0), 3.0);
    let negated = plane.negate();
    assert_eq!(negated.normal, Vec3::new(-1.0, 2.0, 0.0));
    assert_eq!(negated.d, -3.0);
}

#[test]
fn plane_dot_normal() {
    let plane = Plane::new(&Vec3::new(1.0, 2.0, 3.0), 100.0);
    assert_eq!(plane.dot_normal(&Vec3::new(1.0, 1.0, 1.0)), 6.0);
    assert_eq!(plane.dot_coordinate(&Vec3::new(1.0, 1.0, 1.0)), 106.0);
}

#[test]
fn plane_delegates_to_collision() {
    let plane = Plane::new(&Vec3::unit_z(), 0.0);
    assert_eq!(
        plane.intersects_point(&Vec3::new(0.0, 0.0, 1.0)),
        PlaneIntersectionType::Front
    );
    let ray = Ray::new(&Vec3::new(0.0, 0.0, 4.0), &-Vec3::unit_z());
    assert_eq!(plane.intersects_ray(&ray), Some(4.0));

    let other = Plane::new(&Vec3::unit_x(), 0.0);
    assert!(plane.intersects_plane(&other));
    assert!(plane.intersection_line(&other).is_some());

    assert_eq!(
        plane.intersects_triangle(
            &Vec3::new(0.0, 0.0, -1.0),
            &Vec3::new(1.0, 0.0, 1.0),
            &Vec3::new(0.0, 1.0, 1.0),
        ),
        PlaneIntersectionType::Intersecting
    );

    let bbox = BoundingBox::new(&Vec3::new(0.0, 0.0, 1.0), &Vec3::new(1.0, 1.0, 2.0));
    assert_eq!(plane.intersects_box(&bbox), PlaneIntersectionType::Front);

    let sphere = BoundingSphere::new(&Vec3::new(0.0, 0.0, -3.0), 1.0);
    assert_eq!(plane.intersects_sphere(&sphere), PlaneIntersectionType::Back);
}

#[test]
fn plane_display() {
    let plane = Plane::new(&Vec3::unit_y(), -1.0);
    assert_eq!(format!("{}", plane), "Plane[Vec3[0, 1, 0], d=-1]");
}
