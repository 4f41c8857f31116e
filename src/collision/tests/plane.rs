use crate::collision::*;
use crate::geometry::Vec3;
use crate::shapes::{BoundingBox, BoundingSphere, Plane, PlaneIntersectionType};
use assert_approx_eq::assert_approx_eq;

#[test]
fn plane_point_classification() {
    let plane = Plane::new(&Vec3::unit_z(), -1.0);
    assert_eq!(
        plane_intersects_point(&plane, &Vec3::new(0.0, 0.0, 2.0)),
        PlaneIntersectionType::Front
    );
    assert_eq!(
        plane_intersects_point(&plane, &Vec3::new(0.0, 0.0, 0.0)),
        PlaneIntersectionType::Back
    );
    assert_eq!(
        plane_intersects_point(&plane, &Vec3::new(5.0, -5.0, 1.0)),
        PlaneIntersectionType::Intersecting
    );
}

#[test]
fn plane_point_exact_without_tolerance() {
    let plane = Plane::new(&Vec3::unit_z(), 0.0);
    assert_eq!(
        plane_intersects_point(&plane, &Vec3::new(0.0, 0.0, 1e-7)),
        PlaneIntersectionType::Front
    );
}

#[test]
fn plane_point_negated_swaps_sides() {
    let plane = Plane::new(&Vec3::new(1.0, 2.0, -1.0).normalized(), 0.5);
    let negated = plane.negate();
    let points = [
        Vec3::new(3.0, 1.0, 0.0),
        Vec3::new(-3.0, -1.0, 0.0),
        Vec3::new(0.0, 0.0, 10.0),
    ];
    for point in points.iter() {
        let expected = match plane_intersects_point(&plane, point) {
            PlaneIntersectionType::Front => PlaneIntersectionType::Back,
            PlaneIntersectionType::Back => PlaneIntersectionType::Front,
            PlaneIntersectionType::Intersecting => PlaneIntersectionType::Intersecting,
        };
        assert_eq!(plane_intersects_point(&negated, point), expected);
    }
}

#[test]
fn plane_plane_parallel() {
    let plane1 = Plane::new(&Vec3::unit_y(), 0.0);
    let plane2 = Plane::new(&Vec3::unit_y(), -5.0);
    assert!(!plane_intersects_plane(&plane1, &plane2));
    assert_eq!(plane_intersects_plane_line(&plane1, &plane2), None);
    let opposite = Plane::new(&-Vec3::unit_y(), 1.0);
    assert!(!plane_intersects_plane(&plane1, &opposite));
}

#[test]
fn plane_plane_line_lies_on_both_planes() {
    // x = 2 and y = 3 meet along the line (2, 3, t)
    let plane1 = Plane::new(&Vec3::unit_x(), -2.0);
    let plane2 = Plane::new(&Vec3::unit_y(), -3.0);
    assert!(plane_intersects_plane(&plane1, &plane2));
    let line = plane_intersects_plane_line(&plane1, &plane2).unwrap();
    assert_approx_eq!(line.position.x, 2.0);
    assert_approx_eq!(line.position.y, 3.0);
    assert_approx_eq!(line.position.z, 0.0);
    assert_approx_eq!(line.direction.length(), 1.0);
    assert_approx_eq!(line.direction.z.abs(), 1.0);
}

#[test]
fn plane_plane_line_oblique() {
    let plane1 = Plane::from_point_normal(&Vec3::new(1.0, 1.0, 1.0), &Vec3::unit_z());
    let plane2 = Plane::from_point_normal(
        &Vec3::new(-2.0, 0.0, 0.0),
        &Vec3::new(1.0, 1.0, 0.0).normalized(),
    );
    let line = plane_intersects_plane_line(&plane1, &plane2).unwrap();
    for distance in [0.0, 1.0, -7.5].iter() {
        let point = line.point_along(*distance);
        assert_approx_eq!(distance_plane_point(&plane1, &point), 0.0, 1e-5);
        assert_approx_eq!(distance_plane_point(&plane2, &point), 0.0, 1e-5);
    }
    assert!(line.direction.is_normalized());
}

#[test]
fn plane_triangle_classification() {
    let plane = Plane::new(&Vec3::unit_y(), 0.0);
    let above = [
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 2.0, 0.0),
        Vec3::new(0.0, 3.0, 1.0),
    ];
    assert_eq!(
        plane_intersects_triangle(&plane, &above[0], &above[1], &above[2]),
        PlaneIntersectionType::Front
    );
    let below = [
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(1.0, -2.0, 0.0),
        Vec3::new(0.0, -3.0, 1.0),
    ];
    assert_eq!(
        plane_intersects_triangle(&plane, &below[0], &below[1], &below[2]),
        PlaneIntersectionType::Back
    );
    assert_eq!(
        plane_intersects_triangle(&plane, &above[0], &below[1], &above[2]),
        PlaneIntersectionType::Intersecting
    );
    // a vertex touching the plane
    assert_eq!(
        plane_intersects_triangle(&plane, &Vec3::zero(), &above[1], &above[2]),
        PlaneIntersectionType::Intersecting
    );
}

#[test]
fn plane_box_classification() {
    let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::one());
    let front = Plane::new(&Vec3::unit_x(), 1.0);
    assert_eq!(plane_intersects_box(&front, &bbox), PlaneIntersectionType::Front);
    let back = Plane::new(&Vec3::unit_x(), -2.0);
    assert_eq!(plane_intersects_box(&back, &bbox), PlaneIntersectionType::Back);
    let crossing = Plane::new(&Vec3::new(1.0, 1.0, 1.0).normalized(), -0.5);
    assert_eq!(
        plane_intersects_box(&crossing, &bbox),
        PlaneIntersectionType::Intersecting
    );
}

#[test]
fn plane_box_negative_normal() {
    let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::one());
    // -x + 2 = 0: the box at x in [0, 1] is on the positive side
    let plane = Plane::new(&-Vec3::unit_x(), 2.0);
    assert_eq!(plane_intersects_box(&plane, &bbox), PlaneIntersectionType::Front);
    let plane = Plane::new(&-Vec3::unit_x(), -3.0);
    assert_eq!(plane_intersects_box(&plane, &bbox), PlaneIntersectionType::Back);
}

#[test]
fn plane_sphere_classification() {
    let plane = Plane::new(&Vec3::unit_y(), 0.0);
    let front = BoundingSphere::new(&Vec3::new(0.0, 3.0, 0.0), 1.0);
    assert_eq!(plane_intersects_sphere(&plane, &front), PlaneIntersectionType::Front);
    let back = BoundingSphere::new(&Vec3::new(0.0, -3.0, 0.0), 1.0);
    assert_eq!(plane_intersects_sphere(&plane, &back), PlaneIntersectionType::Back);
    let touching = BoundingSphere::new(&Vec3::new(0.0, 1.0, 0.0), 1.0);
    assert_eq!(
        plane_intersects_sphere(&plane, &touching),
        PlaneIntersectionType::Intersecting
    );
}
