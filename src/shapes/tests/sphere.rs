use crate::geometry::{Ray, Vec3};
use crate::shapes::{BoundingBox, BoundingSphere, ContainmentType, Plane, PlaneIntersectionType};
use crate::utility::Scalar;
use assert_approx_eq::assert_approx_eq;

#[test]
fn sphere_new() {
    let sphere = BoundingSphere::new(&Vec3::new(1.0, 2.0, 3.0), 4.0);
    assert_eq!(sphere.center, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(sphere.radius, 4.0);
}

#[test]
fn sphere_from_points() {
    let points = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 3.0, 0.0),
        Vec3::new(0.0, -3.0, 0.0),
    ];
    let sphere = BoundingSphere::from_points(&points).unwrap();
    assert_eq!(sphere.center, Vec3::zero());
    assert_eq!(sphere.radius, 3.0);
    for point in points.iter() {
        assert_eq!(sphere.contains_point(point), ContainmentType::Contains);
    }
}

#[test]
fn sphere_from_points_empty() {
    assert!(BoundingSphere::from_points(&[]).is_err());
}

#[test]
fn sphere_from_box() {
    let bbox = BoundingBox::new(&Vec3::new(-1.0, -1.0, -1.0), &Vec3::one());
    let sphere = BoundingSphere::from_box(&bbox);
    assert_eq!(sphere.center, Vec3::zero());
    assert_approx_eq!(sphere.radius, (3.0 as Scalar).sqrt(), 1e-5);
}

#[test]
fn sphere_merge_disjoint() {
    let sphere0 = BoundingSphere::new(&Vec3::zero(), 1.0);
    let sphere1 = BoundingSphere::new(&Vec3::new(0.0, 10.0, 0.0), 2.0);
    let merged = sphere0.merge(&sphere1);
    assert_eq!(merged.radius, 6.5);
    assert_eq!(merged.center, Vec3::new(0.0, 5.5, 0.0));
}

#[test]
fn sphere_merge_contained() {
    let big = BoundingSphere::new(&Vec3::zero(), 10.0);
    let small = BoundingSphere::new(&Vec3::new(1.0, 0.0, 0.0), 1.0);
    assert_eq!(big.merge(&small), big);
    assert_eq!(small.merge(&big), big);
}

#[test]
fn sphere_delegates_to_collision() {
    let sphere = BoundingSphere::new(&Vec3::zero(), 2.0);
    let ray = Ray::new(&Vec3::new(-10.0, 0.0, 0.0), &Vec3::unit_x());
    assert_eq!(sphere.intersects_ray(&ray), Some(8.0));

    let plane = Plane::new(&Vec3::unit_y(), -3.0);
    assert_eq!(sphere.intersects_plane(&plane), PlaneIntersectionType::Back);

    assert!(sphere.intersects_triangle(
        &Vec3::new(-5.0, 1.0, -5.0),
        &Vec3::new(5.0, 1.0, -5.0),
        &Vec3::new(0.0, 1.0, 5.0),
    ));
    assert_eq!(
        sphere.contains_triangle(
            &Vec3::new(-0.5, 0.0, 0.0),
            &Vec3::new(0.5, 0.0, 0.0),
            &Vec3::new(0.0, 0.5, 0.0),
        ),
        ContainmentType::Contains
    );

    let bbox = BoundingBox::new(&Vec3::new(1.0, 1.0, 1.0), &Vec3::new(3.0, 3.0, 3.0));
    assert!(sphere.intersects_box(&bbox));
    assert_eq!(sphere.contains_box(&bbox), ContainmentType::Intersects);

    let other = BoundingSphere::new(&Vec3::new(3.0, 0.0, 0.0), 1.5);
    assert!(sphere.intersects_sphere(&other));
    assert_eq!(sphere.contains_sphere(&other), ContainmentType::Intersects);
}

#[test]
fn sphere_display() {
    let sphere = BoundingSphere::new(&Vec3::zero(), 1.5);
    assert_eq!(format!("{}", sphere), "BoundingSphere[Vec3[0, 0, 0], r=1.5]");
}
