use crate::collision::*;
use crate::geometry::{Ray, Vec3};
use crate::shapes::{BoundingBox, BoundingSphere, Plane};
use assert_approx_eq::assert_approx_eq;

#[test]
fn ray_point_on_and_off_the_ray() {
    let ray = Ray::new(&Vec3::zero(), &Vec3::unit_x());
    assert!(ray_intersects_point(&ray, &Vec3::zero()));
    assert!(ray_intersects_point(&ray, &Vec3::new(5.0, 0.0, 0.0)));
    assert!(!ray_intersects_point(&ray, &Vec3::new(5.0, 0.1, 0.0)));
    assert!(!ray_intersects_point(&ray, &Vec3::new(-5.0, 0.0, 0.0)));
}

#[test]
fn ray_ray_crossing() {
    let ray1 = Ray::new(&Vec3::zero(), &Vec3::unit_x());
    let ray2 = Ray::new(&Vec3::new(2.0, -3.0, 0.0), &Vec3::unit_y());
    let point = ray_intersects_ray(&ray1, &ray2).unwrap();
    assert_approx_eq!(point.x, 2.0);
    assert_approx_eq!(point.y, 0.0);
    assert_approx_eq!(point.z, 0.0);
}

#[test]
fn ray_ray_skew() {
    let ray1 = Ray::new(&Vec3::zero(), &Vec3::unit_x());
    let ray2 = Ray::new(&Vec3::new(2.0, -3.0, 1.0), &Vec3::unit_y());
    assert_eq!(ray_intersects_ray(&ray1, &ray2), None);
}

#[test]
fn ray_ray_parallel() {
    let ray1 = Ray::new(&Vec3::zero(), &Vec3::unit_x());
    let ray2 = Ray::new(&Vec3::new(0.0, 1.0, 0.0), &Vec3::unit_x());
    assert_eq!(ray_intersects_ray(&ray1, &ray2), None);
}

#[test]
fn ray_ray_parallel_same_origin() {
    let origin = Vec3::new(1.0, 2.0, 3.0);
    let ray1 = Ray::new(&origin, &Vec3::unit_z());
    let ray2 = Ray::new(&origin, &-Vec3::unit_z());
    assert_eq!(ray_intersects_ray(&ray1, &ray2), Some(origin));
}

#[test]
fn ray_plane_hit() {
    let plane = Plane::new(&Vec3::unit_y(), -3.0);
    let ray = Ray::new(&Vec3::new(1.0, 0.0, 1.0), &Vec3::unit_y());
    assert_eq!(ray_intersects_plane(&ray, &plane), Some(3.0));
    assert_eq!(
        ray_intersects_plane_point(&ray, &plane),
        Some(Vec3::new(1.0, 3.0, 1.0))
    );
}

#[test]
fn ray_plane_parallel_or_behind() {
    let plane = Plane::new(&Vec3::unit_y(), -3.0);
    let parallel = Ray::new(&Vec3::zero(), &Vec3::unit_x());
    assert_eq!(ray_intersects_plane(&parallel, &plane), None);
    let away = Ray::new(&Vec3::zero(), &-Vec3::unit_y());
    assert_eq!(ray_intersects_plane(&away, &plane), None);
    assert_eq!(ray_intersects_plane_point(&away, &plane), None);
}

#[test]
fn ray_triangle_both_windings() {
    let v1 = Vec3::new(-1.0, -1.0, 2.0);
    let v2 = Vec3::new(1.0, -1.0, 2.0);
    let v3 = Vec3::new(0.0, 1.0, 2.0);
    let ray = Ray::new(&Vec3::zero(), &Vec3::unit_z());
    let front = ray_intersects_triangle(&ray, &v1, &v2, &v3).unwrap();
    let back = ray_intersects_triangle(&ray, &v1, &v3, &v2).unwrap();
    assert_approx_eq!(front, 2.0);
    assert_approx_eq!(back, 2.0);
    let point = ray_intersects_triangle_point(&ray, &v1, &v2, &v3).unwrap();
    assert_approx_eq!(point.z, 2.0);
}

#[test]
fn ray_triangle_miss() {
    let v1 = Vec3::new(-1.0, -1.0, 2.0);
    let v2 = Vec3::new(1.0, -1.0, 2.0);
    let v3 = Vec3::new(0.0, 1.0, 2.0);
    // outside the edges
    let ray = Ray::new(&Vec3::new(3.0, 0.0, 0.0), &Vec3::unit_z());
    assert_eq!(ray_intersects_triangle(&ray, &v1, &v2, &v3), None);
    // triangle behind the origin
    let ray = Ray::new(&Vec3::zero(), &-Vec3::unit_z());
    assert_eq!(ray_intersects_triangle(&ray, &v1, &v2, &v3), None);
    // parallel to the triangle plane
    let ray = Ray::new(&Vec3::zero(), &Vec3::unit_x());
    assert_eq!(ray_intersects_triangle(&ray, &v1, &v2, &v3), None);
}

#[test]
fn ray_box_unit_box() {
    let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::one());
    let ray = Ray::new(&Vec3::new(0.5, 0.5, -1.0), &Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(ray_intersects_box(&ray, &bbox), Some(1.0));
    assert_eq!(
        ray_intersects_box_point(&ray, &bbox),
        Some(Vec3::new(0.5, 0.5, 0.0))
    );
}

#[test]
fn ray_box_origin_inside() {
    let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::one());
    let ray = Ray::new(&Vec3::new(0.5, 0.5, 0.5), &Vec3::unit_x());
    assert_eq!(ray_intersects_box(&ray, &bbox), Some(0.0));
}

#[test]
fn ray_box_miss() {
    let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::one());
    // parallel to the x slab but outside of it
    let ray = Ray::new(&Vec3::new(2.0, 0.5, -1.0), &Vec3::unit_z());
    assert_eq!(ray_intersects_box(&ray, &bbox), None);
    // diagonal passing beside the box
    let ray = Ray::new(&Vec3::new(-1.0, 3.0, 0.5), &Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(ray_intersects_box(&ray, &bbox), None);
    // box behind the ray
    let ray = Ray::new(&Vec3::new(0.5, 0.5, -1.0), &-Vec3::unit_z());
    assert_eq!(ray_intersects_box(&ray, &bbox), None);
}

#[test]
fn ray_box_negative_direction() {
    let bbox = BoundingBox::new(&Vec3::new(-2.0, -2.0, -2.0), &Vec3::new(-1.0, -1.0, -1.0));
    let ray = Ray::new(&Vec3::new(-1.5, -1.5, 5.0), &-Vec3::unit_z());
    assert_eq!(ray_intersects_box(&ray, &bbox), Some(6.0));
}

#[test]
fn ray_sphere_outside_hit() {
    let sphere = BoundingSphere::new(&Vec3::new(0.0, 0.0, 10.0), 2.0);
    let ray = Ray::new(&Vec3::zero(), &Vec3::unit_z());
    assert_eq!(ray_intersects_sphere(&ray, &sphere), Some(8.0));
    assert_eq!(
        ray_intersects_sphere_point(&ray, &sphere),
        Some(Vec3::new(0.0, 0.0, 8.0))
    );
}

#[test]
fn ray_sphere_origin_inside() {
    let sphere = BoundingSphere::new(&Vec3::zero(), 5.0);
    for direction in [Vec3::unit_x(), -Vec3::unit_y(), Vec3::unit_z()].iter() {
        let ray = Ray::new(&Vec3::new(1.0, 1.0, 1.0), direction);
        assert_eq!(ray_intersects_sphere(&ray, &sphere), Some(0.0));
    }
}

#[test]
fn ray_sphere_miss() {
    let sphere = BoundingSphere::new(&Vec3::new(0.0, 0.0, 10.0), 2.0);
    let away = Ray::new(&Vec3::zero(), &-Vec3::unit_z());
    assert_eq!(ray_intersects_sphere(&away, &sphere), None);
    let beside = Ray::new(&Vec3::new(3.0, 0.0, 0.0), &Vec3::unit_z());
    assert_eq!(ray_intersects_sphere(&beside, &sphere), None);
    assert_eq!(ray_intersects_sphere_point(&beside, &sphere), None);
}
