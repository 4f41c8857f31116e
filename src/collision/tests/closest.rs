use crate::collision::*;
use crate::geometry::Vec3;
use crate::shapes::{BoundingBox, BoundingSphere, Plane};
use assert_approx_eq::assert_approx_eq;

fn triangle() -> (Vec3, Vec3, Vec3) {
    (
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    )
}

#[test]
fn closest_triangle_vertex_region_above() {
    let (a, b, c) = triangle();
    let closest = closest_point_point_triangle(&Vec3::new(0.0, 0.0, 5.0), &a, &b, &c);
    assert_eq!(closest, Vec3::new(0.0, 0.0, 0.0));
}

#[test]
fn closest_triangle_vertex_regions() {
    let (a, b, c) = triangle();
    let p = Vec3::new(-1.0, -1.0, 0.0);
    assert_eq!(closest_point_point_triangle(&p, &a, &b, &c), a);
    let p = Vec3::new(3.0, -0.5, 0.0);
    assert_eq!(closest_point_point_triangle(&p, &a, &b, &c), b);
    let p = Vec3::new(-0.5, 4.0, 2.0);
    assert_eq!(closest_point_point_triangle(&p, &a, &b, &c), c);
}

#[test]
fn closest_triangle_edge_regions() {
    let (a, b, c) = triangle();
    // below edge ab
    let p = Vec3::new(0.25, -2.0, 0.0);
    let closest = closest_point_point_triangle(&p, &a, &b, &c);
    assert_approx_eq!(closest.x, 0.25);
    assert_approx_eq!(closest.y, 0.0);
    // left of edge ac
    let p = Vec3::new(-3.0, 0.75, 1.0);
    let closest = closest_point_point_triangle(&p, &a, &b, &c);
    assert_approx_eq!(closest.x, 0.0);
    assert_approx_eq!(closest.y, 0.75);
    assert_approx_eq!(closest.z, 0.0);
    // beyond the hypotenuse bc
    let p = Vec3::new(1.0, 1.0, 0.0);
    let closest = closest_point_point_triangle(&p, &a, &b, &c);
    assert_approx_eq!(closest.x, 0.5);
    assert_approx_eq!(closest.y, 0.5);
}

#[test]
fn closest_triangle_face_region() {
    let (a, b, c) = triangle();
    let p = Vec3::new(0.25, 0.25, -3.0);
    let closest = closest_point_point_triangle(&p, &a, &b, &c);
    assert_approx_eq!(closest.x, 0.25);
    assert_approx_eq!(closest.y, 0.25);
    assert_approx_eq!(closest.z, 0.0);
}

#[test]
fn closest_plane_point() {
    let plane = Plane::new(&Vec3::unit_y(), -2.0);
    let closest = closest_point_plane_point(&plane, &Vec3::new(3.0, 7.0, -1.0));
    assert_eq!(closest, Vec3::new(3.0, 2.0, -1.0));
    let closest = closest_point_plane_point(&plane, &Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(closest, Vec3::new(0.0, 2.0, 0.0));
}

#[test]
fn closest_box_point() {
    let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::one());
    let outside = Vec3::new(2.0, 0.5, -1.0);
    assert_eq!(
        closest_point_box_point(&bbox, &outside),
        Vec3::new(1.0, 0.5, 0.0)
    );
    let inside = Vec3::new(0.2, 0.3, 0.4);
    assert_eq!(closest_point_box_point(&bbox, &inside), inside);
}

#[test]
fn closest_sphere_point() {
    let sphere = BoundingSphere::new(&Vec3::new(1.0, 0.0, 0.0), 2.0);
    let closest = closest_point_sphere_point(&sphere, &Vec3::new(1.0, 10.0, 0.0));
    assert_eq!(closest, Vec3::new(1.0, 2.0, 0.0));
}

#[test]
fn closest_sphere_sphere() {
    let sphere1 = BoundingSphere::new(&Vec3::zero(), 1.0);
    let sphere2 = BoundingSphere::new(&Vec3::new(0.0, 0.0, -5.0), 1.0);
    let closest = closest_point_sphere_sphere(&sphere1, &sphere2);
    assert_eq!(closest, Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn distance_plane_point_signed() {
    let plane = Plane::new(&Vec3::unit_x(), -1.0);
    assert_eq!(distance_plane_point(&plane, &Vec3::new(4.0, 0.0, 0.0)), 3.0);
    assert_eq!(distance_plane_point(&plane, &Vec3::new(-1.0, 9.0, 0.0)), -2.0);
    assert_eq!(distance_plane_point(&plane, &Vec3::new(1.0, 9.0, 9.0)), 0.0);
}

#[test]
fn distance_box_point_inside_outside() {
    let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::one());
    assert_eq!(distance_box_point(&bbox, &Vec3::new(0.5, 0.5, 0.5)), 0.0);
    assert_eq!(distance_box_point(&bbox, &Vec3::new(4.0, 0.5, 0.5)), 3.0);
    assert_eq!(distance_box_point(&bbox, &Vec3::new(4.0, 5.0, 0.5)), 5.0);
    assert_eq!(distance_box_point(&bbox, &Vec3::new(-3.0, -4.0, 0.5)), 5.0);
}

#[test]
fn distance_box_box_separated() {
    let box1 = BoundingBox::new(&Vec3::zero(), &Vec3::one());
    let box2 = BoundingBox::new(&Vec3::new(4.0, 5.0, 0.0), &Vec3::new(5.0, 6.0, 1.0));
    assert_eq!(distance_box_box(&box1, &box2), 5.0);
    assert_eq!(distance_box_box(&box2, &box1), 5.0);
}

#[test]
fn distance_box_box_overlapping() {
    let box1 = BoundingBox::new(&Vec3::zero(), &Vec3::new(2.0, 2.0, 2.0));
    let box2 = BoundingBox::new(&Vec3::one(), &Vec3::new(3.0, 3.0, 3.0));
    assert_eq!(distance_box_box(&box1, &box2), 0.0);
}

#[test]
fn distance_sphere_point_clamped() {
    let sphere = BoundingSphere::new(&Vec3::zero(), 2.0);
    assert_eq!(distance_sphere_point(&sphere, &Vec3::new(0.0, 5.0, 0.0)), 3.0);
    assert_eq!(distance_sphere_point(&sphere, &Vec3::new(0.0, 1.0, 0.0)), 0.0);
}

#[test]
fn distance_sphere_sphere_clamped() {
    let sphere1 = BoundingSphere::new(&Vec3::zero(), 1.0);
    let far = BoundingSphere::new(&Vec3::new(10.0, 0.0, 0.0), 2.0);
    assert_eq!(distance_sphere_sphere(&sphere1, &far), 7.0);
    let touching = BoundingSphere::new(&Vec3::new(3.0, 0.0, 0.0), 2.0);
    assert_eq!(distance_sphere_sphere(&sphere1, &touching), 0.0);
    let overlapping = BoundingSphere::new(&Vec3::new(0.5, 0.0, 0.0), 2.0);
    assert_eq!(distance_sphere_sphere(&sphere1, &overlapping), 0.0);
}
