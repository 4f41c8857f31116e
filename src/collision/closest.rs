use crate::geometry::Vec3;
use crate::shapes::{BoundingBox, BoundingSphere, Plane};
use crate::utility::Scalar;

/// Returns the point of the triangle `(vertex1, vertex2, vertex3)` closest to `point`.
///
/// The triangle is split into seven Voronoi regions (three vertices, three edges and the face)
/// and the query point is projected onto the feature owning the region it falls in, as described
/// by *Ericson C.* in *Real-Time Collision Detection*, section 5.1.5.
/// # Examples
/// ```
/// use halp_math::collision::closest_point_point_triangle;
/// use halp_math::geometry::Vec3;
///
/// let a = Vec3::new(0.0, 0.0, 0.0);
/// let b = Vec3::new(1.0, 0.0, 0.0);
/// let c = Vec3::new(0.0, 1.0, 0.0);
/// let closest = closest_point_point_triangle(&Vec3::new(0.0, 0.0, 5.0), &a, &b, &c);
///
/// assert_eq!(closest, a);
/// ```
pub fn closest_point_point_triangle(
    point: &Vec3,
    vertex1: &Vec3,
    vertex2: &Vec3,
    vertex3: &Vec3,
) -> Vec3 {
    let ab = vertex2 - vertex1;
    let ac = vertex3 - vertex1;
    let ap = point - vertex1;
    let d1 = Vec3::dot(&ab, &ap);
    let d2 = Vec3::dot(&ac, &ap);
    // vertex region of vertex1
    if d1 <= 0.0 && d2 <= 0.0 {
        return *vertex1;
    }
    let bp = point - vertex2;
    let d3 = Vec3::dot(&ab, &bp);
    let d4 = Vec3::dot(&ac, &bp);
    // vertex region of vertex2
    if d3 >= 0.0 && d4 <= d3 {
        return *vertex2;
    }
    // edge region of vertex1-vertex2
    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return vertex1 + ab * v;
    }
    let cp = point - vertex3;
    let d5 = Vec3::dot(&ab, &cp);
    let d6 = Vec3::dot(&ac, &cp);
    // vertex region of vertex3
    if d6 >= 0.0 && d5 <= d6 {
        return *vertex3;
    }
    // edge region of vertex1-vertex3
    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return vertex1 + ac * w;
    }
    // edge region of vertex2-vertex3
    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return vertex2 + (vertex3 - vertex2) * w;
    }
    // face region, use barycentric coordinates
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    vertex1 + ab * v + ac * w
}

/// Returns the projection of `point` onto `plane`.
pub fn closest_point_plane_point(plane: &Plane, point: &Vec3) -> Vec3 {
    let t = Vec3::dot(&plane.normal, point) + plane.d;
    point - plane.normal * t
}

/// Returns the point of the box closest to `point`. Points inside the box are returned unchanged.
pub fn closest_point_box_point(bbox: &BoundingBox, point: &Vec3) -> Vec3 {
    Vec3::min(&Vec3::max(point, &bbox.minimum), &bbox.maximum)
}

/// Returns the point on the surface of the sphere closest to `point`.
///
/// A point lying exactly on the centre has no preferred direction, and the centre itself is
/// returned.
pub fn closest_point_sphere_point(sphere: &BoundingSphere, point: &Vec3) -> Vec3 {
    let direction = (point - sphere.center).normalized();
    sphere.center + direction * sphere.radius
}

/// Returns the point on the surface of `sphere1` closest to `sphere2`.
pub fn closest_point_sphere_sphere(sphere1: &BoundingSphere, sphere2: &BoundingSphere) -> Vec3 {
    closest_point_sphere_point(sphere1, &sphere2.center)
}

/// Returns the signed distance between a plane and a point.
///
/// The distance is positive when the point lies in front of the plane.
/// # Examples
/// ```
/// use halp_math::collision::distance_plane_point;
/// use halp_math::geometry::Vec3;
/// use halp_math::shapes::Plane;
///
/// let plane = Plane::new(&Vec3::unit_y(), -2.0);
///
/// assert_eq!(distance_plane_point(&plane, &Vec3::new(7.0, 5.0, 1.0)), 3.0);
/// assert_eq!(distance_plane_point(&plane, &Vec3::new(7.0, 0.0, 1.0)), -2.0);
/// ```
pub fn distance_plane_point(plane: &Plane, point: &Vec3) -> Scalar {
    Vec3::dot(&plane.normal, point) + plane.d
}

/// Returns the distance between a box and a point, `0.0` if the point is inside the box.
pub fn distance_box_point(bbox: &BoundingBox, point: &Vec3) -> Scalar {
    let mut distance: Scalar = 0.0;
    let axes = [
        (point.x, bbox.minimum.x, bbox.maximum.x),
        (point.y, bbox.minimum.y, bbox.maximum.y),
        (point.z, bbox.minimum.z, bbox.maximum.z),
    ];
    for (value, min, max) in axes {
        if value < min {
            distance += (min - value) * (min - value);
        }
        if value > max {
            distance += (value - max) * (value - max);
        }
    }
    distance.sqrt()
}

/// Returns the distance between two boxes, `0.0` if they overlap.
/// # Examples
/// ```
/// use halp_math::collision::distance_box_box;
/// use halp_math::geometry::Vec3;
/// use halp_math::shapes::BoundingBox;
///
/// let box1 = BoundingBox::new(&Vec3::zero(), &Vec3::one());
/// let box2 = BoundingBox::new(&Vec3::new(4.0, 5.0, 0.0), &Vec3::new(5.0, 6.0, 1.0));
///
/// assert_eq!(distance_box_box(&box1, &box2), 5.0);
/// ```
pub fn distance_box_box(box1: &BoundingBox, box2: &BoundingBox) -> Scalar {
    let mut distance: Scalar = 0.0;
    let axes = [
        (box1.minimum.x, box1.maximum.x, box2.minimum.x, box2.maximum.x),
        (box1.minimum.y, box1.maximum.y, box2.minimum.y, box2.maximum.y),
        (box1.minimum.z, box1.maximum.z, box2.minimum.z, box2.maximum.z),
    ];
    for (min1, max1, min2, max2) in axes {
        if min1 > max2 {
            let delta = max2 - min1;
            distance += delta * delta;
        } else if min2 > max1 {
            let delta = max1 - min2;
            distance += delta * delta;
        }
    }
    distance.sqrt()
}

/// Returns the distance between the surface of a sphere and a point, `0.0` if the point is
/// inside the sphere.
pub fn distance_sphere_point(sphere: &BoundingSphere, point: &Vec3) -> Scalar {
    let distance = Vec3::distance(&sphere.center, point) - sphere.radius;
    distance.max(0.0)
}

/// Returns the minimum separation between two spheres, `0.0` if they touch or overlap.
/// # Examples
/// ```
/// use halp_math::collision::distance_sphere_sphere;
/// use halp_math::geometry::Vec3;
/// use halp_math::shapes::BoundingSphere;
///
/// let sphere1 = BoundingSphere::new(&Vec3::zero(), 1.0);
/// let sphere2 = BoundingSphere::new(&Vec3::new(5.0, 0.0, 0.0), 2.0);
/// let overlapping = BoundingSphere::new(&Vec3::new(1.5, 0.0, 0.0), 1.0);
///
/// assert_eq!(distance_sphere_sphere(&sphere1, &sphere2), 2.0);
/// assert_eq!(distance_sphere_sphere(&sphere1, &overlapping), 0.0);
/// ```
pub fn distance_sphere_sphere(sphere1: &BoundingSphere, sphere2: &BoundingSphere) -> Scalar {
    let distance =
        Vec3::distance(&sphere1.center, &sphere2.center) - sphere1.radius - sphere2.radius;
    distance.max(0.0)
}
