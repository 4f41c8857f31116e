use crate::geometry::{Ray, Vec3};
use crate::shapes::{BoundingBox, BoundingSphere, Plane};
use crate::utility::{is_zero, near_equal, Scalar, ZERO_TOLERANCE};
#[cfg(debug_assertions)]
use log::warn;

#[cfg(debug_assertions)]
fn warn_if_not_normalized(ray: &Ray, routine: &str) {
    if !ray.direction.is_normalized() {
        warn!("{} expects a normalized direction, got {}", routine, ray);
    }
}

/// Checks whether a ray passes through a point.
///
/// The point is treated as a sphere of radius [ZERO_TOLERANCE] centred on it, so the ray
/// direction is expected to be normalized.
pub fn ray_intersects_point(ray: &Ray, point: &Vec3) -> bool {
    #[cfg(debug_assertions)]
    warn_if_not_normalized(ray, "ray_intersects_point");
    let m = ray.position - point;
    let b = Vec3::dot(&m, &ray.direction);
    let c = Vec3::dot(&m, &m) - ZERO_TOLERANCE;
    if c > 0.0 && b > 0.0 {
        return false;
    }
    let discriminant = b * b - c;
    discriminant >= 0.0
}

/// Intersects two rays, returning the point where they meet.
///
/// Rays with the same origin intersect at that origin. Parallel rays with different origins
/// never intersect. Otherwise the parameters of the closest points on the two lines are solved
/// with 3×3 determinants, and the intersection is reported only if both closest points are
/// [near_equal] on every axis.
/// # Examples
/// ```
/// use halp_math::collision::ray_intersects_ray;
/// use halp_math::geometry::{Ray, Vec3};
///
/// let ray1 = Ray::new(&Vec3::zero(), &Vec3::unit_x());
/// let ray2 = Ray::new(&Vec3::new(2.0, -3.0, 0.0), &Vec3::unit_y());
///
/// assert_eq!(ray_intersects_ray(&ray1, &ray2), Some(Vec3::new(2.0, 0.0, 0.0)));
/// ```
pub fn ray_intersects_ray(ray1: &Ray, ray2: &Ray) -> Option<Vec3> {
    let cross = Vec3::cross(&ray1.direction, &ray2.direction);
    let denominator = cross.length();
    if is_zero(denominator) {
        // parallel rays: they meet only if they share the origin
        return if near_equal(ray2.position.x, ray1.position.x)
            && near_equal(ray2.position.y, ray1.position.y)
            && near_equal(ray2.position.z, ray1.position.z)
        {
            Some(ray1.position)
        } else {
            None
        };
    }
    let denominator = denominator * denominator;
    let delta = ray2.position - ray1.position;
    let dets = determinant3(&delta, &ray2.direction, &cross);
    let dett = determinant3(&delta, &ray1.direction, &cross);
    let s = dets / denominator;
    let t = dett / denominator;
    let point1 = ray1.position + ray1.direction * s;
    let point2 = ray2.position + ray2.direction * t;
    if near_equal(point2.x, point1.x)
        && near_equal(point2.y, point1.y)
        && near_equal(point2.z, point1.z)
    {
        Some(point1)
    } else {
        None
    }
}

/// Determinant of the 3×3 matrix having `col1`, `col2` and `col3` as columns.
fn determinant3(col1: &Vec3, col2: &Vec3, col3: &Vec3) -> Scalar {
    col1.x * col2.y * col3.z + col2.x * col3.y * col1.z + col3.x * col1.y * col2.z
        - col1.x * col3.y * col2.z
        - col2.x * col1.y * col3.z
        - col3.x * col2.y * col1.z
}

/// Intersects a ray with a plane, returning the distance of the hit point from the ray origin.
///
/// Returns `None` if the ray is parallel to the plane or if the plane lies behind the ray
/// origin. The distance is expressed in units of the ray direction length.
/// # Examples
/// ```
/// use halp_math::collision::ray_intersects_plane;
/// use halp_math::geometry::{Ray, Vec3};
/// use halp_math::shapes::Plane;
///
/// let plane = Plane::new(&Vec3::unit_y(), -2.0);
/// let ray = Ray::new(&Vec3::zero(), &Vec3::unit_y());
///
/// assert_eq!(ray_intersects_plane(&ray, &plane), Some(2.0));
/// assert_eq!(ray_intersects_plane(&ray, &plane.negate()), Some(2.0));
/// assert_eq!(ray_intersects_plane(&ray, &Plane::new(&Vec3::unit_y(), 2.0)), None);
/// ```
pub fn ray_intersects_plane(ray: &Ray, plane: &Plane) -> Option<Scalar> {
    let direction = Vec3::dot(&plane.normal, &ray.direction);
    if is_zero(direction) {
        return None;
    }
    let position = Vec3::dot(&plane.normal, &ray.position);
    let distance = (-plane.d - position) / direction;
    if distance < 0.0 {
        None
    } else {
        Some(distance)
    }
}

/// Same as [ray_intersects_plane], but returns the hit point instead of the distance.
pub fn ray_intersects_plane_point(ray: &Ray, plane: &Plane) -> Option<Vec3> {
    ray_intersects_plane(ray, plane).map(|distance| ray.point_along(distance))
}

/// Intersects a ray with the triangle `(vertex1, vertex2, vertex3)`, returning the distance of
/// the hit point from the ray origin.
///
/// Uses the *Möller-Trumbore* algorithm. Both windings are hit (no back-face culling).
/// Returns `None` if the ray is parallel to the triangle plane, misses the triangle, or if the
/// triangle lies behind the ray origin.
/// # Examples
/// ```
/// use halp_math::collision::ray_intersects_triangle;
/// use halp_math::geometry::{Ray, Vec3};
///
/// let v0 = Vec3::new(-1.0, -1.0, 3.0);
/// let v1 = Vec3::new(1.0, -1.0, 3.0);
/// let v2 = Vec3::new(0.0, 1.0, 3.0);
/// let ray = Ray::new(&Vec3::zero(), &Vec3::unit_z());
///
/// assert_eq!(ray_intersects_triangle(&ray, &v0, &v1, &v2), Some(3.0));
/// ```
pub fn ray_intersects_triangle(
    ray: &Ray,
    vertex1: &Vec3,
    vertex2: &Vec3,
    vertex3: &Vec3,
) -> Option<Scalar> {
    let edge1 = vertex2 - vertex1;
    let edge2 = vertex3 - vertex1;
    let direction_cross_edge2 = Vec3::cross(&ray.direction, &edge2);
    let determinant = Vec3::dot(&edge1, &direction_cross_edge2);
    if is_zero(determinant) {
        return None;
    }
    let inverse_determinant = 1.0 / determinant;
    let distance_vector = ray.position - vertex1;
    let u = Vec3::dot(&distance_vector, &direction_cross_edge2) * inverse_determinant;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let distance_cross_edge1 = Vec3::cross(&distance_vector, &edge1);
    let v = Vec3::dot(&ray.direction, &distance_cross_edge1) * inverse_determinant;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let distance = Vec3::dot(&edge2, &distance_cross_edge1) * inverse_determinant;
    if distance < 0.0 {
        None
    } else {
        Some(distance)
    }
}

/// Same as [ray_intersects_triangle], but returns the hit point instead of the distance.
pub fn ray_intersects_triangle_point(
    ray: &Ray,
    vertex1: &Vec3,
    vertex2: &Vec3,
    vertex3: &Vec3,
) -> Option<Vec3> {
    ray_intersects_triangle(ray, vertex1, vertex2, vertex3).map(|d| ray.point_along(d))
}

/// Intersects a ray with an axis aligned box, returning the distance of the entry point from
/// the ray origin.
///
/// Implemented with the slab method: the ray is clipped against the three pairs of parallel
/// planes of the box and the intersection exists if the clipped intervals overlap. A ray
/// starting inside the box returns a distance of `0.0`.
/// # Examples
/// ```
/// use halp_math::collision::ray_intersects_box;
/// use halp_math::geometry::{Ray, Vec3};
/// use halp_math::shapes::BoundingBox;
///
/// let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::one());
/// let ray = Ray::new(&Vec3::new(0.5, 0.5, -1.0), &Vec3::unit_z());
///
/// assert_eq!(ray_intersects_box(&ray, &bbox), Some(1.0));
/// ```
pub fn ray_intersects_box(ray: &Ray, bbox: &BoundingBox) -> Option<Scalar> {
    let mut distance: Scalar = 0.0;
    let mut tmax = Scalar::MAX;
    let slabs = [
        (ray.position.x, ray.direction.x, bbox.minimum.x, bbox.maximum.x),
        (ray.position.y, ray.direction.y, bbox.minimum.y, bbox.maximum.y),
        (ray.position.z, ray.direction.z, bbox.minimum.z, bbox.maximum.z),
    ];
    for (position, direction, min, max) in slabs {
        if is_zero(direction) {
            // parallel to the slab: the origin must already be between the two planes
            if position < min || position > max {
                return None;
            }
        } else {
            let inverse = 1.0 / direction;
            let mut t1 = (min - position) * inverse;
            let mut t2 = (max - position) * inverse;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            distance = distance.max(t1);
            tmax = tmax.min(t2);
            if distance > tmax {
                return None;
            }
        }
    }
    Some(distance)
}

/// Same as [ray_intersects_box], but returns the entry point instead of the distance.
pub fn ray_intersects_box_point(ray: &Ray, bbox: &BoundingBox) -> Option<Vec3> {
    ray_intersects_box(ray, bbox).map(|distance| ray.point_along(distance))
}

/// Intersects a ray with a sphere, returning the distance of the entry point from the ray
/// origin.
///
/// The ray direction is expected to be normalized. A ray starting inside the sphere returns a
/// distance of `0.0`.
/// # Examples
/// ```
/// use halp_math::collision::ray_intersects_sphere;
/// use halp_math::geometry::{Ray, Vec3};
/// use halp_math::shapes::BoundingSphere;
///
/// let sphere = BoundingSphere::new(&Vec3::zero(), 1.0);
/// let outside = Ray::new(&Vec3::new(0.0, -10.0, 0.0), &Vec3::unit_y());
/// let inside = Ray::new(&Vec3::zero(), &Vec3::unit_x());
///
/// assert_eq!(ray_intersects_sphere(&outside, &sphere), Some(9.0));
/// assert_eq!(ray_intersects_sphere(&inside, &sphere), Some(0.0));
/// ```
pub fn ray_intersects_sphere(ray: &Ray, sphere: &BoundingSphere) -> Option<Scalar> {
    #[cfg(debug_assertions)]
    warn_if_not_normalized(ray, "ray_intersects_sphere");
    let m = ray.position - sphere.center;
    let b = Vec3::dot(&m, &ray.direction);
    let c = Vec3::dot(&m, &m) - sphere.radius * sphere.radius;
    // origin outside the sphere and pointing away from it
    if c > 0.0 && b > 0.0 {
        return None;
    }
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let distance = -b - discriminant.sqrt();
    Some(distance.max(0.0))
}

/// Same as [ray_intersects_sphere], but returns the entry point instead of the distance.
pub fn ray_intersects_sphere_point(ray: &Ray, sphere: &BoundingSphere) -> Option<Vec3> {
    ray_intersects_sphere(ray, sphere).map(|distance| ray.point_along(distance))
}
