use crate::geometry::{Ray, Vec3};
use crate::shapes::{BoundingBox, BoundingSphere, Plane, PlaneIntersectionType};
use crate::utility::{is_zero, Scalar};

/// Classifies a point against a plane.
///
/// The sign of `normal·point + d` is checked exactly, without any tolerance: only points
/// lying precisely on the plane are [PlaneIntersectionType::Intersecting].
/// # Examples
/// ```
/// use halp_math::collision::plane_intersects_point;
/// use halp_math::geometry::Vec3;
/// use halp_math::shapes::{Plane, PlaneIntersectionType};
///
/// let plane = Plane::new(&Vec3::unit_z(), 0.0);
///
/// assert_eq!(plane_intersects_point(&plane, &Vec3::new(0.0, 0.0, 1.0)), PlaneIntersectionType::Front);
/// assert_eq!(plane_intersects_point(&plane, &Vec3::new(0.0, 0.0, -1.0)), PlaneIntersectionType::Back);
/// assert_eq!(plane_intersects_point(&plane, &Vec3::new(3.0, 2.0, 0.0)), PlaneIntersectionType::Intersecting);
/// ```
pub fn plane_intersects_point(plane: &Plane, point: &Vec3) -> PlaneIntersectionType {
    let distance = Vec3::dot(&plane.normal, point) + plane.d;
    if distance > 0.0 {
        PlaneIntersectionType::Front
    } else if distance < 0.0 {
        PlaneIntersectionType::Back
    } else {
        PlaneIntersectionType::Intersecting
    }
}

/// Checks whether two planes intersect. Only parallel planes don't.
pub fn plane_intersects_plane(plane1: &Plane, plane2: &Plane) -> bool {
    let direction = Vec3::cross(&plane1.normal, &plane2.normal);
    !is_zero(Vec3::dot(&direction, &direction))
}

/// Computes the line shared by two planes.
///
/// The returned ray has a normalized direction and its position lies on both planes. Returns
/// `None` for parallel planes.
/// # Examples
/// ```
/// use halp_math::collision::plane_intersects_plane_line;
/// use halp_math::geometry::Vec3;
/// use halp_math::shapes::Plane;
///
/// let plane1 = Plane::new(&Vec3::unit_x(), -1.0);
/// let plane2 = Plane::new(&Vec3::unit_y(), -2.0);
/// let line = plane_intersects_plane_line(&plane1, &plane2).unwrap();
///
/// assert_eq!(line.position, Vec3::new(1.0, 2.0, 0.0));
/// assert_eq!(line.direction, Vec3::unit_z());
/// ```
pub fn plane_intersects_plane_line(plane1: &Plane, plane2: &Plane) -> Option<Ray> {
    let direction = Vec3::cross(&plane1.normal, &plane2.normal);
    let denominator = Vec3::dot(&direction, &direction);
    if is_zero(denominator) {
        return None;
    }
    // closest point to the origin shared by the two planes
    let temp = plane1.normal * plane2.d - plane2.normal * plane1.d;
    let point = Vec3::cross(&temp, &direction) / denominator;
    Some(Ray::new(&point, &direction.normalized()))
}

/// Classifies the triangle `(vertex1, vertex2, vertex3)` against a plane.
///
/// The triangle is in front of (or behind) the plane only if all of its vertices are.
pub fn plane_intersects_triangle(
    plane: &Plane,
    vertex1: &Vec3,
    vertex2: &Vec3,
    vertex3: &Vec3,
) -> PlaneIntersectionType {
    let test1 = plane_intersects_point(plane, vertex1);
    let test2 = plane_intersects_point(plane, vertex2);
    let test3 = plane_intersects_point(plane, vertex3);
    if test1 == PlaneIntersectionType::Front
        && test2 == PlaneIntersectionType::Front
        && test3 == PlaneIntersectionType::Front
    {
        PlaneIntersectionType::Front
    } else if test1 == PlaneIntersectionType::Back
        && test2 == PlaneIntersectionType::Back
        && test3 == PlaneIntersectionType::Back
    {
        PlaneIntersectionType::Back
    } else {
        PlaneIntersectionType::Intersecting
    }
}

/// Classifies an axis aligned box against a plane.
///
/// Only the two corners closest to each half-space are tested: the corner furthest along the
/// negative normal decides if the box is completely in front, the one furthest along the
/// positive normal decides if it is completely behind.
pub fn plane_intersects_box(plane: &Plane, bbox: &BoundingBox) -> PlaneIntersectionType {
    let (nx, px) = order_by_normal(plane.normal.x, bbox.minimum.x, bbox.maximum.x);
    let (ny, py) = order_by_normal(plane.normal.y, bbox.minimum.y, bbox.maximum.y);
    let (nz, pz) = order_by_normal(plane.normal.z, bbox.minimum.z, bbox.maximum.z);
    let negative_vertex = Vec3::new(nx, ny, nz);
    let positive_vertex = Vec3::new(px, py, pz);
    if Vec3::dot(&plane.normal, &negative_vertex) + plane.d > 0.0 {
        PlaneIntersectionType::Front
    } else if Vec3::dot(&plane.normal, &positive_vertex) + plane.d < 0.0 {
        PlaneIntersectionType::Back
    } else {
        PlaneIntersectionType::Intersecting
    }
}

/// Returns `(low, high)` sorted so that the first value is the one furthest along the negative
/// `normal` component.
fn order_by_normal(normal: Scalar, low: Scalar, high: Scalar) -> (Scalar, Scalar) {
    if normal >= 0.0 {
        (low, high)
    } else {
        (high, low)
    }
}

/// Classifies a sphere against a plane, comparing the signed distance of the centre with the
/// radius.
pub fn plane_intersects_sphere(plane: &Plane, sphere: &BoundingSphere) -> PlaneIntersectionType {
    let distance = Vec3::dot(&plane.normal, &sphere.center) + plane.d;
    if distance > sphere.radius {
        PlaneIntersectionType::Front
    } else if distance < -sphere.radius {
        PlaneIntersectionType::Back
    } else {
        PlaneIntersectionType::Intersecting
    }
}
