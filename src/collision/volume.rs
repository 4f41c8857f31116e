use crate::collision::closest_point_point_triangle;
use crate::geometry::Vec3;
use crate::shapes::{BoundingBox, BoundingSphere, ContainmentType};

/// Checks whether two axis aligned boxes overlap. Touching boxes overlap.
pub fn box_intersects_box(box1: &BoundingBox, box2: &BoundingBox) -> bool {
    !(box1.minimum.x > box2.maximum.x
        || box2.minimum.x > box1.maximum.x
        || box1.minimum.y > box2.maximum.y
        || box2.minimum.y > box1.maximum.y
        || box1.minimum.z > box2.maximum.z
        || box2.minimum.z > box1.maximum.z)
}

/// Checks whether an axis aligned box and a sphere overlap.
pub fn box_intersects_sphere(bbox: &BoundingBox, sphere: &BoundingSphere) -> bool {
    let closest = sphere.center.clamp(&bbox.minimum, &bbox.maximum);
    let distance = Vec3::distance_squared(&sphere.center, &closest);
    distance <= sphere.radius * sphere.radius
}

/// Checks whether a sphere and the triangle `(vertex1, vertex2, vertex3)` overlap.
pub fn sphere_intersects_triangle(
    sphere: &BoundingSphere,
    vertex1: &Vec3,
    vertex2: &Vec3,
    vertex3: &Vec3,
) -> bool {
    let point = closest_point_point_triangle(&sphere.center, vertex1, vertex2, vertex3);
    let v = point - sphere.center;
    Vec3::dot(&v, &v) <= sphere.radius * sphere.radius
}

/// Checks whether two spheres overlap. Touching spheres overlap.
pub fn sphere_intersects_sphere(sphere1: &BoundingSphere, sphere2: &BoundingSphere) -> bool {
    let radii = sphere1.radius + sphere2.radius;
    Vec3::distance_squared(&sphere1.center, &sphere2.center) <= radii * radii
}

/// Checks whether a point lies inside an axis aligned box, boundaries included.
///
/// Returns either [ContainmentType::Contains] or [ContainmentType::Disjoint].
/// # Examples
/// ```
/// use halp_math::collision::box_contains_point;
/// use halp_math::geometry::Vec3;
/// use halp_math::shapes::{BoundingBox, ContainmentType};
///
/// let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::one());
///
/// assert_eq!(box_contains_point(&bbox, &Vec3::new(1.0, 0.5, 0.0)), ContainmentType::Contains);
/// assert_eq!(box_contains_point(&bbox, &Vec3::new(1.1, 0.5, 0.0)), ContainmentType::Disjoint);
/// ```
pub fn box_contains_point(bbox: &BoundingBox, point: &Vec3) -> ContainmentType {
    if bbox.minimum.x <= point.x
        && bbox.maximum.x >= point.x
        && bbox.minimum.y <= point.y
        && bbox.maximum.y >= point.y
        && bbox.minimum.z <= point.z
        && bbox.maximum.z >= point.z
    {
        ContainmentType::Contains
    } else {
        ContainmentType::Disjoint
    }
}

/// Classifies the relationship between two axis aligned boxes.
///
/// The result is [ContainmentType::Contains] only if `box2` is fully inside `box1`.
/// # Examples
/// ```
/// use halp_math::collision::box_contains_box;
/// use halp_math::geometry::Vec3;
/// use halp_math::shapes::{BoundingBox, ContainmentType};
///
/// let outer = BoundingBox::new(&Vec3::zero(), &Vec3::new(10.0, 10.0, 10.0));
/// let inner = BoundingBox::new(&Vec3::new(2.0, 2.0, 2.0), &Vec3::new(3.0, 3.0, 3.0));
///
/// assert_eq!(box_contains_box(&outer, &inner), ContainmentType::Contains);
/// assert_eq!(box_contains_box(&inner, &outer), ContainmentType::Intersects);
/// ```
pub fn box_contains_box(box1: &BoundingBox, box2: &BoundingBox) -> ContainmentType {
    if box1.maximum.x < box2.minimum.x || box1.minimum.x > box2.maximum.x {
        return ContainmentType::Disjoint;
    }
    if box1.maximum.y < box2.minimum.y || box1.minimum.y > box2.maximum.y {
        return ContainmentType::Disjoint;
    }
    if box1.maximum.z < box2.minimum.z || box1.minimum.z > box2.maximum.z {
        return ContainmentType::Disjoint;
    }
    if box1.minimum.x <= box2.minimum.x
        && box2.maximum.x <= box1.maximum.x
        && box1.minimum.y <= box2.minimum.y
        && box2.maximum.y <= box1.maximum.y
        && box1.minimum.z <= box2.minimum.z
        && box2.maximum.z <= box1.maximum.z
    {
        ContainmentType::Contains
    } else {
        ContainmentType::Intersects
    }
}

/// Classifies the relationship between an axis aligned box and a sphere.
pub fn box_contains_sphere(bbox: &BoundingBox, sphere: &BoundingSphere) -> ContainmentType {
    let closest = sphere.center.clamp(&bbox.minimum, &bbox.maximum);
    let distance = Vec3::distance_squared(&sphere.center, &closest);
    let radius = sphere.radius;
    if distance > radius * radius {
        return ContainmentType::Disjoint;
    }
    let (min, max, center) = (&bbox.minimum, &bbox.maximum, &sphere.center);
    if min.x + radius <= center.x
        && center.x <= max.x - radius
        && max.x - min.x > radius
        && min.y + radius <= center.y
        && center.y <= max.y - radius
        && max.y - min.y > radius
        && min.z + radius <= center.z
        && center.z <= max.z - radius
        && max.z - min.z > radius
    {
        ContainmentType::Contains
    } else {
        ContainmentType::Intersects
    }
}

/// Checks whether a point lies inside a sphere, surface included.
///
/// Returns either [ContainmentType::Contains] or [ContainmentType::Disjoint].
pub fn sphere_contains_point(sphere: &BoundingSphere, point: &Vec3) -> ContainmentType {
    if Vec3::distance_squared(point, &sphere.center) <= sphere.radius * sphere.radius {
        ContainmentType::Contains
    } else {
        ContainmentType::Disjoint
    }
}

/// Classifies the relationship between a sphere and the triangle `(vertex1, vertex2, vertex3)`.
pub fn sphere_contains_triangle(
    sphere: &BoundingSphere,
    vertex1: &Vec3,
    vertex2: &Vec3,
    vertex3: &Vec3,
) -> ContainmentType {
    let all_inside = [vertex1, vertex2, vertex3]
        .iter()
        .all(|vertex| sphere_contains_point(sphere, vertex) == ContainmentType::Contains);
    if all_inside {
        ContainmentType::Contains
    } else if sphere_intersects_triangle(sphere, vertex1, vertex2, vertex3) {
        ContainmentType::Intersects
    } else {
        ContainmentType::Disjoint
    }
}

/// Classifies the relationship between a sphere and an axis aligned box.
///
/// The box is contained only if all of its eight corners are inside the sphere.
/// # Examples
/// ```
/// use halp_math::collision::sphere_contains_box;
/// use halp_math::geometry::Vec3;
/// use halp_math::shapes::{BoundingBox, BoundingSphere, ContainmentType};
///
/// let sphere = BoundingSphere::new(&Vec3::zero(), 2.0);
/// let inner = BoundingBox::new(&Vec3::new(-1.0, -1.0, -1.0), &Vec3::one());
/// let crossing = BoundingBox::new(&Vec3::zero(), &Vec3::new(3.0, 3.0, 3.0));
///
/// assert_eq!(sphere_contains_box(&sphere, &inner), ContainmentType::Contains);
/// assert_eq!(sphere_contains_box(&sphere, &crossing), ContainmentType::Intersects);
/// ```
pub fn sphere_contains_box(sphere: &BoundingSphere, bbox: &BoundingBox) -> ContainmentType {
    if !box_intersects_sphere(bbox, sphere) {
        return ContainmentType::Disjoint;
    }
    let radius_squared = sphere.radius * sphere.radius;
    let outside = bbox
        .corners()
        .iter()
        .any(|corner| Vec3::distance_squared(&sphere.center, corner) > radius_squared);
    if outside {
        ContainmentType::Intersects
    } else {
        ContainmentType::Contains
    }
}

/// Classifies the relationship between two spheres.
///
/// The result is [ContainmentType::Contains] only if `sphere2` is fully inside `sphere1`.
pub fn sphere_contains_sphere(
    sphere1: &BoundingSphere,
    sphere2: &BoundingSphere,
) -> ContainmentType {
    let distance = Vec3::distance(&sphere1.center, &sphere2.center);
    if sphere1.radius + sphere2.radius < distance {
        ContainmentType::Disjoint
    } else if sphere1.radius - sphere2.radius < distance {
        ContainmentType::Intersects
    } else {
        ContainmentType::Contains
    }
}
