mod aabb;
pub use self::aabb::BoundingBox;
mod classification;
pub use self::classification::ContainmentType;
pub use self::classification::PlaneIntersectionType;
mod plane;
pub use self::plane::Plane;
mod sphere;
pub use self::sphere::BoundingSphere;

#[cfg(test)]
mod tests;
