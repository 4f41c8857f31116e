//! Stateless geometric queries between points, rays, planes, triangles, boxes and spheres.
//!
//! Every routine is a pure function over its arguments. Misses are reported as `None`, `false`
//! or [ContainmentType::Disjoint](crate::shapes::ContainmentType::Disjoint), never as errors.
mod closest;
pub use self::closest::closest_point_box_point;
pub use self::closest::closest_point_plane_point;
pub use self::closest::closest_point_point_triangle;
pub use self::closest::closest_point_sphere_point;
pub use self::closest::closest_point_sphere_sphere;
pub use self::closest::distance_box_box;
pub use self::closest::distance_box_point;
pub use self::closest::distance_plane_point;
pub use self::closest::distance_sphere_point;
pub use self::closest::distance_sphere_sphere;
mod ray;
pub use self::ray::ray_intersects_box;
pub use self::ray::ray_intersects_box_point;
pub use self::ray::ray_intersects_plane;
pub use self::ray::ray_intersects_plane_point;
pub use self::ray::ray_intersects_point;
pub use self::ray::ray_intersects_ray;
pub use self::ray::ray_intersects_sphere;
pub use self::ray::ray_intersects_sphere_point;
pub use self::ray::ray_intersects_triangle;
pub use self::ray::ray_intersects_triangle_point;
mod plane;
pub use self::plane::plane_intersects_box;
pub use self::plane::plane_intersects_plane;
pub use self::plane::plane_intersects_plane_line;
pub use self::plane::plane_intersects_point;
pub use self::plane::plane_intersects_sphere;
pub use self::plane::plane_intersects_triangle;
mod volume;
pub use self::volume::box_contains_box;
pub use self::volume::box_contains_point;
pub use self::volume::box_contains_sphere;
pub use self::volume::box_intersects_box;
pub use self::volume::box_intersects_sphere;
pub use self::volume::sphere_contains_box;
pub use self::volume::sphere_contains_point;
pub use self::volume::sphere_contains_sphere;
pub use self::volume::sphere_contains_triangle;
pub use self::volume::sphere_intersects_sphere;
pub use self::volume::sphere_intersects_triangle;

#[cfg(test)]
mod tests;
