use crate::collision;
use crate::geometry::Vec3;
use crate::shapes::{BoundingBox, BoundingSphere, Plane};
use crate::utility::Scalar;
use std::fmt::{Display, Formatter};

/// A ray defined by a starting position and a direction.
///
/// Ray class represents a semi-infinite line. A Ray is denoted by a Vec3, the `position`, and a
/// second Vec3, the `direction`. The direction is not normalized automatically: the routines
/// measuring a distance along the ray return it in multiples of the direction length.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    /// The origin of the Ray in space
    pub position: Vec3,
    /// The direction of the Ray in space
    pub direction: Vec3,
}

impl Ray {
    /// Constructs a Ray with origin in (0.0, 0.0, 0.0) and direction towards the positive z axis
    /// # Examples
    /// ```
    /// use halp_math::geometry::{Ray, Vec3};
    ///
    /// let ray = Ray::zero();
    ///
    /// assert_eq!(ray.position, Vec3::zero());
    /// assert_eq!(ray.direction, Vec3::unit_z());
    ///```
    pub fn zero() -> Ray {
        Ray {
            position: Vec3::zero(),
            direction: Vec3::unit_z(),
        }
    }

    /// Constructs a Ray with the given position and direction
    /// # Examples
    /// ```
    /// use halp_math::geometry::{Ray, Vec3};
    ///
    /// let position = Vec3::new(1.0, 2.0, 3.0);
    /// let direction = Vec3::new(0.0, 1.0, 0.0);
    /// let ray = Ray::new(&position, &direction);
    ///
    /// assert_eq!(ray.position.x, position.x);
    /// assert_eq!(ray.position.y, position.y);
    /// assert_eq!(ray.position.z, position.z);
    /// assert_eq!(ray.direction.x, direction.x);
    /// assert_eq!(ray.direction.y, direction.y);
    /// assert_eq!(ray.direction.z, direction.z);
    /// ```
    pub fn new(position: &Vec3, direction: &Vec3) -> Ray {
        Ray {
            position: *position,
            direction: *direction,
        }
    }

    /// Finds a point on the ray given the distance from the origin
    /// # Examples
    /// ```
    /// use halp_math::geometry::{Ray, Vec3};
    ///
    /// let position = Vec3::zero();
    /// let direction = Vec3::new(0.0, 1.0, 0.0);
    /// let ray = Ray::new(&position, &direction);
    /// let point_along = ray.point_along(2.5);
    ///
    /// assert_eq!(point_along, Vec3::new(0.0, 2.5, 0.0));
    /// ```
    pub fn point_along(&self, distance: Scalar) -> Vec3 {
        self.position + self.direction * distance
    }

    pub fn intersects_point(&self, point: &Vec3) -> bool {
        collision::ray_intersects_point(self, point)
    }

    /// Returns the point where two rays cross, see [collision::ray_intersects_ray].
    pub fn intersects_ray(&self, other: &Ray) -> Option<Vec3> {
        collision::ray_intersects_ray(self, other)
    }

    pub fn intersects_plane(&self, plane: &Plane) -> Option<Scalar> {
        collision::ray_intersects_plane(self, plane)
    }

    pub fn intersects_triangle(
        &self,
        vertex1: &Vec3,
        vertex2: &Vec3,
        vertex3: &Vec3,
    ) -> Option<Scalar> {
        collision::ray_intersects_triangle(self, vertex1, vertex2, vertex3)
    }

    pub fn intersects_box(&self, bbox: &BoundingBox) -> Option<Scalar> {
        collision::ray_intersects_box(self, bbox)
    }

    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> Option<Scalar> {
        collision::ray_intersects_sphere(self, sphere)
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ray[{} -> {}]", self.position, self.direction)
    }
}
