use crate::collision;
use crate::error::MathError;
use crate::geometry::{Ray, Vec3};
use crate::shapes::{BoundingBox, ContainmentType, Plane, PlaneIntersectionType};
use crate::utility::Scalar;
use std::fmt::{Display, Formatter};

/// A bounding volume shaped as a sphere, defined by a `center` and a `radius`.
///
/// The radius is expected to be non-negative.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingSphere {
    /// The centre of the sphere.
    pub center: Vec3,
    /// The radius of the sphere.
    pub radius: Scalar,
}

impl BoundingSphere {
    /// Creates a new sphere with the given `center` and `radius`.
    pub fn new(center: &Vec3, radius: Scalar) -> BoundingSphere {
        BoundingSphere {
            center: *center,
            radius,
        }
    }

    /// Constructs a sphere enclosing every given point.
    ///
    /// The centre is the average of the points and the radius the distance of the furthest one,
    /// so the result is not necessarily the smallest enclosing sphere.
    ///
    /// Fails with [MathError::InvalidArgument] if `points` is empty.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    /// use halp_math::shapes::BoundingSphere;
    ///
    /// let points = [Vec3::new(-2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)];
    /// let sphere = BoundingSphere::from_points(&points).unwrap();
    ///
    /// assert_eq!(sphere.center, Vec3::zero());
    /// assert_eq!(sphere.radius, 2.0);
    /// ```
    pub fn from_points(points: &[Vec3]) -> Result<BoundingSphere, MathError> {
        if points.is_empty() {
            return Err(MathError::invalid_argument(
                "points",
                "at least one point is required",
            ));
        }
        let sum = points.iter().fold(Vec3::zero(), |acc, point| acc + point);
        let center = sum / points.len() as Scalar;
        let radius_squared = points
            .iter()
            .map(|point| Vec3::distance_squared(&center, point))
            .fold(0.0, Scalar::max);
        Ok(BoundingSphere {
            center,
            radius: radius_squared.sqrt(),
        })
    }

    /// Constructs the sphere passing through all the corners of a box.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    /// use halp_math::shapes::{BoundingBox, BoundingSphere};
    ///
    /// let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::new(2.0, 3.0, 6.0));
    /// let sphere = BoundingSphere::from_box(&bbox);
    ///
    /// assert_eq!(sphere.center, Vec3::new(1.0, 1.5, 3.0));
    /// assert_eq!(sphere.radius, 3.5);
    /// ```
    pub fn from_box(bbox: &BoundingBox) -> BoundingSphere {
        BoundingSphere {
            center: Vec3::lerp(&bbox.minimum, &bbox.maximum, 0.5),
            radius: Vec3::distance(&bbox.minimum, &bbox.maximum) * 0.5,
        }
    }

    /// Constructs the smallest sphere enclosing both the current sphere and `other`.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    /// use halp_math::shapes::BoundingSphere;
    ///
    /// let sphere0 = BoundingSphere::new(&Vec3::zero(), 1.0);
    /// let sphere1 = BoundingSphere::new(&Vec3::new(4.0, 0.0, 0.0), 1.0);
    /// let merged = sphere0.merge(&sphere1);
    ///
    /// assert_eq!(merged.center, Vec3::new(2.0, 0.0, 0.0));
    /// assert_eq!(merged.radius, 3.0);
    /// ```
    pub fn merge(&self, other: &BoundingSphere) -> BoundingSphere {
        let difference = other.center - self.center;
        let length = difference.length();
        let radius = self.radius;
        let radius2 = other.radius;
        if radius + radius2 >= length {
            if radius - radius2 >= length {
                return *self;
            }
            if radius2 - radius >= length {
                return *other;
            }
        }
        let direction = difference * (1.0 / length);
        let min = (-radius).min(length - radius2);
        let max = (radius.max(length + radius2) - min) * 0.5;
        BoundingSphere {
            center: self.center + direction * (max + min),
            radius: max,
        }
    }

    /// Intersects the sphere with a ray, see [collision::ray_intersects_sphere].
    pub fn intersects_ray(&self, ray: &Ray) -> Option<Scalar> {
        collision::ray_intersects_sphere(ray, self)
    }

    pub fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        collision::plane_intersects_sphere(plane, self)
    }

    pub fn intersects_triangle(&self, vertex1: &Vec3, vertex2: &Vec3, vertex3: &Vec3) -> bool {
        collision::sphere_intersects_triangle(self, vertex1, vertex2, vertex3)
    }

    pub fn intersects_box(&self, bbox: &BoundingBox) -> bool {
        collision::box_intersects_sphere(bbox, self)
    }

    pub fn intersects_sphere(&self, other: &BoundingSphere) -> bool {
        collision::sphere_intersects_sphere(self, other)
    }

    pub fn contains_point(&self, point: &Vec3) -> ContainmentType {
        collision::sphere_contains_point(self, point)
    }

    pub fn contains_triangle(
        &self,
        vertex1: &Vec3,
        vertex2: &Vec3,
        vertex3: &Vec3,
    ) -> ContainmentType {
        collision::sphere_contains_triangle(self, vertex1, vertex2, vertex3)
    }

    pub fn contains_box(&self, bbox: &BoundingBox) -> ContainmentType {
        collision::sphere_contains_box(self, bbox)
    }

    pub fn contains_sphere(&self, other: &BoundingSphere) -> ContainmentType {
        collision::sphere_contains_sphere(self, other)
    }
}

impl Display for BoundingSphere {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoundingSphere[{}, r={}]", self.center, self.radius)
    }
}
