use crate::collision;
use crate::geometry::{Ray, Vec3, Vec4};
use crate::shapes::{BoundingBox, BoundingSphere, PlaneIntersectionType};
use crate::utility::{Scalar, ZERO_TOLERANCE};
use log::trace;
use std::fmt::{Display, Formatter};

/// An infinite plane in the form `normal·p + d = 0`.
///
/// `normal·p + d` is the signed distance of the point `p` from the plane when the normal is
/// normalized: points with a positive distance are in front of the plane.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// The normal of the plane.
    pub normal: Vec3,
    /// The signed distance of the plane from the origin, along the negative normal.
    pub d: Scalar,
}

impl Plane {
    /// Creates a plane with the given `normal` and distance `d`.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    /// use halp_math::shapes::Plane;
    ///
    /// // the plane y = 2
    /// let plane = Plane::new(&Vec3::unit_y(), -2.0);
    ///
    /// assert_eq!(plane.dot_coordinate(&Vec3::new(0.0, 2.0, 0.0)), 0.0);
    /// ```
    pub fn new(normal: &Vec3, d: Scalar) -> Plane {
        Plane { normal: *normal, d }
    }

    /// Creates the plane passing through `point` and perpendicular to `normal`.
    pub fn from_point_normal(point: &Vec3, normal: &Vec3) -> Plane {
        Plane {
            normal: *normal,
            d: -Vec3::dot(normal, point),
        }
    }

    /// Creates the plane passing through three points.
    ///
    /// The normal is normalized and follows the winding `point1 -> point2 -> point3` with the
    /// right-hand rule.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    /// use halp_math::shapes::Plane;
    ///
    /// let plane = Plane::from_points(
    ///     &Vec3::new(0.0, 0.0, 1.0),
    ///     &Vec3::new(1.0, 0.0, 1.0),
    ///     &Vec3::new(0.0, 1.0, 1.0),
    /// );
    ///
    /// assert_eq!(plane.normal, Vec3::unit_z());
    /// assert_eq!(plane.d, -1.0);
    /// ```
    pub fn from_points(point1: &Vec3, point2: &Vec3, point3: &Vec3) -> Plane {
        let normal = Vec3::cross(&(point2 - point1), &(point3 - point1)).normalized();
        Plane {
            normal,
            d: -Vec3::dot(&normal, point1),
        }
    }

    /// Creates a plane from a [Vec4] in the form `(normal.x, normal.y, normal.z, d)`.
    pub fn from_vec4(vec: &Vec4) -> Plane {
        Plane {
            normal: Vec3::new(vec.x, vec.y, vec.z),
            d: vec.w,
        }
    }

    /// Rescales the plane in place so that its normal has unit length.
    ///
    /// Planes with a normal shorter than [ZERO_TOLERANCE] are left unchanged.
    pub fn normalize(&mut self) {
        let len = self.normal.length();
        if len > ZERO_TOLERANCE {
            let inverse = 1.0 / len;
            self.normal *= inverse;
            self.d *= inverse;
        } else {
            trace!("Plane normal too short to be normalized: {}", self);
        }
    }

    /// Returns a copy of the plane with a unit-length normal.
    #[must_use = "Plane::normalized() does not act in place!"]
    pub fn normalized(&self) -> Plane {
        let mut retval = *self;
        retval.normalize();
        retval
    }

    /// Returns the same plane facing the opposite direction.
    pub fn negate(&self) -> Plane {
        Plane {
            normal: -self.normal,
            d: -self.d,
        }
    }

    /// Returns `normal·point + d`, the signed distance of `point` for normalized planes.
    pub fn dot_coordinate(&self, point: &Vec3) -> Scalar {
        Vec3::dot(&self.normal, point) + self.d
    }

    /// Returns `normal·vec`, ignoring the `d` component.
    pub fn dot_normal(&self, vec: &Vec3) -> Scalar {
        Vec3::dot(&self.normal, vec)
    }

    /// Returns the plane as `(normal.x, normal.y, normal.z, d)`.
    pub fn to_vec4(&self) -> Vec4 {
        Vec4::from_vec3(&self.normal, self.d)
    }

    pub fn intersects_point(&self, point: &Vec3) -> PlaneIntersectionType {
        collision::plane_intersects_point(self, point)
    }

    /// Intersects the plane with a ray, see [collision::ray_intersects_plane].
    pub fn intersects_ray(&self, ray: &Ray) -> Option<Scalar> {
        collision::ray_intersects_plane(ray, self)
    }

    pub fn intersects_plane(&self, other: &Plane) -> bool {
        collision::plane_intersects_plane(self, other)
    }

    /// Returns the line shared by the two planes, see [collision::plane_intersects_plane_line].
    pub fn intersection_line(&self, other: &Plane) -> Option<Ray> {
        collision::plane_intersects_plane_line(self, other)
    }

    pub fn intersects_triangle(
        &self,
        vertex1: &Vec3,
        vertex2: &Vec3,
        vertex3: &Vec3,
    ) -> PlaneIntersectionType {
        collision::plane_intersects_triangle(self, vertex1, vertex2, vertex3)
    }

    pub fn intersects_box(&self, bbox: &BoundingBox) -> PlaneIntersectionType {
        collision::plane_intersects_box(self, bbox)
    }

    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> PlaneIntersectionType {
        collision::plane_intersects_sphere(self, sphere)
    }
}

impl Display for Plane {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Plane[{}, d={}]", self.normal, self.d)
    }
}
