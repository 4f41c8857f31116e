use crate::collision;
use crate::error::MathError;
use crate::geometry::{Ray, Vec3};
use crate::shapes::{BoundingSphere, ContainmentType, Plane, PlaneIntersectionType};
use crate::utility::Scalar;
use overload::overload;
use std::fmt::{Display, Formatter};
use std::ops;

/// An axis aligned bounding box.
///
/// This class represents a bounding volume, a volume that contains a specific set of points.
/// This bounding volume is a Box, as the name implies, and it's aligned with the axis of the scene.
///
/// The box is defined by two points, the `minimum` corner and the `maximum` corner. Every
/// component of `minimum` is expected to be lower or equal than the same component of `maximum`:
/// this is not enforced, and boxes violating it give incorrect results in every query.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// The corner with the lowest coordinates.
    pub minimum: Vec3,
    /// The corner with the highest coordinates.
    pub maximum: Vec3,
}

impl BoundingBox {
    /// Constructs a bounding box with the minimum pointing to Infinity and the maximum pointing
    /// to -Infinity.
    ///
    /// This bounding box is degenerated thus it works exactly as an empty box, as any point can be
    /// added to it, however, some methods may return unexpected values.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    /// use halp_math::shapes::BoundingBox;
    ///
    /// let bbox = BoundingBox::empty().engulf(&Vec3::one());
    ///
    /// assert_eq!(bbox.minimum, Vec3::one());
    /// assert_eq!(bbox.maximum, Vec3::one());
    /// ```
    pub fn empty() -> BoundingBox {
        BoundingBox {
            minimum: Vec3::new(Scalar::INFINITY, Scalar::INFINITY, Scalar::INFINITY),
            maximum: Vec3::new(
                Scalar::NEG_INFINITY,
                Scalar::NEG_INFINITY,
                Scalar::NEG_INFINITY,
            ),
        }
    }

    /// Constructs a bounding box from its two corners, as given.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    /// use halp_math::shapes::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::one());
    ///
    /// assert_eq!(bbox.surface(), 6.0);
    /// ```
    pub fn new(minimum: &Vec3, maximum: &Vec3) -> BoundingBox {
        BoundingBox {
            minimum: *minimum,
            maximum: *maximum,
        }
    }

    /// Constructs the smallest bounding box enclosing every given point.
    ///
    /// Fails with [MathError::InvalidArgument] if `points` is empty.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    /// use halp_math::shapes::BoundingBox;
    ///
    /// let points = [Vec3::new(1.0, -2.0, 0.0), Vec3::new(-1.0, 3.0, 0.5)];
    /// let bbox = BoundingBox::from_points(&points).unwrap();
    ///
    /// assert_eq!(bbox.minimum, Vec3::new(-1.0, -2.0, 0.0));
    /// assert_eq!(bbox.maximum, Vec3::new(1.0, 3.0, 0.5));
    /// assert!(BoundingBox::from_points(&[]).is_err());
    /// ```
    pub fn from_points(points: &[Vec3]) -> Result<BoundingBox, MathError> {
        if points.is_empty() {
            return Err(MathError::invalid_argument(
                "points",
                "at least one point is required",
            ));
        }
        Ok(points
            .iter()
            .fold(BoundingBox::empty(), |bbox, point| bbox.engulf(point)))
    }

    /// Constructs the smallest bounding box enclosing a sphere.
    pub fn from_sphere(sphere: &BoundingSphere) -> BoundingBox {
        let radius = Vec3::new(sphere.radius, sphere.radius, sphere.radius);
        BoundingBox {
            minimum: sphere.center - radius,
            maximum: sphere.center + radius,
        }
    }

    /// Expands the bounding box by a given amount in every axis, both positive and negative.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    /// use halp_math::shapes::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::one());
    /// assert_eq!(bbox.surface(), 6.0); //each face has surface == 1.0
    ///
    /// let expanded = bbox.expand(1.0);
    /// assert_eq!(expanded.surface(), 54.0); // each face has surface == 9.0
    /// ```
    pub fn expand(&self, value: Scalar) -> BoundingBox {
        BoundingBox {
            minimum: self.minimum - value,
            maximum: self.maximum + value,
        }
    }

    /// Creates a new, bigger, bounding box that encloses both the old bounding box and the given
    /// point.
    pub fn engulf(&self, point: &Vec3) -> BoundingBox {
        BoundingBox {
            minimum: Vec3::min(&self.minimum, point),
            maximum: Vec3::max(&self.maximum, point),
        }
    }

    /// Creates a new, bigger, bounding box that encloses two bounding boxes: the current one and
    /// the one passed as input parameter.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    /// use halp_math::shapes::BoundingBox;
    ///
    /// let bbox0 = BoundingBox::new(&Vec3::zero(), &Vec3::one());
    /// let bbox1 = BoundingBox::new(&Vec3::new(3.0, 3.0, 3.0), &Vec3::new(4.0, 4.0, 4.0));
    /// let bigger = bbox0.merge(&bbox1);
    ///
    /// assert_eq!(bigger.surface(), 96.0); // each face has surface == 16.0
    /// ```
    pub fn merge(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            minimum: Vec3::min(&self.minimum, &other.minimum),
            maximum: Vec3::max(&self.maximum, &other.maximum),
        }
    }

    /// Returns the eight corners of the box.
    ///
    /// The four corners with the highest `z` come first, each group of four is ordered as
    /// `(min.x, max.y)`, `(max.x, max.y)`, `(max.x, min.y)`, `(min.x, min.y)`.
    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (&self.minimum, &self.maximum);
        [
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, min.y, min.z),
        ]
    }

    /// Returns the point at the center of the bounding box.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    /// use halp_math::shapes::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::one());
    ///
    /// let centre = bbox.center();
    /// assert_eq!(centre.x, 0.5);
    /// assert_eq!(centre.y, 0.5);
    /// assert_eq!(centre.z, 0.5);
    /// ```
    pub fn center(&self) -> Vec3 {
        (self.minimum + self.maximum) * 0.5
    }

    /// Returns the length of the box along each axis.
    pub fn size(&self) -> Vec3 {
        self.maximum - self.minimum
    }

    /// Returns half the length of the box along each axis.
    pub fn extent(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// Returns the total surface of the bounding box.
    pub fn surface(&self) -> Scalar {
        let diagonal = self.size();
        2.0 * (diagonal.x * diagonal.y + diagonal.x * diagonal.z + diagonal.y * diagonal.z)
    }

    /// Returns the total volume of the bounding box.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    /// use halp_math::shapes::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(&Vec3::zero(), &Vec3::new(2.0, 2.0, 2.0));
    ///
    /// assert_eq!(bbox.volume(), 8.0);
    /// ```
    pub fn volume(&self) -> Scalar {
        let diagonal = self.size();
        diagonal.x * diagonal.y * diagonal.z
    }

    /// Returns the longest axis of the bounding box.
    ///
    /// The possible return values are:
    /// - `0` - if the `x` axis is the longest
    /// - `1` - if the `y` axis is the longest
    /// - `2` - if the `z` axis is the longest
    ///
    /// Out of two or more axes having the same length, the first appearing in the previous list is
    /// returned.
    pub fn longest_axis(&self) -> u8 {
        let diagonal = self.size();
        if diagonal.x >= diagonal.y && diagonal.x >= diagonal.z {
            0
        } else if diagonal.y >= diagonal.z {
            1
        } else {
            2
        }
    }

    /// Intersects the box with a ray, see [collision::ray_intersects_box].
    pub fn intersects_ray(&self, ray: &Ray) -> Option<Scalar> {
        collision::ray_intersects_box(ray, self)
    }

    /// Classifies the box against a plane, see [collision::plane_intersects_box].
    pub fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        collision::plane_intersects_box(plane, self)
    }

    pub fn intersects_box(&self, other: &BoundingBox) -> bool {
        collision::box_intersects_box(self, other)
    }

    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        collision::box_intersects_sphere(self, sphere)
    }

    /// Returns [ContainmentType::Contains] if the point is inside the box, boundaries included.
    pub fn contains_point(&self, point: &Vec3) -> ContainmentType {
        collision::box_contains_point(self, point)
    }

    pub fn contains_box(&self, other: &BoundingBox) -> ContainmentType {
        collision::box_contains_box(self, other)
    }

    pub fn contains_sphere(&self, sphere: &BoundingSphere) -> ContainmentType {
        collision::box_contains_sphere(self, sphere)
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoundingBox[{} -> {}]", self.minimum, self.maximum)
    }
}

overload!((a: ?BoundingBox) + (b: ?Vec3) -> BoundingBox {a.engulf(&b)});
overload!((a: ?BoundingBox) + (b: ?BoundingBox) -> BoundingBox {a.merge(&b)});
overload!((a: &mut BoundingBox) += (b: ?Vec3) {*a = a.engulf(&b);});
overload!((a: &mut BoundingBox) += (b: ?BoundingBox) {*a = a.merge(&b);});
