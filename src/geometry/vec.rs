use crate::utility::{is_one, smooth_step, Scalar, ZERO_TOLERANCE};
#[cfg(debug_assertions)]
use log::warn;
use log::trace;
use overload::overload;
use std::fmt::Formatter;
use std::ops;

/// A vector of two components.
///
/// Vec2 class represents a vector in a 2D space.
///
/// A Vec2 consist of two coordinates, usually called `x`, and `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// The `x` component of the vector.
    pub x: Scalar,
    /// The `y` component of the vector.
    pub y: Scalar,
}

impl Vec2 {
    /// Constructs a 2D zero vector, a vector in the form `(0.0, 0.0)`.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec2;
    ///
    /// let v = Vec2::zero();
    ///
    /// assert_eq!(v.x, 0.0);
    /// assert_eq!(v.y, 0.0);
    /// ```
    pub fn zero() -> Vec2 {
        Vec2 { x: 0., y: 0. }
    }

    /// Constructs a vector with every component set to `1.0`.
    pub fn one() -> Vec2 {
        Vec2 { x: 1., y: 1. }
    }

    /// Constructs a vector with the given `(x, y)` components.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec2;
    ///
    /// let v = Vec2::new(3.5, -2.2);
    ///
    /// assert_eq!(v.x, 3.5);
    /// assert_eq!(v.y, -2.2);
    /// ```
    pub fn new(x: Scalar, y: Scalar) -> Vec2 {
        Vec2 { x, y }
    }

    /// Constructs a normalized vector pointing towards `(1.0, 0.0)`.
    pub fn unit_x() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }

    /// Constructs a normalized vector pointing towards `(0.0, 1.0)`.
    pub fn unit_y() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }

    /// Returns the euclidean length (or magnitude) of the vector.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec2;
    ///
    /// let v = Vec2::new(3.0, 4.0);
    ///
    /// assert_eq!(v.length(), 5.0);
    /// ```
    pub fn length(&self) -> Scalar {
        ((self.x * self.x) + (self.y * self.y)).sqrt()
    }

    /// Returns the squared euclidean length of the vector.
    ///
    /// Cheaper than [Vec2::length] as no square root is involved.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec2;
    ///
    /// let v = Vec2::new(3.0, 4.0);
    ///
    /// assert_eq!(v.length_squared(), 25.0);
    /// ```
    pub fn length_squared(&self) -> Scalar {
        self.x * self.x + self.y * self.y
    }

    /// Normalizes the current vector in place. A vector is normalized if its euclidean length is
    /// equal to 1.0.
    ///
    /// Vectors shorter than [ZERO_TOLERANCE] are left unchanged.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec2;
    ///
    /// let mut v = Vec2::new(5.0, 0.0);
    /// v.normalize();
    ///
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 0.0);
    /// ```
    pub fn normalize(&mut self) {
        let len = self.length();
        if len > ZERO_TOLERANCE {
            let inverse = 1. / len;
            self.x *= inverse;
            self.y *= inverse;
        } else {
            trace!("Vec2 too short to be normalized: {}", self);
        }
    }

    /// Returns the normalized version of the current vector, leaving the current one untouched.
    ///
    /// Vectors shorter than [ZERO_TOLERANCE] are returned unchanged.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec2;
    ///
    /// let v = Vec2::new(5.0, 5.0);
    /// let normalized = v.normalized();
    ///
    /// assert!(normalized.is_normalized());
    /// ```
    #[must_use = "Vec2::normalized() does not act in place!"]
    pub fn normalized(&self) -> Vec2 {
        let mut retval = *self;
        retval.normalize();
        retval
    }

    /// Checks whether the vector is normalized or not.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec2;
    ///
    /// let normalized = Vec2::new(1.0, 0.0);
    /// let not_normalized = Vec2::new(1.5, 0.5);
    ///
    /// assert!(normalized.is_normalized());
    /// assert!(!not_normalized.is_normalized());
    /// ```
    pub fn is_normalized(&self) -> bool {
        is_one(self.length_squared())
    }

    /// Returns the component-wise absolute value for this vector.
    pub fn abs(&self) -> Vec2 {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Returns the current vector restricted between two boundaries.
    ///
    /// The lower bound is defined by the `min` parameter, while the upper bound is defined by the
    /// `max` one. If the current vector is in-between, it is left unchanged.
    ///
    /// Clamping is performed component-wise.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec2;
    ///
    /// let v = Vec2::new(1.5, 0.5);
    /// let max = Vec2::new(1.0, 1.0);
    /// let min = Vec2::zero();
    /// let clamped = v.clamp(&min, &max);
    ///
    /// assert_eq!(clamped.x, 1.0);
    /// assert_eq!(clamped.y, 0.5);
    /// ```
    pub fn clamp(&self, min: &Vec2, max: &Vec2) -> Vec2 {
        Vec2::min(&Vec2::max(self, min), max)
    }

    /// Returns the component-wise minimum of two vectors.
    pub fn min(vec_a: &Vec2, vec_b: &Vec2) -> Vec2 {
        Vec2 {
            x: vec_a.x.min(vec_b.x),
            y: vec_a.y.min(vec_b.y),
        }
    }

    /// Returns the component-wise maximum of two vectors.
    pub fn max(vec_a: &Vec2, vec_b: &Vec2) -> Vec2 {
        Vec2 {
            x: vec_a.x.max(vec_b.x),
            y: vec_a.y.max(vec_b.y),
        }
    }

    /// Performs the dot product between two vectors.
    ///
    /// Given two vectors `a` and `b` the dot product is defined as ‖`a`‖*‖`b`‖ cos`θ`, where ‖`x`‖
    /// represents the euclidean length of the vector `x`, and `θ` represents the angle between the
    /// two vectors.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec2;
    ///
    /// let v = Vec2::new(1.0, 2.0);
    /// let v2 = Vec2::new(4.0, -5.0);
    ///
    /// assert_eq!(Vec2::dot(&v, &v2), -6.0);
    /// ```
    pub fn dot(vec_a: &Vec2, vec_b: &Vec2) -> Scalar {
        vec_a.x * vec_b.x + vec_a.y * vec_b.y
    }

    /// Returns the euclidean distance between two vectors interpreted as points.
    pub fn distance(vec_a: &Vec2, vec_b: &Vec2) -> Scalar {
        Vec2::distance_squared(vec_a, vec_b).sqrt()
    }

    /// Returns the squared euclidean distance between two vectors interpreted as points.
    pub fn distance_squared(vec_a: &Vec2, vec_b: &Vec2) -> Scalar {
        let x = vec_a.x - vec_b.x;
        let y = vec_a.y - vec_b.y;
        x * x + y * y
    }

    /// Performs a linear interpolation between `start` and `end`.
    ///
    /// An `amount` of `0.0` returns `start`, an amount of `1.0` returns `end`. The amount is not
    /// clamped.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec2;
    ///
    /// let start = Vec2::new(0.0, 10.0);
    /// let end = Vec2::new(10.0, 20.0);
    /// let mid = Vec2::lerp(&start, &end, 0.5);
    ///
    /// assert_eq!(mid.x, 5.0);
    /// assert_eq!(mid.y, 15.0);
    /// ```
    pub fn lerp(start: &Vec2, end: &Vec2, amount: Scalar) -> Vec2 {
        Vec2 {
            x: start.x + (end.x - start.x) * amount,
            y: start.y + (end.y - start.y) * amount,
        }
    }

    /// Interpolates between `start` and `end` easing in and out, see
    /// [smooth_step](crate::utility::smooth_step).
    pub fn smooth_step(start: &Vec2, end: &Vec2, amount: Scalar) -> Vec2 {
        Vec2::lerp(start, end, smooth_step(amount))
    }

    /// Returns the components of the vector as an array `[x, y]`.
    pub fn to_array(&self) -> [Scalar; 2] {
        [self.x, self.y]
    }
}

impl From<[Scalar; 2]> for Vec2 {
    fn from(array: [Scalar; 2]) -> Self {
        Vec2::new(array[0], array[1])
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec2[{}, {}]", self.x, self.y)
    }
}

overload!((a: ?Vec2) + (b: ?Vec2) -> Vec2 {Vec2{x:a.x+b.x,y:a.y+b.y}});
overload!((a: ?Vec2) - (b: ?Vec2) -> Vec2 {Vec2{x:a.x-b.x,y:a.y-b.y}});
overload!((a: ?Vec2) * (b: ?Vec2) -> Vec2 {Vec2{x:a.x*b.x,y:a.y*b.y}});
overload!((a: ?Vec2) / (b: ?Vec2) -> Vec2 {Vec2{x:a.x/b.x,y:a.y/b.y}});
overload!((a: ?Vec2) + (b: Scalar) -> Vec2 {Vec2{x:a.x+b,y:a.y+b}});
overload!((a: ?Vec2) - (b: Scalar) -> Vec2 {Vec2{x:a.x-b,y:a.y-b}});
overload!((a: ?Vec2) * (b: Scalar) -> Vec2 {Vec2{x:a.x*b,y:a.y*b}});
overload!((a: ?Vec2) / (b: Scalar) -> Vec2 {Vec2{x:a.x/b,y:a.y/b}});
overload!((a: Scalar) * (b: ?Vec2) -> Vec2 {Vec2{x:a*b.x,y:a*b.y}});
overload!(- (a: ?Vec2) -> Vec2 {Vec2{x:-a.x,y:-a.y}});
overload!((a: &mut Vec2) += (b: ?Vec2){a.x+=b.x;a.y+=b.y;});
overload!((a: &mut Vec2) -= (b: ?Vec2){a.x-=b.x;a.y-=b.y;});
overload!((a: &mut Vec2) *= (b: Scalar){a.x*=b;a.y*=b;});
overload!((a: &mut Vec2) /= (b: Scalar){a.x/=b;a.y/=b;});

/// A vector of three components.
///
/// Vec3 class represents a vector in a 3D space. The collision routines also use it to represent
/// points.
///
/// A Vec3 consist of three coordinates, usually called `x`, `y` and `z`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// The `x` component of the vector.
    pub x: Scalar,
    /// The `y` component of the vector.
    pub y: Scalar,
    /// The `z` component of the vector.
    pub z: Scalar,
}

impl Vec3 {
    /// Constructs a 3D zero vector, a vector in the form `(0.0, 0.0, 0.0)`.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let v = Vec3::zero();
    ///
    /// assert_eq!(v.x, 0.0);
    /// assert_eq!(v.y, 0.0);
    /// assert_eq!(v.z, 0.0);
    /// ```
    pub fn zero() -> Vec3 {
        Vec3 {
            x: 0.,
            y: 0.,
            z: 0.,
        }
    }

    /// Constructs a vector with every component set to `1.0`.
    pub fn one() -> Vec3 {
        Vec3 {
            x: 1.,
            y: 1.,
            z: 1.,
        }
    }

    /// Constructs a vector with the given `(x, y, z)` components.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let v = Vec3::new(3.5, -2.2, 1.0);
    ///
    /// assert_eq!(v.x, 3.5);
    /// assert_eq!(v.y, -2.2);
    /// assert_eq!(v.z, 1.0);
    /// ```
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Vec3 {
        Vec3 { x, y, z }
    }

    /// Constructs a normalized vector pointing towards `(1.0, 0.0, 0.0)`.
    pub fn unit_x() -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0)
    }

    /// Constructs a normalized vector pointing towards `(0.0, 1.0, 0.0)`.
    pub fn unit_y() -> Vec3 {
        Vec3::new(0.0, 1.0, 0.0)
    }

    /// Constructs a normalized vector pointing towards `(0.0, 0.0, 1.0)`.
    pub fn unit_z() -> Vec3 {
        Vec3::new(0.0, 0.0, 1.0)
    }

    /// Returns the euclidean length (or magnitude) of the vector.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let v = Vec3::new(2.0, 3.0, 6.0);
    ///
    /// assert_eq!(v.length(), 7.0);
    /// ```
    pub fn length(&self) -> Scalar {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the squared euclidean length of the vector.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let v = Vec3::new(2.0, 3.0, 6.0);
    ///
    /// assert_eq!(v.length_squared(), 49.0);
    /// ```
    pub fn length_squared(&self) -> Scalar {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Normalizes the current vector in place, dividing each component by the length.
    ///
    /// Vectors shorter than [ZERO_TOLERANCE] are left unchanged.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let mut v = Vec3::new(0.0, 0.0, 4.0);
    /// v.normalize();
    ///
    /// assert_eq!(v.z, 1.0);
    /// ```
    pub fn normalize(&mut self) {
        let len = self.length();
        if len > ZERO_TOLERANCE {
            let inverse = 1. / len;
            self.x *= inverse;
            self.y *= inverse;
            self.z *= inverse;
        } else {
            trace!("Vec3 too short to be normalized: {}", self);
        }
    }

    /// Returns the normalized version of the current vector.
    ///
    /// A vector is normalized if its euclidean length is equal to 1.0.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let v = Vec3::new(5.0, 0.0, 0.0);
    /// let normalized = v.normalized();
    ///
    /// assert_eq!(normalized.length(), 1.0);
    /// ```
    #[must_use = "Vec3::normalized() does not act in place!"]
    pub fn normalized(&self) -> Vec3 {
        let mut retval = *self;
        retval.normalize();
        retval
    }

    /// Checks whether the vector is normalized or not.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let normalized = Vec3::new(0.0, 1.0, 0.0);
    /// let not_normalized = Vec3::new(1.5, 0.5, 25.0);
    ///
    /// assert!(normalized.is_normalized());
    /// assert!(!not_normalized.is_normalized());
    /// ```
    pub fn is_normalized(&self) -> bool {
        is_one(self.length_squared())
    }

    /// Returns the component-wise absolute value for this vector.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let negative = Vec3::new(-1.0, -2.0, -3.0);
    /// let positive = negative.abs();
    ///
    /// assert_eq!(positive.x, 1.0);
    /// assert_eq!(positive.y, 2.0);
    /// assert_eq!(positive.z, 3.0);
    /// ```
    pub fn abs(&self) -> Vec3 {
        Vec3 {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }

    /// Returns the current vector restricted between two boundaries.
    ///
    /// The lower bound is defined by the `min` parameter, while the upper bound is defined by the
    /// `max` one. If the current vector is in-between, it is left unchanged.
    ///
    /// Clamping is performed component-wise.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let v = Vec3::new(1.5, 0.5, -2.5);
    /// let max = Vec3::new(1.0, 1.0, 1.0);
    /// let min = Vec3::zero();
    /// let clamped = v.clamp(&min, &max);
    ///
    /// assert_eq!(clamped.x, 1.0);
    /// assert_eq!(clamped.y, 0.5);
    /// assert_eq!(clamped.z, 0.0);
    /// ```
    pub fn clamp(&self, min: &Vec3, max: &Vec3) -> Vec3 {
        Vec3::min(&Vec3::max(self, min), max)
    }

    /// Returns the component-wise minimum of two vectors.
    pub fn min(vec_a: &Vec3, vec_b: &Vec3) -> Vec3 {
        Vec3 {
            x: vec_a.x.min(vec_b.x),
            y: vec_a.y.min(vec_b.y),
            z: vec_a.z.min(vec_b.z),
        }
    }

    /// Returns the component-wise maximum of two vectors.
    pub fn max(vec_a: &Vec3, vec_b: &Vec3) -> Vec3 {
        Vec3 {
            x: vec_a.x.max(vec_b.x),
            y: vec_a.y.max(vec_b.y),
            z: vec_a.z.max(vec_b.z),
        }
    }

    /// Reflects a vector around a centre of reflection.
    ///
    /// The centre of reflection is represented by the `centre` parameter and should be normalized.
    ///
    /// If debug assertions are enabled, a warning is issued in case the centre of reflection is
    /// not normalized.
    /// # Example
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let v = Vec3::new(0.5, 0.3, -0.5);
    /// let centre = Vec3::new(0., 0., 1.);
    /// let reflected = v.reflect(&centre);
    ///
    /// assert_eq!(reflected.x, v.x);
    /// assert_eq!(reflected.y, v.y);
    /// assert_eq!(reflected.z, -v.z);
    /// ```
    pub fn reflect(&self, centre: &Vec3) -> Vec3 {
        #[cfg(debug_assertions)]
        {
            if !centre.is_normalized() {
                warn!("Reflecting vector around non-normalized centre");
            }
        }
        self - (centre * (2. * Vec3::dot(self, centre)))
    }

    /// Performs the dot product between two vectors.
    ///
    /// Given two vectors `a` and `b` the dot product `a`·`b` is defined as ‖`a`‖ * ‖`b`‖ * cos`θ`,
    /// where:
    /// - ‖`x`‖ represents the euclidean length of the vector `x`.
    /// - `θ` represents the angle between the two vectors.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let v0 = Vec3::new(1.0, 2.0, 3.0);
    /// let v1 = Vec3::new(4.0, -5.0, 6.0);
    ///
    /// assert_eq!(Vec3::dot(&v0, &v1), 12.0);
    /// ```
    pub fn dot(vec_a: &Vec3, vec_b: &Vec3) -> Scalar {
        vec_a.x * vec_b.x + vec_a.y * vec_b.y + vec_a.z * vec_b.z
    }

    /// Performs the cross product between two vectors.
    ///
    /// Given two vectors `a` and `b` the cross product `a` ⨯ `b` represents the vector
    /// perpendicular to both `a` and `b` defined as `n` * ‖`a`‖ * ‖`b`‖ * sin`θ`.
    ///
    /// The cross product is anti-commutative and `a ⨯ b = -(b ⨯ a)`. The wanted direction can thus
    /// be obtained by changing the order of the parameters.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let v0 = Vec3::new(3.0, -3.0, 1.0);
    /// let v1 = Vec3::new(4.0, 9.0, 2.0);
    /// let cross = Vec3::cross(&v0, &v1);
    ///
    /// assert_eq!(cross.x, -15.0);
    /// assert_eq!(cross.y, -2.0);
    /// assert_eq!(cross.z, 39.0);
    /// ```
    pub fn cross(vec_a: &Vec3, vec_b: &Vec3) -> Vec3 {
        Vec3 {
            x: vec_a.y * vec_b.z - vec_a.z * vec_b.y,
            y: vec_a.z * vec_b.x - vec_a.x * vec_b.z,
            z: vec_a.x * vec_b.y - vec_a.y * vec_b.x,
        }
    }

    /// Returns the euclidean distance between two vectors interpreted as points.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let p0 = Vec3::new(1.0, 2.0, 3.0);
    /// let p1 = Vec3::new(3.0, 4.0, 4.0);
    ///
    /// assert_eq!(Vec3::distance(&p0, &p1), 3.0);
    /// ```
    pub fn distance(vec_a: &Vec3, vec_b: &Vec3) -> Scalar {
        Vec3::distance_squared(vec_a, vec_b).sqrt()
    }

    /// Returns the squared euclidean distance between two vectors interpreted as points.
    pub fn distance_squared(vec_a: &Vec3, vec_b: &Vec3) -> Scalar {
        let x = vec_a.x - vec_b.x;
        let y = vec_a.y - vec_b.y;
        let z = vec_a.z - vec_b.z;
        x * x + y * y + z * z
    }

    /// Performs a linear interpolation between `start` and `end`.
    ///
    /// The `amount` is not clamped: values outside [`0.0`, `1.0`] extrapolate.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Vec3;
    ///
    /// let start = Vec3::zero();
    /// let end = Vec3::new(2.0, 4.0, 8.0);
    /// let lerped = Vec3::lerp(&start, &end, 0.25);
    ///
    /// assert_eq!(lerped.x, 0.5);
    /// assert_eq!(lerped.y, 1.0);
    /// assert_eq!(lerped.z, 2.0);
    /// ```
    pub fn lerp(start: &Vec3, end: &Vec3, amount: Scalar) -> Vec3 {
        Vec3 {
            x: start.x + (end.x - start.x) * amount,
            y: start.y + (end.y - start.y) * amount,
            z: start.z + (end.z - start.z) * amount,
        }
    }

    /// Interpolates between `start` and `end` easing in and out.
    pub fn smooth_step(start: &Vec3, end: &Vec3, amount: Scalar) -> Vec3 {
        Vec3::lerp(start, end, smooth_step(amount))
    }

    /// Returns the components of the vector as an array `[x, y, z]`.
    pub fn to_array(&self) -> [Scalar; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[Scalar; 3]> for Vec3 {
    fn from(array: [Scalar; 3]) -> Self {
        Vec3::new(array[0], array[1], array[2])
    }
}

impl From<Vec4> for Vec3 {
    fn from(vec: Vec4) -> Self {
        Vec3::new(vec.x, vec.y, vec.z)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec3[{}, {}, {}]", self.x, self.y, self.z)
    }
}

overload!((a: ?Vec3) + (b: ?Vec3) -> Vec3 {Vec3{x:a.x+b.x,y:a.y+b.y,z:a.z+b.z}});
overload!((a: ?Vec3) - (b: ?Vec3) -> Vec3 {Vec3{x:a.x-b.x,y:a.y-b.y,z:a.z-b.z}});
overload!((a: ?Vec3) * (b: ?Vec3) -> Vec3 {Vec3{x:a.x*b.x,y:a.y*b.y,z:a.z*b.z}});
overload!((a: ?Vec3) / (b: ?Vec3) -> Vec3 {Vec3{x:a.x/b.x,y:a.y/b.y,z:a.z/b.z}});
overload!((a: ?Vec3) + (b: Scalar) -> Vec3 {Vec3{x:a.x+b,y:a.y+b,z:a.z+b}});
overload!((a: ?Vec3) - (b: Scalar) -> Vec3 {Vec3{x:a.x-b,y:a.y-b,z:a.z-b}});
overload!((a: ?Vec3) * (b: Scalar) -> Vec3 {Vec3{x:a.x*b,y:a.y*b,z:a.z*b}});
overload!((a: ?Vec3) / (b: Scalar) -> Vec3 {Vec3{x:a.x/b,y:a.y/b,z:a.z/b}});
overload!((a: Scalar) * (b: ?Vec3) -> Vec3 {Vec3{x:a*b.x,y:a*b.y,z:a*b.z}});
overload!(- (a: ?Vec3) -> Vec3 {Vec3{x:-a.x,y:-a.y,z:-a.z}});
overload!((a: &mut Vec3) += (b: ?Vec3){a.x+=b.x;a.y+=b.y;a.z+=b.z;});
overload!((a: &mut Vec3) -= (b: ?Vec3){a.x-=b.x;a.y-=b.y;a.z-=b.z;});
overload!((a: &mut Vec3) *= (b: Scalar){a.x*=b;a.y*=b;a.z*=b;});
overload!((a: &mut Vec3) /= (b: Scalar){a.x/=b;a.y/=b;a.z/=b;});

/// A vector of four components, `x`, `y`, `z` and `w`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    /// The `x` component of the vector.
    pub x: Scalar,
    /// The `y` component of the vector.
    pub y: Scalar,
    /// The `z` component of the vector.
    pub z: Scalar,
    /// The `w` component of the vector.
    pub w: Scalar,
}

impl Vec4 {
    /// Constructs a 4D zero vector.
    pub fn zero() -> Vec4 {
        Vec4::new(0., 0., 0., 0.)
    }

    /// Constructs a vector with every component set to `1.0`.
    pub fn one() -> Vec4 {
        Vec4::new(1., 1., 1., 1.)
    }

    /// Constructs a vector with the given `(x, y, z, w)` components.
    pub fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Vec4 {
        Vec4 { x, y, z, w }
    }

    /// Extends a [Vec3] with the given `w` component.
    /// # Examples
    /// ```
    /// use halp_math::geometry::{Vec3, Vec4};
    ///
    /// let v = Vec4::from_vec3(&Vec3::new(1.0, 2.0, 3.0), 4.0);
    ///
    /// assert_eq!(v.w, 4.0);
    /// ```
    pub fn from_vec3(vec: &Vec3, w: Scalar) -> Vec4 {
        Vec4::new(vec.x, vec.y, vec.z, w)
    }

    pub fn unit_x() -> Vec4 {
        Vec4::new(1., 0., 0., 0.)
    }

    pub fn unit_y() -> Vec4 {
        Vec4::new(0., 1., 0., 0.)
    }

    pub fn unit_z() -> Vec4 {
        Vec4::new(0., 0., 1., 0.)
    }

    pub fn unit_w() -> Vec4 {
        Vec4::new(0., 0., 0., 1.)
    }

    /// Returns the euclidean length of the vector.
    pub fn length(&self) -> Scalar {
        self.length_squared().sqrt()
    }

    /// Returns the squared euclidean length of the vector.
    pub fn length_squared(&self) -> Scalar {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Normalizes the current vector in place. Vectors shorter than [ZERO_TOLERANCE] are left
    /// unchanged.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len > ZERO_TOLERANCE {
            let inverse = 1. / len;
            self.x *= inverse;
            self.y *= inverse;
            self.z *= inverse;
            self.w *= inverse;
        } else {
            trace!("Vec4 too short to be normalized: {}", self);
        }
    }

    /// Returns the normalized version of the current vector.
    #[must_use = "Vec4::normalized() does not act in place!"]
    pub fn normalized(&self) -> Vec4 {
        let mut retval = *self;
        retval.normalize();
        retval
    }

    /// Checks whether the vector is normalized or not.
    pub fn is_normalized(&self) -> bool {
        is_one(self.length_squared())
    }

    /// Returns the component-wise absolute value for this vector.
    pub fn abs(&self) -> Vec4 {
        Vec4::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    /// Returns the current vector restricted component-wise between `min` and `max`.
    pub fn clamp(&self, min: &Vec4, max: &Vec4) -> Vec4 {
        Vec4::min(&Vec4::max(self, min), max)
    }

    pub fn min(vec_a: &Vec4, vec_b: &Vec4) -> Vec4 {
        Vec4 {
            x: vec_a.x.min(vec_b.x),
            y: vec_a.y.min(vec_b.y),
            z: vec_a.z.min(vec_b.z),
            w: vec_a.w.min(vec_b.w),
        }
    }

    pub fn max(vec_a: &Vec4, vec_b: &Vec4) -> Vec4 {
        Vec4 {
            x: vec_a.x.max(vec_b.x),
            y: vec_a.y.max(vec_b.y),
            z: vec_a.z.max(vec_b.z),
            w: vec_a.w.max(vec_b.w),
        }
    }

    /// Performs the dot product between two vectors.
    pub fn dot(vec_a: &Vec4, vec_b: &Vec4) -> Scalar {
        vec_a.x * vec_b.x + vec_a.y * vec_b.y + vec_a.z * vec_b.z + vec_a.w * vec_b.w
    }

    pub fn distance(vec_a: &Vec4, vec_b: &Vec4) -> Scalar {
        Vec4::distance_squared(vec_a, vec_b).sqrt()
    }

    pub fn distance_squared(vec_a: &Vec4, vec_b: &Vec4) -> Scalar {
        (vec_a - vec_b).length_squared()
    }

    /// Performs an unclamped linear interpolation between `start` and `end`.
    pub fn lerp(start: &Vec4, end: &Vec4, amount: Scalar) -> Vec4 {
        Vec4 {
            x: start.x + (end.x - start.x) * amount,
            y: start.y + (end.y - start.y) * amount,
            z: start.z + (end.z - start.z) * amount,
            w: start.w + (end.w - start.w) * amount,
        }
    }

    pub fn smooth_step(start: &Vec4, end: &Vec4, amount: Scalar) -> Vec4 {
        Vec4::lerp(start, end, smooth_step(amount))
    }

    /// Returns the components of the vector as an array `[x, y, z, w]`.
    pub fn to_array(&self) -> [Scalar; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<[Scalar; 4]> for Vec4 {
    fn from(array: [Scalar; 4]) -> Self {
        Vec4::new(array[0], array[1], array[2], array[3])
    }
}

impl std::fmt::Display for Vec4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec4[{}, {}, {}, {}]", self.x, self.y, self.z, self.w)
    }
}

overload!((a: ?Vec4) + (b: ?Vec4) -> Vec4 {Vec4{x:a.x+b.x,y:a.y+b.y,z:a.z+b.z,w:a.w+b.w}});
overload!((a: ?Vec4) - (b: ?Vec4) -> Vec4 {Vec4{x:a.x-b.x,y:a.y-b.y,z:a.z-b.z,w:a.w-b.w}});
overload!((a: ?Vec4) * (b: ?Vec4) -> Vec4 {Vec4{x:a.x*b.x,y:a.y*b.y,z:a.z*b.z,w:a.w*b.w}});
overload!((a: ?Vec4) / (b: ?Vec4) -> Vec4 {Vec4{x:a.x/b.x,y:a.y/b.y,z:a.z/b.z,w:a.w/b.w}});
overload!((a: ?Vec4) + (b: Scalar) -> Vec4 {Vec4{x:a.x+b,y:a.y+b,z:a.z+b,w:a.w+b}});
overload!((a: ?Vec4) - (b: Scalar) -> Vec4 {Vec4{x:a.x-b,y:a.y-b,z:a.z-b,w:a.w-b}});
overload!((a: ?Vec4) * (b: Scalar) -> Vec4 {Vec4{x:a.x*b,y:a.y*b,z:a.z*b,w:a.w*b}});
overload!((a: ?Vec4) / (b: Scalar) -> Vec4 {Vec4{x:a.x/b,y:a.y/b,z:a.z/b,w:a.w/b}});
overload!((a: Scalar) * (b: ?Vec4) -> Vec4 {Vec4{x:a*b.x,y:a*b.y,z:a*b.z,w:a*b.w}});
overload!(- (a: ?Vec4) -> Vec4 {Vec4{x:-a.x,y:-a.y,z:-a.z,w:-a.w}});
overload!((a: &mut Vec4) += (b: ?Vec4){a.x+=b.x;a.y+=b.y;a.z+=b.z;a.w+=b.w;});
overload!((a: &mut Vec4) -= (b: ?Vec4){a.x-=b.x;a.y-=b.y;a.z-=b.z;a.w-=b.w;});
overload!((a: &mut Vec4) *= (b: Scalar){a.x*=b;a.y*=b;a.z*=b;a.w*=b;});
overload!((a: &mut Vec4) /= (b: Scalar){a.x/=b;a.y/=b;a.z/=b;a.w/=b;});
