use crate::geometry::{Vec3, Vec4};
use crate::utility::{clamp, is_one, is_zero, Scalar, ZERO_TOLERANCE};
#[cfg(debug_assertions)]
use log::warn;
use log::trace;
use overload::overload;
use std::fmt::Formatter;
use std::ops;

/// A quaternion `xi + yj + zk + w`, used to represent rotations.
///
/// The quaternion is not kept normalized automatically: operations that expect a unit quaternion
/// (like [Quaternion::rotate] or [Quaternion::angle]) produce meaningless results unless
/// [Quaternion::normalize] has been called beforehand.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    /// The `x` component of the vector part.
    pub x: Scalar,
    /// The `y` component of the vector part.
    pub y: Scalar,
    /// The `z` component of the vector part.
    pub z: Scalar,
    /// The scalar part.
    pub w: Scalar,
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::identity()
    }
}

impl Quaternion {
    /// Constructs the identity quaternion `(0.0, 0.0, 0.0, 1.0)`, representing no rotation.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Quaternion;
    ///
    /// let q = Quaternion::identity();
    ///
    /// assert!(q.is_identity());
    /// ```
    pub fn identity() -> Quaternion {
        Quaternion {
            x: 0.,
            y: 0.,
            z: 0.,
            w: 1.,
        }
    }

    /// Constructs a quaternion with the given components.
    pub fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Quaternion {
        Quaternion { x, y, z, w }
    }

    /// Constructs a quaternion from the components of a [Vec4].
    pub fn from_vec4(vec: &Vec4) -> Quaternion {
        Quaternion::new(vec.x, vec.y, vec.z, vec.w)
    }

    /// Constructs a quaternion representing a rotation of `angle` radians around `axis`.
    ///
    /// The axis is normalized before being used.
    /// # Examples
    /// ```
    /// use halp_math::geometry::{Quaternion, Vec3};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let q = Quaternion::rotation_axis(&Vec3::unit_z(), std::f32::consts::FRAC_PI_2 as _);
    /// let rotated = q.rotate(&Vec3::unit_x());
    ///
    /// assert_approx_eq!(rotated.x, 0.0);
    /// assert_approx_eq!(rotated.y, 1.0);
    /// assert_approx_eq!(rotated.z, 0.0);
    /// ```
    pub fn rotation_axis(axis: &Vec3, angle: Scalar) -> Quaternion {
        let normalized = axis.normalized();
        let half = angle * 0.5;
        let sin = half.sin();
        let cos = half.cos();
        Quaternion {
            x: normalized.x * sin,
            y: normalized.y * sin,
            z: normalized.z * sin,
            w: cos,
        }
    }

    pub fn is_identity(&self) -> bool {
        is_zero(self.x) && is_zero(self.y) && is_zero(self.z) && is_one(self.w)
    }

    pub fn is_normalized(&self) -> bool {
        is_one(self.length_squared())
    }

    pub fn length(&self) -> Scalar {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> Scalar {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Normalizes the quaternion in place, dividing every component by the length.
    ///
    /// Quaternions shorter than [ZERO_TOLERANCE] are left unchanged.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len > ZERO_TOLERANCE {
            let inverse = 1. / len;
            self.x *= inverse;
            self.y *= inverse;
            self.z *= inverse;
            self.w *= inverse;
        } else {
            trace!("Quaternion too short to be normalized: {}", self);
        }
    }

    /// Returns a normalized copy of the quaternion.
    #[must_use = "Quaternion::normalized() does not act in place!"]
    pub fn normalized(&self) -> Quaternion {
        let mut retval = *self;
        retval.normalize();
        retval
    }

    /// Returns the conjugate `(-x, -y, -z, w)` of the quaternion.
    pub fn conjugate(&self) -> Quaternion {
        Quaternion::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns the multiplicative inverse of the quaternion.
    ///
    /// Quaternions with a squared length below [ZERO_TOLERANCE] are returned unchanged.
    /// # Examples
    /// ```
    /// use halp_math::geometry::Quaternion;
    ///
    /// let q = Quaternion::new(0.0, 0.0, 2.0, 0.0);
    /// let product = q * q.invert();
    ///
    /// assert!(product.is_identity());
    /// ```
    pub fn invert(&self) -> Quaternion {
        let len2 = self.length_squared();
        if len2 > ZERO_TOLERANCE {
            self.conjugate() * (1.0 / len2)
        } else {
            *self
        }
    }

    /// Returns the rotation angle, in radians, of a normalized quaternion.
    pub fn angle(&self) -> Scalar {
        let len2 = self.x * self.x + self.y * self.y + self.z * self.z;
        if is_zero(len2) {
            0.0
        } else {
            2.0 * clamp(self.w, -1.0, 1.0).acos()
        }
    }

    /// Returns the rotation axis of the quaternion.
    ///
    /// A quaternion without rotation returns the `x` axis.
    pub fn axis(&self) -> Vec3 {
        let len2 = self.x * self.x + self.y * self.y + self.z * self.z;
        if is_zero(len2) {
            Vec3::unit_x()
        } else {
            let inv = 1.0 / len2.sqrt();
            Vec3::new(self.x * inv, self.y * inv, self.z * inv)
        }
    }

    /// Rotates a vector using the current quaternion, computing `q * v * q⁻¹`.
    ///
    /// If debug assertions are enabled, a warning is issued in case the quaternion is not
    /// normalized.
    pub fn rotate(&self, vec: &Vec3) -> Vec3 {
        #[cfg(debug_assertions)]
        {
            if !self.is_normalized() {
                warn!("Rotating vector with non-normalized quaternion {}", self);
            }
        }
        let v = Quaternion::new(vec.x, vec.y, vec.z, 0.0);
        let res = self * v * self.conjugate();
        Vec3::new(res.x, res.y, res.z)
    }

    /// Performs the dot product between two quaternions.
    pub fn dot(quat_a: &Quaternion, quat_b: &Quaternion) -> Scalar {
        quat_a.x * quat_b.x + quat_a.y * quat_b.y + quat_a.z * quat_b.z + quat_a.w * quat_b.w
    }

    /// Linearly interpolates between two quaternions along the shortest path, then normalizes
    /// the result.
    pub fn lerp(start: &Quaternion, end: &Quaternion, amount: Scalar) -> Quaternion {
        let inverse = 1.0 - amount;
        let mut retval = if Quaternion::dot(start, end) >= 0.0 {
            start * inverse + end * amount
        } else {
            start * inverse - end * amount
        };
        retval.normalize();
        retval
    }

    /// Spherical linear interpolation between two quaternions.
    ///
    /// Falls back to a linear blend when the two quaternions are almost parallel.
    /// # Examples
    /// ```
    /// use halp_math::geometry::{Quaternion, Vec3};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let start = Quaternion::identity();
    /// let end = Quaternion::rotation_axis(&Vec3::unit_y(), 2.0);
    /// let half = Quaternion::slerp(&start, &end, 0.5);
    ///
    /// assert_approx_eq!(half.angle(), 1.0, 1E-4);
    /// ```
    pub fn slerp(start: &Quaternion, end: &Quaternion, amount: Scalar) -> Quaternion {
        let dot = Quaternion::dot(start, end);
        let sign = if dot < 0.0 { -1.0 } else { 1.0 };
        let (inverse, opposite) = if dot.abs() > 1.0 - ZERO_TOLERANCE {
            (1.0 - amount, amount * sign)
        } else {
            let acos = dot.abs().acos();
            let inv_sin = 1.0 / acos.sin();
            (
                ((1.0 - amount) * acos).sin() * inv_sin,
                (amount * acos).sin() * inv_sin * sign,
            )
        };
        start * inverse + end * opposite
    }

    /// Returns the components as a [Vec4].
    pub fn to_vec4(&self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }
}

impl std::fmt::Display for Quaternion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Quaternion[{}, {}, {}, {}]",
            self.x, self.y, self.z, self.w
        )
    }
}

fn hamilton(l: &Quaternion, r: &Quaternion) -> Quaternion {
    let a = l.y * r.z - l.z * r.y;
    let b = l.z * r.x - l.x * r.z;
    let c = l.x * r.y - l.y * r.x;
    let d = l.x * r.x + l.y * r.y + l.z * r.z;
    Quaternion {
        x: l.x * r.w + r.x * l.w + a,
        y: l.y * r.w + r.y * l.w + b,
        z: l.z * r.w + r.z * l.w + c,
        w: l.w * r.w - d,
    }
}

overload!((a: ?Quaternion) + (b: ?Quaternion) -> Quaternion {Quaternion{x:a.x+b.x,y:a.y+b.y,z:a.z+b.z,w:a.w+b.w}});
overload!((a: ?Quaternion) - (b: ?Quaternion) -> Quaternion {Quaternion{x:a.x-b.x,y:a.y-b.y,z:a.z-b.z,w:a.w-b.w}});
overload!((a: ?Quaternion) * (b: ?Quaternion) -> Quaternion {hamilton(&a, &b)});
overload!((a: ?Quaternion) * (b: Scalar) -> Quaternion {Quaternion{x:a.x*b,y:a.y*b,z:a.z*b,w:a.w*b}});
overload!(- (a: ?Quaternion) -> Quaternion {Quaternion{x:-a.x,y:-a.y,z:-a.z,w:-a.w}});
overload!((a: &mut Quaternion) *= (b: ?Quaternion){*a = hamilton(a, &b);});
