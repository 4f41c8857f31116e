/// Floating point type used by every component in the crate.
///
/// Single precision by default, double precision with the `double-precision` feature.
#[cfg(not(feature = "double-precision"))]
pub type Scalar = f32;

/// Floating point type used by every component in the crate.
///
/// Single precision by default, double precision with the `double-precision` feature.
#[cfg(feature = "double-precision")]
pub type Scalar = f64;

#[cfg(not(feature = "double-precision"))]
type ScalarBits = i32;

#[cfg(feature = "double-precision")]
type ScalarBits = i64;

/// Threshold below which a value is considered zero by [is_zero] and [near_equal].
///
/// Every "parallel" or "coincident" test in the collision routines goes through this value.
pub const ZERO_TOLERANCE: Scalar = 1e-6;

/// Maximum distance, in units in the last place, for two floats to be [near_equal].
const MAX_ULPS: ScalarBits = 4;

/// Returns true if the absolute value of `a` is below [ZERO_TOLERANCE].
/// # Examples
/// ```
/// use halp_math::utility::is_zero;
///
/// assert!(is_zero(1E-7));
/// assert!(!is_zero(1E-3));
/// ```
#[inline]
pub fn is_zero(a: Scalar) -> bool {
    a.abs() < ZERO_TOLERANCE
}

/// Returns true if `a` is within [ZERO_TOLERANCE] of `1.0`.
#[inline]
pub fn is_one(a: Scalar) -> bool {
    is_zero(a - 1.0)
}

/// Checks whether two floats are nearly equal.
///
/// Two values are nearly equal if their difference [is_zero], or if they share the same sign and
/// are at most four representable values apart. The second test keeps the comparison meaningful
/// for large magnitudes, where a fixed epsilon is smaller than the spacing between floats.
/// # Examples
/// ```
/// use halp_math::utility::near_equal;
///
/// assert!(near_equal(1.0, 1.0 + 1E-7));
/// assert!(near_equal(1E10, 1E10));
/// assert!(!near_equal(1.0, 1.1));
/// ```
pub fn near_equal(a: Scalar, b: Scalar) -> bool {
    if is_zero(a - b) {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    let a_bits = a.to_bits() as ScalarBits;
    let b_bits = b.to_bits() as ScalarBits;
    // opposite signs can't be within a few ulps (the zero case is handled above)
    if (a_bits < 0) != (b_bits < 0) {
        return false;
    }
    (a_bits - b_bits).abs() <= MAX_ULPS
}
