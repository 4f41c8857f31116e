use crate::utility::Scalar;

/// Performs an equality comparison between two floats with a given margin of error.
///
/// This error is represented by `epsilon` and is the maximum allowed difference between the two
/// numbers to still be counted as equality. A negative value will result in no number being equal
/// to any other.
/// # Examples
/// Basic usage:
/// ```
/// use halp_math::utility::float_eq;
///
/// assert!(float_eq(0.1 + 0.2, 0.3, 1E-5));
/// assert!(!float_eq(0.1, 0.2, 1E-5));
/// ```
#[inline]
pub fn float_eq(a: Scalar, b: Scalar, epsilon: Scalar) -> bool {
    (a - b).abs() <= epsilon
}

/// Restricts a value between a lower bound `min` and an upper bound `max`.
///
/// If the value is in-between, it is returned unchanged.
/// # Examples
/// Basic usage:
/// ```
/// use halp_math::utility::clamp;
///
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-1.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Performs a linear interpolation between `from` and `to`.
///
/// An `amount` of `0.0` returns `from` and an amount of `1.0` returns `to`. The amount is not
/// clamped, so values outside [`0.0`, `1.0`] extrapolate.
/// # Examples
/// Basic usage:
/// ```
/// use halp_math::utility::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.2), 2.0);
/// assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
/// ```
#[inline]
pub fn lerp(from: Scalar, to: Scalar, amount: Scalar) -> Scalar {
    (1.0 - amount) * from + amount * to
}

/// Remaps `amount` with a cubic Hermite curve, easing in and out of the [`0.0`, `1.0`] range.
///
/// The input is clamped to [`0.0`, `1.0`] before the remapping.
/// # Examples
/// Basic usage:
/// ```
/// use halp_math::utility::smooth_step;
///
/// assert_eq!(smooth_step(0.5), 0.5);
/// assert_eq!(smooth_step(2.0), 1.0);
/// ```
#[inline]
pub fn smooth_step(amount: Scalar) -> Scalar {
    if amount <= 0.0 {
        0.0
    } else if amount >= 1.0 {
        1.0
    } else {
        amount * amount * (3.0 - 2.0 * amount)
    }
}

/// Converts a normalized component in [`0.0`, `1.0`] to a byte in [`0`, `255`].
///
/// The value is scaled by `255`, truncated, and then saturated: out of range inputs clamp to the
/// nearest bound instead of wrapping around.
/// # Examples
/// Basic usage:
/// ```
/// use halp_math::utility::to_byte;
///
/// assert_eq!(to_byte(1.0), 255);
/// assert_eq!(to_byte(0.5), 127);
/// assert_eq!(to_byte(3.0), 255);
/// assert_eq!(to_byte(-1.0), 0);
/// ```
#[inline]
pub fn to_byte(component: Scalar) -> u8 {
    let value = (component * 255.0) as i32;
    clamp(value, 0, 255) as u8
}
