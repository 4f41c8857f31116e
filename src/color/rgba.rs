use crate::error::MathError;
use crate::geometry::{Vec3, Vec4};
use crate::utility::{lerp, smooth_step, to_byte, Scalar};
use overload::overload;
use std::fmt::{Display, Formatter};
use std::ops;

const INV_255: Scalar = 1.0 / 255.0;

/// A 32-bit color with one byte for each of the red, green, blue and alpha components.
///
/// The component order for indexing and for the packed [Color::to_rgba] representation is
/// `R, G, B, A`. Use [ColorBGRA](crate::color::ColorBGRA) for the opposite byte order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// The red component.
    pub r: u8,
    /// The green component.
    pub g: u8,
    /// The blue component.
    pub b: u8,
    /// The alpha component.
    pub a: u8,
}

impl Color {
    /// Creates a new color with the given `r`, `g`, `b` and `a` bytes.
    /// # Examples
    /// ```
    /// use halp_math::color::Color;
    ///
    /// let color = Color::new(255, 128, 0, 255);
    ///
    /// assert_eq!(color.r, 255);
    /// assert_eq!(color.g, 128);
    /// assert_eq!(color.b, 0);
    /// assert_eq!(color.a, 255);
    /// ```
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Creates an opaque color with the given `r`, `g` and `b` bytes.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    /// Creates a color with every component set to `value`.
    pub const fn splat(value: u8) -> Color {
        Color {
            r: value,
            g: value,
            b: value,
            a: value,
        }
    }

    /// Creates a color from floating point components in the range `[0.0, 1.0]`.
    ///
    /// Values outside the range are clamped.
    /// # Examples
    /// ```
    /// use halp_math::color::Color;
    ///
    /// let color = Color::from_floats(1.0, 0.5, -3.0, 2.0);
    ///
    /// assert_eq!(color, Color::new(255, 127, 0, 255));
    /// ```
    pub fn from_floats(r: Scalar, g: Scalar, b: Scalar, a: Scalar) -> Color {
        Color {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
            a: to_byte(a),
        }
    }

    /// Creates an opaque color from a vector holding the `r`, `g`, `b` components in `[0, 1]`.
    pub fn from_vec3(vec: &Vec3) -> Color {
        Color::from_floats(vec.x, vec.y, vec.z, 1.0)
    }

    /// Creates a color from a vector holding the `r`, `g`, `b`, `a` components in `[0, 1]`.
    pub fn from_vec4(vec: &Vec4) -> Color {
        Color::from_floats(vec.x, vec.y, vec.z, vec.w)
    }

    /// Creates a color from a slice of exactly four floats in `R, G, B, A` order.
    ///
    /// Fails with [MathError::InvalidArgument] if the slice has a different length.
    /// # Examples
    /// ```
    /// use halp_math::color::Color;
    ///
    /// assert_eq!(
    ///     Color::from_slice(&[0.0, 0.0, 1.0, 1.0]),
    ///     Ok(Color::new(0, 0, 255, 255))
    /// );
    /// assert!(Color::from_slice(&[0.0, 0.0, 1.0]).is_err());
    /// ```
    pub fn from_slice(values: &[Scalar]) -> Result<Color, MathError> {
        match values {
            [r, g, b, a] => Ok(Color::from_floats(*r, *g, *b, *a)),
            _ => Err(MathError::wrong_length("values", 4, values.len())),
        }
    }

    /// Creates a color from a slice of exactly four bytes in `R, G, B, A` order.
    ///
    /// Fails with [MathError::InvalidArgument] if the slice has a different length.
    pub fn from_byte_slice(values: &[u8]) -> Result<Color, MathError> {
        match values {
            [r, g, b, a] => Ok(Color::new(*r, *g, *b, *a)),
            _ => Err(MathError::wrong_length("values", 4, values.len())),
        }
    }

    /// Returns the component at `index`: `0` is red, `1` green, `2` blue and `3` alpha.
    ///
    /// Fails with [MathError::InvalidArgument] for any other index.
    pub fn get(&self, index: usize) -> Result<u8, MathError> {
        match index {
            0 => Ok(self.r),
            1 => Ok(self.g),
            2 => Ok(self.b),
            3 => Ok(self.a),
            _ => Err(MathError::index_out_of_range(index, 4)),
        }
    }

    /// Sets the component at `index`, with the same order used by [Color::get].
    pub fn set(&mut self, index: usize, value: u8) -> Result<(), MathError> {
        match index {
            0 => self.r = value,
            1 => self.g = value,
            2 => self.b = value,
            3 => self.a = value,
            _ => return Err(MathError::index_out_of_range(index, 4)),
        }
        Ok(())
    }

    /// Packs the color in a `u32` with red in the least significant byte.
    /// # Examples
    /// ```
    /// use halp_math::color::Color;
    ///
    /// let color = Color::new(0x11, 0x22, 0x33, 0x44);
    ///
    /// assert_eq!(color.to_rgba(), 0x44332211);
    /// assert_eq!(color.to_bgra(), 0x44112233);
    /// assert_eq!(color.to_abgr(), 0x11223344);
    /// ```
    pub fn to_rgba(&self) -> u32 {
        self.r as u32 | (self.g as u32) << 8 | (self.b as u32) << 16 | (self.a as u32) << 24
    }

    /// Packs the color in a `u32` with blue in the least significant byte.
    pub fn to_bgra(&self) -> u32 {
        self.b as u32 | (self.g as u32) << 8 | (self.r as u32) << 16 | (self.a as u32) << 24
    }

    /// Packs the color in a `u32` with alpha in the least significant byte.
    pub fn to_abgr(&self) -> u32 {
        self.a as u32 | (self.b as u32) << 8 | (self.g as u32) << 16 | (self.r as u32) << 24
    }

    /// Inverse of [Color::to_rgba].
    pub fn from_rgba(rgba: u32) -> Color {
        let [r, g, b, a] = rgba.to_le_bytes();
        Color { r, g, b, a }
    }

    /// Inverse of [Color::to_bgra].
    pub fn from_bgra(bgra: u32) -> Color {
        let [b, g, r, a] = bgra.to_le_bytes();
        Color { r, g, b, a }
    }

    /// Inverse of [Color::to_abgr].
    pub fn from_abgr(abgr: u32) -> Color {
        let [a, b, g, r] = abgr.to_le_bytes();
        Color { r, g, b, a }
    }

    /// Returns the `r`, `g`, `b` components as floats in `[0, 1]`.
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(
            self.r as Scalar * INV_255,
            self.g as Scalar * INV_255,
            self.b as Scalar * INV_255,
        )
    }

    /// Returns the `r`, `g`, `b`, `a` components as floats in `[0, 1]`.
    pub fn to_vec4(&self) -> Vec4 {
        Vec4::from_vec3(&self.to_vec3(), self.a as Scalar * INV_255)
    }

    /// Returns the components in `R, G, B, A` order.
    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the hue of the color in degrees, in the range `[0, 360)`.
    ///
    /// Greys, including black and white, have a hue of `0`.
    /// # Examples
    /// ```
    /// use halp_math::color::Color;
    ///
    /// assert_eq!(Color::rgb(255, 0, 0).hue(), 0.0);
    /// assert_eq!(Color::rgb(0, 255, 0).hue(), 120.0);
    /// assert_eq!(Color::rgb(0, 0, 255).hue(), 240.0);
    /// assert_eq!(Color::rgb(255, 0, 255).hue(), 300.0);
    /// ```
    pub fn hue(&self) -> Scalar {
        hue(self.r, self.g, self.b)
    }

    /// Returns the HSL saturation of the color, in the range `[0, 1]`.
    pub fn saturation(&self) -> Scalar {
        saturation(self.r, self.g, self.b)
    }

    /// Returns the HSL lightness of the color, in the range `[0, 1]`.
    pub fn brightness(&self) -> Scalar {
        brightness(self.r, self.g, self.b)
    }

    /// Multiplies two colors component by component, treating each byte as a value in `[0, 1]`.
    pub fn modulate(&self, other: &Color) -> Color {
        Color {
            r: modulate_byte(self.r, other.r),
            g: modulate_byte(self.g, other.g),
            b: modulate_byte(self.b, other.b),
            a: modulate_byte(self.a, other.a),
        }
    }

    /// Multiplies every component by `scale`.
    ///
    /// The result is truncated to a byte without saturating: components exceeding `255` wrap.
    pub fn scale(&self, scale: Scalar) -> Color {
        Color {
            r: scale_byte(self.r, scale),
            g: scale_byte(self.g, scale),
            b: scale_byte(self.b, scale),
            a: scale_byte(self.a, scale),
        }
    }

    /// Returns the complementary color, `255 - c` for every component, alpha included.
    pub fn negate(&self) -> Color {
        Color {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
            a: 255 - self.a,
        }
    }

    /// Interpolates linearly between two colors.
    ///
    /// `amount` is not clamped: like [Color::scale], components outside `[0, 255]` wrap.
    /// # Examples
    /// ```
    /// use halp_math::color::Color;
    ///
    /// let black = Color::new(0, 0, 0, 255);
    /// let white = Color::new(255, 255, 255, 255);
    ///
    /// assert_eq!(Color::lerp(&black, &white, 0.5), Color::new(127, 127, 127, 255));
    /// ```
    pub fn lerp(start: &Color, end: &Color, amount: Scalar) -> Color {
        Color {
            r: lerp_byte(start.r, end.r, amount),
            g: lerp_byte(start.g, end.g, amount),
            b: lerp_byte(start.b, end.b, amount),
            a: lerp_byte(start.a, end.a, amount),
        }
    }

    /// Interpolates between two colors using a cubic curve for `amount`.
    pub fn smooth_step(start: &Color, end: &Color, amount: Scalar) -> Color {
        Color::lerp(start, end, smooth_step(amount))
    }

    /// Restricts every component between the components of `min` and `max`.
    pub fn clamp(&self, min: &Color, max: &Color) -> Color {
        Color {
            r: self.r.clamp(min.r, max.r.max(min.r)),
            g: self.g.clamp(min.g, max.g.max(min.g)),
            b: self.b.clamp(min.b, max.b.max(min.b)),
            a: self.a.clamp(min.a, max.a.max(min.a)),
        }
    }

    /// Returns the component-wise minimum of two colors.
    pub fn min(color_a: &Color, color_b: &Color) -> Color {
        Color {
            r: color_a.r.min(color_b.r),
            g: color_a.g.min(color_b.g),
            b: color_a.b.min(color_b.b),
            a: color_a.a.min(color_b.a),
        }
    }

    /// Returns the component-wise maximum of two colors.
    pub fn max(color_a: &Color, color_b: &Color) -> Color {
        Color {
            r: color_a.r.max(color_b.r),
            g: color_a.g.max(color_b.g),
            b: color_a.b.max(color_b.b),
            a: color_a.a.max(color_b.a),
        }
    }

    /// Scales the distance of each color component from the middle grey by `contrast`.
    ///
    /// Alpha is left unchanged.
    pub fn adjust_contrast(&self, contrast: Scalar) -> Color {
        let adjust = |c: u8| to_byte(0.5 + contrast * (c as Scalar * INV_255 - 0.5));
        Color {
            r: adjust(self.r),
            g: adjust(self.g),
            b: adjust(self.b),
            a: self.a,
        }
    }

    /// Scales the distance of each color component from the color luminance by `saturation`.
    ///
    /// A `saturation` of `0.0` produces a grey, `1.0` leaves the color unchanged. Alpha is left
    /// unchanged.
    /// # Examples
    /// ```
    /// use halp_math::color::Color;
    ///
    /// let color = Color::new(200, 100, 50, 10);
    ///
    /// let grey = color.adjust_saturation(0.0);
    /// assert_eq!(grey.r, grey.g);
    /// assert_eq!(grey.g, grey.b);
    /// assert_eq!(grey.a, 10);
    /// ```
    pub fn adjust_saturation(&self, saturation: Scalar) -> Color {
        let (r, g, b) = (
            self.r as Scalar * INV_255,
            self.g as Scalar * INV_255,
            self.b as Scalar * INV_255,
        );
        let grey = r * 0.2125 + g * 0.7154 + b * 0.0721;
        Color {
            r: to_byte(grey + saturation * (r - grey)),
            g: to_byte(grey + saturation * (g - grey)),
            b: to_byte(grey + saturation * (b - grey)),
            a: self.a,
        }
    }

    /// Multiplies the color components by the alpha value.
    pub fn premultiply(&self) -> Color {
        let alpha = self.a as Scalar * INV_255;
        Color {
            r: to_byte(self.r as Scalar * INV_255 * alpha),
            g: to_byte(self.g as Scalar * INV_255 * alpha),
            b: to_byte(self.b as Scalar * INV_255 * alpha),
            a: self.a,
        }
    }
}

impl From<u32> for Color {
    fn from(rgba: u32) -> Self {
        Color::from_rgba(rgba)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_rgba()
    }
}

impl From<[u8; 4]> for Color {
    fn from(array: [u8; 4]) -> Self {
        Color::new(array[0], array[1], array[2], array[3])
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color[{}, {}, {}, {}]", self.r, self.g, self.b, self.a)
    }
}

pub(super) fn modulate_byte(left: u8, right: u8) -> u8 {
    (left as Scalar * right as Scalar / 255.0) as u8
}

pub(super) fn scale_byte(component: u8, scale: Scalar) -> u8 {
    (component as Scalar * scale) as i32 as u8
}

pub(super) fn lerp_byte(from: u8, to: u8, amount: Scalar) -> u8 {
    lerp(from as Scalar, to as Scalar, amount) as i32 as u8
}

pub(super) fn hue(r: u8, g: u8, b: u8) -> Scalar {
    if r == g && g == b {
        return 0.0;
    }
    let (r, g, b) = (
        r as Scalar * INV_255,
        g as Scalar * INV_255,
        b as Scalar * INV_255,
    );
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let sector = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    let hue = sector * 60.0;
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

pub(super) fn saturation(r: u8, g: u8, b: u8) -> Scalar {
    let (r, g, b) = (
        r as Scalar * INV_255,
        g as Scalar * INV_255,
        b as Scalar * INV_255,
    );
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        0.0
    } else if (max + min) * 0.5 <= 0.5 {
        (max - min) / (max + min)
    } else {
        (max - min) / (2.0 - max - min)
    }
}

pub(super) fn brightness(r: u8, g: u8, b: u8) -> Scalar {
    let (r, g, b) = (
        r as Scalar * INV_255,
        g as Scalar * INV_255,
        b as Scalar * INV_255,
    );
    (r.max(g).max(b) + r.min(g).min(b)) * 0.5
}

overload!((a: ?Color) + (b: ?Color) -> Color {
    Color {
        r: a.r.wrapping_add(b.r),
        g: a.g.wrapping_add(b.g),
        b: a.b.wrapping_add(b.b),
        a: a.a.wrapping_add(b.a),
    }
});
overload!((a: ?Color) - (b: ?Color) -> Color {
    Color {
        r: a.r.wrapping_sub(b.r),
        g: a.g.wrapping_sub(b.g),
        b: a.b.wrapping_sub(b.b),
        a: a.a.wrapping_sub(b.a),
    }
});
overload!((a: ?Color) * (b: ?Color) -> Color {a.modulate(&b)});
overload!((a: ?Color) * (b: Scalar) -> Color {a.scale(b)});
overload!((a: Scalar) * (b: ?Color) -> Color {b.scale(a)});
overload!(- (a: ?Color) -> Color {a.negate()});
overload!((a: &mut Color) += (b: ?Color) {*a = *a + b;});
overload!((a: &mut Color) -= (b: ?Color) {*a = *a - b;});
