use crate::color::rgba::{brightness, hue, lerp_byte, modulate_byte, saturation, scale_byte};
use crate::color::Color;
use crate::error::MathError;
use crate::geometry::{Vec3, Vec4};
use crate::utility::{to_byte, Scalar};
use overload::overload;
use std::fmt::{Display, Formatter};
use std::ops;

/// A 32-bit color stored in `B, G, R, A` byte order.
///
/// This is the layout expected by most texture formats on little-endian machines. Apart from the
/// order of the components it behaves exactly as [Color].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorBGRA {
    /// The blue component.
    pub b: u8,
    /// The green component.
    pub g: u8,
    /// The red component.
    pub r: u8,
    /// The alpha component.
    pub a: u8,
}

impl ColorBGRA {
    /// Creates a new color with the given bytes.
    ///
    /// The arguments are in the usual `r`, `g`, `b`, `a` order, independently of the storage.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> ColorBGRA {
        ColorBGRA { b, g, r, a }
    }

    /// Creates a color from floating point components in the range `[0.0, 1.0]`, clamping
    /// values outside of it.
    pub fn from_floats(r: Scalar, g: Scalar, b: Scalar, a: Scalar) -> ColorBGRA {
        ColorBGRA {
            b: to_byte(b),
            g: to_byte(g),
            r: to_byte(r),
            a: to_byte(a),
        }
    }

    /// Creates an opaque color from a vector holding the `r`, `g`, `b` components in `[0, 1]`.
    pub fn from_vec3(vec: &Vec3) -> ColorBGRA {
        ColorBGRA::from_floats(vec.x, vec.y, vec.z, 1.0)
    }

    /// Creates a color from a vector holding the `r`, `g`, `b`, `a` components in `[0, 1]`.
    pub fn from_vec4(vec: &Vec4) -> ColorBGRA {
        ColorBGRA::from_floats(vec.x, vec.y, vec.z, vec.w)
    }

    /// Creates a color from a slice of exactly four floats in `B, G, R, A` order.
    ///
    /// Fails with [MathError::InvalidArgument] if the slice has a different length.
    pub fn from_slice(values: &[Scalar]) -> Result<ColorBGRA, MathError> {
        match values {
            [b, g, r, a] => Ok(ColorBGRA::from_floats(*r, *g, *b, *a)),
            _ => Err(MathError::wrong_length("values", 4, values.len())),
        }
    }

    /// Creates a color from a slice of exactly four bytes in `B, G, R, A` order.
    ///
    /// Fails with [MathError::InvalidArgument] if the slice has a different length.
    /// # Examples
    /// ```
    /// use halp_math::color::ColorBGRA;
    ///
    /// let color = ColorBGRA::from_byte_slice(&[1, 2, 3, 4]).unwrap();
    ///
    /// assert_eq!(color.b, 1);
    /// assert_eq!(color.r, 3);
    /// assert!(ColorBGRA::from_byte_slice(&[1, 2, 3, 4, 5]).is_err());
    /// ```
    pub fn from_byte_slice(values: &[u8]) -> Result<ColorBGRA, MathError> {
        match values {
            [b, g, r, a] => Ok(ColorBGRA::new(*r, *g, *b, *a)),
            _ => Err(MathError::wrong_length("values", 4, values.len())),
        }
    }

    /// Returns the component at `index`: `0` is blue, `1` green, `2` red and `3` alpha.
    ///
    /// Fails with [MathError::InvalidArgument] for any other index.
    pub fn get(&self, index: usize) -> Result<u8, MathError> {
        match index {
            0 => Ok(self.b),
            1 => Ok(self.g),
            2 => Ok(self.r),
            3 => Ok(self.a),
            _ => Err(MathError::index_out_of_range(index, 4)),
        }
    }

    /// Sets the component at `index`, with the same order used by [ColorBGRA::get].
    pub fn set(&mut self, index: usize, value: u8) -> Result<(), MathError> {
        match index {
            0 => self.b = value,
            1 => self.g = value,
            2 => self.r = value,
            3 => self.a = value,
            _ => return Err(MathError::index_out_of_range(index, 4)),
        }
        Ok(())
    }

    /// Packs the color in a `u32` with blue in the least significant byte.
    pub fn to_bgra(&self) -> u32 {
        u32::from_le_bytes([self.b, self.g, self.r, self.a])
    }

    /// Packs the color in a `u32` with red in the least significant byte.
    pub fn to_rgba(&self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    /// Inverse of [ColorBGRA::to_bgra].
    pub fn from_bgra(bgra: u32) -> ColorBGRA {
        let [b, g, r, a] = bgra.to_le_bytes();
        ColorBGRA { b, g, r, a }
    }

    /// Inverse of [ColorBGRA::to_rgba].
    pub fn from_rgba(rgba: u32) -> ColorBGRA {
        let [r, g, b, a] = rgba.to_le_bytes();
        ColorBGRA { b, g, r, a }
    }

    /// Returns the `r`, `g`, `b` components as floats in `[0, 1]`.
    pub fn to_vec3(&self) -> Vec3 {
        Color::from(*self).to_vec3()
    }

    /// Returns the `r`, `g`, `b`, `a` components as floats in `[0, 1]`.
    pub fn to_vec4(&self) -> Vec4 {
        Color::from(*self).to_vec4()
    }

    /// Returns the components in `B, G, R, A` order.
    pub fn to_array(&self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    /// Returns the hue of the color in degrees, see [Color::hue].
    pub fn hue(&self) -> Scalar {
        hue(self.r, self.g, self.b)
    }

    pub fn saturation(&self) -> Scalar {
        saturation(self.r, self.g, self.b)
    }

    pub fn brightness(&self) -> Scalar {
        brightness(self.r, self.g, self.b)
    }

    /// Interpolates linearly between two colors.
    pub fn lerp(start: &ColorBGRA, end: &ColorBGRA, amount: Scalar) -> ColorBGRA {
        ColorBGRA {
            b: lerp_byte(start.b, end.b, amount),
            g: lerp_byte(start.g, end.g, amount),
            r: lerp_byte(start.r, end.r, amount),
            a: lerp_byte(start.a, end.a, amount),
        }
    }
}

impl From<Color> for ColorBGRA {
    fn from(color: Color) -> Self {
        ColorBGRA::new(color.r, color.g, color.b, color.a)
    }
}

impl From<ColorBGRA> for Color {
    fn from(color: ColorBGRA) -> Self {
        Color::new(color.r, color.g, color.b, color.a)
    }
}

impl From<u32> for ColorBGRA {
    fn from(bgra: u32) -> Self {
        ColorBGRA::from_bgra(bgra)
    }
}

impl From<ColorBGRA> for u32 {
    fn from(color: ColorBGRA) -> Self {
        color.to_bgra()
    }
}

impl Display for ColorBGRA {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ColorBGRA[{}, {}, {}, {}]",
            self.b, self.g, self.r, self.a
        )
    }
}

overload!((a: ?ColorBGRA) + (b: ?ColorBGRA) -> ColorBGRA {
    ColorBGRA {
        b: a.b.wrapping_add(b.b),
        g: a.g.wrapping_add(b.g),
        r: a.r.wrapping_add(b.r),
        a: a.a.wrapping_add(b.a),
    }
});
overload!((a: ?ColorBGRA) - (b: ?ColorBGRA) -> ColorBGRA {
    ColorBGRA {
        b: a.b.wrapping_sub(b.b),
        g: a.g.wrapping_sub(b.g),
        r: a.r.wrapping_sub(b.r),
        a: a.a.wrapping_sub(b.a),
    }
});
overload!((a: ?ColorBGRA) * (b: ?ColorBGRA) -> ColorBGRA {
    ColorBGRA {
        b: modulate_byte(a.b, b.b),
        g: modulate_byte(a.g, b.g),
        r: modulate_byte(a.r, b.r),
        a: modulate_byte(a.a, b.a),
    }
});
overload!((a: ?ColorBGRA) * (b: Scalar) -> ColorBGRA {
    ColorBGRA {
        b: scale_byte(a.b, b),
        g: scale_byte(a.g, b),
        r: scale_byte(a.r, b),
        a: scale_byte(a.a, b),
    }
});
overload!(- (a: ?ColorBGRA) -> ColorBGRA {
    ColorBGRA {
        b: 255 - a.b,
        g: 255 - a.g,
        r: 255 - a.r,
        a: 255 - a.a,
    }
});
