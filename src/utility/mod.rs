mod inlines;
pub use self::inlines::clamp;
pub use self::inlines::float_eq;
pub use self::inlines::lerp;
pub use self::inlines::smooth_step;
pub use self::inlines::to_byte;
mod tolerance;
pub use self::tolerance::is_one;
pub use self::tolerance::is_zero;
pub use self::tolerance::near_equal;
pub use self::tolerance::Scalar;
pub use self::tolerance::ZERO_TOLERANCE;

#[cfg(test)]
mod tests;
