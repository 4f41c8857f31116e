mod rgba;
pub use self::rgba::Color;
mod bgra;
pub use self::bgra::ColorBGRA;
pub mod palette;

#[cfg(test)]
mod tests;
