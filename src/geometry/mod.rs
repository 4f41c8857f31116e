mod vec;
pub use self::vec::Vec2;
pub use self::vec::Vec3;
pub use self::vec::Vec4;
mod quaternion;
pub use self::quaternion::Quaternion;
mod ray;
pub use self::ray::Ray;
mod rect;
pub use self::rect::RectangleF;

#[cfg(test)]
mod tests;
