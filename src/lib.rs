/// Module containing the stateless intersection, containment and distance queries.
pub mod collision;
/// Module containing 32-bit colors and a palette of named colors.
pub mod color;
/// Module containing the error type returned on invalid arguments.
pub mod error;
/// Module containing basic linear algebra like Vectors, Quaternions, Rays and Rectangles.
pub mod geometry;
/// Module containing bounding volumes and planes.
pub mod shapes;
/// Module containing utility functions that does not properly fit anywhere else.
pub mod utility;
