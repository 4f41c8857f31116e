use crate::geometry::Vec2;
use crate::utility::Scalar;
use std::fmt::{Display, Formatter};

/// A two-dimensional rectangle with floating point coordinates.
///
/// The rectangle is stored by its four edges: `x`, `y`, `width` and `height` are derived values.
/// The `y` axis grows downwards, so `top <= bottom` for a well-formed rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangleF {
    /// Position of the left edge.
    pub left: Scalar,
    /// Position of the top edge.
    pub top: Scalar,
    /// Position of the right edge.
    pub right: Scalar,
    /// Position of the bottom edge.
    pub bottom: Scalar,
}

impl RectangleF {
    /// Constructs a rectangle given its top-left corner and its size.
    /// # Examples
    /// ```
    /// use halp_math::geometry::RectangleF;
    ///
    /// let rect = RectangleF::new(1.0, 2.0, 3.0, 4.0);
    ///
    /// assert_eq!(rect.left, 1.0);
    /// assert_eq!(rect.top, 2.0);
    /// assert_eq!(rect.right, 4.0);
    /// assert_eq!(rect.bottom, 6.0);
    /// ```
    pub fn new(x: Scalar, y: Scalar, width: Scalar, height: Scalar) -> RectangleF {
        RectangleF {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Constructs a rectangle given its four edges.
    pub fn from_edges(left: Scalar, top: Scalar, right: Scalar, bottom: Scalar) -> RectangleF {
        RectangleF {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Constructs a rectangle with every edge in the origin.
    pub fn empty() -> RectangleF {
        RectangleF::default()
    }

    pub fn x(&self) -> Scalar {
        self.left
    }

    /// Moves the rectangle horizontally so that its left edge is in `value`, keeping its width.
    /// # Examples
    /// ```
    /// use halp_math::geometry::RectangleF;
    ///
    /// let mut rect = RectangleF::new(0.0, 0.0, 2.0, 2.0);
    /// rect.set_x(5.0);
    ///
    /// assert_eq!(rect.left, 5.0);
    /// assert_eq!(rect.right, 7.0);
    /// assert_eq!(rect.width(), 2.0);
    /// ```
    pub fn set_x(&mut self, value: Scalar) {
        self.right = value + self.width();
        self.left = value;
    }

    pub fn y(&self) -> Scalar {
        self.top
    }

    /// Moves the rectangle vertically so that its top edge is in `value`, keeping its height.
    pub fn set_y(&mut self, value: Scalar) {
        self.bottom = value + self.height();
        self.top = value;
    }

    pub fn width(&self) -> Scalar {
        self.right - self.left
    }

    /// Changes the width by moving the right edge.
    pub fn set_width(&mut self, value: Scalar) {
        self.right = self.left + value;
    }

    pub fn height(&self) -> Scalar {
        self.bottom - self.top
    }

    /// Changes the height by moving the bottom edge.
    pub fn set_height(&mut self, value: Scalar) {
        self.bottom = self.top + value;
    }

    /// Returns the top-left corner.
    pub fn location(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Moves the rectangle so that its top-left corner is in `location`, keeping its size.
    pub fn set_location(&mut self, location: &Vec2) {
        self.set_x(location.x);
        self.set_y(location.y);
    }

    /// Returns the width and height of the rectangle.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Resizes the rectangle by moving its right and bottom edges.
    pub fn set_size(&mut self, size: &Vec2) {
        self.set_width(size.x);
        self.set_height(size.y);
    }

    /// Returns the point in the middle of the rectangle.
    /// # Examples
    /// ```
    /// use halp_math::geometry::{RectangleF, Vec2};
    ///
    /// let rect = RectangleF::new(1.0, 1.0, 2.0, 4.0);
    ///
    /// assert_eq!(rect.center(), Vec2::new(2.0, 3.0));
    /// ```
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width() * 0.5,
            self.top + self.height() * 0.5,
        )
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right, self.top)
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.left, self.bottom)
    }

    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right, self.bottom)
    }

    /// Returns true if the rectangle has zero size and lies in the origin.
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0 && self.left == 0.0 && self.top == 0.0
    }

    /// Checks whether the point `(x, y)` is inside the rectangle.
    ///
    /// The left and top edges belong to the rectangle, the right and bottom ones do not.
    /// # Examples
    /// ```
    /// use halp_math::geometry::RectangleF;
    ///
    /// let rect = RectangleF::new(0.0, 0.0, 1.0, 1.0);
    ///
    /// assert!(rect.contains_point(0.0, 0.5));
    /// assert!(!rect.contains_point(1.0, 0.5));
    /// ```
    pub fn contains_point(&self, x: Scalar, y: Scalar) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Checks whether `other` lies completely inside the rectangle, edges included.
    pub fn contains_rect(&self, other: &RectangleF) -> bool {
        self.left <= other.left
            && other.right <= self.right
            && self.top <= other.top
            && other.bottom <= self.bottom
    }

    /// Checks whether the two rectangles overlap.
    ///
    /// Rectangles sharing only an edge do not intersect.
    pub fn intersects(&self, other: &RectangleF) -> bool {
        other.left < self.right
            && self.left < other.right
            && other.top < self.bottom
            && self.top < other.bottom
    }

    /// Returns the overlapping area of the two rectangles, or `None` if they do not overlap.
    /// # Examples
    /// ```
    /// use halp_math::geometry::RectangleF;
    ///
    /// let rect0 = RectangleF::new(0.0, 0.0, 2.0, 2.0);
    /// let rect1 = RectangleF::new(1.0, 1.0, 2.0, 2.0);
    /// let rect2 = RectangleF::new(5.0, 5.0, 1.0, 1.0);
    ///
    /// assert_eq!(
    ///     rect0.intersect(&rect1),
    ///     Some(RectangleF::from_edges(1.0, 1.0, 2.0, 2.0))
    /// );
    /// assert_eq!(rect0.intersect(&rect2), None);
    /// ```
    pub fn intersect(&self, other: &RectangleF) -> Option<RectangleF> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);
        if right > left && bottom > top {
            Some(RectangleF::from_edges(left, top, right, bottom))
        } else {
            None
        }
    }

    /// Returns the smallest rectangle containing both rectangles.
    pub fn union(&self, other: &RectangleF) -> RectangleF {
        RectangleF {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Translates the rectangle by the given amount.
    pub fn offset(&mut self, offset_x: Scalar, offset_y: Scalar) {
        self.left += offset_x;
        self.right += offset_x;
        self.top += offset_y;
        self.bottom += offset_y;
    }

    /// Pushes every edge outwards: `horizontal` on the left and right, `vertical` on the top
    /// and bottom.
    /// # Examples
    /// ```
    /// use halp_math::geometry::RectangleF;
    ///
    /// let mut rect = RectangleF::new(1.0, 1.0, 2.0, 2.0);
    /// rect.inflate(1.0, 0.5);
    ///
    /// assert_eq!(rect, RectangleF::new(0.0, 0.5, 4.0, 3.0));
    /// ```
    pub fn inflate(&mut self, horizontal: Scalar, vertical: Scalar) {
        self.left -= horizontal;
        self.right += horizontal;
        self.top -= vertical;
        self.bottom += vertical;
    }
}

impl Display for RectangleF {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RectangleF[x={}, y={}, w={}, h={}]",
            self.left,
            self.top,
            self.width(),
            self.height()
        )
    }
}
