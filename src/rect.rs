//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::point::Point;

/// An axis-aligned rectangle, specified by lower-left and upper-right corners.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Rect {
    /// The lower-left corner.
    p0: Point,
    /// The upper-right corner.
    p1: Point,
}

impl Rect {
    /// Creates a rectangle from all 4 sides (left, bottom, right, top).
    ///
    /// Sides may be provided in either order along each axis.
    ///
    /// # Example
    ///
    /// ```
    /// # use piclayout::prelude::*;
    /// let rect = Rect::from_sides(10.0, 40.0, 30.0, 20.0);
    /// assert_eq!(rect.left(), 10.0);
    /// assert_eq!(rect.bot(), 20.0);
    /// assert_eq!(rect.right(), 30.0);
    /// assert_eq!(rect.top(), 40.0);
    /// ```
    pub fn from_sides(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            p0: Point::new(x0.min(x1), y0.min(y1)),
            p1: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Creates a rectangle spanning the two given corner points.
    pub fn from_corners(p0: Point, p1: Point) -> Self {
        Self::from_sides(p0.x, p0.y, p1.x, p1.y)
    }

    /// The x-coordinate of the left edge.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.p0.x
    }

    /// The y-coordinate of the bottom edge.
    #[inline]
    pub const fn bot(&self) -> f64 {
        self.p0.y
    }

    /// The x-coordinate of the right edge.
    #[inline]
    pub const fn right(&self) -> f64 {
        self.p1.x
    }

    /// The y-coordinate of the top edge.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.p1.y
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.p1.x - self.p0.x
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    /// Returns the center point of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use piclayout::prelude::*;
    /// let rect = Rect::from_sides(0.0, 0.0, 2.0, 1.0);
    /// assert_eq!(rect.center(), Point::new(1.0, 0.5));
    /// ```
    pub fn center(&self) -> Point {
        Point::new(
            (self.p0.x + self.p1.x) / 2.0,
            (self.p0.y + self.p1.y) / 2.0,
        )
    }

    /// Creates a new [`Rect`] expanded by `amount` on all sides.
    pub fn expand_all(&self, amount: f64) -> Self {
        Self::from_sides(
            self.p0.x - amount,
            self.p0.y - amount,
            self.p1.x + amount,
            self.p1.y + amount,
        )
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(self, other: Rect) -> Self {
        Self {
            p0: Point::new(self.p0.x.min(other.p0.x), self.p0.y.min(other.p0.y)),
            p1: Point::new(self.p1.x.max(other.p1.x), self.p1.y.max(other.p1.y)),
        }
    }
}

impl Bbox for Rect {
    fn bbox(&self) -> Option<Rect> {
        Some(*self)
    }
}
