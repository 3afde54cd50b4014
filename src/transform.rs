//! Placement transformations: translation plus rotation.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A transformation representing a translation and a rotation about the
/// origin of the transformed geometry.
///
/// Rotation is in radians, counterclockwise. Scaling is not supported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transformation {
    offset: Point,
    rotation: f64,
}

impl Transformation {
    /// Returns the identity transform, leaving any transformed object
    /// unmodified.
    pub const fn identity() -> Self {
        Self {
            offset: Point::zero(),
            rotation: 0.0,
        }
    }

    /// Creates a transformation with the given translation and rotation.
    pub const fn new(offset: Point, rotation: f64) -> Self {
        Self { offset, rotation }
    }

    /// Creates a pure translation by `(x, y)`.
    pub const fn translate(x: f64, y: f64) -> Self {
        Self {
            offset: Point::new(x, y),
            rotation: 0.0,
        }
    }

    /// The translation applied after rotation.
    #[inline]
    pub const fn offset(&self) -> Point {
        self.offset
    }

    /// The rotation angle, in radians.
    #[inline]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Applies this transformation to a point: rotate, then translate.
    ///
    /// # Example
    ///
    /// ```
    /// # use piclayout::prelude::*;
    /// use std::f64::consts::FRAC_PI_2;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let trans = Transformation::new(Point::new(10.0, 0.0), FRAC_PI_2);
    /// assert_abs_diff_eq!(trans.apply(Point::new(1.0, 0.0)), Point::new(10.0, 1.0), epsilon = 1e-12);
    /// ```
    pub fn apply(&self, p: Point) -> Point {
        let (sin, cos) = self.rotation.sin_cos();
        Point::new(
            cos * p.x - sin * p.y + self.offset.x,
            sin * p.x + cos * p.y + self.offset.y,
        )
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}
