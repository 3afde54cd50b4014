//! Circular arc segments with a finite width.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::point::Point;
use crate::rect::Rect;

/// A circular arc traced at a uniform width.
///
/// Angles are in radians, measured from the positive x-axis, increasing
/// counterclockwise. The arc is traversed from `start_angle` to `end_angle`;
/// the signed difference between the two is the sweep, so an arc with
/// `end_angle < start_angle` is traversed clockwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Arc {
    center: Point,
    radius: f64,
    width: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    pub const fn new(
        center: Point,
        radius: f64,
        width: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            center,
            radius,
            width,
            start_angle,
            end_angle,
        }
    }

    /// The center of the arc's circle.
    #[inline]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// The centerline radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// The width of the traced path.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// The angle at which traversal starts.
    #[inline]
    pub const fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// The angle at which traversal ends.
    #[inline]
    pub const fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// The signed angle swept by the arc.
    ///
    /// Positive for counterclockwise traversal, negative for clockwise.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns whether the arc is traversed counterclockwise.
    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.sweep() > 0.0
    }

    /// The point on the centerline where traversal starts.
    ///
    /// # Example
    ///
    /// ```
    /// # use piclayout::prelude::*;
    /// use std::f64::consts::FRAC_PI_2;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let arc = Arc::new(Point::new(1.0, 0.0), 2.0, 0.5, FRAC_PI_2, 0.0);
    /// assert_abs_diff_eq!(arc.start_point(), Point::new(1.0, 2.0), epsilon = 1e-12);
    /// ```
    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    /// The point on the centerline where traversal ends.
    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle)
    }

    /// The centerline point at the given angle.
    pub fn point_at(&self, angle: f64) -> Point {
        self.center + Point::new(self.radius * angle.cos(), self.radius * angle.sin())
    }
}

impl Bbox for Arc {
    /// The bounding box of the full annulus containing the arc.
    ///
    /// Conservative: does not tighten to the swept portion.
    fn bbox(&self) -> Option<Rect> {
        let reach = self.radius + self.width / 2.0;
        Some(Rect::from_corners(self.center, self.center).expand_all(reach))
    }
}
