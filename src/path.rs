//! Centerline paths with a finite width.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::point::Point;
use crate::rect::Rect;

/// A path traced by a centerline polyline with a uniform width.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Path {
    points: Vec<Point>,
    width: f64,
}

impl Path {
    /// Creates a path with the given centerline vertices and width.
    pub fn new(points: Vec<Point>, width: f64) -> Self {
        Self { points, width }
    }

    /// Creates a single-segment path between two points.
    pub fn segment(start: Point, end: Point, width: f64) -> Self {
        Self {
            points: vec![start, end],
            width,
        }
    }

    /// Returns the centerline vertices.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the path width.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Returns the first centerline vertex, if any.
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Returns the last centerline vertex, if any.
    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

impl Bbox for Path {
    /// The bounding box of the centerline expanded by the half-width.
    ///
    /// Exact for Manhattan segments; conservative at non-axis-aligned joints.
    fn bbox(&self) -> Option<Rect> {
        self.points
            .iter()
            .map(|p| Rect::from_corners(*p, *p))
            .reduce(Rect::union)
            .map(|r| r.expand_all(self.width / 2.0))
    }
}
