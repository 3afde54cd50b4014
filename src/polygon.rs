//! Vertex-list polygons.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::point::Point;
use crate::rect::Rect;

/// A polygon, with vertex coordinates given in order.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Polygon {
    /// Vector of points that make up the polygon.
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon with given vertices.
    pub fn from_verts(vec: Vec<Point>) -> Self {
        Self { points: vec }
    }

    /// Returns the vertices of the polygon.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the bottom y-coordinate in the polygon.
    ///
    /// # Example
    ///
    /// ```
    /// # use piclayout::prelude::*;
    /// let polygon = Polygon::from_verts(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 2.0),
    ///     Point::new(-4.0, 5.0),
    /// ]);
    /// assert_eq!(polygon.bot(), 0.0);
    /// ```
    pub fn bot(&self) -> f64 {
        self.points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min)
    }

    /// Returns the top y-coordinate in the polygon.
    pub fn top(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns the leftmost x-coordinate in the polygon.
    pub fn left(&self) -> f64 {
        self.points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min)
    }

    /// Returns the rightmost x-coordinate in the polygon.
    pub fn right(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns the centroid of the polygon's vertices.
    pub fn center(&self) -> Point {
        let n = self.points.len() as f64;
        let x = self.points.iter().map(|p| p.x).sum::<f64>() / n;
        let y = self.points.iter().map(|p| p.y).sum::<f64>() / n;
        Point::new(x, y)
    }
}

impl Bbox for Polygon {
    fn bbox(&self) -> Option<Rect> {
        if self.points.is_empty() {
            return None;
        }
        Some(Rect::from_sides(
            self.left(),
            self.bot(),
            self.right(),
            self.top(),
        ))
    }
}
