//! An enumeration of geometric shapes and their properties.

use serde::{Deserialize, Serialize};

use crate::arc::Arc;
use crate::bbox::Bbox;
use crate::path::Path;
use crate::polygon::Polygon;
use crate::rect::Rect;

/// An enumeration of geometric shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Shape {
    /// A rectangle.
    Rect(Rect),
    /// A polygon.
    Polygon(Polygon),
    /// A path with a finite width.
    Path(Path),
    /// A circular arc with a finite width.
    Arc(Arc),
}

impl Shape {
    /// If this shape is a rectangle, returns the contained rectangle.
    /// Otherwise, returns [`None`].
    pub fn rect(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(*r),
            _ => None,
        }
    }

    /// If this shape is a polygon, returns the contained polygon.
    /// Otherwise, returns [`None`].
    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            Self::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// If this shape is a path, returns the contained path.
    /// Otherwise, returns [`None`].
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }

    /// If this shape is an arc, returns the contained arc.
    /// Otherwise, returns [`None`].
    pub fn arc(&self) -> Option<&Arc> {
        match self {
            Self::Arc(a) => Some(a),
            _ => None,
        }
    }
}

impl Bbox for Shape {
    fn bbox(&self) -> Option<Rect> {
        match self {
            Shape::Rect(rect) => rect.bbox(),
            Shape::Polygon(polygon) => polygon.bbox(),
            Shape::Path(path) => path.bbox(),
            Shape::Arc(arc) => arc.bbox(),
        }
    }
}

impl From<Rect> for Shape {
    #[inline]
    fn from(value: Rect) -> Self {
        Self::Rect(value)
    }
}

impl From<Polygon> for Shape {
    #[inline]
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<Path> for Shape {
    #[inline]
    fn from(value: Path) -> Self {
        Self::Path(value)
    }
}

impl From<Arc> for Shape {
    #[inline]
    fn from(value: Arc) -> Self {
        Self::Arc(value)
    }
}
