//! Axis-aligned rectangular bounding boxes.

use crate::rect::Rect;

/// A geometric object that has a bounding box.
pub trait Bbox {
    /// Computes the axis-aligned rectangular bounding box.
    ///
    /// Returns [`None`] if the object contains no geometry.
    fn bbox(&self) -> Option<Rect>;
}

impl<T: Bbox> Bbox for [T] {
    fn bbox(&self) -> Option<Rect> {
        self.iter()
            .filter_map(|item| item.bbox())
            .reduce(Rect::union)
    }
}
