//! A one-dimensional span.
//!
//! A span represents the closed interval `[start, stop]`. Spans are used for
//! the z-extent of solids exported to simulation CAD sessions.

use serde::{Deserialize, Serialize};

/// A closed interval of coordinates in one dimension.
///
/// Represents the range `[start, stop]`.
#[derive(Debug, Default, Clone, Copy, PartialOrd, Serialize, Deserialize, PartialEq)]
pub struct Span {
    start: f64,
    stop: f64,
}

impl Span {
    /// Creates a new [`Span`] between two coordinates.
    ///
    /// The coordinates may be provided in either order.
    ///
    /// # Example
    ///
    /// ```
    /// # use piclayout::prelude::*;
    /// let span = Span::new(0.11, -0.11);
    /// assert_eq!(span.start(), -0.11);
    /// assert_eq!(span.stop(), 0.11);
    /// ```
    pub fn new(start: f64, stop: f64) -> Self {
        Self {
            start: start.min(stop),
            stop: start.max(stop),
        }
    }

    /// The lower endpoint of the span.
    #[inline]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// The upper endpoint of the span.
    #[inline]
    pub const fn stop(&self) -> f64 {
        self.stop
    }

    /// The length of the span.
    #[inline]
    pub fn length(&self) -> f64 {
        self.stop - self.start
    }

    /// The center of the span.
    #[inline]
    pub fn center(&self) -> f64 {
        (self.start + self.stop) / 2.0
    }

    /// Returns whether the span contains the given coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// # use piclayout::prelude::*;
    /// let span = Span::new(0.0, 0.22);
    /// assert!(span.contains(0.11));
    /// assert!(!span.contains(0.25));
    /// ```
    pub fn contains(&self, coord: f64) -> bool {
        self.start <= coord && coord <= self.stop
    }
}
