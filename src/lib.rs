//! 2-D layout primitives for photonic integrated circuits.
//!
//! This crate generates mask-layout geometry for photonic components:
//! straight waveguides, circular bends, quarter-bend connectors that route
//! between two points with two straight runs and a 90-degree arc, and an
//! AEMD grating coupler template. All coordinates are in micrometers.
//!
//! Components are immutable once constructed. Drawing a component emits its
//! shapes into a caller-owned [`Cell`](cell::Cell); components carrying a
//! [`CadSpec`](sim::CadSpec) can additionally be exported as 3-D solids into
//! a [simulation CAD session](sim::SimulationCad).
//!
//! # Examples
//!
//! Route a waveguide from the origin to a point down and to the right:
//!
//! ```
//! use piclayout::prelude::*;
//!
//! let mut cell = Cell::new("top");
//! let bend = QuarterBend::clockwise(
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, -10.0),
//!     0.5,
//!     3.0,
//! )?;
//! let (_start, end) = bend.draw(&mut cell, Layer(1, 0));
//! assert_eq!(end, Point::new(10.0, -10.0));
//! # Ok::<(), piclayout::error::Error>(())
//! ```
#![warn(missing_docs)]

pub mod arc;
pub mod bbox;
pub mod bend;
pub mod cell;
pub mod connector;
pub mod error;
pub mod grating;
pub mod path;
pub mod point;
pub mod polygon;
pub mod prelude;
pub mod rect;
pub mod shape;
pub mod sign;
pub mod sim;
pub mod span;
pub mod transform;
pub mod waveguide;

#[cfg(test)]
mod tests;

/// Wraps the given angle to the interval `[0, 2π)` radians.
///
/// # Examples
///
/// ```
/// use std::f64::consts::{FRAC_PI_2, TAU};
/// use piclayout::wrap_angle;
///
/// assert_eq!(wrap_angle(FRAC_PI_2), FRAC_PI_2);
/// assert_eq!(wrap_angle(-FRAC_PI_2), 3.0 * FRAC_PI_2);
/// assert_eq!(wrap_angle(TAU), 0.0);
/// assert_eq!(wrap_angle(-TAU), 0.0);
/// ```
pub fn wrap_angle(angle: f64) -> f64 {
    use std::f64::consts::TAU;
    ((angle % TAU) + TAU) % TAU
}
