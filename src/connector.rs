//! Quarter-bend connectors.
//!
//! A quarter-bend connector routes between two points using one straight run
//! leaving the start point, a 90-degree circular bend, and a second straight
//! run arriving at the end point. The two straight runs are axis-parallel
//! and the bend is tangent to both, so the connector turns exactly once, in
//! the sense selected at construction.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::bend::Bend;
use crate::cell::{Cell, Layer};
use crate::error::{Error, Result};
use crate::point::Point;
use crate::sign::Sign;
use crate::sim::{CadSpec, SimulationCad};
use crate::waveguide::Waveguide;
use crate::wrap_angle;

/// The turning sense of a quarter-bend connector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Sense {
    /// The route turns clockwise at the bend.
    Clockwise,
    /// The route turns counterclockwise at the bend.
    Anticlockwise,
}

impl Sense {
    /// The sign of the angle swept by a bend of this sense: -1.0 for
    /// clockwise, +1.0 for anticlockwise.
    pub const fn angular_sign(&self) -> f64 {
        match self {
            Self::Clockwise => -1.0,
            Self::Anticlockwise => 1.0,
        }
    }

    /// Returns the opposite sense.
    pub const fn reversed(&self) -> Self {
        match self {
            Self::Clockwise => Self::Anticlockwise,
            Self::Anticlockwise => Self::Clockwise,
        }
    }
}

/// A connector of two straight waveguides joined by a 90-degree bend.
///
/// Fully determined at construction; the sub-segments are computed once and
/// are immutable thereafter. Construction fails if the endpoints are
/// axis-aligned or too close together for the requested bend radius.
///
/// # Examples
///
/// ```
/// # use piclayout::prelude::*;
/// let bend = QuarterBend::anticlockwise(
///     Point::new(0.0, 0.0),
///     Point::new(20.0, 15.0),
///     0.5,
///     QuarterBend::DEFAULT_RADIUS,
/// )?;
/// assert_eq!(bend.start_point(), Point::new(0.0, 0.0));
/// # Ok::<(), piclayout::error::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterBend {
    sense: Sense,
    start: Point,
    end: Point,
    width: f64,
    radius: f64,
    first: Waveguide,
    bend: Bend,
    second: Waveguide,
}

impl QuarterBend {
    /// The default bend radius, in micrometers.
    pub const DEFAULT_RADIUS: f64 = 5.0;

    /// Creates a connector turning in the given sense.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::AxisAlignedRoute`] if `start` and `end` share an
    /// x- or y-coordinate exactly, and with [`Error::InsufficientClearance`]
    /// if either coordinate delta is smaller in magnitude than `radius`.
    pub fn new(sense: Sense, start: Point, end: Point, width: f64, radius: f64) -> Result<Self> {
        Self::build(sense, start, end, width, radius, None)
    }

    /// Creates a connector that can also be exported to a simulation CAD
    /// session, extruded over `cad`'s z-span with `cad`'s material.
    ///
    /// # Errors
    ///
    /// Same conditions as [`QuarterBend::new`].
    pub fn with_cad(
        sense: Sense,
        start: Point,
        end: Point,
        width: f64,
        radius: f64,
        cad: CadSpec,
    ) -> Result<Self> {
        Self::build(sense, start, end, width, radius, Some(cad))
    }

    /// Creates a clockwise connector. Equivalent to [`QuarterBend::new`]
    /// with [`Sense::Clockwise`].
    pub fn clockwise(start: Point, end: Point, width: f64, radius: f64) -> Result<Self> {
        Self::new(Sense::Clockwise, start, end, width, radius)
    }

    /// Creates a counterclockwise connector. Equivalent to
    /// [`QuarterBend::new`] with [`Sense::Anticlockwise`].
    pub fn anticlockwise(start: Point, end: Point, width: f64, radius: f64) -> Result<Self> {
        Self::new(Sense::Anticlockwise, start, end, width, radius)
    }

    fn build(
        sense: Sense,
        start: Point,
        end: Point,
        width: f64,
        radius: f64,
        cad: Option<CadSpec>,
    ) -> Result<Self> {
        let delta = end - start;
        let sx = Sign::of(delta.x).ok_or(Error::AxisAlignedRoute)?;
        let sy = Sign::of(delta.y).ok_or(Error::AxisAlignedRoute)?;
        if delta.x.abs() < radius || delta.y.abs() < radius {
            return Err(Error::InsufficientClearance { delta, radius });
        }

        // The route either leaves the start point horizontally and arrives
        // vertically, or the other way around. Leaving horizontally turns
        // the path by the cross product sign sx*sy, so it matches an
        // anticlockwise bend exactly when sx == sy.
        let horizontal_first = (sense == Sense::Anticlockwise) == (sx == sy);

        // The bend center sits one radius away from the elbow along both
        // axes, making the arc tangent to both straight runs. The entry
        // angle is the direction from the center to the first tangent point.
        let (elbow1, center, elbow2, entry_angle) = if horizontal_first {
            let elbow1 = Point::new(end.x - sx.as_f64() * radius, start.y);
            let center = Point::new(elbow1.x, start.y + sy.as_f64() * radius);
            let elbow2 = Point::new(end.x, center.y);
            (elbow1, center, elbow2, wrap_angle(-sy.as_f64() * FRAC_PI_2))
        } else {
            let elbow1 = Point::new(start.x, end.y - sy.as_f64() * radius);
            let center = Point::new(start.x + sx.as_f64() * radius, elbow1.y);
            let elbow2 = Point::new(center.x, end.y);
            let entry_angle = if sx.is_pos() { PI } else { 0.0 };
            (elbow1, center, elbow2, entry_angle)
        };
        let exit_angle = entry_angle + sense.angular_sign() * FRAC_PI_2;

        tracing::debug!(
            ?sense,
            horizontal_first,
            "routing quarter bend from ({}, {}) to ({}, {})",
            start.x,
            start.y,
            end.x,
            end.y,
        );

        let (first, bend, second) = match cad {
            Some(cad) => (
                Waveguide::with_cad(start, elbow1, width, cad.clone()),
                Bend::with_cad(center, entry_angle, exit_angle, width, radius, cad.clone()),
                Waveguide::with_cad(elbow2, end, width, cad),
            ),
            None => (
                Waveguide::new(start, elbow1, width),
                Bend::new(center, entry_angle, exit_angle, width, radius),
                Waveguide::new(elbow2, end, width),
            ),
        };

        Ok(Self {
            sense,
            start,
            end,
            width,
            radius,
            first,
            bend,
            second,
        })
    }

    /// The start point of the connector.
    #[inline]
    pub const fn start_point(&self) -> Point {
        self.start
    }

    /// The end point of the connector.
    #[inline]
    pub const fn end_point(&self) -> Point {
        self.end
    }

    /// The waveguide width.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// The bend radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// The turning sense of the connector.
    #[inline]
    pub const fn sense(&self) -> Sense {
        self.sense
    }

    /// The straight run leaving the start point.
    #[inline]
    pub const fn first_segment(&self) -> &Waveguide {
        &self.first
    }

    /// The 90-degree bend joining the two straight runs.
    #[inline]
    pub const fn bend(&self) -> &Bend {
        &self.bend
    }

    /// The straight run arriving at the end point.
    #[inline]
    pub const fn second_segment(&self) -> &Waveguide {
        &self.second
    }

    /// Draws the connector into `cell` on the given layer.
    ///
    /// Emits the first straight run, the bend, and the second straight run,
    /// in that order. Returns the start and end points so that consecutive
    /// connectors can be chained.
    pub fn draw(&self, cell: &mut Cell, layer: Layer) -> (Point, Point) {
        self.first.draw(cell, layer);
        self.bend.draw(cell, layer);
        self.second.draw(cell, layer);
        (self.start, self.end)
    }

    /// Exports the connector into a simulation CAD session as three solids,
    /// in the same order as [`QuarterBend::draw`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedEngine`] if the session's engine does
    /// not accept extruded geometry, and with [`Error::MissingCadSpec`] if
    /// the connector was constructed without a [`CadSpec`]. Nothing is
    /// emitted on failure.
    pub fn draw_on_cad(&self, engine: &mut dyn SimulationCad) -> Result<()> {
        if !engine.kind().supports_extrusion() {
            return Err(Error::UnsupportedEngine(engine.kind()));
        }
        if self.first.cad().is_none() {
            return Err(Error::MissingCadSpec);
        }
        self.first.draw_on_cad(engine)?;
        self.bend.draw_on_cad(engine)?;
        self.second.draw_on_cad(engine)?;
        Ok(())
    }
}
