//! Straight waveguide segments.

use crate::cell::{Cell, Element, Layer};
use crate::error::{Error, Result};
use crate::path::Path;
use crate::point::Point;
use crate::rect::Rect;
use crate::shape::Shape;
use crate::sim::{CadSpec, SimulationCad, Solid};

/// A straight waveguide between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveguide {
    start: Point,
    end: Point,
    width: f64,
    cad: Option<CadSpec>,
}

impl Waveguide {
    /// Creates a waveguide between `start` and `end` with the given width.
    pub fn new(start: Point, end: Point, width: f64) -> Self {
        Self {
            start,
            end,
            width,
            cad: None,
        }
    }

    /// Creates a waveguide that can also be exported as a 3-D solid.
    pub fn with_cad(start: Point, end: Point, width: f64, cad: CadSpec) -> Self {
        Self {
            start,
            end,
            width,
            cad: Some(cad),
        }
    }

    /// The start point of the waveguide.
    #[inline]
    pub const fn start_point(&self) -> Point {
        self.start
    }

    /// The end point of the waveguide.
    #[inline]
    pub const fn end_point(&self) -> Point {
        self.end
    }

    /// The waveguide width.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// The CAD export specification, if one was supplied at construction.
    #[inline]
    pub const fn cad(&self) -> Option<&CadSpec> {
        self.cad.as_ref()
    }

    /// The 2-D footprint of the waveguide.
    ///
    /// Axis-aligned waveguides produce a [`Rect`]; others fall back to a
    /// single-segment [`Path`].
    pub fn footprint(&self) -> Shape {
        let half = self.width / 2.0;
        if self.start.y == self.end.y {
            Shape::Rect(Rect::from_sides(
                self.start.x,
                self.start.y - half,
                self.end.x,
                self.end.y + half,
            ))
        } else if self.start.x == self.end.x {
            Shape::Rect(Rect::from_sides(
                self.start.x - half,
                self.start.y,
                self.end.x + half,
                self.end.y,
            ))
        } else {
            Shape::Path(Path::segment(self.start, self.end, self.width))
        }
    }

    /// Draws the waveguide into `cell` on the given layer.
    ///
    /// Returns the start and end points so that consecutive components can
    /// be chained.
    pub fn draw(&self, cell: &mut Cell, layer: Layer) -> (Point, Point) {
        cell.add_element(Element::new(
            layer,
            Path::segment(self.start, self.end, self.width),
        ));
        (self.start, self.end)
    }

    /// Exports the waveguide into a simulation CAD session as a solid.
    ///
    /// Fails with [`Error::UnsupportedEngine`] if the session's engine does
    /// not accept extruded geometry, and with [`Error::MissingCadSpec`] if
    /// the waveguide was constructed without a [`CadSpec`]. Nothing is
    /// emitted on failure.
    pub fn draw_on_cad(&self, engine: &mut dyn SimulationCad) -> Result<()> {
        if !engine.kind().supports_extrusion() {
            return Err(Error::UnsupportedEngine(engine.kind()));
        }
        let cad = self.cad.as_ref().ok_or(Error::MissingCadSpec)?;
        engine.add_solid(Solid::new(
            self.footprint(),
            cad.z(),
            cad.material().clone(),
        ));
        Ok(())
    }
}
