//! Circular waveguide bends.

use crate::arc::Arc;
use crate::cell::{Cell, Element, Layer};
use crate::error::{Error, Result};
use crate::point::Point;
use crate::sim::{CadSpec, SimulationCad, Solid};

/// A circular waveguide bend.
///
/// The bend traces the arc of radius `radius` centered at `center` from
/// `start_angle` to `end_angle` (radians, counterclockwise-positive from the
/// +x axis). The sign of `end_angle - start_angle` is the turning sense.
#[derive(Debug, Clone, PartialEq)]
pub struct Bend {
    arc: Arc,
    cad: Option<CadSpec>,
}

impl Bend {
    /// Creates a new bend.
    pub fn new(center: Point, start_angle: f64, end_angle: f64, width: f64, radius: f64) -> Self {
        Self {
            arc: Arc::new(center, radius, width, start_angle, end_angle),
            cad: None,
        }
    }

    /// Creates a bend that can also be exported as a 3-D solid.
    pub fn with_cad(
        center: Point,
        start_angle: f64,
        end_angle: f64,
        width: f64,
        radius: f64,
        cad: CadSpec,
    ) -> Self {
        Self {
            arc: Arc::new(center, radius, width, start_angle, end_angle),
            cad: Some(cad),
        }
    }

    /// The arc traced by this bend.
    #[inline]
    pub const fn arc(&self) -> &Arc {
        &self.arc
    }

    /// The center of the bend's circle.
    #[inline]
    pub const fn center(&self) -> Point {
        self.arc.center()
    }

    /// The point where the bend starts.
    pub fn start_point(&self) -> Point {
        self.arc.start_point()
    }

    /// The point where the bend ends.
    pub fn end_point(&self) -> Point {
        self.arc.end_point()
    }

    /// The CAD export specification, if one was supplied at construction.
    #[inline]
    pub const fn cad(&self) -> Option<&CadSpec> {
        self.cad.as_ref()
    }

    /// Draws the bend into `cell` on the given layer.
    ///
    /// Returns the bend's start and end points for chaining.
    pub fn draw(&self, cell: &mut Cell, layer: Layer) -> (Point, Point) {
        cell.add_element(Element::new(layer, self.arc));
        (self.start_point(), self.end_point())
    }

    /// Exports the bend into a simulation CAD session as a ring-sector
    /// solid.
    ///
    /// Fails with [`Error::UnsupportedEngine`] if the session's engine does
    /// not accept extruded geometry, and with [`Error::MissingCadSpec`] if
    /// the bend was constructed without a [`CadSpec`]. Nothing is emitted on
    /// failure.
    pub fn draw_on_cad(&self, engine: &mut dyn SimulationCad) -> Result<()> {
        if !engine.kind().supports_extrusion() {
            return Err(Error::UnsupportedEngine(engine.kind()));
        }
        let cad = self.cad.as_ref().ok_or(Error::MissingCadSpec)?;
        engine.add_solid(Solid::new(self.arc, cad.z(), cad.material().clone()));
        Ok(())
    }
}
