//! AEMD grating coupler template.
//!
//! The template is built once as an immutable [`Cell`] containing the fixed
//! coupler outline on the waveguide layer and a periodic array of etch slots
//! on the etch layer. Placements reference the shared template cell instead
//! of re-emitting its geometry.

use std::sync::Arc;

use arcstr::ArcStr;

use crate::cell::{Cell, Element, Instance, Layer};
use crate::point::Point;
use crate::polygon::Polygon;
use crate::transform::Transformation;
use crate::waveguide::Waveguide;

/// Width of the etch slots, in micrometers.
const SLOT_WIDTH: f64 = 18.0;

/// Center of the first etch slot, relative to the template origin.
const FIRST_SLOT_CENTER: Point = Point::new(246.061, 0.207);

/// Parameters of the AEMD grating coupler template.
#[derive(Debug, Clone, PartialEq)]
pub struct AemdGratingParams {
    /// Width of the access waveguide port, in micrometers.
    pub port_width: f64,
    /// Layer for the coupler outline.
    pub waveguide_layer: Layer,
    /// Layer for the etch slots.
    pub etch_layer: Layer,
    /// Number of etch slots.
    pub count: usize,
    /// Grating period, in micrometers.
    pub period: f64,
    /// Fraction of each period occupied by an etch slot.
    pub duty: f64,
}

impl Default for AemdGratingParams {
    fn default() -> Self {
        Self {
            port_width: 0.45,
            waveguide_layer: Layer(1, 0),
            etch_layer: Layer(2, 0),
            count: 40,
            period: 0.63,
            duty: 0.3 / 0.63,
        }
    }
}

/// An immutable AEMD grating coupler template.
///
/// # Examples
///
/// ```
/// # use piclayout::prelude::*;
/// let grating = AemdGrating::new(AemdGratingParams::default());
/// let mut top = Cell::new("top");
/// let placed = grating.place(Point::new(100.0, 0.0), 0.0);
/// assert_eq!(placed.draw(&mut top), Point::new(100.0, 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct AemdGrating {
    cell: Arc<Cell>,
    params: AemdGratingParams,
}

impl AemdGrating {
    /// Builds the template cell for the given parameters.
    pub fn new(params: AemdGratingParams) -> Self {
        let mut cell = Cell::new("AEMD_GRATING");
        cell.add_element(Element::new(
            params.waveguide_layer,
            outline_polygon(params.port_width),
        ));
        let half_slot = Point::new(params.period * params.duty / 2.0, 0.0);
        for i in 0..params.count {
            let center = FIRST_SLOT_CENTER + Point::new(params.period * i as f64, 0.0);
            let slot = Waveguide::new(center - half_slot, center + half_slot, SLOT_WIDTH);
            slot.draw(&mut cell, params.etch_layer);
        }
        tracing::debug!(slots = params.count, "built AEMD grating template");
        Self {
            cell: Arc::new(cell),
            params,
        }
    }

    /// The parameters this template was built with.
    #[inline]
    pub fn params(&self) -> &AemdGratingParams {
        &self.params
    }

    /// The shared template cell.
    #[inline]
    pub fn cell(&self) -> &Arc<Cell> {
        &self.cell
    }

    /// Creates a placement of the template at `origin`, rotated by
    /// `rotation` radians.
    pub fn place(&self, origin: Point, rotation: f64) -> AemdGratingRef {
        AemdGratingRef {
            cell: self.cell.clone(),
            origin,
            rotation,
        }
    }
}

/// A lightweight placement of an [`AemdGrating`] template.
#[derive(Debug, Clone)]
pub struct AemdGratingRef {
    cell: Arc<Cell>,
    origin: Point,
    rotation: f64,
}

impl AemdGratingRef {
    /// The placement origin.
    #[inline]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// The placement rotation, in radians.
    #[inline]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Draws this placement into `cell` as an instance of the template.
    ///
    /// Returns the placement origin.
    pub fn draw(&self, cell: &mut Cell) -> Point {
        let name: ArcStr = arcstr::format!("{}_{}", self.cell.name(), cell.instance_count());
        cell.add_instance(Instance::with_transformation(
            self.cell.clone(),
            name,
            Transformation::new(self.origin, self.rotation),
        ));
        self.origin
    }
}

/// The fixed coupler outline, with the port vertices scaled by the port
/// width.
fn outline_polygon(port_width: f64) -> Polygon {
    Polygon::from_verts(vec![
        Point::new(226.710, -7.440),
        Point::new(186.715, -6.365),
        Point::new(146.725, -4.914),
        Point::new(106.715, -3.462),
        Point::new(18.225, -0.269),
        Point::new(8.227, -0.269),
        Point::new(4.162, -0.250),
        Point::new(0.0, -port_width / 2.0),
        Point::new(0.0, port_width / 2.0),
        Point::new(4.162, 0.250),
        Point::new(8.227, 0.270),
        Point::new(18.225, 0.270),
        Point::new(106.734, 3.462),
        Point::new(186.715, 6.364),
        Point::new(226.710, 7.439),
        Point::new(276.355, 7.439),
        Point::new(276.355, -7.440),
    ])
}
