//! An import prelude that re-exports commonly used items.

pub use crate::arc::Arc;
pub use crate::bbox::Bbox;
pub use crate::bend::Bend;
pub use crate::cell::{Cell, Element, Instance, Layer};
pub use crate::connector::{QuarterBend, Sense};
pub use crate::error::{Error, Result};
pub use crate::grating::{AemdGrating, AemdGratingParams, AemdGratingRef};
pub use crate::path::Path;
pub use crate::point::Point;
pub use crate::polygon::Polygon;
pub use crate::rect::Rect;
pub use crate::shape::Shape;
pub use crate::sign::Sign;
pub use crate::sim::{CadSpec, EngineKind, Material, SimulationCad, Solid, SolidRecorder};
pub use crate::span::Span;
pub use crate::transform::Transformation;
pub use crate::waveguide::Waveguide;
pub use crate::wrap_angle;
