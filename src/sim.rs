//! The seam between 2-D layout components and 3-D simulation CAD sessions.
//!
//! Components that carry a [`CadSpec`] can be exported as extruded solids
//! into any session implementing [`SimulationCad`]. The session declares its
//! [`EngineKind`]; only frequency-domain (FDTD) and mode-solver engines
//! support waveguide extrusion.

use std::fmt::Display;

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

use crate::shape::Shape;
use crate::span::Span;

/// Photonic simulation engine kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineKind {
    /// A finite-difference time-domain (frequency response) solver.
    Fdtd,
    /// An eigenmode solver.
    Mode,
    /// A charge/heat transport solver.
    Device,
    /// A photonic circuit simulator.
    Interconnect,
}

impl EngineKind {
    /// Returns whether this engine accepts extruded 2-D waveguide geometry.
    ///
    /// # Example
    ///
    /// ```
    /// # use piclayout::prelude::*;
    /// assert!(EngineKind::Fdtd.supports_extrusion());
    /// assert!(!EngineKind::Interconnect.supports_extrusion());
    /// ```
    pub const fn supports_extrusion(&self) -> bool {
        matches!(self, EngineKind::Fdtd | EngineKind::Mode)
    }
}

impl Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Fdtd => write!(f, "FDTD"),
            Self::Mode => write!(f, "MODE"),
            Self::Device => write!(f, "DEVICE"),
            Self::Interconnect => write!(f, "INTERCONNECT"),
        }
    }
}

/// Material specification for exported solids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Material {
    /// A material from the engine's database, e.g.
    /// `"SiO2 (Glass) - Palik"`.
    Named(ArcStr),
    /// An object-defined dielectric with the given refractive index.
    Index(f64),
}

impl From<&str> for Material {
    fn from(value: &str) -> Self {
        Self::Named(value.into())
    }
}

impl From<f64> for Material {
    fn from(value: f64) -> Self {
        Self::Index(value)
    }
}

/// The 3-D information required to export a 2-D component as a solid.
///
/// Carrying the z-extent and material together makes partially specified
/// export state unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CadSpec {
    z: Span,
    material: Material,
}

impl CadSpec {
    /// Creates a new CAD specification.
    pub fn new(z: Span, material: impl Into<Material>) -> Self {
        Self {
            z,
            material: material.into(),
        }
    }

    /// The z-extent of exported solids.
    #[inline]
    pub const fn z(&self) -> Span {
        self.z
    }

    /// The material of exported solids.
    #[inline]
    pub const fn material(&self) -> &Material {
        &self.material
    }
}

/// An extruded solid emitted into a simulation session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Solid {
    footprint: Shape,
    z: Span,
    material: Material,
}

impl Solid {
    /// Creates a solid by extruding `footprint` over the z-extent `z`.
    pub fn new(footprint: impl Into<Shape>, z: Span, material: Material) -> Self {
        Self {
            footprint: footprint.into(),
            z,
            material,
        }
    }

    /// The 2-D footprint of the solid.
    #[inline]
    pub const fn footprint(&self) -> &Shape {
        &self.footprint
    }

    /// The z-extent of the solid.
    #[inline]
    pub const fn z(&self) -> Span {
        self.z
    }

    /// The material of the solid.
    #[inline]
    pub const fn material(&self) -> &Material {
        &self.material
    }
}

/// A simulation CAD session that can receive extruded solids.
pub trait SimulationCad {
    /// The kind of engine backing this session.
    fn kind(&self) -> EngineKind;

    /// Adds a solid to the session.
    fn add_solid(&mut self, solid: Solid);
}

/// An in-memory session that records the solids emitted into it.
///
/// Used in tests and as a staging buffer for scripting bridges, which are
/// outside the scope of this crate.
#[derive(Debug, Clone)]
pub struct SolidRecorder {
    kind: EngineKind,
    solids: Vec<Solid>,
}

impl SolidRecorder {
    /// Creates an empty recorder for an engine of the given kind.
    pub fn new(kind: EngineKind) -> Self {
        Self {
            kind,
            solids: Vec::new(),
        }
    }

    /// The solids recorded so far, in emission order.
    pub fn solids(&self) -> &[Solid] {
        &self.solids
    }

    /// Returns whether any solids have been recorded.
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }
}

impl SimulationCad for SolidRecorder {
    fn kind(&self) -> EngineKind {
        self.kind
    }

    fn add_solid(&mut self, solid: Solid) {
        self.solids.push(solid);
    }
}
