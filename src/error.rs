//! Error types for layout construction and CAD export.

use thiserror::Error;

use crate::point::Point;
use crate::sim::EngineKind;

/// Errors produced when constructing or exporting layout components.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The two endpoints are too close together to fit a bend of the
    /// requested radius between them.
    #[error(
        "insufficient clearance: endpoint deltas ({}, {}) are too small for bend radius {}",
        .delta.x, .delta.y, .radius
    )]
    InsufficientClearance {
        /// The coordinate deltas between the endpoints.
        delta: Point,
        /// The requested bend radius.
        radius: f64,
    },
    /// The endpoints share an x- or y-coordinate exactly, so no quarter-bend
    /// route exists between them.
    #[error("endpoints are axis-aligned; a quarter bend requires nonzero x and y separation")]
    AxisAlignedRoute,
    /// CAD export was requested on a component constructed without a z-span
    /// and material specification.
    #[error("z span and material are required for CAD export but were not supplied")]
    MissingCadSpec,
    /// CAD export was requested on an engine that does not support waveguide
    /// extrusion.
    #[error("engine `{0}` does not support waveguide extrusion")]
    UnsupportedEngine(EngineKind),
}

/// The result type returned by fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
