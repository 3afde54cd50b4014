//! Layout cells: the drawing surface components emit geometry into.

use std::sync::Arc;

use arcstr::ArcStr;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::rect::Rect;
use crate::shape::Shape;
use crate::transform::Transformation;

/// A mask layer, identified by a GDS layer/datatype pair.
#[derive(
    Debug, Clone, Copy, Default, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Layer(pub u16, pub u16);

/// A primitive layout element: a shape on a layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Element {
    layer: Layer,
    shape: Shape,
}

impl Element {
    /// Creates a new element.
    pub fn new(layer: Layer, shape: impl Into<Shape>) -> Self {
        Self {
            layer,
            shape: shape.into(),
        }
    }

    /// The layer this element is drawn on.
    #[inline]
    pub const fn layer(&self) -> Layer {
        self.layer
    }

    /// The element's shape.
    #[inline]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// A placed reference to a child cell.
#[derive(Debug, Clone)]
pub struct Instance {
    child: Arc<Cell>,
    name: ArcStr,
    trans: Transformation,
}

impl Instance {
    /// Creates an untransformed instance of `child`.
    pub fn new(child: Arc<Cell>, name: impl Into<ArcStr>) -> Self {
        Self {
            child,
            name: name.into(),
            trans: Transformation::identity(),
        }
    }

    /// Creates an instance of `child` placed with the given transformation.
    pub fn with_transformation(
        child: Arc<Cell>,
        name: impl Into<ArcStr>,
        trans: Transformation,
    ) -> Self {
        Self {
            child,
            name: name.into(),
            trans,
        }
    }

    /// The instantiated cell.
    #[inline]
    pub fn child(&self) -> &Arc<Cell> {
        &self.child
    }

    /// The name of the instance.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// The placement transformation.
    #[inline]
    pub const fn transformation(&self) -> Transformation {
        self.trans
    }
}

/// A named container of layout elements and cell instances.
///
/// Elements and instances are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    name: ArcStr,
    elements: Vec<Element>,
    instances: IndexMap<ArcStr, Instance>,
}

impl Cell {
    /// Creates a new, empty cell.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            elements: Default::default(),
            instances: Default::default(),
        }
    }

    /// The name of the cell.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// Adds the given element to the cell.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Iterates over the elements of this cell, in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// The number of elements in this cell.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Adds the given instance to the cell.
    ///
    /// An existing instance with the same name is replaced.
    pub fn add_instance(&mut self, instance: Instance) {
        if self
            .instances
            .insert(instance.name.clone(), instance)
            .is_some()
        {
            tracing::warn!("replaced existing instance with the same name");
        }
    }

    /// Iterates over the instances of this cell, in insertion order.
    pub fn instances(&self) -> impl Iterator<Item = &Instance> {
        self.instances.values()
    }

    /// The number of instances in this cell.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Gets the instance with the given name.
    pub fn try_instance_named(&self, name: &str) -> Option<&Instance> {
        self.instances.get(name)
    }

    /// Gets the instance with the given name.
    ///
    /// # Panics
    ///
    /// Panics if no instance has the given name.
    /// For a non-panicking alternative, see
    /// [`try_instance_named`](Cell::try_instance_named).
    pub fn instance_named(&self, name: &str) -> &Instance {
        match self.instances.get(name) {
            Some(inst) => inst,
            None => {
                tracing::error!("no instance named `{}`", name);
                panic!("no instance named `{}`", name);
            }
        }
    }
}

impl Bbox for Cell {
    /// The bounding box of the cell's own elements.
    ///
    /// Instance geometry is not flattened into this computation.
    fn bbox(&self) -> Option<Rect> {
        self.elements
            .iter()
            .filter_map(|e| e.shape().bbox())
            .reduce(Rect::union)
    }
}
