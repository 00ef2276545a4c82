//! Layer table entry

use std::sync::Arc;

use super::TableEntry;
use crate::types::{Color, LineTypeRef, LineWeight, Pen};

/// Shared layer reference
///
/// Entities hold the layer they are on through this reference. Two
/// entities are on the same layer when their references point to the
/// same layer object, not when the layers merely look alike.
pub type LayerRef = Arc<Layer>;

/// Layer flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerFlags {
    /// Layer is frozen
    pub frozen: bool,
    /// Layer is locked
    pub locked: bool,
    /// Layer is off (invisible)
    pub off: bool,
}

/// A layer table entry
#[derive(Debug, Clone)]
pub struct Layer {
    /// Layer name
    pub name: String,
    /// Layer flags
    pub flags: LayerFlags,
    /// Pen entities on this layer inherit for ByLayer attributes
    pub pen: Pen,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            flags: LayerFlags::default(),
            pen: Pen::new(Color::WHITE, LineWeight::Default, LineTypeRef::continuous()),
        }
    }

    /// Create the standard "0" layer
    pub fn layer_0() -> Self {
        Self::new("0")
    }

    /// Create a layer with a specific color
    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        let mut layer = Self::new(name);
        layer.pen.color = color;
        layer
    }

    /// Builder-style line weight
    pub fn line_weight(mut self, weight: LineWeight) -> Self {
        self.pen.line_weight = weight;
        self
    }

    /// Builder-style line type
    pub fn line_type(mut self, line_type: LineTypeRef) -> Self {
        self.pen.line_type = line_type;
        self
    }

    /// Share the layer so entities can reference it
    pub fn into_ref(self) -> LayerRef {
        Arc::new(self)
    }

    /// Check if the layer is visible (not off and not frozen)
    pub fn is_visible(&self) -> bool {
        !self.flags.off && !self.flags.frozen
    }
}

impl TableEntry for Layer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.name == "0"
    }
}
