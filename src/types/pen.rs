//! Drawing pen: color, line weight and line type of an entity

use std::fmt;

use super::{Color, LineWeight};

/// Line type attribute of an entity or layer
///
/// Named line types refer to entries of the document's line type table.
/// Names compare case-insensitively, the same way table lookups do.
#[derive(Debug, Clone, Default)]
pub enum LineTypeRef {
    /// Use the layer's line type
    #[default]
    ByLayer,
    /// Use the block's line type
    ByBlock,
    /// A line type table entry by name
    Named(String),
}

impl LineTypeRef {
    /// Solid line type name
    pub const CONTINUOUS: &'static str = "Continuous";

    /// Create a named line type reference
    pub fn named(name: impl Into<String>) -> Self {
        LineTypeRef::Named(name.into())
    }

    /// The solid line type
    pub fn continuous() -> Self {
        LineTypeRef::named(Self::CONTINUOUS)
    }

    /// Create from a stored name, mapping the logical names
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("ByLayer") {
            LineTypeRef::ByLayer
        } else if name.eq_ignore_ascii_case("ByBlock") {
            LineTypeRef::ByBlock
        } else {
            LineTypeRef::named(name)
        }
    }

    /// Display name of the line type
    pub fn name(&self) -> &str {
        match self {
            LineTypeRef::ByLayer => "ByLayer",
            LineTypeRef::ByBlock => "ByBlock",
            LineTypeRef::Named(name) => name,
        }
    }

    /// Check whether the line type defers to the layer or block
    pub fn is_by_layer_or_block(&self) -> bool {
        matches!(self, LineTypeRef::ByLayer | LineTypeRef::ByBlock)
    }
}

impl PartialEq for LineTypeRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LineTypeRef::ByLayer, LineTypeRef::ByLayer) => true,
            (LineTypeRef::ByBlock, LineTypeRef::ByBlock) => true,
            (LineTypeRef::Named(a), LineTypeRef::Named(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }
}

impl Eq for LineTypeRef {}

impl fmt::Display for LineTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pen attributes used when an entity is drawn
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pen {
    /// Color
    pub color: Color,
    /// Line weight
    pub line_weight: LineWeight,
    /// Line type
    pub line_type: LineTypeRef,
}

impl Pen {
    /// Create a pen from its attributes
    pub fn new(color: Color, line_weight: LineWeight, line_type: LineTypeRef) -> Self {
        Pen {
            color,
            line_weight,
            line_type,
        }
    }

    /// Replace attributes that defer to the layer with the layer's pen
    ///
    /// `ByBlock` attributes are left as they are; they resolve against the
    /// inserting block reference, which a top-level entity does not have.
    pub fn resolve_by_layer(&self, layer_pen: &Pen) -> Pen {
        Pen {
            color: match self.color {
                Color::ByLayer => layer_pen.color,
                color => color,
            },
            line_weight: match self.line_weight {
                LineWeight::ByLayer => layer_pen.line_weight,
                weight => weight,
            },
            line_type: match &self.line_type {
                LineTypeRef::ByLayer => layer_pen.line_type.clone(),
                line_type => line_type.clone(),
            },
        }
    }
}
