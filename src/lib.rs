//! # entity_match
//!
//! Property matching over CAD drawing entities, the engine behind "quick
//! selection": pick an entity kind, a property, an operation and a value,
//! and get back the entities that satisfy it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use entity_match::{CadDocument, Line, MatchOperation, QuickSelectionRequest, ToleranceDefaults};
//! use entity_match::entities::EntityKind;
//!
//! let mut doc = CadDocument::new();
//! doc.add_entity(Line::from_coords(0.0, 0.0, 10.0, 0.0));
//!
//! let request = QuickSelectionRequest::new(EntityKind::Line, "length", MatchOperation::Greater, 5.0);
//! let selected = doc.quick_select(&request, &ToleranceDefaults::default())?;
//! # Ok::<(), entity_match::error::MatchError>(())
//! ```
//!
//! ## Architecture
//!
//! - `types` - Vectors, colors, line weights, pens, handles
//! - `tables` - Layers, line types, text and dimension styles, blocks, UCSs
//! - `entities` - The `Entity` trait and the concrete entity kinds
//! - `matching` - Type and property descriptors, matchers, the registry
//! - `CadDocument` - Tables plus entities; the catalog dynamic choices
//!   are drawn from

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod matching;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use document::CadDocument;
pub use error::{MatchError, Result};
pub use types::{Color, Handle, LineTypeRef, LineWeight, Pen, Vector2, Vector3};

// Re-export entity types
pub use entities::{
    Arc, Circle, DimensionAligned, DimensionLinear, DimensionOrdinate, Ellipse, Entity, EntityKind,
    EntityType, Hatch, Insert, Line, LwPolyline, MText, Point, RasterImage, Spline, Text,
};

// Re-export the matching entry points
pub use matching::{
    registry, EntityMatcher, MatchOperation, PropertyValue, QuickSelection, QuickSelectionRequest,
    ToleranceDefaults,
};
