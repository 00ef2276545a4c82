//! Entity property matching
//!
//! Builds reusable `entity -> bool` predicates from a property name, a
//! comparison operation, a target value and a tolerance.
//!
//! The pieces, leaves first:
//!
//! - [`TypeDescriptor`]: legal operations and comparators of one value kind
//! - [`PropertyMatchDescriptor`]: a named property of one entity kind, its
//!   accessor and type descriptor
//! - [`EntityMatchDescriptor`]: the properties of one entity kind
//! - [`EntityMatchRegistry`]: descriptors of all kinds
//! - [`EntityMatcher`]: the predicate built for one request
//!
//! ```rust,ignore
//! use entity_match::matching::{registry, MatchOperation, WorldMapper};
//! use entity_match::entities::EntityKind;
//!
//! let line = registry().descriptor(EntityKind::Line)?;
//! let matcher = line.matcher("length", MatchOperation::Greater, &10.0.into(), 1e-10, Some(&WorldMapper))?;
//! let long_lines: Vec<_> = doc.entities().filter(|e| matcher.is_match(e)).collect();
//! ```

pub mod choice;
pub mod descriptor;
pub mod entities;
pub mod input;
pub mod kind;
pub mod mapper;
pub mod matcher;
pub mod operation;
pub mod property;
pub mod registry;
pub mod selection;
pub mod tolerance;
pub mod type_descriptor;
pub mod value;

pub use choice::{int_choices, Choice, ChoiceCatalog, ChoiceProvider, EmptyCatalog};
pub use descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
pub use input::parse_value;
pub use kind::{PropertyValueKind, ToleranceCategory};
pub use mapper::{Axis, CoordinateMapper, WorldMapper};
pub use matcher::{EntityMatcher, EntityPredicate};
pub use operation::{MatchOperation, MatchOperations};
pub use property::{
    DynamicChoicePropertyDescriptor, PropertyFlavor, PropertyInfo, PropertyMatchDescriptor,
    TypedPropertyDescriptor, VectorListPropertyDescriptor, VectorPropertyDescriptor,
};
pub use registry::{registry, EntityMatchRegistry};
pub use selection::{QuickSelection, QuickSelectionRequest};
pub use tolerance::ToleranceDefaults;
pub use type_descriptor::{Comparator, TypeDescriptor};
pub use value::{MatchValue, PropertyValue};
