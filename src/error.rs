//! Error types for the entity matching engine

use thiserror::Error;

use crate::matching::{MatchOperation, PropertyValueKind};

/// Main error type for matcher construction and filter requests
///
/// Evaluating a constructed matcher never fails; every variant here is
/// raised while a filter is being set up.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The property's value kind does not declare the requested operation
    #[error("Operation {operation} is not supported by property '{property}'")]
    UnsupportedOperation {
        property: String,
        operation: MatchOperation,
    },

    /// The target value is of a different kind than the property compares
    #[error("Property '{property}' expects a {expected} value")]
    ValueKindMismatch {
        property: String,
        expected: PropertyValueKind,
    },

    /// A coordinate property was requested without a user frame mapper
    #[error("Property '{0}' requires a coordinate mapper")]
    MissingCoordinateMapper(String),

    /// No match descriptor is registered for the entity kind
    #[error("Unknown entity kind: {0}")]
    UnknownEntityKind(String),

    /// The entity kind has no property with the requested name
    #[error("Entity '{entity}' has no property '{property}'")]
    UnknownProperty { entity: String, property: String },

    /// Text input could not be converted into a property value
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for matching operations
pub type Result<T> = std::result::Result<T, MatchError>;
