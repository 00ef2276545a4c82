//! Enumerated values offered for choice properties

use std::sync::Arc;

use super::value::PropertyValue;
use crate::tables::{DimStyleRef, LayerRef};

/// One selectable value with its label
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// Label shown to the user
    pub label: String,
    /// Value used as the match target
    pub value: PropertyValue,
}

impl Choice {
    /// Create a choice
    pub fn new(label: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Choice {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create a string choice whose label is its value
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        Choice {
            label: value.clone(),
            value: PropertyValue::String(value),
        }
    }
}

/// Live document state that dynamic choices are drawn from
pub trait ChoiceCatalog {
    /// Layers, in table order
    fn layers(&self) -> Vec<LayerRef>;

    /// Line type names, in table order
    fn line_types(&self) -> Vec<String>;

    /// Names of blocks that can be inserted
    fn block_names(&self) -> Vec<String>;

    /// Text style names
    fn text_styles(&self) -> Vec<String>;

    /// Dimension styles
    fn dim_styles(&self) -> Vec<DimStyleRef>;

    /// Hatch pattern names in use
    fn hatch_patterns(&self) -> Vec<String>;
}

/// A catalog with no entries
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl ChoiceCatalog for EmptyCatalog {
    fn layers(&self) -> Vec<LayerRef> {
        Vec::new()
    }

    fn line_types(&self) -> Vec<String> {
        Vec::new()
    }

    fn block_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn text_styles(&self) -> Vec<String> {
        Vec::new()
    }

    fn dim_styles(&self) -> Vec<DimStyleRef> {
        Vec::new()
    }

    fn hatch_patterns(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Computes choices from the catalog each time they are requested
pub type ChoiceProvider = Arc<dyn Fn(&dyn ChoiceCatalog) -> Vec<Choice> + Send + Sync>;

/// Build fixed integer choices from `(value, label)` pairs
pub fn int_choices<I>(entries: I) -> Vec<Choice>
where
    I: IntoIterator<Item = (i32, &'static str)>,
{
    entries
        .into_iter()
        .map(|(value, label)| Choice::new(label, value))
        .collect()
}
