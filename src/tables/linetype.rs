//! Line type table entry

use super::TableEntry;
use crate::types::LineTypeRef;

/// Line type element (dash, dot, space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTypeElement {
    /// Length of the element (positive = dash, negative = space, 0 = dot)
    pub length: f64,
}

impl LineTypeElement {
    /// Create a dash element
    pub fn dash(length: f64) -> Self {
        LineTypeElement { length: length.abs() }
    }

    /// Create a space element
    pub fn space(length: f64) -> Self {
        LineTypeElement { length: -length.abs() }
    }

    /// Create a dot element
    pub fn dot() -> Self {
        LineTypeElement { length: 0.0 }
    }
}

/// A line type table entry
#[derive(Debug, Clone)]
pub struct LineType {
    /// Line type name
    pub name: String,
    /// Description
    pub description: String,
    /// Pattern elements
    pub elements: Vec<LineTypeElement>,
}

impl LineType {
    /// Create a new line type with an empty pattern
    pub fn new(name: impl Into<String>) -> Self {
        LineType {
            name: name.into(),
            description: String::new(),
            elements: Vec::new(),
        }
    }

    /// Create the standard "Continuous" line type
    pub fn continuous() -> Self {
        let mut lt = LineType::new(LineTypeRef::CONTINUOUS);
        lt.description = "Solid line".to_string();
        lt
    }

    /// Create a dashed line type
    pub fn dashed() -> Self {
        let mut lt = LineType::new("Dashed");
        lt.description = "__ __ __ __ __ __".to_string();
        lt.elements = vec![LineTypeElement::dash(0.5), LineTypeElement::space(0.25)];
        lt
    }

    /// Create a dotted line type
    pub fn dotted() -> Self {
        let mut lt = LineType::new("Dotted");
        lt.description = ". . . . . . . .".to_string();
        lt.elements = vec![LineTypeElement::dot(), LineTypeElement::space(0.25)];
        lt
    }

    /// Total length of one pattern repetition
    pub fn pattern_length(&self) -> f64 {
        self.elements.iter().map(|e| e.length.abs()).sum()
    }

    /// Check if this is a continuous line type
    pub fn is_continuous(&self) -> bool {
        self.elements.is_empty()
    }

    /// Reference an entity can carry to use this line type
    pub fn to_ref(&self) -> LineTypeRef {
        LineTypeRef::from_name(&self.name)
    }
}

impl TableEntry for LineType {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.name.eq_ignore_ascii_case(LineTypeRef::CONTINUOUS)
    }
}
