//! Multi-line text entity

use super::{Entity, EntityCommon};
use crate::types::Vector3;

/// Attachment point for MText
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentPoint {
    TopLeft = 1,
    TopCenter = 2,
    TopRight = 3,
    MiddleLeft = 4,
    MiddleCenter = 5,
    MiddleRight = 6,
    BottomLeft = 7,
    BottomCenter = 8,
    BottomRight = 9,
}

impl AttachmentPoint {
    /// Horizontal part: 0 left, 1 center, 2 right
    pub fn horizontal(&self) -> i32 {
        (*self as i32 - 1) % 3
    }

    /// Vertical part: 0 top, 1 middle, 2 bottom
    pub fn vertical(&self) -> i32 {
        (*self as i32 - 1) / 3
    }
}

/// Drawing direction for MText
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingDirection {
    /// Left to right
    LeftToRight = 1,
    /// Top to bottom
    TopToBottom = 3,
    /// By style
    ByStyle = 5,
}

impl DrawingDirection {
    /// All directions with their labels
    pub const ALL: [(DrawingDirection, &'static str); 3] = [
        (DrawingDirection::LeftToRight, "Left to right"),
        (DrawingDirection::TopToBottom, "Top to bottom"),
        (DrawingDirection::ByStyle, "By style"),
    ];
}

/// Line spacing style for MText
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSpacingStyle {
    /// Taller characters may push lines apart
    AtLeast = 1,
    /// Lines are spaced evenly regardless of content
    Exact = 2,
}

impl LineSpacingStyle {
    /// All styles with their labels
    pub const ALL: [(LineSpacingStyle, &'static str); 2] = [
        (LineSpacingStyle::AtLeast, "At least"),
        (LineSpacingStyle::Exact, "Exact"),
    ];
}

/// A multi-line text entity
#[derive(Debug, Clone)]
pub struct MText {
    /// Common entity data
    pub common: EntityCommon,
    /// Text content, lines separated by `\P`
    pub value: String,
    /// Insertion point
    pub insertion_point: Vector3,
    /// Character height
    pub height: f64,
    /// Reference rectangle width
    pub rectangle_width: f64,
    /// Rotation angle in radians
    pub rotation: f64,
    /// Text style name
    pub style: String,
    /// Attachment point
    pub attachment_point: AttachmentPoint,
    /// Drawing direction
    pub drawing_direction: DrawingDirection,
    /// Line spacing style
    pub line_spacing_style: LineSpacingStyle,
    /// Line spacing factor
    pub line_spacing_factor: f64,
}

impl MText {
    /// Create a new empty MText
    pub fn new() -> Self {
        MText {
            common: EntityCommon::new(),
            value: String::new(),
            insertion_point: Vector3::ZERO,
            height: 1.0,
            rectangle_width: 0.0,
            rotation: 0.0,
            style: "Standard".to_string(),
            attachment_point: AttachmentPoint::TopLeft,
            drawing_direction: DrawingDirection::LeftToRight,
            line_spacing_style: LineSpacingStyle::AtLeast,
            line_spacing_factor: 1.0,
        }
    }

    /// Create an MText with content at a point
    pub fn with_value(value: impl Into<String>, insertion_point: Vector3) -> Self {
        MText {
            value: value.into(),
            insertion_point,
            ..Self::new()
        }
    }

    /// Number of text lines
    pub fn line_count(&self) -> usize {
        if self.value.is_empty() {
            0
        } else {
            self.value.split("\\P").count()
        }
    }
}

impl Default for MText {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for MText {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "MTEXT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        assert_eq!(MText::new().line_count(), 0);
        assert_eq!(MText::with_value("one", Vector3::ZERO).line_count(), 1);
        assert_eq!(MText::with_value("one\\Ptwo\\Pthree", Vector3::ZERO).line_count(), 3);
    }

    #[test]
    fn test_attachment_parts() {
        assert_eq!(AttachmentPoint::TopLeft.horizontal(), 0);
        assert_eq!(AttachmentPoint::MiddleRight.horizontal(), 2);
        assert_eq!(AttachmentPoint::MiddleRight.vertical(), 1);
        assert_eq!(AttachmentPoint::BottomCenter.vertical(), 2);
    }
}
