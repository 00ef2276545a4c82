//! Text entity

use super::{Entity, EntityCommon};
use crate::types::Vector3;

/// Text horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHorizontalAlignment {
    /// Left aligned
    Left = 0,
    /// Center aligned
    Center = 1,
    /// Right aligned
    Right = 2,
    /// Aligned (fit between two points)
    Aligned = 3,
    /// Middle (centered horizontally and vertically)
    Middle = 4,
    /// Fit (fit between two points, adjust height)
    Fit = 5,
}

impl TextHorizontalAlignment {
    /// All alignments with their labels
    pub const ALL: [(TextHorizontalAlignment, &'static str); 6] = [
        (TextHorizontalAlignment::Left, "Left"),
        (TextHorizontalAlignment::Center, "Center"),
        (TextHorizontalAlignment::Right, "Right"),
        (TextHorizontalAlignment::Aligned, "Aligned"),
        (TextHorizontalAlignment::Middle, "Middle"),
        (TextHorizontalAlignment::Fit, "Fit"),
    ];
}

/// Text vertical alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVerticalAlignment {
    /// Baseline
    Baseline = 0,
    /// Bottom
    Bottom = 1,
    /// Middle
    Middle = 2,
    /// Top
    Top = 3,
}

impl TextVerticalAlignment {
    /// All alignments with their labels
    pub const ALL: [(TextVerticalAlignment, &'static str); 4] = [
        (TextVerticalAlignment::Baseline, "Baseline"),
        (TextVerticalAlignment::Bottom, "Bottom"),
        (TextVerticalAlignment::Middle, "Middle"),
        (TextVerticalAlignment::Top, "Top"),
    ];
}

/// A single-line text entity
#[derive(Debug, Clone)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Text content
    pub value: String,
    /// Insertion point
    pub insertion_point: Vector3,
    /// Second alignment point, used by every alignment except left/baseline
    pub alignment_point: Option<Vector3>,
    /// Text height
    pub height: f64,
    /// Rotation angle in radians
    pub rotation: f64,
    /// Width factor
    pub width_factor: f64,
    /// Text style name
    pub style: String,
    /// Horizontal alignment
    pub horizontal_alignment: TextHorizontalAlignment,
    /// Vertical alignment
    pub vertical_alignment: TextVerticalAlignment,
}

impl Text {
    /// Create a new empty text entity
    pub fn new() -> Self {
        Text {
            common: EntityCommon::new(),
            value: String::new(),
            insertion_point: Vector3::ZERO,
            alignment_point: None,
            height: 1.0,
            rotation: 0.0,
            width_factor: 1.0,
            style: "Standard".to_string(),
            horizontal_alignment: TextHorizontalAlignment::Left,
            vertical_alignment: TextVerticalAlignment::Baseline,
        }
    }

    /// Create a text entity with content at a point
    pub fn with_value(value: impl Into<String>, insertion_point: Vector3) -> Self {
        Text {
            value: value.into(),
            insertion_point,
            ..Self::new()
        }
    }

    /// Builder-style height
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Builder-style text style
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Second alignment point, falling back to the insertion point
    pub fn second_point(&self) -> Vector3 {
        self.alignment_point.unwrap_or(self.insertion_point)
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Text {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "TEXT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_builders() {
        let text = Text::with_value("Hello", Vector3::new(1.0, 2.0, 0.0))
            .with_height(2.5)
            .with_style("Notes");
        assert_eq!(text.value, "Hello");
        assert_eq!(text.height, 2.5);
        assert_eq!(text.style, "Notes");
        assert_eq!(text.second_point(), text.insertion_point);
    }

    #[test]
    fn test_alignment_codes() {
        assert_eq!(TextHorizontalAlignment::Fit as i32, 5);
        assert_eq!(TextVerticalAlignment::ALL[3].1, "Top");
    }
}
