//! Semantic kinds of property values

use std::fmt;

/// Which default tolerance applies to a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceCategory {
    /// Discrete kind; tolerance is ignored
    Exact,
    /// Plain number
    Numeric,
    /// Coordinate or distance
    Distance,
    /// Angle in radians
    Angle,
}

/// Semantic type of a property value
///
/// The kind selects the type descriptor and so the legal operations and
/// the comparison rules. Several kinds share a storage type: coordinates,
/// lengths and angles are all `f64` but compare differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyValueKind {
    Int,
    IntChoice,
    Bool,
    CoordX,
    CoordY,
    Double,
    Length,
    Angle,
    Inclination,
    LineType,
    LineTypeResolved,
    LineWidth,
    LineWidthResolved,
    Color,
    ColorResolved,
    Layer,
    DimStyle,
    String,
    StringChoice,
}

impl PropertyValueKind {
    /// Tolerance category
    pub const fn tolerance_category(self) -> ToleranceCategory {
        use PropertyValueKind::*;
        match self {
            Double => ToleranceCategory::Numeric,
            CoordX | CoordY | Length => ToleranceCategory::Distance,
            Angle | Inclination => ToleranceCategory::Angle,
            _ => ToleranceCategory::Exact,
        }
    }

    /// Check whether equality on this kind takes a tolerance
    pub const fn is_continuous(self) -> bool {
        !matches!(self.tolerance_category(), ToleranceCategory::Exact)
    }

    /// Check whether values of this kind are picked from a list
    pub const fn is_choice(self) -> bool {
        matches!(
            self,
            PropertyValueKind::IntChoice | PropertyValueKind::StringChoice
        )
    }
}

impl fmt::Display for PropertyValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PropertyValueKind::*;
        let name = match self {
            Int => "Int",
            IntChoice => "Int Choice",
            Bool => "Bool",
            CoordX => "Coordinate X",
            CoordY => "Coordinate Y",
            Double => "Double",
            Length => "Length",
            Angle => "Angle",
            Inclination => "Inclination",
            LineType => "Line Type",
            LineTypeResolved => "Line Type (Resolved)",
            LineWidth => "Line Width",
            LineWidthResolved => "Line Width (Resolved)",
            Color => "Color",
            ColorResolved => "Color (Resolved)",
            Layer => "Layer",
            DimStyle => "Dimension Style",
            String => "String",
            StringChoice => "String Choice",
        };
        f.write_str(name)
    }
}
