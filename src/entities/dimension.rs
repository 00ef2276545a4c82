//! Dimension entities
//!
//! Linear, aligned and ordinate dimensions share [`DimensionBase`]: the
//! style, an optional per-entity style override, the text and the arrow
//! flip flags. Style-derived values are read through
//! [`DimensionBase::effective_style`].

use super::{Entity, EntityCommon};
use crate::tables::{DimStyle, DimStyleRef};
use crate::types::Vector3;

/// Data shared by all dimension kinds
#[derive(Debug, Clone)]
pub struct DimensionBase {
    /// Common entity data
    pub common: EntityCommon,
    /// Dimension style
    pub style: DimStyleRef,
    /// Style values overridden on this entity only
    pub style_override: Option<DimStyleRef>,
    /// Middle point of the dimension text
    pub text_middle_point: Vector3,
    /// Text override; empty means the measurement is shown
    pub text: String,
    /// Rotation of the dimension text
    pub text_rotation: f64,
    /// First arrowhead is flipped
    pub flip_arrow1: bool,
    /// Second arrowhead is flipped
    pub flip_arrow2: bool,
}

impl DimensionBase {
    /// Create a base using `style`
    pub fn new(style: DimStyleRef) -> Self {
        DimensionBase {
            common: EntityCommon::new(),
            style,
            style_override: None,
            text_middle_point: Vector3::ZERO,
            text: String::new(),
            text_rotation: 0.0,
            flip_arrow1: false,
            flip_arrow2: false,
        }
    }

    /// The style values the dimension is drawn with
    pub fn effective_style(&self) -> &DimStyle {
        self.style_override.as_deref().unwrap_or(&self.style)
    }

    /// Check whether the entity overrides its style
    pub fn has_style_override(&self) -> bool {
        self.style_override.is_some()
    }

    /// Name of the dimension style
    pub fn style_name(&self) -> &str {
        &self.style.name
    }
}

/// Entities carrying [`DimensionBase`]
pub trait DimensionEntity: Entity {
    /// Shared dimension data
    fn base(&self) -> &DimensionBase;

    /// Measured value before the style's linear scale factor
    fn measurement(&self) -> f64;

    /// Measured value after the effective style's linear scale factor
    fn scaled_measurement(&self) -> f64 {
        self.measurement() * self.base().effective_style().dimlfac
    }
}

/// Distance between two points projected onto a rotated axis
#[derive(Debug, Clone)]
pub struct DimensionLinear {
    pub base: DimensionBase,
    /// First extension line origin
    pub first_point: Vector3,
    /// Second extension line origin
    pub second_point: Vector3,
    /// Point the dimension line passes through
    pub definition_point: Vector3,
    /// Rotation of the dimension line
    pub rotation: f64,
    /// Oblique angle of the extension lines
    pub oblique: f64,
}

impl DimensionLinear {
    /// Create a horizontal dimension between two points using `style`
    pub fn new(first_point: Vector3, second_point: Vector3, style: DimStyleRef) -> Self {
        let mut base = DimensionBase::new(style);
        base.text_middle_point = first_point.midpoint(&second_point);
        DimensionLinear {
            base,
            first_point,
            second_point,
            definition_point: second_point,
            rotation: 0.0,
            oblique: 0.0,
        }
    }

    /// Create a dimension measured along `angle`
    pub fn rotated(first_point: Vector3, second_point: Vector3, angle: f64, style: DimStyleRef) -> Self {
        DimensionLinear {
            rotation: angle,
            ..Self::new(first_point, second_point, style)
        }
    }
}

impl DimensionEntity for DimensionLinear {
    fn base(&self) -> &DimensionBase {
        &self.base
    }

    fn measurement(&self) -> f64 {
        let d = self.second_point - self.first_point;
        let (sin, cos) = self.rotation.sin_cos();
        (d.x * cos + d.y * sin).abs()
    }
}

/// Distance between two points along the line through them
#[derive(Debug, Clone)]
pub struct DimensionAligned {
    pub base: DimensionBase,
    /// First extension line origin
    pub first_point: Vector3,
    /// Second extension line origin
    pub second_point: Vector3,
    /// Point the dimension line passes through
    pub definition_point: Vector3,
}

impl DimensionAligned {
    /// Create an aligned dimension between two points using `style`
    pub fn new(first_point: Vector3, second_point: Vector3, style: DimStyleRef) -> Self {
        let mut base = DimensionBase::new(style);
        base.text_middle_point = first_point.midpoint(&second_point);
        DimensionAligned {
            base,
            first_point,
            second_point,
            definition_point: second_point,
        }
    }
}

impl DimensionEntity for DimensionAligned {
    fn base(&self) -> &DimensionBase {
        &self.base
    }

    fn measurement(&self) -> f64 {
        self.first_point.distance(&self.second_point)
    }
}

/// X or Y distance of a feature from an origin
#[derive(Debug, Clone)]
pub struct DimensionOrdinate {
    pub base: DimensionBase,
    /// Origin the ordinate is measured from
    pub definition_point: Vector3,
    /// Measured feature
    pub feature_location: Vector3,
    /// End of the leader
    pub leader_endpoint: Vector3,
    /// Measures along the X direction; Y otherwise
    pub is_ordinate_type_x: bool,
    /// Direction of the ordinate X axis
    pub horizontal_direction: f64,
}

impl DimensionOrdinate {
    /// Create an ordinate dimension measured from the world origin
    pub fn new(
        feature_location: Vector3,
        leader_endpoint: Vector3,
        is_x_type: bool,
        style: DimStyleRef,
    ) -> Self {
        let mut base = DimensionBase::new(style);
        base.text_middle_point = leader_endpoint;
        DimensionOrdinate {
            base,
            definition_point: Vector3::ZERO,
            feature_location,
            leader_endpoint,
            is_ordinate_type_x: is_x_type,
            horizontal_direction: 0.0,
        }
    }

    /// Create an X ordinate
    pub fn x_ordinate(feature_location: Vector3, leader_endpoint: Vector3, style: DimStyleRef) -> Self {
        Self::new(feature_location, leader_endpoint, true, style)
    }

    /// Create a Y ordinate
    pub fn y_ordinate(feature_location: Vector3, leader_endpoint: Vector3, style: DimStyleRef) -> Self {
        Self::new(feature_location, leader_endpoint, false, style)
    }
}

impl DimensionEntity for DimensionOrdinate {
    fn base(&self) -> &DimensionBase {
        &self.base
    }

    fn measurement(&self) -> f64 {
        let d = self.feature_location - self.definition_point;
        let (sin, cos) = self.horizontal_direction.sin_cos();
        let along = if self.is_ordinate_type_x {
            d.x * cos + d.y * sin
        } else {
            d.y * cos - d.x * sin
        };
        along.abs()
    }
}

macro_rules! dimension_entity {
    ($($ty:ident => $name:literal),* $(,)?) => {
        $(
            impl Entity for $ty {
                fn common(&self) -> &EntityCommon {
                    &self.base.common
                }

                fn common_mut(&mut self) -> &mut EntityCommon {
                    &mut self.base.common
                }

                fn entity_type(&self) -> &'static str {
                    $name
                }
            }

            impl Default for $ty {
                fn default() -> Self {
                    Self::new(
                        Vector3::ZERO,
                        Vector3::UNIT_X,
                        DimStyle::standard().into_ref(),
                    )
                }
            }
        )*
    };
}

dimension_entity!(DimensionLinear => "DIMENSION", DimensionAligned => "DIMENSION");

impl Entity for DimensionOrdinate {
    fn common(&self) -> &EntityCommon {
        &self.base.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.base.common
    }

    fn entity_type(&self) -> &'static str {
        "DIMENSION"
    }
}

impl Default for DimensionOrdinate {
    fn default() -> Self {
        Self::x_ordinate(Vector3::ZERO, Vector3::UNIT_Y, DimStyle::standard().into_ref())
    }
}
