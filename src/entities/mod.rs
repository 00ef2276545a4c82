//! CAD entity types and traits

use std::fmt;

use once_cell::sync::Lazy;

use crate::tables::{Layer, LayerRef};
use crate::types::{Color, Handle, LineTypeRef, LineWeight, Pen};

pub mod arc;
pub mod circle;
pub mod dimension;
pub mod ellipse;
pub mod hatch;
pub mod insert;
pub mod line;
pub mod lwpolyline;
pub mod mtext;
pub mod point;
pub mod raster_image;
pub mod spline;
pub mod text;

pub use arc::Arc;
pub use circle::Circle;
pub use dimension::{
    DimensionAligned, DimensionBase, DimensionEntity, DimensionLinear, DimensionOrdinate,
};
pub use ellipse::Ellipse;
pub use hatch::{BoundaryLoop, Hatch};
pub use insert::Insert;
pub use line::Line;
pub use lwpolyline::{LwPolyline, LwVertex};
pub use mtext::{AttachmentPoint, DrawingDirection, LineSpacingStyle, MText};
pub use point::Point;
pub use raster_image::RasterImage;
pub use spline::Spline;
pub use text::{Text, TextHorizontalAlignment, TextVerticalAlignment};

/// The standard "0" layer entities are placed on until moved elsewhere
///
/// Documents register this same layer, so freshly created entities and
/// the document agree on the identity of layer "0".
pub static DEFAULT_LAYER: Lazy<LayerRef> = Lazy::new(|| Layer::layer_0().into_ref());

/// Base trait for all CAD entities
pub trait Entity {
    /// Common entity data
    fn common(&self) -> &EntityCommon;

    /// Mutable common entity data
    fn common_mut(&mut self) -> &mut EntityCommon;

    /// Get the entity type name
    fn entity_type(&self) -> &'static str;

    /// Get the entity's unique handle
    fn handle(&self) -> Handle {
        self.common().handle
    }

    /// Set the entity's handle
    fn set_handle(&mut self, handle: Handle) {
        self.common_mut().handle = handle;
    }

    /// Get the layer the entity is on
    fn layer(&self) -> &LayerRef {
        &self.common().layer
    }

    /// Move the entity to another layer
    fn set_layer(&mut self, layer: LayerRef) {
        self.common_mut().layer = layer;
    }

    /// Pen attributes as stored on the entity
    fn pen(&self) -> &Pen {
        &self.common().pen
    }

    /// Pen attributes the entity is drawn with
    ///
    /// ByLayer attributes are taken from the entity's layer. ByBlock
    /// attributes stay as they are; top-level entities have no block to
    /// inherit from.
    fn resolved_pen(&self) -> Pen {
        let common = self.common();
        common.pen.resolve_by_layer(&common.layer.pen)
    }

    /// Check if the entity is invisible
    fn is_invisible(&self) -> bool {
        self.common().invisible
    }

    /// Set the entity's visibility
    fn set_invisible(&mut self, invisible: bool) {
        self.common_mut().invisible = invisible;
    }

    /// Check if the entity is shown: not hidden itself and its layer is
    /// neither off nor frozen
    fn is_visible(&self) -> bool {
        !self.is_invisible() && self.layer().is_visible()
    }
}

/// Common entity data shared by all entities
#[derive(Debug, Clone)]
pub struct EntityCommon {
    /// Unique handle
    pub handle: Handle,
    /// Layer the entity is on
    pub layer: LayerRef,
    /// Stored pen attributes
    pub pen: Pen,
    /// Visibility flag
    pub invisible: bool,
}

impl EntityCommon {
    /// Create new common entity data with defaults
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: DEFAULT_LAYER.clone(),
            pen: Pen::new(Color::ByLayer, LineWeight::ByLayer, LineTypeRef::ByLayer),
            invisible: false,
        }
    }

    /// Create with a specific layer
    pub fn with_layer(layer: LayerRef) -> Self {
        EntityCommon {
            layer,
            ..Self::new()
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Entity kinds, used to key match descriptors and pre-filter entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Point,
    Line,
    Circle,
    Arc,
    Ellipse,
    LwPolyline,
    Spline,
    Hatch,
    Text,
    MText,
    Insert,
    Image,
    DimAligned,
    DimLinear,
    DimOrdinate,
}

impl EntityKind {
    /// All kinds, in registration order
    pub const ALL: [EntityKind; 15] = [
        EntityKind::Point,
        EntityKind::Line,
        EntityKind::Circle,
        EntityKind::Arc,
        EntityKind::Ellipse,
        EntityKind::LwPolyline,
        EntityKind::Spline,
        EntityKind::Hatch,
        EntityKind::Text,
        EntityKind::MText,
        EntityKind::Insert,
        EntityKind::Image,
        EntityKind::DimAligned,
        EntityKind::DimLinear,
        EntityKind::DimOrdinate,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Point => "Point",
            EntityKind::Line => "Line",
            EntityKind::Circle => "Circle",
            EntityKind::Arc => "Arc",
            EntityKind::Ellipse => "Ellipse",
            EntityKind::LwPolyline => "Polyline",
            EntityKind::Spline => "Spline",
            EntityKind::Hatch => "Hatch",
            EntityKind::Text => "Text",
            EntityKind::MText => "MText",
            EntityKind::Insert => "Insert",
            EntityKind::Image => "Image",
            EntityKind::DimAligned => "Dimension Aligned",
            EntityKind::DimLinear => "Dimension Linear",
            EntityKind::DimOrdinate => "Dimension Ordinate",
        }
    }

    /// Look up a kind by its display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<EntityKind> {
        Self::ALL
            .into_iter()
            .find(|k| k.display_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Enumeration of all entity types for type-safe storage
#[derive(Debug, Clone)]
pub enum EntityType {
    /// Point entity
    Point(Point),
    /// Line entity
    Line(Line),
    /// Circle entity
    Circle(Circle),
    /// Arc entity
    Arc(Arc),
    /// Ellipse entity
    Ellipse(Ellipse),
    /// Lightweight polyline entity
    LwPolyline(LwPolyline),
    /// Spline entity
    Spline(Spline),
    /// Hatch entity
    Hatch(Hatch),
    /// Text entity
    Text(Text),
    /// Multi-line text entity
    MText(MText),
    /// Insert entity (block reference)
    Insert(Insert),
    /// Raster image entity
    Image(RasterImage),
    /// Aligned dimension
    DimAligned(DimensionAligned),
    /// Linear dimension
    DimLinear(DimensionLinear),
    /// Ordinate dimension
    DimOrdinate(DimensionOrdinate),
}

impl EntityType {
    /// Get a reference to the entity trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Hatch(e) => e,
            EntityType::Text(e) => e,
            EntityType::MText(e) => e,
            EntityType::Insert(e) => e,
            EntityType::Image(e) => e,
            EntityType::DimAligned(e) => e,
            EntityType::DimLinear(e) => e,
            EntityType::DimOrdinate(e) => e,
        }
    }

    /// Get a mutable reference to the entity trait object
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Hatch(e) => e,
            EntityType::Text(e) => e,
            EntityType::MText(e) => e,
            EntityType::Insert(e) => e,
            EntityType::Image(e) => e,
            EntityType::DimAligned(e) => e,
            EntityType::DimLinear(e) => e,
            EntityType::DimOrdinate(e) => e,
        }
    }

    /// The kind of the wrapped entity
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityType::Point(_) => EntityKind::Point,
            EntityType::Line(_) => EntityKind::Line,
            EntityType::Circle(_) => EntityKind::Circle,
            EntityType::Arc(_) => EntityKind::Arc,
            EntityType::Ellipse(_) => EntityKind::Ellipse,
            EntityType::LwPolyline(_) => EntityKind::LwPolyline,
            EntityType::Spline(_) => EntityKind::Spline,
            EntityType::Hatch(_) => EntityKind::Hatch,
            EntityType::Text(_) => EntityKind::Text,
            EntityType::MText(_) => EntityKind::MText,
            EntityType::Insert(_) => EntityKind::Insert,
            EntityType::Image(_) => EntityKind::Image,
            EntityType::DimAligned(_) => EntityKind::DimAligned,
            EntityType::DimLinear(_) => EntityKind::DimLinear,
            EntityType::DimOrdinate(_) => EntityKind::DimOrdinate,
        }
    }

    /// Shared dimension data, if the entity is a dimension
    pub fn dimension_base(&self) -> Option<&DimensionBase> {
        match self {
            EntityType::DimAligned(e) => Some(&e.base),
            EntityType::DimLinear(e) => Some(&e.base),
            EntityType::DimOrdinate(e) => Some(&e.base),
            _ => None,
        }
    }
}

/// Entities that can be unwrapped from [`EntityType`] by kind
pub trait TypedEntity: Entity + Sized + 'static {
    /// Kind tag of this entity type
    const KIND: EntityKind;

    /// Borrow the concrete entity if `entity` is of this kind
    fn from_entity_type(entity: &EntityType) -> Option<&Self>;
}

macro_rules! typed_entity {
    ($($variant:ident => $ty:ident),* $(,)?) => {
        $(
            impl TypedEntity for $ty {
                const KIND: EntityKind = EntityKind::$variant;

                fn from_entity_type(entity: &EntityType) -> Option<&Self> {
                    match entity {
                        EntityType::$variant(e) => Some(e),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for EntityType {
                fn from(entity: $ty) -> Self {
                    EntityType::$variant(entity)
                }
            }
        )*
    };
}

typed_entity!(
    Point => Point,
    Line => Line,
    Circle => Circle,
    Arc => Arc,
    Ellipse => Ellipse,
    LwPolyline => LwPolyline,
    Spline => Spline,
    Hatch => Hatch,
    Text => Text,
    MText => MText,
    Insert => Insert,
    Image => RasterImage,
    DimAligned => DimensionAligned,
    DimLinear => DimensionLinear,
    DimOrdinate => DimensionOrdinate,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector3;

    #[test]
    fn test_default_layer_is_shared() {
        let a = Line::new();
        let b = Circle::new();
        assert!(std::sync::Arc::ptr_eq(a.layer(), b.layer()));
        assert_eq!(a.layer().name, "0");
    }

    #[test]
    fn test_resolved_pen_uses_layer() {
        let layer = Layer::with_color("Walls", Color::RED)
            .line_weight(LineWeight::W0_50)
            .into_ref();
        let mut line = Line::from_points(Vector3::ZERO, Vector3::UNIT_X);
        line.set_layer(layer);
        line.common.pen.line_type = LineTypeRef::ByBlock;

        let stored = line.pen();
        assert_eq!(stored.color, Color::ByLayer);

        let resolved = line.resolved_pen();
        assert_eq!(resolved.color, Color::RED);
        assert_eq!(resolved.line_weight, LineWeight::W0_50);
        assert_eq!(resolved.line_type, LineTypeRef::ByBlock);
    }

    #[test]
    fn test_entity_type_downcast() {
        let entity: EntityType = Line::new().into();
        assert_eq!(entity.kind(), EntityKind::Line);
        assert!(Line::from_entity_type(&entity).is_some());
        assert!(Circle::from_entity_type(&entity).is_none());
        assert_eq!(entity.as_entity().entity_type(), "LINE");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(EntityKind::from_name("polyline"), Some(EntityKind::LwPolyline));
        assert_eq!(EntityKind::from_name("hatch"), Some(EntityKind::Hatch));
        assert_eq!(EntityKind::from_name("dimension ordinate"), Some(EntityKind::DimOrdinate));
        assert_eq!(EntityKind::from_name("dimension"), None);
        assert_eq!(EntityKind::MText.to_string(), "MText");
    }

    #[test]
    fn test_dimension_base_access() {
        let style = crate::tables::DimStyle::new("Arch").into_ref();
        let entity: EntityType = DimensionOrdinate::x_ordinate(Vector3::UNIT_X, Vector3::UNIT_Y, style).into();
        assert_eq!(entity.kind(), EntityKind::DimOrdinate);
        assert_eq!(entity.dimension_base().map(|b| b.style_name()), Some("Arch"));

        let line: EntityType = Line::new().into();
        assert!(line.dimension_base().is_none());
    }
}
