use super::common::add_common_properties;
use super::dimension::add_dimension_properties;
use crate::entities::DimensionLinear;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<DimensionLinear>::new();
    add_common_properties(&mut entity);
    add_dimension_properties(&mut entity);
    entity
        .add_point("def", "Definition Point", "definition point", |e: &DimensionLinear| {
            e.definition_point
        })
        .add_point("ext1", "First Extension Point", "first extension point", |e: &DimensionLinear| {
            e.first_point
        })
        .add_point("ext2", "Second Extension Point", "second extension point", |e: &DimensionLinear| {
            e.second_point
        })
        .add_point("textMiddle", "Text middle point", "text middle point", |e: &DimensionLinear| {
            e.base.text_middle_point
        })
        .add_angle(PropertyInfo::new("angle", "Angle", "Dimension rotation angle"), |e: &DimensionLinear| {
            e.rotation
        })
        .add_angle(
            PropertyInfo::new("oblique", "Oblique", "Dimension oblique angle"),
            |e: &DimensionLinear| e.oblique,
        );
    entity.finish()
}
