use super::common::add_common_properties;
use super::dimension::add_dimension_properties;
use crate::entities::DimensionAligned;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<DimensionAligned>::new();
    add_common_properties(&mut entity);
    add_dimension_properties(&mut entity);
    entity
        .add_point("def", "Definition Point", "definition point", |e: &DimensionAligned| {
            e.definition_point
        })
        .add_point("ext1", "First Extension Point", "first extension point", |e: &DimensionAligned| {
            e.first_point
        })
        .add_point("ext2", "Second Extension Point", "second extension point", |e: &DimensionAligned| {
            e.second_point
        })
        .add_point("textMiddle", "Text middle point", "text middle point", |e: &DimensionAligned| {
            e.base.text_middle_point
        });
    entity.finish()
}
