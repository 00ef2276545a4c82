use super::common::add_common_properties;
use crate::entities::Insert;
use crate::matching::choice::ChoiceCatalog;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<Insert>::new();
    add_common_properties(&mut entity);
    entity
        .add_string_list(
            PropertyInfo::new("name", "Block name", "Name of the inserted block"),
            |catalog: &dyn ChoiceCatalog| catalog.block_names(),
            |e: &Insert| e.block_name.clone(),
        )
        .add_point("insert", "Insert", "block's insertion point", |e: &Insert| e.insert_point)
        .add_angle(PropertyInfo::new("angle", "Angle", "Block rotation angle"), |e: &Insert| {
            e.rotation
        })
        .add_double(PropertyInfo::new("scaleX", "Scale X", "Block X scale"), |e: &Insert| e.x_scale)
        .add_double(PropertyInfo::new("scaleY", "Scale Y", "Block Y scale"), |e: &Insert| e.y_scale)
        .add_int(PropertyInfo::new("cols", "Columns", "Columns number"), |e: &Insert| {
            i32::from(e.column_count)
        })
        .add_double(
            PropertyInfo::new("spacingX", "Spacing X", "Block columns spacing (by X)"),
            |e: &Insert| e.column_spacing,
        )
        .add_int(PropertyInfo::new("rows", "Rows", "Rows number"), |e: &Insert| {
            i32::from(e.row_count)
        })
        .add_double(
            PropertyInfo::new("spacingY", "Spacing Y", "Block rows spacing (by Y)"),
            |e: &Insert| e.row_spacing,
        );
    entity.finish()
}
