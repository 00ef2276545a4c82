use super::common::add_common_properties;
use crate::entities::{Text, TextHorizontalAlignment, TextVerticalAlignment};
use crate::matching::choice::ChoiceCatalog;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<Text>::new();
    add_common_properties(&mut entity);
    entity
        .add_point("insert", "Insert", "text's insertion point", |e: &Text| e.insertion_point)
        .add_point("second", "Second Point", "text second point", |e: &Text| e.second_point())
        .add_angle(PropertyInfo::new("angle", "Angle", "Text rotation angle"), |e: &Text| {
            e.rotation
        })
        .add_double(
            PropertyInfo::new("widthFactor", "Width Factor", "Relative width of the characters"),
            |e: &Text| e.width_factor,
        )
        .add_length(PropertyInfo::new("height", "Height", "Height of the text"), |e: &Text| {
            e.height
        })
        .add_string_list(
            PropertyInfo::new("style", "Style", "Name of the text style"),
            |catalog: &dyn ChoiceCatalog| catalog.text_styles(),
            |e: &Text| e.style.clone(),
        )
        .add_int_choice(
            PropertyInfo::new("halign", "Horizontal Align", "Horizontal align for text"),
            TextHorizontalAlignment::ALL.map(|(a, label)| (a as i32, label)),
            |e: &Text| e.horizontal_alignment as i32,
        )
        .add_int_choice(
            PropertyInfo::new("valign", "Vertical Align", "Vertical align for text"),
            TextVerticalAlignment::ALL.map(|(a, label)| (a as i32, label)),
            |e: &Text| e.vertical_alignment as i32,
        )
        .add_string(PropertyInfo::new("text", "Text", "Content of the text"), |e: &Text| {
            e.value.clone()
        });
    entity.finish()
}
