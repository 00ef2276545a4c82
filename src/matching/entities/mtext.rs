use super::common::add_common_properties;
use crate::entities::{DrawingDirection, LineSpacingStyle, MText};
use crate::matching::choice::ChoiceCatalog;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<MText>::new();
    add_common_properties(&mut entity);
    entity
        .add_point("insert", "Insert", "text's insertion point", |e: &MText| e.insertion_point)
        .add_angle(PropertyInfo::new("angle", "Angle", "Text rotation angle"), |e: &MText| {
            e.rotation
        })
        .add_string_list(
            PropertyInfo::new("style", "Style", "Name of the text style"),
            |catalog: &dyn ChoiceCatalog| catalog.text_styles(),
            |e: &MText| e.style.clone(),
        )
        .add_length(PropertyInfo::new("height", "Height", "Height of the text"), |e: &MText| {
            e.height
        })
        .add_length(PropertyInfo::new("width", "Width", "Width of the text"), |e: &MText| {
            e.rectangle_width
        })
        .add_int(
            PropertyInfo::new("linesCount", "Lines Count", "Number of lines in multiline text"),
            |e: &MText| i32::try_from(e.line_count()).unwrap_or(i32::MAX),
        )
        .add_int_choice(
            PropertyInfo::new("halign", "Horizontal Align", "Horizontal align for text"),
            [(0, "Left"), (1, "Center"), (2, "Right")],
            |e: &MText| e.attachment_point.horizontal(),
        )
        .add_int_choice(
            PropertyInfo::new("valign", "Vertical Align", "Vertical align for text"),
            [(0, "Top"), (1, "Middle"), (2, "Bottom")],
            |e: &MText| e.attachment_point.vertical(),
        )
        .add_int_choice(
            PropertyInfo::new("drawDirection", "Draw Direction", "Direction of text drawing"),
            DrawingDirection::ALL.map(|(d, label)| (d as i32, label)),
            |e: &MText| e.drawing_direction as i32,
        )
        .add_int_choice(
            PropertyInfo::new("lspacingStyle", "Line Spacing Style", "Style of line spacing"),
            LineSpacingStyle::ALL.map(|(s, label)| (s as i32, label)),
            |e: &MText| e.line_spacing_style as i32,
        )
        .add_double(
            PropertyInfo::new("linespacingFactor", "Line Spacing Factor", "Factor of line spacing"),
            |e: &MText| e.line_spacing_factor,
        )
        .add_string(PropertyInfo::new("text", "Text", "Content of the text"), |e: &MText| {
            e.value.clone()
        });
    entity.finish()
}
