use super::common::add_common_properties;
use crate::entities::RasterImage;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<RasterImage>::new();
    add_common_properties(&mut entity);
    entity
        .add_string(PropertyInfo::new("file", "File", "Name of the image file"), |e: &RasterImage| {
            e.file_path.clone()
        })
        .add_point("insert", "Insert", "image insertion point", |e: &RasterImage| {
            e.insertion_point
        })
        .add_double(PropertyInfo::new("scale", "Scale", "Scale factor for image"), |e: &RasterImage| {
            e.scale()
        })
        .add_angle(PropertyInfo::new("angle", "Angle", "Image rotation angle"), |e: &RasterImage| {
            e.rotation()
        })
        .add_double(
            PropertyInfo::new("sizeX", "Width pixels", "Width of image in pixels"),
            |e: &RasterImage| e.size.x,
        )
        .add_double(
            PropertyInfo::new("sizeY", "Height pixels", "Height of image in pixels"),
            |e: &RasterImage| e.size.y,
        )
        .add_length(PropertyInfo::new("width", "Width", "Width of image"), |e: &RasterImage| {
            e.width()
        })
        .add_length(PropertyInfo::new("height", "Height", "Height of image"), |e: &RasterImage| {
            e.height()
        })
        .add_int(
            PropertyInfo::new("brightness", "Brightness", "Image brightness, 0 to 100"),
            |e: &RasterImage| i32::from(e.brightness),
        )
        .add_int(
            PropertyInfo::new("contrast", "Contrast", "Image contrast, 0 to 100"),
            |e: &RasterImage| i32::from(e.contrast),
        )
        .add_int(PropertyInfo::new("fade", "Fade", "Image fade, 0 to 100"), |e: &RasterImage| {
            i32::from(e.fade)
        });
    entity.finish()
}
