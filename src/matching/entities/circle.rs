use super::common::add_common_properties;
use crate::entities::Circle;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<Circle>::new();
    add_common_properties(&mut entity);
    entity
        .add_point("center", "Center", "center point", |e: &Circle| e.center)
        .add_length(PropertyInfo::new("radius", "Radius", "Radius of circle"), |e: &Circle| e.radius)
        .add_length(PropertyInfo::new("diameter", "Diameter", "Diameter of circle"), |e: &Circle| {
            e.diameter()
        })
        .add_length(
            PropertyInfo::new("circumference", "Circumference", "Circumference of circle"),
            |e: &Circle| e.circumference(),
        )
        .add_double(PropertyInfo::new("area", "Area", "Area of circle"), |e: &Circle| e.area());
    entity.finish()
}
