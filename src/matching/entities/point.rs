use super::common::add_common_properties;
use crate::entities::Point;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<Point>::new();
    add_common_properties(&mut entity);
    entity.add_point("pos", "Position", "position of point", |e: &Point| e.location);
    entity.finish()
}
