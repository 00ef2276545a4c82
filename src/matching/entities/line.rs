use super::common::add_common_properties;
use crate::entities::Line;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<Line>::new();
    add_common_properties(&mut entity);
    entity
        .add_point("start", "Start", "start point", |e: &Line| e.start)
        .add_point("end", "End", "end point", |e: &Line| e.end)
        .add_point("middle", "Middle", "middle point", |e: &Line| e.midpoint())
        .add_length(PropertyInfo::new("length", "Length", "Length of line"), |e: &Line| e.length())
        .add_angle(
            PropertyInfo::new("angle1", "Angle 1", "Angle from the 0.0 to start point"),
            |e: &Line| e.angle1(),
        )
        .add_angle(
            PropertyInfo::new("angle2", "Angle 2", "Angle from the 0.0 to end point"),
            |e: &Line| e.angle2(),
        )
        .add_inclination(
            PropertyInfo::new("incline", "Incline Angle", "Angle of the line inclination to x-axis"),
            |e: &Line| e.angle1(),
        )
        .add_length(
            PropertyInfo::new("deltaX", "Delta X", "Horizontal distance between endpoints"),
            |e: &Line| e.delta_x(),
        )
        .add_length(
            PropertyInfo::new("deltaY", "Delta Y", "Vertical distance between endpoints"),
            |e: &Line| e.delta_y(),
        );
    entity.finish()
}
