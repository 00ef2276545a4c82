use super::common::add_common_properties;
use crate::entities::Arc;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<Arc>::new();
    add_common_properties(&mut entity);
    entity
        .add_point("center", "Center", "center point", |e: &Arc| e.center)
        .add_length(PropertyInfo::new("radius", "Radius", "Radius of arc"), |e: &Arc| e.radius)
        .add_boolean(
            PropertyInfo::new(
                "reversed",
                "Is Reversed",
                "Clockwise direction if reversed, counterclockwise otherwise",
            ),
            |e: &Arc| e.reversed,
        )
        .add_length(PropertyInfo::new("diameter", "Diameter", "Diameter of arc"), |e: &Arc| {
            e.diameter()
        })
        .add_point("start", "Start", "start point", |e: &Arc| e.start_point())
        .add_point("end", "End", "end point", |e: &Arc| e.end_point())
        .add_angle(
            PropertyInfo::new("angleLen", "Angle Length", "Angle length for arc")
                .relative_angle(),
            |e: &Arc| e.sweep_angle(),
        )
        .add_length(
            PropertyInfo::new("circumference", "Circumference", "Circumference of arc"),
            |e: &Arc| e.arc_length(),
        )
        .add_length(
            PropertyInfo::new("chord", "Chord", "Chord length (distance from start to end point)"),
            |e: &Arc| e.chord(),
        )
        .add_length(PropertyInfo::new("sagitta", "Sagitta", "Sagitta of the arc"), |e: &Arc| {
            e.sagitta()
        })
        .add_angle(PropertyInfo::new("angle1", "Start Angle", "Start angle of arc"), |e: &Arc| {
            e.start_angle
        })
        .add_angle(PropertyInfo::new("angle2", "End Angle", "End angle of arc"), |e: &Arc| {
            e.end_angle
        })
        .add_double(PropertyInfo::new("bulge", "Bulge", "Bulge of arc"), |e: &Arc| e.bulge());
    entity.finish()
}
