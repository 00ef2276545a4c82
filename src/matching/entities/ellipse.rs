use super::common::add_common_properties;
use crate::entities::Ellipse;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<Ellipse>::new();
    add_common_properties(&mut entity);
    entity
        .add_point("center", "Center", "center point", |e: &Ellipse| e.center)
        .add_length(
            PropertyInfo::new("radiusMajor", "Major Radius", "Major radius of ellipse"),
            |e: &Ellipse| e.major_radius(),
        )
        .add_length(
            PropertyInfo::new("radiusMinor", "Minor Radius", "Minor radius of ellipse"),
            |e: &Ellipse| e.minor_radius(),
        )
        .add_double(PropertyInfo::new("ratio", "Ratio", "Ratio of ellipse axes"), |e: &Ellipse| {
            e.minor_axis_ratio
        })
        .add_angle(
            PropertyInfo::new("angle", "Angle", "Angle of the ellipse major axis"),
            |e: &Ellipse| e.rotation(),
        )
        .add_length(
            PropertyInfo::new("circumference", "Circumference", "Circumference of the ellipse"),
            |e: &Ellipse| e.circumference(),
        )
        .add_double(PropertyInfo::new("area", "Area", "Area of the ellipse"), |e: &Ellipse| {
            e.area()
        })
        .add_boolean(
            PropertyInfo::new("isArc", "Is Arc", "Whether ellipse is elliptic arc"),
            |e: &Ellipse| e.is_arc(),
        )
        .add_point("start", "Arc Start", "start point", |e: &Ellipse| e.start_point())
        .add_point("end", "Arc End", "end point", |e: &Ellipse| e.end_point())
        .add_angle(
            PropertyInfo::new("angleLen", "Arc Angle Length", "Angle length for arc")
                .relative_angle(),
            |e: &Ellipse| e.sweep_parameter(),
        )
        .add_angle(
            PropertyInfo::new("angle1", "Arc Start Angle", "Start angle of arc")
                .relative_angle(),
            |e: &Ellipse| e.start_parameter,
        )
        .add_angle(
            PropertyInfo::new("angle2", "Arc End Angle", "End angle of arc")
                .relative_angle(),
            |e: &Ellipse| e.end_parameter,
        );
    entity.finish()
}
