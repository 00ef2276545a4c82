use super::common::add_common_properties;
use crate::entities::Spline;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;
use crate::types::Vector3;

fn defining_points(e: &Spline) -> Vec<Vector3> {
    if e.uses_fit_points() {
        e.fit_points.clone()
    } else {
        e.control_points.clone()
    }
}

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<Spline>::new();
    add_common_properties(&mut entity);
    entity
        .add_int(PropertyInfo::new("degree", "Degree", "Degree of spline"), |e: &Spline| e.degree)
        .add_boolean(
            PropertyInfo::new("closed", "Is Closed", "Determines whether spline is closed or not"),
            |e: &Spline| e.closed,
        )
        .add_int(
            PropertyInfo::new("numberOfPoints", "Points Count", "Amount of spline's defining points"),
            |e: &Spline| i32::try_from(defining_points(e).len()).unwrap_or(i32::MAX),
        )
        .add_boolean(
            PropertyInfo::new(
                "useControlPoints",
                "By Control Points",
                "Determines whether spline is controlled by control points or fit points",
            ),
            |e: &Spline| !e.uses_fit_points(),
        )
        .add_point("start", "Start", "start point", |e: &Spline| e.start_point())
        .add_point("end", "End", "end point", |e: &Spline| e.end_point())
        .add_contains_x(
            PropertyInfo::new("pointX", "Point X", "X coordinate for one of defining points"),
            defining_points,
        )
        .add_contains_y(
            PropertyInfo::new("pointY", "Point Y", "Y coordinate for one of defining points"),
            defining_points,
        )
        .add_contains_x(
            PropertyInfo::new("controlPointX", "Control Point X", "X coordinate for one of control points"),
            |e: &Spline| e.control_points.clone(),
        )
        .add_contains_y(
            PropertyInfo::new("controlPointY", "Control Point Y", "Y coordinate for one of control points"),
            |e: &Spline| e.control_points.clone(),
        )
        .add_contains_x(
            PropertyInfo::new("vertexX", "Vertex X", "X coordinate for one of fit points"),
            |e: &Spline| e.fit_points.clone(),
        )
        .add_contains_y(
            PropertyInfo::new("vertexY", "Vertex Y", "Y coordinate for one of fit points"),
            |e: &Spline| e.fit_points.clone(),
        );
    entity.finish()
}
