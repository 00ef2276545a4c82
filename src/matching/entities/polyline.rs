use super::common::add_common_properties;
use crate::entities::LwPolyline;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<LwPolyline>::new();
    add_common_properties(&mut entity);
    entity
        .add_point("start", "Start", "start point", |e: &LwPolyline| e.start_point())
        .add_point("end", "End", "end point", |e: &LwPolyline| e.end_point())
        .add_contains_x(
            PropertyInfo::new("vertexX", "Vertex X", "X coordinate for one of vertexes"),
            |e: &LwPolyline| e.points(),
        )
        .add_contains_y(
            PropertyInfo::new("vertexY", "Vertex Y", "Y coordinate for one of vertexes"),
            |e: &LwPolyline| e.points(),
        )
        .add_length(PropertyInfo::new("length", "Length", "Length of polyline"), |e: &LwPolyline| {
            e.length()
        })
        .add_boolean(
            PropertyInfo::new("closed", "Is Closed", "Determines whether polyline is closed or not"),
            |e: &LwPolyline| e.is_closed,
        )
        .add_int(
            PropertyInfo::new("segmentsCount", "Segments Count", "Amount of polyline's segments"),
            |e: &LwPolyline| i32::try_from(e.segment_count()).unwrap_or(i32::MAX),
        )
        .add_boolean(
            PropertyInfo::new("hasArc", "Contains Arc", "Defines whether polyline include arc"),
            |e: &LwPolyline| e.has_arc(),
        );
    entity.finish()
}
