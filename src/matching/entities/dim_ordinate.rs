use super::common::add_common_properties;
use super::dimension::add_dimension_properties;
use crate::entities::DimensionOrdinate;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<DimensionOrdinate>::new();
    add_common_properties(&mut entity);
    add_dimension_properties(&mut entity);
    entity
        .add_point("origin", "Origin Point", "dimension origin point", |e: &DimensionOrdinate| {
            e.definition_point
        })
        .add_int_choice(
            PropertyInfo::new("ordinate", "Ordinate", "Direction of ordinate"),
            [(1, "X"), (0, "Y")],
            |e: &DimensionOrdinate| i32::from(e.is_ordinate_type_x),
        )
        .add_point("feature", "Feature Point", "dimension feature point", |e: &DimensionOrdinate| {
            e.feature_location
        })
        .add_point("leaderEnd", "Leader End", "dimension leader end point", |e: &DimensionOrdinate| {
            e.leader_endpoint
        })
        .add_point("textMiddle", "Text middle point", "text middle point", |e: &DimensionOrdinate| {
            e.base.text_middle_point
        })
        .add_angle(
            PropertyInfo::new("hdir", "Horizontal", "Angle of horizontal direction for this dimension"),
            |e: &DimensionOrdinate| e.horizontal_direction,
        );
    entity.finish()
}
