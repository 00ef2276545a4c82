use super::common::add_common_properties;
use crate::entities::Hatch;
use crate::matching::choice::ChoiceCatalog;
use crate::matching::descriptor::{EntityMatchDescriptor, TypedEntityMatchDescriptor};
use crate::matching::property::PropertyInfo;

pub fn descriptor() -> EntityMatchDescriptor {
    let mut entity = TypedEntityMatchDescriptor::<Hatch>::new();
    add_common_properties(&mut entity);
    entity
        .add_string_list(
            PropertyInfo::new("pattern", "Pattern", "Name of the hatch pattern"),
            |catalog: &dyn ChoiceCatalog| catalog.hatch_patterns(),
            |e: &Hatch| e.pattern.clone(),
        )
        .add_boolean(
            PropertyInfo::new("solid", "Solid", "Determines whether hatch is a solid fill"),
            |e: &Hatch| e.is_solid,
        )
        .add_double(PropertyInfo::new("scale", "Scale", "Scale of the hatch pattern"), |e: &Hatch| {
            e.pattern_scale
        })
        .add_angle(PropertyInfo::new("angle", "Angle", "Angle of the hatch pattern"), |e: &Hatch| {
            e.pattern_angle
        })
        .add_boolean(
            PropertyInfo::new(
                "associative",
                "Associative",
                "Determines whether hatch follows its boundary objects",
            ),
            |e: &Hatch| e.is_associative,
        )
        .add_int(
            PropertyInfo::new("loops", "Loops Count", "Amount of boundary loops"),
            |e: &Hatch| i32::try_from(e.loop_count()).unwrap_or(i32::MAX),
        )
        .add_double(PropertyInfo::new("area", "Area", "Filled area of the hatch"), |e: &Hatch| {
            e.area()
        });
    entity.finish()
}
