//! Properties shared by every entity kind: layer and pen attributes

use crate::entities::TypedEntity;
use crate::matching::choice::{Choice, ChoiceCatalog};
use crate::matching::descriptor::TypedEntityMatchDescriptor;
use crate::matching::property::PropertyInfo;
use crate::matching::type_descriptor::{
    COLOR, COLOR_RESOLVED, LAYER, LINE_TYPE, LINE_TYPE_RESOLVED, LINE_WIDTH, LINE_WIDTH_RESOLVED,
};
use crate::types::{LineTypeRef, LineWeight};

/// Add layer, color, line width and line type, stored and resolved
pub fn add_common_properties<E: TypedEntity>(entity: &mut TypedEntityMatchDescriptor<E>) {
    entity
        .add_dynamic_choice(
            PropertyInfo::new("layer", "Layer", "Layer of the entity"),
            &LAYER,
            layer_choices,
            |e: &E| e.layer().clone(),
        )
        .add(
            PropertyInfo::new("color", "Color", "Color attribute as it is stored in the entity"),
            &COLOR,
            |e: &E| e.pen().color,
        )
        .add(
            PropertyInfo::new(
                "colorR",
                "Color (Resolved)",
                "Resolved color that is used when entity is drawn",
            ),
            &COLOR_RESOLVED,
            |e: &E| e.resolved_pen().color,
        )
        .add_choice(
            PropertyInfo::new(
                "lineWidth",
                "Line Width",
                "Width of line attribute that is stored in the entity",
            ),
            &LINE_WIDTH,
            line_width_choices(true),
            |e: &E| e.pen().line_weight,
        )
        .add_choice(
            PropertyInfo::new(
                "lineWidthR",
                "Line Width (Resolved)",
                "Resolved width of line that is used when entity is drawn",
            ),
            &LINE_WIDTH_RESOLVED,
            line_width_choices(false),
            |e: &E| e.resolved_pen().line_weight,
        )
        .add_dynamic_choice(
            PropertyInfo::new("lineType", "Line Type", "Type of line attribute stored in the entity"),
            &LINE_TYPE,
            |catalog: &dyn ChoiceCatalog| line_type_choices(catalog, true),
            |e: &E| e.pen().line_type.clone(),
        )
        .add_dynamic_choice(
            PropertyInfo::new(
                "lineTypeR",
                "Line Type (Resolved)",
                "Resolved type of line that is used when entity is drawn",
            ),
            &LINE_TYPE_RESOLVED,
            |catalog: &dyn ChoiceCatalog| line_type_choices(catalog, false),
            |e: &E| e.resolved_pen().line_type.clone(),
        );
}

fn layer_choices(catalog: &dyn ChoiceCatalog) -> Vec<Choice> {
    catalog
        .layers()
        .into_iter()
        .map(|layer| Choice::new(layer.name.clone(), layer))
        .collect()
}

// A resolved value is never ByLayer, so that choice is only offered for
// the stored attribute.
pub(super) fn line_width_choices(with_by_layer: bool) -> Vec<Choice> {
    let special = [LineWeight::ByLayer, LineWeight::ByBlock, LineWeight::Default];
    special
        .into_iter()
        .filter(|w| with_by_layer || *w != LineWeight::ByLayer)
        .chain(LineWeight::STANDARD)
        .map(|w| Choice::new(w.to_string(), w))
        .collect()
}

pub(super) fn line_type_choices(catalog: &dyn ChoiceCatalog, with_by_layer: bool) -> Vec<Choice> {
    let mut choices = Vec::new();
    if with_by_layer {
        choices.push(Choice::new("ByLayer", LineTypeRef::ByLayer));
    }
    choices.push(Choice::new("ByBlock", LineTypeRef::ByBlock));
    choices.extend(
        catalog
            .line_types()
            .into_iter()
            .map(|name| Choice::new(name.clone(), LineTypeRef::named(name))),
    );
    choices
}
