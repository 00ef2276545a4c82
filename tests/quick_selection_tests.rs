//! Quick selection over whole documents.

mod common;

use common::builders::{create_line_document, create_sample_document};
use entity_match::matching::{
    parse_value, registry, ChoiceCatalog, MatchOperation, PropertyValue, PropertyValueKind,
    QuickSelection, QuickSelectionRequest, ToleranceDefaults,
};
use entity_match::types::{Color, LineWeight};
use entity_match::{EntityKind, MatchError};

fn select(doc: &entity_match::CadDocument, request: &QuickSelectionRequest) -> Vec<entity_match::Handle> {
    doc.quick_select(request, &ToleranceDefaults::default())
        .unwrap_or_else(|e| panic!("request rejected: {e}"))
}

#[test]
fn select_all_skips_hidden_entities() {
    let (doc, h) = create_sample_document();
    let selected = select(&doc, &QuickSelectionRequest::select_all(None));
    assert_eq!(selected.len(), doc.entity_count() - 1);
    assert!(!selected.contains(&h.hidden_line));
}

#[test]
fn select_all_of_one_kind() {
    let (doc, h) = create_sample_document();
    let selected = select(&doc, &QuickSelectionRequest::select_all(Some(EntityKind::Circle)));
    assert_eq!(selected, vec![h.small_circle, h.red_circle, h.big_circle]);
}

#[test]
fn lines_longer_than_five() {
    let (doc, h) = create_sample_document();
    let request = QuickSelectionRequest::new(EntityKind::Line, "length", MatchOperation::Greater, 5.0);
    assert_eq!(select(&doc, &request), vec![h.short_line, h.long_line]);
}

#[test]
fn excluding_matches_inverts_within_the_kind() {
    let (doc, h) = create_sample_document();
    let request =
        QuickSelectionRequest::new(EntityKind::Line, "length", MatchOperation::Greater, 5.0)
            .excluding_matches();
    assert_eq!(select(&doc, &request), vec![h.vertical_line]);
}

#[test]
fn equality_uses_the_default_tolerance() {
    let (doc, h) = create_sample_document();
    let request = QuickSelectionRequest::new(EntityKind::Line, "length", MatchOperation::Equals, 50.0);
    assert_eq!(select(&doc, &request), vec![h.long_line]);

    let off_by_a_hair = QuickSelectionRequest::new(EntityKind::Line, "length", MatchOperation::Equals, 50.001);
    assert!(select(&doc, &off_by_a_hair).is_empty());

    let loose = off_by_a_hair.with_tolerance(0.01);
    assert_eq!(select(&doc, &loose), vec![h.long_line]);
}

#[test]
fn layer_filter_across_every_kind() {
    let (doc, h) = create_sample_document();
    let walls = doc.layer("Walls").cloned().unwrap();
    let request = QuickSelectionRequest::new(EntityKind::Line, "layer", MatchOperation::Equals, walls)
        .any_kind();
    assert_eq!(select(&doc, &request), vec![h.short_line, h.long_line, h.big_circle]);
}

#[test]
fn resolved_color_includes_by_layer_entities() {
    let (doc, h) = create_sample_document();
    let stored = QuickSelectionRequest::new(EntityKind::Circle, "color", MatchOperation::Equals, Color::RED);
    assert_eq!(select(&doc, &stored), vec![h.red_circle]);

    let resolved = QuickSelectionRequest::new(EntityKind::Circle, "colorR", MatchOperation::Equals, Color::RED);
    assert_eq!(select(&doc, &resolved), vec![h.red_circle, h.big_circle]);
}

#[test]
fn resolved_line_width() {
    let (doc, h) = create_sample_document();
    let request = QuickSelectionRequest::new(
        EntityKind::Line,
        "lineWidthR",
        MatchOperation::Equals,
        LineWeight::W0_50,
    );
    assert_eq!(select(&doc, &request), vec![h.short_line, h.long_line]);
}

#[test]
fn polyline_vertex_contains() {
    let (doc, h) = create_sample_document();
    let request = QuickSelectionRequest::new(EntityKind::LwPolyline, "vertexX", MatchOperation::Equals, 5.0);
    assert_eq!(select(&doc, &request), vec![h.polyline]);

    let missing = QuickSelectionRequest::new(EntityKind::LwPolyline, "vertexX", MatchOperation::Equals, 100.0);
    assert!(select(&doc, &missing).is_empty());
}

#[test]
fn coordinates_follow_the_active_ucs() {
    let (mut doc, h) = create_sample_document();
    // The small circle sits at world (50, 0)
    let request = QuickSelectionRequest::new(EntityKind::Circle, "centerY", MatchOperation::Equals, 50.0)
        .with_tolerance(1e-9);
    assert!(select(&doc, &request).is_empty());

    assert!(doc.set_active_ucs("Turned"));
    assert_eq!(select(&doc, &request), vec![h.small_circle]);
}

#[test]
fn dimension_style_by_identity() {
    let (doc, h) = create_sample_document();
    let arch = doc.dim_style("Arch").cloned().unwrap();
    let request = QuickSelectionRequest::new(EntityKind::DimLinear, "dimStyle", MatchOperation::Equals, arch.clone());
    assert_eq!(select(&doc, &request), vec![h.dimension]);

    // Matched by the style itself, not by its override
    let aligned = QuickSelectionRequest::new(EntityKind::DimAligned, "dimStyle", MatchOperation::Equals, arch);
    assert_eq!(select(&doc, &aligned), vec![h.overridden_dimension]);

    let standard = doc.dim_style("Standard").cloned().unwrap();
    let request = QuickSelectionRequest::new(EntityKind::DimLinear, "dimStyle", MatchOperation::Equals, standard);
    assert!(select(&doc, &request).is_empty());
}

#[test]
fn style_override_takes_part_in_matching() {
    let (doc, h) = create_sample_document();
    let overridden =
        QuickSelectionRequest::new(EntityKind::DimAligned, "hasStyleOverride", MatchOperation::Equals, true);
    assert_eq!(select(&doc, &overridden), vec![h.overridden_dimension]);

    let tall = QuickSelectionRequest::new(EntityKind::DimAligned, "dimTextHeight", MatchOperation::Greater, 1.0);
    assert_eq!(select(&doc, &tall), vec![h.overridden_dimension]);

    let tall_linear =
        QuickSelectionRequest::new(EntityKind::DimLinear, "dimTextHeight", MatchOperation::Greater, 1.0);
    assert!(select(&doc, &tall_linear).is_empty());
}

#[test]
fn ordinate_dimensions() {
    let (doc, h) = create_sample_document();
    let y_ordinates = QuickSelectionRequest::new(EntityKind::DimOrdinate, "ordinate", MatchOperation::Equals, 0);
    assert_eq!(select(&doc, &y_ordinates), vec![h.ordinate]);

    let by_feature = QuickSelectionRequest::new(EntityKind::DimOrdinate, "featureX", MatchOperation::Equals, 20.0);
    assert_eq!(select(&doc, &by_feature), vec![h.ordinate]);

    let measured = QuickSelectionRequest::new(EntityKind::DimOrdinate, "measurement", MatchOperation::Equals, 3.0);
    assert_eq!(select(&doc, &measured), vec![h.ordinate]);
}

#[test]
fn spline_control_and_fit_points() {
    let (doc, h) = create_sample_document();
    let by_control = QuickSelectionRequest::new(EntityKind::Spline, "useControlPoints", MatchOperation::Equals, true);
    assert_eq!(select(&doc, &by_control), vec![h.control_spline]);

    let control_x = QuickSelectionRequest::new(EntityKind::Spline, "controlPointX", MatchOperation::Equals, 6.0);
    assert_eq!(select(&doc, &control_x), vec![h.control_spline]);

    let fit_x = QuickSelectionRequest::new(EntityKind::Spline, "vertexX", MatchOperation::Equals, 5.0);
    assert_eq!(select(&doc, &fit_x), vec![h.fit_spline]);
}

#[test]
fn hatches_by_pattern_and_area() {
    let (doc, h) = create_sample_document();
    let hatch = registry().descriptor(EntityKind::Hatch).unwrap();
    let patterns = hatch.find_property_descriptor("pattern").unwrap().choice_values(&doc);
    let labels: Vec<&str> = patterns.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["ANSI31", "SOLID"]);

    let ansi = QuickSelectionRequest::new(EntityKind::Hatch, "pattern", MatchOperation::Equals, patterns[0].value.clone());
    assert_eq!(select(&doc, &ansi), vec![h.patterned_hatch]);

    let large = QuickSelectionRequest::new(EntityKind::Hatch, "area", MatchOperation::Greater, 50.0);
    assert_eq!(select(&doc, &large), vec![h.patterned_hatch]);

    let solid = QuickSelectionRequest::new(EntityKind::Hatch, "solid", MatchOperation::Equals, true);
    assert_eq!(select(&doc, &solid), vec![h.solid_hatch]);
}

#[test]
fn images_by_world_size() {
    let (doc, h) = create_sample_document();
    let wide = QuickSelectionRequest::new(EntityKind::Image, "width", MatchOperation::Equals, 64.0);
    assert_eq!(select(&doc, &wide), vec![h.image]);

    let by_file = QuickSelectionRequest::new(EntityKind::Image, "file", MatchOperation::Equals, "PLAN.PNG");
    assert_eq!(select(&doc, &by_file), vec![h.image]);
}

#[test]
fn text_content_from_parsed_input() {
    let (doc, h) = create_sample_document();
    let value = parse_value(PropertyValueKind::String, "room 101").unwrap();
    let request = QuickSelectionRequest::new(EntityKind::Text, "text", MatchOperation::Equals, value);
    assert_eq!(select(&doc, &request), vec![h.label]);
}

#[test]
fn angle_input_in_degrees() {
    let (doc, h) = create_sample_document();
    let value = parse_value(PropertyValueKind::Angle, "90").unwrap();
    let request = QuickSelectionRequest::new(EntityKind::Line, "angle1", MatchOperation::Equals, value)
        .with_tolerance(1e-9);
    assert_eq!(select(&doc, &request), vec![h.vertical_line]);
}

#[test]
fn angle_input_follows_the_active_ucs() {
    let (mut doc, h) = create_sample_document();
    let straight_up = parse_value(PropertyValueKind::Angle, "180").unwrap();
    let request = QuickSelectionRequest::new(EntityKind::Line, "angle1", MatchOperation::Equals, straight_up)
        .with_tolerance(1e-9);
    assert!(select(&doc, &request).is_empty());

    // "Turned" rotates points by 90°, so world 90° reads as 180°
    assert!(doc.set_active_ucs("Turned"));
    assert_eq!(select(&doc, &request), vec![h.vertical_line]);

    assert!(doc.set_active_ucs("World"));
    assert!(select(&doc, &request).is_empty());
}

#[test]
fn rejected_requests() {
    let (doc, _) = create_sample_document();
    let defaults = ToleranceDefaults::default();

    let unknown = QuickSelectionRequest::new(EntityKind::Line, "radius", MatchOperation::Equals, 1.0);
    assert!(matches!(
        doc.quick_select(&unknown, &defaults),
        Err(MatchError::UnknownProperty { .. })
    ));

    let unordered = QuickSelectionRequest::new(EntityKind::Line, "layer", MatchOperation::Greater, 0.0);
    assert!(matches!(
        doc.quick_select(&unordered, &defaults),
        Err(MatchError::UnsupportedOperation { .. })
    ));

    let wrong_value = QuickSelectionRequest::new(EntityKind::Line, "length", MatchOperation::Equals, true);
    assert!(matches!(
        doc.quick_select(&wrong_value, &defaults),
        Err(MatchError::ValueKindMismatch { .. })
    ));

    let only_lines = QuickSelectionRequest::new(EntityKind::Line, "length", MatchOperation::Equals, 1.0)
        .any_kind();
    assert!(matches!(
        doc.quick_select(&only_lines, &defaults),
        Err(MatchError::UnknownProperty { .. })
    ));
}

#[test]
fn unparseable_input_never_reaches_the_engine() {
    assert!(matches!(
        parse_value(PropertyValueKind::Length, "ten"),
        Err(MatchError::Parse(_))
    ));
}

#[test]
fn dynamic_choices_reflect_the_document() {
    let (doc, _) = create_sample_document();
    let line = registry().descriptor(EntityKind::Line).unwrap();

    let layers = line.find_property_descriptor("layer").unwrap().choice_values(&doc);
    let labels: Vec<&str> = layers.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "Walls", "Hidden"]);
    assert!(layers.iter().all(|c| matches!(c.value, PropertyValue::Layer(_))));

    let line_types = line.find_property_descriptor("lineType").unwrap().choice_values(&doc);
    let labels: Vec<&str> = line_types.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["ByLayer", "ByBlock", "Continuous"]);
    assert_eq!(ChoiceCatalog::line_types(&doc), vec!["Continuous".to_string()]);
}

#[test]
fn selection_kinds() {
    let any = QuickSelectionRequest::new(EntityKind::Line, "color", MatchOperation::Equals, Color::RED)
        .any_kind();
    let selection = QuickSelection::build(&any, registry(), None, &ToleranceDefaults::default()).unwrap();
    assert_eq!(selection.kinds().count(), registry().len());
}

#[test]
fn large_document_scan() {
    let doc = create_line_document(1000);
    let request = QuickSelectionRequest::new(EntityKind::Line, "length", MatchOperation::Greater, 500.0);
    assert_eq!(select(&doc, &request).len(), 500);

    let request = QuickSelectionRequest::new(EntityKind::Line, "startY", MatchOperation::Less, 10.0);
    assert_eq!(select(&doc, &request).len(), 10);
}
