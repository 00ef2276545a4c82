//! Test document builders.
//!
//! `create_sample_document()` produces a small drawing with a few entities
//! of every commonly filtered kind, spread over three layers, one of them
//! switched off.

#![allow(dead_code)]

use entity_match::entities::*;
use entity_match::tables::{DimStyle, Layer, Ucs};
use entity_match::types::{Color, LineWeight, Vector2, Vector3};
use entity_match::{CadDocument, Handle};
use std::f64::consts::FRAC_PI_2;

/// Handles of the entities placed by [`create_sample_document`]
#[derive(Debug, Clone)]
pub struct SampleHandles {
    pub short_line: Handle,
    pub vertical_line: Handle,
    pub long_line: Handle,
    pub hidden_line: Handle,
    pub small_circle: Handle,
    pub red_circle: Handle,
    pub big_circle: Handle,
    pub polyline: Handle,
    pub label: Handle,
    pub dimension: Handle,
    pub overridden_dimension: Handle,
    pub ordinate: Handle,
    pub fit_spline: Handle,
    pub control_spline: Handle,
    pub patterned_hatch: Handle,
    pub solid_hatch: Handle,
    pub image: Handle,
}

/// Create a document containing lines, circles, a polyline, splines,
/// hatches, an image, a text and dimensions.
///
/// - Layer "Walls" is red with 0.50 mm lines; the short and long lines and
///   the big circle are on it
/// - Layer "Hidden" is switched off and holds one 10-unit line
/// - The polyline's vertices have X coordinates 1, 5 and 9
/// - The fit-point spline passes through X 0, 5 and 10; the control-point
///   spline has control points at X 0, 3, 6 and 9
/// - The patterned hatch is a 10x10 square with a 2x2 hole; the solid one
///   is a 4x4 square
/// - The image is 640x480 pixels at 0.1 units per pixel
/// - The aligned dimension uses "Arch" with a 5-unit text height override
/// - A UCS named "Turned" is registered but not active
pub fn create_sample_document() -> (CadDocument, SampleHandles) {
    let mut doc = CadDocument::new();

    let walls = doc.add_layer(Layer::with_color("Walls", Color::RED).line_weight(LineWeight::W0_50));
    let mut hidden = Layer::new("Hidden");
    hidden.flags.off = true;
    let hidden = doc.add_layer(hidden);

    // Lines
    let mut short_line = Line::from_coords(0.0, 0.0, 10.0, 0.0);
    short_line.set_layer(walls.clone());
    let short_line = doc.add_entity(short_line);

    let vertical_line = doc.add_entity(Line::from_coords(0.0, 0.0, 0.0, 5.0));

    let mut long_line = Line::from_coords(0.0, 0.0, 30.0, 40.0);
    long_line.set_layer(walls.clone());
    let long_line = doc.add_entity(long_line);

    let mut hidden_line = Line::from_coords(0.0, 10.0, 10.0, 10.0);
    hidden_line.set_layer(hidden);
    let hidden_line = doc.add_entity(hidden_line);

    // Circles
    let small_circle = doc.add_entity(Circle::from_center_radius(Vector3::new(50.0, 0.0, 0.0), 1.0));

    let mut red_circle = Circle::from_center_radius(Vector3::new(60.0, 0.0, 0.0), 2.5);
    red_circle.common.pen.color = Color::RED;
    let red_circle = doc.add_entity(red_circle);

    let mut big_circle = Circle::from_center_radius(Vector3::new(70.0, 0.0, 0.0), 5.0);
    big_circle.set_layer(walls);
    let big_circle = doc.add_entity(big_circle);

    // Polyline
    let polyline = doc.add_entity(LwPolyline::from_points([
        Vector2::new(1.0, 0.0),
        Vector2::new(5.0, 3.0),
        Vector2::new(9.0, 0.0),
    ]));

    // Annotation
    let label = doc.add_entity(Text::with_value("Room 101", Vector3::new(5.0, 5.0, 0.0)).with_height(2.5));

    // Splines
    let fit_spline = doc.add_entity(Spline::from_fit_points(vec![
        Vector3::new(0.0, 20.0, 0.0),
        Vector3::new(5.0, 25.0, 0.0),
        Vector3::new(10.0, 20.0, 0.0),
    ]));
    let control_spline = doc.add_entity(Spline::from_control_points(vec![
        Vector3::new(0.0, 30.0, 0.0),
        Vector3::new(3.0, 33.0, 0.0),
        Vector3::new(6.0, 30.0, 0.0),
        Vector3::new(9.0, 33.0, 0.0),
    ]));

    // Fills
    let patterned_hatch = doc.add_entity(
        Hatch::patterned("ANSI31", square(0.0, 50.0, 10.0)).with_hole(square(4.0, 54.0, 2.0)),
    );
    let solid_hatch = doc.add_entity(Hatch::solid(square(20.0, 50.0, 4.0)));
    let image = doc.add_entity(
        RasterImage::new("plan.png", Vector3::new(100.0, 0.0, 0.0), 640.0, 480.0).with_placement(0.1, 0.0),
    );

    // Dimensions
    let arch = doc.add_dim_style(DimStyle::new("Arch"));
    let dimension = doc.add_entity(DimensionLinear::new(
        Vector3::new(0.0, -5.0, 0.0),
        Vector3::new(10.0, -5.0, 0.0),
        arch.clone(),
    ));

    let mut overridden = DimensionAligned::new(
        Vector3::new(0.0, -10.0, 0.0),
        Vector3::new(3.0, -14.0, 0.0),
        arch,
    );
    let mut tall_text = DimStyle::new("Arch");
    tall_text.dimtxt = 5.0;
    overridden.base.style_override = Some(tall_text.into_ref());
    let overridden_dimension = doc.add_entity(overridden);

    let standard = doc.add_dim_style(DimStyle::standard());
    let ordinate = doc.add_entity(DimensionOrdinate::y_ordinate(
        Vector3::new(20.0, -3.0, 0.0),
        Vector3::new(25.0, -3.0, 0.0),
        standard,
    ));

    doc.ucss.add(Ucs::rotated("Turned", Vector3::ZERO, FRAC_PI_2));

    let handles = SampleHandles {
        short_line,
        vertical_line,
        long_line,
        hidden_line,
        small_circle,
        red_circle,
        big_circle,
        polyline,
        label,
        dimension,
        overridden_dimension,
        ordinate,
        fit_spline,
        control_spline,
        patterned_hatch,
        solid_hatch,
        image,
    };
    (doc, handles)
}

fn square(x: f64, y: f64, side: f64) -> Vec<Vector2> {
    vec![
        Vector2::new(x, y),
        Vector2::new(x + side, y),
        Vector2::new(x + side, y + side),
        Vector2::new(x, y + side),
    ]
}

/// Create a document with `count` lines of lengths 1, 2, 3, ...
pub fn create_line_document(count: usize) -> CadDocument {
    let mut doc = CadDocument::new();
    for i in 0..count {
        let y = i as f64;
        doc.add_entity(Line::from_coords(0.0, y, y + 1.0, y));
    }
    doc
}
