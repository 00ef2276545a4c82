//! Properties shared by the dimension kinds
//!
//! Style-derived properties read the effective style, so a per-entity
//! override takes part in matching. Ordinate dimensions have no dimension
//! line and only one extension line; the properties describing those are
//! left out for them.

use super::common::{line_type_choices, line_width_choices};
use crate::entities::{DimensionEntity, EntityKind, TypedEntity};
use crate::matching::choice::{Choice, ChoiceCatalog};
use crate::matching::descriptor::TypedEntityMatchDescriptor;
use crate::matching::property::PropertyInfo;
use crate::matching::type_descriptor::{COLOR, DIM_STYLE, LINE_TYPE, LINE_WIDTH};
use crate::tables::{DimStyle, ToleranceDisplay, ZeroSuppression};

const LINEAR_UNITS: [(i32, &str); 6] = [
    (1, "Scientific"),
    (2, "Decimal"),
    (3, "Engineering"),
    (4, "Architectural"),
    (5, "Fractional"),
    (6, "Windows Desktop"),
];

const PRECISION: [(i32, &str); 9] = [
    (0, "0"),
    (1, "0.0"),
    (2, "0.00"),
    (3, "0.000"),
    (4, "0.0000"),
    (5, "0.00000"),
    (6, "0.000000"),
    (7, "0.0000000"),
    (8, "0.00000000"),
];

const TEXT_HORIZONTAL: [(i32, &str); 5] = [
    (0, "Centered"),
    (1, "First ext line"),
    (2, "Second ext line"),
    (3, "Over first ext line"),
    (4, "Over second ext line"),
];

const TEXT_VERTICAL: [(i32, &str); 5] = [
    (0, "Centered"),
    (1, "Above"),
    (2, "Outside"),
    (3, "JIS"),
    (4, "Below"),
];

const TEXT_DIRECTION: [(i32, &str); 2] = [(0, "Left-to-right"), (1, "Right-to-left")];

const FIT: [(i32, &str); 4] = [(0, "Text and arrows"), (1, "Arrows"), (2, "Text"), (3, "Best fit")];

const TEXT_INSIDE: [(i32, &str); 2] = [(0, "Place between if has room"), (1, "Always inside")];

const TEXT_MOVEMENT: [(i32, &str); 3] = [
    (0, "Keep dim line with text"),
    (1, "Move text, add leader"),
    (2, "Move text, no leader"),
];

const DECIMAL_SEPARATOR: [(i32, &str); 2] = [(46, "."), (44, ",")];

const TOLERANCE_VERTICAL: [(i32, &str); 3] = [(0, "Bottom"), (1, "Middle"), (2, "Top")];

fn dim_style_choices(catalog: &dyn ChoiceCatalog) -> Vec<Choice> {
    catalog
        .dim_styles()
        .into_iter()
        .map(|style| Choice::new(style.name.clone(), style))
        .collect()
}

/// Read a value of the effective style
fn style<E, V>(read: fn(&DimStyle) -> V) -> impl Fn(&E) -> V + Send + Sync + 'static
where
    E: DimensionEntity + 'static,
    V: 'static,
{
    move |e: &E| read(e.base().effective_style())
}

fn flag(value: bool) -> i32 {
    i32::from(value)
}

/// Add style, text and style-derived properties of a dimension kind
pub fn add_dimension_properties<E>(entity: &mut TypedEntityMatchDescriptor<E>)
where
    E: TypedEntity + DimensionEntity,
{
    let ordinate = E::KIND == EntityKind::DimOrdinate;

    entity
        .add_dynamic_choice(
            PropertyInfo::new("dimStyle", "Style", "Style of dimension"),
            &DIM_STYLE,
            dim_style_choices,
            |e: &E| e.base().style.clone(),
        )
        .add_boolean(
            PropertyInfo::new(
                "hasStyleOverride",
                "Has style override",
                "Whether dimension has dimension style override or not",
            ),
            |e: &E| e.base().has_style_override(),
        );

    add_lines_and_arrows(entity, ordinate);
    add_text(entity, ordinate);
    add_fit(entity, ordinate);
    add_primary_units(entity);
    add_alternate_units(entity);
    add_tolerances(entity);

    entity.add_length(
        PropertyInfo::new("measurement", "Measurement", "Measured value shown by the dimension"),
        |e: &E| e.scaled_measurement(),
    );
}

fn add_lines_and_arrows<E>(entity: &mut TypedEntityMatchDescriptor<E>, ordinate: bool)
where
    E: TypedEntity + DimensionEntity,
{
    if ordinate {
        entity
            .add_choice(
                PropertyInfo::new(
                    "dimExtLineWeight",
                    "Ext line lineweight",
                    "Lineweight of extension lines (DIMLWE)",
                ),
                &LINE_WIDTH,
                line_width_choices(true),
                style(|ds| ds.dimlwe),
            )
            .add_dynamic_choice(
                PropertyInfo::new("dimExtLineType", "Ext line linetype", "Linetype of the extension line (DIMLTEX1)"),
                &LINE_TYPE,
                |catalog: &dyn ChoiceCatalog| line_type_choices(catalog, true),
                style(|ds| ds.dimltex1.clone()),
            );
    } else {
        entity
            .add_boolean(
                PropertyInfo::new("dimFlipArrow1", "Flip Arrow 1", "Whether first arrow of the dimension is flipped"),
                |e: &E| e.base().flip_arrow1,
            )
            .add_boolean(
                PropertyInfo::new("dimFlipArrow2", "Flip Arrow 2", "Whether second arrow of the dimension is flipped"),
                |e: &E| e.base().flip_arrow2,
            )
            .add_length(
                PropertyInfo::new("dimArrowSize", "Arrow size", "Size of the dimension arrowhead (DIMASZ)"),
                style(|ds| ds.dimasz),
            )
            .add_choice(
                PropertyInfo::new("dimLineWeight", "Dim line lineweight", "Lineweight of dimension lines (DIMLWD)"),
                &LINE_WIDTH,
                line_width_choices(true),
                style(|ds| ds.dimlwd),
            )
            .add_choice(
                PropertyInfo::new(
                    "dimExtLineWeight",
                    "Ext line lineweight",
                    "Lineweight of extension lines (DIMLWE)",
                ),
                &LINE_WIDTH,
                line_width_choices(true),
                style(|ds| ds.dimlwe),
            )
            .add_boolean(
                PropertyInfo::new("dimShowDim1", "Dim line 1", "First dimension line is shown (DIMSD1)"),
                style(|ds| !ds.dimsd1),
            )
            .add_boolean(
                PropertyInfo::new("dimShowDim2", "Dim line 2", "Second dimension line is shown (DIMSD2)"),
                style(|ds| !ds.dimsd2),
            )
            .add(
                PropertyInfo::new("dimLineColor", "Dim line color", "Color of the dimension line (DIMCLRD)"),
                &COLOR,
                style(|ds| ds.dimclrd),
            )
            .add_dynamic_choice(
                PropertyInfo::new(
                    "dimLineLineType",
                    "Dim line linetype",
                    "Linetype of the dimension line (DIMLTYPE)",
                ),
                &LINE_TYPE,
                |catalog: &dyn ChoiceCatalog| line_type_choices(catalog, true),
                style(|ds| ds.dimltype.clone()),
            )
            .add_length(
                PropertyInfo::new(
                    "dimLineExt",
                    "Dim line ext",
                    "Extension of dimension lines beyond the extension lines (DIMDLE)",
                ),
                style(|ds| ds.dimdle),
            )
            .add_dynamic_choice(
                PropertyInfo::new(
                    "dimExt1LineType",
                    "Ext line 1 linetype",
                    "Linetype of the first extension line (DIMLTEX1)",
                ),
                &LINE_TYPE,
                |catalog: &dyn ChoiceCatalog| line_type_choices(catalog, true),
                style(|ds| ds.dimltex1.clone()),
            )
            .add_dynamic_choice(
                PropertyInfo::new(
                    "dimExt2LineType",
                    "Ext line 2 linetype",
                    "Linetype of the second extension line (DIMLTEX2)",
                ),
                &LINE_TYPE,
                |catalog: &dyn ChoiceCatalog| line_type_choices(catalog, true),
                style(|ds| ds.dimltex2.clone()),
            )
            .add_boolean(
                PropertyInfo::new("dimExt1Show", "Ext line 1", "First extension line is shown (DIMSE1)"),
                style(|ds| !ds.dimse1),
            )
            .add_boolean(
                PropertyInfo::new("dimExt2Show", "Ext line 2", "Second extension line is shown (DIMSE2)"),
                style(|ds| !ds.dimse2),
            );
    }

    entity
        .add_boolean(
            PropertyInfo::new("dimExtFixed", "Ext line fixed", "Extension lines have fixed length (DIMFXLON)"),
            style(|ds| ds.dimfxlon),
        )
        .add_length(
            PropertyInfo::new("dimExtFixedLen", "Ext line fixed length", "Fixed extension line length (DIMFXL)"),
            style(|ds| ds.dimfxl),
        )
        .add(
            PropertyInfo::new("dimExtLineColor", "Ext line color", "Color of the extension line (DIMCLRE)"),
            &COLOR,
            style(|ds| ds.dimclre),
        );

    if !ordinate {
        entity.add_length(
            PropertyInfo::new(
                "dimExtExtent",
                "Ext line ext",
                "Extension of extension lines beyond the dimension line (DIMEXE)",
            ),
            style(|ds| ds.dimexe),
        );
    }

    entity.add_length(
        PropertyInfo::new(
            "dimExtOffset",
            "Ext line offset",
            "Offset of extension lines from the origin points (DIMEXO)",
        ),
        style(|ds| ds.dimexo),
    );
}

fn add_text<E>(entity: &mut TypedEntityMatchDescriptor<E>, ordinate: bool)
where
    E: TypedEntity + DimensionEntity,
{
    entity
        .add(
            PropertyInfo::new("dimTextColor", "Text color", "Color of the dimension text (DIMCLRT)"),
            &COLOR,
            style(|ds| ds.dimclrt),
        )
        .add_length(
            PropertyInfo::new("dimTextHeight", "Text height", "Text height of dimension (DIMTXT)"),
            style(|ds| ds.dimtxt),
        )
        .add_length(
            PropertyInfo::new(
                "dimTextOffset",
                "Text offset",
                "Distance around dimension text when the dimension line breaks for it (DIMGAP)",
            ),
            style(|ds| ds.dimgap.abs()),
        );

    if !ordinate {
        entity
            .add_boolean(
                PropertyInfo::new(
                    "dimTextOrientationOutside",
                    "Text outside align",
                    "Text outside of extension lines is horizontal (DIMTOH)",
                ),
                style(|ds| ds.dimtoh),
            )
            .add_int_choice(
                PropertyInfo::new("dimTextHor", "Text pos hor", "Horizontal dimension text position (DIMJUST)"),
                TEXT_HORIZONTAL,
                style(|ds| i32::from(ds.dimjust)),
            );
    }

    entity
        .add_int_choice(
            PropertyInfo::new("dimTextVert", "Text pos vert", "Vertical dimension text position (DIMTAD)"),
            TEXT_VERTICAL,
            style(|ds| i32::from(ds.dimtad)),
        )
        .add_string_list(
            PropertyInfo::new("dimTxtStyle", "Text style", "Style of text for dimension (DIMTXSTY)"),
            |catalog: &dyn ChoiceCatalog| catalog.text_styles(),
            style(|ds| ds.dimtxsty.clone()),
        );

    if !ordinate {
        entity.add_boolean(
            PropertyInfo::new(
                "dimTextOrientationInside",
                "Text inside align",
                "Text inside of extension lines is horizontal (DIMTIH)",
            ),
            style(|ds| ds.dimtih),
        );
    }

    entity
        .add_angle(
            PropertyInfo::new("textAngle", "Text angle", "Text rotation angle"),
            |e: &E| e.base().text_rotation,
        )
        .add_int_choice(
            PropertyInfo::new("dimTextDir", "Text view direction", "Reading direction of the text (DIMTXTDIRECTION)"),
            TEXT_DIRECTION,
            style(|ds| flag(ds.dimtxtdirection)),
        )
        .add_string(
            PropertyInfo::new(
                "dimTextOverride",
                "Text override",
                "Text string of dimension, overriding the measurement",
            ),
            |e: &E| e.base().text.clone(),
        );
}

fn add_fit<E>(entity: &mut TypedEntityMatchDescriptor<E>, ordinate: bool)
where
    E: TypedEntity + DimensionEntity,
{
    if !ordinate {
        entity
            .add_boolean(
                PropertyInfo::new(
                    "dimLinOutside",
                    "Dim line forced",
                    "Dimension line is drawn between extension lines even when text is outside (DIMTOFL)",
                ),
                style(|ds| ds.dimtofl),
            )
            .add_boolean(
                PropertyInfo::new(
                    "dimLineInside",
                    "Dim line inside",
                    "Arrows outside extension lines are drawn (DIMSOXD)",
                ),
                style(|ds| !ds.dimsoxd),
            );
    }

    entity.add_double(
        PropertyInfo::new("dimScale", "Dim scale overall", "Overall scale factor of sizes and distances (DIMSCALE)"),
        style(|ds| ds.dimscale),
    );

    if !ordinate {
        entity
            .add_int_choice(
                PropertyInfo::new(
                    "fit",
                    "Fit",
                    "Elements moved to fit text and arrowheads between extension lines (DIMATFIT)",
                ),
                FIT,
                style(|ds| i32::from(ds.dimatfit)),
            )
            .add_int_choice(
                PropertyInfo::new("textInside", "Text inside", "Text is placed between extension lines (DIMTIX)"),
                TEXT_INSIDE,
                style(|ds| flag(ds.dimtix)),
            );
    }

    entity.add_int_choice(
        PropertyInfo::new("textMovement", "Text movement", "Position of the text when it is moved (DIMTMOVE)"),
        TEXT_MOVEMENT,
        style(|ds| i32::from(ds.dimtmove)),
    );
}

fn add_primary_units<E>(entity: &mut TypedEntityMatchDescriptor<E>)
where
    E: TypedEntity + DimensionEntity,
{
    entity
        .add_int_choice(
            PropertyInfo::new("decimalSeparator", "Decimal separator", "Decimal separator of metric dimensions (DIMDSEP)"),
            DECIMAL_SEPARATOR,
            style(|ds| i32::from(ds.dimdsep)),
        )
        .add_string(
            PropertyInfo::new("dimPrimaryPrefix", "Dim prefix", "Text prefix of the dimension (DIMPOST)"),
            style(|ds| ds.primary_affixes().0.to_string()),
        )
        .add_string(
            PropertyInfo::new("dimPrimarySuffix", "Dim suffix", "Text suffix of the dimension (DIMPOST)"),
            style(|ds| ds.primary_affixes().1.to_string()),
        )
        .add_double(
            PropertyInfo::new("dimPrimaryRoundoff", "Dim roundoff", "Distance rounding value (DIMRND)"),
            style(|ds| ds.dimrnd),
        )
        .add_double(
            PropertyInfo::new(
                "dimPrimaryScalelinear",
                "Dim scale linear",
                "Scale factor of linear measurements (DIMLFAC)",
            ),
            style(|ds| ds.dimlfac),
        )
        .add_int_choice(
            PropertyInfo::new("dimPrimaryLinearUnits", "Dim units", "Units format of linear dimensions (DIMLUNIT)"),
            LINEAR_UNITS,
            style(|ds| i32::from(ds.dimlunit)),
        );
    add_zero_suppression(entity, "dimPrimary", "", "DIMZIN", |ds| ds.dimzin);
    entity.add_int_choice(
        PropertyInfo::new("dimPrimaryDecimalPlaces", "Precision", "Decimal places of primary units (DIMDEC)"),
        PRECISION,
        style(|ds| i32::from(ds.dimdec)),
    );
}

fn add_alternate_units<E>(entity: &mut TypedEntityMatchDescriptor<E>)
where
    E: TypedEntity + DimensionEntity,
{
    entity
        .add_boolean(
            PropertyInfo::new("dimAltEnabled", "Alt enabled", "Alternate units are shown (DIMALT)"),
            style(|ds| ds.dimalt),
        )
        .add_int_choice(
            PropertyInfo::new("dimAltLinearUnits", "Alt format", "Units format of alternate units (DIMALTU)"),
            LINEAR_UNITS,
            style(|ds| i32::from(ds.dimaltu)),
        )
        .add_int_choice(
            PropertyInfo::new("dimAltDecimalPlaces", "Alt precision", "Decimal places of alternate units (DIMALTD)"),
            PRECISION,
            style(|ds| i32::from(ds.dimaltd)),
        )
        .add_double(
            PropertyInfo::new("dimAltRoundoff", "Alt round", "Rounding value of alternate units (DIMALTRND)"),
            style(|ds| ds.dimaltrnd),
        )
        .add_double(
            PropertyInfo::new("dimAltScaleLinear", "Alt scale factor", "Scale factor of alternate units (DIMALTF)"),
            style(|ds| ds.dimaltf),
        );
    add_zero_suppression(entity, "dimAlt", "Alt ", "DIMALTZ", |ds| ds.dimaltz);
    entity
        .add_string(
            PropertyInfo::new("dimAltPrefix", "Alt prefix", "Text prefix of alternate units (DIMAPOST)"),
            style(|ds| ds.alternate_affixes().0.to_string()),
        )
        .add_string(
            PropertyInfo::new("dimAltSuffix", "Alt suffix", "Text suffix of alternate units (DIMAPOST)"),
            style(|ds| ds.alternate_affixes().1.to_string()),
        );
}

fn add_tolerances<E>(entity: &mut TypedEntityMatchDescriptor<E>)
where
    E: TypedEntity + DimensionEntity,
{
    entity
        .add_int_choice(
            PropertyInfo::new(
                "dimTolDisplay",
                "Tolerance display",
                "Display mode of tolerances in dimension text (DIMTOL, DIMLIM)",
            ),
            ToleranceDisplay::ALL.map(|(mode, label)| (mode as i32, label)),
            style(|ds| ds.tolerance_display() as i32),
        )
        .add_double(
            PropertyInfo::new("dimTolLimitLower", "Tolerance limit lower", "Lower tolerance limit (DIMTM)"),
            style(|ds| ds.dimtm),
        )
        .add_double(
            PropertyInfo::new("dimTolLimitUpper", "Tolerance limit upper", "Upper tolerance limit (DIMTP)"),
            style(|ds| ds.dimtp),
        )
        .add_int_choice(
            PropertyInfo::new(
                "dimTolPosVert",
                "Tolerance pos vert",
                "Vertical justification of tolerance values (DIMTOLJ)",
            ),
            TOLERANCE_VERTICAL,
            style(|ds| i32::from(ds.dimtolj)),
        )
        .add_int_choice(
            PropertyInfo::new("dimTolPrecision", "Tolerance precision", "Decimal places of tolerance values (DIMTDEC)"),
            PRECISION,
            style(|ds| i32::from(ds.dimtdec)),
        );
    add_zero_suppression(entity, "dimTol", "Tolerance ", "DIMTZIN", |ds| ds.dimtzin);
    entity.add_double(
        PropertyInfo::new(
            "dimTolTextHeight",
            "Tolerance text height",
            "Height of tolerance text relative to dimension text (DIMTFAC)",
        ),
        style(|ds| ds.dimtfac),
    );
}

/// Leading, trailing, zero feet and zero inches flags of one suppression variable
fn add_zero_suppression<E>(
    entity: &mut TypedEntityMatchDescriptor<E>,
    prefix: &str,
    display: &str,
    variable: &str,
    read: fn(&DimStyle) -> ZeroSuppression,
) where
    E: TypedEntity + DimensionEntity,
{
    let flags: [(&str, &str, fn(ZeroSuppression) -> bool); 4] = [
        ("Leading", "leading zeros", ZeroSuppression::suppresses_leading),
        ("Trailing", "trailing zeros", ZeroSuppression::suppresses_trailing),
        ("ZeroFeet", "zero feet", ZeroSuppression::suppresses_zero_feet),
        ("ZeroInches", "zero inches", ZeroSuppression::suppresses_zero_inches),
    ];
    for (suffix, what, test) in flags {
        entity.add_boolean(
            PropertyInfo::new(
                format!("{}Suppress{}", prefix, suffix),
                format!("{}Suppress {}", display, what),
                format!("Suppression of {} ({})", what, variable),
            ),
            move |e: &E| test(read(e.base().effective_style())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{DimensionLinear, DimensionOrdinate};
    use crate::types::Vector3;

    fn names<E: TypedEntity + DimensionEntity>() -> Vec<String> {
        let mut builder = TypedEntityMatchDescriptor::<E>::new();
        add_dimension_properties(&mut builder);
        builder.finish().properties().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn test_ordinate_leaves_out_dimension_line() {
        let linear = names::<DimensionLinear>();
        let ordinate = names::<DimensionOrdinate>();
        for name in ["dimFlipArrow1", "dimLineColor", "dimExtExtent", "dimTextHor", "fit"] {
            assert!(linear.iter().any(|n| n == name), "{}", name);
            assert!(!ordinate.iter().any(|n| n == name), "{}", name);
        }
        for name in ["dimExtLineWeight", "dimExtLineType", "dimExtOffset", "dimTxtStyle"] {
            assert!(ordinate.iter().any(|n| n == name), "{}", name);
        }
    }

    #[test]
    fn test_zero_suppression_names() {
        let linear = names::<DimensionLinear>();
        for name in [
            "dimPrimarySuppressLeading",
            "dimPrimarySuppressZeroInches",
            "dimAltSuppressTrailing",
            "dimTolSuppressZeroFeet",
        ] {
            assert!(linear.iter().any(|n| n == name), "{}", name);
        }
    }

    #[test]
    fn test_style_reader_uses_override() {
        let mut dim = DimensionLinear::new(Vector3::ZERO, Vector3::UNIT_X, DimStyle::standard().into_ref());
        let read = style::<DimensionLinear, f64>(|ds| ds.dimasz);
        assert_eq!(read(&dim), 0.18);

        let mut large = DimStyle::standard();
        large.dimasz = 2.5;
        dim.base.style_override = Some(large.into_ref());
        assert_eq!(read(&dim), 2.5);
    }
}
