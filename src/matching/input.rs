//! Converting typed-in text into target values
//!
//! Numbers accept the usual float syntax (`-1.5`, `2e3`). Angles are read
//! in degrees unless suffixed with `r`/`rad`; `°`, `d` and `deg` mark
//! degrees explicitly. The result is always in radians. Layers and
//! dimension styles are not typed; they are picked from the document's
//! choices.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{
        char, i16 as parse_i16, i32 as parse_i32, multispace0, u16 as parse_u16, u8 as parse_u8,
    },
    combinator::{all_consuming, map, map_res, opt, value, verify},
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated, tuple},
    Finish, IResult,
};

use super::kind::PropertyValueKind;
use super::value::PropertyValue;
use crate::error::{MatchError, Result};
use crate::types::{Color, LineTypeRef, LineWeight};

/// Largest line weight, in hundredths of a millimeter
const MAX_LINE_WEIGHT: i16 = 211;

#[derive(Debug, Clone, Copy)]
enum AngleUnit {
    Degrees,
    Radians,
}

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn number(input: &str) -> IResult<&str, f64> {
    verify(double, |v: &f64| v.is_finite())(input)
}

fn angle_unit(input: &str) -> IResult<&str, AngleUnit> {
    alt((
        value(AngleUnit::Radians, alt((tag_no_case("rad"), tag_no_case("r")))),
        value(
            AngleUnit::Degrees,
            alt((tag("°"), tag_no_case("deg"), tag_no_case("d"))),
        ),
    ))(input)
}

fn angle(input: &str) -> IResult<&str, f64> {
    map(
        pair(number, opt(preceded(multispace0, angle_unit))),
        |(v, unit)| match unit.unwrap_or(AngleUnit::Degrees) {
            AngleUnit::Degrees => v.to_radians(),
            AngleUnit::Radians => v,
        },
    )(input)
}

fn boolean(input: &str) -> IResult<&str, bool> {
    alt((
        value(true, alt((tag_no_case("true"), tag_no_case("yes"), tag("1")))),
        value(false, alt((tag_no_case("false"), tag_no_case("no"), tag("0")))),
    ))(input)
}

fn rgb(input: &str) -> IResult<&str, Color> {
    map(
        preceded(
            tag_no_case("rgb"),
            delimited(
                ws(char('(')),
                tuple((
                    ws(parse_u8),
                    preceded(char(','), ws(parse_u8)),
                    preceded(char(','), ws(parse_u8)),
                )),
                char(')'),
            ),
        ),
        |(r, g, b)| Color::from_rgb(r, g, b),
    )(input)
}

fn color(input: &str) -> IResult<&str, Color> {
    alt((
        value(Color::ByLayer, tag_no_case("bylayer")),
        value(Color::ByBlock, tag_no_case("byblock")),
        rgb,
        map(verify(parse_u16, |i: &u16| *i <= 256), |i| {
            Color::from_index(i as i16)
        }),
    ))(input)
}

fn millimeters_to_weight(mm: f64) -> std::result::Result<LineWeight, &'static str> {
    let hundredths = (mm * 100.0).round();
    if (0.0..=f64::from(MAX_LINE_WEIGHT)).contains(&hundredths) {
        Ok(LineWeight::Value(hundredths as i16))
    } else {
        Err("line weight out of range")
    }
}

fn line_weight(input: &str) -> IResult<&str, LineWeight> {
    alt((
        value(LineWeight::ByLayer, tag_no_case("bylayer")),
        value(LineWeight::ByBlock, tag_no_case("byblock")),
        value(LineWeight::Default, tag_no_case("default")),
        map_res(
            terminated(number, preceded(multispace0, tag_no_case("mm"))),
            millimeters_to_weight,
        ),
        map(
            verify(parse_i16, |v: &i16| (0..=MAX_LINE_WEIGHT).contains(v)),
            LineWeight::Value,
        ),
    ))(input)
}

/// Run `parser` over the whole of `text`, ignoring surrounding whitespace
fn complete<'a, O, F>(kind: PropertyValueKind, text: &'a str, parser: F) -> Result<O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    all_consuming(ws(parser))(text)
        .finish()
        .map(|(_, value)| value)
        .map_err(|_: nom::error::Error<&str>| {
            MatchError::Parse(format!("invalid {} value '{}'", kind, text.trim()))
        })
}

/// Parse `text` as a target value for properties of `kind`
pub fn parse_value(kind: PropertyValueKind, text: &str) -> Result<PropertyValue> {
    use PropertyValueKind as K;
    match kind {
        K::Int | K::IntChoice => complete(kind, text, parse_i32).map(PropertyValue::Int),
        K::Bool => complete(kind, text, boolean).map(PropertyValue::Bool),
        K::CoordX | K::CoordY | K::Double | K::Length => {
            complete(kind, text, number).map(PropertyValue::Double)
        }
        K::Angle | K::Inclination => complete(kind, text, angle).map(PropertyValue::Double),
        K::Color | K::ColorResolved => complete(kind, text, color).map(PropertyValue::Color),
        K::LineWidth | K::LineWidthResolved => {
            complete(kind, text, line_weight).map(PropertyValue::LineWidth)
        }
        K::LineType | K::LineTypeResolved => match text.trim() {
            "" => Err(MatchError::Parse(format!("empty {} value", kind))),
            name => Ok(PropertyValue::LineType(LineTypeRef::from_name(name))),
        },
        K::String | K::StringChoice => Ok(PropertyValue::String(text.to_string())),
        K::Layer | K::DimStyle => Err(MatchError::Parse(format!(
            "{} values are picked from the document, not typed",
            kind
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn double(kind: PropertyValueKind, text: &str) -> f64 {
        match parse_value(kind, text).unwrap() {
            PropertyValue::Double(v) => v,
            other => panic!("expected a double, got {:?}", other),
        }
    }

    #[test]
    fn test_numbers() {
        assert_eq!(double(PropertyValueKind::Length, "-1.5"), -1.5);
        assert_eq!(double(PropertyValueKind::CoordX, " 2e3 "), 2000.0);
        assert!(parse_value(PropertyValueKind::Double, "1.5x").is_err());
        assert!(parse_value(PropertyValueKind::Double, "inf").is_err());
        assert!(parse_value(PropertyValueKind::Double, "").is_err());
    }

    #[test]
    fn test_angles() {
        assert!((double(PropertyValueKind::Angle, "90") - FRAC_PI_2).abs() < 1e-12);
        assert!((double(PropertyValueKind::Angle, "180°") - PI).abs() < 1e-12);
        assert!((double(PropertyValueKind::Angle, "180 deg") - PI).abs() < 1e-12);
        assert!((double(PropertyValueKind::Inclination, "1.5r") - 1.5).abs() < 1e-12);
        assert!((double(PropertyValueKind::Angle, "2 rad") - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_ints_and_bools() {
        assert_eq!(parse_value(PropertyValueKind::Int, "-7").unwrap(), PropertyValue::Int(-7));
        assert!(parse_value(PropertyValueKind::IntChoice, "1.5").is_err());
        assert_eq!(parse_value(PropertyValueKind::Bool, "Yes").unwrap(), PropertyValue::Bool(true));
        assert_eq!(parse_value(PropertyValueKind::Bool, "0").unwrap(), PropertyValue::Bool(false));
        assert!(parse_value(PropertyValueKind::Bool, "maybe").is_err());
    }

    #[test]
    fn test_colors() {
        let parse = |text| parse_value(PropertyValueKind::Color, text).unwrap();
        assert_eq!(parse("ByLayer"), PropertyValue::Color(Color::ByLayer));
        assert_eq!(parse("byblock"), PropertyValue::Color(Color::ByBlock));
        assert_eq!(parse("1"), PropertyValue::Color(Color::RED));
        assert_eq!(parse("rgb(10, 20,30)"), PropertyValue::Color(Color::from_rgb(10, 20, 30)));
        assert!(parse_value(PropertyValueKind::Color, "300").is_err());
        assert!(parse_value(PropertyValueKind::Color, "rgb(1,2)").is_err());
    }

    #[test]
    fn test_line_weights() {
        let parse = |text| parse_value(PropertyValueKind::LineWidth, text).unwrap();
        assert_eq!(parse("default"), PropertyValue::LineWidth(LineWeight::Default));
        assert_eq!(parse("25"), PropertyValue::LineWidth(LineWeight::Value(25)));
        assert_eq!(parse("0.35mm"), PropertyValue::LineWidth(LineWeight::Value(35)));
        assert!(parse_value(PropertyValueKind::LineWidth, "500").is_err());
    }

    #[test]
    fn test_line_types_and_strings() {
        assert_eq!(
            parse_value(PropertyValueKind::LineType, " bylayer ").unwrap(),
            PropertyValue::LineType(LineTypeRef::ByLayer)
        );
        assert_eq!(
            parse_value(PropertyValueKind::LineTypeResolved, "Dashed").unwrap(),
            PropertyValue::LineType(LineTypeRef::named("Dashed"))
        );
        assert_eq!(
            parse_value(PropertyValueKind::String, " keep spaces ").unwrap(),
            PropertyValue::String(" keep spaces ".to_string())
        );
    }

    #[test]
    fn test_references_are_not_parsed() {
        assert!(matches!(
            parse_value(PropertyValueKind::Layer, "0"),
            Err(MatchError::Parse(_))
        ));
        assert!(parse_value(PropertyValueKind::DimStyle, "Standard").is_err());
    }
}
