//! Property values and their conversion to concrete types

use std::fmt;
use std::sync::Arc;

use crate::tables::{DimStyleRef, LayerRef};
use crate::types::{Color, LineTypeRef, LineWeight};

/// A target value of any kind, as handed over by the caller
///
/// The variant is checked once, when a matcher is built; the matcher then
/// holds the concrete value.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    Int(i32),
    Bool(bool),
    Double(f64),
    String(String),
    Color(Color),
    LineWidth(LineWeight),
    LineType(LineTypeRef),
    Layer(LayerRef),
    DimStyle(DimStyleRef),
}

impl PropertyValue {
    /// Name of the variant, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Int(_) => "int",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Double(_) => "double",
            PropertyValue::String(_) => "string",
            PropertyValue::Color(_) => "color",
            PropertyValue::LineWidth(_) => "line width",
            PropertyValue::LineType(_) => "line type",
            PropertyValue::Layer(_) => "layer",
            PropertyValue::DimStyle(_) => "dimension style",
        }
    }
}

/// Layers and dimension styles compare by identity, everything else by value
impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        use PropertyValue::*;
        match (self, other) {
            (Int(a), Int(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Double(a), Double(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Color(a), Color(b)) => a == b,
            (LineWidth(a), LineWidth(b)) => a == b,
            (LineType(a), LineType(b)) => a == b,
            (Layer(a), Layer(b)) => Arc::ptr_eq(a, b),
            (DimStyle(a), DimStyle(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Int(v) => write!(f, "{}", v),
            PropertyValue::Bool(v) => write!(f, "{}", v),
            PropertyValue::Double(v) => write!(f, "{}", v),
            PropertyValue::String(v) => f.write_str(v),
            PropertyValue::Color(v) => write!(f, "{}", v),
            PropertyValue::LineWidth(v) => write!(f, "{}", v),
            PropertyValue::LineType(v) => write!(f, "{}", v),
            PropertyValue::Layer(v) => f.write_str(&v.name),
            PropertyValue::DimStyle(v) => f.write_str(&v.name),
        }
    }
}

/// Concrete value types a property can compare
pub trait MatchValue: Sized + Send + Sync + 'static {
    /// Extract the value if `value` holds this type
    fn from_property_value(value: &PropertyValue) -> Option<Self>;

    /// Wrap the value
    fn into_property_value(self) -> PropertyValue;
}

macro_rules! match_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl MatchValue for $ty {
                fn from_property_value(value: &PropertyValue) -> Option<Self> {
                    match value {
                        PropertyValue::$variant(v) => Some(v.clone()),
                        _ => None,
                    }
                }

                fn into_property_value(self) -> PropertyValue {
                    PropertyValue::$variant(self)
                }
            }

            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    PropertyValue::$variant(value)
                }
            }
        )*
    };
}

match_value!(
    i32 => Int,
    bool => Bool,
    String => String,
    Color => Color,
    LineWeight => LineWidth,
    LineTypeRef => LineType,
    LayerRef => Layer,
    DimStyleRef => DimStyle,
);

/// Integers are accepted where a double is expected
impl MatchValue for f64 {
    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Double(v) => Some(*v),
            PropertyValue::Int(v) => Some(f64::from(*v)),
            _ => None,
        }
    }

    fn into_property_value(self) -> PropertyValue {
        PropertyValue::Double(self)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Double(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Layer;

    #[test]
    fn test_round_trip_through_property_value() {
        let v: PropertyValue = Color::RED.into();
        assert_eq!(Color::from_property_value(&v), Some(Color::RED));
        assert_eq!(i32::from_property_value(&v), None);
    }

    #[test]
    fn test_int_widens_to_double() {
        assert_eq!(f64::from_property_value(&PropertyValue::Int(3)), Some(3.0));
        assert_eq!(i32::from_property_value(&PropertyValue::Double(3.0)), None);
    }

    #[test]
    fn test_layer_values_compare_by_identity() {
        let a = Layer::new("Walls").into_ref();
        let b = Layer::new("Walls").into_ref();
        assert_eq!(PropertyValue::Layer(a.clone()), PropertyValue::Layer(a));
        assert_ne!(
            PropertyValue::Layer(b),
            PropertyValue::Layer(Layer::new("Walls").into_ref())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PropertyValue::from("abc").to_string(), "abc");
        assert_eq!(PropertyValue::Bool(true).type_name(), "bool");
    }
}
