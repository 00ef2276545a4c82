//! Per-kind comparison tables
//!
//! Each value kind has one immutable [`TypeDescriptor`] declaring the
//! operations it supports and the comparator for each. Comparators take
//! the stored value, the target and the tolerance; discrete kinds ignore
//! the tolerance.

use std::sync::Arc;

use super::kind::PropertyValueKind;
use super::operation::{MatchOperation, MatchOperations};
use crate::tables::{DimStyleRef, LayerRef};
use crate::types::angle::{correct_angle, equal, is_same_inclination};
use crate::types::{Color, LineTypeRef, LineWeight};

/// Compares a stored value `S` with a target `T` under a tolerance
pub type Comparator<S, T = S> = fn(&S, &T, f64) -> bool;

/// Operations and comparators for one value kind
///
/// `S` is the stored type read from the entity and `T` the target type;
/// they differ only for lists, where a sequence of coordinates is
/// compared against one coordinate.
pub struct TypeDescriptor<S: ?Sized + 'static, T: 'static = S> {
    /// Kind described
    pub kind: PropertyValueKind,
    /// Operations the kind supports
    pub supported: MatchOperations,
    /// Equality
    pub equals: Comparator<S, T>,
    /// Inequality
    pub not_equals: Comparator<S, T>,
    /// Ordering, for ordered kinds only
    pub greater: Option<Comparator<S, T>>,
    /// Ordering, for ordered kinds only
    pub less: Option<Comparator<S, T>>,
    /// Always true
    pub any: Comparator<S, T>,
}

impl<S: ?Sized + 'static, T: 'static> TypeDescriptor<S, T> {
    /// Check if the kind supports `op`
    pub fn is_supported_operation(&self, op: MatchOperation) -> bool {
        self.supported.supports(op)
    }

    /// Comparator for `op`, or `None` if the kind does not support it
    pub fn comparator(&self, op: MatchOperation) -> Option<Comparator<S, T>> {
        if !self.is_supported_operation(op) {
            return None;
        }
        let comparator = match op {
            MatchOperation::Equals => Some(self.equals),
            MatchOperation::NotEquals => Some(self.not_equals),
            MatchOperation::Greater => self.greater,
            MatchOperation::Less => self.less,
            MatchOperation::SelectAll => Some(self.any),
            MatchOperation::PatternMatch => None,
        };
        debug_assert!(
            comparator.is_some(),
            "{} declares {} without a comparator",
            self.kind,
            op
        );
        comparator
    }
}

fn select_all<S: ?Sized, T>(_: &S, _: &T, _: f64) -> bool {
    true
}

fn exact_eq<V: PartialEq>(value: &V, target: &V, _: f64) -> bool {
    value == target
}

fn exact_ne<V: PartialEq>(value: &V, target: &V, _: f64) -> bool {
    value != target
}

fn ordered_gt<V: PartialOrd>(value: &V, target: &V, _: f64) -> bool {
    value > target
}

fn ordered_lt<V: PartialOrd>(value: &V, target: &V, _: f64) -> bool {
    value < target
}

fn near_eq(value: &f64, target: &f64, tolerance: f64) -> bool {
    equal(*value, *target, tolerance)
}

fn near_ne(value: &f64, target: &f64, tolerance: f64) -> bool {
    !equal(*value, *target, tolerance)
}

// Both operands are normalized into [0, 2π) and then compared as plain
// numbers, so directions just either side of 0 do not match.
fn angle_eq(value: &f64, target: &f64, tolerance: f64) -> bool {
    equal(correct_angle(*value), correct_angle(*target), tolerance)
}

fn angle_ne(value: &f64, target: &f64, tolerance: f64) -> bool {
    !angle_eq(value, target, tolerance)
}

// Ordering compares both operands in [0, 2π).
fn angle_gt(value: &f64, target: &f64, _: f64) -> bool {
    correct_angle(*value) > correct_angle(*target)
}

fn angle_lt(value: &f64, target: &f64, _: f64) -> bool {
    correct_angle(*value) < correct_angle(*target)
}

fn incline_eq(value: &f64, target: &f64, tolerance: f64) -> bool {
    is_same_inclination(*value, *target, tolerance)
}

fn incline_ne(value: &f64, target: &f64, tolerance: f64) -> bool {
    !is_same_inclination(*value, *target, tolerance)
}

fn same_ref<V>(value: &Arc<V>, target: &Arc<V>, _: f64) -> bool {
    Arc::ptr_eq(value, target)
}

fn other_ref<V>(value: &Arc<V>, target: &Arc<V>, _: f64) -> bool {
    !Arc::ptr_eq(value, target)
}

fn text_eq(value: &String, target: &String, _: f64) -> bool {
    value.to_lowercase() == target.to_lowercase()
}

fn text_ne(value: &String, target: &String, _: f64) -> bool {
    !text_eq(value, target, 0.0)
}

fn color_gt(value: &Color, target: &Color, _: f64) -> bool {
    value.to_int() > target.to_int()
}

fn color_lt(value: &Color, target: &Color, _: f64) -> bool {
    value.to_int() < target.to_int()
}

// Lists: equals, greater and less hold if any element does; not-equals
// holds only if no element equals the target.
fn contains_eq(values: &[f64], target: &f64, tolerance: f64) -> bool {
    values.iter().any(|v| equal(*v, *target, tolerance))
}

fn contains_ne(values: &[f64], target: &f64, tolerance: f64) -> bool {
    !values.iter().any(|v| equal(*v, *target, tolerance))
}

fn contains_gt(values: &[f64], target: &f64, _: f64) -> bool {
    values.iter().any(|v| v > target)
}

fn contains_lt(values: &[f64], target: &f64, _: f64) -> bool {
    values.iter().any(|v| v < target)
}

const fn numeric(kind: PropertyValueKind) -> TypeDescriptor<f64> {
    TypeDescriptor {
        kind,
        supported: MatchOperations::ALL_EXCEPT_PATTERN,
        equals: near_eq,
        not_equals: near_ne,
        greater: Some(ordered_gt::<f64>),
        less: Some(ordered_lt::<f64>),
        any: select_all::<f64, f64>,
    }
}

const fn coordinate_list(kind: PropertyValueKind) -> TypeDescriptor<[f64], f64> {
    TypeDescriptor {
        kind,
        supported: MatchOperations::ALL_EXCEPT_PATTERN,
        equals: contains_eq,
        not_equals: contains_ne,
        greater: Some(contains_gt),
        less: Some(contains_lt),
        any: select_all::<[f64], f64>,
    }
}

const fn color(kind: PropertyValueKind) -> TypeDescriptor<Color> {
    TypeDescriptor {
        kind,
        supported: MatchOperations::ALL_EXCEPT_PATTERN,
        equals: exact_eq::<Color>,
        not_equals: exact_ne::<Color>,
        greater: Some(color_gt),
        less: Some(color_lt),
        any: select_all::<Color, Color>,
    }
}

const fn line_width(kind: PropertyValueKind) -> TypeDescriptor<LineWeight> {
    TypeDescriptor {
        kind,
        supported: MatchOperations::BASIC,
        equals: exact_eq::<LineWeight>,
        not_equals: exact_ne::<LineWeight>,
        greater: None,
        less: None,
        any: select_all::<LineWeight, LineWeight>,
    }
}

const fn line_type(kind: PropertyValueKind) -> TypeDescriptor<LineTypeRef> {
    TypeDescriptor {
        kind,
        supported: MatchOperations::BASIC,
        equals: exact_eq::<LineTypeRef>,
        not_equals: exact_ne::<LineTypeRef>,
        greater: None,
        less: None,
        any: select_all::<LineTypeRef, LineTypeRef>,
    }
}

const fn text(kind: PropertyValueKind) -> TypeDescriptor<String> {
    TypeDescriptor {
        kind,
        supported: MatchOperations::BASIC,
        equals: text_eq,
        not_equals: text_ne,
        greater: None,
        less: None,
        any: select_all::<String, String>,
    }
}

pub static INT: TypeDescriptor<i32> = TypeDescriptor {
    kind: PropertyValueKind::Int,
    supported: MatchOperations::ALL_EXCEPT_PATTERN,
    equals: exact_eq::<i32>,
    not_equals: exact_ne::<i32>,
    greater: Some(ordered_gt::<i32>),
    less: Some(ordered_lt::<i32>),
    any: select_all::<i32, i32>,
};

pub static INT_CHOICE: TypeDescriptor<i32> = TypeDescriptor {
    kind: PropertyValueKind::IntChoice,
    supported: MatchOperations::BASIC,
    equals: exact_eq::<i32>,
    not_equals: exact_ne::<i32>,
    greater: None,
    less: None,
    any: select_all::<i32, i32>,
};

pub static BOOL: TypeDescriptor<bool> = TypeDescriptor {
    kind: PropertyValueKind::Bool,
    supported: MatchOperations::BASIC,
    equals: exact_eq::<bool>,
    not_equals: exact_ne::<bool>,
    greater: None,
    less: None,
    any: select_all::<bool, bool>,
};

pub static COORD_X: TypeDescriptor<f64> = numeric(PropertyValueKind::CoordX);
pub static COORD_Y: TypeDescriptor<f64> = numeric(PropertyValueKind::CoordY);
pub static DOUBLE: TypeDescriptor<f64> = numeric(PropertyValueKind::Double);
pub static LENGTH: TypeDescriptor<f64> = numeric(PropertyValueKind::Length);

pub static ANGLE: TypeDescriptor<f64> = TypeDescriptor {
    kind: PropertyValueKind::Angle,
    supported: MatchOperations::ALL_EXCEPT_PATTERN,
    equals: angle_eq,
    not_equals: angle_ne,
    greater: Some(angle_gt),
    less: Some(angle_lt),
    any: select_all::<f64, f64>,
};

pub static INCLINATION: TypeDescriptor<f64> = TypeDescriptor {
    kind: PropertyValueKind::Inclination,
    supported: MatchOperations::ALL_EXCEPT_PATTERN,
    equals: incline_eq,
    not_equals: incline_ne,
    greater: Some(angle_gt),
    less: Some(angle_lt),
    any: select_all::<f64, f64>,
};

pub static COORD_X_CONTAINS: TypeDescriptor<[f64], f64> =
    coordinate_list(PropertyValueKind::CoordX);
pub static COORD_Y_CONTAINS: TypeDescriptor<[f64], f64> =
    coordinate_list(PropertyValueKind::CoordY);

pub static COLOR: TypeDescriptor<Color> = color(PropertyValueKind::Color);
pub static COLOR_RESOLVED: TypeDescriptor<Color> = color(PropertyValueKind::ColorResolved);

pub static LINE_WIDTH: TypeDescriptor<LineWeight> = line_width(PropertyValueKind::LineWidth);
pub static LINE_WIDTH_RESOLVED: TypeDescriptor<LineWeight> =
    line_width(PropertyValueKind::LineWidthResolved);

pub static LINE_TYPE: TypeDescriptor<LineTypeRef> = line_type(PropertyValueKind::LineType);
pub static LINE_TYPE_RESOLVED: TypeDescriptor<LineTypeRef> =
    line_type(PropertyValueKind::LineTypeResolved);

pub static LAYER: TypeDescriptor<LayerRef> = TypeDescriptor {
    kind: PropertyValueKind::Layer,
    supported: MatchOperations::BASIC,
    equals: same_ref::<crate::tables::Layer>,
    not_equals: other_ref::<crate::tables::Layer>,
    greater: None,
    less: None,
    any: select_all::<LayerRef, LayerRef>,
};

pub static DIM_STYLE: TypeDescriptor<DimStyleRef> = TypeDescriptor {
    kind: PropertyValueKind::DimStyle,
    supported: MatchOperations::BASIC,
    equals: same_ref::<crate::tables::DimStyle>,
    not_equals: other_ref::<crate::tables::DimStyle>,
    greater: None,
    less: None,
    any: select_all::<DimStyleRef, DimStyleRef>,
};

pub static STRING: TypeDescriptor<String> = text(PropertyValueKind::String);
pub static STRING_CHOICE: TypeDescriptor<String> = text(PropertyValueKind::StringChoice);
