//! Property match descriptors
//!
//! A property descriptor binds a named property of one entity kind to an
//! accessor and a type descriptor. Four flavors exist:
//!
//! - [`TypedPropertyDescriptor`]: the accessor returns the compared value
//! - [`VectorPropertyDescriptor`]: the accessor returns a point; one
//!   component is compared after mapping into the user frame
//! - [`VectorListPropertyDescriptor`]: the accessor returns a list of
//!   points; any/none semantics over the mapped components
//! - [`DynamicChoicePropertyDescriptor`]: wraps another descriptor and
//!   computes its choices from the current document

use tracing::trace;

use super::choice::{Choice, ChoiceCatalog, ChoiceProvider};
use super::kind::PropertyValueKind;
use super::mapper::{Axis, CoordinateMapper};
use super::matcher::{
    Accessor, EntityMatcher, TypedEntityMatcher, VectorEntityMatcher, VectorListEntityMatcher,
};
use super::operation::{MatchOperation, MatchOperations};
use super::type_descriptor::{Comparator, TypeDescriptor};
use super::value::{MatchValue, PropertyValue};
use crate::entities::TypedEntity;
use crate::error::{MatchError, Result};
use crate::types::Vector3;

/// Name and descriptive text of a property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Name used to look the property up
    pub name: String,
    /// Name shown to the user
    pub display_name: String,
    /// Longer description
    pub description: String,
    /// Angle measured against the entity itself rather than a frame axis
    ///
    /// Sweep spans such as an arc's included angle read the same in every
    /// coordinate frame, so their targets are never rotated.
    pub relative_angle: bool,
}

impl PropertyInfo {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        PropertyInfo {
            name: name.into(),
            display_name: display_name.into(),
            description: description.into(),
            relative_angle: false,
        }
    }

    /// Mark the property as an angle span that does not depend on the frame
    pub fn relative_angle(mut self) -> Self {
        self.relative_angle = true;
        self
    }

    /// Check whether a target for this property of `kind` is a direction in
    /// the user frame
    pub fn is_frame_direction(&self, kind: PropertyValueKind) -> bool {
        matches!(kind, PropertyValueKind::Angle | PropertyValueKind::Inclination)
            && !self.relative_angle
    }
}

/// How a property reaches its compared value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyFlavor {
    Typed,
    Vector,
    VectorList,
    DynamicChoice,
}

/// A filterable property of one entity kind
pub trait PropertyMatchDescriptor: Send + Sync {
    /// Name and descriptive text
    fn info(&self) -> &PropertyInfo;

    /// Value kind compared
    fn kind(&self) -> PropertyValueKind;

    /// Flavor of the descriptor
    fn flavor(&self) -> PropertyFlavor;

    /// Operations the value kind supports
    fn supported_operations(&self) -> MatchOperations;

    /// Property name
    fn name(&self) -> &str {
        &self.info().name
    }

    /// Check if `op` may be requested from [`matcher`](Self::matcher)
    fn is_supported_operation(&self, op: MatchOperation) -> bool {
        self.supported_operations().supports(op)
    }

    /// Check if values are picked from a list of choices
    fn is_choice(&self) -> bool {
        false
    }

    /// Current choices; empty for free-input properties
    fn choice_values(&self, _catalog: &dyn ChoiceCatalog) -> Vec<Choice> {
        Vec::new()
    }

    /// Build a matcher for `op` against `target`
    ///
    /// Vector flavors compare in the frame given by `mapper` and fail
    /// without one. `SelectAll` ignores the target, the tolerance and the
    /// mapper.
    fn matcher<'m>(
        &self,
        op: MatchOperation,
        target: &PropertyValue,
        tolerance: f64,
        mapper: Option<&'m dyn CoordinateMapper>,
    ) -> Result<EntityMatcher<'m>>;
}

impl std::fmt::Debug for dyn PropertyMatchDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyMatchDescriptor")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .field("flavor", &self.flavor())
            .finish()
    }
}

fn unsupported(info: &PropertyInfo, operation: MatchOperation) -> MatchError {
    MatchError::UnsupportedOperation {
        property: info.name.clone(),
        operation,
    }
}

/// Resolve the comparator for `op`, failing for unsupported operations
fn comparator_for<S: ?Sized + 'static, T: 'static>(
    info: &PropertyInfo,
    descriptor: &TypeDescriptor<S, T>,
    op: MatchOperation,
) -> Result<Comparator<S, T>> {
    descriptor.comparator(op).ok_or_else(|| unsupported(info, op))
}

/// Handle `SelectAll` before any target conversion
fn select_all_shortcut<'m>(
    info: &PropertyInfo,
    supported: MatchOperations,
    op: MatchOperation,
) -> Option<Result<EntityMatcher<'m>>> {
    if op != MatchOperation::SelectAll {
        return None;
    }
    if !supported.supports(op) {
        return Some(Err(unsupported(info, op)));
    }
    Some(Ok(EntityMatcher::select_all()))
}

fn convert_target<V: MatchValue>(
    info: &PropertyInfo,
    kind: PropertyValueKind,
    target: &PropertyValue,
) -> Result<V> {
    V::from_property_value(target).ok_or_else(|| MatchError::ValueKindMismatch {
        property: info.name.clone(),
        expected: kind,
    })
}

/// Property whose accessor returns the compared value
pub struct TypedPropertyDescriptor<E, V: 'static> {
    info: PropertyInfo,
    accessor: Accessor<E, V>,
    descriptor: &'static TypeDescriptor<V>,
    choices: Option<Vec<Choice>>,
}

impl<E: TypedEntity, V: MatchValue> TypedPropertyDescriptor<E, V> {
    pub fn new(
        info: PropertyInfo,
        descriptor: &'static TypeDescriptor<V>,
        accessor: Accessor<E, V>,
    ) -> Self {
        TypedPropertyDescriptor {
            info,
            accessor,
            descriptor,
            choices: None,
        }
    }

    /// Offer a fixed list of choices
    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = Some(choices);
        self
    }

    /// Build a matcher from an already typed target
    pub fn typed_matcher(
        &self,
        op: MatchOperation,
        target: V,
        tolerance: f64,
    ) -> Result<EntityMatcher<'static>> {
        if let Some(select_all) = select_all_shortcut(&self.info, self.descriptor.supported, op) {
            return select_all;
        }
        let comparator = comparator_for(&self.info, self.descriptor, op)?;
        trace!(property = %self.info.name, %op, tolerance, "building typed matcher");
        Ok(EntityMatcher::new(TypedEntityMatcher::new(
            self.accessor.clone(),
            comparator,
            target,
            tolerance,
        )))
    }
}

impl<E: TypedEntity, V: MatchValue> PropertyMatchDescriptor for TypedPropertyDescriptor<E, V> {
    fn info(&self) -> &PropertyInfo {
        &self.info
    }

    fn kind(&self) -> PropertyValueKind {
        self.descriptor.kind
    }

    fn flavor(&self) -> PropertyFlavor {
        PropertyFlavor::Typed
    }

    fn supported_operations(&self) -> MatchOperations {
        self.descriptor.supported
    }

    fn is_choice(&self) -> bool {
        self.choices.is_some()
    }

    fn choice_values(&self, _catalog: &dyn ChoiceCatalog) -> Vec<Choice> {
        self.choices.clone().unwrap_or_default()
    }

    fn matcher<'m>(
        &self,
        op: MatchOperation,
        target: &PropertyValue,
        tolerance: f64,
        _mapper: Option<&'m dyn CoordinateMapper>,
    ) -> Result<EntityMatcher<'m>> {
        if let Some(select_all) = select_all_shortcut(&self.info, self.descriptor.supported, op) {
            return select_all;
        }
        let target = convert_target::<V>(&self.info, self.descriptor.kind, target)?;
        self.typed_matcher(op, target, tolerance)
    }
}

fn axis_of(kind: PropertyValueKind) -> Axis {
    match kind {
        PropertyValueKind::CoordY => Axis::Y,
        _ => Axis::X,
    }
}

/// Property comparing one coordinate of a point in the user frame
pub struct VectorPropertyDescriptor<E> {
    info: PropertyInfo,
    accessor: Accessor<E, Vector3>,
    descriptor: &'static TypeDescriptor<f64>,
}

impl<E: TypedEntity> VectorPropertyDescriptor<E> {
    /// The coordinate compared follows the descriptor's kind
    pub fn new(
        info: PropertyInfo,
        descriptor: &'static TypeDescriptor<f64>,
        accessor: Accessor<E, Vector3>,
    ) -> Self {
        VectorPropertyDescriptor {
            info,
            accessor,
            descriptor,
        }
    }

    /// Component of the mapped point that is compared
    pub fn axis(&self) -> Axis {
        axis_of(self.descriptor.kind)
    }
}

impl<E: TypedEntity> PropertyMatchDescriptor for VectorPropertyDescriptor<E> {
    fn info(&self) -> &PropertyInfo {
        &self.info
    }

    fn kind(&self) -> PropertyValueKind {
        self.descriptor.kind
    }

    fn flavor(&self) -> PropertyFlavor {
        PropertyFlavor::Vector
    }

    fn supported_operations(&self) -> MatchOperations {
        self.descriptor.supported
    }

    fn matcher<'m>(
        &self,
        op: MatchOperation,
        target: &PropertyValue,
        tolerance: f64,
        mapper: Option<&'m dyn CoordinateMapper>,
    ) -> Result<EntityMatcher<'m>> {
        if let Some(select_all) = select_all_shortcut(&self.info, self.descriptor.supported, op) {
            return select_all;
        }
        let comparator = comparator_for(&self.info, self.descriptor, op)?;
        let target = convert_target::<f64>(&self.info, self.descriptor.kind, target)?;
        let mapper =
            mapper.ok_or_else(|| MatchError::MissingCoordinateMapper(self.info.name.clone()))?;
        trace!(property = %self.info.name, %op, target, tolerance, "building vector matcher");
        Ok(EntityMatcher::new(VectorEntityMatcher::new(
            self.accessor.clone(),
            self.axis(),
            mapper,
            comparator,
            target,
            tolerance,
        )))
    }
}

/// Property comparing one coordinate of each point in a list
pub struct VectorListPropertyDescriptor<E> {
    info: PropertyInfo,
    accessor: Accessor<E, Vec<Vector3>>,
    descriptor: &'static TypeDescriptor<[f64], f64>,
}

impl<E: TypedEntity> VectorListPropertyDescriptor<E> {
    /// The coordinate compared follows the descriptor's kind
    pub fn new(
        info: PropertyInfo,
        descriptor: &'static TypeDescriptor<[f64], f64>,
        accessor: Accessor<E, Vec<Vector3>>,
    ) -> Self {
        VectorListPropertyDescriptor {
            info,
            accessor,
            descriptor,
        }
    }

    /// Component of the mapped points that is compared
    pub fn axis(&self) -> Axis {
        axis_of(self.descriptor.kind)
    }
}

impl<E: TypedEntity> PropertyMatchDescriptor for VectorListPropertyDescriptor<E> {
    fn info(&self) -> &PropertyInfo {
        &self.info
    }

    fn kind(&self) -> PropertyValueKind {
        self.descriptor.kind
    }

    fn flavor(&self) -> PropertyFlavor {
        PropertyFlavor::VectorList
    }

    fn supported_operations(&self) -> MatchOperations {
        self.descriptor.supported
    }

    fn matcher<'m>(
        &self,
        op: MatchOperation,
        target: &PropertyValue,
        tolerance: f64,
        mapper: Option<&'m dyn CoordinateMapper>,
    ) -> Result<EntityMatcher<'m>> {
        if let Some(select_all) = select_all_shortcut(&self.info, self.descriptor.supported, op) {
            return select_all;
        }
        let comparator = comparator_for(&self.info, self.descriptor, op)?;
        let target = convert_target::<f64>(&self.info, self.descriptor.kind, target)?;
        let mapper =
            mapper.ok_or_else(|| MatchError::MissingCoordinateMapper(self.info.name.clone()))?;
        trace!(property = %self.info.name, %op, target, tolerance, "building vector list matcher");
        Ok(EntityMatcher::new(VectorListEntityMatcher::new(
            self.accessor.clone(),
            self.axis(),
            mapper,
            comparator,
            target,
            tolerance,
        )))
    }
}

/// A property whose choices depend on the current document
pub struct DynamicChoicePropertyDescriptor {
    inner: Box<dyn PropertyMatchDescriptor>,
    provider: ChoiceProvider,
}

impl DynamicChoicePropertyDescriptor {
    pub fn new(inner: Box<dyn PropertyMatchDescriptor>, provider: ChoiceProvider) -> Self {
        DynamicChoicePropertyDescriptor { inner, provider }
    }
}

impl PropertyMatchDescriptor for DynamicChoicePropertyDescriptor {
    fn info(&self) -> &PropertyInfo {
        self.inner.info()
    }

    fn kind(&self) -> PropertyValueKind {
        self.inner.kind()
    }

    fn flavor(&self) -> PropertyFlavor {
        PropertyFlavor::DynamicChoice
    }

    fn supported_operations(&self) -> MatchOperations {
        self.inner.supported_operations()
    }

    fn is_choice(&self) -> bool {
        true
    }

    fn choice_values(&self, catalog: &dyn ChoiceCatalog) -> Vec<Choice> {
        (self.provider)(catalog)
    }

    fn matcher<'m>(
        &self,
        op: MatchOperation,
        target: &PropertyValue,
        tolerance: f64,
        mapper: Option<&'m dyn CoordinateMapper>,
    ) -> Result<EntityMatcher<'m>> {
        self.inner.matcher(op, target, tolerance, mapper)
    }
}
