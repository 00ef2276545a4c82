//! Quick selection: pick the entities whose property satisfies a filter
//!
//! A [`QuickSelectionRequest`] names an entity kind, a property, an
//! operation and a target value. [`QuickSelection::build`] validates it
//! against the registry and builds the matchers; [`QuickSelection::select`]
//! runs them over a set of entities and returns the handles that pass.
//! Nothing here mutates the entities or any selection state.

use std::borrow::Cow;

use ahash::RandomState;
use indexmap::IndexMap;
use tracing::warn;

use super::kind::PropertyValueKind;
use super::mapper::CoordinateMapper;
use super::matcher::EntityMatcher;
use super::operation::MatchOperation;
use super::property::PropertyInfo;
use super::registry::EntityMatchRegistry;
use super::tolerance::ToleranceDefaults;
use super::value::PropertyValue;
use crate::entities::{EntityKind, EntityType};
use crate::error::{MatchError, Result};
use crate::types::Handle;

/// A quick selection filter as entered by the user
#[derive(Debug, Clone)]
pub struct QuickSelectionRequest {
    /// Kind to select; `None` applies the filter to every kind
    pub entity_kind: Option<EntityKind>,
    /// Property name
    pub property: String,
    /// Comparison to apply
    pub operation: MatchOperation,
    /// Value compared against
    pub value: PropertyValue,
    /// Tolerance; the default for the property's kind when `None`
    pub tolerance: Option<f64>,
    /// Select the entities that match, or the ones that do not
    pub include_matching: bool,
}

impl QuickSelectionRequest {
    /// A request selecting the entities of `kind` whose `property` satisfies `operation`
    pub fn new(
        entity_kind: EntityKind,
        property: impl Into<String>,
        operation: MatchOperation,
        value: impl Into<PropertyValue>,
    ) -> Self {
        QuickSelectionRequest {
            entity_kind: Some(entity_kind),
            property: property.into(),
            operation,
            value: value.into(),
            tolerance: None,
            include_matching: true,
        }
    }

    /// A request selecting every visible entity of `kind`, or of any kind
    pub fn select_all(entity_kind: Option<EntityKind>) -> Self {
        QuickSelectionRequest {
            entity_kind,
            property: String::new(),
            operation: MatchOperation::SelectAll,
            value: PropertyValue::Bool(true),
            tolerance: None,
            include_matching: true,
        }
    }

    /// Apply the filter to every entity kind
    pub fn any_kind(mut self) -> Self {
        self.entity_kind = None;
        self
    }

    /// Builder-style tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Select the entities that do not match instead
    pub fn excluding_matches(mut self) -> Self {
        self.include_matching = false;
        self
    }
}

/// A validated quick selection filter, ready to run
#[derive(Debug)]
pub struct QuickSelection<'m> {
    matchers: IndexMap<EntityKind, EntityMatcher<'m>, RandomState>,
    include_matching: bool,
}

impl<'m> QuickSelection<'m> {
    /// Validate `request` and build its matchers
    ///
    /// Coordinate properties are compared in the frame of `mapper`.
    pub fn build(
        request: &QuickSelectionRequest,
        registry: &EntityMatchRegistry,
        mapper: Option<&'m dyn CoordinateMapper>,
        defaults: &ToleranceDefaults,
    ) -> Result<Self> {
        Self::build_matchers(request, registry, mapper, defaults)
            .map(|matchers| QuickSelection {
                matchers,
                include_matching: request.include_matching,
            })
            .map_err(|err| {
                warn!(
                    property = %request.property,
                    operation = %request.operation,
                    error = %err,
                    "quick selection request rejected"
                );
                err
            })
    }

    fn build_matchers(
        request: &QuickSelectionRequest,
        registry: &EntityMatchRegistry,
        mapper: Option<&'m dyn CoordinateMapper>,
        defaults: &ToleranceDefaults,
    ) -> Result<IndexMap<EntityKind, EntityMatcher<'m>, RandomState>> {
        let mut matchers = IndexMap::with_hasher(RandomState::new());

        let descriptors: Vec<_> = match request.entity_kind {
            Some(kind) => vec![registry.descriptor(kind)?],
            None => registry.iter().collect(),
        };

        let whole_kind = request.entity_kind.is_none() || request.property.is_empty();
        if request.operation == MatchOperation::SelectAll && whole_kind {
            for descriptor in descriptors {
                matchers.insert(descriptor.kind(), EntityMatcher::select_all());
            }
            return Ok(matchers);
        }

        for descriptor in descriptors {
            let property = descriptor
                .find_property_descriptor(&request.property)
                .ok_or_else(|| MatchError::UnknownProperty {
                    entity: match request.entity_kind {
                        Some(kind) => kind.to_string(),
                        None => "any entity".to_string(),
                    },
                    property: request.property.clone(),
                })?;
            if !property.is_supported_operation(request.operation) {
                return Err(MatchError::UnsupportedOperation {
                    property: request.property.clone(),
                    operation: request.operation,
                });
            }
            let tolerance = request
                .tolerance
                .unwrap_or_else(|| defaults.for_kind(property.kind()));
            let target = Self::world_target(property.info(), property.kind(), &request.value, mapper);
            let matcher = property.matcher(request.operation, &target, tolerance, mapper)?;
            matchers.insert(descriptor.kind(), matcher);
        }
        Ok(matchers)
    }

    // Stored directions are world angles.
    fn world_target<'v>(
        info: &PropertyInfo,
        kind: PropertyValueKind,
        value: &'v PropertyValue,
        mapper: Option<&dyn CoordinateMapper>,
    ) -> Cow<'v, PropertyValue> {
        match (value, mapper) {
            (PropertyValue::Double(angle), Some(mapper)) if info.is_frame_direction(kind) => {
                Cow::Owned(PropertyValue::Double(mapper.to_world_angle(*angle)))
            }
            _ => Cow::Borrowed(value),
        }
    }

    /// Kinds the filter applies to
    pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.matchers.keys().copied()
    }

    /// Check whether `entity` is selected
    ///
    /// Hidden entities and entities of other kinds are never selected.
    pub fn is_selected(&self, entity: &EntityType) -> bool {
        if !entity.as_entity().is_visible() {
            return false;
        }
        self.matchers
            .get(&entity.kind())
            .is_some_and(|matcher| matcher.is_match(entity) == self.include_matching)
    }

    /// Handles of the selected entities, in iteration order
    pub fn select<'a>(&self, entities: impl IntoIterator<Item = &'a EntityType>) -> Vec<Handle> {
        entities
            .into_iter()
            .filter(|entity| self.is_selected(entity))
            .map(|entity| entity.as_entity().handle())
            .collect()
    }
}
