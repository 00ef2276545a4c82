//! Entity match descriptors: the filterable properties of one entity kind

use std::marker::PhantomData;
use std::sync::Arc;

use super::choice::{int_choices, Choice, ChoiceCatalog, ChoiceProvider};
use super::mapper::CoordinateMapper;
use super::matcher::EntityMatcher;
use super::operation::MatchOperation;
use super::property::{
    DynamicChoicePropertyDescriptor, PropertyInfo, PropertyMatchDescriptor,
    TypedPropertyDescriptor, VectorListPropertyDescriptor, VectorPropertyDescriptor,
};
use super::type_descriptor::{
    TypeDescriptor, ANGLE, BOOL, COORD_X, COORD_X_CONTAINS, COORD_Y, COORD_Y_CONTAINS, DOUBLE,
    INCLINATION, INT, INT_CHOICE, LENGTH, STRING, STRING_CHOICE,
};
use super::value::{MatchValue, PropertyValue};
use crate::entities::{EntityKind, TypedEntity};
use crate::error::{MatchError, Result};
use crate::types::Vector3;

/// The ordered, named properties of one entity kind
#[derive(Debug)]
pub struct EntityMatchDescriptor {
    kind: EntityKind,
    properties: Vec<Box<dyn PropertyMatchDescriptor>>,
}

impl EntityMatchDescriptor {
    /// Entity kind described
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Name shown to the user
    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }

    /// Properties in declaration order
    pub fn properties(&self) -> impl Iterator<Item = &dyn PropertyMatchDescriptor> {
        self.properties.iter().map(|p| p.as_ref())
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if no properties are declared
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Find a property by name
    pub fn find_property_descriptor(&self, name: &str) -> Option<&dyn PropertyMatchDescriptor> {
        self.properties().find(|p| p.name() == name)
    }

    /// `(name, display name)` of every property, in declaration order
    pub fn collect_properties_info(&self) -> Vec<(&str, &str)> {
        self.properties()
            .map(|p| {
                let info = p.info();
                (info.name.as_str(), info.display_name.as_str())
            })
            .collect()
    }

    /// Build a matcher for the named property
    pub fn matcher<'m>(
        &self,
        property: &str,
        op: MatchOperation,
        target: &PropertyValue,
        tolerance: f64,
        mapper: Option<&'m dyn CoordinateMapper>,
    ) -> Result<EntityMatcher<'m>> {
        self.find_property_descriptor(property)
            .ok_or_else(|| MatchError::UnknownProperty {
                entity: self.kind.to_string(),
                property: property.to_string(),
            })?
            .matcher(op, target, tolerance, mapper)
    }
}

/// Builder collecting the properties of entity type `E`
pub struct TypedEntityMatchDescriptor<E> {
    properties: Vec<Box<dyn PropertyMatchDescriptor>>,
    _entity: PhantomData<fn(&E)>,
}

impl<E: TypedEntity> TypedEntityMatchDescriptor<E> {
    pub fn new() -> Self {
        TypedEntityMatchDescriptor {
            properties: Vec::new(),
            _entity: PhantomData,
        }
    }

    /// Add an already built property descriptor
    pub fn push(&mut self, property: impl PropertyMatchDescriptor + 'static) -> &mut Self {
        self.properties.push(Box::new(property));
        self
    }

    /// Add a property compared by `descriptor`
    pub fn add<V, F>(
        &mut self,
        info: PropertyInfo,
        descriptor: &'static TypeDescriptor<V>,
        accessor: F,
    ) -> &mut Self
    where
        V: MatchValue,
        F: Fn(&E) -> V + Send + Sync + 'static,
    {
        self.push(TypedPropertyDescriptor::new(info, descriptor, Arc::new(accessor)))
    }

    /// Add a property offering a fixed list of choices
    pub fn add_choice<V, F>(
        &mut self,
        info: PropertyInfo,
        descriptor: &'static TypeDescriptor<V>,
        choices: Vec<Choice>,
        accessor: F,
    ) -> &mut Self
    where
        V: MatchValue,
        F: Fn(&E) -> V + Send + Sync + 'static,
    {
        self.push(TypedPropertyDescriptor::new(info, descriptor, Arc::new(accessor)).with_choices(choices))
    }

    /// Add a property whose choices are computed from the document
    pub fn add_dynamic_choice<V, F, P>(
        &mut self,
        info: PropertyInfo,
        descriptor: &'static TypeDescriptor<V>,
        provider: P,
        accessor: F,
    ) -> &mut Self
    where
        V: MatchValue,
        F: Fn(&E) -> V + Send + Sync + 'static,
        P: Fn(&dyn ChoiceCatalog) -> Vec<Choice> + Send + Sync + 'static,
    {
        let inner = TypedPropertyDescriptor::new(info, descriptor, Arc::new(accessor));
        let provider: ChoiceProvider = Arc::new(provider);
        self.push(DynamicChoicePropertyDescriptor::new(Box::new(inner), provider))
    }

    /// Add an integer property picked from `(value, label)` pairs
    pub fn add_int_choice<F>(
        &mut self,
        info: PropertyInfo,
        choices: impl IntoIterator<Item = (i32, &'static str)>,
        accessor: F,
    ) -> &mut Self
    where
        F: Fn(&E) -> i32 + Send + Sync + 'static,
    {
        self.add_choice(info, &INT_CHOICE, int_choices(choices), accessor)
    }

    /// Add a string property picked from names in the document
    pub fn add_string_list<F, P>(&mut self, info: PropertyInfo, names: P, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> String + Send + Sync + 'static,
        P: Fn(&dyn ChoiceCatalog) -> Vec<String> + Send + Sync + 'static,
    {
        self.add_dynamic_choice(
            info,
            &STRING_CHOICE,
            move |catalog: &dyn ChoiceCatalog| names(catalog).into_iter().map(Choice::text).collect(),
            accessor,
        )
    }

    fn add_vector<F>(
        &mut self,
        info: PropertyInfo,
        descriptor: &'static TypeDescriptor<f64>,
        accessor: F,
    ) -> &mut Self
    where
        F: Fn(&E) -> Vector3 + Send + Sync + 'static,
    {
        self.push(VectorPropertyDescriptor::new(info, descriptor, Arc::new(accessor)))
    }

    /// Add the user-frame X coordinate of a point
    pub fn add_vector_x<F>(&mut self, info: PropertyInfo, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> Vector3 + Send + Sync + 'static,
    {
        self.add_vector(info, &COORD_X, accessor)
    }

    /// Add the user-frame Y coordinate of a point
    pub fn add_vector_y<F>(&mut self, info: PropertyInfo, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> Vector3 + Send + Sync + 'static,
    {
        self.add_vector(info, &COORD_Y, accessor)
    }

    /// Add X and Y properties for one point, named `<prefix>X` and `<prefix>Y`
    pub fn add_point<F>(&mut self, prefix: &str, display: &str, what: &str, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> Vector3 + Send + Sync + Clone + 'static,
    {
        self.add_vector_x(
            PropertyInfo::new(
                format!("{}X", prefix),
                format!("{} X", display),
                format!("X coordinate for {}", what),
            ),
            accessor.clone(),
        );
        self.add_vector_y(
            PropertyInfo::new(
                format!("{}Y", prefix),
                format!("{} Y", display),
                format!("Y coordinate for {}", what),
            ),
            accessor,
        )
    }

    /// Add "any point has this X coordinate"
    pub fn add_contains_x<F>(&mut self, info: PropertyInfo, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> Vec<Vector3> + Send + Sync + 'static,
    {
        self.push(VectorListPropertyDescriptor::new(info, &COORD_X_CONTAINS, Arc::new(accessor)))
    }

    /// Add "any point has this Y coordinate"
    pub fn add_contains_y<F>(&mut self, info: PropertyInfo, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> Vec<Vector3> + Send + Sync + 'static,
    {
        self.push(VectorListPropertyDescriptor::new(info, &COORD_Y_CONTAINS, Arc::new(accessor)))
    }

    pub fn add_length<F>(&mut self, info: PropertyInfo, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> f64 + Send + Sync + 'static,
    {
        self.add(info, &LENGTH, accessor)
    }

    pub fn add_double<F>(&mut self, info: PropertyInfo, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> f64 + Send + Sync + 'static,
    {
        self.add(info, &DOUBLE, accessor)
    }

    pub fn add_angle<F>(&mut self, info: PropertyInfo, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> f64 + Send + Sync + 'static,
    {
        self.add(info, &ANGLE, accessor)
    }

    pub fn add_inclination<F>(&mut self, info: PropertyInfo, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> f64 + Send + Sync + 'static,
    {
        self.add(info, &INCLINATION, accessor)
    }

    pub fn add_boolean<F>(&mut self, info: PropertyInfo, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.add(info, &BOOL, accessor)
    }

    pub fn add_int<F>(&mut self, info: PropertyInfo, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> i32 + Send + Sync + 'static,
    {
        self.add(info, &INT, accessor)
    }

    pub fn add_string<F>(&mut self, info: PropertyInfo, accessor: F) -> &mut Self
    where
        F: Fn(&E) -> String + Send + Sync + 'static,
    {
        self.add(info, &STRING, accessor)
    }

    /// Finish the descriptor
    pub fn finish(self) -> EntityMatchDescriptor {
        EntityMatchDescriptor {
            kind: E::KIND,
            properties: self.properties,
        }
    }
}

impl<E: TypedEntity> Default for TypedEntityMatchDescriptor<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Circle, Line};
    use crate::matching::mapper::WorldMapper;
    use crate::matching::property::PropertyFlavor;
    use crate::matching::kind::PropertyValueKind;

    fn circle_descriptor() -> EntityMatchDescriptor {
        let mut builder = TypedEntityMatchDescriptor::<Circle>::new();
        builder
            .add_point("center", "Center", "center point", |c: &Circle| c.center)
            .add_length(PropertyInfo::new("radius", "Radius", "Radius of circle"), |c: &Circle| c.radius)
            .add_int_choice(
                PropertyInfo::new("quadrant", "Quadrant", "Quadrant of the center"),
                [(1, "First"), (2, "Second")],
                |c: &Circle| if c.center.x >= 0.0 { 1 } else { 2 },
            );
        builder.finish()
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let descriptor = circle_descriptor();
        assert_eq!(descriptor.kind(), EntityKind::Circle);
        assert_eq!(descriptor.len(), 4);
        assert_eq!(
            descriptor.collect_properties_info(),
            vec![
                ("centerX", "Center X"),
                ("centerY", "Center Y"),
                ("radius", "Radius"),
                ("quadrant", "Quadrant"),
            ]
        );
    }

    #[test]
    fn test_find_property_descriptor() {
        let descriptor = circle_descriptor();
        let center_y = descriptor.find_property_descriptor("centerY").unwrap();
        assert_eq!(center_y.kind(), PropertyValueKind::CoordY);
        assert_eq!(center_y.flavor(), PropertyFlavor::Vector);
        assert!(descriptor.find_property_descriptor("missing").is_none());

        let quadrant = descriptor.find_property_descriptor("quadrant").unwrap();
        assert!(quadrant.is_choice());
        assert_eq!(quadrant.choice_values(&crate::matching::EmptyCatalog).len(), 2);
    }

    #[test]
    fn test_matcher_by_name() {
        let descriptor = circle_descriptor();
        let matcher = descriptor
            .matcher("radius", MatchOperation::Equals, &PropertyValue::Double(1.0), 1e-9, Some(&WorldMapper))
            .unwrap();
        assert!(matcher.is_match(&Circle::new().into()));
        assert!(!matcher.is_match(&Line::new().into()));

        let err = descriptor
            .matcher("area", MatchOperation::Equals, &PropertyValue::Double(1.0), 0.0, None)
            .unwrap_err();
        assert!(matches!(err, MatchError::UnknownProperty { .. }));
    }
}
