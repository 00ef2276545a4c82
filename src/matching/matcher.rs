//! Constructed entity predicates
//!
//! A matcher binds an accessor, a comparator, a target and a tolerance.
//! It is built for one scan over a set of entities and holds no
//! reference into shared tables other than the comparator function.

use std::sync::Arc;

use super::mapper::{Axis, CoordinateMapper};
use super::type_descriptor::Comparator;
use crate::entities::{EntityType, TypedEntity};
use crate::types::Vector3;

/// Reads a value from an entity of the declared kind
pub type Accessor<E, V> = Arc<dyn Fn(&E) -> V + Send + Sync>;

/// A predicate over entities
pub trait EntityPredicate {
    /// Evaluate the predicate; entities of another kind never match
    fn test(&self, entity: &EntityType) -> bool;
}

/// A ready-to-use predicate produced by a property descriptor
pub struct EntityMatcher<'m> {
    inner: Box<dyn EntityPredicate + 'm>,
}

impl<'m> EntityMatcher<'m> {
    /// Wrap a predicate
    pub fn new(predicate: impl EntityPredicate + 'm) -> Self {
        EntityMatcher {
            inner: Box::new(predicate),
        }
    }

    /// A matcher that accepts every entity
    pub fn select_all() -> Self {
        Self::new(SelectAll)
    }

    /// Check whether `entity` matches
    #[inline]
    pub fn is_match(&self, entity: &EntityType) -> bool {
        self.inner.test(entity)
    }
}

impl std::fmt::Debug for EntityMatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityMatcher").finish_non_exhaustive()
    }
}

/// Accepts everything without reading the entity
#[derive(Debug, Clone, Copy)]
pub struct SelectAll;

impl EntityPredicate for SelectAll {
    fn test(&self, _entity: &EntityType) -> bool {
        true
    }
}

/// Compares a value read directly from the entity
pub struct TypedEntityMatcher<E, V: 'static> {
    accessor: Accessor<E, V>,
    comparator: Comparator<V>,
    target: V,
    tolerance: f64,
}

impl<E, V: 'static> TypedEntityMatcher<E, V> {
    pub fn new(accessor: Accessor<E, V>, comparator: Comparator<V>, target: V, tolerance: f64) -> Self {
        TypedEntityMatcher {
            accessor,
            comparator,
            target,
            tolerance,
        }
    }

    /// Evaluate against an entity of the declared kind
    pub fn matches(&self, entity: &E) -> bool {
        let value = (self.accessor)(entity);
        (self.comparator)(&value, &self.target, self.tolerance)
    }
}

impl<E: TypedEntity, V: 'static> EntityPredicate for TypedEntityMatcher<E, V> {
    fn test(&self, entity: &EntityType) -> bool {
        E::from_entity_type(entity).is_some_and(|e| self.matches(e))
    }
}

/// Compares one component of a point after mapping it into user space
pub struct VectorEntityMatcher<'m, E> {
    accessor: Accessor<E, Vector3>,
    axis: Axis,
    mapper: &'m dyn CoordinateMapper,
    comparator: Comparator<f64>,
    target: f64,
    tolerance: f64,
}

impl<'m, E> VectorEntityMatcher<'m, E> {
    pub fn new(
        accessor: Accessor<E, Vector3>,
        axis: Axis,
        mapper: &'m dyn CoordinateMapper,
        comparator: Comparator<f64>,
        target: f64,
        tolerance: f64,
    ) -> Self {
        VectorEntityMatcher {
            accessor,
            axis,
            mapper,
            comparator,
            target,
            tolerance,
        }
    }

    /// Evaluate against an entity of the declared kind
    pub fn matches(&self, entity: &E) -> bool {
        let user = self.mapper.to_user((self.accessor)(entity));
        (self.comparator)(&self.axis.component(user), &self.target, self.tolerance)
    }
}

impl<E: TypedEntity> EntityPredicate for VectorEntityMatcher<'_, E> {
    fn test(&self, entity: &EntityType) -> bool {
        E::from_entity_type(entity).is_some_and(|e| self.matches(e))
    }
}

/// Compares one component of every point in a list, each mapped into
/// user space
pub struct VectorListEntityMatcher<'m, E> {
    accessor: Accessor<E, Vec<Vector3>>,
    axis: Axis,
    mapper: &'m dyn CoordinateMapper,
    comparator: Comparator<[f64], f64>,
    target: f64,
    tolerance: f64,
}

impl<'m, E> VectorListEntityMatcher<'m, E> {
    pub fn new(
        accessor: Accessor<E, Vec<Vector3>>,
        axis: Axis,
        mapper: &'m dyn CoordinateMapper,
        comparator: Comparator<[f64], f64>,
        target: f64,
        tolerance: f64,
    ) -> Self {
        VectorListEntityMatcher {
            accessor,
            axis,
            mapper,
            comparator,
            target,
            tolerance,
        }
    }

    /// Evaluate against an entity of the declared kind
    pub fn matches(&self, entity: &E) -> bool {
        let components: Vec<f64> = (self.accessor)(entity)
            .into_iter()
            .map(|p| self.axis.component(self.mapper.to_user(p)))
            .collect();
        (self.comparator)(&components, &self.target, self.tolerance)
    }
}

impl<E: TypedEntity> EntityPredicate for VectorListEntityMatcher<'_, E> {
    fn test(&self, entity: &EntityType) -> bool {
        E::from_entity_type(entity).is_some_and(|e| self.matches(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Circle, Line, LwPolyline};
    use crate::matching::mapper::WorldMapper;
    use crate::matching::type_descriptor::{COORD_X_CONTAINS, LENGTH};
    use crate::matching::MatchOperation;
    use crate::types::Vector2;

    fn radius() -> Accessor<Circle, f64> {
        Arc::new(|c: &Circle| c.radius)
    }

    #[test]
    fn test_typed_matcher() {
        let eq = LENGTH.comparator(MatchOperation::Equals).unwrap();
        let matcher = EntityMatcher::new(TypedEntityMatcher::new(radius(), eq, 2.0, 1e-9));
        let circle: EntityType = Circle::from_center_radius(Vector3::ZERO, 2.0).into();
        let other: EntityType = Circle::from_center_radius(Vector3::ZERO, 3.0).into();
        assert!(matcher.is_match(&circle));
        assert!(!matcher.is_match(&other));
    }

    #[test]
    fn test_wrong_kind_never_matches() {
        let ne = LENGTH.comparator(MatchOperation::NotEquals).unwrap();
        let matcher = EntityMatcher::new(TypedEntityMatcher::new(radius(), ne, 2.0, 1e-9));
        let line: EntityType = Line::new().into();
        assert!(!matcher.is_match(&line));
    }

    #[test]
    fn test_select_all() {
        let matcher = EntityMatcher::select_all();
        assert!(matcher.is_match(&Line::new().into()));
        assert!(matcher.is_match(&Circle::new().into()));
    }

    #[test]
    fn test_vector_matcher_maps_before_comparing() {
        let shift = |p: Vector3| p - Vector3::new(100.0, 0.0, 0.0);
        let eq = LENGTH.comparator(MatchOperation::Equals).unwrap();
        let center: Accessor<Circle, Vector3> = Arc::new(|c: &Circle| c.center);
        let matcher = VectorEntityMatcher::new(center, Axis::X, &shift, eq, 5.0, 1e-9);
        assert!(matcher.matches(&Circle::from_center_radius(Vector3::new(105.0, 0.0, 0.0), 1.0)));
        assert!(!matcher.matches(&Circle::from_center_radius(Vector3::new(5.0, 0.0, 0.0), 1.0)));
    }

    #[test]
    fn test_vector_list_matcher() {
        let eq = COORD_X_CONTAINS.comparator(MatchOperation::Equals).unwrap();
        let points: Accessor<LwPolyline, Vec<Vector3>> = Arc::new(|p: &LwPolyline| p.points());
        let poly = LwPolyline::from_points([Vector2::new(1.0, 0.0), Vector2::new(5.0, 0.0)]);
        let hit = VectorListEntityMatcher::new(points.clone(), Axis::X, &WorldMapper, eq, 5.0, 1e-3);
        let miss = VectorListEntityMatcher::new(points, Axis::X, &WorldMapper, eq, 3.0, 1e-3);
        assert!(hit.matches(&poly));
        assert!(!miss.matches(&poly));
    }
}
