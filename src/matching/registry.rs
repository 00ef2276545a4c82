//! Registry of entity match descriptors, keyed by entity kind

use ahash::RandomState;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use tracing::debug;

use super::descriptor::EntityMatchDescriptor;
use super::entities::builtin_descriptors;
use crate::entities::EntityKind;
use crate::error::{MatchError, Result};

/// Match descriptors of every supported entity kind
///
/// Built once and read-only afterwards; the process-wide instance is
/// available through [`registry`].
#[derive(Debug)]
pub struct EntityMatchRegistry {
    descriptors: IndexMap<EntityKind, EntityMatchDescriptor, RandomState>,
}

impl EntityMatchRegistry {
    /// Build a registry with the built-in kinds
    pub fn new() -> Self {
        Self::from_descriptors(builtin_descriptors())
    }

    /// Build a registry from `descriptors`; a later descriptor replaces an
    /// earlier one of the same kind
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = EntityMatchDescriptor>) -> Self {
        let mut map = IndexMap::with_hasher(RandomState::new());
        for descriptor in descriptors {
            map.insert(descriptor.kind(), descriptor);
        }
        let registry = EntityMatchRegistry { descriptors: map };
        debug!(
            entities = registry.len(),
            properties = registry.iter().map(|d| d.len()).sum::<usize>(),
            "entity match registry built"
        );
        registry
    }

    /// Descriptor of `kind`, if registered
    pub fn get(&self, kind: EntityKind) -> Option<&EntityMatchDescriptor> {
        self.descriptors.get(&kind)
    }

    /// Descriptor of `kind`, failing for unregistered kinds
    pub fn descriptor(&self, kind: EntityKind) -> Result<&EntityMatchDescriptor> {
        self.get(kind)
            .ok_or_else(|| MatchError::UnknownEntityKind(kind.to_string()))
    }

    /// Descriptor looked up by entity kind name
    pub fn descriptor_by_name(&self, name: &str) -> Result<&EntityMatchDescriptor> {
        EntityKind::from_name(name)
            .and_then(|kind| self.get(kind))
            .ok_or_else(|| MatchError::UnknownEntityKind(name.to_string()))
    }

    /// Descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &EntityMatchDescriptor> {
        self.descriptors.values()
    }

    /// Registered kinds in registration order
    pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.descriptors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for EntityMatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: Lazy<EntityMatchRegistry> = Lazy::new(EntityMatchRegistry::new);

/// The shared registry of built-in kinds, built on first use
pub fn registry() -> &'static EntityMatchRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::descriptor::TypedEntityMatchDescriptor;
    use crate::entities::Line;

    #[test]
    fn test_shared_registry_is_built_once() {
        assert!(std::ptr::eq(registry(), registry()));
        assert_eq!(registry().len(), EntityKind::ALL.len());
    }

    #[test]
    fn test_lookup() {
        let registry = EntityMatchRegistry::new();
        let line = registry.descriptor(EntityKind::Line).unwrap();
        assert_eq!(line.display_name(), "Line");
        assert!(line.find_property_descriptor("incline").is_some());

        let polyline = registry.descriptor_by_name("polyline").unwrap();
        assert_eq!(polyline.kind(), EntityKind::LwPolyline);
        assert!(matches!(
            registry.descriptor_by_name("Hatch"),
            Err(MatchError::UnknownEntityKind(_))
        ));
    }

    #[test]
    fn test_unregistered_kind() {
        let registry =
            EntityMatchRegistry::from_descriptors([TypedEntityMatchDescriptor::<Line>::new().finish()]);
        assert_eq!(registry.kinds().collect::<Vec<_>>(), vec![EntityKind::Line]);
        assert!(registry.get(EntityKind::Circle).is_none());
        assert!(matches!(
            registry.descriptor(EntityKind::Circle),
            Err(MatchError::UnknownEntityKind(name)) if name == "Circle"
        ));
    }
}
