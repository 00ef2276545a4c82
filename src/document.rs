//! CAD document structure

use indexmap::{IndexMap, IndexSet};

use crate::entities::{EntityType, DEFAULT_LAYER};
use crate::error::Result;
use crate::matching::{
    registry, ChoiceCatalog, CoordinateMapper, QuickSelection, QuickSelectionRequest,
    ToleranceDefaults,
};
use crate::tables::*;
use crate::types::Handle;

/// A drawing: symbol tables plus the entities, in insertion order
///
/// The document only stores entities. Quick selection reads them and
/// reports the selected handles without touching the document.
#[derive(Debug, Clone)]
pub struct CadDocument {
    /// Layer table
    pub layers: Table<LayerRef>,

    /// Line type table
    pub line_types: Table<LineType>,

    /// Text style table
    pub text_styles: Table<TextStyle>,

    /// Block record table
    pub block_records: Table<BlockRecord>,

    /// Dimension style table
    pub dim_styles: Table<DimStyleRef>,

    /// UCS table
    pub ucss: Table<Ucs>,

    /// Frame coordinates are shown and compared in
    active_ucs: Ucs,

    /// All entities in the document (indexed by handle)
    entities: IndexMap<Handle, EntityType>,

    /// Next handle to allocate
    next_handle: u64,
}

impl CadDocument {
    /// Create a new empty document with the standard table entries
    pub fn new() -> Self {
        let mut doc = CadDocument {
            layers: Table::new(),
            line_types: Table::new(),
            text_styles: Table::new(),
            block_records: Table::new(),
            dim_styles: Table::new(),
            ucss: Table::new(),
            active_ucs: Ucs::new("World"),
            entities: IndexMap::new(),
            next_handle: 1,
        };

        doc.initialize_defaults();
        doc
    }

    /// Initialize default tables with standard entries
    fn initialize_defaults(&mut self) {
        // Layer "0" is the one new entities already point to
        self.layers.add(DEFAULT_LAYER.clone());

        self.line_types.add(LineType::continuous());
        self.text_styles.add(TextStyle::standard());
        self.block_records.add(BlockRecord::new("*Model_Space"));
        self.block_records.add(BlockRecord::new("*Paper_Space"));
        self.dim_styles.add(DimStyle::standard().into_ref());
    }

    /// Allocate a new unique handle
    pub fn allocate_handle(&mut self) -> Handle {
        let handle = Handle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Add a layer, returning the shared reference entities should use
    ///
    /// If a layer of the same name exists, that layer is returned and
    /// `layer` is dropped.
    pub fn add_layer(&mut self, layer: Layer) -> LayerRef {
        if let Some(existing) = self.layers.get(&layer.name) {
            return existing.clone();
        }
        let layer = layer.into_ref();
        self.layers.add(layer.clone());
        layer
    }

    /// Get a layer by name
    pub fn layer(&self, name: &str) -> Option<&LayerRef> {
        self.layers.get(name)
    }

    /// Add a dimension style, returning the shared reference
    pub fn add_dim_style(&mut self, style: DimStyle) -> DimStyleRef {
        if let Some(existing) = self.dim_styles.get(&style.name) {
            return existing.clone();
        }
        let style = style.into_ref();
        self.dim_styles.add(style.clone());
        style
    }

    /// Get a dimension style by name
    pub fn dim_style(&self, name: &str) -> Option<&DimStyleRef> {
        self.dim_styles.get(name)
    }

    /// Add an entity to the document
    ///
    /// Entities without a handle get a fresh one. An entity whose handle
    /// is already in use replaces the stored entity. Layers and dimension
    /// styles the entity refers to are registered when their name is new.
    pub fn add_entity(&mut self, entity: impl Into<EntityType>) -> Handle {
        let mut entity = entity.into();
        let handle = if entity.as_entity().handle().is_null() {
            let h = self.allocate_handle();
            entity.as_entity_mut().set_handle(h);
            h
        } else {
            let h = entity.as_entity().handle();
            self.next_handle = self.next_handle.max(h.value() + 1);
            h
        };

        if !self.layers.contains(&entity.as_entity().layer().name) {
            self.layers.add(entity.as_entity().layer().clone());
        }
        if let Some(base) = entity.dimension_base() {
            if !self.dim_styles.contains(base.style_name()) {
                self.dim_styles.add(base.style.clone());
            }
        }

        self.entities.insert(handle, entity);
        handle
    }

    /// Get an entity by handle
    pub fn get_entity(&self, handle: Handle) -> Option<&EntityType> {
        self.entities.get(&handle)
    }

    /// Get a mutable entity by handle
    pub fn get_entity_mut(&mut self, handle: Handle) -> Option<&mut EntityType> {
        self.entities.get_mut(&handle)
    }

    /// Remove an entity by handle, keeping the order of the others
    pub fn remove_entity(&mut self, handle: Handle) -> Option<EntityType> {
        self.entities.shift_remove(&handle)
    }

    /// Get the number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate over all entities in insertion order
    pub fn entities(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.values()
    }

    /// Iterate over all entities mutably
    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut EntityType> {
        self.entities.values_mut()
    }

    /// The active user coordinate system
    pub fn active_ucs(&self) -> &Ucs {
        &self.active_ucs
    }

    /// Make the named UCS active; returns `false` if no such UCS exists
    pub fn set_active_ucs(&mut self, name: &str) -> bool {
        if name.eq_ignore_ascii_case("World") {
            self.active_ucs = Ucs::new("World");
            return true;
        }
        match self.ucss.get(name) {
            Some(ucs) => {
                self.active_ucs = ucs.clone();
                true
            }
            None => false,
        }
    }

    /// Mapper from world coordinates into the active UCS
    pub fn coordinate_mapper(&self) -> &dyn CoordinateMapper {
        &self.active_ucs
    }

    /// Run a quick selection over the document's entities
    ///
    /// Coordinates are compared in the active UCS and direction targets
    /// are read in it. Returns the handles of the selected entities in
    /// document order.
    pub fn quick_select(
        &self,
        request: &QuickSelectionRequest,
        defaults: &ToleranceDefaults,
    ) -> Result<Vec<Handle>> {
        let selection =
            QuickSelection::build(request, registry(), Some(self.coordinate_mapper()), defaults)?;
        Ok(selection.select(self.entities()))
    }
}

impl Default for CadDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceCatalog for CadDocument {
    fn layers(&self) -> Vec<LayerRef> {
        self.layers.iter().cloned().collect()
    }

    fn line_types(&self) -> Vec<String> {
        self.line_types.names().map(str::to_string).collect()
    }

    fn block_names(&self) -> Vec<String> {
        self.block_records
            .iter()
            .filter(|b| !b.is_layout() && !b.anonymous)
            .map(|b| b.name.clone())
            .collect()
    }

    fn text_styles(&self) -> Vec<String> {
        self.text_styles.names().map(str::to_string).collect()
    }

    fn dim_styles(&self) -> Vec<DimStyleRef> {
        self.dim_styles.iter().cloned().collect()
    }

    fn hatch_patterns(&self) -> Vec<String> {
        let patterns: IndexSet<&str> = self
            .entities()
            .filter_map(|e| match e {
                EntityType::Hatch(hatch) => Some(hatch.pattern.as_str()),
                _ => None,
            })
            .collect();
        patterns.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Circle, DimensionLinear, Entity, Hatch, Line};
    use crate::types::Vector2;
    use crate::types::Vector3;
    use std::sync::Arc;

    #[test]
    fn test_default_tables() {
        let doc = CadDocument::new();
        assert!(Arc::ptr_eq(doc.layer("0").unwrap(), &DEFAULT_LAYER));
        assert!(doc.line_types.contains("Continuous"));
        assert!(doc.text_styles.contains("Standard"));
        assert!(doc.dim_style("standard").is_some());
        assert_eq!(doc.entity_count(), 0);
    }

    #[test]
    fn test_add_entity_assigns_handles() {
        let mut doc = CadDocument::new();
        let a = doc.add_entity(Line::new());
        let b = doc.add_entity(Circle::new());
        assert!(!a.is_null());
        assert!(a < b);
        assert_eq!(doc.get_entity(b).map(|e| e.as_entity().handle()), Some(b));

        let mut explicit = Line::new();
        explicit.set_handle(Handle::new(100));
        assert_eq!(doc.add_entity(explicit), Handle::new(100));
        assert_eq!(doc.add_entity(Line::new()), Handle::new(101));
    }

    #[test]
    fn test_entities_keep_insertion_order() {
        let mut doc = CadDocument::new();
        let handles: Vec<Handle> = (0..5).map(|_| doc.add_entity(Line::new())).collect();
        doc.remove_entity(handles[1]);
        let order: Vec<Handle> = doc.entities().map(|e| e.as_entity().handle()).collect();
        assert_eq!(order, vec![handles[0], handles[2], handles[3], handles[4]]);
    }

    #[test]
    fn test_add_layer_returns_existing() {
        let mut doc = CadDocument::new();
        let walls = doc.add_layer(Layer::new("Walls"));
        let again = doc.add_layer(Layer::new("WALLS"));
        assert!(Arc::ptr_eq(&walls, &again));
        assert_eq!(doc.layers.len(), 2);
    }

    #[test]
    fn test_entity_references_are_registered() {
        let mut doc = CadDocument::new();
        let mut line = Line::new();
        line.set_layer(Layer::new("Doors").into_ref());
        doc.add_entity(line);
        assert!(doc.layer("Doors").is_some());

        let style = DimStyle::new("Arch").into_ref();
        let mut dim = DimensionLinear::new(Vector3::ZERO, Vector3::UNIT_X, style.clone());
        dim.base.style_override = Some(DimStyle::new("Arch").into_ref());
        doc.add_entity(dim);
        assert!(Arc::ptr_eq(doc.dim_style("Arch").unwrap(), &style));
        assert_eq!(doc.dim_styles.len(), 2);
    }

    #[test]
    fn test_catalog() {
        let mut doc = CadDocument::new();
        doc.block_records.add(BlockRecord::new("Door"));
        doc.block_records.add(BlockRecord::new("*D12"));
        doc.line_types.add(LineType::dashed());

        assert_eq!(ChoiceCatalog::block_names(&doc), vec!["Door".to_string()]);
        assert_eq!(
            ChoiceCatalog::line_types(&doc),
            vec!["Continuous".to_string(), "Dashed".to_string()]
        );
        assert_eq!(ChoiceCatalog::layers(&doc).len(), 1);
    }

    #[test]
    fn test_hatch_patterns_in_first_use_order() {
        let mut doc = CadDocument::new();
        let outline = vec![Vector2::ZERO, Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)];
        doc.add_entity(Hatch::patterned("ANSI31", outline.clone()));
        doc.add_entity(Hatch::solid(outline.clone()));
        doc.add_entity(Hatch::patterned("ANSI31", outline));
        doc.add_entity(Line::new());
        assert_eq!(
            ChoiceCatalog::hatch_patterns(&doc),
            vec!["ANSI31".to_string(), "SOLID".to_string()]
        );
    }

    #[test]
    fn test_active_ucs() {
        let mut doc = CadDocument::new();
        doc.ucss.add(Ucs::rotated("Turned", Vector3::ZERO, std::f64::consts::FRAC_PI_2));
        assert!(doc.set_active_ucs("turned"));
        assert_eq!(doc.active_ucs().name, "Turned");
        assert!(!doc.set_active_ucs("Missing"));
        assert!(doc.set_active_ucs("World"));
        let p = doc.coordinate_mapper().to_user(Vector3::new(3.0, 4.0, 0.0));
        assert_eq!((p.x, p.y), (3.0, 4.0));
    }
}
