//! Named symbol tables: layers, line types, text and dimension styles,
//! block records and user coordinate systems

use std::sync::Arc;

use indexmap::IndexMap;

pub mod block_record;
pub mod dimstyle;
pub mod layer;
pub mod linetype;
pub mod textstyle;
pub mod ucs;

pub use block_record::BlockRecord;
pub use dimstyle::{DimStyle, DimStyleRef, ToleranceDisplay, ZeroSuppression};
pub use layer::{Layer, LayerFlags, LayerRef};
pub use linetype::LineType;
pub use textstyle::TextStyle;
pub use ucs::Ucs;

/// Base trait for all table entries
pub trait TableEntry {
    /// Get the entry's name
    fn name(&self) -> &str;

    /// Check if this is a standard/default entry
    fn is_standard(&self) -> bool {
        false
    }
}

/// Shared entries are looked up by the name of what they point to
impl<T: TableEntry> TableEntry for Arc<T> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    fn is_standard(&self) -> bool {
        self.as_ref().is_standard()
    }
}

/// Generic table for storing named entries
///
/// Names are case-insensitive; iteration follows insertion order, which
/// is also the order choices are offered in.
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    entries: IndexMap<String, T>,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Table {
            entries: IndexMap::new(),
        }
    }

    /// Add an entry, returning `false` if the name is already taken
    pub fn add(&mut self, entry: T) -> bool {
        let key = entry.name().to_uppercase();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, entry);
        true
    }

    /// Get an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.to_uppercase())
    }

    /// Check if an entry exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Get all entry names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.name())
    }
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_add_and_get() {
        let mut table = Table::new();
        assert!(table.add(LineType::new("Dashed")));
        assert!(table.contains("DASHED"));
        assert_eq!(table.get("dashed").map(|t| t.name()), Some("Dashed"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_duplicate_entry() {
        let mut table = Table::new();
        assert!(table.add(TextStyle::new("Standard")));
        assert!(!table.add(TextStyle::new("STANDARD")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_shared_entries_keep_order() {
        let mut table: Table<LayerRef> = Table::new();
        table.add(Arc::new(Layer::new("Walls")));
        table.add(Arc::new(Layer::layer_0()));
        table.add(Arc::new(Layer::new("Doors")));
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["Walls", "0", "Doors"]);
        assert!(table.get("0").is_some_and(|l| l.is_standard()));
    }
}
