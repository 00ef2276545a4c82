//! Block record table entry

use super::TableEntry;
use crate::types::Vector3;

/// A block definition
///
/// Only the name and base point matter here; inserts refer to blocks
/// by name.
#[derive(Debug, Clone)]
pub struct BlockRecord {
    /// Block name
    pub name: String,
    /// Base point of the block
    pub base_point: Vector3,
    /// Block is anonymous (generated, e.g. for dimensions or hatches)
    pub anonymous: bool,
}

impl BlockRecord {
    /// Create a new block record
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let anonymous = name.starts_with('*');
        BlockRecord {
            name,
            base_point: Vector3::ZERO,
            anonymous,
        }
    }

    /// Builder-style base point
    pub fn with_base_point(mut self, base_point: Vector3) -> Self {
        self.base_point = base_point;
        self
    }

    /// Check if this is a model or paper space block
    pub fn is_layout(&self) -> bool {
        let upper = self.name.to_uppercase();
        upper.starts_with("*MODEL_SPACE") || upper.starts_with("*PAPER_SPACE")
    }
}

impl TableEntry for BlockRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.is_layout()
    }
}
