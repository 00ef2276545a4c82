//! Insert entity (block reference)

use super::{Entity, EntityCommon};
use crate::types::Vector3;

/// A block reference, optionally arrayed in rows and columns
#[derive(Debug, Clone)]
pub struct Insert {
    /// Common entity data
    pub common: EntityCommon,
    /// Name of the referenced block
    pub block_name: String,
    /// Insertion point
    pub insert_point: Vector3,
    /// X scale factor
    pub x_scale: f64,
    /// Y scale factor
    pub y_scale: f64,
    /// Rotation angle in radians
    pub rotation: f64,
    /// Number of columns
    pub column_count: u16,
    /// Number of rows
    pub row_count: u16,
    /// Column spacing
    pub column_spacing: f64,
    /// Row spacing
    pub row_spacing: f64,
}

impl Insert {
    /// Create a new insert of a block at a point
    pub fn new(block_name: impl Into<String>, insert_point: Vector3) -> Self {
        Insert {
            common: EntityCommon::new(),
            block_name: block_name.into(),
            insert_point,
            x_scale: 1.0,
            y_scale: 1.0,
            rotation: 0.0,
            column_count: 1,
            row_count: 1,
            column_spacing: 0.0,
            row_spacing: 0.0,
        }
    }

    /// Builder-style uniform scale
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.x_scale = scale;
        self.y_scale = scale;
        self
    }

    /// Builder-style rotation
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Check if this is an array insert
    pub fn is_array(&self) -> bool {
        self.column_count > 1 || self.row_count > 1
    }
}

impl Entity for Insert {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "INSERT"
    }
}
