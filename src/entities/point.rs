//! Point entity

use super::{Entity, EntityCommon};
use crate::types::Vector3;

/// A point entity
#[derive(Debug, Clone)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Location of the point
    pub location: Vector3,
}

impl Point {
    /// Create a new point at the origin
    pub fn new() -> Self {
        Point {
            common: EntityCommon::new(),
            location: Vector3::ZERO,
        }
    }

    /// Create a new point at a specific location
    pub fn at(location: Vector3) -> Self {
        Point {
            location,
            ..Self::new()
        }
    }

    /// Create a new point from coordinates
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Point::at(Vector3::new(x, y, z))
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Point {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "POINT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let point = Point::from_coords(1.0, 2.0, 3.0);
        assert_eq!(point.location, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(point.entity_type(), "POINT");
    }
}
