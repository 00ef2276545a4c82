//! Circle entity

use std::f64::consts::PI;

use super::{Entity, EntityCommon};
use crate::types::Vector3;

/// A circle entity
#[derive(Debug, Clone)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Radius
    pub radius: f64,
}

impl Circle {
    /// Create a new unit circle at the origin
    pub fn new() -> Self {
        Circle {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 1.0,
        }
    }

    /// Create a circle from center and radius
    pub fn from_center_radius(center: Vector3, radius: f64) -> Self {
        Circle {
            center,
            radius,
            ..Self::new()
        }
    }

    /// Diameter of the circle
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Circumference of the circle
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Area of the circle
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Circle {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "CIRCLE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_measures() {
        let circle = Circle::from_center_radius(Vector3::new(1.0, 1.0, 0.0), 2.0);
        assert_eq!(circle.diameter(), 4.0);
        assert!((circle.circumference() - 4.0 * PI).abs() < 1e-12);
        assert!((circle.area() - 4.0 * PI).abs() < 1e-12);
    }
}
