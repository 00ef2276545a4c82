//! Hatch entity

use super::{Entity, EntityCommon};
use crate::types::Vector2;

/// Name of the solid fill pattern
pub const SOLID_PATTERN: &str = "SOLID";

/// A closed boundary of a hatch, as polygon vertices in the hatch plane
#[derive(Debug, Clone, Default)]
pub struct BoundaryLoop {
    /// Vertices; the loop closes back to the first one
    pub vertices: Vec<Vector2>,
    /// Outermost boundary; other loops are holes
    pub is_outer: bool,
}

impl BoundaryLoop {
    /// Create an outer boundary
    pub fn outer(vertices: Vec<Vector2>) -> Self {
        BoundaryLoop {
            vertices,
            is_outer: true,
        }
    }

    /// Create a hole
    pub fn hole(vertices: Vec<Vector2>) -> Self {
        BoundaryLoop {
            vertices,
            is_outer: false,
        }
    }

    /// Enclosed area, regardless of winding
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() / 2.0
    }
}

/// A filled or patterned region
#[derive(Debug, Clone)]
pub struct Hatch {
    /// Common entity data
    pub common: EntityCommon,
    /// Pattern name
    pub pattern: String,
    /// Solid fill
    pub is_solid: bool,
    /// Linked to its boundary objects
    pub is_associative: bool,
    /// Pattern angle in radians
    pub pattern_angle: f64,
    /// Pattern scale
    pub pattern_scale: f64,
    /// Boundary loops
    pub loops: Vec<BoundaryLoop>,
}

impl Hatch {
    /// Create a solid hatch without boundaries
    pub fn new() -> Self {
        Hatch {
            common: EntityCommon::new(),
            pattern: SOLID_PATTERN.to_string(),
            is_solid: true,
            is_associative: false,
            pattern_angle: 0.0,
            pattern_scale: 1.0,
            loops: Vec::new(),
        }
    }

    /// Create a solid hatch filling `outer`
    pub fn solid(outer: Vec<Vector2>) -> Self {
        Hatch {
            loops: vec![BoundaryLoop::outer(outer)],
            ..Self::new()
        }
    }

    /// Create a patterned hatch filling `outer`
    pub fn patterned(pattern: impl Into<String>, outer: Vec<Vector2>) -> Self {
        Hatch {
            pattern: pattern.into(),
            is_solid: false,
            ..Self::solid(outer)
        }
    }

    /// Builder-style hole
    pub fn with_hole(mut self, vertices: Vec<Vector2>) -> Self {
        self.loops.push(BoundaryLoop::hole(vertices));
        self
    }

    /// Number of boundary loops
    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    /// Filled area: outer loops minus holes
    pub fn area(&self) -> f64 {
        let area: f64 = self
            .loops
            .iter()
            .map(|l| if l.is_outer { l.area() } else { -l.area() })
            .sum();
        area.max(0.0)
    }
}

impl Default for Hatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Hatch {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "HATCH"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, side: f64) -> Vec<Vector2> {
        vec![
            Vector2::new(x, y),
            Vector2::new(x + side, y),
            Vector2::new(x + side, y + side),
            Vector2::new(x, y + side),
        ]
    }

    #[test]
    fn test_area_subtracts_holes() {
        let hatch = Hatch::solid(square(0.0, 0.0, 10.0)).with_hole(square(2.0, 2.0, 3.0));
        assert_eq!(hatch.loop_count(), 2);
        assert!((hatch.area() - 91.0).abs() < 1e-9);
    }

    #[test]
    fn test_winding_does_not_matter() {
        let mut clockwise = square(0.0, 0.0, 4.0);
        clockwise.reverse();
        assert!((BoundaryLoop::outer(clockwise).area() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_loop() {
        let open = BoundaryLoop::outer(vec![Vector2::ZERO, Vector2::new(1.0, 1.0)]);
        assert_eq!(open.area(), 0.0);
        assert_eq!(Hatch::new().area(), 0.0);
    }

    #[test]
    fn test_patterned() {
        let hatch = Hatch::patterned("ANSI31", square(0.0, 0.0, 1.0));
        assert!(!hatch.is_solid);
        assert_eq!(hatch.pattern, "ANSI31");
        assert_eq!(Hatch::new().pattern, SOLID_PATTERN);
    }
}
