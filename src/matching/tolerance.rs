//! Default tolerances callers pass to matchers

use super::kind::{PropertyValueKind, ToleranceCategory};

/// Tolerances used when a request does not give one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceDefaults {
    /// Plain numbers
    pub numeric: f64,
    /// Coordinates and lengths
    pub distance: f64,
    /// Angles and inclinations, in radians
    pub angle: f64,
}

impl ToleranceDefaults {
    pub const fn new(numeric: f64, distance: f64, angle: f64) -> Self {
        ToleranceDefaults {
            numeric,
            distance,
            angle,
        }
    }

    /// Tolerance for values of `kind`; discrete kinds get zero
    pub fn for_kind(&self, kind: PropertyValueKind) -> f64 {
        match kind.tolerance_category() {
            ToleranceCategory::Exact => 0.0,
            ToleranceCategory::Numeric => self.numeric,
            ToleranceCategory::Distance => self.distance,
            ToleranceCategory::Angle => self.angle,
        }
    }
}

impl Default for ToleranceDefaults {
    fn default() -> Self {
        Self::new(1e-10, 1e-10, 1e-8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_kind() {
        let defaults = ToleranceDefaults::default();
        assert_eq!(defaults.for_kind(PropertyValueKind::Layer), 0.0);
        assert_eq!(defaults.for_kind(PropertyValueKind::Length), 1e-10);
        assert_eq!(defaults.for_kind(PropertyValueKind::Angle), 1e-8);
        assert_eq!(defaults.for_kind(PropertyValueKind::Inclination), 1e-8);
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = ToleranceDefaults::new(0.5, 0.01, 0.1);
        assert_eq!(defaults.for_kind(PropertyValueKind::CoordX), 0.01);
        assert_eq!(defaults.for_kind(PropertyValueKind::Int), 0.0);
    }
}
