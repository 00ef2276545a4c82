//! Ellipse entity

use std::f64::consts::{PI, TAU};

use super::{Entity, EntityCommon};
use crate::types::angle::correct_angle;
use crate::types::Vector3;

/// An ellipse or elliptical arc
///
/// The shape is given by the center, the major axis endpoint relative to
/// the center and the ratio of minor to major axis. Start and end
/// parameters of `0` and `2π` describe a full ellipse.
#[derive(Debug, Clone)]
pub struct Ellipse {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Major axis endpoint relative to the center
    pub major_axis: Vector3,
    /// Minor to major axis ratio
    pub minor_axis_ratio: f64,
    /// Start parameter in radians
    pub start_parameter: f64,
    /// End parameter in radians
    pub end_parameter: f64,
}

impl Ellipse {
    /// Create a new full ellipse at the origin
    pub fn new() -> Self {
        Ellipse {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            major_axis: Vector3::UNIT_X,
            minor_axis_ratio: 1.0,
            start_parameter: 0.0,
            end_parameter: TAU,
        }
    }

    /// Create a full ellipse from center, major axis and ratio
    pub fn from_center_axis_ratio(center: Vector3, major_axis: Vector3, ratio: f64) -> Self {
        Ellipse {
            center,
            major_axis,
            minor_axis_ratio: ratio,
            ..Self::new()
        }
    }

    /// Length of the major radius
    pub fn major_radius(&self) -> f64 {
        self.major_axis.length()
    }

    /// Length of the minor radius
    pub fn minor_radius(&self) -> f64 {
        self.major_radius() * self.minor_axis_ratio
    }

    /// Rotation of the major axis from the X axis
    pub fn rotation(&self) -> f64 {
        correct_angle(self.major_axis.angle_xy())
    }

    /// Check if this is a partial ellipse
    pub fn is_arc(&self) -> bool {
        let sweep = self.end_parameter - self.start_parameter;
        (sweep.abs() - TAU).abs() > 1e-10
    }

    /// Swept parameter range, in `(0, 2π]`
    pub fn sweep_parameter(&self) -> f64 {
        if !self.is_arc() {
            return TAU;
        }
        let sweep = correct_angle(self.end_parameter - self.start_parameter);
        if sweep == 0.0 {
            TAU
        } else {
            sweep
        }
    }

    /// Point at a parameter value
    pub fn point_at(&self, parameter: f64) -> Vector3 {
        let (sin_r, cos_r) = self.rotation().sin_cos();
        let a = self.major_radius() * parameter.cos();
        let b = self.minor_radius() * parameter.sin();
        Vector3::new(
            self.center.x + a * cos_r - b * sin_r,
            self.center.y + a * sin_r + b * cos_r,
            self.center.z,
        )
    }

    /// Start point
    pub fn start_point(&self) -> Vector3 {
        self.point_at(self.start_parameter)
    }

    /// End point
    pub fn end_point(&self) -> Vector3 {
        self.point_at(self.end_parameter)
    }

    /// Approximate perimeter (Ramanujan) scaled by the swept fraction
    pub fn circumference(&self) -> f64 {
        let a = self.major_radius();
        let b = self.minor_radius();
        let h = ((a - b) / (a + b)).powi(2);
        let full = PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()));
        full * self.sweep_parameter() / TAU
    }

    /// Area of the full ellipse
    pub fn area(&self) -> f64 {
        PI * self.major_radius() * self.minor_radius()
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Ellipse {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "ELLIPSE"
    }
}
