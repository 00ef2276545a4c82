//! Arc entity

use std::f64::consts::TAU;

use super::{Entity, EntityCommon};
use crate::types::angle::correct_angle;
use crate::types::Vector3;

/// A circular arc, running counterclockwise from start to end angle
/// unless reversed
#[derive(Debug, Clone)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Radius
    pub radius: f64,
    /// Start angle in radians
    pub start_angle: f64,
    /// End angle in radians
    pub end_angle: f64,
    /// Arc runs clockwise
    pub reversed: bool,
}

impl Arc {
    /// Create a new unit quarter arc at the origin
    pub fn new() -> Self {
        Arc {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 1.0,
            start_angle: 0.0,
            end_angle: std::f64::consts::FRAC_PI_2,
            reversed: false,
        }
    }

    /// Create an arc from center, radius and angles
    pub fn from_center_radius_angles(
        center: Vector3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ..Self::new()
        }
    }

    /// Start point of the arc
    pub fn start_point(&self) -> Vector3 {
        self.center.polar(self.radius, self.start_angle)
    }

    /// End point of the arc
    pub fn end_point(&self) -> Vector3 {
        self.center.polar(self.radius, self.end_angle)
    }

    /// Swept angle, in `(0, 2π]`
    pub fn sweep_angle(&self) -> f64 {
        let sweep = if self.reversed {
            correct_angle(self.start_angle - self.end_angle)
        } else {
            correct_angle(self.end_angle - self.start_angle)
        };
        if sweep == 0.0 {
            TAU
        } else {
            sweep
        }
    }

    /// Diameter of the underlying circle
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Length along the arc
    pub fn arc_length(&self) -> f64 {
        self.radius * self.sweep_angle()
    }

    /// Distance between start and end point
    pub fn chord(&self) -> f64 {
        self.start_point().distance(&self.end_point())
    }

    /// Height of the arc over its chord
    pub fn sagitta(&self) -> f64 {
        self.radius * (1.0 - (self.sweep_angle() / 2.0).cos())
    }

    /// Bulge as used by polyline segments, negative for clockwise arcs
    pub fn bulge(&self) -> f64 {
        let bulge = (self.sweep_angle() / 4.0).tan();
        if self.reversed {
            -bulge
        } else {
            bulge
        }
    }
}

impl Default for Arc {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Arc {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "ARC"
    }
}
