//! Spline entity

use super::{Entity, EntityCommon};
use crate::types::Vector3;

/// A spline defined by control points and optionally fit points
#[derive(Debug, Clone)]
pub struct Spline {
    /// Common entity data
    pub common: EntityCommon,
    /// Degree of the spline curve
    pub degree: i32,
    /// Spline is closed
    pub closed: bool,
    /// Control points
    pub control_points: Vec<Vector3>,
    /// Fit points the curve passes through
    pub fit_points: Vec<Vector3>,
}

impl Spline {
    /// Create a new empty cubic spline
    pub fn new() -> Self {
        Spline {
            common: EntityCommon::new(),
            degree: 3,
            closed: false,
            control_points: Vec::new(),
            fit_points: Vec::new(),
        }
    }

    /// Create a cubic spline from control points
    pub fn from_control_points(control_points: Vec<Vector3>) -> Self {
        Spline {
            control_points,
            ..Self::new()
        }
    }

    /// Create a cubic spline from fit points
    pub fn from_fit_points(fit_points: Vec<Vector3>) -> Self {
        Spline {
            fit_points,
            ..Self::new()
        }
    }

    /// Check whether the shape is defined by fit points
    pub fn uses_fit_points(&self) -> bool {
        !self.fit_points.is_empty()
    }

    /// Points defining the shape: fit points if present, control points otherwise
    fn defining_points(&self) -> &[Vector3] {
        if self.uses_fit_points() {
            &self.fit_points
        } else {
            &self.control_points
        }
    }

    /// First defining point, or the origin for an empty spline
    pub fn start_point(&self) -> Vector3 {
        self.defining_points().first().copied().unwrap_or(Vector3::ZERO)
    }

    /// Last defining point, or the origin for an empty spline
    pub fn end_point(&self) -> Vector3 {
        if self.closed {
            return self.start_point();
        }
        self.defining_points().last().copied().unwrap_or(Vector3::ZERO)
    }
}

impl Default for Spline {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Spline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "SPLINE"
    }
}
