//! Line entity

use super::{Entity, EntityCommon};
use crate::types::angle::correct_angle;
use crate::types::Vector3;

/// A line entity defined by two endpoints
#[derive(Debug, Clone)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point of the line
    pub start: Vector3,
    /// End point of the line
    pub end: Vector3,
}

impl Line {
    /// Create a new line from origin to origin
    pub fn new() -> Self {
        Line {
            common: EntityCommon::new(),
            start: Vector3::ZERO,
            end: Vector3::ZERO,
        }
    }

    /// Create a new line between two points
    pub fn from_points(start: Vector3, end: Vector3) -> Self {
        Line {
            start,
            end,
            ..Self::new()
        }
    }

    /// Create a new line from 2D coordinates
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Line::from_points(Vector3::from_xy(x1, y1), Vector3::from_xy(x2, y2))
    }

    /// Get the length of the line
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Get the midpoint of the line
    pub fn midpoint(&self) -> Vector3 {
        self.start.midpoint(&self.end)
    }

    /// Direction angle from start to end point, in `[0, 2π)`
    pub fn angle1(&self) -> f64 {
        correct_angle(self.start.angle_to(&self.end))
    }

    /// Direction angle from end to start point, in `[0, 2π)`
    pub fn angle2(&self) -> f64 {
        correct_angle(self.end.angle_to(&self.start))
    }

    /// Horizontal distance between the endpoints
    pub fn delta_x(&self) -> f64 {
        (self.end.x - self.start.x).abs()
    }

    /// Vertical distance between the endpoints
    pub fn delta_y(&self) -> f64 {
        (self.end.y - self.start.y).abs()
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Line {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "LINE"
    }
}
