//! User Coordinate System table entry

use nalgebra::{Matrix3, Vector3 as NVector3};

use super::TableEntry;
use crate::matching::CoordinateMapper;
use crate::types::Vector3;

/// A User Coordinate System (UCS) table entry
///
/// Points are mapped from world coordinates into this frame by
/// subtracting the origin and projecting onto the normalized axes.
#[derive(Debug, Clone)]
pub struct Ucs {
    /// UCS name
    pub name: String,
    /// Origin point
    pub origin: Vector3,
    /// X-axis direction
    pub x_axis: Vector3,
    /// Y-axis direction
    pub y_axis: Vector3,
}

impl Ucs {
    /// Create a new UCS aligned with the world frame
    pub fn new(name: impl Into<String>) -> Self {
        Ucs {
            name: name.into(),
            origin: Vector3::ZERO,
            x_axis: Vector3::UNIT_X,
            y_axis: Vector3::UNIT_Y,
        }
    }

    /// Create a UCS with specific origin and axes
    pub fn from_origin_axes(
        name: impl Into<String>,
        origin: Vector3,
        x_axis: Vector3,
        y_axis: Vector3,
    ) -> Self {
        Ucs {
            name: name.into(),
            origin,
            x_axis,
            y_axis,
        }
    }

    /// Create a UCS that rotates points counter-clockwise by `angle` radians
    ///
    /// A world point is shifted by the origin and then rotated by `angle`
    /// to give its user coordinates, so the user X axis points along world
    /// direction `-angle`. With `angle = π/2` the world point (10, 0)
    /// becomes user (0, 10).
    pub fn rotated(name: impl Into<String>, origin: Vector3, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_origin_axes(
            name,
            origin,
            Vector3::new(cos, -sin, 0.0),
            Vector3::new(sin, cos, 0.0),
        )
    }

    /// World direction of the user X axis, in the XY plane
    pub fn x_axis_angle(&self) -> f64 {
        self.x_axis.y.atan2(self.x_axis.x)
    }

    /// Get the Z-axis direction (cross product of X and Y)
    pub fn z_axis(&self) -> Vector3 {
        self.x_axis.cross(&self.y_axis)
    }

    /// World-to-user rotation: rows are the normalized axes
    fn world_to_user(&self) -> Matrix3<f64> {
        let row = |v: Vector3| {
            let n = v.normalize();
            NVector3::new(n.x, n.y, n.z).transpose()
        };
        Matrix3::from_rows(&[row(self.x_axis), row(self.y_axis), row(self.z_axis())])
    }
}

impl CoordinateMapper for Ucs {
    fn to_user(&self, point: Vector3) -> Vector3 {
        let rel = point - self.origin;
        let mapped = self.world_to_user() * NVector3::new(rel.x, rel.y, rel.z);
        Vector3::new(mapped.x, mapped.y, mapped.z)
    }

    fn to_world_angle(&self, angle: f64) -> f64 {
        angle + self.x_axis_angle()
    }
}

impl TableEntry for Ucs {
    fn name(&self) -> &str {
        &self.name
    }
}
