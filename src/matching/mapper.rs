//! Mapping stored coordinates into the active user frame

use crate::types::Vector3;

/// Maps a world-space point into the user coordinate frame
///
/// Coordinate properties are always compared after this mapping. The
/// mapper is queried for every point; results are never cached.
pub trait CoordinateMapper {
    /// Map a world-space point into user space
    fn to_user(&self, point: Vector3) -> Vector3;

    /// Convert a direction angle entered in user space to world space
    ///
    /// Stored angles stay in world space; a target direction typed in the
    /// user frame is converted once before matching. Frames that are not
    /// rotated keep the default.
    fn to_world_angle(&self, angle: f64) -> f64 {
        angle
    }
}

/// The identity mapping, for a user frame equal to the world frame
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldMapper;

impl CoordinateMapper for WorldMapper {
    fn to_user(&self, point: Vector3) -> Vector3 {
        point
    }
}

impl<F> CoordinateMapper for F
where
    F: Fn(Vector3) -> Vector3,
{
    fn to_user(&self, point: Vector3) -> Vector3 {
        self(point)
    }
}

/// Which component of a mapped point a coordinate property compares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Select this component of `point`
    #[inline]
    pub fn component(self, point: Vector3) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_mapper_is_identity() {
        let p = Vector3::new(1.0, -2.0, 3.0);
        assert_eq!(WorldMapper.to_user(p), p);
    }

    #[test]
    fn test_unrotated_mappers_keep_angles() {
        assert_eq!(WorldMapper.to_world_angle(0.75), 0.75);
        let shift = |p: Vector3| p - Vector3::new(10.0, 0.0, 0.0);
        assert_eq!(shift.to_world_angle(-2.0), -2.0);
    }

    #[test]
    fn test_closure_mapper() {
        let shift = |p: Vector3| p - Vector3::new(10.0, 0.0, 0.0);
        assert_eq!(shift.to_user(Vector3::new(12.0, 1.0, 0.0)), Vector3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn test_axis_component() {
        let p = Vector3::new(4.0, 7.0, 0.0);
        assert_eq!(Axis::X.component(p), 4.0);
        assert_eq!(Axis::Y.component(p), 7.0);
    }
}
