//! Lightweight polyline entity (2D polyline with bulges)

use super::{Entity, EntityCommon};
use crate::types::{Vector2, Vector3};

/// A vertex in a lightweight polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwVertex {
    /// Location of the vertex (2D)
    pub location: Vector2,
    /// Bulge of the segment starting at this vertex
    /// 0 = straight line, positive = counterclockwise arc, negative = clockwise arc
    /// bulge = tan(angle/4) where angle is the included angle
    pub bulge: f64,
}

impl LwVertex {
    /// Create a new vertex
    pub fn new(location: Vector2) -> Self {
        LwVertex {
            location,
            bulge: 0.0,
        }
    }

    /// Create a vertex from coordinates
    pub fn from_coords(x: f64, y: f64) -> Self {
        LwVertex::new(Vector2::new(x, y))
    }

    /// Create a vertex with a bulge
    pub fn with_bulge(location: Vector2, bulge: f64) -> Self {
        LwVertex { location, bulge }
    }
}

/// A lightweight (2D) polyline entity
#[derive(Debug, Clone)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertices of the polyline
    pub vertices: Vec<LwVertex>,
    /// Is the polyline closed?
    pub is_closed: bool,
    /// Elevation (Z coordinate)
    pub elevation: f64,
}

impl LwPolyline {
    /// Create a new empty lightweight polyline
    pub fn new() -> Self {
        LwPolyline {
            common: EntityCommon::new(),
            vertices: Vec::new(),
            is_closed: false,
            elevation: 0.0,
        }
    }

    /// Create an open polyline through the given points
    pub fn from_points(points: impl IntoIterator<Item = Vector2>) -> Self {
        LwPolyline {
            vertices: points.into_iter().map(LwVertex::new).collect(),
            ..Self::new()
        }
    }

    /// Add a vertex
    pub fn add_vertex(&mut self, vertex: LwVertex) {
        self.vertices.push(vertex);
    }

    /// Add a straight-segment vertex at a point
    pub fn add_point(&mut self, point: Vector2) {
        self.add_vertex(LwVertex::new(point));
    }

    /// Vertex locations lifted to the polyline's elevation
    pub fn points(&self) -> Vec<Vector3> {
        self.vertices
            .iter()
            .map(|v| v.location.with_z(self.elevation))
            .collect()
    }

    /// First vertex, or the origin for an empty polyline
    pub fn start_point(&self) -> Vector3 {
        self.vertices
            .first()
            .map(|v| v.location.with_z(self.elevation))
            .unwrap_or(Vector3::ZERO)
    }

    /// Last vertex, or the origin for an empty polyline
    pub fn end_point(&self) -> Vector3 {
        self.vertices
            .last()
            .map(|v| v.location.with_z(self.elevation))
            .unwrap_or(Vector3::ZERO)
    }

    /// Number of segments
    pub fn segment_count(&self) -> usize {
        match self.vertices.len() {
            0 | 1 => 0,
            n if self.is_closed => n,
            n => n - 1,
        }
    }

    /// Check whether any segment is an arc
    pub fn has_arc(&self) -> bool {
        let n = self.segment_count();
        self.vertices.iter().take(n).any(|v| v.bulge != 0.0)
    }

    /// Total length along straight and arc segments
    pub fn length(&self) -> f64 {
        let n = self.vertices.len();
        (0..self.segment_count())
            .map(|i| {
                let a = &self.vertices[i];
                let b = &self.vertices[(i + 1) % n];
                segment_length(a.location, b.location, a.bulge)
            })
            .sum()
    }
}

/// Length of one segment; a bulged segment is an arc of included angle
/// `4 * atan(bulge)`
fn segment_length(from: Vector2, to: Vector2, bulge: f64) -> f64 {
    let chord = from.distance(&to);
    if bulge == 0.0 {
        return chord;
    }
    let angle = 4.0 * bulge.atan().abs();
    let radius = chord / (2.0 * (angle / 2.0).sin());
    radius * angle
}

impl Default for LwPolyline {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for LwPolyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "LWPOLYLINE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn square() -> LwPolyline {
        LwPolyline::from_points([
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_open_and_closed_length() {
        let mut poly = square();
        assert_eq!(poly.segment_count(), 3);
        assert!((poly.length() - 3.0).abs() < 1e-12);

        poly.is_closed = true;
        assert_eq!(poly.segment_count(), 4);
        assert!((poly.length() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_bulged_segment_is_half_circle() {
        let mut poly = LwPolyline::new();
        poly.add_vertex(LwVertex::with_bulge(Vector2::new(0.0, 0.0), 1.0));
        poly.add_point(Vector2::new(2.0, 0.0));
        assert!(poly.has_arc());
        assert!((poly.length() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_endpoints() {
        let mut poly = square();
        poly.elevation = 2.0;
        assert_eq!(poly.start_point(), Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(poly.end_point(), Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(poly.points().len(), 4);
        assert_eq!(LwPolyline::new().start_point(), Vector3::ZERO);
    }

    #[test]
    fn test_trailing_bulge_ignored_when_open() {
        let mut poly = LwPolyline::new();
        poly.add_point(Vector2::new(0.0, 0.0));
        poly.add_vertex(LwVertex::with_bulge(Vector2::new(1.0, 0.0), 0.5));
        assert!(!poly.has_arc());
    }
}
