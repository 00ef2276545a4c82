//! Raster image entity

use super::{Entity, EntityCommon};
use crate::types::angle::correct_angle;
use crate::types::{Vector2, Vector3};

/// A raster image placed in the drawing
///
/// `u_vector` and `v_vector` span a single pixel: their lengths are the
/// world size of a pixel and the direction of `u_vector` is the image
/// rotation.
#[derive(Debug, Clone)]
pub struct RasterImage {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point (lower left corner)
    pub insertion_point: Vector3,
    /// Width direction of one pixel
    pub u_vector: Vector3,
    /// Height direction of one pixel
    pub v_vector: Vector3,
    /// Size in pixels
    pub size: Vector2,
    /// Brightness (0-100)
    pub brightness: u8,
    /// Contrast (0-100)
    pub contrast: u8,
    /// Fade (0-100)
    pub fade: u8,
    /// Image file path
    pub file_path: String,
}

impl RasterImage {
    /// Create an unrotated image with one world unit per pixel
    pub fn new(file_path: impl Into<String>, insertion_point: Vector3, width_pixels: f64, height_pixels: f64) -> Self {
        RasterImage {
            common: EntityCommon::new(),
            insertion_point,
            u_vector: Vector3::UNIT_X,
            v_vector: Vector3::UNIT_Y,
            size: Vector2::new(width_pixels, height_pixels),
            brightness: 50,
            contrast: 50,
            fade: 0,
            file_path: file_path.into(),
        }
    }

    /// Builder-style pixel scale and rotation
    pub fn with_placement(mut self, scale: f64, rotation: f64) -> Self {
        let u = Vector3::ZERO.polar(scale, rotation);
        self.u_vector = u;
        self.v_vector = Vector3::new(-u.y, u.x, 0.0);
        self
    }

    /// World size of one pixel
    pub fn scale(&self) -> f64 {
        self.u_vector.length()
    }

    /// Rotation of the image, in `[0, 2π)`
    pub fn rotation(&self) -> f64 {
        correct_angle(self.u_vector.angle_xy())
    }

    /// Width in world units
    pub fn width(&self) -> f64 {
        self.u_vector.length() * self.size.x
    }

    /// Height in world units
    pub fn height(&self) -> f64 {
        self.v_vector.length() * self.size.y
    }
}

impl Entity for RasterImage {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "IMAGE"
    }
}
