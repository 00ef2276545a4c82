//! Value types shared by entities, tables and the matching engine

pub mod angle;
pub mod color;
pub mod handle;
pub mod line_weight;
pub mod pen;
pub mod vector;

pub use color::Color;
pub use handle::Handle;
pub use line_weight::LineWeight;
pub use pen::{LineTypeRef, Pen};
pub use vector::{Vector2, Vector3};
