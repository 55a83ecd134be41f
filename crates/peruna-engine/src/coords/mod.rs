//! Coordinate spaces shared by the tessellator and the renderer.
//!
//! Canvas space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! NDC:
//! - Origin at the canvas center, range `[-1, 1]` on both axes
//! - +Y up
//!
//! Conversion happens on the CPU, once per shape, at tessellation time.

mod canvas_size;
mod ndc;
mod vec2;

pub use canvas_size::CanvasSize;
pub use ndc::{from_ndc, length_to_ndc, to_ndc};
pub use vec2::Vec2;
