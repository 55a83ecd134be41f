//! GPU rendering of a frame buffer.
//!
//! Geometry arrives already tessellated in NDC. The renderer uploads every
//! shape's vertices into one buffer and issues one draw per shape, in buffer
//! order, each with its own fill/stroke/transform uniforms.

mod batch;
mod ctx;
mod shape_renderer;

pub use ctx::{RenderCtx, RenderTarget};
pub use shape_renderer::ShapeRenderer;
