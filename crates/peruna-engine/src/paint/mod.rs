//! Color model shared by the draw state and the renderer.
//!
//! Colors are straight alpha; the shape pipeline blends with `SrcAlpha`.

pub mod color;

pub use color::Color;
