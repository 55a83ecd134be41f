//! Peruna engine crate.
//!
//! A small immediate-mode 2D sketching runtime: sketches draw lines, rects,
//! triangles and ellipses into a canvas each tick, and the window host
//! renders the resulting frame with wgpu.
//!
//! Pure pieces (coordinates, tessellation, noise, the frame buffer, the
//! scheduler) have no GPU or window dependency.

pub mod canvas;
pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod math;
pub mod noise;
pub mod paint;
pub mod render;
pub mod scene;
pub mod shape;
pub mod time;
pub mod window;

pub use canvas::Canvas;
pub use core::{FnSketch, Sketch};
pub use paint::Color;
