//! Window host.
//!
//! Owns the `winit` event loop and window, wires the scheduler's redraw
//! requests to window repaints and renders the shared canvas on each repaint.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, UserEvent};
