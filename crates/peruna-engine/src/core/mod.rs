//! Engine-facing contracts.
//!
//! Defines the interface between the scheduler/runtime and user sketch code.

mod sketch;

pub use sketch::{FnSketch, Sketch};
