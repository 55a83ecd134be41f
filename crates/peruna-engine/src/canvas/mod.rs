//! Draw-state context exposed to sketches.

mod context;
mod state;

pub use context::Canvas;
pub use state::{DrawState, DEFAULT_STROKE_WIDTH};
