//! Per-frame shape storage.
//!
//! Responsibilities:
//! - hold tessellated shapes for exactly one tick
//! - keep strict call order (no z-index, no sorting)

mod frame;

pub use frame::FrameBuffer;
