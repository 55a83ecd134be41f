//! Frame timing and the fixed-rate animation scheduler.
//!
//! - `FrameClock` paces ticks on a fixed grid.
//! - `Scheduler` owns the single scheduling thread: clear, draw, count, redraw.

mod frame_clock;
mod scheduler;

pub use frame_clock::{FrameClock, FrameTime};
pub use scheduler::{RedrawRequest, Scheduler, SchedulerConfig, SchedulerState, SharedCanvas};
