//! wgpu device, queue and window surface.
//!
//! Frames are acquired with [`Gpu::begin_frame`], recorded by the renderer and
//! handed back to [`Gpu::submit`].

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
