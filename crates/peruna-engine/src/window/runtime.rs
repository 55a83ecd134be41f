use std::sync::Arc;

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use parking_lot::Mutex;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy};
use winit::window::{Window, WindowId};

use crate::canvas::Canvas;
use crate::coords::CanvasSize;
use crate::core::Sketch;
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::render::{RenderCtx, RenderTarget, ShapeRenderer};
use crate::time::{Scheduler, SchedulerConfig, SharedCanvas};

/// Window and animation settings.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Canvas size in logical pixels.
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
    pub scheduler: SchedulerConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "peruna".to_string(),
            initial_size: LogicalSize::new(600.0, 600.0),
            resizable: true,
            scheduler: SchedulerConfig::default(),
        }
    }
}

/// Events posted to the event loop from other threads.
#[derive(Debug, Clone, Copy)]
pub enum UserEvent {
    /// A scheduler tick finished; repaint.
    Redraw,
}

/// Hosts one sketch in one window until the window closes.
pub struct Runtime;

impl Runtime {
    /// Opens the window, runs `setup` once and then `draw` at the configured rate.
    ///
    /// Blocks until the window is closed. Errors if the window or GPU cannot be
    /// created.
    pub fn run<S: Sketch>(config: RuntimeConfig, gpu_init: GpuInit, sketch: S) -> Result<()> {
        let event_loop = EventLoop::<UserEvent>::with_user_event()
            .build()
            .context("failed to create winit EventLoop")?;

        let mut state = AppState::new(config, gpu_init, sketch, event_loop.create_proxy());

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<S: Sketch> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    sketch: Option<S>,
    proxy: EventLoopProxy<UserEvent>,

    canvas: SharedCanvas,
    scheduler: Scheduler,
    renderer: ShapeRenderer,
    entry: Option<WindowEntry>,

    failure: Option<anyhow::Error>,
}

impl<S: Sketch> AppState<S> {
    fn new(
        config: RuntimeConfig,
        gpu_init: GpuInit,
        sketch: S,
        proxy: EventLoopProxy<UserEvent>,
    ) -> Self {
        let size = CanvasSize::new(
            config.initial_size.width as f32,
            config.initial_size.height as f32,
        );
        let canvas: SharedCanvas = Arc::new(Mutex::new(Canvas::new(size)));
        let scheduler = Scheduler::new(Arc::clone(&canvas), config.scheduler);

        Self {
            config,
            gpu_init,
            sketch: Some(sketch),
            proxy,
            canvas,
            scheduler,
            renderer: ShapeRenderer::new(),
            entry: None,
            failure: None,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        self.sync_canvas_size(&window, window.inner_size());

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        self.entry = Some(entry);
        Ok(())
    }

    fn sync_canvas_size(&self, window: &Window, physical: PhysicalSize<u32>) {
        if physical.width == 0 || physical.height == 0 {
            return;
        }
        let logical = physical.to_logical::<f32>(window.scale_factor());
        self.canvas.lock().resize(logical.width, logical.height);
        log::debug!("canvas resized to {}x{}", logical.width, logical.height);
    }

    fn start_sketch(&mut self) {
        let Some(sketch) = self.sketch.take() else { return };
        let proxy = self.proxy.clone();
        self.scheduler.start(sketch, move || {
            // Fails only once the loop has exited.
            let _ = proxy.send_event(UserEvent::Redraw);
        });
    }

    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        self.scheduler.stop();
        self.entry = None;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.shut_down(event_loop);
    }

    fn redraw(&mut self) -> Option<SurfaceErrorAction> {
        let entry = self.entry.as_mut()?;
        let canvas = self.canvas.lock();
        let renderer = &mut self.renderer;

        entry.with_gpu_mut(|gpu| {
            if !gpu.is_drawable() {
                return None;
            }

            let mut frame = match gpu.begin_frame() {
                Ok(frame) => frame,
                Err(err) => {
                    log::warn!("surface acquire failed: {err}");
                    return Some(gpu.handle_surface_error(err));
                }
            };

            {
                let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());
                let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
                renderer.render(&ctx, &mut target, canvas.frame(), canvas.background());
            }

            gpu.submit(frame);
            None
        })
    }
}

impl<S: Sketch> ApplicationHandler<UserEvent> for AppState<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(err) = self.create_window_entry(event_loop) {
            self.fail(event_loop, err);
            return;
        }

        self.start_sketch();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Redraw => {
                if let Some(entry) = self.entry.as_ref() {
                    entry.with_window(|w| w.request_redraw());
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.shut_down(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                let Some(entry) = self.entry.as_mut() else { return };
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                if let Some(entry) = self.entry.as_ref() {
                    entry.with_window(|w| {
                        self.sync_canvas_size(w, new_size);
                        w.request_redraw();
                    });
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let Some(entry) = self.entry.as_mut() else { return };
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                if let Some(entry) = self.entry.as_ref() {
                    entry.with_window(|w| self.sync_canvas_size(w, new_size));
                }
            }

            WindowEvent::RedrawRequested => match self.redraw() {
                Some(SurfaceErrorAction::Fatal) => {
                    self.fail(event_loop, anyhow::anyhow!("GPU out of memory"));
                }
                Some(SurfaceErrorAction::Reconfigured) => {
                    if let Some(entry) = self.entry.as_ref() {
                        entry.with_window(|w| w.request_redraw());
                    }
                }
                Some(SurfaceErrorAction::SkipFrame) | None => {}
            },

            _ => {}
        }
    }
}
