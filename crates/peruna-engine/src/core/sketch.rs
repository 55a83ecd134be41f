use crate::canvas::Canvas;

/// User drawing code driven by the [`Scheduler`](crate::time::Scheduler).
///
/// Both hooks run on the scheduling thread with exclusive access to the canvas.
pub trait Sketch: Send + 'static {
    /// Runs exactly once, immediately before the first tick. Never retried.
    fn setup(&mut self, canvas: &mut Canvas) {
        let _ = canvas;
    }

    /// Runs once per tick after the frame buffer has been cleared.
    ///
    /// `frame_count` starts at 0 on every `start` and increases by one per tick.
    fn draw(&mut self, canvas: &mut Canvas, frame_count: u64);
}

/// [`Sketch`] assembled from closures.
pub struct FnSketch<S, D> {
    setup: Option<S>,
    draw: D,
}

impl<D> FnSketch<fn(&mut Canvas), D>
where
    D: FnMut(&mut Canvas, u64) + Send + 'static,
{
    /// Draw callback only.
    pub fn new(draw: D) -> Self {
        Self { setup: None, draw }
    }
}

impl<S, D> FnSketch<S, D>
where
    S: FnOnce(&mut Canvas) + Send + 'static,
    D: FnMut(&mut Canvas, u64) + Send + 'static,
{
    pub fn with_setup(setup: S, draw: D) -> Self {
        Self { setup: Some(setup), draw }
    }
}

impl<S, D> Sketch for FnSketch<S, D>
where
    S: FnOnce(&mut Canvas) + Send + 'static,
    D: FnMut(&mut Canvas, u64) + Send + 'static,
{
    fn setup(&mut self, canvas: &mut Canvas) {
        if let Some(setup) = self.setup.take() {
            setup(canvas);
        }
    }

    fn draw(&mut self, canvas: &mut Canvas, frame_count: u64) {
        (self.draw)(canvas, frame_count);
    }
}
