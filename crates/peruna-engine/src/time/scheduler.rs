use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use parking_lot::Mutex;

use crate::canvas::Canvas;
use crate::core::Sketch;

use super::frame_clock::FrameClock;

/// Canvas shared between the scheduling thread (writer) and the renderer (reader).
pub type SharedCanvas = Arc<Mutex<Canvas>>;

/// Asks the host to repaint after a tick.
///
/// Called from the scheduling thread once the canvas lock has been released.
pub trait RedrawRequest: Send + 'static {
    fn request_redraw(&self);
}

impl<F> RedrawRequest for F
where
    F: Fn() + Send + 'static,
{
    fn request_redraw(&self) {
        self()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    /// Ticks per second.
    pub target_fps: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
}

struct Worker {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Fixed-rate animation timer.
///
/// Each tick runs on a single dedicated thread and, in this order:
/// 1. clears the canvas frame buffer,
/// 2. calls [`Sketch::draw`] with the current frame count,
/// 3. increments the frame count,
/// 4. requests a redraw.
///
/// Ticks never overlap. `setup` runs once on the same thread before the first tick.
pub struct Scheduler {
    config: SchedulerConfig,
    canvas: SharedCanvas,
    worker: Option<Worker>,
}

impl Scheduler {
    pub fn new(canvas: SharedCanvas, config: SchedulerConfig) -> Self {
        Self {
            config,
            canvas,
            worker: None,
        }
    }

    #[inline]
    pub fn canvas(&self) -> &SharedCanvas {
        &self.canvas
    }

    #[inline]
    pub fn config(&self) -> SchedulerConfig {
        self.config
    }

    pub fn state(&self) -> SchedulerState {
        match &self.worker {
            Some(w) if !w.handle.is_finished() => SchedulerState::Running,
            _ => SchedulerState::Stopped,
        }
    }

    /// Starts ticking `sketch` with the frame count reset to 0.
    ///
    /// A running scheduler is stopped first.
    ///
    /// # Panics
    /// If the OS refuses to spawn the scheduling thread.
    pub fn start<S, R>(&mut self, sketch: S, redraw: R)
    where
        S: Sketch,
        R: RedrawRequest,
    {
        self.stop();

        let stop = Arc::new(AtomicBool::new(false));
        let canvas = Arc::clone(&self.canvas);
        let clock = FrameClock::fixed_rate(self.config.target_fps);
        let flag = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("peruna-scheduler".into())
            .spawn(move || run(canvas, TickDriver::new(sketch), redraw, flag, clock))
            .expect("failed to spawn scheduler thread");

        log::debug!("scheduler started at {} fps", self.config.target_fps);
        self.worker = Some(Worker { stop, handle });
    }

    /// Stops ticking. Returns after any in-flight tick has completed.
    ///
    /// No-op when already stopped.
    pub fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        worker.stop.store(true, Ordering::Release);
        worker.handle.thread().unpark();

        if worker.handle.thread().id() == thread::current().id() {
            return;
        }
        if worker.handle.join().is_err() {
            log::error!("scheduler thread panicked");
        }
        log::debug!("scheduler stopped");
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run<S: Sketch, R: RedrawRequest>(
    canvas: SharedCanvas,
    mut driver: TickDriver<S>,
    redraw: R,
    stop: Arc<AtomicBool>,
    mut clock: FrameClock,
) {
    driver.setup(&mut canvas.lock());
    clock.reset(Instant::now());

    loop {
        if !wait_until_due(&clock, &stop) {
            return;
        }

        let now = Instant::now();
        let ft = clock.tick_at(now);
        if ft.dt > clock.interval().as_secs_f32() * 2.0 {
            log::trace!("tick late by {:.1} ms", ft.dt * 1000.0);
        }

        driver.tick(&mut canvas.lock());
        redraw.request_redraw();
    }
}

/// Parks until the next tick is due. Returns `false` once stop was requested.
fn wait_until_due(clock: &FrameClock, stop: &AtomicBool) -> bool {
    loop {
        if stop.load(Ordering::Acquire) {
            return false;
        }
        let wait = clock.until_next(Instant::now());
        if wait.is_zero() {
            return true;
        }
        thread::park_timeout(wait);
    }
}

/// Tick body without the thread and pacing around it.
pub(crate) struct TickDriver<S> {
    sketch: S,
    frame_count: u64,
    setup_done: bool,
}

impl<S: Sketch> TickDriver<S> {
    pub(crate) fn new(sketch: S) -> Self {
        Self {
            sketch,
            frame_count: 0,
            setup_done: false,
        }
    }

    pub(crate) fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Runs `Sketch::setup` the first time only.
    pub(crate) fn setup(&mut self, canvas: &mut Canvas) {
        if self.setup_done {
            return;
        }
        self.setup_done = true;
        self.sketch.setup(canvas);
    }

    /// Clears, draws, increments. Returns the frame count passed to `draw`.
    pub(crate) fn tick(&mut self, canvas: &mut Canvas) -> u64 {
        canvas.clear_frame();
        let current = self.frame_count;
        self.sketch.draw(canvas, current);
        self.frame_count += 1;
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FnSketch;
    use std::sync::atomic::AtomicUsize;
    use std::sync::mpsc;
    use std::time::Duration;

    const RECV_TIMEOUT: Duration = Duration::from_secs(5);

    fn shared() -> SharedCanvas {
        Arc::new(Mutex::new(Canvas::default()))
    }

    fn fast() -> SchedulerConfig {
        SchedulerConfig { target_fps: 200 }
    }

    // ── TickDriver ────────────────────────────────────────────────────────

    #[test]
    fn driver_counts_from_zero() {
        let mut canvas = Canvas::default();
        let mut seen = Vec::new();
        let mut driver = TickDriver::new(FnSketch::new(|_: &mut Canvas, _| {}));

        for _ in 0..5 {
            seen.push(driver.tick(&mut canvas));
        }

        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(driver.frame_count(), 5);
    }

    #[test]
    fn driver_clears_before_draw() {
        let mut canvas = Canvas::default();
        let mut driver = TickDriver::new(FnSketch::new(|c: &mut Canvas, _| {
            assert!(c.frame().is_empty());
            c.draw_rect(10.0, 10.0, 5.0, 5.0);
            c.draw_line(0.0, 0.0, 5.0, 5.0);
        }));

        driver.tick(&mut canvas);
        driver.tick(&mut canvas);
        assert_eq!(canvas.frame().len(), 2);
    }

    #[test]
    fn driver_runs_setup_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let mut canvas = Canvas::default();
        let mut driver = TickDriver::new(FnSketch::with_setup(
            move |_: &mut Canvas| {
                c.fetch_add(1, Ordering::SeqCst);
            },
            |_: &mut Canvas, _| {},
        ));

        driver.setup(&mut canvas);
        driver.setup(&mut canvas);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    // ── Scheduler ─────────────────────────────────────────────────────────

    #[derive(Debug, PartialEq)]
    enum Event {
        Setup,
        Draw(u64),
    }

    fn recording_sketch(tx: mpsc::Sender<Event>) -> impl Sketch {
        let setup_tx = tx.clone();
        FnSketch::with_setup(
            move |_: &mut Canvas| {
                let _ = setup_tx.send(Event::Setup);
            },
            move |_: &mut Canvas, frame| {
                let _ = tx.send(Event::Draw(frame));
            },
        )
    }

    #[test]
    fn starts_stopped() {
        let scheduler = Scheduler::new(shared(), SchedulerConfig::default());
        assert_eq!(scheduler.state(), SchedulerState::Stopped);
        assert_eq!(scheduler.config().target_fps, 60);
    }

    #[test]
    fn setup_precedes_sequential_ticks() {
        let (tx, rx) = mpsc::channel();
        let mut scheduler = Scheduler::new(shared(), fast());
        scheduler.start(recording_sketch(tx), || {});
        assert_eq!(scheduler.state(), SchedulerState::Running);

        let events: Vec<Event> = (0..6).map(|_| rx.recv_timeout(RECV_TIMEOUT).unwrap()).collect();
        scheduler.stop();

        assert_eq!(
            events,
            vec![
                Event::Setup,
                Event::Draw(0),
                Event::Draw(1),
                Event::Draw(2),
                Event::Draw(3),
                Event::Draw(4),
            ]
        );
        assert_eq!(scheduler.state(), SchedulerState::Stopped);
    }

    #[test]
    fn no_ticks_after_stop() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let t = Arc::clone(&ticks);
        let mut scheduler = Scheduler::new(shared(), fast());
        scheduler.start(
            FnSketch::new(move |_: &mut Canvas, _| {
                t.fetch_add(1, Ordering::SeqCst);
            }),
            || {},
        );

        thread::sleep(Duration::from_millis(50));
        scheduler.stop();
        let after_stop = ticks.load(Ordering::SeqCst);

        thread::sleep(Duration::from_millis(50));
        assert_eq!(ticks.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn every_tick_requests_one_redraw() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let redraws = Arc::new(AtomicUsize::new(0));
        let (t, r) = (Arc::clone(&ticks), Arc::clone(&redraws));

        let mut scheduler = Scheduler::new(shared(), fast());
        scheduler.start(
            FnSketch::new(move |_: &mut Canvas, _| {
                t.fetch_add(1, Ordering::SeqCst);
            }),
            move || {
                r.fetch_add(1, Ordering::SeqCst);
            },
        );

        thread::sleep(Duration::from_millis(60));
        scheduler.stop();

        assert!(ticks.load(Ordering::SeqCst) > 0);
        assert_eq!(ticks.load(Ordering::SeqCst), redraws.load(Ordering::SeqCst));
    }

    #[test]
    fn restart_resets_frame_count() {
        let canvas = shared();
        let mut scheduler = Scheduler::new(Arc::clone(&canvas), fast());

        let (tx, rx) = mpsc::channel();
        scheduler.start(recording_sketch(tx), || {});
        for _ in 0..4 {
            rx.recv_timeout(RECV_TIMEOUT).unwrap();
        }

        let (tx2, rx2) = mpsc::channel();
        scheduler.start(recording_sketch(tx2), || {});
        assert_eq!(rx2.recv_timeout(RECV_TIMEOUT).unwrap(), Event::Setup);
        assert_eq!(rx2.recv_timeout(RECV_TIMEOUT).unwrap(), Event::Draw(0));
        scheduler.stop();
    }

    #[test]
    fn ticks_write_shared_canvas() {
        let canvas = shared();
        let mut scheduler = Scheduler::new(Arc::clone(&canvas), fast());
        let (tx, rx) = mpsc::channel();
        scheduler.start(
            FnSketch::new(move |c: &mut Canvas, frame| {
                c.draw_circle(50.0, 50.0, 10.0);
                let _ = tx.send(frame);
            }),
            || {},
        );

        rx.recv_timeout(RECV_TIMEOUT).unwrap();
        scheduler.stop();

        assert_eq!(canvas.lock().frame().len(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut scheduler = Scheduler::new(shared(), fast());
        scheduler.stop();
        scheduler.start(FnSketch::new(|_: &mut Canvas, _| {}), || {});
        scheduler.stop();
        scheduler.stop();
        assert_eq!(scheduler.state(), SchedulerState::Stopped);
    }
}
