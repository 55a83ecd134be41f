use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,
}

/// Fixed-rate pacing clock.
///
/// Deadlines advance by exactly one interval per tick, so sleeping until
/// [`until_next`](Self::until_next) reaches zero does not drift. After a stall
/// longer than `max_lag` the schedule is rebased on the current time instead of
/// firing a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    max_lag: Duration,
    last: Instant,
    next: Instant,
}

impl FrameClock {
    /// Creates a clock firing `fps` times per second, starting immediately.
    pub fn fixed_rate(fps: u32) -> Self {
        let interval = Duration::from_secs(1) / fps.max(1);
        Self::with_interval(interval, Instant::now())
    }

    /// Creates a clock whose first tick is due at `start`.
    pub fn with_interval(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            max_lag: Duration::from_millis(250),
            last: start,
            next: start,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Resets the baseline so the next tick is due at `now`.
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
        self.next = now;
    }

    /// Time left until the next tick is due; zero when it is due or overdue.
    #[inline]
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Records a tick fired at `now` and schedules the following one.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last);
        self.last = now;

        self.next += self.interval;
        if now.saturating_duration_since(self.next) > self.max_lag {
            self.next = now + self.interval;
        }

        FrameTime {
            dt: dt.as_secs_f32(),
            now,
        }
    }
}
