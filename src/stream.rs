//! Poll-driven timing for the startup phase and the live risk stream.
//!
//! Both delays are plain state machines fed an `Instant` by whoever polls
//! them (the UI once per frame, tests with hand-built instants), so the
//! core never sleeps and the window stays responsive.

use rand::Rng;
use std::time::{Duration, Instant};

/// Number of points the live stream accumulates before it stops.
pub const STREAM_POINTS: usize = 20;

/// Cadence at which stream points appear.
pub const STREAM_INTERVAL: Duration = Duration::from_millis(150);

/// Length of the post-login initialization phase.
pub const STARTUP_DURATION: Duration = Duration::from_secs(2);

/// Fixed-length initialization phase shown right after login.
#[derive(Debug, Clone, Copy)]
pub struct StartupPhase {
    started: Instant,
}

impl StartupPhase {
    /// Begin the phase at `now`.
    pub fn begin(now: Instant) -> Self {
        Self { started: now }
    }

    /// Whether the phase has run its course.
    pub fn is_complete(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= STARTUP_DURATION
    }

    /// Completed fraction in `[0, 1]` for the progress bar.
    pub fn fraction(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.started).as_secs_f32();
        (elapsed / STARTUP_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Accumulating live risk chart data.
///
/// One uniform `[20, 90]` point per elapsed interval, up to
/// [`STREAM_POINTS`]; re-entering the overview restarts the run.
#[derive(Debug, Clone)]
pub struct RiskStream {
    points: Vec<f64>,
    last_append: Instant,
}

impl RiskStream {
    /// Start an empty stream; the first point appears one interval later.
    pub fn start(now: Instant) -> Self {
        Self {
            points: Vec::with_capacity(STREAM_POINTS),
            last_append: now,
        }
    }

    /// Append every point whose interval has elapsed, using the process RNG.
    ///
    /// Returns true when at least one point was appended.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.tick_with(now, &mut rand::rng())
    }

    /// [`Self::tick`] with a caller-supplied RNG.
    pub fn tick_with<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        let mut appended = false;
        while self.points.len() < STREAM_POINTS
            && now.duration_since(self.last_append) >= STREAM_INTERVAL
        {
            self.points.push(rng.random_range(20.0..=90.0));
            self.last_append += STREAM_INTERVAL;
            appended = true;
        }
        appended
    }

    /// Points accumulated so far, in arrival order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Whether the run has produced all of its points.
    pub fn is_complete(&self) -> bool {
        self.points.len() >= STREAM_POINTS
    }

    /// Clear the run and re-arm it from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.points.clear();
        self.last_append = now;
    }
}
