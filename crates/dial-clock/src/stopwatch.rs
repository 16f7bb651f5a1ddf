use std::fmt;
use std::time::{Duration, Instant};

/// Start / stop / reset stopwatch.
///
/// Elapsed time is kept as a number: the time accumulated over finished runs
/// plus the span of the current run. Callers pass `now` explicitly so the
/// stopwatch never reads a clock on its own.
///
/// Invariants:
/// - elapsed is never negative (durations saturate at zero)
/// - while running, `elapsed(now)` is non-decreasing in `now`
/// - resuming continues from the value frozen by the last `stop`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Stopwatch {
    /// Time accumulated by finished runs.
    accumulated: Duration,
    /// Start of the current run; `None` while stopped.
    running_since: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Starts or resumes. No-op when already running.
    ///
    /// Returns `true` if the stopwatch transitioned to running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.running_since.is_some() {
            return false;
        }
        self.running_since = Some(now);
        log::debug!("stopwatch started at {}", Elapsed(self.accumulated));
        true
    }

    /// Stops and freezes elapsed at `now`. No-op when already stopped.
    ///
    /// Returns `true` if the stopwatch transitioned to stopped.
    pub fn stop(&mut self, now: Instant) -> bool {
        let Some(since) = self.running_since.take() else {
            return false;
        };
        self.accumulated += now.saturating_duration_since(since);
        log::debug!("stopwatch stopped at {}", Elapsed(self.accumulated));
        true
    }

    /// Stops (if running) and clears elapsed back to zero.
    pub fn reset(&mut self) {
        self.running_since = None;
        self.accumulated = Duration::ZERO;
        log::debug!("stopwatch reset");
    }

    /// Elapsed time at `now`: frozen while stopped, live while running.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + now.saturating_duration_since(since),
            None => self.accumulated,
        }
    }

    /// The instant at which elapsed would have been zero for the current run,
    /// i.e. `since - accumulated`. `None` while stopped, or if that instant
    /// is not representable on this platform.
    pub fn reference_start(&self) -> Option<Instant> {
        self.running_since?.checked_sub(self.accumulated)
    }
}

/// `HH:mm:ss.mmm` rendering of a stopwatch duration.
///
/// Hours are not wrapped at 24, so 25 hours renders as `25:00:00.000`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Elapsed(pub Duration);

impl Elapsed {
    pub const ZERO: Elapsed = Elapsed(Duration::ZERO);
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.0.as_millis();
        let h = ms / 3_600_000;
        let m = (ms / 60_000) % 60;
        let s = (ms / 1000) % 60;
        write!(f, "{:02}:{:02}:{:02}.{:03}", h, m, s, ms % 1000)
    }
}
