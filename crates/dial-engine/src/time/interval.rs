use std::time::{Duration, Instant};

/// Fixed-period deadline.
///
/// An armed interval fires once per `period`. When the caller falls behind
/// (a stalled frame, a suspended laptop) missed periods are coalesced into a
/// single firing and the schedule skips ahead, so a late poll never causes a
/// burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Option<Instant>,
}

impl Interval {
    /// A stopped interval. Zero periods are raised to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self { period: period.max(Duration::from_millis(1)), next_due: None }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arms the interval; the first firing is one period after `now`.
    /// Returns `false` when it was already armed, leaving its schedule untouched.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(now + self.period);
        true
    }

    /// Disarms the interval. Returns `false` when it was not armed.
    pub fn stop(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    /// Returns `true` once per elapsed deadline.
    ///
    /// After firing, the next deadline is the first multiple of `period` past
    /// `now`, counted from the previous deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let behind = now.saturating_duration_since(due);
        let skipped = behind.as_nanos() / self.period.as_nanos();
        if skipped > 0 {
            log::trace!("interval {:?} coalesced {skipped} missed ticks", self.period);
        }
        let steps = u32::try_from(skipped + 1).unwrap_or(u32::MAX);
        self.next_due = due.checked_add(self.period.saturating_mul(steps)).or(Some(now + self.period));
        true
    }

    /// When the interval next wants to fire; `None` while stopped.
    #[inline]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_due
    }
}
