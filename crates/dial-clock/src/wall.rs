use std::cell::Cell;

use crate::time_of_day::TimeOfDay;

/// Source of the current wall-clock time of day.
///
/// The pollers only ever ask for "now", so a trait object keeps the system
/// clock swappable for a fixed one in tests.
pub trait WallClock {
    fn now(&self) -> TimeOfDay;
}

/// Local system time via `chrono::Local`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_timelike(&chrono::Local::now())
    }
}

/// Manually driven clock.
#[derive(Debug, Default)]
pub struct FixedClock {
    current: Cell<TimeOfDay>,
}

impl FixedClock {
    pub fn new(time: TimeOfDay) -> Self {
        Self { current: Cell::new(time) }
    }

    pub fn set(&self, time: TimeOfDay) {
        self.current.set(time);
    }

    /// Moves the clock forward by whole seconds, wrapping at midnight.
    pub fn advance_secs(&self, secs: u32) {
        let t = self.current.get();
        let total = (t.seconds_since_midnight() + secs % 86_400) % 86_400;
        self.current.set(TimeOfDay {
            hour: total / 3600,
            minute: (total / 60) % 60,
            second: total % 60,
            nanos: t.nanos,
        });
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.current.get()
    }
}

impl<C: WallClock + ?Sized> WallClock for &C {
    fn now(&self) -> TimeOfDay {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_what_was_set() {
        let clock = FixedClock::new(TimeOfDay::new(1, 2, 3).unwrap());
        assert_eq!(clock.now().digital(), "01:02:03");
        clock.set(TimeOfDay::new(4, 5, 6).unwrap());
        assert_eq!(clock.now().digital(), "04:05:06");
    }

    #[test]
    fn advance_wraps_past_midnight() {
        let clock = FixedClock::new(TimeOfDay::new(23, 59, 58).unwrap());
        clock.advance_secs(3);
        assert_eq!(clock.now().digital(), "00:00:01");
    }

    #[test]
    fn advance_by_huge_amounts_wraps_whole_days() {
        let clock = FixedClock::new(TimeOfDay::new(23, 0, 0).unwrap());
        clock.advance_secs(86_400 * 3);
        assert_eq!(clock.now().digital(), "23:00:00");
        // u32::MAX s = 49_710 days + 23_295 s
        clock.advance_secs(u32::MAX);
        assert_eq!(clock.now().digital(), "05:28:15");
    }

    #[test]
    fn system_clock_is_in_range() {
        let t = SystemClock.now();
        assert!(t.hour < 24 && t.minute < 60 && t.second < 60);
    }
}
