use std::time::Instant;

use dial_clock::{Elapsed, Stopwatch, SystemClock, TimeOfDay, WallClock};

/// State shared by the two pollers, the readouts, the face, and the buttons.
///
/// The readouts only change when a poller ticks or a button is pressed. The
/// face is not a readout: it reads the wall clock on every paint.
pub struct DialModel<C: WallClock = SystemClock> {
    clock: C,
    /// Last sample published to the clock readout; `None` until the first tick.
    time: Option<TimeOfDay>,
    stopwatch: Stopwatch,
    /// Stopwatch value as last published to the readout.
    shown: Elapsed,
}

impl<C: WallClock> DialModel<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            time: None,
            stopwatch: Stopwatch::new(),
            shown: Elapsed::ZERO,
        }
    }

    /// Clock poller: samples the wall clock for the readout.
    pub fn tick_clock(&mut self) {
        self.time = Some(self.clock.now());
    }

    /// Stopwatch poller: republishes elapsed while running.
    pub fn tick_stopwatch(&mut self, now: Instant) {
        if self.is_running() {
            self.shown = Elapsed(self.stopwatch.elapsed(now));
        }
    }

    /// Returns `true` if the stopwatch was stopped and is now running.
    pub fn start(&mut self, now: Instant) -> bool {
        self.stopwatch.start(now)
    }

    /// Freezes the readout at `now`. Returns `true` if it was running.
    pub fn stop(&mut self, now: Instant) -> bool {
        let stopped = self.stopwatch.stop(now);
        if stopped {
            self.shown = Elapsed(self.stopwatch.elapsed(now));
        }
        stopped
    }

    pub fn reset(&mut self) {
        self.stopwatch.reset();
        self.shown = Elapsed::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    /// The wall clock right now, independent of the readout's last tick.
    pub fn wall_time(&self) -> TimeOfDay {
        self.clock.now()
    }

    pub fn clock_text(&self) -> String {
        match self.time {
            Some(t) => format!("Clock: {}", t.digital()),
            None => "Clock: --:--:--".to_string(),
        }
    }

    pub fn stopwatch_text(&self) -> String {
        format!("Stopwatch: {}", self.shown)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dial_clock::FixedClock;

    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn initial_readouts() {
        let m = DialModel::new(FixedClock::default());
        assert_eq!(m.clock_text(), "Clock: --:--:--");
        assert_eq!(m.stopwatch_text(), "Stopwatch: 00:00:00.000");
    }

    #[test]
    fn clock_tick_samples_the_wall_clock() {
        let clock = FixedClock::new(TimeOfDay::new(9, 5, 7).unwrap());
        let mut m = DialModel::new(&clock);
        m.tick_clock();
        assert_eq!(m.clock_text(), "Clock: 09:05:07");

        clock.advance_secs(1);
        assert_eq!(m.clock_text(), "Clock: 09:05:07");
        m.tick_clock();
        assert_eq!(m.clock_text(), "Clock: 09:05:08");
        assert_eq!(m.wall_time(), TimeOfDay::new(9, 5, 8).unwrap());
    }

    #[test]
    fn wall_time_does_not_wait_for_a_tick() {
        let clock = FixedClock::new(TimeOfDay::new(10, 8, 30).unwrap());
        let m = DialModel::new(&clock);
        assert_eq!(m.wall_time().digital(), "10:08:30");
        clock.advance_secs(1);
        assert_eq!(m.wall_time().digital(), "10:08:31");
        assert_eq!(m.clock_text(), "Clock: --:--:--");
    }

    #[test]
    fn stopwatch_tick_is_ignored_while_stopped() {
        let t0 = Instant::now();
        let mut m = DialModel::new(FixedClock::default());
        m.tick_stopwatch(t0 + ms(500));
        assert_eq!(m.stopwatch_text(), "Stopwatch: 00:00:00.000");
    }

    #[test]
    fn stop_then_start_resumes_from_frozen_value() {
        let t0 = Instant::now();
        let mut m = DialModel::new(FixedClock::default());

        assert!(m.start(t0));
        m.tick_stopwatch(t0 + ms(1230));
        assert_eq!(m.stopwatch_text(), "Stopwatch: 00:00:01.230");

        assert!(m.stop(t0 + ms(5000)));
        assert_eq!(m.stopwatch_text(), "Stopwatch: 00:00:05.000");
        m.tick_stopwatch(t0 + ms(6000));
        assert_eq!(m.stopwatch_text(), "Stopwatch: 00:00:05.000");

        assert!(m.start(t0 + ms(7000)));
        m.tick_stopwatch(t0 + ms(7010));
        assert_eq!(m.stopwatch_text(), "Stopwatch: 00:00:05.010");
    }

    #[test]
    fn reset_clears_readout_and_stops() {
        let t0 = Instant::now();
        let mut m = DialModel::new(FixedClock::default());
        m.start(t0);
        m.tick_stopwatch(t0 + ms(3000));
        m.reset();
        assert!(!m.is_running());
        assert_eq!(m.stopwatch_text(), "Stopwatch: 00:00:00.000");
        m.tick_stopwatch(t0 + ms(4000));
        assert_eq!(m.stopwatch_text(), "Stopwatch: 00:00:00.000");
    }

    #[test]
    fn stop_when_stopped_keeps_readout() {
        let t0 = Instant::now();
        let mut m = DialModel::new(FixedClock::default());
        assert!(!m.stop(t0));
        assert_eq!(m.stopwatch_text(), "Stopwatch: 00:00:00.000");
    }
}
