//! Property checks for the readouts, the stopwatch, and the hand angles.

use std::time::{Duration, Instant};

use dial_clock::angles::normalize_deg;
use dial_clock::{Elapsed, HandAngles, Stopwatch, TimeOfDay};
use proptest::prelude::*;

fn time_of_day() -> impl Strategy<Value = TimeOfDay> {
    (0u32..24, 0u32..60, 0u32..60, 0u32..1_000_000_000)
        .prop_map(|(h, m, s, n)| TimeOfDay::with_nanos(h, m, s, n).unwrap())
}

/// One user action on the stopwatch, applied `gap_ms` after the previous one.
#[derive(Debug, Clone, Copy)]
enum Action {
    Start,
    Stop,
}

fn actions() -> impl Strategy<Value = Vec<(Action, u64)>> {
    prop::collection::vec(
        (prop_oneof![Just(Action::Start), Just(Action::Stop)], 0u64..10_000),
        1..40,
    )
}

proptest! {
    #[test]
    fn digital_readout_is_fixed_width(t in time_of_day()) {
        let s = t.digital();
        prop_assert_eq!(s.len(), 8);
        let parts: Vec<&str> = s.split(':').collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert!(parts.iter().all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit())));
        prop_assert_eq!(parts[0].parse::<u32>().unwrap(), t.hour);
        prop_assert_eq!(parts[1].parse::<u32>().unwrap(), t.minute);
        prop_assert_eq!(parts[2].parse::<u32>().unwrap(), t.second);
    }

    #[test]
    fn stopwatch_readout_round_trips_millis(ms in 0u64..(200 * 3_600_000)) {
        let s = Elapsed(Duration::from_millis(ms)).to_string();
        let (hms, millis) = s.split_once('.').unwrap();
        let f: Vec<u64> = hms.split(':').map(|p| p.parse().unwrap()).collect();
        prop_assert_eq!(millis.len(), 3);
        prop_assert_eq!(
            (f[0] * 3600 + f[1] * 60 + f[2]) * 1000 + millis.parse::<u64>().unwrap(),
            ms
        );
    }

    #[test]
    fn elapsed_never_decreases_without_reset(seq in actions()) {
        let mut sw = Stopwatch::new();
        let mut now = Instant::now();
        let mut last = Duration::ZERO;

        for (action, gap) in seq {
            now += Duration::from_millis(gap);
            let before = sw.elapsed(now);
            prop_assert!(before >= last);

            match action {
                Action::Start => { sw.start(now); }
                Action::Stop => { sw.stop(now); }
            }

            // A transition never changes the value observed at the same instant.
            let after = sw.elapsed(now);
            prop_assert_eq!(after, before);
            last = after;
        }
    }

    #[test]
    fn reset_always_reads_zero(seq in actions(), later in 0u64..10_000) {
        let mut sw = Stopwatch::new();
        let mut now = Instant::now();
        for (action, gap) in seq {
            now += Duration::from_millis(gap);
            match action {
                Action::Start => { sw.start(now); }
                Action::Stop => { sw.stop(now); }
            }
        }
        sw.reset();
        prop_assert!(!sw.is_running());
        prop_assert_eq!(sw.elapsed(now + Duration::from_millis(later)), Duration::ZERO);
    }

    #[test]
    fn resume_preserves_accumulated(run in 0u64..100_000, pause in 0u64..100_000) {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        sw.start(t0);
        let stopped_at = t0 + Duration::from_millis(run);
        sw.stop(stopped_at);
        let frozen = sw.elapsed(stopped_at);

        let resumed_at = stopped_at + Duration::from_millis(pause);
        sw.start(resumed_at);
        prop_assert_eq!(sw.elapsed(resumed_at), frozen);
    }

    #[test]
    fn minute_hand_advances_with_seconds(h in 0u32..24, m in 0u32..60, s in 0u32..59) {
        let a = HandAngles::at(TimeOfDay::new(h, m, s).unwrap());
        let b = HandAngles::at(TimeOfDay::new(h, m, s + 1).unwrap());
        prop_assert!(b.minute > a.minute);
    }

    #[test]
    fn hour_hand_advances_with_minutes(h in 0u32..24, m in 0u32..59, s in 0u32..60) {
        let a = HandAngles::at(TimeOfDay::new(h, m, s).unwrap());
        let b = HandAngles::at(TimeOfDay::new(h, m + 1, s).unwrap());
        prop_assert!(b.hour > a.hour);
    }

    #[test]
    fn angles_stay_within_one_turn(t in time_of_day()) {
        let a = HandAngles::at(t);
        for deg in [a.second, a.minute, a.hour] {
            prop_assert!((-90.0..270.0).contains(&deg), "{deg}");
            prop_assert!((0.0..360.0).contains(&normalize_deg(deg)));
        }
    }
}
