use std::fmt;

use chrono::Timelike;

/// Wall-clock time of day, sampled once per poll.
///
/// Invariant: `hour < 24`, `minute < 60`, `second < 60`, `nanos < 1_000_000_000`.
/// Leap seconds reported by the platform are folded into `second = 59`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Sub-second fraction in nanoseconds.
    pub nanos: u32,
}

impl TimeOfDay {
    /// Midnight.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
        nanos: 0,
    };

    /// Builds a time from components, returning `None` when any is out of range.
    pub fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        Self::with_nanos(hour, minute, second, 0)
    }

    pub fn with_nanos(hour: u32, minute: u32, second: u32, nanos: u32) -> Option<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 || nanos >= 1_000_000_000 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
            nanos,
        })
    }

    /// Converts any chrono time-bearing value (`NaiveTime`, `DateTime<Local>`, …).
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        // chrono represents a leap second as nanosecond >= 1e9.
        let (second, nanos) = match t.nanosecond() {
            n if n >= 1_000_000_000 => (59, 999_999_999),
            n => (t.second(), n),
        };
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second,
            nanos,
        }
    }

    /// Hour on a 12-hour dial, `0..12`. Midnight and noon both map to 0,
    /// which sits on the same position as the "12" numeral.
    #[inline]
    pub fn hour12(self) -> u32 {
        self.hour % 12
    }

    /// Seconds since midnight, ignoring the sub-second fraction.
    #[inline]
    pub fn seconds_since_midnight(self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }

    /// `HH:mm:ss` in 24-hour notation.
    pub fn digital(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn digital_is_zero_padded() {
        let t = TimeOfDay::new(3, 5, 9).unwrap();
        assert_eq!(t.digital(), "03:05:09");
    }

    #[test]
    fn digital_uses_24_hour_notation() {
        let t = TimeOfDay::new(23, 59, 59).unwrap();
        assert_eq!(t.digital(), "23:59:59");
    }

    #[test]
    fn digital_ignores_sub_second_fraction() {
        let t = TimeOfDay::with_nanos(12, 0, 1, 999_999_999).unwrap();
        assert_eq!(t.digital(), "12:00:01");
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(TimeOfDay::new(24, 0, 0).is_none());
        assert!(TimeOfDay::new(0, 60, 0).is_none());
        assert!(TimeOfDay::new(0, 0, 60).is_none());
        assert!(TimeOfDay::with_nanos(0, 0, 0, 1_000_000_000).is_none());
    }

    #[test]
    fn hour12_wraps_noon_and_midnight_to_zero() {
        assert_eq!(TimeOfDay::MIDNIGHT.hour12(), 0);
        assert_eq!(TimeOfDay::new(12, 0, 0).unwrap().hour12(), 0);
        assert_eq!(TimeOfDay::new(15, 0, 0).unwrap().hour12(), 3);
    }

    #[test]
    fn from_timelike_copies_components() {
        let nt = NaiveTime::from_hms_milli_opt(7, 8, 9, 250).unwrap();
        let t = TimeOfDay::from_timelike(&nt);
        assert_eq!(t, TimeOfDay::with_nanos(7, 8, 9, 250_000_000).unwrap());
    }

    #[test]
    fn from_timelike_folds_leap_second() {
        let nt = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        let t = TimeOfDay::from_timelike(&nt);
        assert_eq!(t.second, 59);
        assert!(t.nanos < 1_000_000_000);
    }
}
