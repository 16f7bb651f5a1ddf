use crate::time_of_day::TimeOfDay;

/// Rotation that moves the zero angle from "3 o'clock" to "12 o'clock".
///
/// Angles grow clockwise on screen because +Y points down.
pub const TWELVE_O_CLOCK_DEG: f32 = -90.0;

/// Degrees per minute/second mark on the dial.
pub const DEG_PER_MARK: f32 = 6.0;

/// Degrees per hour numeral on the dial.
pub const DEG_PER_HOUR: f32 = 30.0;

/// Hand angles in degrees for one render pass.
///
/// The minute hand carries a seconds contribution (0.1° per second) and the
/// hour hand a minutes contribution (0.5° per minute), so both sweep instead
/// of jumping. The second hand moves in whole-second steps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub second: f32,
    pub minute: f32,
    pub hour: f32,
}

impl HandAngles {
    pub fn at(t: TimeOfDay) -> Self {
        let s = t.second as f32;
        let m = t.minute as f32;
        let h = t.hour12() as f32;

        Self {
            second: s * DEG_PER_MARK + TWELVE_O_CLOCK_DEG,
            minute: (m * DEG_PER_MARK + s * 0.1) + TWELVE_O_CLOCK_DEG,
            hour: (h * DEG_PER_HOUR + m * 0.5) + TWELVE_O_CLOCK_DEG,
        }
    }
}

/// Angle in degrees of the `i`-th hour numeral (1–12); 12 sits at the top.
#[inline]
pub fn numeral_angle(i: u32) -> f32 {
    i as f32 * DEG_PER_HOUR + TWELVE_O_CLOCK_DEG
}

/// Angle in degrees of the `i`-th tick mark (0–59). Tick 0 is at 3 o'clock,
/// which is also an hour position, so every 5th tick still lands on a numeral.
#[inline]
pub fn tick_angle(i: u32) -> f32 {
    i as f32 * DEG_PER_MARK
}

/// Wraps an angle into `[0, 360)`.
#[inline]
pub fn normalize_deg(a: f32) -> f32 {
    a.rem_euclid(360.0)
}
