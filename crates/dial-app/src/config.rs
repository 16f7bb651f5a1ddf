use std::time::Duration;

use dial_clock::FaceStyle;

/// Everything about the window that is fixed at startup.
#[derive(Debug, Clone)]
pub struct DialConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Period of the wall-clock poller (digital readout and analog face).
    pub clock_period: Duration,
    /// Period of the stopwatch poller while it runs.
    pub stopwatch_period: Duration,
    pub readout_size: f32,
    pub numeral_size: f32,
    pub button_text_size: f32,
    pub face: FaceStyle,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            title: "Clock & Stopwatch".to_string(),
            width: 500.0,
            height: 500.0,
            clock_period: Duration::from_millis(1000),
            stopwatch_period: Duration::from_millis(10),
            readout_size: 24.0,
            numeral_size: 12.0,
            button_text_size: 14.0,
            face: FaceStyle::default(),
        }
    }
}
