//! Clock model for the dial application.
//!
//! Everything the window shows is derived here from two inputs: the local
//! wall-clock time and a monotonic `Instant` for the stopwatch.
//!
//! - [`WallClock`] / [`SystemClock`] / [`FixedClock`]: time-of-day sources
//! - [`TimeOfDay`]: `HH:mm:ss` readout
//! - [`Stopwatch`] / [`Elapsed`]: start/stop/reset arithmetic and `HH:mm:ss.mmm` readout
//! - [`HandAngles`] / [`FaceLayout`]: analog face geometry

pub mod angles;
pub mod face;
pub mod stopwatch;
pub mod time_of_day;
pub mod wall;

pub use angles::HandAngles;
pub use face::{FaceLayout, FaceStyle, Hand, HandKind, Numeral, Point, Segment, Tick};
pub use stopwatch::{Elapsed, Stopwatch};
pub use time_of_day::TimeOfDay;
pub use wall::{FixedClock, SystemClock, WallClock};
