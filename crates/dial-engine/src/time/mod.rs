//! Time subsystem.
//!
//! - [`FrameClock`]: one per window, produces a [`FrameTime`] per presented frame
//! - [`Interval`]: fixed-period deadline that the runtime sleeps towards

mod frame_clock;
mod interval;

pub use frame_clock::{FrameClock, FrameTime};
pub use interval::Interval;
