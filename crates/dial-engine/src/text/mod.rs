//! Font loading and text measurement.
//!
//! Rasterization happens in `render::shapes::text`; this module only owns the
//! parsed fonts so layout and rendering agree on metrics.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, LineMetrics};
