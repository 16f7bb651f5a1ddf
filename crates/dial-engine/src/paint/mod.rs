//! Color model shared between UI and renderers.
//!
//! Everything is filled with a single [`Color`]; there are no gradients.

mod color;

pub use color::Color;
