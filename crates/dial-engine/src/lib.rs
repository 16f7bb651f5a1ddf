//! Dial engine crate.
//!
//! Platform and GPU runtime the UI layer draws through: the winit event
//! loop, a wgpu device per window, the draw-list scene and the shape
//! renderers that consume it.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
