//! Input subsystem.
//!
//! Platform-agnostic pointer state. The runtime translates winit events into
//! [`InputEvent`]s; nothing here names a winit type.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};
