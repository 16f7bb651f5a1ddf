use std::collections::HashSet;

use super::types::{InputEvent, MouseButton};

/// Input transitions recorded since the previous frame.
///
/// [`InputState`](super::InputState) holds what is down right now; this holds
/// what changed. The runtime clears it after every frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,
    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    #[inline]
    pub fn pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    #[inline]
    pub fn released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }
}
