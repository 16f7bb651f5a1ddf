use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};

/// Current pointer state for one window.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,
    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Folds `ev` into the current state and records its transition in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::PointerMoved { x, y } => self.pointer_pos = Some((x, y)),
            InputEvent::PointerLeft => self.pointer_pos = None,
            InputEvent::Focused(focused) => {
                self.focused = focused;
                // A release delivered to another window would leave buttons stuck.
                if !focused {
                    self.buttons_down.clear();
                }
            }
            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((x, y));
                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(button) {
                            frame.buttons_pressed.insert(button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(&button) {
                            frame.buttons_released.insert(button);
                        }
                    }
                }
            }
        }
        frame.events.push(ev);
    }

    #[inline]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x: 4.0, y: 8.0 })
    }

    #[test]
    fn press_and_release_are_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, button(MouseButtonState::Pressed));
        state.apply_event(&mut frame, button(MouseButtonState::Pressed));
        assert!(state.button_down(MouseButton::Left));
        assert!(frame.pressed(MouseButton::Left));
        assert_eq!(frame.events.len(), 2);

        frame.clear();
        state.apply_event(&mut frame, button(MouseButtonState::Released));
        assert!(!state.button_down(MouseButton::Left));
        assert!(frame.released(MouseButton::Left));
        assert!(!frame.pressed(MouseButton::Left));
    }

    #[test]
    fn button_event_moves_pointer() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButtonState::Pressed));
        assert_eq!(state.pointer_pos, Some((4.0, 8.0)));
    }

    #[test]
    fn losing_focus_releases_held_buttons() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButtonState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(state.buttons_down.is_empty());
    }

    #[test]
    fn pointer_leave_clears_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 1.0, y: 2.0 });
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }
}
