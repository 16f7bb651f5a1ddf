/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Button transition at a pointer position (logical pixels).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
}

/// Events the runtime forwards to the input state, in arrival order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to `(x, y)` in logical pixels.
    PointerMoved { x: f32, y: f32 },
    PointerButton(PointerButtonEvent),
    /// Pointer left the window surface.
    PointerLeft,
    /// Window gained or lost focus.
    Focused(bool),
}
