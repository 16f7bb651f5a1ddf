use std::time::Instant;

use super::ctx::FrameCtx;

/// Returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Implemented by the layer that owns application state.
pub trait App {
    /// Called once per redraw of a window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Earliest instant the app needs another frame without any input.
    ///
    /// The runtime sleeps until then and wakes early for input. `None` keeps
    /// the runtime redrawing every frame.
    fn next_deadline(&self) -> Option<Instant> {
        None
    }
}
