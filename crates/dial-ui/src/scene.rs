use dial_engine::coords::{Rect, Vec2};
use dial_engine::scene::DrawList;
use dial_engine::text::{FontId, FontLoadError, FontSystem};
use dial_engine::window::CursorIcon;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
///
/// Built from the engine's `InputState` / `InputFrame` each frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Cursor position in logical pixels; `None` while outside the window.
    pub mouse_pos: Option<Vec2>,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Owns the resources a widget tree needs across frames: the loaded fonts
/// and the `DrawList` refilled by [`frame`](Self::frame).
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let font = ui.load_font(&bytes)?;
/// let mut root: Element = Text::new("Hello", font, 16.0, Color::BLACK).into();
///
/// // In your on_frame callback:
/// ui.frame(&mut root, viewport, &input);
/// scene_renderer.render(rctx, target, &mut ui.draw_list, &ui.font_system);
/// ```
pub struct UiScene {
    /// Public so the renderer can borrow it alongside `draw_list`.
    pub font_system: FontSystem,
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Routes this frame's input through `root`, then lays it out and paints
    /// it over the whole viewport.
    ///
    /// Events go first so state changes made by a click show up in the same
    /// frame. Returns the cursor the widgets asked for.
    pub fn frame(&mut self, root: &mut Element, viewport: Vec2, input: &UiInput) -> CursorIcon {
        self.draw_list.clear();
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        let ctx = LayoutCtx { fonts: &self.font_system };

        // ── events ────────────────────────────────────────────────────────
        if input.mouse_clicked {
            if let Some(pos) = input.mouse_pos {
                root.on_event(&UiEvent::Click { pos }, rect, &ctx);
            }
        }

        // ── measure ───────────────────────────────────────────────────────
        // The root fills the viewport whatever size it reports, but measure
        // is where closure-driven widgets (`Label`) pull their content.
        // Containers re-measure their children while painting; a bare root
        // is only refreshed here.
        let _ = root.measure(Constraints::loose(viewport), &ctx);

        // ── paint ─────────────────────────────────────────────────────────
        let mut painter = Painter::new(
            &mut self.draw_list,
            &self.font_system,
            input.mouse_pos,
            input.mouse_pressed,
        );
        root.paint(&mut painter, rect);
        painter.cursor()
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
