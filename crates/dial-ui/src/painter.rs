use dial_engine::coords::{CornerRadii, Rect, Vec2};
use dial_engine::paint::Color;
use dial_engine::scene::{DrawList, LineCap, Stroke, ZIndex};
use dial_engine::scene::shapes::TextCmd;
use dial_engine::text::{FontId, FontSystem, LineMetrics};
use dial_engine::window::CursorIcon;

use crate::constraints::LayoutCtx;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API and exposes
/// per-frame input state so widgets can express hover / pressed visuals
/// directly in their paint implementations.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    z: i32,
    cursor: CursorIcon,
    /// Current mouse position in logical pixels; `None` while the pointer is
    /// outside the window.
    pub mouse_pos: Option<Vec2>,
    /// True while the primary button is held down.
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        font_system: &'a FontSystem,
        mouse_pos: Option<Vec2>,
        mouse_pressed: bool,
    ) -> Self {
        Self {
            draw_list,
            font_system,
            z: 0,
            cursor: CursorIcon::Default,
            mouse_pos,
            mouse_pressed,
        }
    }

    // ── input queries ─────────────────────────────────────────────────────

    /// Returns `true` if the mouse cursor is inside `rect`.
    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.mouse_pos.is_some_and(|p| rect.contains(p))
    }

    /// Returns `true` if the primary button is held and the cursor is over `rect`.
    #[inline]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && self.is_hovered(rect)
    }

    /// Requests a cursor shape for this frame. The last request wins.
    pub fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }

    pub(crate) fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    // ── text measurement ──────────────────────────────────────────────────

    pub fn measure_text(&self, text: &str, font: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        self.font_system.measure_text(text, font, size, max_width)
    }

    pub fn line_metrics(&self, font: FontId, size: f32) -> LineMetrics {
        self.font_system.line_metrics(font, size)
    }

    /// Returns a [`LayoutCtx`] borrowing this painter's font system.
    ///
    /// Containers use it inside `paint` to re-measure their children.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'a> {
        LayoutCtx { fonts: self.font_system }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, color);
    }

    /// Rounded rectangle with optional stroke.
    ///
    /// Pass `radius = 0.0` for sharp corners.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Color, stroke: Option<Stroke>) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, CornerRadii::all(radius), fill, stroke);
    }

    /// Circle with optional stroke.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Color, stroke: Option<Stroke>) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, fill, stroke);
    }

    /// Straight segment of `width` logical pixels.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, cap: LineCap) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, width, color, cap);
    }

    /// Text at `origin` (top-left of the first line), wrapped at `max_width`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let z = self.next_z();
        self.draw_list.push_text(
            z,
            TextCmd { text: text.into(), font, size, color, origin, max_width },
        );
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use dial_engine::scene::DrawCmd;

    use super::*;

    #[test]
    fn each_draw_goes_on_a_new_layer() {
        let mut dl = DrawList::new();
        let fonts = FontSystem::new();
        {
            let mut p = Painter::new(&mut dl, &fonts, None, false);
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
            p.fill_circle(Vec2::new(5.0, 5.0), 3.0, Color::BLACK, None);
            p.line(Vec2::zero(), Vec2::new(10.0, 0.0), 1.0, Color::RED, LineCap::Butt);
        }
        let zs: Vec<i32> = dl.items().iter().map(|i| i.key.z.0).collect();
        assert_eq!(zs, vec![0, 1, 2]);
        assert!(matches!(dl.items()[2].cmd, DrawCmd::Line(_)));
    }

    #[test]
    fn hover_requires_pointer_inside() {
        let mut dl = DrawList::new();
        let fonts = FontSystem::new();
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);

        let p = Painter::new(&mut dl, &fonts, Some(Vec2::new(15.0, 15.0)), false);
        assert!(p.is_hovered(rect));
        assert!(!p.is_pressed(rect));
        drop(p);

        let p = Painter::new(&mut dl, &fonts, Some(Vec2::new(15.0, 15.0)), true);
        assert!(p.is_pressed(rect));
        drop(p);

        let p = Painter::new(&mut dl, &fonts, None, true);
        assert!(!p.is_hovered(rect));
        assert!(!p.is_pressed(rect));
    }

    #[test]
    fn empty_text_is_not_recorded() {
        let mut dl = DrawList::new();
        let fonts = FontSystem::new();
        let mut p = Painter::new(&mut dl, &fonts, None, false);
        p.text("", FontId::default(), 12.0, Color::BLACK, Vec2::zero(), None);
        drop(p);
        assert!(dl.is_empty());
    }
}
