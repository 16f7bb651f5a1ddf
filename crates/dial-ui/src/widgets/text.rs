use dial_engine::coords::{Rect, Vec2};
use dial_engine::paint::Color;
use dial_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// A single-run text widget.
///
/// Text is measured using the engine's `FontSystem` so layout is pixel-accurate.
/// Wrapping is controlled by the width constraint from the parent.
///
/// # Example
/// ```rust,ignore
/// Text::new("Start", font, 14.0, Color::BLACK)
/// ```
pub struct Text {
    pub text: String,
    pub font: FontId,
    pub size: f32,
    pub color: Color,
}

impl Text {
    pub fn new(text: impl Into<String>, font: FontId, size: f32, color: Color) -> Self {
        Self { text: text.into(), font, size, color }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for Text {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let max_w = constraints.max.x.is_finite().then_some(constraints.max.x);
        let size = ctx.fonts.measure_text(&self.text, self.font, self.size, max_w);
        constraints.constrain(size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let max_w = (rect.size.x > 0.0).then_some(rect.size.x);
        painter.text(&self.text, self.font, self.size, self.color, rect.origin, max_w);
    }
}

#[cfg(test)]
mod tests {
    use dial_engine::text::FontSystem;

    use super::*;

    #[test]
    fn empty_font_system_reports_one_line() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let t = Text::new("hello", FontId::default(), 10.0, Color::BLACK);
        let s = t.measure(Constraints::loose(Vec2::new(100.0, 100.0)), &ctx);
        assert_eq!(s.x, 0.0);
        assert!(s.y > 0.0);
    }
}
