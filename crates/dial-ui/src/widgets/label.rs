use std::cell::RefCell;

use dial_engine::coords::{Rect, Vec2};
use dial_engine::paint::Color;
use dial_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Horizontal placement of a [`Label`]'s text inside its rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Single-line text whose content is produced by a closure.
///
/// The closure is called once per frame during measure; paint reuses that
/// string, so both passes agree even when the source changes mid-frame.
///
/// # Example
/// ```rust,ignore
/// let model = model.clone();
/// Label::new(move || model.borrow().clock_text(), font, 24.0, Color::BLACK)
///     .align(TextAlign::Center)
/// ```
pub struct Label {
    source: Box<dyn Fn() -> String>,
    font: FontId,
    size: f32,
    color: Color,
    align: TextAlign,
    current: RefCell<String>,
}

impl Label {
    pub fn new(
        source: impl Fn() -> String + 'static,
        font: FontId,
        size: f32,
        color: Color,
    ) -> Self {
        Self {
            source: Box::new(source),
            font,
            size,
            color,
            align: TextAlign::Start,
            current: RefCell::new(String::new()),
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    fn refresh(&self) {
        let next = (self.source)();
        let mut current = self.current.borrow_mut();
        if *current != next {
            *current = next;
        }
    }
}

impl Widget for Label {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.refresh();
        let text = self.current.borrow();
        let natural = ctx.fonts.measure_text(&text, self.font, self.size, None);
        // Aligned labels take the full width so the text can move inside it.
        let w = match self.align {
            TextAlign::Start => natural.x,
            _ if constraints.max.x.is_finite() => constraints.max.x,
            _ => natural.x,
        };
        constraints.constrain(Vec2::new(w, natural.y))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let text = self.current.borrow();
        let width = painter.measure_text(&text, self.font, self.size, None).x;
        let x = match self.align {
            TextAlign::Start => rect.origin.x,
            TextAlign::Center => rect.origin.x + (rect.size.x - width) * 0.5,
            TextAlign::End => rect.origin.x + rect.size.x - width,
        };
        painter.text(
            text.as_str(),
            self.font,
            self.size,
            self.color,
            Vec2::new(x.round(), rect.origin.y),
            None,
        );
    }
}
