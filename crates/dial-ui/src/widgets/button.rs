use dial_engine::coords::{Rect, Vec2};
use dial_engine::paint::Color;
use dial_engine::scene::Stroke;
use dial_engine::window::CursorIcon;

use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A clickable widget that wraps any child content.
///
/// Visual state (hover, press) is read from `Painter` during `paint` so no
/// retained state is needed.
///
/// # Example
/// ```rust,ignore
/// Button::new(Text::new("Start", font, 14.0, Color::BLACK))
///     .background(Color::WHITE)
///     .hover_background(Color::from_straight(0.9, 0.9, 0.9, 1.0))
///     .padding(Edges::symmetric(6.0, 14.0))
///     .on_click(move || model.borrow_mut().start())
/// ```
pub struct Button {
    child: Element,
    on_click: Option<Box<dyn FnMut()>>,

    background: Color,
    hover_background: Color,
    press_background: Color,
    stroke: Option<Stroke>,
    corner_radius: f32,
    padding: Edges,
    min_size: Vec2,
}

impl Button {
    pub fn new(child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            on_click: None,
            background: Color::transparent(),
            hover_background: Color::transparent(),
            press_background: Color::transparent(),
            stroke: None,
            corner_radius: 0.0,
            padding: Edges::default(),
            min_size: Vec2::zero(),
        }
    }

    /// Callback invoked when the button is clicked.
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Background color when the cursor is over the button.
    pub fn hover_background(mut self, color: Color) -> Self {
        self.hover_background = color;
        self
    }

    /// Background color while the primary button is held.
    pub fn press_background(mut self, color: Color) -> Self {
        self.press_background = color;
        self
    }

    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.min_size = Vec2::new(width, height);
        self
    }

    /// Child size and the padding that centers it inside `rect`.
    fn child_rect(&self, rect: Rect, ctx: &LayoutCtx) -> Rect {
        let inner = self.padding.inset(rect);
        let s = self.child.measure(Constraints::loose(inner.size), ctx);
        Rect::new(
            inner.origin.x + ((inner.size.x - s.x) * 0.5).max(0.0),
            inner.origin.y + ((inner.size.y - s.y) * 0.5).max(0.0),
            s.x,
            s.y,
        )
    }
}

impl Widget for Button {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        constraints.padded(self.padding, self.min_size, |inner| self.child.measure(inner, ctx))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let bg = if painter.is_pressed(rect) {
            self.press_background
        } else if painter.is_hovered(rect) {
            self.hover_background
        } else {
            self.background
        };
        if painter.is_hovered(rect) {
            painter.set_cursor(CursorIcon::Pointer);
        }

        painter.fill_rounded_rect(rect, self.corner_radius, bg, self.stroke);
        let child_rect = self.child_rect(rect, &painter.layout_ctx());
        self.child.paint(painter, child_rect);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        let UiEvent::Click { pos } = event;
        if !rect.contains(*pos) {
            return EventResult::Ignored;
        }
        if let Some(f) = &mut self.on_click {
            f();
        }
        EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use dial_engine::scene::{DrawCmd, DrawList};
    use dial_engine::text::FontSystem;

    use super::*;
    use crate::widgets::container::Container;

    fn counting_button(hits: Rc<Cell<u32>>) -> Button {
        Button::new(Container::new().min_size(40.0, 10.0))
            .padding(Edges::all(5.0))
            .on_click(move || hits.set(hits.get() + 1))
    }

    #[test]
    fn measure_adds_padding() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let b = counting_button(Rc::new(Cell::new(0)));
        let s = b.measure(Constraints::loose(Vec2::new(500.0, 500.0)), &ctx);
        assert_eq!(s, Vec2::new(50.0, 20.0));
    }

    #[test]
    fn click_inside_fires_once() {
        let hits = Rc::new(Cell::new(0));
        let mut b = counting_button(hits.clone());
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let rect = Rect::new(0.0, 0.0, 50.0, 20.0);

        let r = b.on_event(&UiEvent::Click { pos: Vec2::new(25.0, 10.0) }, rect, &ctx);
        assert!(r.is_consumed());
        assert_eq!(hits.get(), 1);

        let r = b.on_event(&UiEvent::Click { pos: Vec2::new(80.0, 10.0) }, rect, &ctx);
        assert!(!r.is_consumed());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn pressed_background_wins_over_hover() {
        let pressed = Color::RED;
        let b = Button::new(Container::new())
            .background(Color::WHITE)
            .hover_background(Color::BLACK)
            .press_background(pressed);

        let mut dl = DrawList::new();
        let fonts = FontSystem::new();
        let mut p = Painter::new(&mut dl, &fonts, Some(Vec2::new(5.0, 5.0)), true);
        b.paint(&mut p, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(p.cursor(), CursorIcon::Pointer);
        drop(p);

        match &dl.items()[0].cmd {
            DrawCmd::RoundedRect(r) => assert_eq!(r.fill, pressed),
            other => panic!("expected rounded rect, got {other:?}"),
        }
    }
}
