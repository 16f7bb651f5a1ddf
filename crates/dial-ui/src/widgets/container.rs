use dial_engine::coords::{Rect, Vec2};
use dial_engine::paint::Color;
use dial_engine::scene::Stroke;

use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A single-child widget that applies padding, background, stroke, and/or corner rounding.
///
/// All properties are optional; an empty `Container` is a fixed-size gap.
///
/// # Example
/// ```rust,ignore
/// Container::new()
///     .padding(Edges::symmetric(8.0, 0.0))
///     .background(Color::WHITE)
///     .stroke(Stroke::new(1.0, Color::BLACK))
///     .child(Text::new("hello", font, 14.0, Color::BLACK))
/// ```
pub struct Container {
    child: Option<Element>,
    padding: Edges,
    background: Option<Color>,
    stroke: Option<Stroke>,
    corner_radius: f32,
    min_size: Vec2,
}

impl Container {
    pub fn new() -> Self {
        Self {
            child: None,
            padding: Edges::default(),
            background: None,
            stroke: None,
            corner_radius: 0.0,
            min_size: Vec2::zero(),
        }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn padding_all(mut self, v: f32) -> Self {
        self.padding = Edges::all(v);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
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

    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.min_size = Vec2::new(width, height);
        self
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        constraints.padded(self.padding, self.min_size, |inner| {
            self.child.as_ref().map_or(Vec2::zero(), |c| c.measure(inner, ctx))
        })
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if self.background.is_some() || self.stroke.is_some() {
            let fill = self.background.unwrap_or(Color::TRANSPARENT);
            painter.fill_rounded_rect(rect, self.corner_radius, fill, self.stroke);
        }

        if let Some(child) = &self.child {
            child.paint(painter, self.padding.inset(rect));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        match &mut self.child {
            Some(child) => child.on_event(event, self.padding.inset(rect), ctx),
            None => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use dial_engine::scene::DrawList;
    use dial_engine::text::FontSystem;

    use super::*;

    #[test]
    fn empty_container_is_its_min_size() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let c = Container::new().min_size(12.0, 8.0);
        assert_eq!(c.measure(Constraints::loose(Vec2::new(100.0, 100.0)), &ctx), Vec2::new(12.0, 8.0));
    }

    #[test]
    fn padding_wraps_child() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let c = Container::new().padding_all(4.0).child(Container::new().min_size(10.0, 10.0));
        assert_eq!(c.measure(Constraints::loose(Vec2::new(100.0, 100.0)), &ctx), Vec2::new(18.0, 18.0));
    }

    #[test]
    fn plain_container_draws_nothing() {
        let fonts = FontSystem::new();
        let mut dl = DrawList::new();
        let mut p = Painter::new(&mut dl, &fonts, None, false);
        Container::new().padding_all(3.0).paint(&mut p, Rect::new(0.0, 0.0, 10.0, 10.0));
        drop(p);
        assert!(dl.is_empty());
    }
}
