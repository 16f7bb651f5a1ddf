use dial_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

// ── Align ─────────────────────────────────────────────────────────────────

/// Cross-axis alignment inside a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Children fill the full cross-axis extent (default).
    #[default]
    Stretch,
    /// Children are placed at the start of the cross axis.
    Start,
    /// Children are centered on the cross axis.
    Center,
    /// Children are placed at the end of the cross axis.
    End,
}

impl Align {
    fn offset(self, available: f32, used: f32) -> f32 {
        match self {
            Align::Stretch | Align::Start => 0.0,
            Align::Center => (available - used) * 0.5,
            Align::End => available - used,
        }
    }

    fn child_constraints(self, cross_max: f32, main_max: f32, vertical: bool) -> Constraints {
        // Only enforce the cross extent when it is actually constrained;
        // otherwise children size naturally instead of to infinity.
        let cross_min = match self {
            Align::Stretch if cross_max.is_finite() => cross_max,
            _ => 0.0,
        };
        if vertical {
            Constraints { min: Vec2::new(cross_min, 0.0), max: Vec2::new(cross_max, main_max) }
        } else {
            Constraints { min: Vec2::new(0.0, cross_min), max: Vec2::new(main_max, cross_max) }
        }
    }
}

struct Slot {
    element: Element,
    grow: bool,
}

// ── Column ────────────────────────────────────────────────────────────────

/// Vertical flex container. Children are stacked top to bottom.
///
/// Children added with [`grow`](Self::grow) share whatever height the fixed
/// children leave over.
///
/// # Example
/// ```rust,ignore
/// Column::new()
///     .spacing(8.0)
///     .cross_align(Align::Center)
///     .child(Label::new(move || title(), font, 20.0, Color::BLACK))
///     .grow(face)
///     .child(buttons)
/// ```
pub struct Column {
    children: Vec<Slot>,
    spacing: f32,
    padding: Edges,
    cross_align: Align,
}

impl Column {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            spacing: 0.0,
            padding: Edges::default(),
            cross_align: Align::Stretch,
        }
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
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

    pub fn cross_align(mut self, align: Align) -> Self {
        self.cross_align = align;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(Slot { element: child.into(), grow: false });
        self
    }

    /// Adds a child that takes a share of the leftover height.
    pub fn grow(mut self, child: impl Into<Element>) -> Self {
        self.children.push(Slot { element: child.into(), grow: true });
        self
    }

    fn spacing_total(&self) -> f32 {
        self.children.len().saturating_sub(1) as f32 * self.spacing
    }

    /// Child rects inside `rect`, in child order.
    fn layout(&self, rect: Rect, ctx: &LayoutCtx) -> Vec<Rect> {
        let inner = self.padding.inset(rect);
        let child_c = self.cross_align.child_constraints(inner.size.x, f32::INFINITY, true);
        let sizes: Vec<Vec2> = self.children.iter().map(|s| s.element.measure(child_c, ctx)).collect();

        let grow_count = self.children.iter().filter(|s| s.grow).count();
        let fixed_h: f32 = self
            .children
            .iter()
            .zip(&sizes)
            .filter(|(slot, _)| !slot.grow)
            .map(|(_, s)| s.y)
            .sum();
        let grow_h = if grow_count > 0 {
            (inner.size.y - fixed_h - self.spacing_total()).max(0.0) / grow_count as f32
        } else {
            0.0
        };

        let mut y = inner.origin.y;
        let mut rects = Vec::with_capacity(sizes.len());
        for (slot, s) in self.children.iter().zip(&sizes) {
            let h = if slot.grow { grow_h.max(s.y) } else { s.y };
            let x = inner.origin.x + self.cross_align.offset(inner.size.x, s.x);
            rects.push(Rect::new(x, y, s.x, h));
            y += h + self.spacing;
        }
        rects
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner_w = (constraints.max.x - self.padding.width()).max(0.0);
        let child_c = self.cross_align.child_constraints(inner_w, f32::INFINITY, true);

        let mut total_h = self.padding.height() + self.spacing_total();
        let mut max_child_w: f32 = 0.0;
        for slot in &self.children {
            let s = slot.element.measure(child_c, ctx);
            total_h += s.y;
            max_child_w = max_child_w.max(s.x);
        }

        let w = match self.cross_align {
            Align::Stretch if constraints.max.x.is_finite() => constraints.max.x,
            _ => max_child_w + self.padding.width(),
        };
        constraints.constrain(Vec2::new(w, total_h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let rects = self.layout(rect, &painter.layout_ctx());
        for (slot, r) in self.children.iter().zip(rects) {
            slot.element.paint(painter, r);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let rects = self.layout(rect, ctx);
        for (slot, r) in self.children.iter_mut().zip(rects) {
            if slot.element.on_event(event, r, ctx).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

// ── Row ───────────────────────────────────────────────────────────────────

/// Horizontal flex container. Children are placed left to right.
///
/// # Example
/// ```rust,ignore
/// Row::new()
///     .spacing(8.0)
///     .child(start_button)
///     .child(stop_button)
/// ```
pub struct Row {
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
    cross_align: Align,
}

impl Row {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            spacing: 0.0,
            padding: Edges::default(),
            cross_align: Align::Stretch,
        }
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn cross_align(mut self, align: Align) -> Self {
        self.cross_align = align;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.children.extend(iter.into_iter().map(Into::into));
        self
    }

    fn layout(&self, rect: Rect, ctx: &LayoutCtx) -> Vec<Rect> {
        let inner = self.padding.inset(rect);
        let child_c = self.cross_align.child_constraints(inner.size.y, f32::INFINITY, false);

        let mut x = inner.origin.x;
        self.children
            .iter()
            .map(|c| {
                let s = c.measure(child_c, ctx);
                let y = inner.origin.y + self.cross_align.offset(inner.size.y, s.y);
                let r = Rect::new(x, y, s.x, s.y);
                x += s.x + self.spacing;
                r
            })
            .collect()
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Row {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner_h = (constraints.max.y - self.padding.height()).max(0.0);
        let child_c = self.cross_align.child_constraints(inner_h, f32::INFINITY, false);

        let sizes: Vec<Vec2> = self.children.iter().map(|c| c.measure(child_c, ctx)).collect();
        let total_w: f32 = sizes.iter().map(|s| s.x).sum::<f32>()
            + self.children.len().saturating_sub(1) as f32 * self.spacing
            + self.padding.width();
        let max_child_h = sizes.iter().map(|s| s.y).fold(0.0f32, f32::max);

        let h = match self.cross_align {
            Align::Stretch if constraints.max.y.is_finite() => constraints.max.y,
            _ => max_child_h + self.padding.height(),
        };
        constraints.constrain(Vec2::new(total_w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let rects = self.layout(rect, &painter.layout_ctx());
        for (child, r) in self.children.iter().zip(rects) {
            child.paint(painter, r);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let rects = self.layout(rect, ctx);
        for (child, r) in self.children.iter_mut().zip(rects) {
            if child.on_event(event, r, ctx).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dial_engine::text::FontSystem;

    use super::*;
    use crate::widgets::container::Container;

    fn boxed(w: f32, h: f32) -> Container {
        Container::new().min_size(w, h)
    }

    /// Records the rect it was painted into.
    struct Probe(Rc<RefCell<Option<Rect>>>);

    impl Widget for Probe {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.constrain(Vec2::new(20.0, 10.0))
        }
        fn paint(&self, _painter: &mut Painter, rect: Rect) {
            *self.0.borrow_mut() = Some(rect);
        }
    }

    #[test]
    fn column_stacks_with_spacing() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let col = Column::new().spacing(5.0).child(boxed(10.0, 10.0)).child(boxed(30.0, 20.0));
        let rects = col.layout(Rect::new(0.0, 0.0, 100.0, 100.0), &ctx);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 100.0, 10.0));
        assert_eq!(rects[1], Rect::new(0.0, 15.0, 100.0, 20.0));
    }

    #[test]
    fn column_measure_sums_heights() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let col = Column::new()
            .padding_all(2.0)
            .spacing(4.0)
            .cross_align(Align::Start)
            .child(boxed(10.0, 10.0))
            .child(boxed(30.0, 20.0));
        let s = col.measure(Constraints::loose(Vec2::new(200.0, 200.0)), &ctx);
        assert_eq!(s, Vec2::new(34.0, 38.0));
    }

    #[test]
    fn grow_child_takes_leftover_height() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let col = Column::new()
            .spacing(10.0)
            .child(boxed(10.0, 30.0))
            .grow(boxed(10.0, 0.0))
            .child(boxed(10.0, 40.0));
        let rects = col.layout(Rect::new(0.0, 0.0, 100.0, 300.0), &ctx);
        assert_eq!(rects[1], Rect::new(0.0, 40.0, 100.0, 210.0));
        assert_eq!(rects[2].origin.y, 260.0);
    }

    #[test]
    fn centered_column_centers_children() {
        let seen = Rc::new(RefCell::new(None));
        let col = Column::new().cross_align(Align::Center).child(Probe(seen.clone()));

        let fonts = FontSystem::new();
        let mut dl = dial_engine::scene::DrawList::new();
        let mut p = Painter::new(&mut dl, &fonts, None, false);
        col.paint(&mut p, Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(*seen.borrow(), Some(Rect::new(40.0, 0.0, 20.0, 10.0)));
    }

    #[test]
    fn row_places_left_to_right() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let row = Row::new()
            .spacing(6.0)
            .cross_align(Align::Center)
            .children([boxed(10.0, 10.0), boxed(20.0, 30.0)]);
        let rects = row.layout(Rect::new(0.0, 0.0, 100.0, 30.0), &ctx);
        assert_eq!(rects[0], Rect::new(0.0, 10.0, 10.0, 10.0));
        assert_eq!(rects[1], Rect::new(16.0, 0.0, 20.0, 30.0));

        let s = row.measure(Constraints::loose(Vec2::new(500.0, f32::INFINITY)), &ctx);
        assert_eq!(s, Vec2::new(36.0, 30.0));
    }

    #[test]
    fn click_reaches_the_child_under_the_pointer() {
        use crate::widgets::button::Button;
        use std::cell::Cell;

        let hits = Rc::new(Cell::new((0, 0)));
        let (a, b) = (hits.clone(), hits.clone());
        let mut row = Row::new()
            .child(Button::new(boxed(10.0, 10.0)).on_click(move || a.set((a.get().0 + 1, a.get().1))))
            .child(Button::new(boxed(10.0, 10.0)).on_click(move || b.set((b.get().0, b.get().1 + 1))));

        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let rect = Rect::new(0.0, 0.0, 100.0, 10.0);
        row.on_event(&UiEvent::Click { pos: Vec2::new(15.0, 5.0) }, rect, &ctx);
        assert_eq!(hits.get(), (0, 1));
    }
}
