//! Analog clock face widget.

use std::cell::RefCell;

use dial_clock::{FaceLayout, FaceStyle, HandKind, Point, TimeOfDay};
use dial_ui::prelude::*;

const FACE_FILL: Color = Color::WHITE;
const INK: Color = Color::BLACK;
const SECOND_HAND: Color = Color::RED;
const OUTLINE_WIDTH: f32 = 1.0;
const TICK_WIDTH: f32 = 1.0;

#[inline]
fn v(p: Point) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Circle, numerals, ticks, and three hands for the time returned by
/// `source`. Takes whatever space its parent gives it.
///
/// `source` is called on every paint, so a redraw for any reason (resize,
/// stopwatch tick, hover) shows the current time.
pub struct AnalogFace {
    source: Box<dyn Fn() -> TimeOfDay>,
    font: FontId,
    numeral_size: f32,
    style: FaceStyle,
    /// Layout for the last rect painted into; recomputed on resize.
    cached: RefCell<Option<(Rect, FaceLayout)>>,
}

impl AnalogFace {
    pub fn new(
        source: impl Fn() -> TimeOfDay + 'static,
        font: FontId,
        numeral_size: f32,
        style: FaceStyle,
    ) -> Self {
        Self {
            source: Box::new(source),
            font,
            numeral_size,
            style,
            cached: RefCell::new(None),
        }
    }

    /// Layout for `rect`, or `None` when the rect is too small for a face.
    fn layout(&self, rect: Rect) -> Option<FaceLayout> {
        let mut cached = self.cached.borrow_mut();
        if let Some((r, layout)) = cached.as_ref() {
            if *r == rect {
                return Some(layout.clone());
            }
        }
        let origin = Point::new(rect.origin.x, rect.origin.y);
        let layout = FaceLayout::compute(origin, rect.size.x, rect.size.y, self.style)?;
        log::debug!("face layout for {}x{}: radius {}", rect.size.x, rect.size.y, layout.radius);
        *cached = Some((rect, layout.clone()));
        Some(layout)
    }

    fn paint_dial(&self, painter: &mut Painter, face: &FaceLayout) {
        painter.fill_circle(
            v(face.center),
            face.radius,
            FACE_FILL,
            Some(Stroke::new(OUTLINE_WIDTH, INK)),
        );

        let ascent = painter.line_metrics(self.font, self.numeral_size).ascent;
        for n in &face.numerals {
            let width = painter.measure_text(&n.label, self.font, self.numeral_size, None).x;
            let origin = Vec2::new(n.anchor.x - width / 2.0, n.anchor.y - ascent);
            painter.text(n.label.as_str(), self.font, self.numeral_size, INK, origin, None);
        }

        for tick in &face.ticks {
            painter.line(v(tick.segment.from), v(tick.segment.to), TICK_WIDTH, INK, LineCap::Butt);
        }
    }

    fn paint_hands(&self, painter: &mut Painter, face: &FaceLayout, t: TimeOfDay) {
        for hand in face.hands(t) {
            let color = match hand.kind {
                HandKind::Second => SECOND_HAND,
                HandKind::Minute | HandKind::Hour => INK,
            };
            painter.line(v(hand.segment.from), v(hand.segment.to), hand.stroke, color, LineCap::Round);
        }
        painter.fill_circle(v(face.center), face.style().cap_radius, INK, None);
    }
}

impl Widget for AnalogFace {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        // Fill the width; the height comes from the parent (a growing slot).
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { 0.0 };
        let h = if constraints.max.y.is_finite() { constraints.max.y } else { 0.0 };
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let Some(face) = self.layout(rect) else {
            return;
        };
        self.paint_dial(painter, &face);
        self.paint_hands(painter, &face, (self.source)());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use dial_engine::scene::DrawCmd;
    use dial_engine::scene::shapes::LineCmd;

    use super::*;

    fn paint(face: AnalogFace, w: f32, h: f32) -> UiScene {
        let mut ui = UiScene::new();
        let mut root: Element = face.into();
        ui.frame(&mut root, Vec2::new(w, h), &UiInput::default());
        ui
    }

    /// Last line drawn by the face.
    fn second_hand(ui: &UiScene) -> LineCmd {
        ui.draw_list
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Line(l) => Some(l.clone()),
                _ => None,
            })
            .last()
            .unwrap()
    }

    /// (circles, lines, texts)
    fn count(ui: &UiScene) -> (usize, usize, usize) {
        let mut c = (0, 0, 0);
        for item in ui.draw_list.items() {
            match item.cmd {
                DrawCmd::Circle(_) => c.0 += 1,
                DrawCmd::Line(_) => c.1 += 1,
                DrawCmd::Text(_) => c.2 += 1,
                DrawCmd::RoundedRect(_) => {}
            }
        }
        c
    }

    fn face(time: TimeOfDay) -> AnalogFace {
        AnalogFace::new(move || time, FontId::default(), 12.0, FaceStyle::default())
    }

    fn at(h: u32, m: u32, s: u32) -> TimeOfDay {
        TimeOfDay::new(h, m, s).unwrap()
    }

    #[test]
    fn full_face_with_hands() {
        let ui = paint(face(at(3, 15, 30)), 400.0, 400.0);
        // face + cap, 60 ticks + 3 hands, 12 numerals
        assert_eq!(count(&ui), (2, 63, 12));
    }

    #[test]
    fn every_paint_reads_the_source_again() {
        let now = Rc::new(Cell::new(at(3, 15, 30)));
        let source = now.clone();
        let mut root: Element =
            AnalogFace::new(move || source.get(), FontId::default(), 12.0, FaceStyle::default()).into();
        let mut ui = UiScene::new();
        let viewport = Vec2::new(400.0, 400.0);

        ui.frame(&mut root, viewport, &UiInput::default());
        let first = second_hand(&ui);
        now.set(at(3, 15, 45));
        ui.frame(&mut root, viewport, &UiInput::default());
        let second = second_hand(&ui);

        // 30 s points down, 45 s points left.
        assert!((first.to.y - 360.0).abs() < 1e-3);
        assert!((second.to.x - 40.0).abs() < 1e-3);
    }

    #[test]
    fn nothing_drawn_when_too_small() {
        let ui = paint(face(at(1, 2, 3)), 30.0, 300.0);
        assert!(ui.draw_list.is_empty());
    }

    #[test]
    fn second_hand_is_red_and_drawn_last_before_cap() {
        let ui = paint(face(at(3, 15, 30)), 400.0, 400.0);
        let second = second_hand(&ui);
        assert_eq!(second.color, Color::RED);
        assert_eq!(second.width, 2.0);
        // 30 s points straight down: radius 180, reach 160.
        assert!((second.to.x - 200.0).abs() < 1e-3);
        assert!((second.to.y - 360.0).abs() < 1e-3);
    }

    #[test]
    fn numerals_sit_on_their_baseline() {
        let ui = paint(face(at(0, 0, 0)), 400.0, 400.0);
        let twelve = ui
            .draw_list
            .items()
            .iter()
            .find_map(|i| match &i.cmd {
                DrawCmd::Text(t) if t.text == "12" => Some(t.clone()),
                _ => None,
            })
            .unwrap();
        let ascent = ui.font_system.line_metrics(FontId::default(), 12.0).ascent;
        // Anchor is 155 px above center, nudged 5 px down.
        assert!((twelve.origin.x - 200.0).abs() < 1e-3);
        assert!((twelve.origin.y - (50.0 - ascent)).abs() < 1e-3);
    }

    #[test]
    fn layout_is_reused_until_resize() {
        let f = face(at(0, 0, 0));
        let r = Rect::new(0.0, 0.0, 300.0, 300.0);
        let a = f.layout(r).unwrap();
        assert_eq!(f.cached.borrow().as_ref().map(|(r, _)| *r), Some(r));
        let b = f.layout(Rect::new(0.0, 0.0, 200.0, 200.0)).unwrap();
        assert!(b.radius < a.radius);
    }
}
