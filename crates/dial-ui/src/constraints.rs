use dial_engine::coords::{Rect, Vec2};
use dial_engine::text::FontSystem;

// ── Edges ─────────────────────────────────────────────────────────────────

/// Padding on each side of a box, in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// `left + right`.
    #[inline]
    pub fn width(self) -> f32 {
        self.left + self.right
    }

    /// `top + bottom`.
    #[inline]
    pub fn height(self) -> f32 {
        self.top + self.bottom
    }

    /// The content box left inside `rect`. Never negative.
    #[inline]
    pub fn inset(self, rect: Rect) -> Rect {
        Rect::new(
            rect.origin.x + self.left,
            rect.origin.y + self.top,
            (rect.size.x - self.width()).max(0.0),
            (rect.size.y - self.height()).max(0.0),
        )
    }

    /// Outer size of a box whose content measures `content`.
    #[inline]
    pub fn outset(self, content: Vec2) -> Vec2 {
        Vec2::new(content.x + self.width(), content.y + self.height())
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Size bounds handed from parent to child during measure.
///
/// Children may return anything; parents clamp the answer with
/// [`Constraints::constrain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Anything from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Loose bounds for the content of a box padded by `edges`.
    /// Infinite maxima stay infinite.
    #[inline]
    #[must_use]
    pub fn shrink(self, edges: Edges) -> Self {
        Self::loose(Vec2::new(
            (self.max.x - edges.width()).max(0.0),
            (self.max.y - edges.height()).max(0.0),
        ))
    }

    /// Measures padded content: the child sees the shrunk bounds, the
    /// result is grown back by `edges`, raised to `min_size`, then clamped.
    pub fn padded(self, edges: Edges, min_size: Vec2, child: impl FnOnce(Constraints) -> Vec2) -> Vec2 {
        let outer = edges.outset(child(self.shrink(edges)));
        self.constrain(Vec2::new(outer.x.max(min_size.x), outer.y.max(min_size.y)))
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// What `measure` and `on_event` may consult besides their own state.
#[derive(Clone, Copy)]
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_both_ways() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 300.0)), Vec2::new(10.0, 100.0));
        assert_eq!(Constraints::tight(Vec2::new(30.0, 40.0)).constrain(Vec2::zero()), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn shrink_is_loose_and_never_negative() {
        let c = Constraints::tight(Vec2::new(100.0, 80.0));
        assert_eq!(c.shrink(Edges::all(10.0)), Constraints::loose(Vec2::new(80.0, 60.0)));
        assert_eq!(c.shrink(Edges::all(60.0)).max, Vec2::zero());
    }

    #[test]
    fn shrink_keeps_infinite_max() {
        let c = Constraints::loose(Vec2::new(100.0, f32::INFINITY));
        assert!(c.shrink(Edges::all(4.0)).max.y.is_infinite());
    }

    #[test]
    fn padded_adds_edges_and_honors_min_size() {
        let c = Constraints::loose(Vec2::new(500.0, 500.0));
        let pad = Edges::symmetric(6.0, 14.0);
        let label = |inner: Constraints| {
            assert_eq!(inner.max, Vec2::new(472.0, 488.0));
            Vec2::new(30.0, 17.0)
        };
        assert_eq!(c.padded(pad, Vec2::zero(), label), Vec2::new(58.0, 29.0));
        assert_eq!(c.padded(pad, Vec2::new(72.0, 0.0), label), Vec2::new(72.0, 29.0));
    }

    #[test]
    fn inset_asymmetric_padding() {
        let edges = Edges { top: 4.0, bottom: 8.0, left: 6.0, right: 10.0 };
        assert_eq!(edges.inset(Rect::new(5.0, 5.0, 100.0, 60.0)), Rect::new(11.0, 9.0, 84.0, 48.0));
        assert_eq!(Edges::all(20.0).inset(Rect::new(0.0, 0.0, 10.0, 10.0)).size, Vec2::zero());
    }
}
