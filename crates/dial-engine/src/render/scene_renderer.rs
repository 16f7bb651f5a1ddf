use crate::scene::{DrawItem, DrawKind, DrawList};
use crate::text::FontSystem;

use super::shapes::{CircleRenderer, LineRenderer, RoundedRectRenderer, TextRenderer};
use super::{RenderCtx, RenderTarget};

/// Draws a whole [`DrawList`] in one render pass, in paint order.
#[derive(Default)]
pub struct SceneRenderer {
    rounded_rect: RoundedRectRenderer,
    circle: CircleRenderer,
    line: LineRenderer,
    text: TextRenderer,
    runs: Vec<(DrawKind, usize)>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        let items: Vec<&DrawItem> = draw_list.iter_in_paint_order().collect();

        self.rounded_rect.prepare(ctx, &items);
        self.circle.prepare(ctx, &items);
        self.line.prepare(ctx, &items);
        self.text.prepare(ctx, &items, fonts);

        paint_runs(&items, &mut self.runs);

        // Always begin the pass so the target is cleared even with no items.
        let mut rpass = target.begin_pass("dial scene pass");
        for &(kind, count) in &self.runs {
            match kind {
                DrawKind::RoundedRect => self.rounded_rect.draw(ctx, &mut rpass, count),
                DrawKind::Circle => self.circle.draw(ctx, &mut rpass, count),
                DrawKind::Line => self.line.draw(ctx, &mut rpass, count),
                DrawKind::Text => self.text.draw(ctx, &mut rpass, count),
            }
        }
    }
}

/// Groups consecutive items of the same kind into `(kind, count)` runs.
fn paint_runs(items: &[&DrawItem], runs: &mut Vec<(DrawKind, usize)>) {
    runs.clear();
    for item in items {
        let kind = item.cmd.kind();
        match runs.last_mut() {
            Some((last, count)) if *last == kind => *count += 1,
            _ => runs.push((kind, 1)),
        }
    }
}
