use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;
use crate::scene::{DrawCmd, DrawItem};

use super::common::{InstanceBuffer, ShapePipeline, SpanQueue};

/// Renderer for `DrawCmd::RoundedRect`.
///
/// Corner radii are clamped to half the shorter side in the shader, so a
/// large radius yields a pill. Strokes are drawn inside the edge.
pub struct RoundedRectRenderer {
    pipeline: ShapePipeline,
    instances: InstanceBuffer<RoundedRectInstance>,
    spans: SpanQueue,
    scratch: Vec<RoundedRectInstance>,
}

impl Default for RoundedRectRenderer {
    fn default() -> Self {
        Self {
            pipeline: ShapePipeline::new(
                "dial rounded_rect",
                include_str!("shaders/rounded_rect.wgsl"),
                RoundedRectInstance::layout,
            ),
            instances: InstanceBuffer::new("dial rounded_rect instances"),
            spans: SpanQueue::default(),
            scratch: Vec::new(),
        }
    }
}

impl RoundedRectRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, items: &[&DrawItem]) {
        self.spans.clear();
        self.scratch.clear();

        for item in items {
            let DrawCmd::RoundedRect(cmd) = &item.cmd else { continue };
            let start = self.scratch.len() as u32;

            let r = cmd.rect.normalized();
            if !r.is_empty() && r.is_finite() {
                let (stroke_width, stroke_color) =
                    cmd.stroke.map_or((0.0, [0.0; 4]), |s| (s.width.max(0.0), s.color.to_array()));
                self.scratch.push(RoundedRectInstance {
                    rect: [r.origin.x, r.origin.y, r.size.x, r.size.y],
                    radii: cmd.radii.as_array().map(|v| v.max(0.0)),
                    fill: cmd.fill.to_array(),
                    stroke_color,
                    stroke_width,
                });
            }

            self.spans.push(start..self.scratch.len() as u32, item.clip_rect);
        }

        if self.scratch.is_empty() {
            return;
        }
        self.pipeline.prepare(ctx);
        self.instances.upload(ctx, &self.scratch);
    }

    pub fn draw(&mut self, ctx: &RenderCtx<'_>, rpass: &mut wgpu::RenderPass<'_>, count: usize) {
        let spans = self.spans.take(count);
        self.pipeline.draw(ctx, rpass, self.instances.buffer(), spans);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// 68 bytes: rect (x, y, w, h), radii (tl, tr, br, bl), fill, stroke color, stroke width.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct RoundedRectInstance {
    rect: [f32; 4],
    radii: [f32; 4],
    fill: [f32; 4],
    stroke_color: [f32; 4],
    stroke_width: f32,
}

impl RoundedRectInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x4,
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RoundedRectInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
