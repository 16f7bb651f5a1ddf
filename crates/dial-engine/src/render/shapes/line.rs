use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;
use crate::scene::{DrawCmd, DrawItem, LineCap};

use super::common::{InstanceBuffer, ShapePipeline, SpanQueue};

/// Renderer for `DrawCmd::Line`.
///
/// Each segment is one quad aligned with the segment and padded by a pixel
/// for anti-aliasing; coverage comes from a capsule (round cap) or box
/// (butt cap) distance field.
pub struct LineRenderer {
    pipeline: ShapePipeline,
    instances: InstanceBuffer<LineInstance>,
    spans: SpanQueue,
    scratch: Vec<LineInstance>,
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self {
            pipeline: ShapePipeline::new("dial line", include_str!("shaders/line.wgsl"), LineInstance::layout),
            instances: InstanceBuffer::new("dial line instances"),
            spans: SpanQueue::default(),
            scratch: Vec::new(),
        }
    }
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, items: &[&DrawItem]) {
        self.spans.clear();
        self.scratch.clear();

        for item in items {
            let DrawCmd::Line(cmd) = &item.cmd else { continue };
            let start = self.scratch.len() as u32;

            if cmd.width > 0.0 && cmd.from.is_finite() && cmd.to.is_finite() {
                let cap = match cmd.cap {
                    LineCap::Butt => 0.0,
                    LineCap::Round => 1.0,
                };
                self.scratch.push(LineInstance {
                    from: [cmd.from.x, cmd.from.y],
                    to: [cmd.to.x, cmd.to.y],
                    half_width_cap: [cmd.width * 0.5, cap],
                    color: cmd.color.to_array(),
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

/// 40 bytes: endpoints, (half width, cap flag), color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineInstance {
    from: [f32; 2],
    to: [f32; 2],
    half_width_cap: [f32; 2],
    color: [f32; 4],
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32x2,
        3 => Float32x2,
        4 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
