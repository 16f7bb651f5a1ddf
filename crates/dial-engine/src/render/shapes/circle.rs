use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;
use crate::scene::{DrawCmd, DrawItem};

use super::common::{InstanceBuffer, ShapePipeline, SpanQueue};

/// Renderer for `DrawCmd::Circle`: SDF disc with an optional inner stroke.
pub struct CircleRenderer {
    pipeline: ShapePipeline,
    instances: InstanceBuffer<CircleInstance>,
    spans: SpanQueue,
    scratch: Vec<CircleInstance>,
}

impl Default for CircleRenderer {
    fn default() -> Self {
        Self {
            pipeline: ShapePipeline::new(
                "dial circle",
                include_str!("shaders/circle.wgsl"),
                CircleInstance::layout,
            ),
            instances: InstanceBuffer::new("dial circle instances"),
            spans: SpanQueue::default(),
            scratch: Vec::new(),
        }
    }
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, items: &[&DrawItem]) {
        self.spans.clear();
        self.scratch.clear();

        for item in items {
            let DrawCmd::Circle(cmd) = &item.cmd else { continue };
            let start = self.scratch.len() as u32;

            if cmd.radius > 0.0 && cmd.center.is_finite() {
                let (stroke_width, stroke_color) = cmd
                    .stroke
                    .map_or((0.0, [0.0; 4]), |s| (s.width.clamp(0.0, cmd.radius), s.color.to_array()));
                self.scratch.push(CircleInstance {
                    center: [cmd.center.x, cmd.center.y],
                    radius_stroke: [cmd.radius, stroke_width],
                    fill: cmd.fill.to_array(),
                    stroke_color,
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

/// 48 bytes: center, (radius, stroke width), fill, stroke color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius_stroke: [f32; 2],
    fill: [f32; 4],
    stroke_color: [f32; 4],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32x2,
        3 => Float32x4,
        4 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
