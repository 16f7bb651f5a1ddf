//! Pieces shared by the shape renderers.

use std::marker::PhantomData;
use std::num::NonZeroU64;
use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::{Rect, Viewport};
use crate::render::RenderCtx;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── viewport uniform ──────────────────────────────────────────────────────

/// `size` maps logical px to NDC; `scale` sizes the 1-physical-pixel AA ramp.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub size: [f32; 2],
    pub scale: f32,
    pub _pad: f32,
}

impl ViewportUniform {
    pub(super) fn from_ctx(ctx: &RenderCtx<'_>) -> Self {
        Self { size: ctx.viewport.uniform_size(), scale: ctx.scale_factor, _pad: 0.0 }
    }

    pub(super) fn min_binding_size() -> Option<NonZeroU64> {
        NonZeroU64::new(std::mem::size_of::<Self>() as u64)
    }

    pub(super) fn layout_entry() -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Self::min_binding_size(),
            },
            count: None,
        }
    }
}

// ── unit quad ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub corner: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { corner: [0.0, 0.0] },
    QuadVertex { corner: [1.0, 0.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [0.0, 1.0] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Vertex and index buffers for the unit quad every instance is expanded from.
pub(super) struct QuadBuffers {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
}

impl QuadBuffers {
    pub(super) fn new(device: &wgpu::Device, label: &str) -> Self {
        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} quad vbo")),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} quad ibo")),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self { vbo, ibo }
    }

    pub(super) fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vbo.slice(..));
        rpass.set_index_buffer(self.ibo.slice(..), wgpu::IndexFormat::Uint16);
    }
}

/// Instanced-quad pipeline: slot 0 is the unit quad, slot 1 the per-instance data.
pub(super) fn build_pipeline(
    ctx: &RenderCtx<'_>,
    label: &str,
    shader_src: &'static str,
    bind_group_layout: &wgpu::BindGroupLayout,
    instance_layout: wgpu::VertexBufferLayout<'static>,
) -> wgpu::RenderPipeline {
    let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&format!("{label} shader")),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(&format!("{label} pipeline layout")),
        bind_group_layouts: &[bind_group_layout],
        immediate_size: 0,
    });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{label} pipeline")),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[QuadVertex::layout(), instance_layout],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(premul_alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

// ── shape pipeline ────────────────────────────────────────────────────────

/// Lazily built pipeline, viewport uniform and quad for a shape whose only
/// binding is the viewport uniform. Rebuilt when the surface format changes.
pub(super) struct ShapePipeline {
    label: &'static str,
    shader_src: &'static str,
    instance_layout: fn() -> wgpu::VertexBufferLayout<'static>,
    format: Option<wgpu::TextureFormat>,
    gpu: Option<ShapeGpu>,
}

struct ShapeGpu {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    quad: QuadBuffers,
}

impl ShapePipeline {
    pub(super) const fn new(
        label: &'static str,
        shader_src: &'static str,
        instance_layout: fn() -> wgpu::VertexBufferLayout<'static>,
    ) -> Self {
        Self { label, shader_src, instance_layout, format: None, gpu: None }
    }

    /// Builds GPU objects if needed and uploads this frame's viewport.
    pub(super) fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        if self.format != Some(ctx.surface_format) || self.gpu.is_none() {
            self.gpu = Some(self.build(ctx));
            self.format = Some(ctx.surface_format);
        }
        if let Some(gpu) = &self.gpu {
            ctx.queue.write_buffer(&gpu.viewport_ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));
        }
    }

    fn build(&self, ctx: &RenderCtx<'_>) -> ShapeGpu {
        log::debug!("building {} pipeline for {:?}", self.label, ctx.surface_format);

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!("{} bgl", self.label)),
            entries: &[ViewportUniform::layout_entry()],
        });
        let pipeline = build_pipeline(ctx, self.label, self.shader_src, &bgl, (self.instance_layout)());

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{} viewport ubo", self.label)),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} bind group", self.label)),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry { binding: 0, resource: viewport_ubo.as_entire_binding() }],
        });

        ShapeGpu { pipeline, bind_group, viewport_ubo, quad: QuadBuffers::new(ctx.device, self.label) }
    }

    /// Binds pipeline, uniform, quad and `instances`, then draws `spans`.
    pub(super) fn draw(
        &self,
        ctx: &RenderCtx<'_>,
        rpass: &mut wgpu::RenderPass<'_>,
        instances: Option<&wgpu::Buffer>,
        spans: &[Span],
    ) {
        let (Some(gpu), Some(instances)) = (&self.gpu, instances) else { return };
        if spans.iter().all(|s| s.instances.is_empty()) {
            return;
        }
        rpass.set_pipeline(&gpu.pipeline);
        rpass.set_bind_group(0, &gpu.bind_group, &[]);
        gpu.quad.bind(rpass);
        rpass.set_vertex_buffer(1, instances.slice(..));
        draw_spans(rpass, spans, ctx.viewport, ctx.scale_factor);
    }
}

// ── instance buffer ───────────────────────────────────────────────────────

/// Growable per-frame instance buffer.
pub(super) struct InstanceBuffer<I> {
    label: &'static str,
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
    _instance: PhantomData<I>,
}

impl<I: Pod> InstanceBuffer<I> {
    pub(super) const fn new(label: &'static str) -> Self {
        Self { label, buffer: None, capacity: 0, _instance: PhantomData }
    }

    /// Replaces the buffer contents with `instances`, growing to the next power of two.
    pub(super) fn upload(&mut self, ctx: &RenderCtx<'_>, instances: &[I]) {
        if instances.is_empty() {
            return;
        }
        if instances.len() > self.capacity || self.buffer.is_none() {
            let cap = instances.len().next_power_of_two().max(64);
            self.buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: (cap * std::mem::size_of::<I>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = cap;
            log::trace!("{}: grew to {cap} instances", self.label);
        }
        if let Some(buffer) = &self.buffer {
            ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(instances));
        }
    }

    pub(super) fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }
}

// ── spans ─────────────────────────────────────────────────────────────────

/// Instances produced by one draw command.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Span {
    pub instances: Range<u32>,
    pub clip: Option<Rect>,
}

/// Spans for the current frame, handed out in paint order.
///
/// Every command of a renderer's kind gets exactly one span, possibly empty,
/// so the scene walker can count commands without knowing instance counts.
#[derive(Debug, Default)]
pub(super) struct SpanQueue {
    spans: Vec<Span>,
    cursor: usize,
}

impl SpanQueue {
    pub(super) fn clear(&mut self) {
        self.spans.clear();
        self.cursor = 0;
    }

    pub(super) fn push(&mut self, instances: Range<u32>, clip: Option<Rect>) {
        self.spans.push(Span { instances, clip });
    }

    /// The next `count` spans. Returns fewer if the queue runs dry.
    pub(super) fn take(&mut self, count: usize) -> &[Span] {
        let start = self.cursor.min(self.spans.len());
        let end = (start + count).min(self.spans.len());
        self.cursor = end;
        &self.spans[start..end]
    }
}

/// Issues draws for `spans`, merging neighbours that are contiguous and share a clip.
pub(super) fn draw_spans(
    rpass: &mut wgpu::RenderPass<'_>,
    spans: &[Span],
    viewport: Viewport,
    scale: f32,
) {
    let mut i = 0;
    while i < spans.len() {
        let clip = spans[i].clip;
        let mut range = spans[i].instances.clone();
        let mut j = i + 1;
        while j < spans.len() && spans[j].clip == clip && spans[j].instances.start == range.end {
            range.end = spans[j].instances.end;
            j += 1;
        }
        if !range.is_empty() {
            if let Some((x, y, w, h)) = logical_clip_to_scissor(clip, viewport, scale) {
                rpass.set_scissor_rect(x, y, w, h);
                rpass.draw_indexed(0..6, 0, range);
            }
        }
        i = j;
    }
}

// ── scissor rect ──────────────────────────────────────────────────────────

/// Logical clip rect to a physical scissor `(x, y, w, h)` clamped to the viewport.
///
/// `None` clip means the whole viewport. Returns `None` for a zero-area result.
pub(super) fn logical_clip_to_scissor(
    clip: Option<Rect>,
    viewport: Viewport,
    scale: f32,
) -> Option<(u32, u32, u32, u32)> {
    let vw = (viewport.width * scale).max(1.0) as u32;
    let vh = (viewport.height * scale).max(1.0) as u32;

    let Some(r) = clip else {
        return Some((0, 0, vw, vh));
    };

    let px = |v: f32, max: u32| ((v * scale).max(0.0) as u32).min(max);
    let max = r.max();
    let (x, y) = (px(r.origin.x, vw), px(r.origin.y, vh));
    let (w, h) = (px(max.x, vw).saturating_sub(x), px(max.y, vh).saturating_sub(y));

    (w > 0 && h > 0).then_some((x, y, w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_clip_covers_physical_viewport() {
        let s = logical_clip_to_scissor(None, Viewport::new(500.0, 400.0), 2.0);
        assert_eq!(s, Some((0, 0, 1000, 800)));
    }

    #[test]
    fn clip_is_scaled_and_clamped() {
        let vp = Viewport::new(100.0, 100.0);
        let s = logical_clip_to_scissor(Some(Rect::new(-10.0, 50.0, 200.0, 20.0)), vp, 1.5);
        assert_eq!(s, Some((0, 75, 150, 30)));
    }

    #[test]
    fn empty_clip_is_skipped() {
        let vp = Viewport::new(100.0, 100.0);
        assert_eq!(logical_clip_to_scissor(Some(Rect::default()), vp, 1.0), None);
    }

    #[test]
    fn span_queue_hands_out_in_order() {
        let mut q = SpanQueue::default();
        q.push(0..1, None);
        q.push(1..1, None);
        q.push(1..4, None);
        assert_eq!(q.take(2).len(), 2);
        let rest = q.take(5);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].instances, 1..4);
        assert!(q.take(1).is_empty());

        q.clear();
        q.push(0..2, None);
        assert_eq!(q.take(1)[0].instances, 0..2);
    }
}
