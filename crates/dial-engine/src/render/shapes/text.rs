use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::render::RenderCtx;
use crate::scene::{DrawCmd, DrawItem};
use crate::text::FontSystem;

use super::common::{build_pipeline, InstanceBuffer, QuadBuffers, SpanQueue, ViewportUniform};

// ── atlas ──────────────────────────────────────────────────────────────────

const ATLAS_SIZE: u32 = 1024;
const GLYPH_PADDING: u32 = 1;

#[derive(Debug, Copy, Clone)]
struct AtlasSlot {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

/// Shelf packer for the R8 glyph atlas. Rows fill left to right, top to bottom.
#[derive(Debug)]
struct ShelfPacker {
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl Default for ShelfPacker {
    fn default() -> Self {
        Self { cursor_x: GLYPH_PADDING, cursor_y: GLYPH_PADDING, row_height: 0, full: false }
    }
}

impl ShelfPacker {
    /// Top-left of a free `w × h` cell, or `None` once the atlas is exhausted.
    fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.full || w + 2 * GLYPH_PADDING > ATLAS_SIZE {
            return None;
        }
        if self.cursor_x + w + GLYPH_PADDING > ATLAS_SIZE {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }
        if self.cursor_y + h + GLYPH_PADDING > ATLAS_SIZE {
            self.full = true;
            return None;
        }
        let at = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(at)
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Renderer for `DrawCmd::Text`.
///
/// Glyphs are laid out and rasterized by fontdue at physical pixel size, so
/// text stays crisp on scaled displays, and cached in an R8 atlas keyed by
/// `GlyphRasterConfig` (font, glyph, pixel size).
pub struct TextRenderer {
    format: Option<wgpu::TextureFormat>,
    gpu: Option<TextGpu>,

    glyphs: HashMap<GlyphRasterConfig, AtlasSlot>,
    packer: ShelfPacker,
    warned_full: bool,

    instances: InstanceBuffer<GlyphInstance>,
    spans: SpanQueue,
    scratch: Vec<GlyphInstance>,
    layout: Layout<()>,
}

struct TextGpu {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    atlas: wgpu::Texture,
    quad: QuadBuffers,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            format: None,
            gpu: None,
            glyphs: HashMap::new(),
            packer: ShelfPacker::default(),
            warned_full: false,
            instances: InstanceBuffer::new("dial text instances"),
            spans: SpanQueue::default(),
            scratch: Vec::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, items: &[&DrawItem], fonts: &FontSystem) {
        self.spans.clear();
        self.scratch.clear();

        if !items.iter().any(|i| matches!(i.cmd, DrawCmd::Text(_))) {
            return;
        }
        self.ensure_gpu(ctx);

        let scale = ctx.scale_factor;
        for item in items {
            let DrawCmd::Text(cmd) = &item.cmd else { continue };
            let start = self.scratch.len() as u32;

            let Some(font) = fonts.get(cmd.font) else {
                log::warn!("text: unknown {:?}, skipping", cmd.font);
                self.spans.push(start..start, item.clip_rect);
                continue;
            };

            self.layout.reset(&LayoutSettings {
                x: (cmd.origin.x * scale).round(),
                y: (cmd.origin.y * scale).round(),
                max_width: cmd.max_width.map(|w| w * scale),
                ..LayoutSettings::default()
            });
            self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size * scale, 0));

            let color = cmd.color.to_array();
            // Copy positions out so `self.layout` is free while the atlas is mutated.
            let placed: Vec<_> = self
                .layout
                .glyphs()
                .iter()
                .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
                .map(|g| (g.key, g.x, g.y, g.width as f32, g.height as f32))
                .collect();

            for (key, x, y, w, h) in placed {
                let Some(slot) = self.glyph_slot(ctx, font, key) else { continue };
                self.scratch.push(GlyphInstance {
                    dst_min: [x / scale, y / scale],
                    dst_max: [(x + w) / scale, (y + h) / scale],
                    uv_min: slot.uv_min,
                    uv_max: slot.uv_max,
                    color,
                });
            }

            self.spans.push(start..self.scratch.len() as u32, item.clip_rect);
        }

        if let Some(gpu) = &self.gpu {
            ctx.queue.write_buffer(&gpu.viewport_ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));
        }
        self.instances.upload(ctx, &self.scratch);
    }

    pub fn draw(&mut self, ctx: &RenderCtx<'_>, rpass: &mut wgpu::RenderPass<'_>, count: usize) {
        let spans = self.spans.take(count);
        let (Some(gpu), Some(instances)) = (&self.gpu, self.instances.buffer()) else { return };
        if spans.iter().all(|s| s.instances.is_empty()) {
            return;
        }
        rpass.set_pipeline(&gpu.pipeline);
        rpass.set_bind_group(0, &gpu.bind_group, &[]);
        gpu.quad.bind(rpass);
        rpass.set_vertex_buffer(1, instances.slice(..));
        super::common::draw_spans(rpass, spans, ctx.viewport, ctx.scale_factor);
    }

    // ── atlas ──────────────────────────────────────────────────────────────

    /// Cached slot for `key`, rasterizing and uploading on first use.
    fn glyph_slot(
        &mut self,
        ctx: &RenderCtx<'_>,
        font: &fontdue::Font,
        key: GlyphRasterConfig,
    ) -> Option<AtlasSlot> {
        if let Some(slot) = self.glyphs.get(&key) {
            return Some(*slot);
        }

        let (metrics, bitmap) = font.rasterize_config(key);
        let (w, h) = (metrics.width as u32, metrics.height as u32);
        if w == 0 || h == 0 {
            return None;
        }

        let Some((gx, gy)) = self.packer.place(w, h) else {
            if !self.warned_full {
                log::warn!("text: glyph atlas ({ATLAS_SIZE}x{ATLAS_SIZE}) is full; new glyphs are dropped");
                self.warned_full = true;
            }
            return None;
        };
        let gpu = self.gpu.as_ref()?;

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &gpu.atlas,
                mip_level: 0,
                origin: wgpu::Origin3d { x: gx, y: gy, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            &bitmap,
            wgpu::TexelCopyBufferLayout { offset: 0, bytes_per_row: Some(w), rows_per_image: Some(h) },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );

        let size = ATLAS_SIZE as f32;
        let slot = AtlasSlot {
            uv_min: [gx as f32 / size, gy as f32 / size],
            uv_max: [(gx + w) as f32 / size, (gy + h) as f32 / size],
        };
        self.glyphs.insert(key, slot);
        log::trace!("text: cached glyph {} at {}px", key.glyph_index, key.px);
        Some(slot)
    }

    // ── lazy init ──────────────────────────────────────────────────────────

    fn ensure_gpu(&mut self, ctx: &RenderCtx<'_>) {
        if self.format == Some(ctx.surface_format) && self.gpu.is_some() {
            return;
        }
        log::debug!("building text pipeline for {:?}", ctx.surface_format);

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("dial text bgl"),
            entries: &[
                ViewportUniform::layout_entry(),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pipeline =
            build_pipeline(ctx, "dial text", include_str!("shaders/text.wgsl"), &bgl, GlyphInstance::layout());

        let atlas = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("dial text atlas"),
            size: wgpu::Extent3d { width: ATLAS_SIZE, height: ATLAS_SIZE, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let atlas_view = atlas.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("dial text sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });
        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("dial text viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("dial text bind group"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: viewport_ubo.as_entire_binding() },
                wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(&atlas_view) },
                wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::Sampler(&sampler) },
            ],
        });

        // A fresh atlas is empty, so every cached slot is stale.
        self.glyphs.clear();
        self.packer = ShelfPacker::default();
        self.warned_full = false;

        self.gpu = Some(TextGpu { pipeline, bind_group, viewport_ubo, atlas, quad: QuadBuffers::new(ctx.device, "dial text") });
        self.format = Some(ctx.surface_format);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// 48 bytes: destination rect (logical px), atlas UV rect, color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2,
        2 => Float32x2,
        3 => Float32x2,
        4 => Float32x2,
        5 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
