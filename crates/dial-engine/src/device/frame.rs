/// One acquired surface texture with its view and a fresh encoder.
///
/// Hand it back to [`Gpu::submit`](super::Gpu::submit) promptly; the
/// surface cannot produce another texture while this one is alive.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
