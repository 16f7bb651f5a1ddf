//! GPU rendering.
//!
//! Each shape renderer owns its pipeline and buffers. [`SceneRenderer`] runs
//! them in two phases: every renderer first uploads its instances for the
//! whole frame, then one render pass walks the draw list in paint order and
//! asks each renderer to draw its next run. Shapes of different kinds
//! therefore interleave exactly as recorded.
//!
//! CPU geometry is in logical pixels (top-left origin, +Y down); vertex
//! shaders map to NDC through a viewport uniform.

mod ctx;
mod scene_renderer;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene_renderer::SceneRenderer;
