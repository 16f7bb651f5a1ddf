//! GPU device and surface management.
//!
//! Creates the wgpu instance, adapter, device and queue for a window,
//! configures its surface and hands out one encoder + view per frame.

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;
