//! Shape renderers.
//!
//! Each renderer has the same two-phase shape: `prepare` collects and
//! uploads one span of instances per matching command in the frame, then
//! `draw` is called during the shared pass with how many of those commands
//! to emit next.

mod common;

pub mod circle;
pub mod line;
pub mod rounded_rect;
pub mod text;

pub use circle::CircleRenderer;
pub use line::LineRenderer;
pub use rounded_rect::RoundedRectRenderer;
pub use text::TextRenderer;
