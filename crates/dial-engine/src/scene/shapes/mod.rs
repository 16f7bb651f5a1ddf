pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod rounded_rect;
pub(crate) mod text;

pub use circle::CircleCmd;
pub use line::{LineCap, LineCmd};
pub use rounded_rect::RoundedRectCmd;
pub use text::TextCmd;

use crate::paint::Color;

/// Outline drawn just inside the edge of a filled shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
