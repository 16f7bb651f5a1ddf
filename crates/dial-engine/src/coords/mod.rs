//! Geometry shared by renderers and UI.
//!
//! All CPU-side coordinates are logical pixels with a top-left origin,
//! +X right and +Y down. Angles follow the same handedness, so a positive
//! rotation turns clockwise on screen. Shaders map to NDC via the viewport
//! uniform.

mod corner_radii;
mod rect;
mod vec2;
mod viewport;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
