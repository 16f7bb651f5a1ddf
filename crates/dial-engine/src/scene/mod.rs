//! Draw stream recorded by the UI each frame.
//!
//! Items are painted back to front by z-index, then by insertion order.

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::{DrawCmd, DrawKind};
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::{LineCap, Stroke};
pub use z_index::ZIndex;
