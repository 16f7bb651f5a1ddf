use crate::scene::shapes::{CircleCmd, LineCmd, RoundedRectCmd, TextCmd};

/// Renderer-agnostic draw command.
///
/// Each variant has a push helper next to its payload in `scene::shapes` and
/// a matching renderer in `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
    Line(LineCmd),
    Text(TextCmd),
}

/// Which renderer handles a [`DrawCmd`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DrawKind {
    RoundedRect,
    Circle,
    Line,
    Text,
}

impl DrawCmd {
    #[inline]
    pub fn kind(&self) -> DrawKind {
        match self {
            DrawCmd::RoundedRect(_) => DrawKind::RoundedRect,
            DrawCmd::Circle(_) => DrawKind::Circle,
            DrawCmd::Line(_) => DrawKind::Line,
            DrawCmd::Text(_) => DrawKind::Text,
        }
    }
}
