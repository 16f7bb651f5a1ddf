use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// Single run of text in one font and size.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left of the line box in logical pixels.
    pub origin: Vec2,
    /// Wrapping width; `None` keeps everything on one line.
    pub max_width: Option<f32>,
}

impl DrawList {
    pub fn push_text(&mut self, z: ZIndex, cmd: TextCmd) {
        if cmd.text.is_empty() {
            return;
        }
        self.push(z, DrawCmd::Text(cmd));
    }
}
