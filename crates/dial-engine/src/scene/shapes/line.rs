use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// How the ends of a [`LineCmd`] are finished.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LineCap {
    /// Ends exactly at the endpoints.
    #[default]
    Butt,
    /// Extends by half the width with a semicircle.
    Round,
}

/// Straight stroked segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl DrawList {
    pub fn push_line(
        &mut self,
        z: ZIndex,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
        cap: LineCap,
    ) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, width, color, cap }));
    }
}
