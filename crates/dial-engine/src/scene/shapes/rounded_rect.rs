use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Rectangle with per-corner radii. Zero radii give a plain rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

impl DrawList {
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radii: CornerRadii,
        fill: Color,
        stroke: Option<Stroke>,
    ) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radii, fill, stroke }));
    }

    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, fill: Color) {
        self.push_rounded_rect(z, rect, CornerRadii::default(), fill, None);
    }
}
