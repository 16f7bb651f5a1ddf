use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

impl DrawList {
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Color,
        stroke: Option<Stroke>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd { center, radius, fill, stroke }));
    }
}
