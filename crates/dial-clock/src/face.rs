//! Analog face geometry.
//!
//! Everything here is expressed in the caller's coordinate space (logical
//! pixels, +Y down). The renderer only has to draw the primitives.

use crate::angles::{numeral_angle, tick_angle, HandAngles};
use crate::time_of_day::TimeOfDay;

/// 2D point in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `angle_deg` and `distance` from `self`.
    #[inline]
    pub fn polar(self, angle_deg: f32, distance: f32) -> Point {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Point::new(self.x + cos * distance, self.y + sin * distance)
    }

    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Line segment from `from` to `to`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    #[inline]
    pub fn length(self) -> f32 {
        self.from.distance(self.to)
    }
}

/// Which hand a [`Hand`] describes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandKind {
    Second,
    Minute,
    Hour,
}

/// One hand: where it points, how long it reaches, and how thick it is.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hand {
    pub kind: HandKind,
    pub angle_deg: f32,
    pub segment: Segment,
    pub stroke: f32,
}

/// One tick mark on the rim.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tick {
    pub segment: Segment,
    /// Hour positions (every 5th tick) are drawn longer.
    pub major: bool,
}

/// One hour numeral. `anchor` is where the label's horizontal center and
/// baseline go; the renderer offsets by the measured text width.
#[derive(Debug, Clone, PartialEq)]
pub struct Numeral {
    pub value: u32,
    pub label: String,
    pub anchor: Point,
}

/// Static proportions of the face, in logical pixels.
///
/// Radii and hand lengths are given as insets from the face radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceStyle {
    /// Gap between the face and the edge of its area.
    pub margin: f32,
    /// Numerals are placed at `radius - numeral_inset`.
    pub numeral_inset: f32,
    /// Downward nudge applied to numeral anchors so the glyphs look centered.
    pub numeral_baseline: f32,
    pub major_tick: f32,
    pub minor_tick: f32,
    pub second_inset: f32,
    pub minute_inset: f32,
    pub hour_inset: f32,
    pub second_stroke: f32,
    pub minute_stroke: f32,
    pub hour_stroke: f32,
    pub cap_radius: f32,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            margin: 20.0,
            numeral_inset: 25.0,
            numeral_baseline: 5.0,
            major_tick: 10.0,
            minor_tick: 5.0,
            second_inset: 20.0,
            minute_inset: 30.0,
            hour_inset: 60.0,
            second_stroke: 2.0,
            minute_stroke: 4.0,
            hour_stroke: 6.0,
            cap_radius: 4.0,
        }
    }
}

/// The static part of a face for a given area: circle, numerals, ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLayout {
    pub center: Point,
    pub radius: f32,
    pub numerals: Vec<Numeral>,
    pub ticks: Vec<Tick>,
    style: FaceStyle,
}

impl FaceLayout {
    /// Lays out a face inside the `width × height` area whose top-left is
    /// `origin`.
    ///
    /// Returns `None` when the area leaves no room for a face after the margin.
    pub fn compute(origin: Point, width: f32, height: f32, style: FaceStyle) -> Option<Self> {
        let radius = width.min(height) / 2.0 - style.margin;
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }

        let center = Point::new(origin.x + width / 2.0, origin.y + height / 2.0);

        let numeral_r = (radius - style.numeral_inset).max(0.0);
        let numerals = (1..=12)
            .map(|i| {
                let p = center.polar(numeral_angle(i), numeral_r);
                Numeral {
                    value: i,
                    label: i.to_string(),
                    anchor: Point::new(p.x, p.y + style.numeral_baseline),
                }
            })
            .collect();

        let ticks = (0..60)
            .map(|i| {
                let major = i % 5 == 0;
                let len = if major { style.major_tick } else { style.minor_tick };
                let a = tick_angle(i);
                Tick {
                    segment: Segment {
                        from: center.polar(a, (radius - len).max(0.0)),
                        to: center.polar(a, radius),
                    },
                    major,
                }
            })
            .collect();

        Some(Self { center, radius, numerals, ticks, style })
    }

    #[inline]
    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    /// The three hands for `t`, ordered back to front: hour, minute, second.
    pub fn hands(&self, t: TimeOfDay) -> [Hand; 3] {
        let angles = HandAngles::at(t);
        let s = &self.style;
        [
            self.hand(HandKind::Hour, angles.hour, s.hour_inset, s.hour_stroke),
            self.hand(HandKind::Minute, angles.minute, s.minute_inset, s.minute_stroke),
            self.hand(HandKind::Second, angles.second, s.second_inset, s.second_stroke),
        ]
    }

    fn hand(&self, kind: HandKind, angle_deg: f32, inset: f32, stroke: f32) -> Hand {
        let length = (self.radius - inset).max(0.0);
        Hand {
            kind,
            angle_deg,
            segment: Segment { from: self.center, to: self.center.polar(angle_deg, length) },
            stroke,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(w: f32, h: f32) -> FaceLayout {
        FaceLayout::compute(Point::new(0.0, 0.0), w, h, FaceStyle::default()).unwrap()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn radius_uses_smaller_side_minus_margin() {
        let f = layout(300.0, 200.0);
        assert!(approx(f.radius, 80.0));
        assert_eq!(f.center, Point::new(150.0, 100.0));
    }

    #[test]
    fn no_face_when_area_is_too_small() {
        assert!(FaceLayout::compute(Point::new(0.0, 0.0), 40.0, 400.0, FaceStyle::default()).is_none());
        assert!(FaceLayout::compute(Point::new(0.0, 0.0), 0.0, 0.0, FaceStyle::default()).is_none());
    }

    #[test]
    fn center_is_offset_by_origin() {
        let f = FaceLayout::compute(Point::new(10.0, 50.0), 200.0, 200.0, FaceStyle::default())
            .unwrap();
        assert_eq!(f.center, Point::new(110.0, 150.0));
    }

    #[test]
    fn twelve_numerals_with_twelve_on_top() {
        let f = layout(400.0, 400.0);
        assert_eq!(f.numerals.len(), 12);
        let twelve = &f.numerals[11];
        assert_eq!(twelve.label, "12");
        assert!(approx(twelve.anchor.x, 200.0));
        // radius 180, numeral ring 155, nudged 5 px down.
        assert!(approx(twelve.anchor.y, 200.0 - 155.0 + 5.0));
    }

    #[test]
    fn sixty_ticks_with_twelve_major() {
        let f = layout(400.0, 400.0);
        assert_eq!(f.ticks.len(), 60);
        assert_eq!(f.ticks.iter().filter(|t| t.major).count(), 12);
    }

    #[test]
    fn major_ticks_are_longer() {
        let f = layout(400.0, 400.0);
        assert!(approx(f.ticks[0].segment.length(), 10.0));
        assert!(approx(f.ticks[1].segment.length(), 5.0));
    }

    #[test]
    fn ticks_end_on_the_rim() {
        let f = layout(400.0, 400.0);
        for t in &f.ticks {
            assert!(approx(t.segment.to.distance(f.center), f.radius));
        }
    }

    #[test]
    fn hands_have_expected_reach_and_stroke() {
        let f = layout(400.0, 400.0);
        let [hour, minute, second] = f.hands(TimeOfDay::new(3, 15, 30).unwrap());

        assert_eq!(hour.kind, HandKind::Hour);
        assert!(approx(hour.segment.length(), 120.0));
        assert!(approx(minute.segment.length(), 150.0));
        assert!(approx(second.segment.length(), 160.0));

        assert!(second.stroke < minute.stroke && minute.stroke < hour.stroke);
        assert!(hour.segment.length() < minute.segment.length());
        assert!(minute.segment.length() < second.segment.length());
    }

    #[test]
    fn second_hand_at_thirty_points_down() {
        let f = layout(400.0, 400.0);
        let [_, _, second] = f.hands(TimeOfDay::new(3, 15, 30).unwrap());
        assert!(approx(second.segment.to.x, 200.0));
        assert!(approx(second.segment.to.y, 200.0 + 160.0));
    }

    #[test]
    fn hands_start_at_center() {
        let f = layout(250.0, 250.0);
        for h in f.hands(TimeOfDay::new(9, 41, 7).unwrap()) {
            assert_eq!(h.segment.from, f.center);
        }
    }

    #[test]
    fn short_hands_clamp_to_zero_on_small_faces() {
        // radius 30: the hour hand inset (60) would be negative.
        let f = layout(100.0, 100.0);
        let [hour, _, _] = f.hands(TimeOfDay::MIDNIGHT);
        assert!(approx(hour.segment.length(), 0.0));
    }
}
