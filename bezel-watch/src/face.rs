//! Geometry of the watch face: where every corner, marker, hand and
//! bracelet link lands on the canvas. Nothing in here touches pixels.

use std::f64::consts::PI;

use bezel_core::{Angle, ClockTime, Coords, Point, Segment};

pub const INNER_BEZEL_INSET: f64 = 30.0;
pub const BOLT_INSET: f64 = 15.0;

const MARKER_RIM_INSET: f64 = 44.0;
const MARKER_CENTER_INSET: f64 = 23.5;
const TWIN_MARKER_OFFSET: f64 = 4.0;

const HOUR_HAND_LENGTH: f64 = 0.5;
const MINUTE_HAND_LENGTH: f64 = 0.7;
const SECOND_HAND_LENGTH: f64 = 0.8;

const LINK_SPLAY: i32 = 60;
const LINK_TAPER: i32 = 5;
pub const LINK_HEIGHT: i32 = 30;
pub const LINK_MARGIN: i32 = 10;

const LOGO_RISE: i32 = 60;

/// Center and base radius derived from the canvas side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub side: i32,
    pub center: Coords,
    pub radius: f64,
}

impl Layout {
    pub fn new(side: i32) -> Self {
        Self {
            side,
            center: (side / 2, side / 2),
            radius: side as f64 * 0.3,
        }
    }

    pub fn inner_bezel_radius(&self) -> f64 {
        self.radius - INNER_BEZEL_INSET
    }

    pub fn bolt_radius(&self) -> f64 {
        self.radius - BOLT_INSET
    }

    /// Radius the hands are measured against.
    pub fn hand_radius(&self) -> f64 {
        self.radius - INNER_BEZEL_INSET
    }
}

pub fn corner_angle(index: u32) -> f64 {
    index as f64 * (2.0 * PI / 8.0) + PI / 8.0
}

pub fn corner(center: Coords, radius: f64, index: u32) -> Coords {
    Point::from_coords(center)
        .with_radius_and_angle(radius, corner_angle(index))
        .as_coords()
}

pub fn octagon(center: Coords, radius: f64) -> [Coords; 8] {
    std::array::from_fn(|i| corner(center, radius, i as u32))
}

/// Radial strokes for the twelve hours, the one at 12 o'clock doubled.
pub fn hour_markers(center: Coords, radius: f64) -> Vec<Segment> {
    let origin = Point::from_coords(center);
    let mut markers = Vec::with_capacity(13);

    for i in 0..12 {
        let angle = i as f64 * (2.0 * PI / 12.0) - PI / 2.0;

        let rim = origin
            .with_radius_and_angle(radius - MARKER_RIM_INSET, angle)
            .as_coords();
        let hub = origin
            .with_radius_and_angle(radius - MARKER_CENTER_INSET, angle)
            .as_coords();

        if i == 0 {
            let dx = TWIN_MARKER_OFFSET * angle.sin();
            let dy = TWIN_MARKER_OFFSET * angle.cos();
            let shift = |(x, y): Coords, sign: f64| {
                Point::new(x as f64 - sign * dx, y as f64 + sign * dy).as_coords()
            };
            markers.push(Segment::new(shift(rim, 1.0), shift(hub, 1.0)));
            markers.push(Segment::new(shift(rim, -1.0), shift(hub, -1.0)));
        } else {
            markers.push(Segment::new(rim, hub));
        }
    }

    markers
}

/// Tips of the three hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hands {
    pub hour: Coords,
    pub minute: Coords,
    pub second: Coords,
}

pub fn hands(center: Coords, radius: f64, time: ClockTime) -> Hands {
    let origin = Point::from_coords(center);
    let tip = |fraction: f64, angle: f64| {
        origin
            .with_radius_and_angle(radius * fraction, angle)
            .as_coords()
    };

    Hands {
        hour: tip(HOUR_HAND_LENGTH, Angle::hour(time)),
        minute: tip(MINUTE_HAND_LENGTH, Angle::minute(time)),
        second: tip(SECOND_HAND_LENGTH, Angle::second(time)),
    }
}

/// Top-left corner of a text block `width` wide whose baseline sits `baseline`
/// below its top, so the text is centered horizontally and rests 60 px above `center`.
pub fn logo_origin(center: Coords, width: f32, baseline: f32) -> Coords {
    let x = center.0 - (width.ceil() as i32) / 2;
    let y = center.1 - LOGO_RISE - baseline.round() as i32;
    (x, y)
}

/// Bracelet running from two bezel corners towards one canvas edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkChain {
    pub segments: Vec<Segment>,
    /// Row where the repeating links start.
    pub second_y: i32,
    /// Number of fixed-height links after the splayed and transition ones.
    pub repeated: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Top,
    Bottom,
}

pub fn bottom_links(center: Coords, radius: f64, side: i32) -> LinkChain {
    let left = corner(center, radius, 3);
    let right = corner(center, radius, 8);
    let end_y = (center.1 as f64 + radius) as i32;
    chain(left, right, end_y, side, Edge::Bottom)
}

pub fn top_links(center: Coords, radius: f64, side: i32) -> LinkChain {
    let left = corner(center, radius, 4);
    // Mirrored through the center rather than taken from the octagon.
    let right = Point::from_coords(center)
        .with_radius_and_angle(-radius, corner_angle(3))
        .as_coords();
    let end_y = (center.1 as f64 - radius) as i32;
    chain(left, right, end_y, side, Edge::Top)
}

fn chain(left: Coords, right: Coords, end_y: i32, side: i32, edge: Edge) -> LinkChain {
    let step = match edge {
        Edge::Bottom => LINK_HEIGHT,
        Edge::Top => -LINK_HEIGHT,
    };
    let fits = |y: i32| match edge {
        Edge::Bottom => y + LINK_HEIGHT <= side - LINK_MARGIN,
        Edge::Top => y - LINK_HEIGHT >= LINK_MARGIN,
    };

    let mut segments = Vec::new();

    // Splayed link from the bezel corners
    let splay_left = (left.0 + LINK_SPLAY, end_y);
    let splay_right = (right.0 - LINK_SPLAY, end_y);
    segments.push(Segment::new(left, splay_left));
    segments.push(Segment::new(right, splay_right));
    segments.push(Segment::new(splay_left, splay_right));

    // Transition link
    let second_y = end_y + step;
    let left_x = left.0 + LINK_SPLAY + LINK_TAPER;
    let right_x = right.0 - LINK_SPLAY - LINK_TAPER;
    segments.push(Segment::new(splay_left, (left_x, second_y)));
    segments.push(Segment::new(splay_right, (right_x, second_y)));
    segments.push(Segment::new((left_x, second_y), (right_x, second_y)));

    let mut current_y = second_y;
    let mut repeated = 0;
    while fits(current_y) {
        let next_y = current_y + step;
        segments.push(Segment::new((left_x, current_y), (left_x, next_y)));
        segments.push(Segment::new((right_x, current_y), (right_x, next_y)));
        segments.push(Segment::new((left_x, next_y), (right_x, next_y)));
        current_y = next_y;
        repeated += 1;
    }

    LinkChain {
        segments,
        second_y,
        repeated,
    }
}
