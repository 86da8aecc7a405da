use chrono::Timelike;
use std::f64::consts::PI;

/// Integer pixel position on the canvas.
pub type Coords = (i32, i32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_coords((x, y): Coords) -> Self {
        Self {
            x: x as f64,
            y: y as f64,
        }
    }

    // Create a point at a distance and angle from the current point
    pub fn with_radius_and_angle(self, distance: f64, angle: f64) -> Self {
        Self {
            x: self.x + distance * angle.cos(),
            y: self.y + distance * angle.sin(),
        }
    }

    // Convert to pixel coordinates, truncating toward zero
    pub fn as_coords(self) -> Coords {
        (self.x as i32, self.y as i32)
    }
}

/// Straight line between two pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Coords,
    pub to: Coords,
}

impl Segment {
    pub fn new(from: Coords, to: Coords) -> Self {
        Self { from, to }
    }
}

/// Wall-clock time on a twelve hour dial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: hour % 12,
            minute,
            second,
        }
    }

    pub fn from_timelike(time: &impl Timelike) -> Self {
        Self::new(time.hour(), time.minute(), time.second())
    }
}

pub struct Angle;

// Angle in radians starting from the top (12 o'clock)
impl Angle {
    pub fn hour(time: ClockTime) -> f64 {
        (time.hour as f64 + time.minute as f64 / 60.0) * (2.0 * PI / 12.0) - PI / 2.0
    }

    pub fn minute(time: ClockTime) -> f64 {
        (time.minute as f64 + time.second as f64 / 60.0) * (2.0 * PI / 60.0) - PI / 2.0
    }

    pub fn second(time: ClockTime) -> f64 {
        time.second as f64 * (2.0 * PI / 60.0) - PI / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(total_seconds: u32) -> ClockTime {
        ClockTime::new(
            total_seconds / 3600,
            total_seconds / 60 % 60,
            total_seconds % 60,
        )
    }

    #[test]
    fn hour_is_folded_onto_the_dial() {
        let time = ClockTime::from_timelike(&NaiveTime::from_hms_opt(15, 4, 5).unwrap());
        assert_eq!(time, ClockTime::new(3, 4, 5));
    }

    #[test]
    fn hour_hand_points_right_at_three() {
        assert!(Angle::hour(ClockTime::new(3, 0, 0)).abs() < 1e-12);
        assert!((Angle::hour(ClockTime::new(0, 0, 0)) + PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn hour_hand_never_moves_backward_over_twelve_hours() {
        let mut previous = Angle::hour(at(0));
        for second in 1..12 * 3600 {
            let angle = Angle::hour(at(second));
            assert!(angle >= previous, "hour hand went back at {second}s");
            previous = angle;
        }
        assert!(previous < 3.0 * PI / 2.0);
    }

    #[test]
    fn hour_hand_creeps_across_the_hour_boundary() {
        let before = Angle::hour(ClockTime::new(2, 59, 59));
        let after = Angle::hour(ClockTime::new(3, 0, 0));
        assert!(after > before);
        assert!(after - before < PI / 6.0 / 30.0);
    }

    #[test]
    fn minute_hand_never_moves_backward_within_an_hour() {
        let mut previous = Angle::minute(at(0));
        for second in 1..3600 {
            let angle = Angle::minute(at(second));
            assert!(angle > previous, "minute hand stalled at {second}s");
            previous = angle;
        }
    }

    #[test]
    fn second_hand_is_opposite_after_half_a_minute() {
        let zero = Angle::second(ClockTime::new(0, 0, 0));
        let thirty = Angle::second(ClockTime::new(0, 0, 30));
        assert!((thirty - zero - PI).abs() < 1e-12);
    }

    #[test]
    fn point_truncates_toward_zero() {
        assert_eq!(Point::new(10.9, -0.5).as_coords(), (10, 0));
        let moved = Point::from_coords((10, 10)).with_radius_and_angle(5.0, 0.0);
        assert_eq!(moved.as_coords(), (15, 10));
    }
}
