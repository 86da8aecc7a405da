pub mod canvas_primitives;
pub mod geometry;
pub mod palette;

use chrono::Local;
use std::time::Duration;

pub use canvas_primitives::CanvasPrimitives;
pub use geometry::{Angle, ClockTime, Coords, Point, Segment};
pub use palette::{Bgra, Palette};

pub const SIDE: i32 = 512;

/// Time left until the next whole second of the local clock.
pub fn calc_next_tick() -> Duration {
    let now = Local::now();
    let ms_in_current_sec = now.timestamp_subsec_millis().min(999);
    Duration::from_millis((1000 - ms_in_current_sec) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_tick_is_within_a_second() {
        let tick = calc_next_tick();
        assert!(tick > Duration::ZERO);
        assert!(tick <= Duration::from_secs(1));
    }
}
