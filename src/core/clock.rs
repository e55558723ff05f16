use std::time::Instant;

use crate::frame::FrameInfo;

/// Frame clock - hands out per-frame delta time and a running frame count
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame_number: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_number: 0,
        }
    }

    /// Advance the clock, returns timing for the frame about to be built
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        let time = now.duration_since(self.start).as_secs_f32();
        self.last_tick = now;

        let info = FrameInfo::new(self.frame_number, time, delta);
        self.frame_number += 1;
        info
    }

    /// Restart delta measurement from now without touching the frame count
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let frame = clock.tick();

        assert!(frame.delta >= 0.009);
        assert!(frame.time >= frame.delta);
    }

    #[test]
    fn clock_counts_frames() {
        let mut clock = Clock::new();
        assert_eq!(clock.tick().number, 0);
        assert_eq!(clock.tick().number, 1);
        assert_eq!(clock.frame_number(), 2);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        let frame = clock.tick();
        assert!(frame.delta < 0.005);
        assert_eq!(frame.number, 0);
    }
}
