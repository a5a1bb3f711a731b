use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Stamps each rendered frame and keeps a rolling FPS estimate, logged once
/// per interval at debug level.
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
    interval_frames: u32,
    interval_elapsed: f32,
    fps: f32,
}

impl FrameClock {
    const FPS_LOG_INTERVAL: f32 = 1.0;

    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
            interval_frames: 0,
            interval_elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Advance the clock by one frame.
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo {
            number: self.frame_number,
            time,
            delta,
        };

        self.frame_number += 1;
        self.last_frame_time = now;

        self.interval_frames += 1;
        self.interval_elapsed += delta;
        if self.interval_elapsed >= Self::FPS_LOG_INTERVAL {
            self.fps = self.interval_frames as f32 / self.interval_elapsed;
            log::debug!("fps: {:.1}", self.fps);
            self.interval_frames = 0;
            self.interval_elapsed = 0.0;
        }

        info
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_numbers_are_sequential() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().number, 0);
        assert_eq!(clock.tick().number, 1);
        assert_eq!(clock.tick().number, 2);
    }

    #[test]
    fn test_timing_is_monotonic() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        let second = clock.tick();
        assert!(second.time >= first.time);
        assert!(second.delta >= 0.0);
    }

    #[test]
    fn test_fps_starts_at_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.fps(), 0.0);
    }
}
