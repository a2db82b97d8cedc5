use web_time::{Duration, Instant};

/// Frame pacing with FPS calculation.
///
/// Rotation speed presets are expressed per frame, so the viewer limits
/// rendering to the target rate to keep the ring's speed stable across
/// displays.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    frames: u64,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: now,
            smoothed_fps: target_fps.max(1) as f32,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        self.target_fps == 0
            || now.saturating_duration_since(self.last_frame)
                >= self.min_frame_duration
    }

    /// When the next frame is due.
    #[must_use]
    pub fn next_frame_at(&self) -> Instant {
        self.last_frame + self.min_frame_duration
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_to_target_rate() {
        let t0 = Instant::now();
        let timing = FrameTiming::new(50, t0);
        assert!(!timing.should_render(t0 + Duration::from_millis(10)));
        assert!(timing.should_render(t0 + Duration::from_millis(20)));
        let due = timing.next_frame_at() - t0;
        let drift = due.abs_diff(Duration::from_millis(20));
        assert!(drift < Duration::from_micros(1));
    }

    #[test]
    fn unlimited_always_renders() {
        let t0 = Instant::now();
        assert!(FrameTiming::new(0, t0).should_render(t0));
    }

    #[test]
    fn fps_tracks_frame_rate() {
        let mut t = Instant::now();
        let mut timing = FrameTiming::new(60, t);
        for _ in 0..400 {
            t += Duration::from_millis(20);
            timing.end_frame(t);
        }
        assert!((timing.fps() - 50.0).abs() < 0.5);
        assert_eq!(timing.frames(), 400);
    }
}
