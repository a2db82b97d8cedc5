use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use super::settle::SettleTimer;
use crate::carousel::angle_step;
use crate::options::RotationOptions;

/// Auto-rotation speed presets, cycled in declaration order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SpeedPreset {
    /// Gentle drift.
    Slow,
    /// Default pace.
    #[default]
    Normal,
    /// Brisk spin.
    Fast,
}

impl SpeedPreset {
    /// All presets in cycle order.
    pub const ALL: [SpeedPreset; 3] = [Self::Slow, Self::Normal, Self::Fast];

    /// Radians added to the rotation target per frame.
    #[must_use]
    pub fn radians_per_frame(self) -> f32 {
        match self {
            Self::Slow => 0.002,
            Self::Normal => 0.005,
            Self::Fast => 0.012,
        }
    }

    /// The next preset in the cycle, wrapping after the last.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Slow => Self::Normal,
            Self::Normal => Self::Fast,
            Self::Fast => Self::Slow,
        }
    }
}

/// Mode derived from the rotation flags. `Paused` wins over `Dragging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMode {
    /// Advancing the target every frame.
    AutoRotating,
    /// The user is dragging the ring.
    Dragging,
    /// Stopped until unpaused.
    Paused,
    /// Manual interaction ended; waiting for the settle delay.
    Settling,
}

/// Continuous rotation of the carousel and the flags that drive it.
///
/// Invariant: `auto_rotate` is only ever true while neither `dragging` nor
/// `paused` is set.
///
/// The target is kept as a continuous part (drag and auto-rotate) plus a
/// whole number of navigation steps on a ring of `nav_ring` slots, so
/// opposite navigation steps cancel exactly.
#[derive(Debug, Clone)]
pub struct RotationState {
    rotation: f32,
    free: f32,
    nav_steps: i64,
    nav_ring: usize,
    auto_rotate: bool,
    dragging: bool,
    paused: bool,
    speed: SpeedPreset,
    damping: f32,
    settle: SettleTimer,
}

impl RotationState {
    /// Start auto-rotating at rotation zero with the configured speed.
    #[must_use]
    pub fn new(options: &RotationOptions) -> Self {
        Self {
            rotation: 0.0,
            free: 0.0,
            nav_steps: 0,
            nav_ring: 0,
            auto_rotate: true,
            dragging: false,
            paused: false,
            speed: options.initial_speed,
            damping: options.damping.clamp(f32::EPSILON, 1.0),
            settle: SettleTimer::new(options.settle_delay()),
        }
    }

    /// Current (eased) rotation in radians, unbounded.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Rotation the ring is easing toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.free + self.nav_offset()
    }

    fn nav_offset(&self) -> f32 {
        angle_step(self.nav_ring)
            .map_or(0.0, |step| self.nav_steps as f32 * step)
    }

    /// Whether the target advances each frame.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Whether rotation is paused by the user.
    #[must_use]
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Active speed preset.
    #[must_use]
    pub fn speed(&self) -> SpeedPreset {
        self.speed
    }

    /// Whether a settle-and-resume is waiting to fire.
    #[must_use]
    pub fn settle_pending(&self) -> bool {
        self.settle.is_pending()
    }

    /// Derived mode.
    #[must_use]
    pub fn mode(&self) -> RotationMode {
        if self.paused {
            RotationMode::Paused
        } else if self.dragging {
            RotationMode::Dragging
        } else if self.auto_rotate {
            RotationMode::AutoRotating
        } else {
            RotationMode::Settling
        }
    }

    /// Enter drag mode. Any pending resume is invalidated.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.auto_rotate = false;
        self.settle.cancel();
    }

    /// Fold a drag delta (radians) into the target.
    pub fn drag_by(&mut self, delta: f32) {
        self.free += delta;
    }

    /// Leave drag mode and schedule auto-rotate to resume after the settle
    /// delay.
    pub fn end_drag(&mut self, now: Instant) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        let session = self.settle.schedule(now);
        log::debug!("drag ended, settle session {session}");
    }

    /// Flip pause. Pausing stops rotation at once; unpausing resumes at
    /// once (unless a drag is still in progress).
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.auto_rotate = !self.paused && !self.dragging;
        if self.paused {
            self.settle.cancel();
        }
    }

    /// Step the target by one slot in `direction` (`+1` or `-1`) on a ring of
    /// `count` slots, then settle and resume like [`end_drag`](Self::end_drag).
    /// No-op on an empty ring.
    pub fn navigate(&mut self, direction: i32, count: usize, now: Instant) {
        if count == 0 {
            return;
        }
        if count != self.nav_ring {
            self.free = self.target();
            self.nav_steps = 0;
            self.nav_ring = count;
        }
        self.auto_rotate = false;
        self.nav_steps += i64::from(direction.signum());
        let _ = self.settle.schedule(now);
    }

    /// Advance to the next speed preset, wrapping.
    pub fn cycle_speed(&mut self) -> SpeedPreset {
        self.speed = self.speed.next();
        self.speed
    }

    /// Fire the settle timer if due. Auto-rotate only resumes when the ring
    /// is neither paused nor being dragged at fire time.
    pub fn poll_settle(&mut self, now: Instant) {
        if let Some(session) = self.settle.poll(now) {
            if self.paused || self.dragging {
                log::debug!("settle session {session} fired while held");
            } else {
                self.auto_rotate = true;
                log::debug!("settle session {session} resumed auto-rotate");
            }
        }
    }

    /// Per-frame step: advance the target when auto-rotating, then ease the
    /// rotation toward it.
    pub fn advance(&mut self) {
        if self.auto_rotate && !self.dragging && !self.paused {
            self.free += self.speed.radians_per_frame();
        }
        self.rotation += (self.target() - self.rotation) * self.damping;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{PI, TAU};

    use web_time::Duration;

    use super::*;

    fn state() -> RotationState {
        RotationState::new(&RotationOptions::default())
    }

    #[test]
    fn starts_auto_rotating() {
        let s = state();
        assert_eq!(s.mode(), RotationMode::AutoRotating);
        assert_eq!(s.speed(), SpeedPreset::Normal);
    }

    #[test]
    fn advance_converges_monotonically() {
        let mut s = state();
        s.toggle_pause();
        s.drag_by(3.0);
        let mut gap = (s.target() - s.rotation()).abs();
        let mut frames = 0;
        while gap > 1e-4 {
            s.advance();
            let next = (s.target() - s.rotation()).abs();
            assert!(next <= gap);
            assert!(s.rotation() <= s.target());
            gap = next;
            frames += 1;
            assert!(frames < 500, "did not converge");
        }
    }

    #[test]
    fn paused_target_never_moves() {
        let mut s = state();
        s.advance();
        s.toggle_pause();
        let target = s.target();
        for _ in 0..100 {
            s.advance();
        }
        assert_eq!(s.target(), target);
        assert_eq!(s.mode(), RotationMode::Paused);
    }

    #[test]
    fn auto_rotate_advances_target_by_speed() {
        let mut s = state();
        s.advance();
        assert!((s.target() - 0.005).abs() < 1e-7);
        let _ = s.cycle_speed();
        s.advance();
        assert!((s.target() - 0.017).abs() < 1e-6);
    }

    #[test]
    fn navigate_round_trip_restores_target() {
        let now = Instant::now();
        for count in [2, 3, 5, 6, 7, 9, 11, 13] {
            for i in 0..2000 {
                let mut s = state();
                s.drag_by(-37.0 + 74.0 * i as f32 / 2000.0);
                let before = s.target();
                s.navigate(1, count, now);
                s.navigate(-1, count, now);
                assert_eq!(s.target(), before, "ring of {count}, case {i}");
                assert!(!s.auto_rotate());
            }
        }
    }

    #[test]
    fn round_trip_holds_after_ring_size_changes() {
        let now = Instant::now();
        let mut s = state();
        s.drag_by(5.924_698);
        s.navigate(1, 3, now);
        s.navigate(1, 3, now);
        let before = s.target();
        s.navigate(1, 7, now);
        s.navigate(-1, 7, now);
        assert_eq!(s.target(), before);
        assert!((before - (5.924_698 + 2.0 * TAU / 3.0)).abs() < 1e-5);
    }

    #[test]
    fn navigate_on_empty_ring_is_noop() {
        let mut s = state();
        s.navigate(1, 0, Instant::now());
        assert!(s.auto_rotate());
        assert_eq!(s.target(), 0.0);
    }

    #[test]
    fn navigate_steps_by_slot_angle() {
        let mut s = state();
        s.navigate(1, 2, Instant::now());
        assert!((s.target() - PI).abs() < 1e-6);
    }

    #[test]
    fn drag_end_resumes_after_settle_delay() {
        let t0 = Instant::now();
        let mut s = state();
        s.begin_drag();
        assert_eq!(s.mode(), RotationMode::Dragging);
        s.end_drag(t0);
        assert_eq!(s.mode(), RotationMode::Settling);
        s.poll_settle(t0 + Duration::from_millis(2999));
        assert!(!s.auto_rotate());
        s.poll_settle(t0 + Duration::from_millis(3000));
        assert!(s.auto_rotate());
    }

    #[test]
    fn pause_during_settle_blocks_resume() {
        let t0 = Instant::now();
        let mut s = state();
        s.begin_drag();
        s.end_drag(t0);
        s.toggle_pause();
        s.poll_settle(t0 + Duration::from_secs(10));
        assert!(!s.auto_rotate());
        assert_eq!(s.mode(), RotationMode::Paused);
    }

    #[test]
    fn stale_timer_cannot_override_later_pause() {
        let t0 = Instant::now();
        let mut s = state();
        // Two quick drags; the first timer must not count.
        s.begin_drag();
        s.end_drag(t0);
        s.begin_drag();
        s.end_drag(t0 + Duration::from_millis(500));
        s.toggle_pause();
        s.toggle_pause();
        // Unpausing resumes immediately.
        assert!(s.auto_rotate());
        s.toggle_pause();
        s.poll_settle(t0 + Duration::from_secs(5));
        assert!(!s.auto_rotate());
    }

    #[test]
    fn drag_during_settle_cancels_resume() {
        let t0 = Instant::now();
        let mut s = state();
        s.begin_drag();
        s.end_drag(t0);
        s.begin_drag();
        s.poll_settle(t0 + Duration::from_secs(4));
        assert!(!s.auto_rotate());
        assert_eq!(s.mode(), RotationMode::Dragging);
    }

    #[test]
    fn unpause_while_dragging_keeps_invariant() {
        let mut s = state();
        s.begin_drag();
        s.toggle_pause();
        s.toggle_pause();
        assert!(s.dragging());
        assert!(!s.auto_rotate());
    }

    #[test]
    fn speed_cycle_wraps() {
        let mut s = state();
        assert_eq!(s.cycle_speed(), SpeedPreset::Fast);
        assert_eq!(s.cycle_speed(), SpeedPreset::Slow);
        assert_eq!(s.cycle_speed(), SpeedPreset::Normal);
        assert_eq!(SpeedPreset::ALL.len(), 3);
    }
}
