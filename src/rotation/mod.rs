//! Carousel rotation: eased continuous rotation, drag/pause/auto-rotate
//! flags, speed presets, and the settle-and-resume timer.

/// Generation-tracked settle timer.
pub mod settle;
/// Rotation state machine.
pub mod state;

pub use settle::SettleTimer;
pub use state::{RotationMode, RotationState, SpeedPreset};
