//! Shared utilities.

/// Frame pacing and FPS tracking.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
