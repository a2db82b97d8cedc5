use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::rotation::SpeedPreset;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
/// Rotation easing, drag response, and auto-rotate timing.
pub struct RotationOptions {
    /// Fraction of the remaining gap closed each frame.
    #[schemars(
        title = "Damping",
        range(min = 0.01, max = 1.0),
        extend("step" = 0.01)
    )]
    pub damping: f32,
    /// Idle time after manual interaction before auto-rotate resumes.
    #[schemars(
        title = "Settle Delay (ms)",
        range(min = 0, max = 10000),
        extend("step" = 100)
    )]
    pub settle_delay_ms: u64,
    /// Radians of rotation per pixel of horizontal drag.
    #[schemars(
        title = "Drag Sensitivity",
        range(min = 0.0005, max = 0.05),
        extend("step" = 0.0005)
    )]
    pub drag_sensitivity: f32,
    /// Speed preset at startup.
    #[schemars(title = "Initial Speed")]
    pub initial_speed: SpeedPreset,
}

impl RotationOptions {
    /// Settle delay as a [`Duration`].
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            damping: 0.08,
            settle_delay_ms: 3000,
            drag_sensitivity: 0.005,
            initial_speed: SpeedPreset::Normal,
        }
    }
}
