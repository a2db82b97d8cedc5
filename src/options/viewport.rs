use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewport", inline)]
#[serde(default)]
/// Resize handling and frame pacing.
pub struct ViewportOptions {
    /// Quiet period before a resize is applied.
    #[schemars(
        title = "Resize Debounce (ms)",
        range(min = 0, max = 2000),
        extend("step" = 10)
    )]
    pub resize_debounce_ms: u64,
    /// Frame-rate cap (0 = unlimited).
    #[schemars(
        title = "Target FPS",
        range(min = 0, max = 240),
        extend("step" = 1)
    )]
    pub target_fps: u32,
    /// Background clear color (linear RGBA).
    #[schemars(skip)]
    pub clear_color: [f32; 4],
}

impl ViewportOptions {
    /// Debounce window as a [`Duration`].
    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 250,
            target_fps: 60,
            clear_color: [0.02, 0.02, 0.05, 1.0],
        }
    }
}
