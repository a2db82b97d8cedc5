use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Ambient, directional key, and accent point light.
pub struct LightingOptions {
    /// Ambient intensity.
    #[schemars(
        title = "Ambient",
        range(min = 0.0, max = 1.5),
        extend("step" = 0.01)
    )]
    pub ambient: f32,
    /// Ambient tint.
    #[schemars(skip)]
    pub ambient_color: [f32; 3],
    /// Directional light intensity.
    #[schemars(
        title = "Key Light",
        range(min = 0.0, max = 3.0),
        extend("step" = 0.05)
    )]
    pub directional: f32,
    /// Direction the key light travels (normalized on use).
    #[schemars(skip)]
    pub directional_dir: [f32; 3],
    /// Accent point-light intensity.
    #[schemars(
        title = "Accent",
        range(min = 0.0, max = 3.0),
        extend("step" = 0.05)
    )]
    pub accent: f32,
    /// Accent light color.
    #[schemars(skip)]
    pub accent_color: [f32; 3],
    /// Accent light world position.
    #[schemars(skip)]
    pub accent_position: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient: 0.6,
            ambient_color: [1.0, 1.0, 1.0],
            directional: 0.8,
            directional_dir: [-0.5, -1.0, -1.0],
            accent: 1.0,
            accent_color: [0.55, 0.35, 1.0],
            accent_position: [0.0, 4.0, 8.0],
        }
    }
}
