use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Particles", inline)]
#[serde(default)]
/// Decorative particle backdrop.
pub struct ParticleOptions {
    /// Number of points.
    #[schemars(
        title = "Count",
        range(min = 0, max = 20000),
        extend("step" = 100)
    )]
    pub count: u32,
    /// Side length of the cube the points are scattered in.
    #[schemars(
        title = "Extent",
        range(min = 10.0, max = 200.0),
        extend("step" = 1.0)
    )]
    pub extent: f32,
    /// Per-frame spin around the X and Y axes (radians).
    #[schemars(skip)]
    pub spin: [f32; 2],
    /// Point color (linear RGBA).
    #[schemars(skip)]
    pub color: [f32; 4],
    /// Seed for reproducible placement; random when unset.
    #[schemars(skip)]
    pub seed: Option<u64>,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 1500,
            extent: 60.0,
            spin: [0.0002, 0.0005],
            color: [0.8, 0.8, 1.0, 0.8],
            seed: None,
        }
    }
}
