use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Carousel", inline)]
#[serde(default)]
/// Ring geometry.
pub struct CarouselOptions {
    /// Ring radius in world units.
    #[schemars(
        title = "Radius",
        range(min = 1.0, max = 20.0),
        extend("step" = 0.1)
    )]
    pub radius: f32,
    /// Width of each slot quad.
    #[schemars(
        title = "Slot Width",
        range(min = 0.2, max = 8.0),
        extend("step" = 0.1)
    )]
    pub slot_width: f32,
    /// Height of each slot quad.
    #[schemars(
        title = "Slot Height",
        range(min = 0.2, max = 8.0),
        extend("step" = 0.1)
    )]
    pub slot_height: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            radius: 6.0,
            slot_width: 2.4,
            slot_height: 1.6,
        }
    }
}
