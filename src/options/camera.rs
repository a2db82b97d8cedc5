use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and placement.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(
        title = "Field of View",
        range(min = 20.0, max = 100.0),
        extend("step" = 1.0)
    )]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Distance from the ring center along +Z.
    #[schemars(
        title = "Distance",
        range(min = 5.0, max = 60.0),
        extend("step" = 0.5)
    )]
    pub distance: f32,
    /// Eye height above the ring plane.
    #[schemars(
        title = "Height",
        range(min = -10.0, max = 10.0),
        extend("step" = 0.1)
    )]
    pub height: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            distance: 15.0,
            height: 0.0,
        }
    }
}
