use glam::Vec3;

use crate::options::LightingOptions;

/// Lighting configuration shared by the slot shader.
/// NOTE: Must match WGSL struct layout exactly (64 bytes)
///
/// WGSL layout:
///   ambient_color: vec3<f32>    (offset 0)
///   ambient: f32                (offset 12)
///   directional_dir: vec3<f32>  (offset 16)
///   directional: f32            (offset 28)
///   accent_color: vec3<f32>     (offset 32)
///   accent: f32                 (offset 44)
///   accent_position: vec3<f32>  (offset 48)
///   _pad: f32                   (offset 60)
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Ambient tint.
    pub ambient_color: [f32; 3],
    /// Ambient intensity.
    pub ambient: f32,
    /// Direction the key light travels (normalized).
    pub directional_dir: [f32; 3],
    /// Key light intensity.
    pub directional: f32,
    /// Accent point light color.
    pub accent_color: [f32; 3],
    /// Accent point light intensity.
    pub accent: f32,
    /// Accent point light position in world space.
    pub accent_position: [f32; 3],
    /// Padding to 16-byte alignment.
    pub _pad: f32,
}

/// Ambient fill, one directional key light, and a colored accent point
/// light in front of the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct LightingRig {
    /// Ambient intensity.
    pub ambient: f32,
    /// Ambient tint.
    pub ambient_color: Vec3,
    /// Key light intensity.
    pub directional: f32,
    /// Direction the key light travels.
    pub directional_dir: Vec3,
    /// Accent intensity.
    pub accent: f32,
    /// Accent color.
    pub accent_color: Vec3,
    /// Accent position.
    pub accent_position: Vec3,
}

impl LightingRig {
    /// Build the rig from options, normalizing the key light direction.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        Self {
            ambient: options.ambient,
            ambient_color: Vec3::from(options.ambient_color),
            directional: options.directional,
            directional_dir: Vec3::from(options.directional_dir)
                .try_normalize()
                .unwrap_or(Vec3::NEG_Y),
            accent: options.accent,
            accent_color: Vec3::from(options.accent_color),
            accent_position: Vec3::from(options.accent_position),
        }
    }

    /// GPU representation.
    #[must_use]
    pub fn uniform(&self) -> LightingUniform {
        LightingUniform {
            ambient_color: self.ambient_color.to_array(),
            ambient: self.ambient,
            directional_dir: self.directional_dir.to_array(),
            directional: self.directional,
            accent_color: self.accent_color.to_array(),
            accent: self.accent,
            accent_position: self.accent_position.to_array(),
            _pad: 0.0,
        }
    }
}
