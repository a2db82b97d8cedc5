//! Centralized gallery options with TOML preset support.
//!
//! All tweakable settings (camera, ring geometry, rotation feel, lighting,
//! particles, viewport, keybindings) are consolidated here. Options
//! serialize to/from TOML so presets can be stored next to a gallery
//! manifest.

mod camera;
mod carousel;
mod keybindings;
mod lighting;
mod particles;
mod rotation;
mod viewport;

use std::path::Path;

pub use camera::CameraOptions;
pub use carousel::CarouselOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
pub use particles::ParticleOptions;
pub use rotation::RotationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewport::ViewportOptions;

use crate::error::GalleryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rotation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and placement.
    pub camera: CameraOptions,
    /// Ring geometry.
    pub carousel: CarouselOptions,
    /// Rotation easing, drag response, and auto-rotate timing.
    pub rotation: RotationOptions,
    /// Lighting rig.
    pub lighting: LightingOptions,
    /// Decorative particle backdrop.
    pub particles: ParticleOptions,
    /// Resize handling and frame pacing.
    pub viewport: ViewportOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::OptionsParse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, GalleryError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| GalleryError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Io`] if the file cannot be read, or
    /// [`GalleryError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), GalleryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GalleryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(GalleryError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
