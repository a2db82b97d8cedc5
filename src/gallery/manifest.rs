//! TOML description of a gallery's items.
//!
//! ```toml
//! [[items]]
//! asset = "images/harbor.jpg"
//! label = "Harbor at dusk"
//! category = "sea"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::item::{AssetRef, GalleryItem};
use crate::error::GalleryError;

/// Ordered item list loaded from a manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<GalleryItem>,
}

impl Manifest {
    /// Parse a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::ManifestParse`] on malformed TOML or missing
    /// item fields.
    pub fn from_toml_str(content: &str) -> Result<Self, GalleryError> {
        toml::from_str(content)
            .map_err(|e| GalleryError::ManifestParse(e.to_string()))
    }

    /// Load a manifest file. Relative asset paths are resolved against the
    /// manifest's directory.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Io`] if the file cannot be read, or
    /// [`GalleryError::ManifestParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let content = std::fs::read_to_string(path)?;
        let mut manifest = Self::from_toml_str(&content)?;
        if let Some(dir) = path.parent() {
            manifest.rebase(dir);
        }
        log::info!(
            "loaded {} items from {}",
            manifest.items.len(),
            path.display()
        );
        Ok(manifest)
    }

    fn rebase(&mut self, dir: &Path) {
        for item in &mut self.items {
            let asset = Path::new(item.asset.as_str());
            if asset.is_relative() && !item.asset.as_str().contains("://") {
                item.asset =
                    AssetRef::new(dir.join(asset).to_string_lossy());
            }
        }
    }

    /// Distinct categories in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[items]]
asset = "a.jpg"
label = "A"
category = "x"

[[items]]
asset = "https://example.org/b.jpg"
label = "B"
category = "y"

[[items]]
asset = "/abs/c.jpg"
label = "C"
category = "x"
"#;

    #[test]
    fn parses_items_in_order() {
        let manifest = Manifest::from_toml_str(SAMPLE).unwrap();
        let labels: Vec<&str> =
            manifest.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C"]);
        assert_eq!(manifest.categories(), ["x", "y"]);
    }

    #[test]
    fn missing_field_is_a_manifest_error() {
        let err = Manifest::from_toml_str("[[items]]\nlabel = \"A\"\n")
            .unwrap_err();
        assert!(matches!(err, GalleryError::ManifestParse(_)));
    }

    #[test]
    fn empty_manifest_has_no_items() {
        assert!(Manifest::from_toml_str("").unwrap().items.is_empty());
    }

    #[test]
    fn load_rebases_relative_paths_only() {
        let dir = std::env::temp_dir()
            .join(format!("orbis-manifest-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("gallery.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(
            manifest.items[0].asset.as_str(),
            dir.join("a.jpg").to_string_lossy()
        );
        assert_eq!(
            manifest.items[1].asset.as_str(),
            "https://example.org/b.jpg"
        );
        assert_eq!(manifest.items[2].asset.as_str(), "/abs/c.jpg");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
