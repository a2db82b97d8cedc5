use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to an item's image, resolved by the texture loader.
///
/// The gallery never interprets the string; it is handed verbatim to
/// [`SlotResources::load_texture`] and to the item viewer.
///
/// [`SlotResources::load_texture`]:
///     crate::carousel::SlotResources::load_texture
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    /// Wrap a raw asset reference (path, URL, key).
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The raw reference string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the gallery: an image with a caption and a category tag.
///
/// Items are immutable once handed to the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Image to show on the item's slot.
    pub asset: AssetRef,
    /// Caption shown when the item is nearest the camera.
    pub label: String,
    /// Category tag matched by the filter selectors.
    pub category: String,
}

impl GalleryItem {
    /// Build an item from its three parts.
    pub fn new(
        asset: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            asset: AssetRef::new(asset),
            label: label.into(),
            category: category.into(),
        }
    }
}
