//! Handle-based allocation interface for slot render resources.
//!
//! The carousel never owns GPU objects directly. It asks a
//! [`SlotResources`] backend for opaque handles and gives every handle back
//! when its slot is torn down, which keeps rebuild counts unbounded without
//! resource growth.

use crate::error::GalleryError;
use crate::gallery::{AssetRef, GalleryItem};

/// Shared quad geometry, one per rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub u64);

/// Per-slot texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Per-slot material binding a texture for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u64);

/// Backend that creates and releases the resources a slot draws with.
///
/// Implemented by [`GpuSlotResources`] for wgpu rendering.
///
/// [`GpuSlotResources`]: crate::gpu::slot_resources::GpuSlotResources
pub trait SlotResources {
    /// Create a flat quad of the given world-space size.
    fn create_geometry(&mut self, width: f32, height: f32) -> GeometryHandle;

    /// Fetch and upload the texture for an asset.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::AssetLoad`] when the asset cannot be fetched
    /// or decoded.
    fn load_texture(
        &mut self,
        asset: &AssetRef,
    ) -> Result<TextureHandle, GalleryError>;

    /// Create a single-color texture used when an item's asset failed.
    fn solid_texture(&mut self, rgba: [u8; 4]) -> TextureHandle;

    /// Bind a texture into a drawable material.
    fn create_material(&mut self, texture: TextureHandle) -> MaterialHandle;

    /// Release shared geometry.
    fn release_geometry(&mut self, geometry: GeometryHandle);

    /// Release a material.
    fn release_material(&mut self, material: MaterialHandle);

    /// Release a texture.
    fn release_texture(&mut self, texture: TextureHandle);
}

/// Deterministic fallback color for an item whose texture failed to load.
///
/// Derived from an FNV-1a hash of the label so that the same item always
/// renders the same swatch across runs and platforms.
#[must_use]
pub fn fallback_color(item: &GalleryItem) -> [u8; 4] {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in item.label.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    // Keep channels in a mid range so the swatch reads as a muted tile.
    let channel = |shift: u32| 64 + ((hash >> shift) & 0x7f) as u8;
    [channel(0), channel(8), channel(16), 255]
}

#[cfg(test)]
pub(crate) mod testing {
    use rustc_hash::{FxHashMap, FxHashSet};

    use super::{
        GeometryHandle, MaterialHandle, SlotResources, TextureHandle,
    };
    use crate::error::GalleryError;
    use crate::gallery::AssetRef;

    /// In-memory backend that counts live handles.
    #[derive(Default)]
    pub(crate) struct CountingResources {
        next_id: u64,
        pub geometries: FxHashSet<u64>,
        pub materials: FxHashSet<u64>,
        pub textures: FxHashMap<u64, Option<[u8; 4]>>,
        pub failing: FxHashSet<String>,
        pub geometry_created: usize,
    }

    impl CountingResources {
        pub(crate) fn failing_on(assets: &[&str]) -> Self {
            Self {
                failing: assets.iter().map(|a| (*a).to_owned()).collect(),
                ..Self::default()
            }
        }

        pub(crate) fn live_total(&self) -> usize {
            self.geometries.len() + self.materials.len() + self.textures.len()
        }

        fn next(&mut self) -> u64 {
            self.next_id += 1;
            self.next_id
        }
    }

    impl SlotResources for CountingResources {
        fn create_geometry(&mut self, _w: f32, _h: f32) -> GeometryHandle {
            let id = self.next();
            let _ = self.geometries.insert(id);
            self.geometry_created += 1;
            GeometryHandle(id)
        }

        fn load_texture(
            &mut self,
            asset: &AssetRef,
        ) -> Result<TextureHandle, GalleryError> {
            if self.failing.contains(asset.as_str()) {
                return Err(GalleryError::AssetLoad {
                    asset: asset.to_string(),
                    reason: "unreachable".into(),
                });
            }
            let id = self.next();
            let _ = self.textures.insert(id, None);
            Ok(TextureHandle(id))
        }

        fn solid_texture(&mut self, rgba: [u8; 4]) -> TextureHandle {
            let id = self.next();
            let _ = self.textures.insert(id, Some(rgba));
            TextureHandle(id)
        }

        fn create_material(
            &mut self,
            _texture: TextureHandle,
        ) -> MaterialHandle {
            let id = self.next();
            let _ = self.materials.insert(id);
            MaterialHandle(id)
        }

        fn release_geometry(&mut self, geometry: GeometryHandle) {
            let _ = self.geometries.remove(&geometry.0);
        }

        fn release_material(&mut self, material: MaterialHandle) {
            let _ = self.materials.remove(&material.0);
        }

        fn release_texture(&mut self, texture: TextureHandle) {
            let _ = self.textures.remove(&texture.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_color_is_stable_per_label() {
        let a = GalleryItem::new("a.png", "Harbor at dusk", "sea");
        let b = GalleryItem::new("b.png", "Harbor at dusk", "city");
        let c = GalleryItem::new("c.png", "Forest", "sea");
        assert_eq!(fallback_color(&a), fallback_color(&b));
        assert_ne!(fallback_color(&a), fallback_color(&c));
        assert_eq!(fallback_color(&a)[3], 255);
    }

    #[test]
    fn fallback_color_stays_in_mid_range() {
        let item = GalleryItem::new("x", "", "y");
        for channel in &fallback_color(&item)[..3] {
            assert!((64..=191).contains(channel));
        }
    }
}
