use std::f32::consts::TAU;

use glam::{Mat4, Quat, Vec3};
use rustc_hash::FxHashMap;

use super::resources::{
    fallback_color, GeometryHandle, MaterialHandle, SlotResources,
    TextureHandle,
};
use crate::gallery::GalleryItem;
use crate::options::CarouselOptions;

/// Stable identity of a slot, unique across rebuilds within one builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u64);

/// One item's renderable placeholder on the ring.
#[derive(Debug, Clone)]
pub struct VisualSlot {
    /// Identity used by picking and the slot → item binding.
    pub id: SlotId,
    /// Position of the slot around the ring (0-based).
    pub ring_index: usize,
    /// Angle around the ring, `2π·i/n`, clockwise seen from above.
    pub angle: f32,
    /// Position relative to the ring center.
    pub position: Vec3,
    /// Yaw of the slot about +Y, `-angle`.
    pub rotation_y: f32,
    /// Texture owned by this slot.
    pub texture: TextureHandle,
    /// Material owned by this slot.
    pub material: MaterialHandle,
    /// Whether the texture is the deterministic fallback swatch.
    pub fallback: bool,
    world: Mat4,
}

impl VisualSlot {
    /// Transform relative to the carousel group (ring space).
    ///
    /// The quad's normal points radially outward.
    #[must_use]
    pub fn local_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_rotation_y(self.rotation_y),
            self.position,
        )
    }

    /// World transform as of the last
    /// [`update_transforms`](CarouselBuilder::update_transforms).
    #[must_use]
    pub fn world_transform(&self) -> Mat4 {
        self.world
    }
}

/// Angle of slot `index` on a ring of `count` slots.
#[must_use]
pub fn slot_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    TAU * index as f32 / count as f32
}

/// Ring-space position of a slot at `angle` on a ring of `radius`.
///
/// Angle zero faces the camera (+Z); angles grow clockwise seen from above,
/// toward -X.
#[must_use]
pub fn slot_position(angle: f32, radius: f32) -> Vec3 {
    Vec3::new(-radius * angle.sin(), 0.0, radius * angle.cos())
}

/// Angle between neighbouring slots, or `None` for an empty ring.
#[must_use]
pub fn angle_step(count: usize) -> Option<f32> {
    (count > 0).then(|| TAU / count as f32)
}

/// Builds and owns the ring of [`VisualSlot`]s.
///
/// Every [`build`](Self::build) releases the previous slot set (shared
/// geometry, per-slot materials and textures) before creating the new one,
/// so the number of live resources only ever reflects the current ring.
pub struct CarouselBuilder {
    radius: f32,
    slot_width: f32,
    slot_height: f32,
    slots: Vec<VisualSlot>,
    geometry: Option<GeometryHandle>,
    /// Slot identity → index into the gallery's source item list.
    bindings: FxHashMap<SlotId, usize>,
    next_slot_id: u64,
    rebuilds: u64,
}

impl CarouselBuilder {
    /// Create an empty builder with the ring dimensions from `options`.
    #[must_use]
    pub fn new(options: &CarouselOptions) -> Self {
        Self {
            radius: options.radius,
            slot_width: options.slot_width,
            slot_height: options.slot_height,
            slots: Vec::new(),
            geometry: None,
            bindings: FxHashMap::default(),
            next_slot_id: 0,
            rebuilds: 0,
        }
    }

    /// Ring radius in world units.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// World-space `(width, height)` of every slot quad.
    #[must_use]
    pub fn slot_size(&self) -> (f32, f32) {
        (self.slot_width, self.slot_height)
    }

    /// Current slot set in ring order.
    #[must_use]
    pub fn slots(&self) -> &[VisualSlot] {
        &self.slots
    }

    /// Shared geometry of the current ring, if any slots exist.
    #[must_use]
    pub fn geometry(&self) -> Option<GeometryHandle> {
        self.geometry
    }

    /// Number of completed builds.
    #[must_use]
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Source item index bound to a slot.
    #[must_use]
    pub fn item_index(&self, slot: SlotId) -> Option<usize> {
        self.bindings.get(&slot).copied()
    }

    /// Rebuild the ring for the given subset of `items`.
    ///
    /// `selection` lists indices into `items` in ring order. An empty
    /// selection yields an empty ring. A texture that fails to load is
    /// replaced with a solid [`fallback_color`] swatch; the rebuild itself
    /// never fails.
    pub fn build<R: SlotResources>(
        &mut self,
        items: &[GalleryItem],
        selection: &[usize],
        resources: &mut R,
    ) -> &[VisualSlot] {
        self.release(resources);

        let count = selection.len();
        if count > 0 {
            self.geometry = Some(
                resources.create_geometry(self.slot_width, self.slot_height),
            );
        }

        self.slots.reserve(count);
        for (ring_index, &item_index) in selection.iter().enumerate() {
            let Some(item) = items.get(item_index) else {
                log::warn!(
                    "carousel selection index {item_index} out of range"
                );
                continue;
            };
            let slot = self.create_slot(ring_index, count, item, resources);
            let _ = self.bindings.insert(slot.id, item_index);
            self.slots.push(slot);
        }

        self.rebuilds += 1;
        log::debug!(
            "carousel rebuild #{}: {} slots",
            self.rebuilds,
            self.slots.len()
        );
        &self.slots
    }

    fn create_slot<R: SlotResources>(
        &mut self,
        ring_index: usize,
        count: usize,
        item: &GalleryItem,
        resources: &mut R,
    ) -> VisualSlot {
        let (texture, fallback) = match resources.load_texture(&item.asset) {
            Ok(texture) => (texture, false),
            Err(e) => {
                log::warn!("using fallback for '{}': {e}", item.label);
                (resources.solid_texture(fallback_color(item)), true)
            }
        };
        let material = resources.create_material(texture);

        let angle = slot_angle(ring_index, count);
        self.next_slot_id += 1;
        let mut slot = VisualSlot {
            id: SlotId(self.next_slot_id),
            ring_index,
            angle,
            position: slot_position(angle, self.radius),
            rotation_y: -angle,
            texture,
            material,
            fallback,
            world: Mat4::IDENTITY,
        };
        slot.world = slot.local_transform();
        slot
    }

    /// Release every resource held by the current ring and clear it.
    pub fn release<R: SlotResources>(&mut self, resources: &mut R) {
        for slot in self.slots.drain(..) {
            resources.release_material(slot.material);
            resources.release_texture(slot.texture);
        }
        if let Some(geometry) = self.geometry.take() {
            resources.release_geometry(geometry);
        }
        self.bindings.clear();
    }

    /// Recompute every slot's world transform under the carousel group
    /// transform.
    pub fn update_transforms(&mut self, group: Mat4) {
        for slot in &mut self.slots {
            slot.world = group * slot.local_transform();
        }
    }
}
