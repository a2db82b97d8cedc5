//! The ring of item slots: placement, resource lifecycle, and
//! nearest-slot tracking.

/// Ring placement and the slot-owning builder.
pub mod builder;
/// Nearest-slot index for informational UI.
pub mod nearest;
/// Handle-based resource backend interface.
pub mod resources;

pub use builder::{
    angle_step, slot_angle, slot_position, CarouselBuilder, SlotId, VisualSlot,
};
pub use nearest::{nearest_index, normalize_angle};
pub use resources::{
    fallback_color, GeometryHandle, MaterialHandle, SlotResources,
    TextureHandle,
};
