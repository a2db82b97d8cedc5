//! GPU render passes for the gallery: slot quads, the particle backdrop,
//! and the full-size viewer overlay.

/// Frame orchestration and shared scene uniforms.
pub mod frame;
/// Item viewer overlay.
pub mod overlay;
/// Backdrop point cloud.
pub mod particle_pass;
pub(crate) mod pipeline_util;
/// Instanced slot quads.
pub mod slot_pass;

pub use frame::FrameRenderer;
pub use overlay::{OverlayViewer, ViewerOverlay};
pub use particle_pass::ParticlePass;
pub use slot_pass::{OverlayDraw, SlotInstance, SlotPass};
