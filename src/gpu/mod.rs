//! GPU resource management: device/surface setup, image decoding seam, and
//! the wgpu slot resource backend.

/// Image decoding interface and the file decoder.
pub mod decode;
/// wgpu device, surface, queue, and depth buffer initialization.
pub mod render_context;
/// Handle-based slot quads, textures, and materials on the GPU.
pub mod slot_resources;

#[cfg(feature = "viewer")]
pub use decode::FileDecoder;
pub use decode::{DecodedImage, ImageDecoder};
pub use render_context::{RenderContext, RenderContextError};
pub use slot_resources::{GpuSlotResources, LiveResources};
