//! wgpu implementation of the slot resource backend.

use rustc_hash::FxHashMap;
use wgpu::util::DeviceExt;

use super::decode::{DecodedImage, ImageDecoder};
use crate::carousel::{
    GeometryHandle, MaterialHandle, SlotResources, TextureHandle,
};
use crate::error::GalleryError;
use crate::gallery::AssetRef;

/// Vertex of a slot quad.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// Position in the quad's local XY plane.
    pub position: [f32; 3],
    /// Face normal (`+Z`).
    pub normal: [f32; 3],
    /// Texture coordinate, `(0, 0)` at the top-left.
    pub uv: [f32; 2],
}

impl QuadVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x2,
    ];

    /// Vertex buffer layout matching the slot shader.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Corners of a `width × height` quad centered on the origin, wound
/// counter-clockwise seen from `+Z`.
#[must_use]
pub fn quad_vertices(width: f32, height: f32) -> [QuadVertex; 4] {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let corner = |x: f32, y: f32, u: f32, v: f32| QuadVertex {
        position: [x, y, 0.0],
        normal: [0.0, 0.0, 1.0],
        uv: [u, v],
    };
    [
        corner(-hw, -hh, 0.0, 1.0),
        corner(hw, -hh, 1.0, 1.0),
        corner(hw, hh, 1.0, 0.0),
        corner(-hw, hh, 0.0, 0.0),
    ]
}

/// Index list for [`quad_vertices`].
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Vertex and index buffers of one slot quad.
pub struct QuadGeometry {
    /// Vertex buffer of [`QuadVertex`].
    pub vertex_buffer: wgpu::Buffer,
    /// `u16` index buffer.
    pub index_buffer: wgpu::Buffer,
    /// Number of indices to draw.
    pub index_count: u32,
}

struct GpuTexture {
    view: wgpu::TextureView,
    size: (u32, u32),
}

struct Material {
    bind_group: wgpu::BindGroup,
    texture: TextureHandle,
}

/// Live handle counts, for leak checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LiveResources {
    /// Quad geometries.
    pub geometries: usize,
    /// Materials.
    pub materials: usize,
    /// Textures.
    pub textures: usize,
}

/// Allocates slot quads, textures and materials on a wgpu device.
///
/// Handles map to GPU objects held here; releasing a handle drops the
/// objects it owns.
pub struct GpuSlotResources {
    device: wgpu::Device,
    queue: wgpu::Queue,
    decoder: Box<dyn ImageDecoder>,
    material_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    next_id: u64,
    geometries: FxHashMap<u64, QuadGeometry>,
    textures: FxHashMap<u64, GpuTexture>,
    materials: FxHashMap<u64, Material>,
}

impl GpuSlotResources {
    /// Create an empty backend on `device`, decoding assets with `decoder`.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        decoder: Box<dyn ImageDecoder>,
    ) -> Self {
        let material_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Slot Material Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float {
                                filterable: true,
                            },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(
                            wgpu::SamplerBindingType::Filtering,
                        ),
                        count: None,
                    },
                ],
            });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Slot Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        Self {
            device: device.clone(),
            queue: queue.clone(),
            decoder,
            material_layout,
            sampler,
            next_id: 0,
            geometries: FxHashMap::default(),
            textures: FxHashMap::default(),
            materials: FxHashMap::default(),
        }
    }

    /// Layout of every material bind group (texture + sampler).
    #[must_use]
    pub fn material_layout(&self) -> &wgpu::BindGroupLayout {
        &self.material_layout
    }

    /// Buffers behind a geometry handle.
    #[must_use]
    pub fn geometry(&self, handle: GeometryHandle) -> Option<&QuadGeometry> {
        self.geometries.get(&handle.0)
    }

    /// Bind group behind a material handle.
    #[must_use]
    pub fn material(&self, handle: MaterialHandle) -> Option<&wgpu::BindGroup> {
        self.materials.get(&handle.0).map(|m| &m.bind_group)
    }

    /// Pixel size of the texture a material samples.
    #[must_use]
    pub fn material_size(&self, handle: MaterialHandle) -> Option<(u32, u32)> {
        let material = self.materials.get(&handle.0)?;
        self.textures.get(&material.texture.0).map(|t| t.size)
    }

    /// Current handle counts.
    #[must_use]
    pub fn live_resources(&self) -> LiveResources {
        LiveResources {
            geometries: self.geometries.len(),
            materials: self.materials.len(),
            textures: self.textures.len(),
        }
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn upload(&mut self, label: &str, image: &DecodedImage) -> TextureHandle {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width),
                rows_per_image: Some(image.height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let id = self.next();
        let _ = self.textures.insert(
            id,
            GpuTexture {
                view,
                size: (image.width, image.height),
            },
        );
        TextureHandle(id)
    }
}

impl SlotResources for GpuSlotResources {
    fn create_geometry(&mut self, width: f32, height: f32) -> GeometryHandle {
        let vertices = quad_vertices(width, height);
        let vertex_buffer =
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Slot Quad Vertices"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
        let index_buffer =
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Slot Quad Indices"),
                    contents: bytemuck::cast_slice(&QUAD_INDICES),
                    usage: wgpu::BufferUsages::INDEX,
                });
        let id = self.next();
        let _ = self.geometries.insert(
            id,
            QuadGeometry {
                vertex_buffer,
                index_buffer,
                index_count: QUAD_INDICES.len() as u32,
            },
        );
        GeometryHandle(id)
    }

    fn load_texture(
        &mut self,
        asset: &AssetRef,
    ) -> Result<TextureHandle, GalleryError> {
        let image = self.decoder.decode(asset)?;
        let max = self.device.limits().max_texture_dimension_2d;
        if image.width > max || image.height > max {
            return Err(GalleryError::AssetLoad {
                asset: asset.to_string(),
                reason: format!(
                    "{}x{} exceeds the {max}px texture limit",
                    image.width, image.height
                ),
            });
        }
        Ok(self.upload(asset.as_str(), &image))
    }

    fn solid_texture(&mut self, rgba: [u8; 4]) -> TextureHandle {
        let pixel = DecodedImage {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        };
        self.upload("Fallback Swatch", &pixel)
    }

    fn create_material(&mut self, texture: TextureHandle) -> MaterialHandle {
        let id = self.next();
        let Some(gpu_texture) = self.textures.get(&texture.0) else {
            log::error!("material requested for released texture {texture:?}");
            return MaterialHandle(id);
        };
        let bind_group =
            self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Slot Material"),
                layout: &self.material_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(
                            &gpu_texture.view,
                        ),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&self.sampler),
                    },
                ],
            });
        let _ = self.materials.insert(
            id,
            Material {
                bind_group,
                texture,
            },
        );
        MaterialHandle(id)
    }

    fn release_geometry(&mut self, geometry: GeometryHandle) {
        if let Some(quad) = self.geometries.remove(&geometry.0) {
            quad.vertex_buffer.destroy();
            quad.index_buffer.destroy();
        }
    }

    fn release_material(&mut self, material: MaterialHandle) {
        let _ = self.materials.remove(&material.0);
    }

    fn release_texture(&mut self, texture: TextureHandle) {
        let _ = self.textures.remove(&texture.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_faces_positive_z_with_ccw_winding() {
        let v = quad_vertices(2.0, 1.0);
        let p = |i: usize| {
            glam::Vec3::from(v[QUAD_INDICES[i] as usize].position)
        };
        let normal = (p(1) - p(0)).cross(p(2) - p(0));
        assert!(normal.z > 0.0);
        assert_eq!(v[0].position, [-1.0, -0.5, 0.0]);
        assert_eq!(v[2].position, [1.0, 0.5, 0.0]);
    }

    #[test]
    fn top_left_corner_samples_texture_origin() {
        let v = quad_vertices(2.0, 1.0);
        let top_left = v
            .iter()
            .find(|c| c.position[0] < 0.0 && c.position[1] > 0.0);
        assert_eq!(top_left.map(|c| c.uv), Some([0.0, 0.0]));
    }
}
