use glam::Mat4;

use super::pipeline_util::{
    depth_stencil_state, overlay_depth_state, surface_target,
};
use crate::carousel::{GeometryHandle, MaterialHandle, VisualSlot};
use crate::gpu::slot_resources::{GpuSlotResources, QuadVertex};

/// Per-draw instance data: model matrix and shading parameters.
/// NOTE: Must match `InstanceIn` in slot.wgsl (80 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SlotInstance {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
    /// `x` = unlit mix (0 lit, 1 unlit), `y` = opacity.
    pub params: [f32; 4],
}

impl SlotInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
    ];

    /// Lit, opaque instance.
    #[must_use]
    pub fn lit(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            params: [0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Unlit, opaque instance.
    #[must_use]
    pub fn unlit(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            params: [1.0, 1.0, 0.0, 0.0],
        }
    }

    /// Instance buffer layout matching the slot shader.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// One quad to draw with a given geometry and material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Draw {
    geometry: GeometryHandle,
    material: MaterialHandle,
}

/// An item shown full-size on top of the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayDraw {
    /// Unit quad geometry.
    pub geometry: GeometryHandle,
    /// Material of the shown item.
    pub material: MaterialHandle,
    /// World transform placing the quad in front of the camera.
    pub model: Mat4,
}

const MIN_INSTANCES: usize = 16;

/// Draws every ring slot, then the viewer overlay if one is shown.
pub struct SlotPass {
    pipeline: wgpu::RenderPipeline,
    overlay_pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    capacity: usize,
    draws: Vec<Draw>,
    overlay: Option<Draw>,
}

impl SlotPass {
    /// Build the ring and overlay pipelines.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        scene_layout: &wgpu::BindGroupLayout,
        material_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/slot.wgsl"
        ));
        let layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Slot Pipeline Layout"),
                bind_group_layouts: &[scene_layout, material_layout],
                push_constant_ranges: &[],
            });
        let create = |label: &str, depth: wgpu::DepthStencilState| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[QuadVertex::layout(), SlotInstance::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &surface_target(format),
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    // Slots are seen from both sides as the ring turns.
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(depth),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        };
        let pipeline = create("Slot Pipeline", depth_stencil_state());
        let overlay_pipeline =
            create("Slot Overlay Pipeline", overlay_depth_state());

        Self {
            pipeline,
            overlay_pipeline,
            instance_buffer: create_instance_buffer(device, MIN_INSTANCES),
            capacity: MIN_INSTANCES,
            draws: Vec::new(),
            overlay: None,
        }
    }

    /// Upload this frame's instances. Slots without geometry are skipped.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        slots: &[VisualSlot],
        geometry: Option<GeometryHandle>,
        overlay: Option<OverlayDraw>,
    ) {
        let mut instances = Vec::with_capacity(slots.len() + 1);
        self.draws.clear();
        if let Some(geometry) = geometry {
            for slot in slots {
                instances.push(SlotInstance::lit(slot.world_transform()));
                self.draws.push(Draw {
                    geometry,
                    material: slot.material,
                });
            }
        }
        self.overlay = overlay.map(|o| {
            instances.push(SlotInstance::unlit(o.model));
            Draw {
                geometry: o.geometry,
                material: o.material,
            }
        });

        if instances.len() > self.capacity {
            self.capacity = instances.len().next_power_of_two();
            self.instance_buffer =
                create_instance_buffer(device, self.capacity);
            log::debug!("slot instance buffer grown to {}", self.capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&instances),
            );
        }
    }

    /// Record the prepared draws.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        scene: &wgpu::BindGroup,
        resources: &GpuSlotResources,
    ) {
        pass.set_bind_group(0, scene, &[]);
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));

        pass.set_pipeline(&self.pipeline);
        for (i, draw) in self.draws.iter().enumerate() {
            record(pass, resources, *draw, i as u32);
        }
        if let Some(overlay) = self.overlay {
            pass.set_pipeline(&self.overlay_pipeline);
            record(pass, resources, overlay, self.draws.len() as u32);
        }
    }
}

fn record(
    pass: &mut wgpu::RenderPass<'_>,
    resources: &GpuSlotResources,
    draw: Draw,
    instance: u32,
) {
    let (Some(quad), Some(material)) = (
        resources.geometry(draw.geometry),
        resources.material(draw.material),
    ) else {
        return;
    };
    pass.set_bind_group(1, material, &[]);
    pass.set_vertex_buffer(0, quad.vertex_buffer.slice(..));
    pass.set_index_buffer(
        quad.index_buffer.slice(..),
        wgpu::IndexFormat::Uint16,
    );
    pass.draw_indexed(0..quad.index_count, 0, instance..instance + 1);
}

fn create_instance_buffer(
    device: &wgpu::Device,
    capacity: usize,
) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Slot Instances"),
        size: (capacity * size_of::<SlotInstance>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
