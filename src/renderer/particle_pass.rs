use wgpu::util::DeviceExt;

use super::pipeline_util::{depth_stencil_state, surface_target, uniform_entry};
use crate::scene::ParticleField;

/// NOTE: Must match `Particles` in particles.wgsl (80 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ParticleUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

/// Draws the backdrop point cloud.
pub struct ParticlePass {
    pipeline: wgpu::RenderPipeline,
    positions: Option<wgpu::Buffer>,
    count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ParticlePass {
    /// Upload the field's points and build the point-list pipeline.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        scene_layout: &wgpu::BindGroupLayout,
        field: &ParticleField,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/particles.wgsl"
        ));
        let particle_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Particle Layout"),
                entries: &[uniform_entry(
                    0,
                    wgpu::ShaderStages::VERTEX_FRAGMENT,
                )],
            });
        let uniform_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Particle Uniform"),
                contents: bytemuck::bytes_of(&uniform_for(field)),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Particle Bind Group"),
            layout: &particle_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let points: Vec<[f32; 3]> =
            field.positions().iter().map(|p| p.to_array()).collect();
        let positions = (!points.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Particle Positions"),
                contents: bytemuck::cast_slice(&points),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        let layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Particle Pipeline Layout"),
                bind_group_layouts: &[scene_layout, &particle_layout],
                push_constant_ranges: &[],
            });
        let pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Particle Pipeline"),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: size_of::<[f32; 3]>()
                            as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                    }],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &surface_target(format),
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::PointList,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    depth_write_enabled: false,
                    ..depth_stencil_state()
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        Self {
            pipeline,
            positions,
            count: points.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    /// Upload the field's current spin and color.
    pub fn prepare(&self, queue: &wgpu::Queue, field: &ParticleField) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniform_for(field)),
        );
    }

    /// Record the point draw.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        scene: &wgpu::BindGroup,
    ) {
        let Some(positions) = &self.positions else {
            return;
        };
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, scene, &[]);
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, positions.slice(..));
        pass.draw(0..self.count, 0..1);
    }
}

fn uniform_for(field: &ParticleField) -> ParticleUniform {
    ParticleUniform {
        model: field.transform().to_cols_array_2d(),
        color: field.color(),
    }
}
