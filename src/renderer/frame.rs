use wgpu::util::DeviceExt;

use super::overlay::ViewerOverlay;
use super::particle_pass::ParticlePass;
use super::pipeline_util::uniform_entry;
use super::slot_pass::SlotPass;
use crate::gallery::Gallery;
use crate::gpu::{GpuSlotResources, RenderContext};
use crate::scene::SceneManager;

/// Records one frame: backdrop particles, the ring, then the viewer overlay.
pub struct FrameRenderer {
    camera_buffer: wgpu::Buffer,
    lighting_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    slots: SlotPass,
    particles: ParticlePass,
    overlay: ViewerOverlay,
}

impl FrameRenderer {
    /// Create the shared scene uniforms and every pass. `overlay` must be the
    /// one whose viewer was attached to the gallery.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        resources: &GpuSlotResources,
        scene: &SceneManager,
        overlay: ViewerOverlay,
    ) -> Self {
        let device = &context.device;
        let scene_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Scene Layout"),
                entries: &[
                    uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                    uniform_entry(1, wgpu::ShaderStages::FRAGMENT),
                ],
            });
        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Uniform"),
                contents: bytemuck::bytes_of(&scene.camera_uniform()),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let lighting_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Uniform"),
                contents: bytemuck::bytes_of(&scene.lighting().uniform()),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let scene_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Scene Bind Group"),
                layout: &scene_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: camera_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: lighting_buffer.as_entire_binding(),
                    },
                ],
            });

        let format = context.format();
        Self {
            slots: SlotPass::new(
                device,
                format,
                &scene_layout,
                resources.material_layout(),
            ),
            particles: ParticlePass::new(
                device,
                format,
                &scene_layout,
                scene.particles(),
            ),
            camera_buffer,
            lighting_buffer,
            scene_bind_group,
            overlay,
        }
    }

    /// Whether the item viewer overlay is showing.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    /// Upload everything the next frame reads from the gallery.
    pub fn prepare(
        &mut self,
        context: &RenderContext,
        gallery: &mut Gallery<GpuSlotResources>,
    ) {
        self.overlay
            .sync(gallery.resources_mut(), GpuSlotResources::material_size);

        let scene = gallery.scene();
        let queue = &context.queue;
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&scene.camera_uniform()),
        );
        queue.write_buffer(
            &self.lighting_buffer,
            0,
            bytemuck::bytes_of(&scene.lighting().uniform()),
        );
        self.particles.prepare(queue, scene.particles());
        self.slots.prepare(
            &context.device,
            queue,
            gallery.slots(),
            gallery.carousel().geometry(),
            self.overlay.draw(scene.camera()),
        );
    }

    /// Draw the prepared frame to the surface and present it.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the next surface texture cannot be
    /// acquired.
    pub fn render(
        &self,
        context: &RenderContext,
        gallery: &Gallery<GpuSlotResources>,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let [r, g, b, a] = gallery.scene().clear_color().map(f64::from);

        let mut encoder = context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Gallery Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            depth_slice: None,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r,
                                    g,
                                    b,
                                    a,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: context.depth_view(),
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Discard,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            self.particles.draw(&mut pass, &self.scene_bind_group);
            self.slots
                .draw(&mut pass, &self.scene_bind_group, gallery.resources());
        }
        context.submit(encoder);
        frame.present();
        Ok(())
    }

    /// Release the overlay's resources.
    pub fn teardown(&mut self, gallery: &mut Gallery<GpuSlotResources>) {
        self.overlay.teardown(gallery.resources_mut());
    }
}
