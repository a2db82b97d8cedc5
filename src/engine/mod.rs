//! wgpu-backed gallery engine: owns the render context, the gallery with
//! its GPU slot resources, and the frame renderer.

use web_time::Instant;

use crate::error::GalleryError;
use crate::gallery::{ContainerRect, Gallery, GalleryBuilder, GalleryCommand};
use crate::gpu::{GpuSlotResources, ImageDecoder, RenderContext};
use crate::input::{InputEvent, KeyResponse};
use crate::options::Options;
use crate::renderer::{FrameRenderer, ViewerOverlay};
use crate::util::FrameTiming;

/// Renders a [`Gallery`] into a window surface.
///
/// ```ignore
/// let mut engine = pollster::block_on(GalleryEngine::new(
///     window.clone(),
///     (width, height),
///     GalleryBuilder::new().with_items(items),
///     options,
///     Box::new(FileDecoder::new(4096)),
/// ))?;
/// // every redraw:
/// engine.render(Instant::now())?;
/// ```
pub struct GalleryEngine {
    context: RenderContext,
    gallery: Gallery<GpuSlotResources>,
    renderer: FrameRenderer,
    frame_timing: FrameTiming,
}

impl GalleryEngine {
    /// Initialize the GPU, build the gallery sized to the surface, and
    /// attach the overlay item viewer.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Gpu`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        builder: GalleryBuilder,
        options: Options,
        decoder: Box<dyn ImageDecoder>,
    ) -> Result<Self, GalleryError> {
        let context = RenderContext::new(window, size).await?;
        let resources =
            GpuSlotResources::new(&context.device, &context.queue, decoder);

        let (width, height) = context.size();
        let target_fps = options.viewport.target_fps;
        let overlay = ViewerOverlay::new();
        let gallery = builder
            .with_options(options)
            .with_container(ContainerRect::sized(width as f32, height as f32))
            .with_viewer(overlay.viewer())
            .build(resources)?;
        let renderer = FrameRenderer::new(
            &context,
            gallery.resources(),
            gallery.scene(),
            overlay,
        );
        log::info!(
            "gallery engine ready: {width}x{height}, {} items",
            gallery.items().len()
        );

        Ok(Self {
            context,
            gallery,
            renderer,
            frame_timing: FrameTiming::new(target_fps, Instant::now()),
        })
    }

    /// The gallery being rendered.
    #[must_use]
    pub fn gallery(&self) -> &Gallery<GpuSlotResources> {
        &self.gallery
    }

    /// Apply a command to the gallery.
    pub fn execute(&mut self, command: GalleryCommand, now: Instant) {
        self.gallery.execute(command, now);
    }

    /// Forward a raw input event.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        self.gallery.handle_input(event, now);
    }

    /// Forward a key press; see [`Gallery::handle_key`].
    pub fn handle_key(
        &mut self,
        key: &str,
        now: Instant,
    ) -> Option<KeyResponse> {
        self.gallery.handle_key(key, now)
    }

    /// Queue a window resize (debounced by the gallery).
    pub fn resize(&mut self, width: u32, height: u32, now: Instant) {
        self.gallery.resize(width, height, now);
    }

    /// When the next frame is due under the frame limit.
    #[must_use]
    pub fn next_frame_at(&self) -> Instant {
        self.frame_timing.next_frame_at()
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Advance the gallery one frame and draw it, if the frame limit allows.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] for unrecoverable surface failures
    /// (out of memory, timeout).
    pub fn render(&mut self, now: Instant) -> Result<(), wgpu::SurfaceError> {
        if !self.frame_timing.should_render(now) {
            return Ok(());
        }

        self.gallery.update(now);
        let viewport = self.gallery.scene().viewport();
        if self.context.size() != (viewport.width, viewport.height) {
            self.context.resize(viewport.width, viewport.height);
        }

        self.renderer.prepare(&self.context, &mut self.gallery);
        match self.renderer.render(&self.context, &self.gallery) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost, reconfiguring");
                self.context.reconfigure();
            }
            Err(e) => return Err(e),
        }
        self.frame_timing.end_frame(now);
        Ok(())
    }

    /// Release every GPU resource the gallery and overlay hold.
    pub fn teardown(&mut self) {
        self.renderer.teardown(&mut self.gallery);
        self.gallery.teardown();
        let live = self.gallery.resources().live_resources();
        log::debug!("teardown complete, live resources: {live:?}");
    }
}
