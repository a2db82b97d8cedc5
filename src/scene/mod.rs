//! Everything the ring is drawn inside: camera, lighting rig, particle
//! backdrop and the viewport with its debounced resize handling.

mod lighting;
mod particles;
mod viewport;

use glam::Mat4;
pub use lighting::{LightingRig, LightingUniform};
pub use particles::ParticleField;
pub use viewport::{ResizeDebouncer, Viewport};
use web_time::Instant;

use crate::camera::{Camera, CameraUniform};
use crate::options::Options;

/// Owns the scene surrounding the carousel.
///
/// The manager is plain state. The GPU side reads it every frame through
/// [`camera_uniform`](Self::camera_uniform) and friends, so it never holds
/// device objects itself.
#[derive(Debug, Clone)]
pub struct SceneManager {
    camera: Camera,
    lighting: LightingRig,
    particles: ParticleField,
    viewport: Viewport,
    resize: ResizeDebouncer,
    clear_color: [f32; 4],
}

impl SceneManager {
    /// Build the scene for a drawable of `width × height` pixels.
    #[must_use]
    pub fn new(options: &Options, width: u32, height: u32) -> Self {
        let viewport = Viewport {
            width: width.max(1),
            height: height.max(1),
        };
        Self {
            camera: Camera::from_options(&options.camera, viewport.aspect()),
            lighting: LightingRig::from_options(&options.lighting),
            particles: ParticleField::new(&options.particles),
            viewport,
            resize: ResizeDebouncer::new(options.viewport.resize_debounce()),
            clear_color: options.viewport.clear_color,
        }
    }

    /// Scene camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Lighting rig.
    #[must_use]
    pub fn lighting(&self) -> &LightingRig {
        &self.lighting
    }

    /// Particle backdrop.
    #[must_use]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Current drawable size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Background clear color.
    #[must_use]
    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Apply a new drawable size at once. Zero-sized requests (minimized
    /// windows) are ignored. Returns whether anything changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let next = Viewport { width, height };
        if next == self.viewport {
            return false;
        }
        self.viewport = next;
        self.camera.aspect = next.aspect();
        log::debug!("viewport resized to {width}x{height}");
        true
    }

    /// Queue a resize behind the debounce window.
    pub fn request_resize(&mut self, width: u32, height: u32, now: Instant) {
        self.resize.request(width, height, now);
    }

    /// Apply the queued resize if its window has elapsed. Returns the new
    /// viewport when one was applied.
    pub fn poll_resize(&mut self, now: Instant) -> Option<Viewport> {
        let (width, height) = self.resize.poll(now)?;
        self.resize(width, height).then_some(self.viewport)
    }

    /// Per-frame backdrop step.
    pub fn advance_particles(&mut self) {
        self.particles.advance();
    }

    /// Transform of the group holding every slot for a ring rotation.
    ///
    /// Slot angles grow clockwise, so turning the group by `rotation`
    /// brings slots with larger angles to the front and a growing rotation
    /// moves the front slot toward +X.
    #[must_use]
    pub fn carousel_group(rotation: f32) -> Mat4 {
        Mat4::from_rotation_y(rotation)
    }

    /// Camera uniform for the current frame.
    #[must_use]
    pub fn camera_uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&self.camera);
        uniform
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use web_time::Duration;

    use super::*;

    fn scene() -> SceneManager {
        let mut options = Options::default();
        options.particles.count = 10;
        SceneManager::new(&options, 800, 600)
    }

    #[test]
    fn resize_updates_camera_aspect() {
        let mut s = scene();
        assert!(s.resize(1000, 500));
        assert_eq!(s.camera().aspect, 2.0);
        assert!(!s.resize(1000, 500));
    }

    #[test]
    fn zero_size_is_ignored() {
        let mut s = scene();
        assert!(!s.resize(0, 300));
        assert_eq!(s.viewport().width, 800);
    }

    #[test]
    fn debounced_resize_applies_last_size() {
        let t0 = Instant::now();
        let mut s = scene();
        s.request_resize(400, 400, t0);
        s.request_resize(1200, 600, t0 + Duration::from_millis(50));
        assert!(s.poll_resize(t0 + Duration::from_millis(100)).is_none());
        let applied = s.poll_resize(t0 + Duration::from_millis(400)).unwrap();
        assert_eq!(applied.width, 1200);
        assert_eq!(s.camera().aspect, 2.0);
    }

    #[test]
    fn group_brings_larger_angles_forward() {
        // Slot at angle π/2 sits on -X; rotating by π/2 moves it to +Z.
        let group = SceneManager::carousel_group(std::f32::consts::FRAC_PI_2);
        let p = group.transform_point3(Vec3::new(-6.0, 0.0, 0.0));
        assert!((p - Vec3::new(0.0, 0.0, 6.0)).length() < 1e-5);
        let front = group.transform_point3(Vec3::new(0.0, 0.0, 6.0));
        assert!((front - Vec3::new(6.0, 0.0, 0.0)).length() < 1e-5);
    }
}
