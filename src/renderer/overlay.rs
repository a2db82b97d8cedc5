//! Full-size item viewer drawn as an unlit quad in front of the camera.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Mat4, Vec3};

use super::slot_pass::OverlayDraw;
use crate::camera::Camera;
use crate::carousel::{
    GeometryHandle, MaterialHandle, SlotResources, TextureHandle,
};
use crate::gallery::{AssetRef, ItemViewer};

/// Share of the view the shown image may cover.
const FILL: f32 = 0.9;
/// Distance from the eye at which the overlay quad is placed.
const DEPTH: f32 = 1.0;
const BACKDROP: [u8; 4] = [40, 40, 48, 255];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Request {
    #[default]
    None,
    Show(AssetRef),
    Hide,
}

/// [`ItemViewer`] handed to the gallery. It only records what the gallery
/// asked for; [`ViewerOverlay::sync`] applies it on the render side.
#[derive(Debug, Clone, Default)]
pub struct OverlayViewer {
    request: Rc<RefCell<Request>>,
}

impl OverlayViewer {
    fn take(&self) -> Request {
        std::mem::take(&mut *self.request.borrow_mut())
    }
}

impl ItemViewer for OverlayViewer {
    fn show(&mut self, asset: &AssetRef) {
        *self.request.borrow_mut() = Request::Show(asset.clone());
    }

    fn hide(&mut self) {
        *self.request.borrow_mut() = Request::Hide;
    }
}

struct Shown {
    texture: TextureHandle,
    material: MaterialHandle,
    size: (u32, u32),
}

/// Render-side state of the item viewer.
#[derive(Default)]
pub struct ViewerOverlay {
    viewer: OverlayViewer,
    geometry: Option<GeometryHandle>,
    shown: Option<Shown>,
}

impl ViewerOverlay {
    /// Create a hidden overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The viewer to attach to the gallery.
    #[must_use]
    pub fn viewer(&self) -> OverlayViewer {
        self.viewer.clone()
    }

    /// Whether an item is being shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    /// Apply the latest show/hide request, allocating through `resources`.
    /// `texture_size` reports the pixel size of a loaded texture.
    pub fn sync<R: SlotResources>(
        &mut self,
        resources: &mut R,
        texture_size: impl Fn(&R, MaterialHandle) -> Option<(u32, u32)>,
    ) {
        match self.viewer.take() {
            Request::None => {}
            Request::Hide => self.release(resources),
            Request::Show(asset) => {
                self.load_shown(resources, &asset, texture_size);
            }
        }
    }

    fn load_shown<R: SlotResources>(
        &mut self,
        resources: &mut R,
        asset: &AssetRef,
        texture_size: impl Fn(&R, MaterialHandle) -> Option<(u32, u32)>,
    ) {
        self.release(resources);
        let texture = resources.load_texture(asset).unwrap_or_else(|e| {
            log::warn!("viewer shows a blank backdrop: {e}");
            resources.solid_texture(BACKDROP)
        });
        let material = resources.create_material(texture);
        let size = texture_size(&*resources, material).unwrap_or((1, 1));
        if self.geometry.is_none() {
            self.geometry = Some(resources.create_geometry(1.0, 1.0));
        }
        self.shown = Some(Shown {
            texture,
            material,
            size,
        });
    }

    /// Drop the shown item and the overlay quad.
    pub fn release<R: SlotResources>(&mut self, resources: &mut R) {
        if let Some(shown) = self.shown.take() {
            resources.release_material(shown.material);
            resources.release_texture(shown.texture);
        }
    }

    /// Release everything, including the quad geometry.
    pub fn teardown<R: SlotResources>(&mut self, resources: &mut R) {
        self.release(resources);
        if let Some(geometry) = self.geometry.take() {
            resources.release_geometry(geometry);
        }
    }

    /// Draw call for the current frame, if an item is shown.
    #[must_use]
    pub fn draw(&self, camera: &Camera) -> Option<OverlayDraw> {
        let shown = self.shown.as_ref()?;
        Some(OverlayDraw {
            geometry: self.geometry?,
            material: shown.material,
            model: overlay_transform(camera, shown.size),
        })
    }
}

/// Transform of a unit quad showing an image of `size` pixels as large as
/// fits in the view, centered, facing the camera.
#[must_use]
pub fn overlay_transform(camera: &Camera, size: (u32, u32)) -> Mat4 {
    let view_h = 2.0 * DEPTH * (camera.fovy.to_radians() * 0.5).tan() * FILL;
    let view_w = view_h * camera.aspect;
    let image_aspect = size.0.max(1) as f32 / size.1.max(1) as f32;

    let (mut w, mut h) = (view_h * image_aspect, view_h);
    if w > view_w {
        w = view_w;
        h = w / image_aspect;
    }
    camera.build_view().inverse()
        * Mat4::from_translation(Vec3::new(0.0, 0.0, -DEPTH))
        * Mat4::from_scale(Vec3::new(w, h, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::resources::testing::CountingResources;
    use crate::options::CameraOptions;

    fn camera() -> Camera {
        Camera::from_options(&CameraOptions::default(), 16.0 / 9.0)
    }

    fn fits_on_screen(camera: &Camera, model: Mat4) -> bool {
        [(-0.5, -0.5), (0.5, 0.5), (-0.5, 0.5), (0.5, -0.5)]
            .iter()
            .all(|&(x, y)| {
                let ndc = camera
                    .project(model.transform_point3(Vec3::new(x, y, 0.0)))
                    .unwrap_or(Vec3::splat(9.0));
                ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0
            })
    }

    #[test]
    fn wide_and_tall_images_fit_the_view() {
        let cam = camera();
        for size in [(4000, 1000), (1000, 4000), (1, 1)] {
            assert!(fits_on_screen(&cam, overlay_transform(&cam, size)));
        }
    }

    #[test]
    fn overlay_keeps_image_aspect() {
        let cam = camera();
        let m = overlay_transform(&cam, (300, 200));
        let w = m.transform_vector3(Vec3::X).length();
        let h = m.transform_vector3(Vec3::Y).length();
        assert!((w / h - 1.5).abs() < 1e-4);
    }

    #[test]
    fn show_and_hide_round_trip_resources() {
        let mut res = CountingResources::failing_on(&["missing.png"]);
        let mut overlay = ViewerOverlay::new();
        let mut viewer = overlay.viewer();
        let size =
            |_: &CountingResources, _: MaterialHandle| Some((2_u32, 1_u32));

        viewer.show(&AssetRef::new("a.png"));
        overlay.sync(&mut res, size);
        assert!(overlay.is_visible());
        assert!(overlay.draw(&camera()).is_some());
        let with_one = res.live_total();

        viewer.show(&AssetRef::new("missing.png"));
        overlay.sync(&mut res, size);
        assert_eq!(res.live_total(), with_one);

        viewer.hide();
        overlay.sync(&mut res, size);
        assert!(!overlay.is_visible());
        assert!(overlay.draw(&camera()).is_none());
        overlay.teardown(&mut res);
        assert_eq!(res.live_total(), 0);
    }
}
