//! Screen-space selection: casts a ray from the camera through a pointer
//! position and resolves the nearest slot it crosses to its source item.

use glam::{Mat4, Vec2, Vec3};

use crate::camera::Camera;
use crate::carousel::{CarouselBuilder, SlotId};
use crate::gallery::ContainerRect;

/// Half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from the camera through a point in normalized device coordinates.
    #[must_use]
    pub fn from_ndc(camera: &Camera, ndc: Vec2) -> Self {
        let near = camera.unproject(ndc.extend(0.0));
        let far = camera.unproject(ndc.extend(1.0));
        Self {
            origin: near,
            direction: (far - near).normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to an axis-aligned `width × height` quad
    /// centered on the origin of `transform`'s local XY plane, if the ray
    /// crosses it in front of the origin.
    #[must_use]
    pub fn intersect_quad(
        &self,
        transform: Mat4,
        width: f32,
        height: f32,
    ) -> Option<f32> {
        let to_local = transform.inverse();
        let origin = to_local.transform_point3(self.origin);
        let direction = to_local.transform_vector3(self.direction);
        if direction.z.abs() < 1e-6 {
            return None;
        }
        // Affine maps keep the ray parameter, so `t` is a world distance.
        let t = -origin.z / direction.z;
        if t <= 0.0 {
            return None;
        }
        let hit = origin + direction * t;
        (hit.x.abs() <= width * 0.5 && hit.y.abs() <= height * 0.5)
            .then_some(t)
    }
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Slot the ray hit first.
    pub slot: SlotId,
    /// Index of the slot's item in the gallery's source list.
    pub item_index: usize,
    /// Distance from the camera's near plane along the ray.
    pub distance: f32,
}

/// Resolves pointer positions to items on the ring.
#[derive(Debug, Clone, Default)]
pub struct PickController {
    last_hit: Option<PickHit>,
}

impl PickController {
    /// Create a controller with no pick history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent successful pick.
    #[must_use]
    pub fn last_hit(&self) -> Option<PickHit> {
        self.last_hit
    }

    /// Cast from `camera` through pixel `(x, y)` of `rect` against every
    /// slot of `carousel`, returning the nearest hit. Misses are `None`.
    pub fn pick(
        &mut self,
        rect: &ContainerRect,
        x: f32,
        y: f32,
        camera: &Camera,
        carousel: &CarouselBuilder,
    ) -> Option<PickHit> {
        let ndc = rect.to_ndc(x, y)?;
        let ray = Ray::from_ndc(camera, ndc);
        let (width, height) = carousel.slot_size();

        let nearest = carousel
            .slots()
            .iter()
            .filter_map(|slot| {
                ray.intersect_quad(slot.world_transform(), width, height)
                    .map(|t| (slot.id, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let hit = nearest.and_then(|(slot, distance)| {
            carousel.item_index(slot).map(|item_index| PickHit {
                slot,
                item_index,
                distance,
            })
        });
        match hit {
            Some(h) => {
                log::debug!("pick ({x}, {y}) hit item {}", h.item_index);
                self.last_hit = Some(h);
            }
            None => log::debug!("pick ({x}, {y}) missed"),
        }
        hit
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;
    use crate::carousel::resources::testing::CountingResources;
    use crate::gallery::GalleryItem;
    use crate::options::{CameraOptions, CarouselOptions};

    fn camera(rect: &ContainerRect) -> Camera {
        Camera::from_options(&CameraOptions::default(), rect.aspect())
    }

    fn screen_of(
        camera: &Camera,
        rect: &ContainerRect,
        world: Vec3,
    ) -> (f32, f32) {
        rect.from_ndc(camera.project(world).unwrap().truncate())
    }

    #[test]
    fn ray_hits_quad_facing_it() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::NEG_Z,
        };
        let quad = Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0));
        let t = ray.intersect_quad(quad, 2.0, 1.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5);
        assert!((ray.at(t).z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_outside_extent_and_behind() {
        let ray = Ray {
            origin: Vec3::new(1.5, 0.0, 10.0),
            direction: Vec3::NEG_Z,
        };
        assert!(ray.intersect_quad(Mat4::IDENTITY, 2.0, 1.0).is_none());
        let behind = Mat4::from_translation(Vec3::new(1.5, 0.0, 20.0));
        assert!(ray.intersect_quad(behind, 2.0, 1.0).is_none());
    }

    #[test]
    fn center_ray_points_into_screen() {
        let rect = ContainerRect::sized(800.0, 600.0);
        let ray = Ray::from_ndc(&camera(&rect), Vec2::ZERO);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn picks_front_slot_over_the_one_behind() {
        let items = vec![
            GalleryItem::new("a", "A", "x"),
            GalleryItem::new("c", "C", "x"),
        ];
        let mut res = CountingResources::default();
        let mut carousel = CarouselBuilder::new(&CarouselOptions::default());
        let _ = carousel.build(&items, &[0, 1], &mut res);

        let rect = ContainerRect::sized(800.0, 600.0);
        let cam = camera(&rect);
        let mut picker = PickController::new();
        let (x, y) = screen_of(&cam, &rect, carousel.slots()[0].position);
        let hit = picker.pick(&rect, x, y, &cam, &carousel).unwrap();
        assert_eq!(hit.item_index, 0);
        assert_eq!(picker.last_hit(), Some(hit));

        // Half a turn brings the second slot to the front.
        carousel.update_transforms(Mat4::from_rotation_y(PI));
        let hit = picker.pick(&rect, x, y, &cam, &carousel).unwrap();
        assert_eq!(hit.item_index, 1);
    }

    #[test]
    fn empty_space_is_a_miss() {
        let items = vec![GalleryItem::new("a", "A", "x")];
        let mut res = CountingResources::default();
        let mut carousel = CarouselBuilder::new(&CarouselOptions::default());
        let _ = carousel.build(&items, &[0], &mut res);
        let rect = ContainerRect::sized(800.0, 600.0);
        let mut picker = PickController::new();
        assert!(picker
            .pick(&rect, 2.0, 2.0, &camera(&rect), &carousel)
            .is_none());
        assert!(picker.last_hit().is_none());
    }
}
