use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::options::ParticleOptions;

/// Slowly spinning cloud of points behind the ring.
#[derive(Debug, Clone)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    color: [f32; 4],
    spin: [f32; 2],
    angle_x: f32,
    angle_y: f32,
}

impl ParticleField {
    /// Scatter `options.count` points uniformly in a cube of side
    /// `options.extent` centered on the origin.
    #[must_use]
    pub fn new(options: &ParticleOptions) -> Self {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let half = options.extent.max(0.0) * 0.5;
        let positions = (0..options.count)
            .map(|_| {
                if half > 0.0 {
                    Vec3::new(
                        rng.random_range(-half..half),
                        rng.random_range(-half..half),
                        rng.random_range(-half..half),
                    )
                } else {
                    Vec3::ZERO
                }
            })
            .collect();
        Self {
            positions,
            color: options.color,
            spin: options.spin,
            angle_x: 0.0,
            angle_y: 0.0,
        }
    }

    /// Point positions in field space.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Point color (linear RGBA).
    #[must_use]
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Accumulated `(x, y)` spin angles.
    #[must_use]
    pub fn angles(&self) -> (f32, f32) {
        (self.angle_x, self.angle_y)
    }

    /// Per-frame step.
    pub fn advance(&mut self) {
        self.angle_x += self.spin[0];
        self.angle_y += self.spin[1];
    }

    /// Field-to-world transform for the current spin.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.angle_y)
            * Mat4::from_rotation_x(self.angle_x)
    }
}
