use glam::Vec2;

/// Bounding rectangle of the element hosting the gallery, in physical
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl ContainerRect {
    /// Rectangle anchored at the origin.
    #[must_use]
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Width over height, `1.0` for a degenerate rectangle.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Convert a pixel position to normalized device coordinates
    /// (`x` right, `y` up, both in `[-1, 1]` inside the rectangle).
    /// Returns `None` for a zero-sized rectangle.
    #[must_use]
    pub fn to_ndc(&self, x: f32, y: f32) -> Option<Vec2> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            (x - self.x) / self.width * 2.0 - 1.0,
            -((y - self.y) / self.height) * 2.0 + 1.0,
        ))
    }

    /// Inverse of [`to_ndc`](Self::to_ndc).
    #[must_use]
    pub fn from_ndc(&self, ndc: Vec2) -> (f32, f32) {
        (
            self.x + (ndc.x + 1.0) * 0.5 * self.width,
            self.y + (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}
