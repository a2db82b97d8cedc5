use web_time::{Duration, Instant};

/// Drawable size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Collapses a burst of resize events into the last one.
///
/// Each [`request`](Self::request) restarts the quiet window; the stored
/// size is released by [`poll`](Self::poll) once no further request arrived
/// for the whole window.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    window: Duration,
    pending: Option<(u32, u32, Instant)>,
}

impl ResizeDebouncer {
    /// Create a debouncer with the given quiet window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a resize, superseding any pending one.
    pub fn request(&mut self, width: u32, height: u32, now: Instant) {
        self.pending = Some((width, height, now));
    }

    /// Whether a resize is waiting out the window.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending size once the window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<(u32, u32)> {
        let (width, height, at) = self.pending?;
        if now.saturating_duration_since(at) < self.window {
            return None;
        }
        self.pending = None;
        Some((width, height))
    }
}
