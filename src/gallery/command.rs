//! The gallery's complete interactive vocabulary.
//!
//! Every user intent, whether it came from a drag, a key press, an
//! on-screen control or a direct API call, is a `GalleryCommand`. Hosts
//! pass commands to [`Gallery::execute`](super::Gallery::execute), the only
//! place gallery state is mutated.

use crate::filter::CategoryFilter;

// ── Command payload types ────────────────────────────────────────────────

/// Direction of a one-slot navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Rotate one slot back.
    Previous,
    /// Rotate one slot forward.
    Next,
}

impl Direction {
    /// `-1` for [`Previous`](Self::Previous), `+1` for [`Next`](Self::Next).
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

// ── Commands ─────────────────────────────────────────────────────────────

/// A discrete or parameterized operation the gallery can perform.
///
/// ```ignore
/// let next = GalleryCommand::Navigate { direction: Direction::Next };
/// gallery.execute(next, now);
/// gallery.execute(GalleryCommand::DragBy { radians: 0.1 }, now);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryCommand {
    // ── Rotation ────────────────────────────────────────────────────
    /// Pointer or touch went down on the gallery.
    BeginDrag,

    /// Fold drag travel into the rotation target.
    DragBy {
        /// Rotation delta in radians.
        radians: f32,
    },

    /// Pointer or touch released; auto-rotate resumes after settling.
    EndDrag,

    /// Step the target one slot around the ring.
    Navigate {
        /// Step direction.
        direction: Direction,
    },

    /// Pause or resume auto-rotation.
    TogglePause,

    /// Advance to the next auto-rotate speed preset.
    CycleSpeed,

    // ── Host toggles ────────────────────────────────────────────────
    /// Toggle fullscreen of the gallery container.
    ToggleFullscreen,

    /// Flip the mute flag.
    ToggleMute,

    // ── Content ─────────────────────────────────────────────────────
    /// Switch the category filter and rebuild the ring.
    ApplyFilter {
        /// New selector.
        filter: CategoryFilter,
    },

    /// Resolve a selection at container-relative pixel coordinates and open
    /// the hit item in the viewer.
    Pick {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },

    /// Hide the item viewer.
    CloseViewer,

    /// Close the auxiliary menu if the press landed outside it.
    DismissMenu {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_signs_cancel() {
        assert_eq!(Direction::Previous.sign() + Direction::Next.sign(), 0);
    }
}
