/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`GalleryCommand`](crate::gallery::GalleryCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// for cmd in processor.handle_event(InputEvent::CursorMoved { x, y }, now) {
///     gallery.execute(cmd, now);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released at the last cursor position.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Touch contact update. Only the first active contact is followed.
    Touch {
        /// Platform contact identifier.
        id: u64,
        /// Contact lifecycle phase.
        phase: TouchPhase,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Native double-click or double-tap, for hosts that detect it.
    DoubleClick {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// An on-screen control was activated.
    Control(Control),
    /// A filter selector carrying `category` was activated.
    FilterSelected {
        /// Category tag of the selector (`"all"` for every item).
        category: String,
    },
    /// The item viewer's close control was activated.
    ViewerClose,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Touch contact lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Contact began.
    Started,
    /// Contact moved.
    Moved,
    /// Contact lifted.
    Ended,
    /// Contact was interrupted by the platform.
    Cancelled,
}

/// On-screen buttons a host may provide. Each is independently optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Previous-item button.
    Previous,
    /// Next-item button.
    Next,
    /// Pause toggle.
    Pause,
    /// Speed-cycle toggle.
    Speed,
    /// Fullscreen toggle.
    Fullscreen,
    /// Mute toggle.
    Mute,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Started,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}
