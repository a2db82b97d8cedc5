use serde::{Deserialize, Serialize};

use crate::gallery::{Direction, GalleryCommand};

/// Gallery actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// navigate_next = "ArrowRight"
/// toggle_pause = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Rotate one slot back.
    NavigatePrevious,
    /// Rotate one slot forward.
    NavigateNext,
    /// Pause or resume auto-rotation.
    TogglePause,
    /// Toggle fullscreen of the gallery container.
    ToggleFullscreen,
    /// Cycle the auto-rotate speed preset.
    CycleSpeed,
    /// Toggle the mute flag.
    ToggleMute,
    /// Close the item viewer.
    CloseViewer,
}

impl KeyAction {
    /// The command this action issues.
    #[must_use]
    pub fn to_command(self) -> GalleryCommand {
        match self {
            Self::NavigatePrevious => GalleryCommand::Navigate {
                direction: Direction::Previous,
            },
            Self::NavigateNext => GalleryCommand::Navigate {
                direction: Direction::Next,
            },
            Self::TogglePause => GalleryCommand::TogglePause,
            Self::ToggleFullscreen => GalleryCommand::ToggleFullscreen,
            Self::CycleSpeed => GalleryCommand::CycleSpeed,
            Self::ToggleMute => GalleryCommand::ToggleMute,
            Self::CloseViewer => GalleryCommand::CloseViewer,
        }
    }

    /// Whether the host should suppress the key's default behavior
    /// (e.g. page scroll on space).
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::TogglePause)
    }
}

/// Outcome of a bound key press.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyResponse {
    /// Command to execute.
    pub command: GalleryCommand,
    /// Whether the host should suppress the key's default behavior.
    pub prevent_default: bool,
}
