//! Input handling: event types, key actions, the multi-click state machine,
//! and the input processor that converts raw window events into gallery
//! commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Multi-click state machine.
pub(crate) mod mouse;
/// Converts raw events into gallery commands.
pub mod processor;

pub use event::{Control, InputEvent, MouseButton, TouchPhase};
pub use keyboard::{KeyAction, KeyResponse};
pub use processor::InputProcessor;
