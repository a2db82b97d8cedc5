//! Converts raw platform events into gallery commands.
//!
//! The `InputProcessor` owns all transient input state (pointer position,
//! incremental drag origin, the followed touch contact, multi-click timing)
//! plus the key-binding map and the set of controls the host attached. It
//! is the only thing that sits between raw window events and
//! [`Gallery::execute`](crate::gallery::Gallery::execute).

use web_time::Instant;

use super::event::{Control, InputEvent, MouseButton, TouchPhase};
use super::keyboard::KeyResponse;
use super::mouse::{ClickResult, ClickTracker};
use crate::filter::CategoryFilter;
use crate::gallery::{ControlSet, Direction, GalleryCommand};
use crate::options::KeybindingOptions;

/// Converts raw window events into [`GalleryCommand`]s.
///
/// # Usage
///
/// ```ignore
/// for cmd in processor.handle_event(event, Instant::now()) {
///     gallery.execute(cmd, now);
/// }
/// if let Some(response) = processor.handle_key_press("ArrowRight") {
///     gallery.execute(response.command, now);
/// }
/// ```
pub struct InputProcessor {
    /// Last known pointer position in physical pixels.
    pointer: (f32, f32),
    /// Horizontal origin of the next drag delta, while a drag is active.
    drag_x: Option<f32>,
    /// Touch contact currently driving the drag.
    primary_touch: Option<u64>,
    /// Multi-click state machine.
    clicks: ClickTracker,
    /// Radians of rotation per pixel of drag.
    sensitivity: f32,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Controls and filter selectors the host attached.
    controls: ControlSet,
}

impl InputProcessor {
    /// Create a processor for the given attached controls.
    #[must_use]
    pub fn new(
        controls: ControlSet,
        key_bindings: KeybindingOptions,
        sensitivity: f32,
    ) -> Self {
        Self {
            pointer: (0.0, 0.0),
            drag_x: None,
            primary_touch: None,
            clicks: ClickTracker::new(),
            sensitivity,
            key_bindings,
            controls,
        }
    }

    /// Current pointer position in physical pixels.
    #[must_use]
    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    /// Whether a pointer or touch drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_x.is_some()
    }

    /// Controls and selectors wired to this processor.
    #[must_use]
    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the bound command, if any.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<KeyResponse> {
        self.key_bindings.lookup(key).map(|action| KeyResponse {
            command: action.to_command(),
            prevent_default: action.prevents_default(),
        })
    }

    /// Process a raw input event and return the resulting commands, in the
    /// order they must be executed.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Vec<GalleryCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.pointer_moved(x, y).into_iter().collect()
            }
            InputEvent::MouseButton { button, pressed } => {
                if button != MouseButton::Left {
                    return Vec::new();
                }
                let (x, y) = self.pointer;
                if pressed {
                    self.pointer_down(x, y)
                } else {
                    self.pointer_up(now)
                }
            }
            InputEvent::Touch { id, phase, x, y } => {
                self.touch(id, phase, x, y, now)
            }
            InputEvent::DoubleClick { x, y } => {
                vec![GalleryCommand::Pick { x, y }]
            }
            InputEvent::Control(control) => {
                self.control(control).into_iter().collect()
            }
            InputEvent::FilterSelected { category } => {
                self.filter_selected(&category).into_iter().collect()
            }
            InputEvent::ViewerClose => vec![GalleryCommand::CloseViewer],
        }
    }

    fn pointer_down(&mut self, x: f32, y: f32) -> Vec<GalleryCommand> {
        self.pointer = (x, y);
        self.drag_x = Some(x);
        self.clicks.handle_down((x, y));
        vec![
            GalleryCommand::DismissMenu { x, y },
            GalleryCommand::BeginDrag,
        ]
    }

    /// Incremental drag: each move contributes only the travel since the
    /// previous move.
    fn pointer_moved(&mut self, x: f32, y: f32) -> Option<GalleryCommand> {
        self.pointer = (x, y);
        let start = self.drag_x?;
        self.clicks.handle_move((x, y));
        self.drag_x = Some(x);
        let delta = x - start;
        (delta != 0.0).then(|| GalleryCommand::DragBy {
            radians: delta * self.sensitivity,
        })
    }

    fn pointer_up(&mut self, now: Instant) -> Vec<GalleryCommand> {
        if self.drag_x.take().is_none() {
            return Vec::new();
        }
        let (x, y) = self.pointer;
        let mut commands = vec![GalleryCommand::EndDrag];
        if self.clicks.handle_up((x, y), now) == ClickResult::DoubleClick {
            commands.push(GalleryCommand::Pick { x, y });
        }
        commands
    }

    fn touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        x: f32,
        y: f32,
        now: Instant,
    ) -> Vec<GalleryCommand> {
        match phase {
            TouchPhase::Started => {
                if self.primary_touch.is_some() {
                    return Vec::new();
                }
                self.primary_touch = Some(id);
                self.pointer_down(x, y)
            }
            _ if self.primary_touch != Some(id) => Vec::new(),
            TouchPhase::Moved => self.pointer_moved(x, y).into_iter().collect(),
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.primary_touch = None;
                self.pointer = (x, y);
                self.pointer_up(now)
            }
        }
    }

    fn control(&self, control: Control) -> Option<GalleryCommand> {
        if !self.controls.contains(control) {
            log::debug!("ignoring {control:?}: control not attached");
            return None;
        }
        Some(match control {
            Control::Previous => GalleryCommand::Navigate {
                direction: Direction::Previous,
            },
            Control::Next => GalleryCommand::Navigate {
                direction: Direction::Next,
            },
            Control::Pause => GalleryCommand::TogglePause,
            Control::Speed => GalleryCommand::CycleSpeed,
            Control::Fullscreen => GalleryCommand::ToggleFullscreen,
            Control::Mute => GalleryCommand::ToggleMute,
        })
    }

    fn filter_selected(&self, category: &str) -> Option<GalleryCommand> {
        if !self.controls.has_filter(category) {
            log::debug!("ignoring filter '{category}': selector not attached");
            return None;
        }
        Some(GalleryCommand::ApplyFilter {
            filter: CategoryFilter::parse(category),
        })
    }
}
