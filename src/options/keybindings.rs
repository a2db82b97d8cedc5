use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Keyboard bindings: one key code string per gallery action.
///
/// Key strings are winit `KeyCode` debug names (`"ArrowLeft"`, `"KeyF"`,
/// `"Space"`). A key drives at most one action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Action → key string.
    pub bindings: FxHashMap<KeyAction, String>,
    #[serde(skip)]
    by_key: FxHashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let mut opts = Self {
            bindings: [
                (KeyAction::NavigatePrevious, "ArrowLeft"),
                (KeyAction::NavigateNext, "ArrowRight"),
                (KeyAction::TogglePause, "Space"),
                (KeyAction::ToggleFullscreen, "KeyF"),
                (KeyAction::CycleSpeed, "KeyS"),
                (KeyAction::ToggleMute, "KeyM"),
                (KeyAction::CloseViewer, "Escape"),
            ]
            .into_iter()
            .map(|(action, key)| (action, key.to_owned()))
            .collect(),
            by_key: FxHashMap::default(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the key → action index after `bindings` changed.
    pub fn rebuild_reverse_map(&mut self) {
        self.by_key = self
            .bindings
            .iter()
            .map(|(action, key)| (key.clone(), *action))
            .collect();
    }

    /// Action bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.by_key.get(key).copied()
    }

    /// Key string bound to an action.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }

    /// Bind `key` to `action`. Any other action holding `key` loses it.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings.retain(|other, bound| *other == action || *bound != key);
        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }

    /// Remove the binding for `action`.
    pub fn unbind(&mut self, action: KeyAction) {
        if self.bindings.remove(&action).is_some() {
            self.rebuild_reverse_map();
        }
    }
}
