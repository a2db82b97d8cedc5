//! Host-provided collaborators. Every one of them is optional: a gallery
//! built without one simply skips the behavior it would have provided.

use rustc_hash::FxHashSet;

use super::item::AssetRef;
use crate::error::GalleryError;
use crate::filter::ALL_CATEGORIES;
use crate::input::Control;

/// Full-size display of a single item.
pub trait ItemViewer {
    /// Show the given asset full-size.
    fn show(&mut self, asset: &AssetRef);

    /// Hide the viewer.
    fn hide(&mut self);
}

/// Fullscreen capability of the element hosting the gallery.
pub trait FullscreenHost {
    /// Enter fullscreen if windowed, leave it otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Fullscreen`] when the platform refuses the
    /// request. The gallery logs the error and carries on.
    fn toggle_fullscreen(&mut self) -> Result<(), GalleryError>;
}

/// A pop-up menu living next to the gallery that closes on outside presses.
pub trait AuxMenu {
    /// Whether the menu is currently shown.
    fn is_open(&self) -> bool;

    /// Whether a container-relative point lies inside the menu.
    fn contains(&self, x: f32, y: f32) -> bool;

    /// Close the menu.
    fn close(&mut self);
}

/// Which on-screen controls and filter selectors the host attached.
///
/// Events from anything not in the set are dropped by the input processor,
/// which is how an absent button disables only its own behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlSet {
    controls: FxHashSet<Control>,
    filters: Vec<String>,
}

impl ControlSet {
    /// No controls and no filter selectors.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Every control plus the `"all"` selector.
    #[must_use]
    pub fn all() -> Self {
        Self::none()
            .with(Control::Previous)
            .with(Control::Next)
            .with(Control::Pause)
            .with(Control::Speed)
            .with(Control::Fullscreen)
            .with(Control::Mute)
            .with_filter(ALL_CATEGORIES)
    }

    /// Add a control.
    #[must_use]
    pub fn with(mut self, control: Control) -> Self {
        let _ = self.controls.insert(control);
        self
    }

    /// Add a filter selector carrying `category`.
    #[must_use]
    pub fn with_filter(mut self, category: &str) -> Self {
        if !self.has_filter(category) {
            self.filters.push(category.to_owned());
        }
        self
    }

    /// Whether `control` is attached.
    #[must_use]
    pub fn contains(&self, control: Control) -> bool {
        self.controls.contains(&control)
    }

    /// Whether a selector for `category` is attached.
    #[must_use]
    pub fn has_filter(&self, category: &str) -> bool {
        self.filters.iter().any(|f| f == category)
    }

    /// Attached selector tags, in attachment order.
    #[must_use]
    pub fn filters(&self) -> &[String] {
        &self.filters
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_attaches_every_control() {
        let set = ControlSet::all();
        assert!(set.contains(Control::Previous));
        assert!(set.contains(Control::Mute));
        assert!(set.has_filter("all"));
        assert!(!set.has_filter("x"));
    }

    #[test]
    fn none_attaches_nothing() {
        let set = ControlSet::none();
        assert!(!set.contains(Control::Pause));
        assert!(set.filters().is_empty());
    }

    #[test]
    fn filters_are_not_duplicated() {
        let set = ControlSet::none().with_filter("x").with_filter("x");
        assert_eq!(set.filters(), ["x".to_owned()]);
    }
}
