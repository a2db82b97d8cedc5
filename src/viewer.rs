//! Standalone gallery window backed by winit.
//!
//! Keyboard-only host: the bound keys drive navigation, pause, speed,
//! fullscreen and mute; `Digit0` selects every item and `Digit1`..`Digit9`
//! select the manifest's categories in first-appearance order.
//!
//! ```no_run
//! # use orbis::Viewer;
//! Viewer::builder()
//!     .with_manifest("gallery/manifest.toml")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{path::PathBuf, sync::Arc};

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowId},
};

use crate::{
    error::GalleryError,
    gallery::{
        ControlSet, FullscreenHost, GalleryBuilder, GalleryItem, Manifest,
    },
    gpu::FileDecoder,
    input::MouseButton,
    options::Options,
    GalleryEngine, InputEvent,
};

/// Largest texture edge the file decoder produces. Matches the downlevel
/// wgpu limit so every adapter accepts the upload.
const MAX_TEXTURE_EDGE: u32 = 2048;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    manifest: Option<PathBuf>,
    items: Vec<GalleryItem>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            manifest: None,
            items: Vec::new(),
            options: None,
            title: "Orbis".into(),
        }
    }

    /// Load items from a TOML manifest when the window opens.
    #[must_use]
    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest = Some(path.into());
        self
    }

    /// Show these items (appended after any manifest items).
    #[must_use]
    pub fn with_items(mut self, items: Vec<GalleryItem>) -> Self {
        self.items = items;
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            manifest: self.manifest,
            items: self.items,
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays a gallery.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    manifest: Option<PathBuf>,
    items: Vec<GalleryItem>,
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError`] if the manifest cannot be loaded or the
    /// event loop fails.
    pub fn run(self) -> Result<(), GalleryError> {
        let mut manifest = match &self.manifest {
            Some(path) => Manifest::load(path)?,
            None => Manifest::default(),
        };
        manifest.items.extend(self.items);
        let categories =
            manifest.categories().into_iter().map(str::to_owned).collect();

        let event_loop = EventLoop::new()
            .map_err(|e| GalleryError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            categories,
            items: manifest.items,
            options: self.options,
            title: self.title,
            shown_title: String::new(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| GalleryError::Viewer(e.to_string()))
    }
}

/// Filter tag bound to a digit key, if any.
fn digit_filter(key: &str, categories: &[String]) -> Option<String> {
    let digit = key.strip_prefix("Digit")?.parse::<usize>().ok()?;
    if digit == 0 {
        return Some(crate::filter::ALL_CATEGORIES.to_owned());
    }
    categories.get(digit - 1).cloned()
}

/// Title with the front item's label and its 1-based position.
fn window_title(
    prefix: &str,
    label: Option<&str>,
    progress: Option<(usize, usize)>,
) -> String {
    match (label, progress) {
        (Some(label), Some((index, total))) => {
            format!("{prefix} | {label} ({}/{total})", index + 1)
        }
        _ => format!("{prefix} | empty"),
    }
}

// ── Fullscreen ───────────────────────────────────────────────────────────

/// Borderless fullscreen on the window's current monitor.
struct WindowFullscreen {
    window: Arc<Window>,
}

impl FullscreenHost for WindowFullscreen {
    fn toggle_fullscreen(&mut self) -> Result<(), GalleryError> {
        if self.window.fullscreen().is_some() {
            self.window.set_fullscreen(None);
            return Ok(());
        }
        if self.window.current_monitor().is_none() {
            return Err(GalleryError::Fullscreen(
                "no monitor available".into(),
            ));
        }
        self.window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        Ok(())
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<GalleryEngine>,
    items: Vec<GalleryItem>,
    categories: Vec<String>,
    options: Options,
    title: String,
    shown_title: String,
}

impl ViewerApp {
    fn refresh_title(&mut self) {
        let (Some(window), Some(engine)) = (&self.window, &self.engine) else {
            return;
        };
        let gallery = engine.gallery();
        let title = window_title(
            &self.title,
            gallery.current_label(),
            gallery.progress(),
        );
        if title != self.shown_title {
            window.set_title(&title);
            self.shown_title = title;
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let size = (inner.width.max(1), inner.height.max(1));

        let mut controls = ControlSet::all();
        for category in &self.categories {
            controls = controls.with_filter(category);
        }
        let builder = GalleryBuilder::new()
            .with_items(std::mem::take(&mut self.items))
            .with_controls(controls)
            .with_fullscreen(WindowFullscreen {
                window: window.clone(),
            });

        let engine = match pollster::block_on(GalleryEngine::new(
            window.clone(),
            size,
            builder,
            self.options.clone(),
            Box::new(FileDecoder::new(MAX_TEXTURE_EDGE)),
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
        self.refresh_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            if let Some(engine) = &mut self.engine {
                engine.teardown();
            }
            event_loop.exit();
            return;
        }

        let Some(engine) = &mut self.engine else {
            return;
        };
        let now = Instant::now();

        match event {
            WindowEvent::Resized(size) => {
                engine.resize(size.width, size.height, now);
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = engine.render(now) {
                    log::error!("render error: {e:?}");
                }
                self.refresh_title();
            }

            WindowEvent::MouseInput { button, state, .. } => {
                engine.handle_input(
                    InputEvent::MouseButton {
                        button: MouseButton::from(button),
                        pressed: state == ElementState::Pressed,
                    },
                    now,
                );
            }

            WindowEvent::CursorMoved { position, .. } => {
                engine.handle_input(
                    InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    },
                    now,
                );
            }

            WindowEvent::Touch(touch) => {
                engine.handle_input(
                    InputEvent::Touch {
                        id: touch.id,
                        phase: touch.phase.into(),
                        x: touch.location.x as f32,
                        y: touch.location.y as f32,
                    },
                    now,
                );
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key = format!("{code:?}");
                if let Some(category) = digit_filter(&key, &self.categories) {
                    engine.handle_input(
                        InputEvent::FilterSelected { category },
                        now,
                    );
                } else if engine.handle_key(&key, now).is_none() {
                    log::trace!("unbound key {key}");
                }
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(engine)) = (&self.window, &self.engine) else {
            return;
        };
        let next = engine.next_frame_at();
        if Instant::now() >= next {
            window.request_redraw();
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(next));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_map_to_categories() {
        let manifest = Manifest {
            items: vec![
                GalleryItem::new("a.png", "A", "sea"),
                GalleryItem::new("b.png", "B", "city"),
                GalleryItem::new("c.png", "C", "sea"),
            ],
        };
        let categories: Vec<String> =
            manifest.categories().into_iter().map(str::to_owned).collect();
        assert_eq!(categories, vec!["sea", "city"]);
        let all = digit_filter("Digit0", &categories);
        assert_eq!(all.as_deref(), Some("all"));
        let city = digit_filter("Digit2", &categories);
        assert_eq!(city.as_deref(), Some("city"));
        assert_eq!(digit_filter("Digit3", &categories), None);
        assert_eq!(digit_filter("KeyA", &categories), None);
    }

    #[test]
    fn title_counts_from_one() {
        assert_eq!(
            window_title("Orbis", Some("Harbor"), Some((0, 4))),
            "Orbis | Harbor (1/4)"
        );
        assert_eq!(
            window_title("Orbis", Some("Forest"), Some((3, 4))),
            "Orbis | Forest (4/4)"
        );
        assert_eq!(window_title("Orbis", None, None), "Orbis | empty");
    }
}
