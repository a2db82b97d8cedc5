//! The gallery: construction, the command reducer and the frame update.
//!
//! A [`Gallery`] ties the headless parts together (filter, ring builder,
//! rotation state, scene, picking, input) around a [`SlotResources`]
//! backend. It never touches a window or a GPU device directly, so it runs
//! the same under the wgpu engine and in tests.

mod collaborators;
mod command;
mod container;
mod item;
mod manifest;

pub use crate::input::Control;
pub use collaborators::{AuxMenu, ControlSet, FullscreenHost, ItemViewer};
pub use command::{Direction, GalleryCommand};
pub use container::ContainerRect;
pub use item::{AssetRef, GalleryItem};
pub use manifest::Manifest;
use web_time::Instant;

use crate::carousel::{
    nearest_index, CarouselBuilder, SlotResources, VisualSlot,
};
use crate::error::GalleryError;
use crate::filter::{clamp_index, CategoryFilter, FilterEngine};
use crate::input::{InputEvent, InputProcessor, KeyResponse};
use crate::options::Options;
use crate::picking::{PickController, PickHit};
use crate::rotation::RotationState;
use crate::scene::SceneManager;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Gallery`].
///
/// Only the container is required; every collaborator is optional.
///
/// ```ignore
/// let gallery = GalleryBuilder::new()
///     .with_container(ContainerRect::sized(1280.0, 720.0))
///     .with_items(manifest.items)
///     .with_controls(ControlSet::all())
///     .build(resources)?;
/// ```
#[derive(Default)]
pub struct GalleryBuilder {
    container: Option<ContainerRect>,
    items: Vec<GalleryItem>,
    options: Options,
    controls: ControlSet,
    viewer: Option<Box<dyn ItemViewer>>,
    fullscreen: Option<Box<dyn FullscreenHost>>,
    menu: Option<Box<dyn AuxMenu>>,
}

impl GalleryBuilder {
    /// Start with no container, no items, default options and no controls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hosting container's bounding rectangle.
    #[must_use]
    pub fn with_container(mut self, container: ContainerRect) -> Self {
        self.container = Some(container);
        self
    }

    /// Set the ordered item list.
    #[must_use]
    pub fn with_items(mut self, items: Vec<GalleryItem>) -> Self {
        self.items = items;
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Declare which on-screen controls and filter selectors exist.
    #[must_use]
    pub fn with_controls(mut self, controls: ControlSet) -> Self {
        self.controls = controls;
        self
    }

    /// Attach the full-size item viewer.
    #[must_use]
    pub fn with_viewer(mut self, viewer: impl ItemViewer + 'static) -> Self {
        self.viewer = Some(Box::new(viewer));
        self
    }

    /// Attach the container's fullscreen capability.
    #[must_use]
    pub fn with_fullscreen(
        mut self,
        host: impl FullscreenHost + 'static,
    ) -> Self {
        self.fullscreen = Some(Box::new(host));
        self
    }

    /// Attach an auxiliary menu that closes on outside presses.
    #[must_use]
    pub fn with_menu(mut self, menu: impl AuxMenu + 'static) -> Self {
        self.menu = Some(Box::new(menu));
        self
    }

    /// Construct the gallery and build the initial ring with every item.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::MissingContainer`] when no container was
    /// given. Nothing is allocated from `resources` in that case.
    pub fn build<R: SlotResources>(
        self,
        resources: R,
    ) -> Result<Gallery<R>, GalleryError> {
        let container = self.container.ok_or(GalleryError::MissingContainer)?;
        let options = self.options;

        let scene = SceneManager::new(
            &options,
            container.width.max(1.0) as u32,
            container.height.max(1.0) as u32,
        );
        let input = InputProcessor::new(
            self.controls,
            options.keybindings.clone(),
            options.rotation.drag_sensitivity,
        );

        let mut gallery = Gallery {
            filter: FilterEngine::new(&self.items),
            items: self.items,
            container,
            carousel: CarouselBuilder::new(&options.carousel),
            rotation: RotationState::new(&options.rotation),
            scene,
            picker: PickController::new(),
            input,
            resources,
            viewer: self.viewer,
            fullscreen: self.fullscreen,
            menu: self.menu,
            selected: None,
            muted: false,
            current: None,
        };
        gallery.apply_filter(CategoryFilter::All);
        Ok(gallery)
    }
}

// ── Gallery ──────────────────────────────────────────────────────────────

/// Interactive circular gallery.
///
/// Hosts feed it raw events through [`handle_input`](Self::handle_input) /
/// [`handle_key`](Self::handle_key) (or commands through
/// [`execute`](Self::execute)) and call [`update`](Self::update) once per
/// displayed frame before drawing [`slots`](Self::slots).
pub struct Gallery<R: SlotResources> {
    items: Vec<GalleryItem>,
    container: ContainerRect,
    filter: FilterEngine,
    carousel: CarouselBuilder,
    rotation: RotationState,
    scene: SceneManager,
    picker: PickController,
    input: InputProcessor,
    resources: R,
    viewer: Option<Box<dyn ItemViewer>>,
    fullscreen: Option<Box<dyn FullscreenHost>>,
    menu: Option<Box<dyn AuxMenu>>,
    /// Source index of the item open in the viewer.
    selected: Option<usize>,
    muted: bool,
    /// Ring index of the slot nearest the camera.
    current: Option<usize>,
}

impl<R: SlotResources> Gallery<R> {
    // ── Commands ──────────────────────────────────────────────────────

    /// Apply one command. This is the only way gallery state changes.
    ///
    /// While an item is shown the viewer is modal: drags and picks are
    /// dropped so the ring behind it stays put. Keys and controls still
    /// apply, and a drag already in progress may still end.
    pub fn execute(&mut self, command: GalleryCommand, now: Instant) {
        if self.selected.is_some()
            && matches!(
                command,
                GalleryCommand::BeginDrag
                    | GalleryCommand::DragBy { .. }
                    | GalleryCommand::Pick { .. }
            )
        {
            log::trace!("viewer open, dropping {command:?}");
            return;
        }
        match command {
            GalleryCommand::BeginDrag => self.rotation.begin_drag(),
            GalleryCommand::DragBy { radians } => {
                self.rotation.drag_by(radians);
            }
            GalleryCommand::EndDrag => self.rotation.end_drag(now),
            GalleryCommand::Navigate { direction } => {
                let count = self.carousel.slots().len();
                self.rotation.navigate(direction.sign(), count, now);
            }
            GalleryCommand::TogglePause => {
                self.rotation.toggle_pause();
                log::info!(
                    "auto-rotate {}",
                    if self.rotation.paused() { "paused" } else { "resumed" }
                );
            }
            GalleryCommand::CycleSpeed => {
                let speed = self.rotation.cycle_speed();
                log::info!("rotation speed: {speed:?}");
            }
            GalleryCommand::ToggleFullscreen => self.toggle_fullscreen(),
            GalleryCommand::ToggleMute => {
                self.muted = !self.muted;
                log::info!("muted: {}", self.muted);
            }
            GalleryCommand::ApplyFilter { filter } => self.apply_filter(filter),
            GalleryCommand::Pick { x, y } => {
                if let Some(hit) = self.pick(x, y) {
                    self.open(hit.item_index);
                }
            }
            GalleryCommand::CloseViewer => self.close(),
            GalleryCommand::DismissMenu { x, y } => self.dismiss_menu(x, y),
        }
    }

    /// Route a raw input event through the input processor.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        for command in self.input.handle_event(event, now) {
            self.execute(command, now);
        }
    }

    /// Route a key press. Returns the bound response so the host can
    /// suppress the key's default behavior when asked to.
    pub fn handle_key(
        &mut self,
        key: &str,
        now: Instant,
    ) -> Option<KeyResponse> {
        let response = self.input.handle_key_press(key)?;
        self.execute(response.command.clone(), now);
        Some(response)
    }

    fn apply_filter(&mut self, filter: CategoryFilter) {
        let selection = self.filter.apply(filter, &self.items);
        let count = self
            .carousel
            .build(&self.items, selection, &mut self.resources)
            .len();
        self.carousel.update_transforms(SceneManager::carousel_group(
            self.rotation.rotation(),
        ));
        self.current = clamp_index(self.current.unwrap_or(0), count);
        log::info!(
            "ring rebuilt: {count} slots for category '{}'",
            self.filter.active()
        );
    }

    fn toggle_fullscreen(&mut self) {
        let Some(host) = self.fullscreen.as_mut() else {
            log::debug!("fullscreen requested without a host");
            return;
        };
        if let Err(e) = host.toggle_fullscreen() {
            log::warn!("fullscreen request rejected: {e}");
        }
    }

    fn open(&mut self, item_index: usize) {
        let Some(item) = self.items.get(item_index) else {
            return;
        };
        self.selected = Some(item_index);
        match self.viewer.as_mut() {
            Some(viewer) => viewer.show(&item.asset),
            None => log::debug!("no viewer attached for '{}'", item.label),
        }
    }

    fn close(&mut self) {
        if self.selected.take().is_some() {
            if let Some(viewer) = self.viewer.as_mut() {
                viewer.hide();
            }
        }
    }

    fn dismiss_menu(&mut self, x: f32, y: f32) {
        if let Some(menu) = self.menu.as_mut() {
            if menu.is_open() && !menu.contains(x, y) {
                menu.close();
            }
        }
    }

    /// Resolve a container-relative pixel position to the item it shows.
    pub fn pick(&mut self, x: f32, y: f32) -> Option<PickHit> {
        self.picker.pick(
            &self.container,
            x,
            y,
            self.scene.camera(),
            &self.carousel,
        )
    }

    // ── Frame ─────────────────────────────────────────────────────────

    /// Per-frame step, in order: due timers, rotation easing, slot
    /// transforms, particle spin, nearest-slot tracking.
    pub fn update(&mut self, now: Instant) {
        self.rotation.poll_settle(now);
        if let Some(viewport) = self.scene.poll_resize(now) {
            self.container.width = viewport.width as f32;
            self.container.height = viewport.height as f32;
        }
        self.rotation.advance();
        self.carousel.update_transforms(SceneManager::carousel_group(
            self.rotation.rotation(),
        ));
        self.scene.advance_particles();
        let count = self.carousel.slots().len();
        self.current = nearest_index(self.rotation.rotation(), count);
    }

    /// Queue a container resize. Applied by [`update`](Self::update) once
    /// the debounce window has passed without another resize.
    pub fn resize(&mut self, width: u32, height: u32, now: Instant) {
        self.scene.request_resize(width, height, now);
    }

    /// Move the container without resizing it.
    pub fn set_container_origin(&mut self, x: f32, y: f32) {
        self.container.x = x;
        self.container.y = y;
    }

    /// Release every slot resource and hide the viewer.
    pub fn teardown(&mut self) {
        self.close();
        self.carousel.release(&mut self.resources);
        self.current = None;
    }

    // ── Queries ───────────────────────────────────────────────────────

    /// Every source item, unfiltered.
    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Active filter.
    #[must_use]
    pub fn active_filter(&self) -> &CategoryFilter {
        self.filter.active()
    }

    /// Items passing the active filter, in ring order.
    pub fn filtered_items(&self) -> impl Iterator<Item = &GalleryItem> {
        self.filter
            .filtered()
            .iter()
            .filter_map(|&i| self.items.get(i))
    }

    /// Current ring.
    #[must_use]
    pub fn slots(&self) -> &[VisualSlot] {
        self.carousel.slots()
    }

    /// Ring builder, for slot → item resolution.
    #[must_use]
    pub fn carousel(&self) -> &CarouselBuilder {
        &self.carousel
    }

    /// Number of slots currently alive.
    #[must_use]
    pub fn live_slot_count(&self) -> usize {
        self.carousel.slots().len()
    }

    /// Rotation state.
    #[must_use]
    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// Scene around the ring.
    #[must_use]
    pub fn scene(&self) -> &SceneManager {
        &self.scene
    }

    /// Container rectangle used for picking.
    #[must_use]
    pub fn container(&self) -> ContainerRect {
        self.container
    }

    /// Input processor state (pointer, drag, bindings).
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Slot resource backend.
    #[must_use]
    pub fn resources(&self) -> &R {
        &self.resources
    }

    /// Mutable slot resource backend.
    pub fn resources_mut(&mut self) -> &mut R {
        &mut self.resources
    }

    /// Item open in the viewer.
    #[must_use]
    pub fn selected(&self) -> Option<&GalleryItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Whether the mute toggle is on.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Ring index of the slot nearest the camera.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Item on the slot nearest the camera.
    #[must_use]
    pub fn current_item(&self) -> Option<&GalleryItem> {
        let slot = self.carousel.slots().get(self.current?)?;
        self.items.get(self.carousel.item_index(slot.id)?)
    }

    /// Caption of the item nearest the camera.
    #[must_use]
    pub fn current_label(&self) -> Option<&str> {
        self.current_item().map(|item| item.label.as_str())
    }

    /// `(nearest ring index, ring size)` for a progress indicator.
    #[must_use]
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.current.map(|i| (i, self.carousel.slots().len()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::f32::consts::PI;
    use std::rc::Rc;

    use glam::Vec3;
    use web_time::Duration;

    use super::collaborators::testing::{
        BoxMenu, RecordingViewer, RefusingFullscreen,
    };
    use super::*;
    use crate::carousel::resources::testing::CountingResources;
    use crate::input::MouseButton;

    fn items() -> Vec<GalleryItem> {
        vec![
            GalleryItem::new("a", "A", "x"),
            GalleryItem::new("b", "B", "y"),
            GalleryItem::new("c", "C", "x"),
            GalleryItem::new("d", "D", "y"),
        ]
    }

    fn options() -> Options {
        let mut options = Options::default();
        options.particles.count = 16;
        options.particles.seed = Some(1);
        options
    }

    fn builder() -> GalleryBuilder {
        GalleryBuilder::new()
            .with_container(ContainerRect::sized(800.0, 600.0))
            .with_items(items())
            .with_options(options())
            .with_controls(ControlSet::all().with_filter("x").with_filter("y"))
    }

    fn gallery() -> Gallery<CountingResources> {
        builder().build(CountingResources::default()).unwrap()
    }

    fn filter(g: &mut Gallery<CountingResources>, tag: &str, now: Instant) {
        g.execute(
            GalleryCommand::ApplyFilter {
                filter: CategoryFilter::parse(tag),
            },
            now,
        );
    }

    fn screen_of(g: &Gallery<CountingResources>, world: Vec3) -> (f32, f32) {
        let ndc = g.scene().camera().project(world).unwrap();
        g.container().from_ndc(ndc.truncate())
    }

    #[test]
    fn missing_container_fails_fast() {
        let result = GalleryBuilder::new()
            .with_items(items())
            .build(CountingResources::default());
        assert!(matches!(result, Err(GalleryError::MissingContainer)));
    }

    #[test]
    fn initial_ring_holds_every_item() {
        let g = gallery();
        assert_eq!(g.live_slot_count(), 4);
        assert_eq!(g.active_filter(), &CategoryFilter::All);
        assert_eq!(g.current_index(), Some(0));
    }

    #[test]
    fn filter_navigate_pick_scenario() {
        let now = Instant::now();
        let viewer = RecordingViewer::default();
        let log = Rc::clone(&viewer.log);
        let mut g = builder()
            .with_viewer(viewer)
            .build(CountingResources::default())
            .unwrap();

        filter(&mut g, "x", now);
        let labels: Vec<&str> =
            g.filtered_items().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["A", "C"]);
        assert_eq!(g.slots().len(), 2);
        assert!(g.slots()[0].angle.abs() < 1e-6);
        assert!((g.slots()[1].angle - PI).abs() < 1e-6);

        let before = g.rotation().target();
        g.execute(
            GalleryCommand::Navigate {
                direction: Direction::Next,
            },
            now,
        );
        assert!((g.rotation().target() - before - PI).abs() < 1e-6);

        let slot0 = g.slots()[0].world_transform().transform_point3(Vec3::ZERO);
        let (x, y) = screen_of(&g, slot0);
        let hit = g.pick(x, y).unwrap();
        assert_eq!(g.items()[hit.item_index].label, "A");

        g.execute(GalleryCommand::Pick { x, y }, now);
        assert_eq!(g.selected().map(|i| i.label.as_str()), Some("A"));
        assert_eq!(*log.borrow(), vec![Some("a".to_owned())]);
    }

    #[test]
    fn pick_on_empty_space_is_a_no_op() {
        let now = Instant::now();
        let mut g = gallery();
        g.execute(GalleryCommand::Pick { x: 1.0, y: 1.0 }, now);
        assert!(g.selected().is_none());
    }

    #[test]
    fn all_restores_full_ring_without_leaking() {
        let now = Instant::now();
        let mut g = gallery();
        let baseline = g.resources().live_total();
        for tag in ["x", "y", "missing", "all", "all"] {
            filter(&mut g, tag, now);
        }
        assert_eq!(g.live_slot_count(), 4);
        assert_eq!(g.resources().live_total(), baseline);
    }

    #[test]
    fn current_index_clamps_when_ring_shrinks() {
        let now = Instant::now();
        let mut g = gallery();
        g.execute(
            GalleryCommand::DragBy {
                radians: 3.0 * PI / 2.0,
            },
            now,
        );
        g.execute(GalleryCommand::TogglePause, now);
        for _ in 0..400 {
            g.update(now);
        }
        assert_eq!(g.current_index(), Some(3));
        assert_eq!(g.current_label(), Some("D"));

        filter(&mut g, "x", now);
        assert_eq!(g.current_index(), Some(1));
        filter(&mut g, "missing", now);
        assert_eq!(g.current_index(), None);
        assert_eq!(g.progress(), None);
        g.update(now);
        assert_eq!(g.current_label(), None);
    }

    #[test]
    fn drag_right_moves_front_slot_right() {
        let now = Instant::now();
        let mut g = gallery();
        g.execute(GalleryCommand::TogglePause, now);
        g.handle_input(InputEvent::CursorMoved { x: 300.0, y: 300.0 }, now);
        g.handle_input(
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            },
            now,
        );
        g.handle_input(InputEvent::CursorMoved { x: 400.0, y: 300.0 }, now);
        for _ in 0..200 {
            g.update(now);
        }
        let front = g.slots()[0].world_transform().transform_point3(Vec3::ZERO);
        assert!(front.x > 0.1);
        assert_eq!(g.current_index(), Some(0));
    }

    #[test]
    fn progress_reports_nearest_and_count() {
        let now = Instant::now();
        let mut g = gallery();
        g.update(now);
        assert_eq!(g.progress(), Some((0, 4)));
        assert_eq!(g.current_label(), Some("A"));
    }

    #[test]
    fn drag_input_moves_target_and_resumes_after_settle() {
        let t0 = Instant::now();
        let mut g = gallery();
        let press = |pressed| InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        };
        g.handle_input(InputEvent::CursorMoved { x: 100.0, y: 300.0 }, t0);
        g.handle_input(press(true), t0);
        assert!(g.rotation().dragging());
        g.handle_input(InputEvent::CursorMoved { x: 200.0, y: 300.0 }, t0);
        let expected = 100.0 * Options::default().rotation.drag_sensitivity;
        assert!((g.rotation().target() - expected).abs() < 1e-6);
        g.handle_input(press(false), t0);
        assert!(!g.rotation().auto_rotate());

        g.update(t0 + Duration::from_millis(2999));
        assert!(!g.rotation().auto_rotate());
        g.update(t0 + Duration::from_millis(3000));
        assert!(g.rotation().auto_rotate());
    }

    #[test]
    fn pause_during_settle_wins() {
        let t0 = Instant::now();
        let mut g = gallery();
        g.execute(GalleryCommand::BeginDrag, t0);
        g.execute(GalleryCommand::EndDrag, t0);
        g.execute(GalleryCommand::TogglePause, t0 + Duration::from_secs(1));
        let target = g.rotation().target();
        for ms in [3000, 4000, 8000] {
            g.update(t0 + Duration::from_millis(ms));
        }
        assert!(!g.rotation().auto_rotate());
        assert_eq!(g.rotation().target(), target);
    }

    #[test]
    fn keys_drive_commands() {
        let now = Instant::now();
        let mut g = gallery();
        let response = g.handle_key("Space", now).unwrap();
        assert!(response.prevent_default);
        assert!(g.rotation().paused());
        let _ = g.handle_key("KeyM", now).unwrap();
        assert!(g.is_muted());
        let before = g.rotation().target();
        let _ = g.handle_key("ArrowLeft", now).unwrap();
        assert!((g.rotation().target() - before + PI / 2.0).abs() < 1e-6);
        assert!(g.handle_key("KeyQ", now).is_none());
    }

    #[test]
    fn rejected_fullscreen_is_not_fatal() {
        let now = Instant::now();
        let attempts = Rc::new(RefCell::new(0));
        let mut g = builder()
            .with_fullscreen(RefusingFullscreen {
                attempts: Rc::clone(&attempts),
            })
            .build(CountingResources::default())
            .unwrap();
        let _ = g.handle_key("KeyF", now);
        assert_eq!(*attempts.borrow(), 1);
        g.update(now);
        assert_eq!(g.live_slot_count(), 4);
    }

    #[test]
    fn absent_collaborators_are_skipped() {
        let now = Instant::now();
        let mut g = gallery();
        g.execute(GalleryCommand::ToggleFullscreen, now);
        g.execute(GalleryCommand::DismissMenu { x: 0.0, y: 0.0 }, now);
        g.execute(GalleryCommand::CloseViewer, now);
        assert!(g.selected().is_none());
    }

    #[test]
    fn outside_press_closes_menu() {
        let now = Instant::now();
        let open = Rc::new(RefCell::new(true));
        let mut g = builder()
            .with_menu(BoxMenu {
                open: Rc::clone(&open),
                rect: (0.0, 0.0, 100.0, 100.0),
            })
            .build(CountingResources::default())
            .unwrap();
        g.execute(GalleryCommand::DismissMenu { x: 50.0, y: 50.0 }, now);
        assert!(*open.borrow());
        g.execute(GalleryCommand::DismissMenu { x: 500.0, y: 50.0 }, now);
        assert!(!*open.borrow());
    }

    #[test]
    fn viewer_stays_open_across_filters_until_closed() {
        let now = Instant::now();
        let viewer = RecordingViewer::default();
        let log = Rc::clone(&viewer.log);
        let mut g = builder()
            .with_viewer(viewer)
            .build(CountingResources::default())
            .unwrap();
        let slot0 = g.slots()[0].world_transform().transform_point3(Vec3::ZERO);
        let (x, y) = screen_of(&g, slot0);
        g.execute(GalleryCommand::Pick { x, y }, now);
        filter(&mut g, "y", now);
        assert_eq!(g.selected().map(|i| i.label.as_str()), Some("A"));

        let _ = g.handle_key("Escape", now);
        assert!(g.selected().is_none());
        g.execute(GalleryCommand::CloseViewer, now);
        assert_eq!(*log.borrow(), vec![Some("a".to_owned()), None]);
    }

    #[test]
    fn open_viewer_blocks_drags_and_picks() {
        let now = Instant::now();
        let viewer = RecordingViewer::default();
        let log = Rc::clone(&viewer.log);
        let mut g = builder()
            .with_viewer(viewer)
            .build(CountingResources::default())
            .unwrap();
        let slot0 = g.slots()[0].world_transform().transform_point3(Vec3::ZERO);
        let (x, y) = screen_of(&g, slot0);
        g.execute(GalleryCommand::Pick { x, y }, now);
        let target = g.rotation().target();

        g.execute(GalleryCommand::BeginDrag, now);
        g.execute(GalleryCommand::DragBy { radians: PI }, now);
        g.execute(GalleryCommand::EndDrag, now);
        assert_eq!(g.rotation().target(), target);
        assert!(!g.rotation().dragging());

        g.execute(GalleryCommand::Pick { x, y }, now);
        assert_eq!(g.selected().map(|i| i.label.as_str()), Some("A"));
        assert_eq!(*log.borrow(), vec![Some("a".to_owned())]);

        g.execute(
            GalleryCommand::Navigate {
                direction: Direction::Next,
            },
            now,
        );
        assert!((g.rotation().target() - target - PI / 2.0).abs() < 1e-6);

        g.execute(GalleryCommand::CloseViewer, now);
        g.execute(GalleryCommand::BeginDrag, now);
        assert!(g.rotation().dragging());
    }

    #[test]
    fn debounced_resize_updates_pick_rect() {
        let t0 = Instant::now();
        let mut g = gallery();
        g.resize(1024, 512, t0);
        g.resize(1600, 800, t0 + Duration::from_millis(100));
        g.update(t0 + Duration::from_millis(200));
        assert_eq!(g.container().width, 800.0);
        g.update(t0 + Duration::from_millis(400));
        assert_eq!(g.container().width, 1600.0);
        assert_eq!(g.scene().camera().aspect, 2.0);
    }

    #[test]
    fn teardown_releases_everything() {
        let mut g = gallery();
        g.teardown();
        assert_eq!(g.live_slot_count(), 0);
        assert_eq!(g.resources().live_total(), 0);
    }
}
