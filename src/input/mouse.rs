use web_time::{Duration, Instant};

const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(400);
/// Pointer travel (pixels) that turns a press into a drag.
pub(crate) const CLICK_SLOP: f32 = 6.0;

/// Result of processing a pointer-up through the multi-click state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClickResult {
    /// The press turned into a drag.
    NoAction,
    /// First click of a potential double click.
    SingleClick,
    /// Second click on the same spot within the threshold.
    DoubleClick,
}

/// Tracks press position, drag travel, and double-click timing.
pub(crate) struct ClickTracker {
    down_pos: Option<(f32, f32)>,
    moved: bool,
    last_click: Option<(Instant, (f32, f32))>,
}

impl ClickTracker {
    pub(crate) fn new() -> Self {
        Self {
            down_pos: None,
            moved: false,
            last_click: None,
        }
    }

    /// Record a press at `pos`.
    pub(crate) fn handle_down(&mut self, pos: (f32, f32)) {
        self.down_pos = Some(pos);
        self.moved = false;
    }

    /// Note pointer travel while pressed.
    pub(crate) fn handle_move(&mut self, pos: (f32, f32)) {
        if let Some(down) = self.down_pos {
            if distance(down, pos) > CLICK_SLOP {
                self.moved = true;
            }
        }
    }

    /// Process a release at `pos` and classify the click.
    pub(crate) fn handle_up(
        &mut self,
        pos: (f32, f32),
        now: Instant,
    ) -> ClickResult {
        let was_pressed = self.down_pos.take().is_some();
        if !was_pressed || self.moved {
            self.last_click = None;
            return ClickResult::NoAction;
        }

        let is_double = self.last_click.is_some_and(|(at, last_pos)| {
            now.duration_since(at) < DOUBLE_CLICK_THRESHOLD
                && distance(last_pos, pos) <= CLICK_SLOP
        });

        if is_double {
            // A third click starts a fresh pair.
            self.last_click = None;
            ClickResult::DoubleClick
        } else {
            self.last_click = Some((now, pos));
            ClickResult::SingleClick
        }
    }
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(
        t: &mut ClickTracker,
        pos: (f32, f32),
        now: Instant,
    ) -> ClickResult {
        t.handle_down(pos);
        t.handle_up(pos, now)
    }

    #[test]
    fn two_quick_clicks_make_a_double() {
        let t0 = Instant::now();
        let mut t = ClickTracker::new();
        assert_eq!(click(&mut t, (10.0, 10.0), t0), ClickResult::SingleClick);
        assert_eq!(
            click(&mut t, (12.0, 11.0), t0 + Duration::from_millis(200)),
            ClickResult::DoubleClick
        );
        assert_eq!(
            click(&mut t, (12.0, 11.0), t0 + Duration::from_millis(300)),
            ClickResult::SingleClick
        );
    }

    #[test]
    fn slow_or_distant_clicks_stay_single() {
        let t0 = Instant::now();
        let mut t = ClickTracker::new();
        let _ = click(&mut t, (10.0, 10.0), t0);
        assert_eq!(
            click(&mut t, (10.0, 10.0), t0 + Duration::from_millis(500)),
            ClickResult::SingleClick
        );
        assert_eq!(
            click(&mut t, (80.0, 10.0), t0 + Duration::from_millis(600)),
            ClickResult::SingleClick
        );
    }

    #[test]
    fn drag_is_not_a_click() {
        let mut t = ClickTracker::new();
        t.handle_down((0.0, 0.0));
        t.handle_move((40.0, 0.0));
        let result = t.handle_up((40.0, 0.0), Instant::now());
        assert_eq!(result, ClickResult::NoAction);
    }
}
