use web_time::{Duration, Instant};

/// Delayed "resume auto-rotate" callback with generation tracking.
///
/// Every [`schedule`](Self::schedule) or [`cancel`](Self::cancel) bumps the
/// session generation, so only the most recently scheduled resume can ever
/// fire. A resume that fires still has to pass the caller's re-check of the
/// pause flag at fire time.
#[derive(Debug, Clone)]
pub struct SettleTimer {
    delay: Duration,
    generation: u64,
    pending: Option<PendingResume>,
}

#[derive(Debug, Clone, Copy)]
struct PendingResume {
    generation: u64,
    deadline: Instant,
}

impl SettleTimer {
    /// Create an idle timer with the given settle delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Settle delay applied by [`schedule`](Self::schedule).
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current session generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a resume is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a new settle session that resumes at `now + delay`, superseding
    /// any earlier one. Returns the new session's generation.
    pub fn schedule(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.pending = Some(PendingResume {
            generation: self.generation,
            deadline: now + self.delay,
        });
        self.generation
    }

    /// Invalidate the pending resume, if any.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.pending.take().is_some() {
            log::debug!("settle timer cancelled");
        }
    }

    /// Fire the pending resume if its deadline has passed.
    ///
    /// Returns the generation of the session that fired. A pending entry
    /// whose generation is stale is discarded without firing.
    pub fn poll(&mut self, now: Instant) -> Option<u64> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        if pending.generation == self.generation {
            Some(pending.generation)
        } else {
            log::debug!(
                "discarding stale settle session {}",
                pending.generation
            );
            None
        }
    }
}
