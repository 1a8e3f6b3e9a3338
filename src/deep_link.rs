//! Deep-Link Resolver.
//!
//! Keeps the external, shareable location (a `#/<step-id>` fragment) in
//! step with the active step. Publishing is debounced: every selection
//! cancels the pending publish and schedules a new one, so rapid navigation
//! publishes only where it settles, and never mid-transition.

use std::time::Duration;

use crate::navigation::{ScheduledTask, Scheduler, TimerToken};

/// Delay between a selection and publishing its step id.
pub const PUBLISH_DELAY: Duration = Duration::from_secs(1);

/// External routable state, e.g. a URL fragment.
pub trait History {
    /// Replace the external location with `fragment`.
    fn publish(&mut self, fragment: &str);
}

/// In-memory [`History`] recording every published fragment.
#[derive(Debug, Default, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
}

impl MemoryHistory {
    /// Empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently published fragment.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Every published fragment, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for MemoryHistory {
    fn publish(&mut self, fragment: &str) {
        log::debug!("location -> {fragment}");
        self.entries.push(fragment.to_owned());
    }
}

/// Fragment published for `step_id`.
///
/// The `#/` form keeps browsers from scrolling to an element with that id.
#[must_use]
pub fn fragment_for(step_id: &str) -> String {
    format!("#/{step_id}")
}

/// Step id referenced by a fragment. Accepts `#/id`, `#id` and bare `id`.
#[must_use]
pub fn step_id_from_fragment(fragment: &str) -> &str {
    fragment
        .strip_prefix("#/")
        .or_else(|| fragment.strip_prefix('#'))
        .unwrap_or(fragment)
}

/// Debounced publisher of the active step.
#[derive(Debug)]
pub struct DeepLinkResolver<H> {
    history: H,
    pending: Option<TimerToken>,
    enabled: bool,
}

impl<H: History> DeepLinkResolver<H> {
    /// Resolver publishing into `history`.
    #[must_use]
    pub fn new(history: H) -> Self {
        Self {
            history,
            pending: None,
            enabled: true,
        }
    }

    /// Turn publishing on or off. Turning it off does not cancel a publish
    /// that is already scheduled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether selections are published.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Token of the publish waiting to run, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TimerToken> {
        self.pending
    }

    /// The history collaborator.
    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access to the history collaborator.
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Replace any pending publish with one for `step_id`.
    pub(crate) fn schedule_publish<S: Scheduler>(
        &mut self,
        scheduler: &mut S,
        step_id: &str,
    ) {
        if !self.enabled {
            return;
        }
        if let Some(token) = self.pending.take() {
            let _ = scheduler.cancel(token);
        }
        self.pending = Some(scheduler.schedule(
            PUBLISH_DELAY,
            ScheduledTask::PublishLocation {
                step_id: step_id.to_owned(),
            },
        ));
    }

    /// Publish `step_id` now. Runs when the scheduled publish fires.
    pub(crate) fn publish(&mut self, step_id: &str) {
        self.pending = None;
        self.history.publish(&fragment_for(step_id));
    }
}
