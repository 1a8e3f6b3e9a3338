//! Deferred work issued by navigation, and a virtual-clock scheduler for it.
//!
//! Navigation never sleeps or spawns timers itself. It hands
//! [`ScheduledTask`]s to a [`Scheduler`] and expects them back through
//! [`Navigator::dispatch`](super::Navigator::dispatch) once due.

use std::time::Duration;

use crate::deck::GridLocation;

/// Handle for cancelling a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// Work deferred by a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduledTask {
    /// Publish `step_id` as the external location (debounced).
    PublishLocation {
        /// Step that was active when the publish was scheduled.
        step_id: String,
    },
    /// Clear the decoration highlight opened by selection `epoch`.
    EndHighlight {
        /// Selection epoch that opened the highlight window.
        epoch: u64,
    },
    /// Navigate to `to` if selection `epoch` is still the latest.
    AutoAdvance {
        /// Selection epoch of the step that requested the advance.
        epoch: u64,
        /// Requested grid location.
        to: GridLocation,
    },
}

/// Collaborator that runs [`ScheduledTask`]s after a delay.
pub trait Scheduler {
    /// Run `task` once `delay` has elapsed.
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) -> TimerToken;

    /// Drop a task that has not run yet. Returns whether anything was
    /// cancelled.
    fn cancel(&mut self, token: TimerToken) -> bool;
}

#[derive(Debug)]
struct PendingTask {
    token: TimerToken,
    due: Duration,
    task: ScheduledTask,
}

/// Deterministic scheduler driven by explicit time advances.
///
/// Time starts at zero and only moves when the owner advances it, which
/// makes every timing rule of navigation testable without sleeping.
#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    next_token: u64,
    pending: Vec<PendingTask>,
}

impl Timeline {
    /// Empty timeline at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Whether `token` is still waiting to run.
    #[must_use]
    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|p| p.token == token)
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove and return the earliest task due at or before `until`,
    /// moving the clock to its due time. Ties run in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<ScheduledTask> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.token))
            .map(|(idx, _)| idx)?;
        let PendingTask { due, task, .. } = self.pending.remove(idx);
        self.now = self.now.max(due);
        Some(task)
    }

    /// Move the clock forward to `now`. Never moves it backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Scheduler for Timeline {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending.push(PendingTask {
            token,
            due: self.now + delay,
            task,
        });
        token
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.token != token);
        self.pending.len() != before
    }
}
