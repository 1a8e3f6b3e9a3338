use std::time::Duration;

use super::renderer::Renderer;
use super::scheduler::{ScheduledTask, Scheduler, Timeline};
use super::Navigator;
use crate::deep_link::History;

impl<R: Renderer, S: Scheduler, H: History> Navigator<R, S, H> {
    /// Run a task previously handed to the scheduler.
    ///
    /// Tasks issued by a selection that has since been superseded are
    /// dropped, so a late highlight-clear or auto-advance never acts on a
    /// step that is no longer active.
    pub fn dispatch(&mut self, task: ScheduledTask) {
        match task {
            ScheduledTask::PublishLocation { step_id } => {
                self.deep_link.publish(&step_id);
            }
            ScheduledTask::EndHighlight { epoch } => self.end_highlight(epoch),
            ScheduledTask::AutoAdvance { epoch, to } => {
                if epoch != self.state.epoch {
                    log::debug!("auto-advance from selection {epoch} is stale");
                    return;
                }
                match self.go_to_location(to) {
                    Ok(step) => log::debug!("auto-advanced to {}", step.id()),
                    Err(e) => log::warn!("auto-advance to {to} rejected: {e}"),
                }
            }
        }
    }

    fn end_highlight(&mut self, epoch: u64) {
        if self.state.highlight_epoch != Some(epoch) {
            return;
        }
        self.state.highlight_epoch = None;
        let Some(active) = self.state.active_step.as_deref() else {
            return;
        };
        for decoration in self.deck.decorations() {
            if decoration.belongs_to(active) {
                self.renderer.set_highlight(decoration.id(), false);
            }
        }
    }
}

impl<R: Renderer, H: History> Navigator<R, Timeline, H> {
    /// Move the timeline forward by `elapsed`, running every task that
    /// falls due on the way, including tasks scheduled by those tasks.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now() + elapsed;
        while let Some(task) = self.scheduler.pop_due(until) {
            self.dispatch(task);
        }
        self.scheduler.set_now(until);
    }
}
