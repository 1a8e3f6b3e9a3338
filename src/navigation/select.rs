use std::time::Duration;

use super::renderer::{Layer, Renderer, TransformRequest};
use super::scheduler::{ScheduledTask, Scheduler};
use super::{
    Navigator, AUTO_ADVANCE_DELAY, BASE_PERSPECTIVE, HIGHLIGHT_DURATION,
    PHASE_DELAY, TRANSITION_DURATION,
};
use crate::deck::Step;
use crate::deep_link::{self, History};
use crate::error::NavigationError;
use crate::transform::compose;

impl<R: Renderer, S: Scheduler, H: History> Navigator<R, S, H> {
    /// Make `step_id` the active step and move the camera onto it.
    ///
    /// The first selection snaps; later ones animate over
    /// [`TRANSITION_DURATION`], with the zoom phase ordered by whether the
    /// camera zooms in or out.
    ///
    /// # Errors
    ///
    /// [`NavigationError::StepNotFound`] for an unknown id and
    /// [`NavigationError::RedundantSelection`] if the step is already
    /// active. Neither changes state or reaches any collaborator.
    pub fn select(&mut self, step_id: &str) -> Result<&Step, NavigationError> {
        let Some(idx) = self.deck.position(step_id) else {
            return Err(NavigationError::StepNotFound(step_id.to_owned()));
        };
        if self.state.active_step() == Some(step_id) {
            return Err(NavigationError::RedundantSelection(step_id.to_owned()));
        }

        let step = &self.deck.steps()[idx];
        let target = step.transform().inverted();
        let zooming_in = target.scale >= self.state.camera.scale;
        let duration = if self.state.active_step.is_some() {
            TRANSITION_DURATION
        } else {
            Duration::ZERO
        };
        let (viewport_delay, canvas_delay) = if zooming_in {
            (PHASE_DELAY, Duration::ZERO)
        } else {
            (Duration::ZERO, PHASE_DELAY)
        };

        self.renderer
            .set_active_step(self.state.active_step(), step.id());
        self.renderer.apply(&TransformRequest {
            layer: Layer::Viewport,
            transform: compose::camera_viewport(&target),
            perspective: Some(step.transform().scale * BASE_PERSPECTIVE),
            duration,
            delay: viewport_delay,
        });
        self.renderer.apply(&TransformRequest {
            layer: Layer::Canvas,
            transform: compose::camera_canvas(&target),
            perspective: None,
            duration,
            delay: canvas_delay,
        });

        let epoch = self.state.epoch + 1;
        let mut highlighted = false;
        for decoration in self.deck.decorations() {
            let on = decoration.belongs_to(step.id());
            highlighted |= on;
            self.renderer.set_highlight(decoration.id(), on);
        }
        if highlighted {
            let _ = self
                .scheduler
                .schedule(HIGHLIGHT_DURATION, ScheduledTask::EndHighlight { epoch });
        }

        log::debug!(
            "select {} (zoom {}, {}ms)",
            step.id(),
            if zooming_in { "in" } else { "out" },
            duration.as_millis()
        );

        self.state.active_step = Some(step.id().to_owned());
        self.state.camera = target;
        self.state.epoch = epoch;
        self.state.highlight_epoch = highlighted.then_some(epoch);
        self.state.viewport_in_flight = !duration.is_zero();
        self.state.canvas_in_flight = !duration.is_zero();

        self.deep_link
            .schedule_publish(&mut self.scheduler, step.id());

        if let Some(to) = step.auto_advance() {
            let _ = self.scheduler.schedule(
                AUTO_ADVANCE_DELAY,
                ScheduledTask::AutoAdvance { epoch, to },
            );
        }

        Ok(step)
    }

    /// The external location changed: select the step it names.
    ///
    /// # Errors
    ///
    /// [`NavigationError::StepNotFound`] if the fragment names no step; the
    /// active step is kept.
    pub fn on_external_change(
        &mut self,
        fragment: &str,
    ) -> Result<&Step, NavigationError> {
        let step_id = deep_link::step_id_from_fragment(fragment);
        self.select(step_id)
    }
}
