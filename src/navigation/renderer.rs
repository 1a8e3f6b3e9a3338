//! The renderer seam: where computed transforms leave the core.

use std::time::Duration;

use crate::deck::{Decoration, Step};
use crate::transform::TransformDescriptor;

/// Which half of the camera a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Outer element: carries scale and perspective.
    Viewport,
    /// Inner element holding every step: carries rotation and translation.
    Canvas,
}

/// One transform-application request for a camera layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformRequest {
    /// Target layer.
    pub layer: Layer,
    /// Transform to transition to.
    pub transform: TransformDescriptor,
    /// Perspective depth in pixels (viewport only).
    pub perspective: Option<f32>,
    /// Transition duration; zero means snap.
    pub duration: Duration,
    /// Delay before the transition starts.
    pub delay: Duration,
}

/// An entity being placed on the canvas.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    /// A navigable step.
    Step(&'a Step),
    /// A decoration.
    Decoration(&'a Decoration),
}

impl EntityRef<'_> {
    /// Identifier of the underlying entity.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Step(s) => s.id(),
            Self::Decoration(d) => d.id(),
        }
    }
}

/// Applies transforms and highlight state visually.
///
/// Implementations report finished transitions back through
/// [`Navigator::on_transition_end`](super::Navigator::on_transition_end).
/// A new request for a layer that is still transitioning must retarget it.
pub trait Renderer {
    /// Position an entity inside the canvas. Called once per entity when a
    /// presentation starts.
    fn place(&mut self, _entity: EntityRef<'_>, _placement: &TransformDescriptor) {
    }

    /// Transition a camera layer.
    fn apply(&mut self, request: &TransformRequest);

    /// Move the "active" marker from `previous` to `current`.
    fn set_active_step(&mut self, _previous: Option<&str>, _current: &str) {}

    /// Set or clear a decoration's highlight.
    fn set_highlight(&mut self, decoration_id: &str, highlighted: bool);
}

/// Renderer that only logs what it is asked to do.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn place(&mut self, entity: EntityRef<'_>, placement: &TransformDescriptor) {
        log::info!("place {}: {placement}", entity.id());
    }

    fn apply(&mut self, request: &TransformRequest) {
        log::info!(
            "{:?}: {} (duration {}ms, delay {}ms{})",
            request.layer,
            request.transform,
            request.duration.as_millis(),
            request.delay.as_millis(),
            request
                .perspective
                .map(|p| format!(", perspective {p}px"))
                .unwrap_or_default()
        );
    }

    fn set_active_step(&mut self, previous: Option<&str>, current: &str) {
        match previous {
            Some(prev) => log::info!("active step {prev} -> {current}"),
            None => log::info!("active step {current}"),
        }
    }

    fn set_highlight(&mut self, decoration_id: &str, highlighted: bool) {
        if highlighted {
            log::info!("highlight {decoration_id}");
        } else {
            log::debug!("unhighlight {decoration_id}");
        }
    }
}
