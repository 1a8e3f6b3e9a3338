//! Navigation State Machine.
//!
//! [`Navigator`] owns the single [`NavigationState`] of a presentation
//! session together with its collaborators (renderer, scheduler, history),
//! and is the only place that state changes. Before the first selection no
//! step is active; after it exactly one is, and selecting the active step
//! again is rejected rather than re-animated.
//!
//! Camera moves are split over two layers. The viewport carries scale, the
//! canvas carries rotation and translation. Zooming in, the canvas moves
//! first and the viewport scales half a second later; zooming out, the
//! order flips so the outgoing step shrinks before the world swings round.

/// Directions and commands.
pub mod command;
mod locate;
/// Renderer seam.
pub mod renderer;
/// Deferred task scheduling.
pub mod scheduler;
mod select;
mod tasks;

#[cfg(test)]
pub(crate) mod test_support;

use std::time::Duration;

pub use command::{Direction, NavCommand};
pub use renderer::{EntityRef, Layer, LogRenderer, Renderer, TransformRequest};
pub use scheduler::{ScheduledTask, Scheduler, TimerToken, Timeline};

use crate::deck::{Deck, Step};
use crate::deep_link::{self, DeepLinkResolver, History};
use crate::error::NavigationError;
use crate::options::Options;
use crate::transform::{compose, Transform3D};

/// Duration of every camera transition after the first selection.
pub const TRANSITION_DURATION: Duration = Duration::from_secs(1);
/// Delay of the second camera phase.
pub const PHASE_DELAY: Duration = Duration::from_millis(500);
/// How long a decoration stays highlighted after its step activates.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(700);
/// Delay between activating a step and following its auto-advance.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_secs(1);
/// Viewport perspective depth at scale 1, in pixels.
pub const BASE_PERSPECTIVE: f32 = 1000.0;

/// Mutable state of one presentation session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    active_step: Option<String>,
    camera: Transform3D,
    epoch: u64,
    highlight_epoch: Option<u64>,
    viewport_in_flight: bool,
    canvas_in_flight: bool,
}

impl NavigationState {
    /// Identifier of the active step; `None` before the first selection.
    #[must_use]
    pub fn active_step(&self) -> Option<&str> {
        self.active_step.as_deref()
    }

    /// Camera transform most recently applied to the viewport/canvas pair.
    #[must_use]
    pub fn camera(&self) -> &Transform3D {
        &self.camera
    }

    /// Number of successful selections so far.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Owns navigation state and drives the renderer, scheduler and history.
pub struct Navigator<R, S = Timeline, H = deep_link::MemoryHistory> {
    deck: Deck,
    state: NavigationState,
    renderer: R,
    scheduler: S,
    deep_link: DeepLinkResolver<H>,
}

impl<R: Renderer, S: Scheduler, H: History> Navigator<R, S, H> {
    /// Navigator over `deck` with no active step and an identity camera.
    #[must_use]
    pub fn new(deck: Deck, renderer: R, scheduler: S, history: H) -> Self {
        Self {
            deck,
            state: NavigationState::default(),
            renderer,
            scheduler,
            deep_link: DeepLinkResolver::new(history),
        }
    }

    /// Like [`new`](Self::new), configured from `options`.
    #[must_use]
    pub fn with_options(
        deck: Deck,
        renderer: R,
        scheduler: S,
        history: H,
        options: &Options,
    ) -> Self {
        let mut navigator = Self::new(deck, renderer, scheduler, history);
        navigator.deep_link.set_enabled(options.deep_link.enabled);
        navigator
    }

    /// Place every step and decoration, then select the step named by
    /// `fragment` or, if it does not resolve, the first step.
    ///
    /// # Errors
    ///
    /// [`NavigationError::EmptyDeck`] if there are no steps, or the
    /// selection's own rejection.
    pub fn start(
        &mut self,
        fragment: Option<&str>,
    ) -> Result<&Step, NavigationError> {
        for step in self.deck.steps() {
            self.renderer
                .place(EntityRef::Step(step), &compose::place(step.transform()));
        }
        for decoration in self.deck.decorations() {
            self.renderer.place(
                EntityRef::Decoration(decoration),
                &compose::place(decoration.transform()),
            );
            self.renderer.set_highlight(decoration.id(), false);
        }

        let requested = fragment
            .map(deep_link::step_id_from_fragment)
            .filter(|id| self.deck.step(id).is_some());
        let id = match requested {
            Some(id) => id.to_owned(),
            None => self
                .deck
                .first()
                .ok_or(NavigationError::EmptyDeck)?
                .id()
                .to_owned(),
        };
        self.select(&id)
    }

    /// Run a command from any input source.
    ///
    /// # Errors
    ///
    /// The rejection of the underlying navigation call.
    pub fn execute(&mut self, command: NavCommand) -> Result<&Step, NavigationError> {
        match command {
            NavCommand::Go(direction) => self.go(direction),
            NavCommand::Select(id) => self.select(&id),
            NavCommand::Follow(fragment) => self.on_external_change(&fragment),
        }
    }

    /// Record that the renderer finished transitioning `layer`.
    pub fn on_transition_end(&mut self, layer: Layer) {
        match layer {
            Layer::Viewport => self.state.viewport_in_flight = false,
            Layer::Canvas => self.state.canvas_in_flight = false,
        }
    }

    /// Whether either camera layer is still transitioning.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.state.viewport_in_flight || self.state.canvas_in_flight
    }

    /// Whether `decoration_id` is currently highlighted: its step is active
    /// and the highlight window opened by that activation has not closed.
    #[must_use]
    pub fn is_highlighted(&self, decoration_id: &str) -> bool {
        let Some(active) = self.state.active_step() else {
            return false;
        };
        self.state.highlight_epoch.is_some()
            && self
                .deck
                .decoration(decoration_id)
                .is_some_and(|d| d.belongs_to(active))
    }

    /// The active step, if any.
    #[must_use]
    pub fn active_step(&self) -> Option<&Step> {
        self.state.active_step().and_then(|id| self.deck.step(id))
    }

    /// Current navigation state.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The step/decoration registry.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The renderer collaborator.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer collaborator.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The scheduler collaborator.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler collaborator.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The deep-link resolver.
    #[must_use]
    pub fn deep_link(&self) -> &DeepLinkResolver<H> {
        &self.deep_link
    }

    /// The history collaborator.
    #[must_use]
    pub fn history(&self) -> &H {
        self.deep_link.history()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{navigator, step, Call};
    use super::*;
    use crate::deck::RawDecoration;
    use crate::options::DeepLinkOptions;

    #[test]
    fn start_places_everything_then_selects_first_step() {
        let mut nav = navigator(
            vec![step("a", "0,0,0"), step("b", "1,0,0")],
            vec![RawDecoration {
                id: Some("d".into()),
                scene: Some("b".into()),
                ..RawDecoration::default()
            }],
        );
        assert_eq!(nav.start(None).map(Step::id), Ok("a"));

        let calls = &nav.renderer().calls;
        assert_eq!(
            calls[..4],
            [
                Call::Place("a".into()),
                Call::Place("b".into()),
                Call::Place("d".into()),
                Call::Highlight("d".into(), false),
            ]
        );
        assert_eq!(nav.state().active_step(), Some("a"));
    }

    #[test]
    fn start_follows_a_resolvable_fragment() {
        let mut nav =
            navigator(vec![step("a", "0"), step("b", "1")], vec![]);
        assert_eq!(nav.start(Some("#/b")).map(Step::id), Ok("b"));
    }

    #[test]
    fn start_ignores_an_unknown_fragment() {
        let mut nav =
            navigator(vec![step("a", "0"), step("b", "1")], vec![]);
        assert_eq!(nav.start(Some("#/zzz")).map(Step::id), Ok("a"));
    }

    #[test]
    fn start_on_empty_deck_is_rejected() {
        let mut nav = navigator(vec![], vec![]);
        assert_eq!(nav.start(None).err(), Some(NavigationError::EmptyDeck));
        assert_eq!(nav.state().active_step(), None);
    }

    #[test]
    fn execute_dispatches_each_command_kind() {
        let mut nav = navigator(
            vec![step("a", "0,0,0"), step("b", "1,0,0"), step("c", "1,1,0")],
            vec![],
        );
        assert_eq!(
            nav.execute(NavCommand::Select("a".into())).map(Step::id),
            Ok("a")
        );
        assert_eq!(
            nav.execute(NavCommand::Go(Direction::Right)).map(Step::id),
            Ok("b")
        );
        assert_eq!(
            nav.execute(NavCommand::Follow("#c".into())).map(Step::id),
            Ok("c")
        );
    }

    #[test]
    fn transitions_stay_in_flight_until_both_layers_report() {
        let mut nav = navigator(vec![step("a", "0"), step("b", "1")], vec![]);
        let _ = nav.select("a");
        assert!(!nav.is_transitioning(), "first selection snaps");

        let _ = nav.select("b");
        assert!(nav.is_transitioning());
        nav.on_transition_end(Layer::Canvas);
        assert!(nav.is_transitioning());
        nav.on_transition_end(Layer::Viewport);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn options_can_disable_publishing() {
        let deck = test_support::deck(vec![step("a", "0")], vec![]);
        let options = Options {
            deep_link: DeepLinkOptions { enabled: false },
            ..Options::default()
        };
        let mut nav = Navigator::with_options(
            deck,
            test_support::RecordingRenderer::default(),
            Timeline::new(),
            deep_link::MemoryHistory::new(),
            &options,
        );
        let _ = nav.select("a");
        nav.advance(Duration::from_secs(5));
        assert!(nav.history().entries().is_empty());
    }
}
