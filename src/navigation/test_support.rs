use super::renderer::{EntityRef, Layer, Renderer, TransformRequest};
use super::{Navigator, Timeline};
use crate::deck::{Deck, DeckManifest, RawDecoration, RawStep};
use crate::deep_link::MemoryHistory;
use crate::transform::TransformDescriptor;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Place(String),
    Apply(TransformRequest),
    Active(Option<String>, String),
    Highlight(String, bool),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) calls: Vec<Call>,
}

impl RecordingRenderer {
    pub(crate) fn clear(&mut self) {
        self.calls.clear();
    }

    pub(crate) fn applied(&self, layer: Layer) -> Vec<&TransformRequest> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Apply(r) if r.layer == layer => Some(r),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn highlights(&self) -> Vec<(&str, bool)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Highlight(id, on) => Some((id.as_str(), *on)),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn place(&mut self, entity: EntityRef<'_>, _placement: &TransformDescriptor) {
        self.calls.push(Call::Place(entity.id().to_owned()));
    }

    fn apply(&mut self, request: &TransformRequest) {
        self.calls.push(Call::Apply(request.clone()));
    }

    fn set_active_step(&mut self, previous: Option<&str>, current: &str) {
        self.calls.push(Call::Active(
            previous.map(str::to_owned),
            current.to_owned(),
        ));
    }

    fn set_highlight(&mut self, decoration_id: &str, highlighted: bool) {
        self.calls
            .push(Call::Highlight(decoration_id.to_owned(), highlighted));
    }
}

pub(crate) type TestNavigator = Navigator<RecordingRenderer, Timeline, MemoryHistory>;

pub(crate) fn step(id: &str, location: &str) -> RawStep {
    RawStep {
        id: Some(id.into()),
        location: Some(location.into()),
        ..RawStep::default()
    }
}

pub(crate) fn decoration(id: &str, scene: &str) -> RawDecoration {
    RawDecoration {
        id: Some(id.into()),
        scene: Some(scene.into()),
        ..RawDecoration::default()
    }
}

pub(crate) fn deck(steps: Vec<RawStep>, decorations: Vec<RawDecoration>) -> Deck {
    match Deck::build(&DeckManifest { steps, decorations }) {
        Ok(deck) => deck,
        Err(e) => panic!("test deck failed to build: {e}"),
    }
}

pub(crate) fn navigator(
    steps: Vec<RawStep>,
    decorations: Vec<RawDecoration>,
) -> TestNavigator {
    Navigator::new(
        deck(steps, decorations),
        RecordingRenderer::default(),
        Timeline::new(),
        MemoryHistory::new(),
    )
}
