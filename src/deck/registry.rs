use glam::Vec3;
use rustc_hash::{FxHashMap, FxHashSet};

use super::entity::{Decoration, Step};
use super::location::{parse_number, GridLocation};
use super::source::{Attribute, DeckManifest, RawDecoration, RawStep};
use crate::error::StageError;
use crate::transform::Transform3D;

/// Immutable registry of every step and decoration, in document order.
///
/// Built once from a [`DeckManifest`]; there is no incremental update.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    steps: Vec<Step>,
    decorations: Vec<Decoration>,
    step_index: FxHashMap<String, usize>,
}

impl Deck {
    /// Parse every raw record into steps and decorations.
    ///
    /// Missing ids are synthesized as `step-N` / `artefact-N` (1-based
    /// document index). A synthesized step id that is already taken gets a
    /// `-2`, `-3`, ... suffix.
    ///
    /// # Errors
    ///
    /// [`StageError::DuplicateStepId`] if two steps are authored with the
    /// same id.
    pub fn build(manifest: &DeckManifest) -> Result<Self, StageError> {
        let mut steps = Vec::with_capacity(manifest.steps.len());
        let mut step_index: FxHashMap<String, usize> = FxHashMap::default();
        let authored: FxHashSet<&str> = manifest
            .steps
            .iter()
            .filter_map(|raw| raw.id.as_deref())
            .filter(|id| !id.is_empty())
            .collect();

        for (idx, raw) in manifest.steps.iter().enumerate() {
            let id = authored_id(raw.id.as_deref()).unwrap_or_else(|| {
                synthesized_step_id(idx, |id| {
                    authored.contains(id) || step_index.contains_key(id)
                })
            });
            let step = build_step(id, raw);
            if step_index.insert(step.id.clone(), idx).is_some() {
                return Err(StageError::DuplicateStepId(step.id));
            }
            steps.push(step);
        }

        let decorations: Vec<Decoration> = manifest
            .decorations
            .iter()
            .enumerate()
            .map(|(idx, raw)| build_decoration(idx, raw))
            .collect();

        for decoration in &decorations {
            if let Some(scene) = decoration.associated_step() {
                if !step_index.contains_key(scene) {
                    log::warn!(
                        "decoration {} refers to unknown step {scene:?}",
                        decoration.id()
                    );
                }
            }
        }

        log::debug!(
            "deck built: {} steps, {} decorations",
            steps.len(),
            decorations.len()
        );

        Ok(Self {
            steps,
            decorations,
            step_index,
        })
    }

    /// All steps in document order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// All decorations in document order.
    #[must_use]
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the deck has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step by identifier.
    #[must_use]
    pub fn step(&self, id: &str) -> Option<&Step> {
        self.step_index.get(id).map(|&idx| &self.steps[idx])
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.step_index.get(id).copied()
    }

    /// First step in document order.
    #[must_use]
    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    /// First step, in document order, authored at `location`.
    #[must_use]
    pub fn step_at(&self, location: GridLocation) -> Option<&Step> {
        self.steps.iter().find(|s| s.location == location)
    }

    /// Decoration by identifier.
    #[must_use]
    pub fn decoration(&self, id: &str) -> Option<&Decoration> {
        self.decorations.iter().find(|d| d.id == id)
    }
}

fn build_step(id: String, raw: &RawStep) -> Step {
    let location = raw
        .location
        .as_ref()
        .and_then(location_attr)
        .unwrap_or(GridLocation::ORIGIN);
    let transform = Transform3D::new(
        location.to_pixels(),
        rotation(
            raw.rotate_x.as_ref(),
            raw.rotate_y.as_ref(),
            raw.rotate_z.as_ref(),
            raw.rotate.as_ref(),
        ),
        number(raw.scale.as_ref(), 1.0),
    );

    Step {
        id,
        transform,
        location,
        exit_override: raw.exit.as_ref().and_then(location_attr),
        auto_advance: raw.auto.as_ref().and_then(location_attr),
    }
}

fn build_decoration(idx: usize, raw: &RawDecoration) -> Decoration {
    let id = authored_id(raw.id.as_deref())
        .unwrap_or_else(|| format!("artefact-{}", idx + 1));
    let location = raw
        .location
        .as_ref()
        .and_then(location_attr)
        .unwrap_or(GridLocation::ORIGIN);
    let transform = Transform3D::new(
        location.to_pixels(),
        rotation(
            raw.rotate_x.as_ref(),
            raw.rotate_y.as_ref(),
            raw.rotate_z.as_ref(),
            raw.rotate.as_ref(),
        ),
        number(raw.scale.as_ref(), 1.0),
    );

    Decoration {
        id,
        transform,
        associated_step: raw.scene.clone().filter(|s| !s.is_empty()),
    }
}

fn location_attr(attr: &Attribute) -> Option<GridLocation> {
    GridLocation::parse(&attr.as_text())
}

fn synthesized_step_id(idx: usize, taken: impl Fn(&str) -> bool) -> String {
    let base = format!("step-{}", idx + 1);
    if !taken(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken(&candidate) {
            log::warn!("id {base} is already taken, step {} is {candidate}", idx + 1);
            return candidate;
        }
        n += 1;
    }
}

fn authored_id(id: Option<&str>) -> Option<String> {
    id.filter(|s| !s.is_empty()).map(str::to_owned)
}

/// `rotateZ` wins over the legacy `rotate`.
fn rotation(
    x: Option<&Attribute>,
    y: Option<&Attribute>,
    z: Option<&Attribute>,
    legacy: Option<&Attribute>,
) -> Vec3 {
    let z = present(z).or_else(|| present(legacy));
    Vec3::new(number(x, 0.0), number(y, 0.0), number(z, 0.0))
}

fn present(attr: Option<&Attribute>) -> Option<&Attribute> {
    attr.filter(|a| !a.as_text().trim().is_empty())
}

fn number(attr: Option<&Attribute>, default: f32) -> f32 {
    let Some(attr) = present(attr) else {
        return default;
    };
    let text = attr.as_text();
    parse_number(&text).unwrap_or_else(|| {
        log::warn!("unparsable attribute value {text:?}, using {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_step(id: &str, location: &str) -> RawStep {
        RawStep {
            id: Some(id.into()),
            location: Some(location.into()),
            ..RawStep::default()
        }
    }

    #[test]
    fn defaults_for_bare_step() {
        let deck = Deck::build(&DeckManifest {
            steps: vec![RawStep::default()],
            decorations: vec![],
        })
        .unwrap();
        let step = &deck.steps()[0];
        assert_eq!(step.id(), "step-1");
        assert_eq!(step.location(), GridLocation::ORIGIN);
        assert_eq!(step.transform().translate, Vec3::ZERO);
        assert_eq!(step.transform().rotate, Vec3::ZERO);
        assert_eq!(step.transform().scale, 1.0);
        assert_eq!(step.exit_override(), None);
        assert_eq!(step.auto_advance(), None);
    }

    #[test]
    fn spatial_attributes_are_parsed() {
        let deck = Deck::build(&DeckManifest {
            steps: vec![RawStep {
                id: Some("deep".into()),
                location: Some("1,2,3".into()),
                rotate_x: Some("10".into()),
                rotate_y: Some(Attribute::Number(-20.0)),
                rotate: Some("30".into()),
                scale: Some("4".into()),
                exit: Some("2,0,0".into()),
                auto: Some("0,0,1".into()),
                ..RawStep::default()
            }],
            decorations: vec![],
        })
        .unwrap();
        let step = deck.step("deep").unwrap();
        assert_eq!(step.location(), GridLocation::new(1.0, 2.0, 3.0));
        assert_eq!(
            step.transform().translate,
            Vec3::new(1000.0, -3000.0, -2000.0)
        );
        assert_eq!(step.transform().rotate, Vec3::new(10.0, -20.0, 30.0));
        assert_eq!(step.transform().scale, 4.0);
        assert_eq!(step.exit_override(), Some(GridLocation::new(2.0, 0.0, 0.0)));
        assert_eq!(step.auto_advance(), Some(GridLocation::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn rotate_z_beats_legacy_rotate() {
        let deck = Deck::build(&DeckManifest {
            steps: vec![
                RawStep {
                    rotate_z: Some("45".into()),
                    rotate: Some("90".into()),
                    ..RawStep::default()
                },
                RawStep {
                    rotate_z: Some("".into()),
                    rotate: Some("90".into()),
                    location: Some("1".into()),
                    ..RawStep::default()
                },
            ],
            decorations: vec![],
        })
        .unwrap();
        assert_eq!(deck.steps()[0].transform().rotate.z, 45.0);
        assert_eq!(deck.steps()[1].transform().rotate.z, 90.0);
    }

    #[test]
    fn bad_scale_and_rotation_fall_back() {
        let deck = Deck::build(&DeckManifest {
            steps: vec![
                RawStep {
                    scale: Some("0".into()),
                    rotate_x: Some("sideways".into()),
                    ..RawStep::default()
                },
                RawStep {
                    scale: Some("-3".into()),
                    ..RawStep::default()
                },
            ],
            decorations: vec![],
        })
        .unwrap();
        assert_eq!(deck.steps()[0].transform().scale, 1.0);
        assert_eq!(deck.steps()[0].transform().rotate.x, 0.0);
        assert_eq!(deck.steps()[1].transform().scale, 1.0);
    }

    #[test]
    fn ids_are_synthesized_by_document_index() {
        let deck = Deck::build(&DeckManifest {
            steps: vec![
                raw_step("intro", "0"),
                RawStep {
                    id: Some(String::new()),
                    ..RawStep::default()
                },
                RawStep::default(),
            ],
            decorations: vec![RawDecoration::default(), RawDecoration::default()],
        })
        .unwrap();
        let ids: Vec<&str> = deck.steps().iter().map(Step::id).collect();
        assert_eq!(ids, ["intro", "step-2", "step-3"]);
        let deco_ids: Vec<&str> =
            deck.decorations().iter().map(Decoration::id).collect();
        assert_eq!(deco_ids, ["artefact-1", "artefact-2"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Deck::build(&DeckManifest {
            steps: vec![raw_step("a", "0"), raw_step("a", "1")],
            decorations: vec![],
        })
        .unwrap_err();
        assert!(matches!(err, StageError::DuplicateStepId(id) if id == "a"));
    }

    #[test]
    fn synthesized_ids_avoid_authored_ones() {
        let deck = Deck::build(&DeckManifest {
            steps: vec![
                raw_step("step-2", "0"),
                RawStep::default(),
                RawStep::default(),
                raw_step("step-3", "3"),
            ],
            decorations: vec![],
        })
        .unwrap();
        let ids: Vec<&str> = deck.steps().iter().map(Step::id).collect();
        assert_eq!(ids, ["step-2", "step-2-2", "step-3-2", "step-3"]);
        assert_eq!(deck.step("step-2-2").map(Step::location), Some(GridLocation::ORIGIN));
    }

    #[test]
    fn decoration_scene_association() {
        let deck = Deck::build(&DeckManifest {
            steps: vec![raw_step("a", "0")],
            decorations: vec![
                RawDecoration {
                    id: Some("d1".into()),
                    scene: Some("a".into()),
                    location: Some("1,1,1".into()),
                    ..RawDecoration::default()
                },
                RawDecoration {
                    id: Some("d2".into()),
                    scene: Some(String::new()),
                    ..RawDecoration::default()
                },
            ],
        })
        .unwrap();
        let d1 = deck.decoration("d1").unwrap();
        assert!(d1.belongs_to("a"));
        assert_eq!(d1.transform().translate, Vec3::new(1000.0, -1000.0, -1000.0));
        assert_eq!(deck.decoration("d2").unwrap().associated_step(), None);
    }

    #[test]
    fn step_at_returns_first_match() {
        let deck = Deck::build(&DeckManifest {
            steps: vec![
                raw_step("a", "0,0,0"),
                raw_step("b", "1,0,0"),
                raw_step("c", "1,0,0"),
            ],
            decorations: vec![],
        })
        .unwrap();
        assert_eq!(
            deck.step_at(GridLocation::new(1.0, 0.0, 0.0)).map(Step::id),
            Some("b")
        );
        assert!(deck.step_at(GridLocation::new(5.0, 5.0, 5.0)).is_none());
        assert_eq!(deck.first().map(Step::id), Some("a"));
        assert_eq!(deck.len(), 3);
    }
}
