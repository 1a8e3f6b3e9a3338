use super::GridLocation;
use crate::transform::Transform3D;

/// A positioned, navigable unit of the presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub(crate) id: String,
    pub(crate) transform: Transform3D,
    pub(crate) location: GridLocation,
    pub(crate) exit_override: Option<GridLocation>,
    pub(crate) auto_advance: Option<GridLocation>,
}

impl Step {
    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Pixel-space placement derived from the authored attributes.
    #[must_use]
    pub fn transform(&self) -> &Transform3D {
        &self.transform
    }

    /// Authored grid cell.
    #[must_use]
    pub fn location(&self) -> GridLocation {
        self.location
    }

    /// Destination that replaces any relative navigation away from this step.
    #[must_use]
    pub fn exit_override(&self) -> Option<GridLocation> {
        self.exit_override
    }

    /// Location navigated to automatically after activation.
    #[must_use]
    pub fn auto_advance(&self) -> Option<GridLocation> {
        self.auto_advance
    }
}

/// A visual element highlighted briefly when its step becomes active.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub(crate) id: String,
    pub(crate) transform: Transform3D,
    pub(crate) associated_step: Option<String>,
}

impl Decoration {
    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Pixel-space placement derived from the authored attributes.
    #[must_use]
    pub fn transform(&self) -> &Transform3D {
        &self.transform
    }

    /// Identifier of the step this decoration belongs to, if any.
    #[must_use]
    pub fn associated_step(&self) -> Option<&str> {
        self.associated_step.as_deref()
    }

    /// Whether this decoration belongs to `step_id`.
    #[must_use]
    pub fn belongs_to(&self, step_id: &str) -> bool {
        self.associated_step.as_deref() == Some(step_id)
    }
}
