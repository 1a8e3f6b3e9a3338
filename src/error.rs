//! Crate-level error types.

use std::fmt;

use crate::deck::GridLocation;

/// Errors produced while loading decks and options.
#[derive(Debug)]
pub enum StageError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Deck manifest (TOML or JSON) parsing failure.
    ManifestParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Two steps were authored with the same identifier.
    DuplicateStepId(String),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ManifestParse(msg) => {
                write!(f, "deck manifest parse error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::DuplicateStepId(id) => {
                write!(f, "duplicate step id: {id}")
            }
        }
    }
}

impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// A transform that cannot be inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformError {
    /// Scale was zero, negative, not finite, or too small to invert.
    NonPositiveScale(f32),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScale(s) => {
                write!(f, "invalid transform: scale {s} is not invertible")
            }
        }
    }
}

impl std::error::Error for TransformError {}

/// Why a navigation request was rejected.
///
/// Rejections never touch navigation state and never reach the renderer,
/// history or scheduler.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationError {
    /// No step carries the requested identifier.
    StepNotFound(String),
    /// No step is authored at the requested grid location.
    LocationNotFound(GridLocation),
    /// Relative navigation before the first selection.
    NoActiveStep,
    /// The requested step is already active.
    RedundantSelection(String),
    /// The deck has no steps to start from.
    EmptyDeck,
}

impl NavigationError {
    /// Whether this rejection is the idempotent "already there" case rather
    /// than a failed lookup.
    #[must_use]
    pub fn is_redundant(&self) -> bool {
        matches!(self, Self::RedundantSelection(_))
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StepNotFound(id) => write!(f, "no step with id {id:?}"),
            Self::LocationNotFound(loc) => {
                write!(f, "no step at grid location {loc}")
            }
            Self::NoActiveStep => write!(f, "no step is active yet"),
            Self::RedundantSelection(id) => {
                write!(f, "step {id:?} is already active")
            }
            Self::EmptyDeck => write!(f, "deck has no steps"),
        }
    }
}

impl std::error::Error for NavigationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_redundant_selection_is_redundant() {
        assert!(NavigationError::RedundantSelection("a".into()).is_redundant());
        assert!(!NavigationError::NoActiveStep.is_redundant());
        assert!(!NavigationError::StepNotFound("a".into()).is_redundant());
    }

    #[test]
    fn display_names_the_location() {
        let err = NavigationError::LocationNotFound(GridLocation::new(
            1.0, -2.0, 0.5,
        ));
        assert_eq!(err.to_string(), "no step at grid location (1, -2, 0.5)");
    }
}
