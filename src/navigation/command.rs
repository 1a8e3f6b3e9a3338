//! Navigation vocabulary shared by keyboard, pointer and programmatic callers.

use crate::deck::GridLocation;

/// A one-cell move on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `x - 1`
    Left,
    /// `x + 1`
    Right,
    /// `y + 1`
    Up,
    /// `y - 1`
    Down,
    /// `z + 1`
    PageUp,
    /// `z - 1`
    PageDown,
}

impl Direction {
    /// Every direction.
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
        Self::PageUp,
        Self::PageDown,
    ];

    /// `from` moved one cell along this direction's axis.
    #[must_use]
    pub fn apply(self, from: GridLocation) -> GridLocation {
        match self {
            Self::Left => from.offset(-1.0, 0.0, 0.0),
            Self::Right => from.offset(1.0, 0.0, 0.0),
            Self::Up => from.offset(0.0, 1.0, 0.0),
            Self::Down => from.offset(0.0, -1.0, 0.0),
            Self::PageUp => from.offset(0.0, 0.0, 1.0),
            Self::PageDown => from.offset(0.0, 0.0, -1.0),
        }
    }
}

/// A navigation request, however it was triggered.
#[derive(Debug, Clone, PartialEq)]
pub enum NavCommand {
    /// Move one cell from the active step.
    Go(Direction),
    /// Select a step by identifier.
    Select(String),
    /// The external location changed to this fragment.
    Follow(String),
}
