//! Input handling: event types, bindable actions, and the input processor
//! that converts raw presentation events into navigation commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into navigation commands.
pub mod processor;

pub use event::InputEvent;
pub use processor::InputProcessor;
use serde::{Deserialize, Serialize};

use crate::navigation::Direction;

/// Navigation actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_right = "KeyL"
/// page_up = "PageUp"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// One cell left.
    MoveLeft,
    /// One cell right.
    MoveRight,
    /// One cell up.
    MoveUp,
    /// One cell down.
    MoveDown,
    /// One layer toward the viewer.
    PageUp,
    /// One layer away from the viewer.
    PageDown,
}

impl KeyAction {
    /// Every bindable action.
    pub const ALL: [Self; 6] = [
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::PageUp,
        Self::PageDown,
    ];

    /// Grid direction this action moves in.
    #[must_use]
    pub fn to_direction(self) -> Direction {
        match self {
            Self::MoveLeft => Direction::Left,
            Self::MoveRight => Direction::Right,
            Self::MoveUp => Direction::Up,
            Self::MoveDown => Direction::Down,
            Self::PageUp => Direction::PageUp,
            Self::PageDown => Direction::PageDown,
        }
    }
}
