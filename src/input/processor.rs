//! Converts raw presentation events into navigation commands.
//!
//! The `InputProcessor` owns the key-binding map. It is the only thing that
//! sits between raw events and the navigator's
//! [`execute`](crate::navigation::Navigator::execute) method.

use super::event::InputEvent;
use crate::deep_link;
use crate::navigation::NavCommand;
use crate::options::KeybindingOptions;

/// Converts raw events into [`NavCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     let _ = navigator.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self { key_bindings }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    ///
    /// Call [`KeybindingOptions::rebuild_reverse_map`] after editing.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key(&self, key: &str) -> Option<NavCommand> {
        self.key_bindings
            .lookup(key)
            .map(|action| NavCommand::Go(action.to_direction()))
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// Links only navigate when they point inside the presentation (start
    /// with `#`); anything else is left to whoever hosts the presentation.
    #[must_use]
    pub fn handle_event(&self, event: InputEvent) -> Option<NavCommand> {
        match event {
            InputEvent::KeyPressed { key } => self.handle_key(&key),
            InputEvent::LinkActivated { href } => href
                .starts_with('#')
                .then(|| {
                    NavCommand::Select(
                        deep_link::step_id_from_fragment(&href).to_owned(),
                    )
                }),
            InputEvent::StepClicked { id } => Some(NavCommand::Select(id)),
        }
    }
}
