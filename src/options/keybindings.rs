use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveRight` → `"ArrowRight"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let mut opts = Self {
            bindings: default_bindings(),
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

fn default_bindings() -> HashMap<KeyAction, String> {
    HashMap::from([
        (KeyAction::MoveLeft, "ArrowLeft".into()),
        (KeyAction::MoveRight, "ArrowRight".into()),
        (KeyAction::MoveUp, "ArrowUp".into()),
        (KeyAction::MoveDown, "ArrowDown".into()),
        (KeyAction::PageUp, "PageUp".into()),
        (KeyAction::PageDown, "PageDown".into()),
    ])
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind every action a partial file left out to its default key, unless
    /// that key is already taken, then rebuild the reverse map.
    pub fn fill_defaults(&mut self) {
        for (action, key) in default_bindings() {
            if self.bindings.contains_key(&action)
                || self.bindings.values().any(|k| *k == key)
            {
                continue;
            }
            let _ = self.bindings.insert(action, key);
        }
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Key bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }
}
