//! Session options with TOML file support.
//!
//! Key bindings and deep-link publishing are consolidated here. Options
//! serialize to/from TOML; every section is `#[serde(default)]` so a file
//! that only overrides `[deep_link]` works.

mod deep_link;
mod keybindings;

use std::path::Path;

pub use deep_link::DeepLinkOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StageError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Deep-link publishing options.
    pub deep_link: DeepLinkOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`StageError::OptionsParse`] if the text is not valid options TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, StageError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| StageError::OptionsParse(e.to_string()))?;
        options.keybindings.fill_defaults();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`StageError::Io`] if the file cannot be read, or
    /// [`StageError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, StageError> {
        let content = std::fs::read_to_string(path).map_err(StageError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`StageError::OptionsParse`] if serialization fails, or
    /// [`StageError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StageError::Io)?;
        }
        std::fs::write(path, content).map_err(StageError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[deep_link]
enabled = false
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert!(!opts.deep_link.enabled);
        assert_eq!(opts.keybindings, KeybindingOptions::default());
    }

    #[test]
    fn partial_keybindings_keep_other_defaults() {
        let toml_str = r#"
[keybindings.bindings]
move_right = "KeyL"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyL"), Some(KeyAction::MoveRight));
        assert_eq!(opts.keybindings.lookup("ArrowRight"), None);
        assert_eq!(
            opts.keybindings.lookup("ArrowLeft"),
            Some(KeyAction::MoveLeft)
        );
        assert_eq!(opts.keybindings.key_for(KeyAction::PageUp), Some("PageUp"));
    }

    #[test]
    fn rebinding_onto_a_default_key_wins() {
        let toml_str = r#"
[keybindings.bindings]
move_right = "ArrowLeft"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowLeft"),
            Some(KeyAction::MoveRight)
        );
        assert_eq!(opts.keybindings.key_for(KeyAction::MoveLeft), None);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("ArrowDown"),
            Some(KeyAction::MoveDown)
        );
        assert_eq!(
            opts.keybindings.lookup("PageUp"),
            Some(KeyAction::PageUp)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
        for action in KeyAction::ALL {
            assert!(opts.keybindings.key_for(action).is_some());
        }
    }

    #[test]
    fn invalid_toml_is_an_options_error() {
        let err = Options::from_toml_str("deep_link = 3").unwrap_err();
        assert!(matches!(err, StageError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("stagegrid-options-{}", std::process::id()));
        let path = dir.join("options.toml");
        let opts = Options {
            deep_link: DeepLinkOptions { enabled: false },
            ..Options::default()
        };
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("/nonexistent/stagegrid/options.toml");
        assert!(matches!(Options::load(path), Err(StageError::Io(_))));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("deep_link"));
        assert!(!props.contains_key("keybindings"));

        let deep_link = &props["deep_link"]["properties"];
        assert!(deep_link.get("enabled").is_some());
    }
}
