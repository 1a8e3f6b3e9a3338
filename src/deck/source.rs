//! Raw authored attribute records, as supplied by the declarative source.

use std::borrow::Cow;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StageError;

/// A single authored attribute value.
///
/// Attributes are string-typed; manifests may also write bare numbers,
/// which are read as their string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attribute {
    /// Literal text, e.g. `"1,0,2"` or `"45deg"`.
    Text(String),
    /// A bare number.
    Number(f64),
}

impl Attribute {
    /// The attribute's text.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl From<&str> for Attribute {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// Authored attributes of one step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawStep {
    /// Step identifier; synthesized when absent or empty.
    pub id: Option<String>,
    /// Grid location, `"x,y,z"`.
    #[serde(alias = "loc")]
    pub location: Option<Attribute>,
    /// Rotation around X in degrees.
    pub rotate_x: Option<Attribute>,
    /// Rotation around Y in degrees.
    pub rotate_y: Option<Attribute>,
    /// Rotation around Z in degrees.
    pub rotate_z: Option<Attribute>,
    /// Legacy single rotation, used for Z when `rotateZ` is absent.
    pub rotate: Option<Attribute>,
    /// Uniform scale.
    pub scale: Option<Attribute>,
    /// Forced destination of the next relative navigation away from this step.
    pub exit: Option<Attribute>,
    /// Location to move to one second after this step becomes active.
    pub auto: Option<Attribute>,
}

/// Authored attributes of one decoration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawDecoration {
    /// Decoration identifier; synthesized when absent or empty.
    pub id: Option<String>,
    /// Grid location, `"x,y,z"`.
    #[serde(alias = "loc")]
    pub location: Option<Attribute>,
    /// Rotation around X in degrees.
    pub rotate_x: Option<Attribute>,
    /// Rotation around Y in degrees.
    pub rotate_y: Option<Attribute>,
    /// Rotation around Z in degrees.
    pub rotate_z: Option<Attribute>,
    /// Legacy single rotation, used for Z when `rotateZ` is absent.
    pub rotate: Option<Attribute>,
    /// Uniform scale.
    pub scale: Option<Attribute>,
    /// Identifier of the associated step; empty means unassociated.
    pub scene: Option<String>,
}

/// Every step and decoration of a presentation, in document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckManifest {
    /// Step records.
    pub steps: Vec<RawStep>,
    /// Decoration records.
    pub decorations: Vec<RawDecoration>,
}

impl DeckManifest {
    /// Load a manifest. Files ending in `.json` are read as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self, StageError> {
        let content = std::fs::read_to_string(path).map_err(StageError::Io)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse a TOML manifest.
    pub fn from_toml_str(content: &str) -> Result<Self, StageError> {
        toml::from_str(content)
            .map_err(|e| StageError::ManifestParse(e.to_string()))
    }

    /// Parse a JSON manifest.
    pub fn from_json_str(content: &str) -> Result<Self, StageError> {
        serde_json::from_str(content)
            .map_err(|e| StageError::ManifestParse(e.to_string()))
    }
}
