use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Deep Links", inline)]
#[serde(default)]
/// Publishing of the active step as a shareable location.
pub struct DeepLinkOptions {
    /// Publish each settled selection to the history collaborator.
    #[schemars(title = "Publish Location")]
    pub enabled: bool,
}

impl Default for DeepLinkOptions {
    fn default() -> Self {
        Self { enabled: true }
    }
}
