use serde::{Deserialize, Serialize};

/// Listing metadata shown to the model as prompt context.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Scenario {
    /// Item name
    pub title: String,
    /// Free-text item description
    #[serde(default)]
    pub description: String,
}

impl Scenario {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
