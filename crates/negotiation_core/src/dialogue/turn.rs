use serde::{Deserialize, Serialize};

use super::speaker::Speaker;

/// One utterance attributed to a speaker.
///
/// The utterance is stored as given; surrounding whitespace is stripped when
/// the turn is rendered.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub utterance: String,
}

impl Turn {
    pub fn new(speaker: Speaker, utterance: impl Into<String>) -> Self {
        Self {
            speaker,
            utterance: utterance.into(),
        }
    }

    pub fn buyer(utterance: impl Into<String>) -> Self {
        Self::new(Speaker::Buyer, utterance)
    }

    pub fn seller(utterance: impl Into<String>) -> Self {
        Self::new(Speaker::Seller, utterance)
    }

    /// Render as `"{label}: {utterance}"` with the utterance trimmed.
    pub fn render(&self) -> String {
        format!("{}: {}", self.speaker.label(), self.utterance.trim())
    }
}

impl From<(Speaker, String)> for Turn {
    fn from((speaker, utterance): (Speaker, String)) -> Self {
        Self::new(speaker, utterance)
    }
}

impl From<(Speaker, &str)> for Turn {
    fn from((speaker, utterance): (Speaker, &str)) -> Self {
        Self::new(speaker, utterance)
    }
}
