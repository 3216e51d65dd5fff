//! Speaker - The two roles in a marketplace negotiation
//!
//! Each role maps to a fixed Korean label used in prompts and transcripts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label table indexed by `Speaker as usize`.
const LABELS: [&str; 2] = ["구매자", "판매자"];

/// Role of the party producing an utterance.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "SpeakerRepr")]
pub enum Speaker {
    /// The human side of the negotiation
    #[default]
    Buyer = 0,

    /// The simulated side whose turns the model generates
    Seller = 1,
}

impl Speaker {
    /// Prompt label without the trailing colon.
    pub fn label(&self) -> &'static str {
        LABELS[*self as usize]
    }

    /// Resolve a label back to its role.
    pub fn from_label(label: &str) -> Option<Self> {
        LABELS
            .iter()
            .position(|l| *l == label)
            .and_then(|idx| Self::from_index(idx as u64))
    }

    /// Dataset agent index: 0 is the buyer, 1 the seller.
    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Self::Buyer),
            1 => Some(Self::Seller),
            _ => None,
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepted wire forms: a role name or the dataset agent index.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpeakerRepr {
    Index(u64),
    Name(String),
}

impl TryFrom<SpeakerRepr> for Speaker {
    type Error = String;

    fn try_from(repr: SpeakerRepr) -> Result<Self, Self::Error> {
        match repr {
            SpeakerRepr::Index(idx) => {
                Self::from_index(idx).ok_or_else(|| format!("unknown agent index {}", idx))
            }
            SpeakerRepr::Name(name) => match name.trim().to_ascii_lowercase().as_str() {
                "buyer" => Ok(Self::Buyer),
                "seller" => Ok(Self::Seller),
                other => Self::from_label(other).ok_or_else(|| format!("unknown speaker '{}'", name)),
            },
        }
    }
}
