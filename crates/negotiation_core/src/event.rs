//! Event - Recorded negotiation dialogues from the training dataset
//!
//! An `Event` pairs a listing scenario with the ordered log of actions both
//! parties took. Each action keeps its raw kind plus any parsed annotations
//! (most notably the `"price"` parse carrying the normalized utterance).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dialogue::{Scenario, Speaker};

/// Annotation key holding the price-normalized utterance.
pub const PRICE_FIELD: &str = "price";

/// One parsed view of an utterance.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ParsedUtterance {
    pub utterance: String,
    /// Price mentioned in the utterance, if the parser found one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A single recorded action in a dialogue.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecordedAction {
    pub agent: Speaker,
    /// Raw action description (message text, offer, accept, ...)
    #[serde(alias = "action")]
    pub event: String,
    #[serde(default)]
    pub data: BTreeMap<String, ParsedUtterance>,
}

impl RecordedAction {
    pub fn new(agent: Speaker, event: impl Into<String>) -> Self {
        Self {
            agent,
            event: event.into(),
            data: BTreeMap::new(),
        }
    }

    /// Attach the price parse of this action's utterance.
    pub fn with_price(mut self, utterance: impl Into<String>, price: Option<f64>) -> Self {
        self.data.insert(
            PRICE_FIELD.to_string(),
            ParsedUtterance {
                utterance: utterance.into(),
                price,
            },
        );
        self
    }

    pub fn price(&self) -> Option<&ParsedUtterance> {
        self.data.get(PRICE_FIELD)
    }
}

/// A historical dialogue: scenario plus its ordered action log.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Event {
    pub scenario: Scenario,
    #[serde(default)]
    events: Vec<RecordedAction>,
}

impl Event {
    pub fn new(scenario: Scenario, events: Vec<RecordedAction>) -> Self {
        Self { scenario, events }
    }

    /// Recorded actions in dialogue order.
    pub fn events(&self) -> &[RecordedAction] {
        &self.events
    }

    /// Parse one dataset record from a JSON line.
    pub fn from_json_line(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}
