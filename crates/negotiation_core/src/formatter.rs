//! Formatter - The canonical prompt layout shared by training and inference
//!
//! Layout:
//! ```text
//! 판매 상품: {title}
//! 상품 설명: {description}
//! {label}: {utterance}<sep>{label}: {utterance}<sep>
//! ```
//! The trailing separator is always present so the model sees the same
//! next-turn cue whether or not any turns exist.

use crate::dialogue::{Scenario, Turn};
use crate::error::{FormatError, Result};
use crate::event::{Event, PRICE_FIELD};

/// Turn-boundary marker the model was trained on.
pub const SEPARATOR: &str = "<sep>";

const TITLE_LABEL: &str = "판매 상품";
const DESCRIPTION_LABEL: &str = "상품 설명";

/// Render a scenario and turn history as one model prompt.
pub fn format_dialogue(context: &Scenario, turns: &[Turn]) -> String {
    let header = format!(
        "{}: {}\n{}: {}",
        TITLE_LABEL, context.title, DESCRIPTION_LABEL, context.description
    );
    let dialogue = turns
        .iter()
        .map(Turn::render)
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    format!("{}\n{}{}", header, dialogue, SEPARATOR)
}

/// Derive the turn sequence of a recorded dialogue.
///
/// With `use_price` every action must carry a `"price"` annotation; the first
/// action without one fails the whole derivation.
pub fn event_turns(event: &Event, use_price: bool) -> Result<Vec<Turn>> {
    event
        .events()
        .iter()
        .enumerate()
        .map(|(index, action)| -> Result<Turn> {
            let text = if use_price {
                action
                    .price()
                    .map(|parsed| parsed.utterance.clone())
                    .ok_or_else(|| FormatError::MissingField {
                        index,
                        field: PRICE_FIELD.to_string(),
                    })?
            } else {
                action.event.clone()
            };
            Ok(Turn::new(action.agent, text))
        })
        .collect()
}

/// Format a recorded dialogue exactly as a live chat with the same turns.
pub fn format_event(event: &Event, use_price: bool) -> Result<String> {
    let turns = event_turns(event, use_price)?;
    log::trace!(
        "Formatting recorded dialogue '{}' with {} turns",
        event.scenario.title,
        turns.len()
    );
    Ok(format_dialogue(&event.scenario, &turns))
}

/// [`format_event`] with price-annotated utterances, the dataset default.
pub fn format_event_default(event: &Event) -> Result<String> {
    format_event(event, true)
}
