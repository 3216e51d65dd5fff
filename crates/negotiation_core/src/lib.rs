//! negotiation_core - Dialogue types and prompt formatting
//!
//! This crate owns the one transformation every other part of the simulator
//! depends on: turning a listing scenario plus a turn history into the flat
//! prompt string the generation model consumes.
//! - `dialogue` - Speaker, Turn and Scenario types
//! - `event` - Recorded dialogues from the training dataset
//! - `formatter` - The canonical `<sep>` prompt layout
//! - `transcript` - Accumulated live-chat text and its turn parser

pub mod dialogue;
pub mod error;
pub mod event;
pub mod formatter;
pub mod transcript;

// Re-export commonly used types
pub use dialogue::{Scenario, Speaker, Turn};
pub use error::{FormatError, Result};
pub use event::{Event, ParsedUtterance, RecordedAction};
pub use formatter::{
    event_turns, format_dialogue, format_event, format_event_default, SEPARATOR,
};
pub use transcript::{ChatTranscript, END_WORD};
