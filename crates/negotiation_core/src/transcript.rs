//! ChatTranscript - Live chat text as the web layer persists it
//!
//! A chat is stored as accumulated lines of the form `"{label}:{text}\n"`.
//! Further lines of a multi-line utterance are stored tab-indented so they can
//! never be read as a new labelled turn. This adapter appends to that text and
//! parses it back into turns for the formatter.

use serde::{Deserialize, Serialize};

use crate::dialogue::{Speaker, Turn};
use crate::error::{FormatError, Result};

/// Buyer input that closes a negotiation.
pub const END_WORD: &str = "끝";

/// Prefix marking a stored line as the continuation of the previous turn.
const CONTINUATION: char = '\t';

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatTranscript {
    content: String,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap previously persisted chat text.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Append one turn as a labelled line, indenting any further lines.
    pub fn push(&mut self, speaker: Speaker, text: &str) {
        self.content.push_str(speaker.label());
        self.content.push(':');
        for (idx, line) in text.split('\n').enumerate() {
            if idx > 0 {
                self.content.push('\n');
                self.content.push(CONTINUATION);
            }
            self.content.push_str(line);
        }
        self.content.push('\n');
    }

    /// Number of non-blank turn lines; continuation lines are not counted.
    pub fn line_count(&self) -> usize {
        self.content
            .lines()
            .filter(|line| !line.starts_with(CONTINUATION) && !line.trim().is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn turns(&self) -> Result<Vec<Turn>> {
        Self::parse(&self.content)
    }

    /// Parse transcript text into turns.
    ///
    /// A tab-indented line continues the previous turn verbatim. Otherwise a
    /// line opening with a known label and `:` starts a new turn, blank lines
    /// are skipped, and any other line continues the previous turn.
    pub fn parse(content: &str) -> Result<Vec<Turn>> {
        let mut turns: Vec<Turn> = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let continued = match line.strip_prefix(CONTINUATION) {
                Some(rest) => rest,
                None if line.trim().is_empty() => continue,
                None => match split_label(line) {
                    Some((speaker, text)) => {
                        turns.push(Turn::new(speaker, text));
                        continue;
                    }
                    None => line,
                },
            };

            match turns.last_mut() {
                Some(turn) => {
                    turn.utterance.push('\n');
                    turn.utterance.push_str(continued);
                }
                None => return Err(FormatError::UnattributedLine { line: idx + 1 }),
            }
        }

        Ok(turns)
    }
}

fn split_label(line: &str) -> Option<(Speaker, &str)> {
    let (label, text) = line.split_once(':')?;
    Speaker::from_label(label.trim()).map(|speaker| (speaker, text))
}
