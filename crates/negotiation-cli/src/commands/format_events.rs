//! Build a training corpus from recorded dialogues.
//!
//! Input is JSON Lines, one `Event` per line. Output is one JSON string per
//! line holding the formatted prompt, so embedded newlines survive.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use negotiation_core::{format_event, Event};

#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Use the price-annotated utterance instead of the raw action
    pub use_price: bool,
    /// Log and skip records that fail instead of aborting
    pub skip_invalid: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            use_price: true,
            skip_invalid: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatStats {
    pub written: usize,
    pub skipped: usize,
}

pub fn format_events<R, W>(reader: R, mut writer: W, options: FormatOptions) -> Result<FormatStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = FormatStats::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }

        let prompt = Event::from_json_line(&line)
            .map_err(anyhow::Error::from)
            .and_then(|event| format_event(&event, options.use_price).map_err(anyhow::Error::from));

        match prompt {
            Ok(prompt) => {
                serde_json::to_writer(&mut writer, &prompt)?;
                writer.write_all(b"\n")?;
                stats.written += 1;
            }
            Err(e) if options.skip_invalid => {
                log::warn!("Skipping record on line {}: {}", line_no, e);
                stats.skipped += 1;
            }
            Err(e) => return Err(e.context(format!("Invalid record on line {}", line_no))),
        }
    }

    writer.flush()?;
    log::info!(
        "Formatted {} dialogues ({} skipped)",
        stats.written,
        stats.skipped
    );
    Ok(stats)
}
