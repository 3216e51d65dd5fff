pub mod commands;
pub mod logging;

pub use commands::chat::run_chat;
pub use commands::format_events::{format_events, FormatOptions, FormatStats};
