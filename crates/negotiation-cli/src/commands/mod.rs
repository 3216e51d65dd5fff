pub mod chat;
pub mod format_events;
