pub mod config;
pub mod error;
pub mod generation;
pub mod generator;
pub mod providers;
pub mod session;

pub use config::Settings;
pub use error::GenerationError;
pub use generation::GenerationConfig;
pub use generator::{clean_reply, Result, TextGenerator};
pub use providers::{EchoGenerator, HttpGenerator};
pub use session::{ChatOutcome, NegotiationSession};
