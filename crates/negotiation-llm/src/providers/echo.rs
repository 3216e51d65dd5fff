//! Echo generator
//!
//! Answers every prompt with a fixed seller line in the model's output
//! layout, without any network access. Used for offline chats and tests.

use async_trait::async_trait;
use negotiation_core::{Speaker, SEPARATOR};

use crate::generation::GenerationConfig;
use crate::generator::{Result, TextGenerator};

const DEFAULT_REPLY: &str = "네, 아직 판매 중입니다.";

pub struct EchoGenerator {
    reply: String,
}

impl EchoGenerator {
    pub fn new() -> Self {
        Self::with_reply(DEFAULT_REPLY)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for EchoGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        config.validate()?;
        log::debug!("[echo] prompt of {} chars", prompt.chars().count());
        Ok(format!("{}: {}{}", Speaker::Seller.label(), self.reply, SEPARATOR))
    }

    fn name(&self) -> &str {
        "echo"
    }
}
