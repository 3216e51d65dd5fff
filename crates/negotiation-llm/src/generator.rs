use async_trait::async_trait;
use negotiation_core::{FormatError, Speaker, SEPARATOR};
use thiserror::Error;

use crate::generation::GenerationConfig;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid generation config: {0}")]
    InvalidConfig(String),

    #[error("Prompt formatting error: {0}")]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, GenerationError>;

/// Text-generation capability: prompt plus decoding parameters in,
/// continuation text out.
///
/// Callers receive a generator explicitly instead of reaching for a
/// process-wide model handle.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String>;

    /// Short identifier used in logs
    fn name(&self) -> &str {
        "generator"
    }
}

#[async_trait]
impl<G: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<G> {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        (**self).generate(prompt, config).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Reduce raw model output to one seller utterance.
///
/// Keeps the text before the first separator and drops a leading seller label
/// the model may echo from the prompt layout.
pub fn clean_reply(raw: &str) -> String {
    let first = raw.split(SEPARATOR).next().unwrap_or_default().trim();
    let unlabelled = first
        .strip_prefix(Speaker::Seller.label())
        .and_then(|rest| rest.trim_start().strip_prefix(':'))
        .unwrap_or(first);
    unlabelled.trim().to_string()
}
