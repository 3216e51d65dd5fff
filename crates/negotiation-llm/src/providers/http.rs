use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::generation::GenerationConfig;
use crate::generator::{GenerationError, Result, TextGenerator};

/// Generator backed by a text-generation-inference style `/generate` endpoint.
pub struct HttpGenerator {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationConfig,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// Servers answer either with one object or with a batch of one.
#[derive(Deserialize)]
#[serde(untagged)]
enum GenerateResponse {
    Single(GeneratedText),
    Batch(Vec<GeneratedText>),
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Single(g) => Some(g.generated_text),
            Self::Batch(batch) => batch.into_iter().next().map(|g| g.generated_text),
        }
    }
}

impl HttpGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TextGenerator for HttpGenerator {
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        config.validate()?;

        let body = GenerateRequest {
            inputs: prompt,
            parameters: config,
        };
        log::debug!(
            "Requesting generation: prompt_chars={}, max_new_tokens={}",
            prompt.chars().count(),
            config.max_new_tokens
        );

        let mut request = self
            .client
            .post(format!("{}/generate", self.base_url))
            .json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            log::warn!("Generation endpoint returned {}: {}", status, text);
            return Err(GenerationError::Api(format!("HTTP {}: {}", status, text)));
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateResponse = serde_json::from_slice(&bytes)?;
        parsed
            .into_text()
            .ok_or_else(|| GenerationError::Api("Empty generation batch".to_string()))
    }

    fn name(&self) -> &str {
        "http"
    }
}
