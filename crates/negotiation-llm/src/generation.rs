//! GenerationConfig - Sampling and decoding parameters for seller replies

use serde::{Deserialize, Serialize};

use crate::generator::{GenerationError, Result};

/// Decoding parameters handed to the generation model with every prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub num_beams: u32,
    pub do_sample: bool,
    pub early_stopping: bool,
    pub use_cache: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 128,
            temperature: 0.9,
            top_k: 100,
            top_p: 0.85,
            num_beams: 5,
            do_sample: true,
            early_stopping: true,
            use_cache: false,
        }
    }
}

impl GenerationConfig {
    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Reject parameter combinations no decoder accepts.
    pub fn validate(&self) -> Result<()> {
        if self.max_new_tokens == 0 {
            return Err(GenerationError::InvalidConfig(
                "max_new_tokens must be positive".to_string(),
            ));
        }
        if !(self.temperature > 0.0) {
            return Err(GenerationError::InvalidConfig(format!(
                "temperature must be positive, got {}",
                self.temperature
            )));
        }
        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(GenerationError::InvalidConfig(format!(
                "top_p must be in (0, 1], got {}",
                self.top_p
            )));
        }
        if self.num_beams == 0 {
            return Err(GenerationError::InvalidConfig(
                "num_beams must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
