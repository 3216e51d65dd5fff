use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::generation::GenerationConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the generation endpoint
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Use the echo generator instead of the endpoint
    #[serde(default)]
    pub offline: bool,
    #[serde(default)]
    pub generation: GenerationConfig,
}

const CONFIG_FILE_PATH: &str = "config.toml";

fn negotiation_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".negotiation")
}

fn negotiation_config_json_path() -> PathBuf {
    negotiation_dir().join("config.json")
}

fn parse_bool_env(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

impl Settings {
    /// Load from the user config dir or `./config.toml`, then apply
    /// `GENERATION_*` environment overrides.
    pub fn new() -> Self {
        let mut settings =
            Self::load_from(&negotiation_config_json_path(), Path::new(CONFIG_FILE_PATH));
        settings.apply_env(|key| std::env::var(key).ok());
        settings
    }

    /// JSON file wins over TOML; unreadable or malformed files are skipped.
    pub fn load_from(json_path: &Path, toml_path: &Path) -> Self {
        if json_path.exists() {
            match std::fs::read_to_string(json_path)
                .map_err(|e| e.to_string())
                .and_then(|content| {
                    serde_json::from_str::<Settings>(&content).map_err(|e| e.to_string())
                }) {
                Ok(settings) => return settings,
                Err(e) => log::warn!("Ignoring config {}: {}", json_path.display(), e),
            }
        }

        if toml_path.exists() {
            match std::fs::read_to_string(toml_path)
                .map_err(|e| e.to_string())
                .and_then(|content| toml::from_str::<Settings>(&content).map_err(|e| e.to_string()))
            {
                Ok(settings) => return settings,
                Err(e) => log::warn!("Ignoring config {}: {}", toml_path.display(), e),
            }
        }

        Self::default()
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("GENERATION_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }
        if let Some(api_key) = lookup("GENERATION_API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Some(offline) = lookup("GENERATION_OFFLINE") {
            self.offline = parse_bool_env(&offline);
        }
        if let Some(value) = lookup("GENERATION_MAX_NEW_TOKENS") {
            match value.trim().parse() {
                Ok(n) => self.generation.max_new_tokens = n,
                Err(_) => log::warn!("Ignoring GENERATION_MAX_NEW_TOKENS={:?}", value),
            }
        }
        if let Some(value) = lookup("GENERATION_TEMPERATURE") {
            match value.trim().parse() {
                Ok(t) => self.generation.temperature = t,
                Err(_) => log::warn!("Ignoring GENERATION_TEMPERATURE={:?}", value),
            }
        }
    }
}
