//! Application configuration handling.
//!
//! Configuration is an optional JSON file; every field has a default so
//! the application runs with no file at all. The advisor API key is
//! deliberately NOT part of the file — it comes from the environment and
//! is handed to the chat client at construction time.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SkinTuiError};

/// Default completions endpoint (OpenAI-compatible).
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model for advisor replies.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Fixed system prompt sent with every advisor request.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful skincare assistant. \
Provide personalized product recommendations and skincare routines based on \
the product catalog.";

/// Settings for the chat relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub system_prompt: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path to the product catalog JSON, relative to the working directory.
    pub catalog_path: PathBuf,
    pub chat: ChatSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("product-data.json"),
            chat: ChatSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SkinTuiError::config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            SkinTuiError::config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        Ok(config)
    }

    /// Load from an explicit path, or fall back to defaults when none is
    /// given. An explicit path that fails to load or validate is an error;
    /// silent defaults there would mask operator mistakes.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(SkinTuiError::config("catalog path must not be empty"));
        }

        if self.chat.model.trim().is_empty() {
            return Err(SkinTuiError::config("chat model must not be empty"));
        }

        if !self.chat.endpoint.starts_with("http://") && !self.chat.endpoint.starts_with("https://")
        {
            return Err(SkinTuiError::config(
                "chat endpoint must start with http:// or https://",
            ));
        }

        if !(0.0..=2.0).contains(&self.chat.temperature) {
            return Err(SkinTuiError::config(
                "chat temperature must be between 0.0 and 2.0",
            ));
        }

        Ok(())
    }
}
