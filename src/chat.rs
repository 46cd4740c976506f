//! Chat relay to an OpenAI-style completions endpoint.
//!
//! One request per submission: POST `{model, messages, temperature}` with
//! a bearer token, read `choices[0].message.content` back. No retry, no
//! timeout, no streaming. Callers map a failed request to the fixed
//! fallback string rather than surfacing the error to the user.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ChatSettings;
use crate::error::{Result, SkinTuiError};

/// Fallback shown in place of an advisor reply when the request fails.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// One message in a completions conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

/// Client for the product advisor.
///
/// Construction fails when the credential is missing, so a misconfigured
/// environment surfaces at startup instead of inside a submission.
pub struct AdvisorClient {
    settings: ChatSettings,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl AdvisorClient {
    /// Create a client with an explicit API key.
    pub fn new(settings: ChatSettings, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SkinTuiError::chat("API key is missing"));
        }

        Ok(Self {
            settings,
            api_key,
            http: reqwest::blocking::Client::new(),
        })
    }

    /// Create a client with the key from the `OPENAI_API_KEY` environment
    /// variable.
    pub fn from_env(settings: ChatSettings) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        Self::new(settings, api_key)
    }

    /// Perform one round-trip: fixed system prompt plus the user text.
    pub fn ask(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(self.settings.system_prompt.clone()),
                ChatMessage::user(prompt),
            ],
            temperature: self.settings.temperature,
        };

        debug!("sending completion request to {}", self.settings.endpoint);

        let response = self
            .http
            .post(self.settings.endpoint.as_str())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| SkinTuiError::chat(format!("completion request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SkinTuiError::chat(format!(
                "completion endpoint returned {}: {}",
                status,
                body.trim()
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .map_err(|e| SkinTuiError::chat(format!("malformed completion response: {}", e)))?;

        let Some(choice) = completion.choices.first() else {
            return Err(SkinTuiError::chat("completion response contained no choices"));
        };

        let reply = choice.message.content.trim();
        if reply.is_empty() {
            return Err(SkinTuiError::chat("completion response was empty"));
        }

        Ok(reply.to_string())
    }
}
