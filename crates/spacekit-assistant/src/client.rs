//! Seam to the external generative service.
//!
//! The transport is supplied by the embedding application through
//! [`DesignGenerator`]. This module only shapes the request and reads the
//! service's response envelope.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use spacekit_core::AiError;
use tracing::warn;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "models/gemini-2.5-flash";

/// Default environment variable holding the service API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// One generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub model: String,
    pub instructions: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl GenerationRequest {
    pub fn new(model: &str, instructions: impl Into<String>) -> Self {
        Self {
            model: model_path(model),
            instructions: instructions.into(),
            temperature: 0.55,
            max_output_tokens: 8192,
        }
    }
}

/// Service reply: free-form text plus the tokens it cost.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationResponse {
    pub text: String,
    pub tokens: u64,
}

impl GenerationResponse {
    pub fn new(text: impl Into<String>, tokens: u64) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    /// Reads a `generateContent`-style envelope.
    ///
    /// Joins the text parts of every candidate and takes the token count
    /// from `usageMetadata.totalTokenCount`. Blocked prompts, safety stops,
    /// and empty replies are service errors.
    pub fn from_service_payload(payload: &Value) -> Result<Self, AiError> {
        if let Some(reason) = payload
            .pointer("/promptFeedback/blockReason")
            .and_then(Value::as_str)
        {
            return Err(AiError::Service(format!("Content blocked: {}", reason)));
        }
        let candidates = payload
            .get("candidates")
            .and_then(Value::as_array)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AiError::Service("AI returned no candidates".to_string()))?;

        match candidates[0].get("finishReason").and_then(Value::as_str) {
            Some("SAFETY") => {
                return Err(AiError::Service(
                    "Content was blocked by safety filters".to_string(),
                ))
            }
            Some("MAX_TOKENS") => warn!("AI response was truncated at the token limit"),
            _ => {}
        }

        let text = candidates
            .iter()
            .filter_map(|c| c.pointer("/content/parts").and_then(Value::as_array))
            .flatten()
            .map(|part| part.get("text").and_then(Value::as_str).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n");
        let text = text.trim();
        if text.is_empty() {
            return Err(AiError::Service("AI returned an empty response".to_string()));
        }
        let tokens = payload
            .pointer("/usageMetadata/totalTokenCount")
            .and_then(Value::as_u64)
            .unwrap_or(0);
        Ok(Self::new(text, tokens))
    }
}

/// External text-in, text-out generative service.
#[async_trait]
pub trait DesignGenerator: Send + Sync {
    /// Sends one request and returns the raw reply.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, AiError>;
}

/// Prefixes a bare model name with `models/`.
pub fn model_path(model: &str) -> String {
    let model = model.trim();
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{}", model)
    }
}

/// Reads a non-blank API key from the environment variable `name`.
pub fn api_key_from_env(name: &str) -> Result<String, AiError> {
    std::env::var(name)
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or(AiError::MissingApiKey)
}
