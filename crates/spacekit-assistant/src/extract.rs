//! Recovery of a single JSON object from free-form service text.

use regex::Regex;
use serde_json::Value;
use spacekit_core::constants::DIAGNOSTIC_EXCERPT_CHARS;
use spacekit_core::{excerpt, AiError};
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::repair::{balanced_object, repair};

/// Returns the body of the first closed code fence, or the text unchanged.
pub fn strip_code_fence(text: &str) -> &str {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    let fence = FENCE.get_or_init(|| {
        Regex::new(r"```(?:json)?\s*([\s\S]*?)```").expect("invalid regex pattern")
    });
    fence
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(text, |body| body.as_str())
}

fn malformed(reason: impl Into<String>, original: &str) -> AiError {
    AiError::MalformedResponse {
        reason: reason.into(),
        excerpt: excerpt(original, DIAGNOSTIC_EXCERPT_CHARS),
    }
}

/// Extracts the first JSON object from `text`, repairing truncation if needed.
///
/// Attempts, in order:
/// 1. the first balanced `{ ... }` parsed as is
/// 2. the whole candidate after the repair passes
/// 3. the first balanced `{ ... }` of the repaired text
///
/// Fails only when no `{` exists or every attempt yields something that
/// is not a JSON object.
pub fn extract_json(text: &str) -> Result<Value, AiError> {
    let body = strip_code_fence(text);
    let start = body
        .find('{')
        .ok_or_else(|| malformed("no JSON object found", text))?;
    let candidate = body[start..].trim_end();

    if let Some(object) = balanced_object(candidate) {
        match serde_json::from_str::<Value>(object) {
            Ok(value) if value.is_object() => return Ok(value),
            Ok(_) => {}
            Err(e) => debug!("Direct parse failed, attempting repair: {}", e),
        }
    } else {
        debug!("Response object never closes, attempting repair");
    }

    let repaired = repair(candidate);
    let repair_error = match serde_json::from_str::<Value>(&repaired) {
        Ok(value) if value.is_object() => {
            debug!("Recovered response after repair");
            return Ok(value);
        }
        Ok(_) => "repaired text is not an object".to_string(),
        Err(e) => e.to_string(),
    };

    if let Some(object) = balanced_object(&repaired) {
        if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(object) {
            warn!("Recovered response from leading balanced object only");
            return Ok(value);
        }
    }

    warn!("AI response could not be parsed: {}", repair_error);
    Err(malformed(repair_error, text))
}
