//! Error handling for SpaceKit
//!
//! Provides error types for every layer of the editor:
//! - Validation errors (rejected local edits)
//! - AI errors (unparsable or empty responses, throttling)
//! - Asset errors (3D export/import codec failures)
//!
//! None of these are fatal. Callers convert them into user-visible
//! notifications and leave the scene untouched.

use std::time::Duration;
use thiserror::Error;

/// Validation error type
///
/// Raised when a local edit is rejected. The scene and its history are left
/// unchanged; routine no-ops (a too-small room) need no user-visible message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A wall needs at least two points
    #[error("Wall requires at least 2 points, got {count}")]
    TooFewPoints {
        /// The number of points supplied.
        count: usize,
    },

    /// A coordinate was NaN or infinite
    #[error("Non-finite coordinate in {context}")]
    NonFinite {
        /// Where the coordinate was found.
        context: String,
    },

    /// A room rectangle is smaller than the minimum size
    #[error("Room {width:.3} x {height:.3} is smaller than the {min} minimum")]
    RoomTooSmall {
        /// Rectangle width.
        width: f64,
        /// Rectangle height.
        height: f64,
        /// The minimum accepted size.
        min: f64,
    },

    /// No wall segment lies within hit tolerance of the requested location
    #[error("No wall segment within tolerance")]
    NoWallAtLocation,

    /// The referenced wall segment does not exist
    #[error("Wall {wall_id} has no segment {segment_index}")]
    InvalidSegment {
        /// The referenced wall id.
        wall_id: String,
        /// The requested segment index.
        segment_index: usize,
    },

    /// No entity with this id exists
    #[error("Unknown entity: {id}")]
    UnknownEntity {
        /// The id that failed to resolve.
        id: String,
    },

    /// Scale components must be finite and strictly positive
    #[error("Scale must be finite and positive")]
    InvalidScale,

    /// Nothing is selected for an action that needs a selection
    #[error("Nothing selected")]
    NothingSelected,
}

/// AI error type
///
/// Represents failures of the generative scene pipeline. All variants are
/// surfaced to the user; most are retryable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AiError {
    /// The response text contained no recoverable JSON object
    #[error("Malformed AI response: {reason}. Excerpt: {excerpt}")]
    MalformedResponse {
        /// Why the parse failed.
        reason: String,
        /// The leading part of the original text.
        excerpt: String,
    },

    /// The response parsed but held nothing usable
    #[error("AI response did not include usable elements")]
    EmptyResult,

    /// The client-side rate limiter rejected the request
    #[error("AI limit reached, retry in {}s", .retry_after.as_millis().div_ceil(1000).max(1))]
    RateLimited {
        /// Estimated wait until a slot frees up.
        retry_after: Duration,
    },

    /// The session token budget has been spent
    #[error("AI token budget reached for this session ({used}/{budget})")]
    TokenBudgetExhausted {
        /// Tokens consumed so far.
        used: u64,
        /// The configured budget.
        budget: u64,
    },

    /// No credentials were configured for the generative service
    #[error("No API key configured for the generative service")]
    MissingApiKey,

    /// The generative service itself failed
    #[error("Generative service error: {0}")]
    Service(String),
}

impl AiError {
    /// Whether the user can simply try the same request again later.
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            AiError::MissingApiKey | AiError::TokenBudgetExhausted { .. }
        )
    }
}

/// Asset error type
///
/// Failures of the binary 3D export/import collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    /// Encoding the scene failed
    #[error("Export failed: {0}")]
    ExportFailure(String),

    /// Decoding an asset failed
    #[error("Import failed: {0}")]
    ImportFailure(String),
}

/// Main error type for SpaceKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// AI pipeline error
    #[error(transparent)]
    Ai(#[from] AiError),

    /// Asset codec error
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is an AI error
    pub fn is_ai_error(&self) -> bool {
        matches!(self, Error::Ai(_))
    }

    /// Check if retrying the same action may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Ai(err) => err.is_retryable(),
            Error::Asset(_) | Error::Io(_) => true,
            _ => false,
        }
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

/// Returns at most `max_chars` leading characters of `text`, for diagnostics.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
