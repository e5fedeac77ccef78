//! # SpaceKit Assistant
//!
//! Turns a natural-language brief into a scene through an external
//! generative service.
//!
//! ```text
//! brief ─► prompt ─► DesignGenerator ─► extract ─► repair ─► normalize ─► SceneData
//!                         ▲                                                  │
//!                    RateLimiter                               DesignerState (generation-checked)
//! ```
//!
//! The service's reply is untrusted: [`extract`] recovers one JSON object
//! from text that may be fenced, wrapped in prose, or truncated, and
//! [`normalize`] bounds and coerces it into well-typed entities.

pub mod client;
pub mod extract;
pub mod normalize;
pub mod prompt;
pub mod rate_limit;
pub mod repair;
pub mod session;

pub use client::{api_key_from_env, DesignGenerator, GenerationRequest, GenerationResponse};
pub use extract::extract_json;
pub use normalize::{normalize_payload, normalize_response, NormalizeLimits};
pub use prompt::{build_instructions, DEFAULT_BRIEF};
pub use rate_limit::{RateLimiter, RateTicket};
pub use session::{AssistantSession, GeneratedScene};
