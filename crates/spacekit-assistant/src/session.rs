//! Request orchestration: throttle, call the service, normalize, apply.

use spacekit_core::AiError;
use spacekit_designer::{DesignerState, SceneData};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tracing::{error, info, warn};

use crate::client::{DesignGenerator, GenerationRequest, DEFAULT_MODEL};
use crate::normalize::{normalize_response, NormalizeLimits};
use crate::prompt::build_instructions;
use crate::rate_limit::RateLimiter;

/// A normalized scene tagged with the editor generation it was requested against.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedScene {
    pub scene: SceneData,
    pub generation: u64,
    pub tokens: u64,
}

impl GeneratedScene {
    /// Replaces the editor's scene unless it was reset since the request started.
    ///
    /// Returns whether the scene was applied.
    pub fn apply(self, state: &mut DesignerState) -> bool {
        state.replace_scene_if_current(self.generation, self.scene)
    }
}

/// One user's AI session: the generator plus its rate limiter and token budget.
pub struct AssistantSession {
    generator: Arc<dyn DesignGenerator>,
    limiter: Mutex<RateLimiter>,
    limits: NormalizeLimits,
    model: String,
}

impl AssistantSession {
    pub fn new(generator: Arc<dyn DesignGenerator>) -> Self {
        Self::with_limiter(generator, RateLimiter::default(), NormalizeLimits::default())
    }

    pub fn with_limiter(
        generator: Arc<dyn DesignGenerator>,
        limiter: RateLimiter,
        limits: NormalizeLimits,
    ) -> Self {
        Self {
            generator,
            limiter: Mutex::new(limiter),
            limits,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Sets the model identifier sent with each request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn limits(&self) -> NormalizeLimits {
        self.limits
    }

    fn limiter(&self) -> Result<MutexGuard<'_, RateLimiter>, AiError> {
        self.limiter
            .lock()
            .map_err(|e| AiError::Service(format!("Failed to lock rate limiter: {}", e)))
    }

    /// Tokens consumed so far in this session.
    pub fn tokens_used(&self) -> Result<u64, AiError> {
        Ok(self.limiter()?.tokens_used())
    }

    /// Clears the call window and token count, as for a new session.
    pub fn reset(&self) -> Result<(), AiError> {
        self.limiter()?.reset();
        Ok(())
    }

    /// Generates a scene for `brief` against editor generation `generation`.
    ///
    /// The call slot is returned if the service or normalization fails, so
    /// only successful generations count toward the window. Tokens are
    /// charged as soon as the service replies.
    pub async fn generate(&self, brief: &str, generation: u64) -> Result<GeneratedScene, AiError> {
        let ticket = self.limiter()?.try_acquire(Instant::now())?;
        let request = GenerationRequest::new(&self.model, build_instructions(brief));

        let result = match self.generator.generate(&request).await {
            Ok(response) => {
                self.limiter()?.record_tokens(response.tokens);
                normalize_response(&response.text, &self.limits).map(|scene| GeneratedScene {
                    scene,
                    generation,
                    tokens: response.tokens,
                })
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(generated) => {
                let limiter = self.limiter()?;
                if limiter.token_budget() > 0 && limiter.tokens_used() >= limiter.token_budget() {
                    warn!("AI token budget exhausted after this run");
                }
                info!(
                    "AI scene generated: {} elements, {} furniture, {} tokens",
                    generated.scene.element_count(),
                    generated.scene.furniture.len(),
                    generated.tokens
                );
                Ok(generated)
            }
            Err(e) => {
                error!("AI generation failed: {}", e);
                self.limiter()?.release(ticket);
                Err(e)
            }
        }
    }

    /// Generates a scene and applies it to `state` if the editor was not reset meanwhile.
    ///
    /// Returns whether the scene was applied.
    pub async fn generate_into(&self, state: &mut DesignerState, brief: &str) -> Result<bool, AiError> {
        let generated = self.generate(brief, state.generation()).await?;
        Ok(generated.apply(state))
    }
}

impl std::fmt::Debug for AssistantSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantSession")
            .field("model", &self.model)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
