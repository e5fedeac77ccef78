//! Session-scoped request throttling: a rolling call window plus a token budget.

use spacekit_core::constants::{AI_RATE_MAX_CALLS, AI_RATE_WINDOW_MS, AI_TOKEN_BUDGET};
use spacekit_core::AiError;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::warn;

/// A reserved call slot; hand it back with [`RateLimiter::release`] if the call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a failed request should release its slot"]
pub struct RateTicket {
    issued_at: Instant,
}

/// Rolling-window limiter with a cumulative token budget.
///
/// At most `max_calls` requests are admitted in any window of `window`
/// length, and no request is admitted once `tokens_used` reaches
/// `token_budget`. A zero `max_calls` or `token_budget` disables that check.
/// Both counters live until [`RateLimiter::reset`].
#[derive(Debug, Clone)]
pub struct RateLimiter {
    window: Duration,
    max_calls: usize,
    token_budget: u64,
    timestamps: VecDeque<Instant>,
    tokens_used: u64,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(AI_RATE_WINDOW_MS),
            AI_RATE_MAX_CALLS,
            AI_TOKEN_BUDGET,
        )
    }
}

impl RateLimiter {
    pub fn new(window: Duration, max_calls: usize, token_budget: u64) -> Self {
        Self {
            window,
            max_calls,
            token_budget,
            timestamps: VecDeque::with_capacity(max_calls),
            tokens_used: 0,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn max_calls(&self) -> usize {
        self.max_calls
    }

    pub fn token_budget(&self) -> u64 {
        self.token_budget
    }

    pub fn tokens_used(&self) -> u64 {
        self.tokens_used
    }

    fn prune(&mut self, now: Instant) {
        while let Some(&oldest) = self.timestamps.front() {
            if now.saturating_duration_since(oldest) >= self.window {
                self.timestamps.pop_front();
            } else {
                break;
            }
        }
    }

    /// Calls still admissible in the current window at `now`; `None` when unlimited.
    pub fn remaining(&mut self, now: Instant) -> Option<usize> {
        self.prune(now);
        (self.max_calls > 0).then(|| self.max_calls.saturating_sub(self.timestamps.len()))
    }

    /// Reserves a call slot at `now`.
    ///
    /// A full window yields [`AiError::RateLimited`] with the wait until the
    /// oldest call leaves it; a spent budget yields
    /// [`AiError::TokenBudgetExhausted`].
    pub fn try_acquire(&mut self, now: Instant) -> Result<RateTicket, AiError> {
        self.prune(now);
        if self.max_calls > 0 && self.timestamps.len() >= self.max_calls {
            let retry_after = self
                .timestamps
                .front()
                .map_or(self.window, |&oldest| {
                    self.window.saturating_sub(now.saturating_duration_since(oldest))
                });
            warn!(
                "AI request rejected: {} calls in the last {:?}, retry in {:?}",
                self.timestamps.len(),
                self.window,
                retry_after
            );
            return Err(AiError::RateLimited { retry_after });
        }
        if self.token_budget > 0 && self.tokens_used >= self.token_budget {
            warn!(
                "AI request rejected: token budget spent ({}/{})",
                self.tokens_used, self.token_budget
            );
            return Err(AiError::TokenBudgetExhausted {
                used: self.tokens_used,
                budget: self.token_budget,
            });
        }
        self.timestamps.push_back(now);
        Ok(RateTicket { issued_at: now })
    }

    /// Returns a slot whose request failed.
    pub fn release(&mut self, ticket: RateTicket) {
        if let Some(pos) = self.timestamps.iter().position(|&t| t == ticket.issued_at) {
            self.timestamps.remove(pos);
        }
    }

    /// Adds tokens reported by a completed request.
    pub fn record_tokens(&mut self, tokens: u64) {
        self.tokens_used = self.tokens_used.saturating_add(tokens);
    }

    /// Clears both the call window and the token count.
    pub fn reset(&mut self) {
        self.timestamps.clear();
        self.tokens_used = 0;
    }
}
