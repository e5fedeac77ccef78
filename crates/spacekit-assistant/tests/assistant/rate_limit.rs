use spacekit_assistant::RateLimiter;
use spacekit_core::AiError;
use std::time::{Duration, Instant};

#[test]
fn test_call_after_limit_reports_wait_inside_window() {
    let window = Duration::from_millis(60_000);
    let mut limiter = RateLimiter::new(window, 3, 150_000);
    let start = Instant::now();

    for i in 0..3 {
        let _ = limiter
            .try_acquire(start + Duration::from_millis(i * 1_000))
            .unwrap();
    }

    let now = start + Duration::from_millis(10_000);
    match limiter.try_acquire(now) {
        Err(AiError::RateLimited { retry_after }) => {
            assert!(retry_after > Duration::ZERO);
            assert!(retry_after < window);
            assert_eq!(retry_after, Duration::from_millis(50_000));
        }
        other => panic!("expected rate limit, got {other:?}"),
    }
}

#[test]
fn test_rejected_call_does_not_take_a_slot() {
    let mut limiter = RateLimiter::new(Duration::from_secs(10), 1, 0);
    let start = Instant::now();
    let _ = limiter.try_acquire(start).unwrap();
    assert!(limiter.try_acquire(start + Duration::from_secs(5)).is_err());
    // only the first call occupies the window
    assert!(limiter.try_acquire(start + Duration::from_secs(10)).is_ok());
}

#[test]
fn test_budget_exhaustion_is_not_retryable() {
    let mut limiter = RateLimiter::new(Duration::from_secs(60), 3, 500);
    limiter.record_tokens(300);
    assert!(limiter.try_acquire(Instant::now()).is_ok());
    limiter.record_tokens(300);
    let err = limiter.try_acquire(Instant::now()).unwrap_err();
    assert!(!err.is_retryable());
    assert_eq!(limiter.tokens_used(), 600);
}
