//! Retry loop with a linearly growing delay

use crate::constants::retry::{BASE_DELAY_MS, MAX_ATTEMPTS};
use crate::error::AppError;
use std::future::Future;
use std::time::Duration;
use tracing::{error, warn};

/// Attempt budget and delay step for `with_retry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included. Zero is treated as one.
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            base_delay: Duration::from_millis(BASE_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// A single attempt, no waiting
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
        }
    }

    /// Wait after the given (1-based) failed attempt: `base_delay * attempt`
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

/// Runs `operation` until it succeeds, fails terminally, or the budget runs out.
///
/// The closure receives the 1-based attempt number. Errors for which
/// `AppError::is_retryable` is false (client errors, local failures) are
/// returned at once. Otherwise the loop sleeps `policy.delay_for(n)` and tries
/// again; when the budget is exhausted the last error is returned.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, AppError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1u32;

    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if !e.is_retryable() => return Err(e),
            Err(e) if attempt >= max_attempts => {
                error!("Giving up after {} attempt(s): {}", attempt, e);
                return Err(e);
            }
            Err(e) => {
                let wait = policy.delay_for(attempt);
                warn!(
                    "Attempt {}/{} failed: {}. Retrying in {:?}",
                    attempt, max_attempts, e, wait
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
        }
    }
}
