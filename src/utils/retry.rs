//! Retry with exponential backoff for transient transport failures.
//!
//! Only the live HTTP client retries; the search pipeline never does. A
//! failure that survives the retry budget propagates unchanged.

use std::time::Duration;

use tokio::time::sleep;

use crate::github::ProviderError;

/// Configuration for retry behavior.
#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    /// Maximum number of attempts (1 = no retries)
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Ceiling for the backoff delay
    pub max_delay: Duration,
    /// Multiplier applied per retry
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// A configuration that disables retries entirely.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }
}

/// Whether an error is worth retrying. Rate limits and transport failures
/// are transient; auth, not-found, and parse failures are permanent.
fn is_transient(error: &ProviderError) -> bool {
    matches!(
        error,
        ProviderError::Network(_) | ProviderError::RateLimit
    )
}

/// Run `operation`, retrying transient failures with exponential backoff.
pub async fn with_retry<T, F, Fut>(config: RetryConfig, mut operation: F) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, ProviderError>>,
{
    let mut attempts = 0;
    let mut delay = config.initial_delay;

    loop {
        attempts += 1;

        match operation().await {
            Ok(result) => {
                if attempts > 1 {
                    tracing::debug!("Request succeeded on attempt {}", attempts);
                }
                return Ok(result);
            }
            Err(error) if is_transient(&error) && attempts < config.max_attempts => {
                tracing::debug!(
                    "Transient error on attempt {}: {}, retrying in {:?}",
                    attempts,
                    error,
                    delay
                );
                sleep(delay).await;
                delay = Duration::from_secs_f64(
                    (delay.as_secs_f64() * config.backoff_multiplier)
                        .min(config.max_delay.as_secs_f64()),
                );
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast_config() -> RetryConfig {
        RetryConfig {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(10),
            backoff_multiplier: 2.0,
        }
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = {
            let calls = calls.clone();
            with_retry(fast_config(), move || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("ok")
                }
            })
            .await
        };

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retries_transient_then_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = {
            let calls = calls.clone();
            with_retry(fast_config(), move || {
                let calls = calls.clone();
                async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    if n < 2 {
                        Err(ProviderError::Network("connection reset".into()))
                    } else {
                        Ok("ok")
                    }
                }
            })
            .await
        };

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_permanent_error_is_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let result: Result<(), _> = {
            let calls = calls.clone();
            with_retry(fast_config(), move || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err(ProviderError::NotFound("octocat".into()))
                }
            })
            .await
        };

        assert!(matches!(result, Err(ProviderError::NotFound(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_budget_exhaustion_returns_last_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let result: Result<(), _> = {
            let calls = calls.clone();
            with_retry(fast_config(), move || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err(ProviderError::RateLimit)
                }
            })
            .await
        };

        assert!(matches!(result, Err(ProviderError::RateLimit)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
