//! Retries for outbound form deliveries.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Doubling backoff, capped at `max_delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total attempts, the first one included. Never zero.
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl RetryConfig {
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
            max_delay: Duration::from_secs(10),
        }
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Submission webhook: 3 attempts, waits of 500ms then 1s.
    pub fn webhook() -> Self {
        Self::new(3, Duration::from_millis(500)).with_max_delay(Duration::from_secs(2))
    }

    /// How long to wait after `failures` failed attempts.
    pub fn delay_after(&self, failures: u32) -> Duration {
        match failures {
            0 => Duration::ZERO,
            n => {
                let factor = 1u32.checked_shl(n - 1).unwrap_or(u32::MAX);
                self.initial_delay
                    .saturating_mul(factor)
                    .min(self.max_delay)
            }
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::webhook()
    }
}

/// Run `operation` until it succeeds, `should_retry` rejects the error, or
/// the attempts run out. The last error is returned on failure.
pub async fn with_retry_if<T, E, F, Fut, P>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
    should_retry: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: Fn(&E) -> bool,
{
    let mut failures = 0;
    loop {
        let error = match operation().await {
            Ok(value) => {
                if failures > 0 {
                    debug!(operation = operation_name, failures, "Recovered after retry");
                }
                return Ok(value);
            }
            Err(e) => e,
        };
        failures += 1;

        if !should_retry(&error) {
            debug!(operation = operation_name, %error, "Not retrying");
            return Err(error);
        }
        if failures >= config.max_attempts {
            warn!(
                operation = operation_name,
                attempts = failures,
                %error,
                "Giving up"
            );
            return Err(error);
        }

        let delay = config.delay_after(failures);
        warn!(
            operation = operation_name,
            attempt = failures,
            max_attempts = config.max_attempts,
            %error,
            "Attempt failed, retrying in {:?}",
            delay
        );
        sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast() -> RetryConfig {
        RetryConfig::new(3, Duration::from_millis(5))
    }

    /// Operation failing with `error` for the first `failures` calls, then returning 7.
    fn flaky(
        calls: Arc<AtomicU32>,
        failures: u32,
        error: &'static str,
    ) -> impl FnMut() -> std::future::Ready<Result<u32, &'static str>> {
        move || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            std::future::ready(if n < failures { Err(error) } else { Ok(7) })
        }
    }

    // ==================== Backoff Tests ====================

    #[test]
    fn test_webhook_schedule() {
        let config = RetryConfig::webhook();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.delay_after(0), Duration::ZERO);
        assert_eq!(config.delay_after(1), Duration::from_millis(500));
        assert_eq!(config.delay_after(2), Duration::from_secs(1));
        assert_eq!(config.delay_after(3), Duration::from_secs(2));
    }

    #[test]
    fn test_zero_attempts_clamped_to_one() {
        assert_eq!(RetryConfig::new(0, Duration::ZERO).max_attempts, 1);
    }

    #[test]
    fn test_delay_is_capped() {
        let config = RetryConfig::new(10, Duration::from_secs(1))
            .with_max_delay(Duration::from_secs(3));
        assert_eq!(config.delay_after(4), Duration::from_secs(3));
        assert_eq!(config.delay_after(40), Duration::from_secs(3));
    }

    // ==================== Retry Loop Tests ====================

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = with_retry_if(&fast(), "test", flaky(calls.clone(), 2, "503"), |_| true).await;

        assert_eq!(result, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = with_retry_if(&fast(), "test", flaky(calls.clone(), 9, "503"), |_| true).await;

        assert_eq!(result, Err("503"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_error_fails_immediately() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = with_retry_if(
            &fast(),
            "test",
            flaky(calls.clone(), 9, "400"),
            |e: &&str| !e.starts_with('4'),
        )
        .await;

        assert_eq!(result, Err("400"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
