use crate::utils::error::MarketError;
use std::future::Future;
use std::time::Duration;

/// Errors that can tell the retry executor whether another attempt is
/// worthwhile.
pub trait Retryable {
    fn is_transient(&self) -> bool;
}

impl Retryable for MarketError {
    fn is_transient(&self) -> bool {
        MarketError::is_transient(self)
    }
}

/// Re-runs a fallible async operation on transient failures.
///
/// HTTP status errors pass through unretried; only timeouts and connection
/// failures qualify for another attempt. Backoff between attempts is a fixed
/// delay and never blocks other tasks.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub async fn run<T, E, F, Fut>(&self, mut operation: F) -> Result<T, E>
    where
        E: Retryable + std::fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < self.max_attempts => {
                    tracing::debug!(
                        "Transient failure on attempt {}/{}: {}",
                        attempt,
                        self.max_attempts,
                        err
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(200))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fmt;

    #[derive(Debug)]
    struct FakeError {
        transient: bool,
    }

    impl fmt::Display for FakeError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "fake error (transient: {})", self.transient)
        }
    }

    impl Retryable for FakeError {
        fn is_transient(&self) -> bool {
            self.transient
        }
    }

    fn quick_policy(attempts: u32) -> RetryPolicy {
        RetryPolicy::new(attempts, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn returns_first_success_without_extra_attempts() {
        let calls = Cell::new(0u32);
        let result: Result<i32, FakeError> = quick_policy(3)
            .run(|| {
                calls.set(calls.get() + 1);
                async { Ok(42) }
            })
            .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn retries_transient_failures_up_to_limit() {
        let calls = Cell::new(0u32);
        let result: Result<i32, FakeError> = quick_policy(3)
            .run(|| {
                calls.set(calls.get() + 1);
                async { Err(FakeError { transient: true }) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn recovers_when_a_later_attempt_succeeds() {
        let calls = Cell::new(0u32);
        let result: Result<i32, FakeError> = quick_policy(3)
            .run(|| {
                calls.set(calls.get() + 1);
                let attempt = calls.get();
                async move {
                    if attempt < 3 {
                        Err(FakeError { transient: true })
                    } else {
                        Ok(7)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn terminal_errors_are_not_retried() {
        let calls = Cell::new(0u32);
        let result: Result<i32, FakeError> = quick_policy(5)
            .run(|| {
                calls.set(calls.get() + 1);
                async { Err(FakeError { transient: false }) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn zero_attempts_is_clamped_to_one() {
        assert_eq!(RetryPolicy::new(0, Duration::from_millis(1)).max_attempts(), 1);
    }
}
