//! Retry logic for dataset fetches.
//!
//! Exponential backoff with jitter for errors classified as transient.

use crate::RetryConfig;
use gv_error::{classify_error, ErrorCategory, GvError};
use std::future::Future;
use tokio::time::sleep;
use tracing::warn;

/// Execute an async operation, retrying transient failures.
///
/// Permanent errors are returned immediately. After `max_retries` retries
/// the last error is returned.
pub async fn with_retry<F, Fut, T>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, GvError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GvError>>,
{
    let mut attempt = 0;

    loop {
        let error = match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => e,
        };

        if classify_error(&error) == ErrorCategory::Permanent {
            warn!(
                operation = operation_name,
                attempt = attempt,
                error = %error,
                "Non-retryable error"
            );
            return Err(error);
        }

        if attempt >= config.max_retries {
            warn!(
                operation = operation_name,
                attempts = attempt + 1,
                error = %error,
                "Giving up after retries"
            );
            return Err(error);
        }

        let backoff = config.backoff_duration(attempt);
        warn!(
            operation = operation_name,
            attempt = attempt,
            error = %error,
            backoff_ms = backoff.as_millis(),
            "Retryable error, backing off"
        );
        sleep(backoff).await;
        attempt += 1;
    }
}
