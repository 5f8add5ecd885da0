//! Bounded retry with linear backoff for transient storage failures.
//!
//! Validation and state errors are never retried automatically: the caller
//! must fix the input or reload entry state. Only errors the provided
//! classifier marks as transient are eligible.

use std::time::Duration;

use crate::config::RetryConfig;

/// Runs `op` up to `policy.max_attempts` times, retrying only failures for
/// which `is_transient` returns true.
///
/// Attempt N sleeps `backoff_ms * N` milliseconds before retrying. The final
/// error is returned unchanged once attempts are exhausted, so the caller can
/// still distinguish a transient failure from a validation failure.
///
/// # Errors
///
/// Returns the last error produced by `op`.
pub fn with_retries<T, E>(
    policy: &RetryConfig,
    is_transient: impl Fn(&E) -> bool,
    mut op: impl FnMut() -> Result<T, E>,
) -> Result<T, E> {
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_transient(&err) || attempt == attempts {
                    return Err(err);
                }
                std::thread::sleep(Duration::from_millis(policy.backoff_ms * u64::from(attempt)));
                attempt += 1;
            }
        }
    }
}
