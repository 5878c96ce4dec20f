use crate::utils::error::{HarvestError, Result};
use std::future::Future;
use std::time::Duration;

/// Retries a fallible async operation up to `max_attempts` times with a
/// linearly growing delay: the sleep between attempt k and k+1 is
/// `(k-1) * base_delay`, so the first retry fires immediately. No jitter and
/// no cap, attempts stay small and config-bounded.
///
/// Returns the first success, or the last error wrapped in
/// `RetriesExhausted` once every attempt has failed.
pub async fn retry<T, F, Fut>(mut operation: F, max_attempts: u32, base_delay: Duration) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::warn!("Attempt {}/{} failed: {}", attempt, max_attempts, e);
                if attempt >= max_attempts {
                    tracing::error!(
                        "failing after all retries, consider increasing number of retries, current value = {}",
                        max_attempts
                    );
                    return Err(HarvestError::RetriesExhausted {
                        attempts: attempt,
                        source: Box::new(e),
                    });
                }
                tokio::time::sleep(base_delay * (attempt - 1)).await;
            }
        }
    }
}
