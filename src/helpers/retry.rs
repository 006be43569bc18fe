use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Runs `operation`, retrying up to `max_retries` times while `is_retryable` holds.
/// The delay doubles after each failed attempt, starting at `backoff`.
pub async fn retry_with_backoff<T, E, F, Fut>(
    label: &str,
    max_retries: u32,
    backoff: Duration,
    is_retryable: fn(&E) -> bool,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_retries && is_retryable(&e) => {
                let delay = backoff.saturating_mul(2u32.saturating_pow(attempt));
                attempt += 1;
                log::warn!("🔁 {} failed ({}), retrying in {}ms ({}/{})", label, e, delay.as_millis(), attempt, max_retries);
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
