//! Bounded retry for object-store puts.
//!
//! A failed put is retried only when the error is transient (network or
//! backend trouble); authentication and key errors return immediately.
//! Delays grow exponentially with uniform jitter so concurrent uploads do
//! not hammer a recovering endpoint in lockstep.

use std::time::Duration;

use rand::Rng;

use crate::traits::{Storage, StorageResult};

/// Retry schedule for transient put failures.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Delay before the next attempt: `base * 2^(attempt-1)` capped at
    /// `max_delay`, plus up to 50% jitter.
    fn delay_for(&self, attempt: u32) -> Duration {
        let exp = self.base_delay.saturating_mul(1u32 << (attempt - 1).min(16));
        let capped = exp.min(self.max_delay);
        let jitter_ms = rand::rng().random_range(0..=capped.as_millis() as u64 / 2);
        capped + Duration::from_millis(jitter_ms)
    }
}

/// Put with bounded retry on transient failures.
pub async fn put_with_retry(
    storage: &dyn Storage,
    policy: RetryPolicy,
    key: &str,
    data: &[u8],
    content_type: &str,
) -> StorageResult<String> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        match storage.put(key, data.to_vec(), content_type).await {
            Ok(url) => return Ok(url),
            Err(err) if err.is_transient() && attempt < policy.max_attempts => {
                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    key = %key,
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Transient store failure, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
