//! Caller-side retry with exponential backoff and jitter.
//!
//! The client never retries by itself. Wrap a facade call in
//! [`RetryPolicy::execute`] to opt in:
//!
//! ```no_run
//! # async fn example(voice: &bandwidth::voice::Voice) -> bandwidth::error::Result<()> {
//! use bandwidth::util::retry::RetryPolicy;
//!
//! let call = RetryPolicy::default()
//!     .execute(|| voice.find_call("c-123"))
//!     .await?;
//! # let _ = call;
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::time::Duration;

use crate::error::BandwidthError;

/// Retry policy configuration.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Execute an async operation, retrying errors for which
    /// [`BandwidthError::is_retryable`] holds.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, BandwidthError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, BandwidthError>>,
    {
        if self.max_attempts == 0 {
            return Err(BandwidthError::InvalidArgument(
                "retry policy needs at least one attempt".to_string(),
            ));
        }

        let mut backoff = self.initial_backoff;
        let mut attempt = 0;

        loop {
            attempt += 1;
            let err = match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };
            if !err.is_retryable() || attempt >= self.max_attempts {
                return Err(err);
            }

            tracing::warn!(
                attempt,
                max_attempts = self.max_attempts,
                error = %err,
                "Retrying Bandwidth request after error"
            );

            // Jitter: 75%–125% of backoff
            let jitter_factor = 0.75 + (rand_factor() * 0.5);
            tokio::time::sleep(Duration::from_secs_f64(backoff.as_secs_f64() * jitter_factor)).await;

            backoff = Duration::from_secs_f64(
                (backoff.as_secs_f64() * self.multiplier).min(self.max_backoff.as_secs_f64()),
            );
        }
    }
}

/// Pseudo-random factor in [0, 1).
fn rand_factor() -> f64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .hash(&mut hasher);
    std::thread::current().id().hash(&mut hasher);

    (hasher.finish() % 10000) as f64 / 10000.0
}
