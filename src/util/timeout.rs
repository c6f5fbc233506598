//! Deadline for a whole caller-side operation.
//!
//! The config timeout bounds each HTTP exchange on its own. [`with_timeout`]
//! bounds everything inside it, so a [`RetryPolicy`] loop together with its
//! backoff sleeps can be capped by one budget:
//!
//! ```no_run
//! # async fn example(voice: &bandwidth::voice::Voice) -> bandwidth::error::Result<()> {
//! use std::time::Duration;
//! use bandwidth::util::retry::RetryPolicy;
//! use bandwidth::util::timeout::with_timeout;
//!
//! let policy = RetryPolicy::default();
//! let call = with_timeout(
//!     Duration::from_secs(10),
//!     policy.execute(|| voice.find_call("c-123")),
//! )
//! .await?;
//! # let _ = call;
//! # Ok(())
//! # }
//! ```
//!
//! [`RetryPolicy`]: crate::util::retry::RetryPolicy

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::{BandwidthError, Result};

/// Run `operation` until it finishes or `limit` elapses.
///
/// On expiry the operation is dropped, aborting any request still in flight,
/// and [`BandwidthError::Timeout`] carries `limit` in milliseconds. Errors
/// from the operation itself pass through untouched.
pub async fn with_timeout<T>(
    limit: Duration,
    operation: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(limit, operation).await.unwrap_or_else(|_| {
        let millis = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
        debug!(limit_ms = millis, "operation deadline elapsed");
        Err(BandwidthError::Timeout(millis))
    })
}
