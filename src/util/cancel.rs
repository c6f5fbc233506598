//! Cancellation helper.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::BandwidthError;

/// Run `future` until it completes or `token` is cancelled.
///
/// On cancellation the in-flight future is dropped, which aborts any pending
/// HTTP exchange, and [`BandwidthError::Cancelled`] is returned.
pub async fn with_cancellation<T>(
    token: &CancellationToken,
    future: impl Future<Output = Result<T, BandwidthError>>,
) -> Result<T, BandwidthError> {
    if token.is_cancelled() {
        return Err(BandwidthError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(BandwidthError::Cancelled),
        result = future => result,
    }
}
