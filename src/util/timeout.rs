//! Caller-side deadlines for image requests.

use std::future::Future;
use std::time::Duration;

use crate::error::PictoraError;

/// Run `future` under an optional deadline.
///
/// Image requests carry no deadline of their own. `None` awaits the future
/// unbounded; `Some(limit)` turns an elapsed deadline into
/// [`PictoraError::Timeout`] and drops the in-flight request.
pub async fn with_timeout<T>(
    limit: Option<Duration>,
    future: impl Future<Output = Result<T, PictoraError>>,
) -> Result<T, PictoraError> {
    let Some(limit) = limit else {
        return future.await;
    };
    tokio::time::timeout(limit, future)
        .await
        .unwrap_or_else(|_| Err(PictoraError::Timeout(limit.as_millis() as u64)))
}
