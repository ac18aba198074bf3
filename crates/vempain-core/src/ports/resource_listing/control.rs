//! Cancellation and deadline for a single listing call.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::error::{ListingError, ListingResult};

/// Bounds a listing call.
///
/// The token cancels the in-flight request; the timeout caps how long the
/// whole round trip may take. Neither is set by default.
#[derive(Debug, Clone, Default)]
pub struct RequestControl {
    cancel: CancellationToken,
    timeout: Option<Duration>,
}

impl RequestControl {
    /// No cancellation source and no deadline.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Cancel the call when `token` is cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Fail with `DeadlineExceeded` if the call takes longer than `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Drive `request` to completion unless cancelled or timed out first.
    ///
    /// Cancellation wins over a result that becomes ready in the same poll.
    pub async fn run<T, F>(&self, request: F) -> ListingResult<T>
    where
        F: Future<Output = ListingResult<T>>,
    {
        if self.cancel.is_cancelled() {
            return Err(ListingError::Cancelled);
        }

        let bounded = async {
            match self.timeout {
                Some(limit) => tokio::time::timeout(limit, request)
                    .await
                    .unwrap_or(Err(ListingError::DeadlineExceeded)),
                None => request.await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(ListingError::Cancelled),
            result = bounded => result,
        }
    }
}
