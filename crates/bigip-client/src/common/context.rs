//! Per-request deadline and cancellation

use crate::error::BigIpError;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Deadline and cancellation carried by a request
///
/// `RequestContext::background()` never expires and cannot be cancelled.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    timeout: Option<Duration>,
    cancel: Option<CancellationToken>,
}

impl RequestContext {
    /// A context with no deadline and no cancellation
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires after `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            cancel: None,
        }
    }

    /// A context that ends when `token` is cancelled
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            timeout: None,
            cancel: Some(token),
        }
    }

    /// Add or replace the deadline
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add or replace the cancellation token
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The configured deadline, if any
    pub fn deadline(&self) -> Option<Duration> {
        self.timeout
    }

    /// Whether the context has already been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }

    /// Drive `fut` to completion unless the deadline or the token fires first
    pub async fn run<F, T>(&self, fut: F) -> Result<T, BigIpError>
    where
        F: Future<Output = Result<T, BigIpError>>,
    {
        let bounded = async {
            match self.timeout {
                Some(limit) => match tokio::time::timeout(limit, fut).await {
                    Ok(result) => result,
                    Err(_elapsed) => Err(BigIpError::Timeout(limit)),
                },
                None => fut.await,
            }
        };

        match &self.cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => Err(BigIpError::Cancelled),
                    result = bounded => result,
                }
            }
            None => bounded.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_background_runs_to_completion() {
        let ctx = RequestContext::background();
        let value = ctx.run(async { Ok::<_, BigIpError>(7) }).await.unwrap();
        assert_eq!(value, 7);
        assert!(ctx.deadline().is_none());
        assert!(!ctx.is_cancelled());
    }

    #[tokio::test]
    async fn test_timeout_fires() {
        let ctx = RequestContext::with_timeout(Duration::from_millis(50));
        let result = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, BigIpError>(())
            })
            .await;
        assert!(matches!(result, Err(BigIpError::Timeout(d)) if d == Duration::from_millis(50)));
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let ctx = RequestContext::with_cancellation(token);
        assert!(ctx.is_cancelled());
        let result = ctx.run(async { Ok::<_, BigIpError>(1) }).await;
        assert!(matches!(result, Err(BigIpError::Cancelled)));
    }

    #[tokio::test]
    async fn test_cancel_while_pending() {
        let token = CancellationToken::new();
        let ctx = RequestContext::background().cancellation(token.clone());
        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            token.cancel();
        });
        let result = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok::<_, BigIpError>(())
            })
            .await;
        canceller.await.unwrap();
        assert!(matches!(result, Err(BigIpError::Cancelled)));
    }

    #[tokio::test]
    async fn test_inner_error_passes_through() {
        let ctx = RequestContext::with_timeout(Duration::from_secs(1));
        let result: Result<(), _> = ctx
            .run(async { Err(BigIpError::NotFound("ltm/monitor/http/x".to_string())) })
            .await;
        assert!(matches!(result, Err(BigIpError::NotFound(_))));
    }
}
