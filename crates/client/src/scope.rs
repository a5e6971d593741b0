//! Screen-lifetime cancellation scopes.
//!
//! The original app never cancelled in-flight requests on unmount, leaving a
//! stale-response / update-after-unmount hazard. Here each screen owns a
//! [`RequestScope`]; requests run through [`RequestScope::run`] and resolve to
//! [`ClientError::Cancelled`] once the scope is cancelled or dropped, so no
//! completion handler fires for a dead screen.

use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use fontory_common::{ClientError, ClientResult};
use futures::future::{AbortHandle, Abortable};

/// Cancellation scope tied to a screen's mounted lifetime.
#[derive(Default)]
pub struct RequestScope {
    /// Abort handles of in-flight requests, keyed so each can be dropped
    /// again once its request completes.
    handles: Mutex<Vec<(u64, AbortHandle)>>,
    next_id: AtomicU64,
    cancelled: AtomicBool,
}

impl RequestScope {
    /// Create a live scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the scope has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Run a request future inside this scope.
    ///
    /// Returns [`ClientError::Cancelled`] immediately when the scope is
    /// already cancelled, or as soon as [`cancel`](Self::cancel) is called
    /// while the future is in flight.
    pub async fn run<T, F>(&self, fut: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        if self.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (handle, registration) = AbortHandle::new_pair();
        {
            let mut handles = self
                .handles
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            // cancel() may have raced in between the flag check and here.
            if self.is_cancelled() {
                return Err(ClientError::Cancelled);
            }
            handles.push((id, handle));
        }

        let result = match Abortable::new(fut, registration).await {
            Ok(result) => result,
            Err(futures::future::Aborted) => Err(ClientError::Cancelled),
        };

        // The request is settled; its handle must not linger on the scope.
        let mut handles = self
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(pos) = handles.iter().position(|(h_id, _)| *h_id == id) {
            handles.swap_remove(pos);
        }
        drop(handles);

        result
    }

    /// Number of requests currently in flight on this scope.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Cancel the scope and abort every in-flight request.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        let mut handles = self
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, handle) in handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_passes_through_result() {
        let scope = RequestScope::new();
        let value = scope.run(async { Ok(41 + 1) }).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_cancelled_scope_rejects_new_requests() {
        let scope = RequestScope::new();
        scope.cancel();
        let err = scope.run(async { Ok(()) }).await.unwrap_err();
        assert_eq!(err.kind(), "cancelled");
    }

    #[tokio::test]
    async fn test_cancel_aborts_in_flight_request() {
        let scope = Arc::new(RequestScope::new());

        let task = {
            let scope = Arc::clone(&scope);
            tokio::spawn(async move {
                scope
                    .run(async {
                        tokio::time::sleep(Duration::from_secs(60)).await;
                        Ok(())
                    })
                    .await
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        scope.cancel();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err.kind(), "cancelled");
    }

    #[tokio::test]
    async fn test_completed_requests_release_their_handles() {
        let scope = RequestScope::new();

        // A long-lived scope must not accumulate handles across requests.
        for i in 0..50 {
            let value = scope.run(async move { Ok(i) }).await.unwrap();
            assert_eq!(value, i);
            assert_eq!(scope.in_flight(), 0);
        }
    }

    #[tokio::test]
    async fn test_in_flight_counts_pending_requests() {
        let scope = Arc::new(RequestScope::new());

        let task = {
            let scope = Arc::clone(&scope);
            tokio::spawn(async move {
                scope
                    .run(async {
                        tokio::time::sleep(Duration::from_secs(60)).await;
                        Ok(())
                    })
                    .await
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(scope.in_flight(), 1);

        scope.cancel();
        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err.kind(), "cancelled");
        assert_eq!(scope.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_error_results_pass_through_unchanged() {
        let scope = RequestScope::new();
        let err = scope
            .run(async {
                Err::<(), _>(ClientError::Http {
                    status: 404,
                    body: "not found".to_string(),
                })
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "http-error");
    }
}
