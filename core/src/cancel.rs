//! Cooperative cancellation for in-flight operations.
//!
//! A `watch` channel under the hood: the caller keeps the `CancelHandle`
//! and threads the `CancelToken` into the operation, which races it against
//! the HTTP round-trip. Dropping the handle without firing it leaves the
//! token pending forever, so an un-cancelled operation just runs to
//! completion.

use tokio::sync::watch;

/// Caller-side trigger. Firing it rejects the paired operation with
/// `ApiError::Cancelled`.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

/// Operation-side signal, cloneable so one handle can cover several calls.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the paired handle fires. Pends forever if the handle
    /// was dropped without firing.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
