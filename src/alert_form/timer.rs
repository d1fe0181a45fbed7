//! Cancellable success banner timers

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Handle to a scheduled banner expiry
///
/// Cancelling (or dropping, for implementations that cancel on drop) must
/// guarantee the expiry is never delivered.
pub trait BannerGuard: Send {
    /// Cancel the pending expiry
    fn cancel(&mut self);
}

/// Tokio task that delivers an event after a delay, aborted on drop
#[derive(Debug)]
pub struct ScopedTimer {
    handle: Option<AbortHandle>,
}

impl ScopedTimer {
    /// Send `event` on `tx` once `delay` has elapsed
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<T: Send + 'static>(
        delay: Duration,
        tx: mpsc::UnboundedSender<T>,
        event: T,
    ) -> Self {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means nobody is listening any more
            let _ = tx.send(event);
        });

        Self {
            handle: Some(task.abort_handle()),
        }
    }

    /// Check whether the timer is still armed
    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl BannerGuard for ScopedTimer {
    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = tokio::time::Instant::now();
        let _timer = ScopedTimer::schedule(Duration::from_millis(250), tx, 7u64);

        assert_eq!(rx.recv().await, Some(7));
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u64>();
        let timer = ScopedTimer::schedule(Duration::from_millis(250), tx, 7);
        assert!(timer.is_armed());
        drop(timer);

        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_is_idempotent() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u64>();
        let mut timer = ScopedTimer::schedule(Duration::from_millis(250), tx, 7);
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_armed());

        assert_eq!(rx.recv().await, None);
    }
}
