use tokio::sync::watch;

/// One-shot cancellation signal shared by a controller and its refresh tasks.
#[derive(Debug)]
pub(super) struct CancelToken {
    tx: watch::Sender<bool>,
}

impl CancelToken {
    pub(super) fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    pub(super) fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub(super) fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once `cancel` has been called.
    pub(super) async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as `self`, so this only returns on cancel.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}
