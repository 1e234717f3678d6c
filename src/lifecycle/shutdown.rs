//! Shutdown coordination.
//!
//! The trigger is latched in a `watch` channel: a task that subscribes after
//! shutdown has fired still sees it, and dropping the last [`Shutdown`]
//! handle releases every waiter.

use std::sync::Arc;

use tokio::sync::watch;

/// Handle that fires graceful shutdown. Clones share one trigger.
#[derive(Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

/// One subscriber's view of the shutdown trigger.
#[derive(Debug)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Fire shutdown. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Resolve once shutdown fires or every [`Shutdown`] handle is gone.
    pub async fn recv(mut self) {
        let _ = self.rx.wait_for(|fired| *fired).await;
    }
}
