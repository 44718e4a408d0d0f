//! Background relay worker runtime.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::info;

use crate::domain::errors::PushError;
use crate::domain::ports::{WorkerBinding, WorkerRuntimePort};

const READY_TIMEOUT: Duration = Duration::from_secs(10);

/// Hosts the notification relay that keeps receiving pushes while the TUI
/// is suspended.
///
/// Readiness is derived from the push gateway's ready signal rather than a
/// fixed delay.
pub struct RelayWorkerRuntime {
    gateway_ready: watch::Receiver<bool>,
    available: bool,
}

impl RelayWorkerRuntime {
    /// Creates a runtime observing the gateway ready signal.
    #[must_use]
    pub fn new(gateway_ready: watch::Receiver<bool>) -> Self {
        Self {
            gateway_ready,
            // Without a desktop notification daemon there is nothing for
            // the relay to deliver to.
            available: cfg!(feature = "notify"),
        }
    }

    #[cfg(test)]
    fn unavailable(gateway_ready: watch::Receiver<bool>) -> Self {
        Self {
            gateway_ready,
            available: false,
        }
    }
}

#[async_trait]
impl WorkerRuntimePort for RelayWorkerRuntime {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn ready(&self) -> Result<(), PushError> {
        let mut ready = self.gateway_ready.clone();
        tokio::time::timeout(READY_TIMEOUT, ready.wait_for(|is_ready| *is_ready))
            .await
            .map_err(|_| PushError::worker_not_ready("timed out waiting for gateway"))?
            .map_err(|_| PushError::worker_not_ready("gateway ready signal gone"))?;
        Ok(())
    }

    async fn register(&self) -> Result<WorkerBinding, PushError> {
        let binding = WorkerBinding::new();
        info!(binding = %binding.id(), "Relay worker registered");
        Ok(binding)
    }
}
