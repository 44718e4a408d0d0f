//! Push delivery mechanism port definition.

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};

use crate::domain::entities::PushMessage;
use crate::domain::errors::PushError;
use crate::domain::ports::worker_runtime_port::WorkerBinding;

/// Outcome of the notification permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// The user granted notification permission.
    Granted,
    /// The user declined.
    Denied,
}

/// Token identifying this client to the delivery backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryToken(String);

impl DeliveryToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Port for the push delivery mechanism.
#[async_trait]
pub trait PushGatewayPort: Send + Sync {
    /// Whether the delivery mechanism has been initialized.
    fn is_initialized(&self) -> bool;

    /// Backend readiness signal; flips to `true` once the connection task
    /// is up. Replaces sequencing by arbitrary delay.
    fn ready(&self) -> watch::Receiver<bool>;

    /// Establishes the backend connection.
    async fn connect(&self) -> Result<(), PushError>;

    /// Prompts for notification permission.
    async fn request_permission(&self) -> Result<PermissionStatus, PushError>;

    /// Requests a delivery token; only valid after permission was granted.
    async fn fetch_token(&self) -> Result<DeliveryToken, PushError>;

    /// Opens the foreground message stream.
    async fn subscribe(&self) -> Result<mpsc::UnboundedReceiver<PushMessage>, PushError>;

    /// Binds delivery to a registered background worker.
    async fn bind_worker(&self, binding: &WorkerBinding) -> Result<(), PushError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Scriptable push gateway for tests.
    pub struct MockPushGateway {
        initialized: AtomicBool,
        permission: Mutex<PermissionStatus>,
        ready_tx: watch::Sender<bool>,
        message_tx: Mutex<Option<mpsc::UnboundedSender<PushMessage>>>,
        bound: Mutex<Vec<WorkerBinding>>,
    }

    impl MockPushGateway {
        pub fn new() -> Self {
            let (ready_tx, _) = watch::channel(false);
            Self {
                initialized: AtomicBool::new(true),
                permission: Mutex::new(PermissionStatus::Granted),
                ready_tx,
                message_tx: Mutex::new(None),
                bound: Mutex::new(Vec::new()),
            }
        }

        pub fn uninitialized() -> Self {
            let gateway = Self::new();
            gateway.initialized.store(false, Ordering::SeqCst);
            gateway
        }

        pub fn deny_permission(&self) {
            *self.permission.lock().unwrap() = PermissionStatus::Denied;
        }

        /// Takes the sender feeding the foreground stream opened by
        /// `subscribe`; dropping it ends the stream.
        pub fn take_message_sender(&self) -> Option<mpsc::UnboundedSender<PushMessage>> {
            self.message_tx.lock().unwrap().take()
        }

        pub fn mark_ready(&self) {
            self.ready_tx.send_replace(true);
        }

        pub fn bound_workers(&self) -> Vec<WorkerBinding> {
            self.bound.lock().unwrap().clone()
        }
    }

    impl Default for MockPushGateway {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl PushGatewayPort for MockPushGateway {
        fn is_initialized(&self) -> bool {
            self.initialized.load(Ordering::SeqCst)
        }

        fn ready(&self) -> watch::Receiver<bool> {
            self.ready_tx.subscribe()
        }

        async fn connect(&self) -> Result<(), PushError> {
            self.initialized.store(true, Ordering::SeqCst);
            self.mark_ready();
            Ok(())
        }

        async fn request_permission(&self) -> Result<PermissionStatus, PushError> {
            Ok(*self.permission.lock().unwrap())
        }

        async fn fetch_token(&self) -> Result<DeliveryToken, PushError> {
            Ok(DeliveryToken::new("delivery-token-test"))
        }

        async fn subscribe(&self) -> Result<mpsc::UnboundedReceiver<PushMessage>, PushError> {
            let (tx, rx) = mpsc::unbounded_channel();
            *self.message_tx.lock().unwrap() = Some(tx);
            Ok(rx)
        }

        async fn bind_worker(&self, binding: &WorkerBinding) -> Result<(), PushError> {
            self.bound.lock().unwrap().push(binding.clone());
            Ok(())
        }
    }
}
