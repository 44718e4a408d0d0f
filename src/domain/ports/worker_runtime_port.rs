//! Background worker runtime port definition.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::PushError;

/// Handle to a registered background worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerBinding {
    id: Uuid,
}

impl WorkerBinding {
    /// Creates a binding with a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    /// Binding identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }
}

impl Default for WorkerBinding {
    fn default() -> Self {
        Self::new()
    }
}

/// Port for the platform runtime hosting the out-of-focus notification
/// relay.
#[async_trait]
pub trait WorkerRuntimePort: Send + Sync {
    /// Whether the runtime exists on this platform.
    fn is_available(&self) -> bool;

    /// Waits until the runtime reports ready.
    async fn ready(&self) -> Result<(), PushError>;

    /// Registers the relay worker.
    async fn register(&self) -> Result<WorkerBinding, PushError>;
}
