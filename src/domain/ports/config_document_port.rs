//! Remote configuration document port definition.

use async_trait::async_trait;

use crate::domain::entities::{FeatureConfig, FeatureConfigPatch};
use crate::domain::errors::ConfigFetchError;

/// Port for the singleton remote configuration document.
///
/// The document is keyed by a fixed identifier on the backend; this port
/// never caches it locally.
#[async_trait]
pub trait ConfigDocumentPort: Send + Sync {
    /// Fetches the document; `Ok(None)` means it does not exist yet.
    async fn fetch(&self) -> Result<Option<FeatureConfigPatch>, ConfigFetchError>;

    /// Writes the full default set back to the remote store.
    async fn write_defaults(&self, defaults: &FeatureConfig) -> Result<(), ConfigFetchError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    /// What a fetch should return.
    #[derive(Clone)]
    pub enum FetchBehavior {
        Document(FeatureConfigPatch),
        Missing,
        Fail(ConfigFetchError),
    }

    /// Scriptable remote document store.
    pub struct MockConfigDocuments {
        behavior: Mutex<FetchBehavior>,
        written: Mutex<Vec<FeatureConfig>>,
        fetch_gate: Mutex<Option<Arc<Notify>>>,
    }

    impl MockConfigDocuments {
        pub fn new(behavior: FetchBehavior) -> Self {
            Self {
                behavior: Mutex::new(behavior),
                written: Mutex::new(Vec::new()),
                fetch_gate: Mutex::new(None),
            }
        }

        /// Makes subsequent fetches block until the gate is notified.
        pub fn gate_fetches(&self, gate: Arc<Notify>) {
            *self.fetch_gate.lock().unwrap() = Some(gate);
        }

        pub fn set_behavior(&self, behavior: FetchBehavior) {
            *self.behavior.lock().unwrap() = behavior;
        }

        /// Documents written back, in order.
        pub fn written(&self) -> Vec<FeatureConfig> {
            self.written.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ConfigDocumentPort for MockConfigDocuments {
        async fn fetch(&self) -> Result<Option<FeatureConfigPatch>, ConfigFetchError> {
            let gate = self.fetch_gate.lock().unwrap().clone();
            if let Some(gate) = gate {
                gate.notified().await;
            }
            match self.behavior.lock().unwrap().clone() {
                FetchBehavior::Document(patch) => Ok(Some(patch)),
                FetchBehavior::Missing => Ok(None),
                FetchBehavior::Fail(error) => Err(error),
            }
        }

        async fn write_defaults(&self, defaults: &FeatureConfig) -> Result<(), ConfigFetchError> {
            self.written.lock().unwrap().push(defaults.clone());
            Ok(())
        }
    }
}
