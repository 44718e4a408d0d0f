//! Remote configuration reconciliation.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::domain::entities::FeatureConfig;
use crate::domain::errors::ConfigFetchError;
use crate::domain::ports::ConfigDocumentPort;

/// Keeps the resolved feature configuration synchronized with the remote
/// document.
///
/// `resolve` is idempotent and safe to call repeatedly; consumers always
/// read a total configuration. While a resolution is in flight the
/// previously resolved value (or `None` before the first completion) stays
/// visible, and the swap is a single atomic replacement.
pub struct ConfigService {
    documents: Arc<dyn ConfigDocumentPort>,
    resolved: RwLock<Option<FeatureConfig>>,
    last_error: RwLock<Option<ConfigFetchError>>,
}

impl ConfigService {
    /// Creates a new service over the given document store.
    #[must_use]
    pub fn new(documents: Arc<dyn ConfigDocumentPort>) -> Self {
        Self {
            documents,
            resolved: RwLock::new(None),
            last_error: RwLock::new(None),
        }
    }

    /// Currently resolved configuration, if any resolution completed.
    #[must_use]
    pub fn resolved(&self) -> Option<FeatureConfig> {
        self.resolved.read().clone()
    }

    /// Error descriptor from the most recent resolution, for observability.
    #[must_use]
    pub fn last_error(&self) -> Option<ConfigFetchError> {
        self.last_error.read().clone()
    }

    /// Fetches the remote document and replaces the resolved configuration.
    ///
    /// Never fails from the caller's perspective: a missing document is
    /// healed by writing the defaults back, and any fetch failure resolves
    /// to exactly the compiled-in defaults.
    pub async fn resolve(&self) -> FeatureConfig {
        let (config, error) = match self.documents.fetch().await {
            Ok(Some(patch)) => {
                debug!("Remote configuration document fetched");
                (FeatureConfig::default().merged(patch), None)
            }
            Ok(None) => {
                let defaults = FeatureConfig::default();
                info!("Remote configuration missing, writing defaults back");
                let error = match self.documents.write_defaults(&defaults).await {
                    Ok(()) => None,
                    Err(e) => {
                        warn!(error = %e, "Failed to write default configuration back");
                        Some(e)
                    }
                };
                (defaults, error)
            }
            Err(e) => {
                if e.is_offline_like() {
                    info!(error = %e, "Configuration backend offline, using defaults");
                } else {
                    warn!(error = %e, "Configuration fetch failed, using defaults");
                }
                (FeatureConfig::default(), Some(e))
            }
        };

        *self.resolved.write() = Some(config.clone());
        *self.last_error.write() = error;

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FeatureConfigPatch;
    use crate::domain::ports::mocks::{FetchBehavior, MockConfigDocuments};
    use tokio::sync::Notify;

    fn patch(show_radio: bool) -> FeatureConfigPatch {
        FeatureConfigPatch {
            show_radio: Some(show_radio),
            ..FeatureConfigPatch::default()
        }
    }

    #[tokio::test]
    async fn test_partial_document_merges_over_defaults() {
        let docs = Arc::new(MockConfigDocuments::new(FetchBehavior::Document(
            FeatureConfigPatch {
                show_radio: Some(false),
                radio_stream_url: Some("https://example.org/live".to_string()),
                ..FeatureConfigPatch::default()
            },
        )));
        let service = ConfigService::new(docs);

        let config = service.resolve().await;

        assert!(!config.show_radio);
        assert_eq!(config.radio_stream_url, "https://example.org/live");
        assert!(config.show_companion);
        assert!(config.show_library);
        assert!(service.last_error().is_none());
    }

    #[tokio::test]
    async fn test_missing_document_writes_exact_defaults_back() {
        let docs = Arc::new(MockConfigDocuments::new(FetchBehavior::Missing));
        let service = ConfigService::new(docs.clone());

        let config = service.resolve().await;

        assert_eq!(config, FeatureConfig::default());
        assert_eq!(docs.written(), vec![FeatureConfig::default()]);
    }

    #[tokio::test]
    async fn test_fetch_failure_resolves_to_exact_defaults() {
        let docs = Arc::new(MockConfigDocuments::new(FetchBehavior::Fail(
            ConfigFetchError::offline("no route to host"),
        )));
        let service = ConfigService::new(docs.clone());

        let config = service.resolve().await;

        assert_eq!(config, FeatureConfig::default());
        assert!(service.last_error().is_some_and(|e| e.is_offline_like()));
        assert!(docs.written().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_replaces_previous_resolution() {
        let docs = Arc::new(MockConfigDocuments::new(FetchBehavior::Document(patch(
            false,
        ))));
        let service = ConfigService::new(docs.clone());

        assert!(!service.resolve().await.show_radio);

        docs.set_behavior(FetchBehavior::Document(patch(true)));
        assert!(service.resolve().await.show_radio);
    }

    #[tokio::test]
    async fn test_previous_value_visible_while_resolution_in_flight() {
        let docs = Arc::new(MockConfigDocuments::new(FetchBehavior::Document(patch(
            false,
        ))));
        let service = Arc::new(ConfigService::new(docs.clone()));

        service.resolve().await;

        let gate = Arc::new(Notify::new());
        docs.gate_fetches(gate.clone());
        docs.set_behavior(FetchBehavior::Document(patch(true)));

        let in_flight = {
            let service = service.clone();
            tokio::spawn(async move { service.resolve().await })
        };
        tokio::task::yield_now().await;

        let visible = service.resolved().expect("previous value stays visible");
        assert!(!visible.show_radio);

        gate.notify_one();
        in_flight.await.unwrap();
        assert!(service.resolved().unwrap().show_radio);
    }

    #[tokio::test]
    async fn test_no_resolution_yet_reads_none() {
        let docs = Arc::new(MockConfigDocuments::new(FetchBehavior::Missing));
        let service = ConfigService::new(docs);
        assert!(service.resolved().is_none());
    }
}
