//! REST adapter for the remote configuration document.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::domain::entities::{FeatureConfig, FeatureConfigPatch};
use crate::domain::errors::ConfigFetchError;
use crate::domain::ports::ConfigDocumentPort;

/// Fixed identifier of the singleton application document.
const DOCUMENT_ID: &str = "app";

/// Fetches and writes the configuration document over the backend REST
/// API.
pub struct RestConfigClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestConfigClient {
    /// Creates a new client.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, ConfigFetchError> {
        let client = Client::builder()
            .user_agent(concat!("solace/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .map_err(|e| ConfigFetchError::other(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    fn document_url(&self) -> String {
        format!("{}/v1/config/{DOCUMENT_ID}", self.base_url)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    fn classify_transport(e: &reqwest::Error) -> ConfigFetchError {
        if e.is_connect() || e.is_timeout() {
            ConfigFetchError::offline(e.to_string())
        } else {
            ConfigFetchError::other(e.to_string())
        }
    }
}

#[async_trait]
impl ConfigDocumentPort for RestConfigClient {
    async fn fetch(&self) -> Result<Option<FeatureConfigPatch>, ConfigFetchError> {
        debug!(url = %self.document_url(), "Fetching configuration document");

        let response = self
            .with_auth(self.client.get(self.document_url()))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Configuration fetch transport failure");
                Self::classify_transport(&e)
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => Err(
                ConfigFetchError::unavailable(format!("HTTP {}", response.status())),
            ),
            status if status.is_success() => response
                .json::<FeatureConfigPatch>()
                .await
                .map(Some)
                .map_err(|e| ConfigFetchError::decode(e.to_string())),
            status => Err(ConfigFetchError::other(format!("HTTP {status}"))),
        }
    }

    async fn write_defaults(&self, defaults: &FeatureConfig) -> Result<(), ConfigFetchError> {
        debug!(url = %self.document_url(), "Writing default configuration document");

        let response = self
            .with_auth(self.client.put(self.document_url()))
            .json(defaults)
            .send()
            .await
            .map_err(|e| ConfigFetchError::write_back(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ConfigFetchError::write_back(format!(
                "HTTP {}",
                response.status()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RestConfigClient::new("http://localhost:8080", None);
        assert!(client.is_ok());
    }

    #[test]
    fn test_document_url_uses_fixed_identifier() {
        let client = RestConfigClient::new("http://localhost:8080", None).unwrap();
        assert_eq!(client.document_url(), "http://localhost:8080/v1/config/app");
    }
}
