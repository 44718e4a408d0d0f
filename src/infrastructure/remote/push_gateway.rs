//! WebSocket push gateway adapter.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use futures_util::StreamExt;
use parking_lot::Mutex;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::PushMessage;
use crate::domain::errors::PushError;
use crate::domain::ports::{
    DeliveryToken, PermissionStatus, PushGatewayPort, WorkerBinding,
};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Push delivery mechanism backed by the backend REST API plus a WebSocket
/// message stream.
pub struct WsPushGateway {
    http: Client,
    backend_url: String,
    gateway_url: String,
    api_key: Option<String>,
    notifications_enabled: bool,
    device_id: Uuid,
    initialized: AtomicBool,
    ready_tx: watch::Sender<bool>,
    subscriber: Arc<Mutex<Option<mpsc::UnboundedSender<PushMessage>>>>,
}

impl WsPushGateway {
    /// Creates a new gateway.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn new(
        backend_url: impl Into<String>,
        gateway_url: impl Into<String>,
        api_key: Option<String>,
        notifications_enabled: bool,
    ) -> Result<Self, PushError> {
        let http = Client::builder()
            .user_agent(concat!("solace/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .map_err(|e| PushError::stream(format!("failed to create HTTP client: {e}")))?;

        let (ready_tx, _) = watch::channel(false);

        Ok(Self {
            http,
            backend_url: backend_url.into(),
            gateway_url: gateway_url.into(),
            api_key,
            notifications_enabled,
            device_id: Uuid::new_v4(),
            initialized: AtomicBool::new(false),
            ready_tx,
            subscriber: Arc::new(Mutex::new(None)),
        })
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait]
impl PushGatewayPort for WsPushGateway {
    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    fn ready(&self) -> watch::Receiver<bool> {
        self.ready_tx.subscribe()
    }

    async fn connect(&self) -> Result<(), PushError> {
        debug!(url = %self.gateway_url, "Connecting push gateway");

        let (stream, _) = connect_async(&self.gateway_url)
            .await
            .map_err(|e| PushError::stream(e.to_string()))?;

        self.initialized.store(true, Ordering::SeqCst);
        self.ready_tx.send_replace(true);
        info!("Push gateway connected");

        let subscriber = self.subscriber.clone();
        tokio::spawn(async move {
            let (_write, mut read) = stream.split();
            while let Some(frame) = read.next().await {
                match frame {
                    Ok(Message::Text(text)) => {
                        match serde_json::from_str::<PushMessage>(text.as_str()) {
                            Ok(message) => {
                                if let Some(tx) = subscriber.lock().as_ref() {
                                    let _ = tx.send(message);
                                }
                            }
                            Err(e) => {
                                warn!(error = %e, "Unrecognized push payload shape, dropping");
                            }
                        }
                    }
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(e) => {
                        warn!(error = %e, "Push stream read failed");
                        break;
                    }
                }
            }
            debug!("Push message stream closed");
        });

        Ok(())
    }

    async fn request_permission(&self) -> Result<PermissionStatus, PushError> {
        // The terminal analog of the permission prompt: the operator-level
        // notification switch answers it ahead of time.
        if self.notifications_enabled {
            Ok(PermissionStatus::Granted)
        } else {
            Ok(PermissionStatus::Denied)
        }
    }

    async fn fetch_token(&self) -> Result<DeliveryToken, PushError> {
        let url = format!("{}/v1/push/register", self.backend_url);
        let response = self
            .with_auth(self.http.post(&url))
            .json(&serde_json::json!({ "device_id": self.device_id.to_string() }))
            .send()
            .await
            .map_err(|e| PushError::token(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PushError::token(format!("HTTP {}", response.status())));
        }

        let body = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| PushError::token(e.to_string()))?;

        Ok(DeliveryToken::new(body.token))
    }

    async fn subscribe(&self) -> Result<mpsc::UnboundedReceiver<PushMessage>, PushError> {
        if !self.is_initialized() {
            return Err(PushError::Unsupported);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        *self.subscriber.lock() = Some(tx);
        Ok(rx)
    }

    async fn bind_worker(&self, binding: &WorkerBinding) -> Result<(), PushError> {
        let url = format!("{}/v1/push/bind", self.backend_url);
        let response = self
            .with_auth(self.http.post(&url))
            .json(&serde_json::json!({
                "device_id": self.device_id.to_string(),
                "binding_id": binding.id().to_string(),
            }))
            .send()
            .await
            .map_err(|e| PushError::bind(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(PushError::bind(format!("HTTP {}", response.status())))
        }
    }
}
