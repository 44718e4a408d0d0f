//! REST adapter for the authentication backend.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::entities::{SessionToken, UserProfile};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthPort, AuthSnapshot, SessionStorePort};

#[derive(Debug, Deserialize)]
struct SessionResponse {
    token: String,
    profile: UserProfile,
}

/// Authenticates against the backend REST API and publishes the observable
/// auth state.
///
/// Session tokens are persisted through the injected session store so a
/// later process start can resume without credentials.
pub struct RestAuthClient {
    client: Client,
    base_url: String,
    sessions: Arc<dyn SessionStorePort>,
    state: watch::Sender<AuthSnapshot>,
}

impl RestAuthClient {
    /// Creates a new client.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn new(
        base_url: impl Into<String>,
        sessions: Arc<dyn SessionStorePort>,
    ) -> Result<Self, AuthError> {
        let client = Client::builder()
            .user_agent(concat!("solace/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AuthError::unexpected(format!("failed to create HTTP client: {e}")))?;

        let (state, _) = watch::channel(AuthSnapshot::default());

        Ok(Self {
            client,
            base_url: base_url.into(),
            sessions,
            state,
        })
    }

    /// Resolves a stored session, if any, and settles the loading state.
    ///
    /// Call once at startup; every failure path degrades to "signed out".
    pub async fn resolve_startup_session(&self) {
        let stored = match self.sessions.get_session().await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "Failed to read stored session");
                None
            }
        };

        match stored {
            Some(token) => match self.resume(&token).await {
                Ok(profile) => {
                    info!(user = %profile.display_name(), "Session resumed");
                }
                Err(e) => {
                    warn!(error = %e, "Stored session could not be resumed");
                    self.settle(None);
                }
            },
            None => {
                debug!("No stored session");
                self.settle(None);
            }
        }
    }

    fn settle(&self, user: Option<UserProfile>) {
        self.state.send_replace(AuthSnapshot {
            loading: false,
            user,
        });
    }

    fn map_transport(e: &reqwest::Error) -> AuthError {
        if e.is_timeout() {
            AuthError::network("request timed out")
        } else if e.is_connect() {
            AuthError::network("failed to reach authentication backend")
        } else {
            AuthError::network(e.to_string())
        }
    }

    async fn submit_credentials(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, AuthError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| Self::map_transport(&e))?;

        let session = match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(AuthError::InvalidCredentials);
            }
            StatusCode::CONFLICT => return Err(AuthError::AccountExists),
            status if status.is_success() => response
                .json::<SessionResponse>()
                .await
                .map_err(|e| AuthError::unexpected(e.to_string()))?,
            status => return Err(AuthError::unexpected(format!("HTTP {status}"))),
        };

        if let Some(token) = SessionToken::new(&session.token) {
            if let Err(e) = self.sessions.store_session(&token).await {
                warn!(error = %e, "Failed to persist session token");
            }
        }

        self.settle(Some(session.profile.clone()));
        Ok(session.profile)
    }
}

#[async_trait]
impl AuthPort for RestAuthClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        debug!("Submitting sign-up");
        self.submit_credentials("/v1/auth/signup", email, password)
            .await
    }

    async fn log_in(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        debug!("Submitting log-in");
        self.submit_credentials("/v1/auth/login", email, password)
            .await
    }

    async fn resume(&self, token: &SessionToken) -> Result<UserProfile, AuthError> {
        let url = format!("{}/v1/auth/me", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| Self::map_transport(&e))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(AuthError::SessionExpired),
            status if status.is_success() => {
                let profile = response
                    .json::<UserProfile>()
                    .await
                    .map_err(|e| AuthError::unexpected(e.to_string()))?;
                self.settle(Some(profile.clone()));
                Ok(profile)
            }
            status => Err(AuthError::unexpected(format!("HTTP {status}"))),
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Err(e) = self.sessions.delete_session().await {
            warn!(error = %e, "Failed to delete stored session");
        }
        self.settle(None);
        info!("Signed out");
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MemorySessionStore;

    #[tokio::test]
    async fn test_startup_without_session_settles_signed_out() {
        let client = RestAuthClient::new(
            "http://localhost:8080",
            Arc::new(MemorySessionStore::new()),
        )
        .unwrap();
        let mut rx = client.subscribe();

        assert!(rx.borrow().loading);

        client.resolve_startup_session().await;

        let snapshot = rx.borrow_and_update().clone();
        assert!(!snapshot.loading);
        assert!(snapshot.user.is_none());
    }
}
