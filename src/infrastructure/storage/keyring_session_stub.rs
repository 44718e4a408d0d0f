//! In-memory session storage used when the keyring feature is disabled.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::SessionToken;
use crate::domain::errors::AuthError;
use crate::domain::ports::SessionStorePort;

/// Process-local session storage; sessions do not survive restarts.
#[derive(Default)]
pub struct KeyringSessionStore {
    token: RwLock<Option<SessionToken>>,
}

impl KeyringSessionStore {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorePort for KeyringSessionStore {
    async fn get_session(&self) -> Result<Option<SessionToken>, AuthError> {
        Ok(self.token.read().await.clone())
    }

    async fn store_session(&self, token: &SessionToken) -> Result<(), AuthError> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn delete_session(&self) -> Result<(), AuthError> {
        *self.token.write().await = None;
        Ok(())
    }
}
