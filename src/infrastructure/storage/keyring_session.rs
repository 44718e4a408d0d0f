//! Keyring-based session storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::SessionToken;
use crate::domain::errors::AuthError;
use crate::domain::ports::SessionStorePort;

const KEYRING_SERVICE: &str = "solace";
const KEYRING_USER: &str = "session";

/// System keyring session storage adapter.
pub struct KeyringSessionStore {
    service: String,
    user: String,
}

impl KeyringSessionStore {
    /// Creates new storage with default names.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
            user: KEYRING_USER.to_string(),
        }
    }

    /// Creates storage with custom names.
    #[must_use]
    pub fn with_names(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }

    fn entry(&self) -> Result<Entry, AuthError> {
        Entry::new(&self.service, &self.user)
            .map_err(|e| AuthError::storage(format!("failed to access keyring: {e}")))
    }
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStorePort for KeyringSessionStore {
    async fn get_session(&self) -> Result<Option<SessionToken>, AuthError> {
        debug!(service = %self.service, "Retrieving session from keyring");

        let entry = self.entry()?;

        match entry.get_password() {
            Ok(password) => Ok(SessionToken::new(password)),
            Err(keyring::Error::NoEntry) => {
                debug!("No session stored in keyring");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Failed to retrieve session from keyring");
                Err(AuthError::storage(e.to_string()))
            }
        }
    }

    async fn store_session(&self, token: &SessionToken) -> Result<(), AuthError> {
        debug!(service = %self.service, "Storing session in keyring");

        let entry = self.entry()?;

        entry.set_password(token.as_str()).map_err(|e| {
            warn!(error = %e, "Failed to store session in keyring");
            AuthError::storage(e.to_string())
        })
    }

    async fn delete_session(&self) -> Result<(), AuthError> {
        debug!(service = %self.service, "Deleting session from keyring");

        let entry = self.entry()?;

        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => {
                warn!(error = %e, "Failed to delete session from keyring");
                Err(AuthError::storage(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires system keyring"]
    async fn test_store_and_retrieve_session() {
        let storage = KeyringSessionStore::with_names("solace-test", "test-session");
        let token = SessionToken::new_unchecked("sess-0123456789abcdef");

        storage.store_session(&token).await.unwrap();

        let retrieved = storage.get_session().await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().as_str(), token.as_str());

        storage.delete_session().await.unwrap();
    }
}
