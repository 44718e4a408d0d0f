//! Session storage port definition.

use async_trait::async_trait;

use crate::domain::entities::SessionToken;
use crate::domain::errors::AuthError;

/// Port for session token persistence.
#[async_trait]
pub trait SessionStorePort: Send + Sync {
    /// Retrieves the stored session token.
    async fn get_session(&self) -> Result<Option<SessionToken>, AuthError>;

    /// Stores the session token securely.
    async fn store_session(&self, token: &SessionToken) -> Result<(), AuthError>;

    /// Deletes the stored session token.
    async fn delete_session(&self) -> Result<(), AuthError>;
}
