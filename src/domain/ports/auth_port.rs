//! Authentication port definition.

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::entities::{SessionToken, UserProfile};
use crate::domain::errors::AuthError;

/// Observable authentication state.
///
/// `loading` is true while the backend is still resolving an existing
/// session; consumers must not treat the absence of a user as "signed out"
/// until it clears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSnapshot {
    /// Session resolution still in flight.
    pub loading: bool,
    /// Current user, once resolved.
    pub user: Option<UserProfile>,
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self {
            loading: true,
            user: None,
        }
    }
}

/// Port for the authentication collaborator.
///
/// Credential verification and account creation are backend concerns; this
/// client only drives the calls and observes the resulting state.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Creates an account and signs the user in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserProfile, AuthError>;

    /// Signs an existing user in.
    async fn log_in(&self, email: &str, password: &str) -> Result<UserProfile, AuthError>;

    /// Resumes a previously stored session.
    async fn resume(&self, token: &SessionToken) -> Result<UserProfile, AuthError>;

    /// Signs the current user out.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Subscribes to authentication state changes.
    fn subscribe(&self) -> watch::Receiver<AuthSnapshot>;
}
