//! Authentication error types.

use thiserror::Error;

/// Authentication error variants.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("an account already exists for this email")]
    AccountExists,

    #[error("session expired or revoked")]
    SessionExpired,

    #[error("network error during authentication: {message}")]
    Network { message: String },

    #[error("session storage error: {message}")]
    Storage { message: String },

    #[error("unexpected authentication error: {message}")]
    Unexpected { message: String },
}

impl AuthError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a storage error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates an unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Whether the error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
