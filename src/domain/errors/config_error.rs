//! Configuration fetch error types.

use thiserror::Error;

/// Failure while fetching or writing the remote configuration document.
///
/// Classification is diagnostic only: every class falls back to the
/// compiled-in defaults, the variants differ in message text.
#[derive(Debug, Clone, Error)]
pub enum ConfigFetchError {
    /// Network unavailable or the client is offline.
    #[error("configuration backend unreachable: {message}")]
    Offline {
        #[allow(missing_docs)]
        message: String,
    },

    /// Backend reachable but reported itself unavailable.
    #[error("configuration backend unavailable: {message}")]
    Unavailable {
        #[allow(missing_docs)]
        message: String,
    },

    /// The document could not be decoded.
    #[error("malformed configuration document: {message}")]
    Decode {
        #[allow(missing_docs)]
        message: String,
    },

    /// Writing the default document back failed.
    #[error("failed to write default configuration: {message}")]
    WriteBack {
        #[allow(missing_docs)]
        message: String,
    },

    /// Anything else.
    #[error("configuration fetch failed: {message}")]
    Other {
        #[allow(missing_docs)]
        message: String,
    },
}

impl ConfigFetchError {
    /// Creates an offline-class error.
    #[must_use]
    pub fn offline(message: impl Into<String>) -> Self {
        Self::Offline {
            message: message.into(),
        }
    }

    /// Creates an unavailable-class error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates a write-back error.
    #[must_use]
    pub fn write_back(message: impl Into<String>) -> Self {
        Self::WriteBack {
            message: message.into(),
        }
    }

    /// Creates an uncategorized error.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether this failure looks like missing connectivity rather than a
    /// server-side fault.
    #[must_use]
    pub const fn is_offline_like(&self) -> bool {
        matches!(self, Self::Offline { .. } | Self::Unavailable { .. })
    }
}
