//! Notification pipeline error types.

use thiserror::Error;

/// Failure inside the notification pipeline.
///
/// Every variant is non-fatal by contract: callers log and degrade, nothing
/// here ever blocks bootstrap or the main experience.
#[derive(Debug, Clone, Error)]
pub enum PushError {
    /// The delivery mechanism is unsupported or not initialized.
    #[error("push delivery is unsupported or uninitialized")]
    Unsupported,

    /// The user declined the notification permission prompt.
    #[error("notification permission denied")]
    PermissionDenied,

    /// Delivery token acquisition failed.
    #[error("failed to obtain delivery token: {message}")]
    TokenFailure {
        #[allow(missing_docs)]
        message: String,
    },

    /// The background worker runtime never became ready.
    #[error("background worker runtime not ready: {message}")]
    WorkerNotReady {
        #[allow(missing_docs)]
        message: String,
    },

    /// Registering the background worker failed.
    #[error("background worker registration failed: {message}")]
    RegistrationFailed {
        #[allow(missing_docs)]
        message: String,
    },

    /// Binding the delivery mechanism to the registered worker failed.
    #[error("failed to bind delivery to worker: {message}")]
    BindFailed {
        #[allow(missing_docs)]
        message: String,
    },

    /// Sound playback failed (decoder, device, missing player).
    #[error("sound playback failed: {message}")]
    Playback {
        #[allow(missing_docs)]
        message: String,
    },

    /// The foreground message stream could not be opened.
    #[error("foreground message stream unavailable: {message}")]
    StreamUnavailable {
        #[allow(missing_docs)]
        message: String,
    },
}

impl PushError {
    /// Creates a token acquisition error.
    #[must_use]
    pub fn token(message: impl Into<String>) -> Self {
        Self::TokenFailure {
            message: message.into(),
        }
    }

    /// Creates a worker readiness error.
    #[must_use]
    pub fn worker_not_ready(message: impl Into<String>) -> Self {
        Self::WorkerNotReady {
            message: message.into(),
        }
    }

    /// Creates a registration error.
    #[must_use]
    pub fn registration(message: impl Into<String>) -> Self {
        Self::RegistrationFailed {
            message: message.into(),
        }
    }

    /// Creates a bind error.
    #[must_use]
    pub fn bind(message: impl Into<String>) -> Self {
        Self::BindFailed {
            message: message.into(),
        }
    }

    /// Creates a playback error.
    #[must_use]
    pub fn playback(message: impl Into<String>) -> Self {
        Self::Playback {
            message: message.into(),
        }
    }

    /// Creates a stream error.
    #[must_use]
    pub fn stream(message: impl Into<String>) -> Self {
        Self::StreamUnavailable {
            message: message.into(),
        }
    }
}
