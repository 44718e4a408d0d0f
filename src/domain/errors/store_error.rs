//! Persistent store error types.

use thiserror::Error;

/// Failure while reading or writing the local preference store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform config directory could not be determined.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,

    /// Underlying IO failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure.
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Deserialization failure.
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
