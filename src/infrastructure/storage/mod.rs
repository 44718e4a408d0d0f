//! Session storage adapters.

#[cfg(feature = "keyring")]
mod keyring_session;
#[cfg(not(feature = "keyring"))]
mod keyring_session_stub;

#[cfg(feature = "keyring")]
pub use keyring_session::KeyringSessionStore;
#[cfg(not(feature = "keyring"))]
pub use keyring_session_stub::KeyringSessionStore;
