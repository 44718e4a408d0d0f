//! Sound playback port definition.

use async_trait::async_trait;

use crate::domain::errors::PushError;

/// Port for notification sound playback.
///
/// Playback is best-effort; failures are reported, never surfaced to the
/// user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SoundPlaybackPort: Send + Sync {
    /// Plays the sound file at `path`.
    async fn play(&self, path: &str) -> Result<(), PushError>;
}
