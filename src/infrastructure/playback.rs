//! Notification sound playback via an external player process.

use std::path::PathBuf;

use async_trait::async_trait;
use directories::ProjectDirs;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::PushError;
use crate::domain::ports::SoundPlaybackPort;

const PLAYER_CANDIDATES: [&str; 4] = ["pw-play", "paplay", "aplay", "afplay"];

/// Plays bundled sound files by spawning a system audio player.
pub struct ProcessSoundPlayer {
    player: Option<String>,
    assets_dir: Option<PathBuf>,
}

impl ProcessSoundPlayer {
    /// Creates a player, honoring an explicit command override.
    #[must_use]
    pub fn new(player_override: Option<String>) -> Self {
        let player = player_override.or_else(|| {
            PLAYER_CANDIDATES
                .iter()
                .find(|candidate| which(candidate))
                .map(|candidate| (*candidate).to_string())
        });

        let assets_dir = ProjectDirs::from("io", "solacehq", "solace")
            .map(|dirs| dirs.data_dir().to_path_buf());

        Self { player, assets_dir }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.assets_dir {
            Some(dir) => dir.join(path),
            None => PathBuf::from(path),
        }
    }
}

fn which(command: &str) -> bool {
    std::process::Command::new("which")
        .arg(command)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[async_trait]
impl SoundPlaybackPort for ProcessSoundPlayer {
    async fn play(&self, path: &str) -> Result<(), PushError> {
        let Some(player) = &self.player else {
            return Err(PushError::playback("no audio player available"));
        };

        let file = self.resolve(path);
        debug!(player = %player, file = %file.display(), "Playing notification sound");

        let status = Command::new(player)
            .arg(&file)
            .status()
            .await
            .map_err(|e| PushError::playback(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(PushError::playback(format!(
                "player exited with {status}"
            )))
        }
    }
}
