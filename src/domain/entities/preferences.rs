//! User preferences owned by the auth collaborator.

use serde::{Deserialize, Serialize};

use super::appearance::{FontScale, ThemeVariant};

/// Per-user presentation preferences.
///
/// Owned by the authentication backend and read-only from this client's
/// perspective; the client reacts to changes but never writes them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Explicit theme choice; `None` defers to persisted/derived resolution.
    #[serde(default)]
    pub theme: Option<ThemeVariant>,

    /// Font size class.
    #[serde(default)]
    pub font_scale: FontScale,

    /// Identifier of the notification sound.
    #[serde(default = "default_sound")]
    pub notification_sound: String,

    /// Suppresses notification sounds entirely when set.
    #[serde(default)]
    pub do_not_disturb: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: None,
            font_scale: FontScale::default(),
            notification_sound: default_sound(),
            do_not_disturb: false,
        }
    }
}

fn default_sound() -> String {
    crate::domain::services::sound_resolver::DEFAULT_SOUND_ID.to_string()
}
