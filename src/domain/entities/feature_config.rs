//! Remote feature configuration.

use serde::{Deserialize, Serialize};

/// Stream URL used when the remote document does not override it.
pub const DEFAULT_RADIO_STREAM_URL: &str = "https://radio.solace.app/live";

/// Resolved feature configuration.
///
/// Every toggle the application can query has a compiled-in default of `true`
/// unless explicitly listed `false` in the remote document, so the resolved
/// configuration is always total. Consumers never observe a missing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Surface the radio player.
    #[serde(default = "default_true")]
    pub show_radio: bool,

    /// Surface the AI companion conversation.
    #[serde(default = "default_true")]
    pub show_companion: bool,

    /// Surface the content library.
    #[serde(default = "default_true")]
    pub show_library: bool,

    /// Allow account creation from the auth page.
    #[serde(default = "default_true")]
    pub allow_sign_up: bool,

    /// Allow profile avatar changes.
    #[serde(default = "default_true")]
    pub allow_avatar_upload: bool,

    /// Fallback radio stream URL.
    #[serde(default = "default_radio_stream_url")]
    pub radio_stream_url: String,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            show_radio: true,
            show_companion: true,
            show_library: true,
            allow_sign_up: true,
            allow_avatar_upload: true,
            radio_stream_url: default_radio_stream_url(),
        }
    }
}

impl FeatureConfig {
    /// Merges a remote document over this configuration.
    ///
    /// Fields present in the patch always win; absent fields keep their
    /// current value, so merging a partial document over the defaults never
    /// produces a missing key.
    #[must_use]
    pub fn merged(mut self, patch: FeatureConfigPatch) -> Self {
        if let Some(show_radio) = patch.show_radio {
            self.show_radio = show_radio;
        }
        if let Some(show_companion) = patch.show_companion {
            self.show_companion = show_companion;
        }
        if let Some(show_library) = patch.show_library {
            self.show_library = show_library;
        }
        if let Some(allow_sign_up) = patch.allow_sign_up {
            self.allow_sign_up = allow_sign_up;
        }
        if let Some(allow_avatar_upload) = patch.allow_avatar_upload {
            self.allow_avatar_upload = allow_avatar_upload;
        }
        if let Some(radio_stream_url) = patch.radio_stream_url {
            self.radio_stream_url = radio_stream_url;
        }
        self
    }
}

/// Remote configuration document as fetched.
///
/// Every field is optional; the document may be partial or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub show_radio: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub show_companion: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub show_library: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub allow_sign_up: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub allow_avatar_upload: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub radio_stream_url: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_radio_stream_url() -> String {
    DEFAULT_RADIO_STREAM_URL.to_string()
}
