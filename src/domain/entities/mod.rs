//! Entity definitions.

mod appearance;
mod disclaimer;
mod feature_config;
mod preferences;
mod profile;
mod push_message;
mod session;

pub use appearance::{FontScale, ThemeVariant};
pub use disclaimer::DisclaimerStatus;
pub use feature_config::{DEFAULT_RADIO_STREAM_URL, FeatureConfig, FeatureConfigPatch};
pub use preferences::UserPreferences;
pub use profile::UserProfile;
pub use push_message::{PushMessage, PushNotification};
pub use session::SessionToken;
