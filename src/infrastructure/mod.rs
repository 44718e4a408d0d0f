//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Desktop alert presentation.
pub mod notifications;
/// Notification sound playback.
pub mod playback;
/// Remote backend adapters.
pub mod remote;
/// Durable preference persistence.
pub mod state_store;
/// Session storage adapters.
pub mod storage;
/// Static translation tables.
pub mod translator;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager, diagnose_api_keys};
pub use notifications::DesktopAlertPresenter;
pub use playback::ProcessSoundPlayer;
pub use remote::{RelayWorkerRuntime, RestAuthClient, RestConfigClient, WsPushGateway};
pub use state_store::TomlPreferenceStore;
pub use storage::KeyringSessionStore;
pub use translator::StaticTranslator;
