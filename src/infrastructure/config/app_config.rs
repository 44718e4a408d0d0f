//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "solace";
const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "solacehq";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration loaded from file and merged with CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// REST backend base URL.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Push gateway WebSocket URL.
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,

    /// Enable desktop notifications.
    #[serde(default = "default_true")]
    pub enable_desktop_notifications: bool,

    /// External player command for notification sounds; autodetected when
    /// unset.
    #[serde(default)]
    pub sound_player: Option<String>,
}

fn default_backend_url() -> String {
    "https://api.solace.app".to_string()
}

fn default_gateway_url() -> String {
    "wss://push.solace.app/v1/stream".to_string()
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(backend_url) = args.backend_url {
            self.backend_url = backend_url;
        }
        if let Some(gateway_url) = args.gateway_url {
            self.gateway_url = gateway_url;
        }
        if let Some(notifications) = args.enable_desktop_notifications {
            self.enable_desktop_notifications = notifications;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("solace.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            backend_url: default_backend_url(),
            gateway_url: default_gateway_url(),
            enable_desktop_notifications: true,
            sound_player: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_overrides() {
        let toml_content = r#"
            log_level = "debug"
            backend_url = "http://localhost:8080"
            enable_desktop_notifications = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.backend_url, "http://localhost:8080");
        assert!(!config.enable_desktop_notifications);
        assert_eq!(config.gateway_url, "wss://push.solace.app/v1/stream");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.enable_desktop_notifications);
        assert!(config.sound_player.is_none());
    }
}
