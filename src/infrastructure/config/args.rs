use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "solace",
    version,
    about = "A calm terminal companion client",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// REST backend base URL.
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Push gateway WebSocket URL.
    #[arg(long, value_name = "URL")]
    pub gateway_url: Option<String>,

    /// Enable desktop notifications.
    #[arg(long)]
    pub enable_desktop_notifications: Option<bool>,
}
