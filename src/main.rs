use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use solace::application::services::{ConfigService, NotificationPipeline};
use solace::domain::ports::{AlertPresenterPort, PreferenceStorePort, PushGatewayPort};
use solace::infrastructure::config::BACKEND_KEY_VAR;
use solace::infrastructure::{
    AppConfig, CliArgs, DesktopAlertPresenter, KeyringSessionStore, ProcessSoundPlayer,
    RelayWorkerRuntime, RestAuthClient, RestConfigClient, StaticTranslator, StorageManager,
    TomlPreferenceStore, WsPushGateway, diagnose_api_keys,
};
use solace::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

/// Forwards each presented alert to the desktop daemon and the in-app feed.
struct FanoutPresenter {
    desktop: DesktopAlertPresenter,
    feed: mpsc::UnboundedSender<(String, String)>,
}

impl AlertPresenterPort for FanoutPresenter {
    fn present(&self, title: &str, body: &str) {
        self.desktop.present(title, body);
        let _ = self.feed.send((title.to_string(), body.to_string()));
    }
}

async fn create_app() -> Result<App> {
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = solace::VERSION, "Starting Solace");

    diagnose_api_keys();
    let api_key = std::env::var(BACKEND_KEY_VAR).ok();

    let store = Arc::new(TomlPreferenceStore::new());
    let sessions = Arc::new(KeyringSessionStore::new());
    let auth = Arc::new(RestAuthClient::new(&config.backend_url, sessions)?);

    let locale = store.locale().await.unwrap_or_default();
    let translator = Arc::new(StaticTranslator::new(locale));

    let documents = Arc::new(RestConfigClient::new(&config.backend_url, api_key.clone())?);
    let config_service = Arc::new(ConfigService::new(documents));

    let gateway = Arc::new(WsPushGateway::new(
        &config.backend_url,
        &config.gateway_url,
        api_key,
        config.enable_desktop_notifications,
    )?);
    let worker = Arc::new(RelayWorkerRuntime::new(gateway.ready()));
    let playback = Arc::new(ProcessSoundPlayer::new(config.sound_player.clone()));

    let (alert_tx, alert_rx) = mpsc::unbounded_channel();
    let presenter = Arc::new(FanoutPresenter {
        desktop: DesktopAlertPresenter::new(config.enable_desktop_notifications),
        feed: alert_tx,
    });

    let pipeline = Arc::new(NotificationPipeline::new(
        gateway.clone(),
        worker,
        playback,
        presenter,
        translator,
    ));

    {
        let auth = auth.clone();
        tokio::spawn(async move { auth.resolve_startup_session().await });
    }

    Ok(App::new(
        auth,
        store,
        gateway,
        config_service,
        pipeline,
        alert_rx,
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app().await?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
