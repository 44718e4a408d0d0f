//! Bootstrap orchestrator.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, Timelike};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent};
use futures_util::StreamExt;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::services::{AppearanceService, ConfigService, NotificationPipeline};
use crate::application::use_cases::AcceptDisclaimerUseCase;
use crate::domain::entities::{DisclaimerStatus, UserPreferences};
use crate::domain::errors::ConfigFetchError;
use crate::domain::ports::{AuthPort, AuthSnapshot, PreferenceStorePort, PushGatewayPort};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::{Palette, RootContext, detect_system_variant};
use crate::presentation::ui::{
    AuthAction, AuthMode, AuthScreen, DisclaimerAction, DisclaimerScreen, MainAction,
    MainScreenState, SplashScreen,
};

/// Fixed splash duration; deliberately not tied to any asynchronous
/// completion so time-to-first-gate stays bounded.
pub(crate) const SPLASH_DURATION: Duration = Duration::from_millis(2500);
/// Legacy settle delay, used only when the backend-ready signal is gone.
const NOTIFY_SETUP_FALLBACK: Duration = Duration::from_secs(2);
const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug)]
enum Action {
    ConfigResolved(crate::domain::entities::FeatureConfig, Option<String>),
    AuthFailed(String),
}

/// Bootstrap stage; decides which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Splash,
    DisclaimerGate,
    AuthResolving,
    AuthPage,
    Main,
    Exiting,
}

enum Screen {
    Splash(SplashScreen),
    Disclaimer(DisclaimerScreen),
    Resolving,
    Auth(AuthScreen),
    Main(Box<MainScreenState>),
}

/// Selects the visible stage from the three bootstrap inputs.
///
/// The splash timer gates everything; after it, the persisted disclaimer
/// flag, then the auth collaborator's loading/current-user state.
fn next_stage(splash_elapsed: bool, disclaimer: DisclaimerStatus, auth: &AuthSnapshot) -> Stage {
    if !splash_elapsed {
        Stage::Splash
    } else if !disclaimer.has_agreed() {
        Stage::DisclaimerGate
    } else if auth.loading {
        Stage::AuthResolving
    } else if auth.user.is_some() {
        Stage::Main
    } else {
        Stage::AuthPage
    }
}

fn config_note(error: &ConfigFetchError) -> String {
    if error.is_offline_like() {
        "Offline — showing default features".to_string()
    } else {
        format!("Showing default features ({error})")
    }
}

/// Top-level application state machine.
pub struct App {
    stage: Stage,
    screen: Screen,
    auth: Arc<dyn AuthPort>,
    store: Arc<dyn PreferenceStorePort>,
    gateway: Arc<dyn PushGatewayPort>,
    config_service: Arc<ConfigService>,
    pipeline: Arc<NotificationPipeline>,
    appearance: AppearanceService,
    accept_disclaimer: AcceptDisclaimerUseCase,
    auth_rx: watch::Receiver<AuthSnapshot>,
    auth_state: AuthSnapshot,
    disclaimer: DisclaimerStatus,
    splash_elapsed: bool,
    root_context: RootContext,
    palette: Palette,
    font_points: u16,
    notify_setup: Option<JoinHandle<()>>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    alert_rx: mpsc::UnboundedReceiver<(String, String)>,
}

impl App {
    /// Creates the orchestrator over its collaborators.
    #[must_use]
    pub fn new(
        auth: Arc<dyn AuthPort>,
        store: Arc<dyn PreferenceStorePort>,
        gateway: Arc<dyn PushGatewayPort>,
        config_service: Arc<ConfigService>,
        pipeline: Arc<NotificationPipeline>,
        alert_rx: mpsc::UnboundedReceiver<(String, String)>,
    ) -> Self {
        let auth_rx = auth.subscribe();
        let auth_state = auth_rx.borrow().clone();
        let appearance = AppearanceService::new(store.clone());
        let accept_disclaimer = AcceptDisclaimerUseCase::new(store.clone());
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            stage: Stage::Splash,
            screen: Screen::Splash(SplashScreen::new()),
            auth,
            store,
            gateway,
            config_service,
            pipeline,
            appearance,
            accept_disclaimer,
            auth_rx,
            auth_state,
            disclaimer: DisclaimerStatus::NotAgreed,
            splash_elapsed: false,
            root_context: RootContext::new(),
            palette: Palette::default(),
            font_points: 16,
            notify_setup: None,
            action_tx,
            action_rx,
            alert_rx,
        }
    }

    /// Runs the application until exit.
    ///
    /// # Errors
    /// Returns an error if terminal IO fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.disclaimer = match self.store.disclaimer_status().await {
            Ok(status) => status,
            Err(e) => {
                warn!(error = %e, "Failed to read disclaimer flag, re-gating");
                DisclaimerStatus::NotAgreed
            }
        };

        // Backend init and eager worker registration are unordered with the
        // splash timer: no outcome of theirs may delay the first gate.
        self.spawn_backend_init();
        self.spawn_config_resolution();

        let snapshot = self.auth_state.clone();
        self.apply_appearance(&snapshot).await;

        self.run_event_loop(terminal).await?;

        self.cancel_scheduled_setup();
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);
        let splash_timer = tokio::time::sleep(SPLASH_DURATION);
        tokio::pin!(splash_timer);

        terminal.draw(|frame| self.render(frame))?;

        while self.stage != Stage::Exiting {
            tokio::select! {
                biased;

                () = &mut splash_timer, if !self.splash_elapsed => {
                    self.splash_elapsed = true;
                    self.sync_stage();
                    terminal.draw(|frame| self.render(frame))?;
                }

                changed = self.auth_rx.changed() => {
                    if changed.is_ok() {
                        let snapshot = self.auth_rx.borrow_and_update().clone();
                        self.on_auth_change(snapshot).await;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some((title, body)) = self.alert_rx.recv() => {
                    if let Screen::Main(state) = &mut self.screen {
                        state.push_alert(title, body);
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event).await == EventResult::Exit {
                        self.stage = Stage::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if let Screen::Splash(splash) = &mut self.screen {
                        splash.tick(ANIMATION_TICK_RATE);
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame<'_>) {
        match &mut self.screen {
            Screen::Splash(screen) => frame.render_widget(screen, frame.area()),
            Screen::Disclaimer(screen) => frame.render_widget(&*screen, frame.area()),
            Screen::Resolving => {
                let [_, center, _] = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .areas(frame.area());
                frame.render_widget(
                    Paragraph::new("Signing you in...")
                        .style(self.palette.dimmed_style)
                        .centered(),
                    center,
                );
            }
            Screen::Auth(screen) => frame.render_widget(&*screen, frame.area()),
            Screen::Main(state) => frame.render_widget(&**state, frame.area()),
        }
    }

    /// Kicks off backend initialization and the eager worker registration.
    fn spawn_backend_init(&self) {
        let gateway = self.gateway.clone();
        let pipeline = self.pipeline.clone();
        tokio::spawn(async move {
            if let Err(e) = gateway.connect().await {
                warn!(error = %e, "Push backend connection failed");
            }
            match pipeline.register_background_worker().await {
                Ok(outcome) => debug!(?outcome, "Eager worker registration finished"),
                Err(e) => warn!(error = %e, "Eager worker registration failed"),
            }
        });
    }

    fn spawn_config_resolution(&self) {
        let service = self.config_service.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let config = service.resolve().await;
            let note = service.last_error().map(|e| config_note(&e));
            let _ = tx.send(Action::ConfigResolved(config, note));
        });
    }

    async fn on_auth_change(&mut self, snapshot: AuthSnapshot) {
        // The previous scheduled setup is bound to the previous identity
        // and preferences; it must not fire after they changed.
        self.cancel_scheduled_setup();

        self.apply_appearance(&snapshot).await;

        if let Some(user) = &snapshot.user {
            info!(user = %user.display_name(), "User present, scheduling notification setup");
            self.schedule_notification_setup(user.preferences().clone());
        }

        self.auth_state = snapshot;
        self.sync_stage();
    }

    async fn apply_appearance(&mut self, snapshot: &AuthSnapshot) {
        let prefs = snapshot
            .user
            .as_ref()
            .map(|user| user.preferences().clone())
            .unwrap_or_default();

        let hour = Local::now().hour();
        let system = detect_system_variant();
        let resolved = self.appearance.resolve_and_persist(&prefs, hour, system).await;

        self.root_context.apply_variant(resolved.theme);
        self.palette = Palette::for_variant(resolved.theme);
        self.font_points = resolved.font_points;

        if let Screen::Main(state) = &mut self.screen {
            state.set_appearance(self.palette, self.font_points);
        }
    }

    /// Schedules pipeline setup once the backend signals ready.
    ///
    /// The handle is aborted when identity or preferences change before the
    /// task fires, so no stale setup can run.
    fn schedule_notification_setup(&mut self, prefs: UserPreferences) {
        self.cancel_scheduled_setup();
        let pipeline = self.pipeline.clone();
        let mut ready = self.gateway.ready();

        let handle = tokio::spawn(async move {
            if ready.wait_for(|is_ready| *is_ready).await.is_err() {
                debug!("Backend ready signal gone, falling back to settle delay");
                tokio::time::sleep(NOTIFY_SETUP_FALLBACK).await;
            }
            pipeline.setup(prefs).await;
        });

        self.notify_setup = Some(handle);
    }

    fn cancel_scheduled_setup(&mut self) {
        if let Some(handle) = self.notify_setup.take() {
            handle.abort();
        }
    }

    fn sync_stage(&mut self) {
        let stage = next_stage(self.splash_elapsed, self.disclaimer, &self.auth_state);
        if stage == self.stage {
            return;
        }

        info!(from = ?self.stage, to = ?stage, "Stage transition");
        self.stage = stage;

        self.screen = match stage {
            Stage::Splash => Screen::Splash(SplashScreen::new()),
            Stage::DisclaimerGate => Screen::Disclaimer(DisclaimerScreen::new()),
            Stage::AuthResolving => Screen::Resolving,
            Stage::AuthPage => {
                let allow_sign_up = self
                    .config_service
                    .resolved()
                    .is_none_or(|config| config.allow_sign_up);
                Screen::Auth(AuthScreen::new(allow_sign_up))
            }
            Stage::Main => {
                let user_name = self
                    .auth_state
                    .user
                    .as_ref()
                    .map_or_else(String::new, |user| user.display_name().to_string());
                let mut state =
                    Box::new(MainScreenState::new(user_name, self.palette, self.font_points));
                if let Some(config) = self.config_service.resolved() {
                    state.set_config(config);
                }
                if let Some(error) = self.config_service.last_error() {
                    state.set_config_note(config_note(&error));
                }
                Screen::Main(state)
            }
            Stage::Exiting => return,
        };
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::ConfigResolved(config, note) => {
                if let Screen::Main(state) = &mut self.screen {
                    state.set_config(config);
                    if let Some(note) = note {
                        state.set_config_note(note);
                    }
                }
            }
            Action::AuthFailed(message) => {
                if let Screen::Auth(screen) = &mut self.screen {
                    screen.set_error(message);
                }
            }
        }
    }

    async fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key).await,
            _ => EventResult::Continue,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_force_quit(&key) {
            return EventResult::Exit;
        }

        match &mut self.screen {
            Screen::Splash(_) => EventResult::Continue,
            Screen::Resolving => {
                if EventHandler::is_quit_key(&key) {
                    EventResult::Exit
                } else {
                    EventResult::Continue
                }
            }
            Screen::Disclaimer(screen) => {
                if EventHandler::is_quit_key(&key) {
                    return EventResult::Exit;
                }
                match screen.handle_key(key) {
                    DisclaimerAction::Agree => self.handle_disclaimer_agree().await,
                    DisclaimerAction::ShowExitHint => {
                        debug!("Exit hint requested; no state is cleared");
                    }
                    DisclaimerAction::None => {}
                }
                EventResult::Continue
            }
            Screen::Auth(screen) => {
                if key.code == KeyCode::Esc {
                    return EventResult::Exit;
                }
                if let AuthAction::Submit {
                    mode,
                    email,
                    password,
                } = screen.handle_key(key)
                {
                    screen.set_submitting();
                    self.spawn_auth_submit(mode, email, password);
                }
                EventResult::Continue
            }
            Screen::Main(state) => {
                if EventHandler::is_quit_key(&key) {
                    return EventResult::Exit;
                }
                match state.handle_key(key) {
                    MainAction::RefreshConfig => {
                        debug!("Manual configuration refresh requested");
                        self.spawn_config_resolution();
                    }
                    MainAction::Logout => self.spawn_logout(),
                    MainAction::None => {}
                }
                EventResult::Continue
            }
        }
    }

    async fn handle_disclaimer_agree(&mut self) {
        match self.accept_disclaimer.execute().await {
            Ok(status) => {
                self.disclaimer = status;
                self.sync_stage();
            }
            Err(e) => {
                warn!(error = %e, "Failed to persist disclaimer agreement");
            }
        }
    }

    fn spawn_auth_submit(&self, mode: AuthMode, email: String, password: String) {
        let auth = self.auth.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = match mode {
                AuthMode::SignIn => auth.log_in(&email, &password).await,
                AuthMode::SignUp => auth.sign_up(&email, &password).await,
            };
            if let Err(e) = result {
                warn!(error = %e, "Authentication failed");
                let _ = tx.send(Action::AuthFailed(e.to_string()));
            }
        });
    }

    fn spawn_logout(&self) {
        let auth = self.auth.clone();
        tokio::spawn(async move {
            if let Err(e) = auth.sign_out().await {
                warn!(error = %e, "Sign-out failed");
            }
        });
    }
}
