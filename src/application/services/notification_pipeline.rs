//! Push notification delivery pipeline.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::domain::entities::{PushMessage, UserPreferences};
use crate::domain::errors::PushError;
use crate::domain::ports::{
    AlertPresenterPort, DeliveryToken, PermissionStatus, PushGatewayPort, SoundPlaybackPort,
    TranslatorPort, WorkerRuntimePort,
};
use crate::domain::services::sound_resolver::sound_path_for;

/// Why a registration attempt was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationSkip {
    /// A registration attempt is already in flight or completed.
    AlreadyAttempted,
    /// The worker runtime does not exist on this platform.
    WorkerUnavailable,
    /// The delivery mechanism is not initialized.
    GatewayUninitialized,
}

/// Result of a background worker registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The worker was registered and bound.
    Registered,
    /// Nothing was attempted.
    Skipped(RegistrationSkip),
}

/// Delivers push notifications: permission and token acquisition,
/// exactly-once background worker registration, and foreground message
/// presentation.
///
/// Everything here is an enhancement, not a precondition: operations return
/// typed failures that callers log, and nothing propagates into bootstrap.
pub struct NotificationPipeline {
    gateway: Arc<dyn PushGatewayPort>,
    worker: Arc<dyn WorkerRuntimePort>,
    playback: Arc<dyn SoundPlaybackPort>,
    presenter: Arc<dyn AlertPresenterPort>,
    translator: Arc<dyn TranslatorPort>,
    registration_attempted: AtomicBool,
}

impl NotificationPipeline {
    /// Creates a new pipeline over its collaborators.
    #[must_use]
    pub fn new(
        gateway: Arc<dyn PushGatewayPort>,
        worker: Arc<dyn WorkerRuntimePort>,
        playback: Arc<dyn SoundPlaybackPort>,
        presenter: Arc<dyn AlertPresenterPort>,
        translator: Arc<dyn TranslatorPort>,
    ) -> Self {
        Self {
            gateway,
            worker,
            playback,
            presenter,
            translator,
            registration_attempted: AtomicBool::new(false),
        }
    }

    /// Prompts for permission and, only on grant, requests a delivery
    /// token.
    ///
    /// # Errors
    /// `Unsupported` when the delivery mechanism is uninitialized,
    /// `PermissionDenied` on refusal, `TokenFailure` otherwise. All are
    /// non-fatal; callers log and degrade.
    pub async fn request_permission_and_token(&self) -> Result<DeliveryToken, PushError> {
        if !self.gateway.is_initialized() {
            return Err(PushError::Unsupported);
        }

        match self.gateway.request_permission().await? {
            PermissionStatus::Denied => Err(PushError::PermissionDenied),
            PermissionStatus::Granted => {
                let token = self.gateway.fetch_token().await?;
                debug!(token = %token.as_str(), "Delivery token obtained");
                Ok(token)
            }
        }
    }

    /// Registers the background relay worker at most once per process
    /// lifetime.
    ///
    /// The latch is set before the first suspension point, closing the race
    /// between two near-simultaneous calls; on any failure it is cleared so
    /// the next call may retry. There is no automatic timed retry.
    ///
    /// # Errors
    /// Returns the failure that cleared the latch.
    pub async fn register_background_worker(&self) -> Result<RegistrationOutcome, PushError> {
        if !self.worker.is_available() {
            return Ok(RegistrationOutcome::Skipped(
                RegistrationSkip::WorkerUnavailable,
            ));
        }
        if !self.gateway.is_initialized() {
            return Ok(RegistrationOutcome::Skipped(
                RegistrationSkip::GatewayUninitialized,
            ));
        }
        if self
            .registration_attempted
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Ok(RegistrationOutcome::Skipped(
                RegistrationSkip::AlreadyAttempted,
            ));
        }

        match self.register_inner().await {
            Ok(()) => Ok(RegistrationOutcome::Registered),
            Err(e) => {
                self.registration_attempted.store(false, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    async fn register_inner(&self) -> Result<(), PushError> {
        self.worker.ready().await?;
        let binding = self.worker.register().await?;
        self.gateway.bind_worker(&binding).await?;
        info!(binding = %binding.id(), "Background relay worker registered");
        Ok(())
    }

    /// Consumes the foreground message stream, presenting each event until
    /// the stream ends.
    ///
    /// # Errors
    /// `Unsupported` when the delivery mechanism is uninitialized, or a
    /// stream error from the gateway.
    pub async fn run_foreground(&self, prefs: &UserPreferences) -> Result<(), PushError> {
        if !self.gateway.is_initialized() {
            return Err(PushError::Unsupported);
        }

        let mut messages = self.gateway.subscribe().await?;
        info!("Foreground notification listener started");

        while let Some(message) = messages.recv().await {
            self.present_message(prefs, message).await;
        }

        debug!("Foreground message stream ended");
        Ok(())
    }

    /// Presents a single received message: optional sound, then exactly one
    /// visible presentation.
    pub async fn present_message(&self, prefs: &UserPreferences, message: PushMessage) {
        if !prefs.do_not_disturb && message.has_notification_body() {
            if let Some(path) = sound_path_for(&prefs.notification_sound) {
                if let Err(e) = self.playback.play(path).await {
                    warn!(error = %e, path, "Notification sound playback failed");
                }
            }
        }

        if let Some(notification) = message.notification {
            let title = notification
                .title
                .unwrap_or_else(|| self.translator.translate("notifications.default_title"));
            let body = notification.body.unwrap_or_default();
            self.presenter.present(&title, &body);
        } else if !message.data.is_empty() {
            let body = serde_json::to_string(&message.data).unwrap_or_default();
            let title = self.translator.translate("notifications.data_title");
            self.presenter.present(&title, &body);
        }
    }

    /// Full best-effort setup: permission and token acquisition, then
    /// foreground listening. Every failure is logged here and absorbed.
    pub async fn setup(&self, prefs: UserPreferences) {
        // A missing token only disables out-of-focus delivery; foreground
        // listening still proceeds.
        match self.request_permission_and_token().await {
            Ok(token) => info!(token = %token.as_str(), "Notifications enabled"),
            Err(e) => warn!(error = %e, "Notification permission/token unavailable"),
        }

        if let Err(e) = self.run_foreground(&prefs).await {
            warn!(error = %e, "Foreground notification listener stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PushNotification, UserPreferences};
    use crate::domain::ports::MockSoundPlaybackPort;
    use crate::domain::ports::mocks::{MockAlertPresenter, MockPushGateway, MockWorkerRuntime};
    use std::collections::HashMap;
    use tokio::sync::Notify;

    struct KeyEchoTranslator;

    impl TranslatorPort for KeyEchoTranslator {
        fn translate(&self, key: &str) -> String {
            key.to_string()
        }
    }

    struct Fixture {
        gateway: Arc<MockPushGateway>,
        presenter: Arc<MockAlertPresenter>,
    }

    fn pipeline_with(playback: MockSoundPlaybackPort) -> (NotificationPipeline, Fixture) {
        let gateway = Arc::new(MockPushGateway::new());
        let presenter = Arc::new(MockAlertPresenter::new());

        let pipeline = NotificationPipeline::new(
            gateway.clone(),
            Arc::new(MockWorkerRuntime::new()),
            Arc::new(playback),
            presenter.clone(),
            Arc::new(KeyEchoTranslator),
        );

        (pipeline, Fixture { gateway, presenter })
    }

    fn message_with_body() -> PushMessage {
        PushMessage {
            notification: Some(PushNotification {
                title: Some("Evening reflection".to_string()),
                body: Some("Take a quiet minute".to_string()),
                ..PushNotification::default()
            }),
            data: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn test_do_not_disturb_suppresses_playback() {
        let mut playback = MockSoundPlaybackPort::new();
        playback.expect_play().times(0);
        let (pipeline, fixture) = pipeline_with(playback);

        let prefs = UserPreferences {
            do_not_disturb: true,
            ..UserPreferences::default()
        };
        pipeline.present_message(&prefs, message_with_body()).await;

        assert_eq!(fixture.presenter.presented().len(), 1);
    }

    #[tokio::test]
    async fn test_silent_sound_never_plays() {
        let mut playback = MockSoundPlaybackPort::new();
        playback.expect_play().times(0);
        let (pipeline, fixture) = pipeline_with(playback);

        let prefs = UserPreferences {
            notification_sound: "silent".to_string(),
            ..UserPreferences::default()
        };
        pipeline.present_message(&prefs, message_with_body()).await;

        assert_eq!(fixture.presenter.presented().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_sound_plays_default() {
        let mut playback = MockSoundPlaybackPort::new();
        playback
            .expect_play()
            .withf(|path| path == "sounds/chime.ogg")
            .times(1)
            .returning(|_| Ok(()));
        let (pipeline, _fixture) = pipeline_with(playback);

        let prefs = UserPreferences {
            notification_sound: "kazoo".to_string(),
            ..UserPreferences::default()
        };
        pipeline.present_message(&prefs, message_with_body()).await;
    }

    #[tokio::test]
    async fn test_playback_failure_still_presents() {
        let mut playback = MockSoundPlaybackPort::new();
        playback
            .expect_play()
            .times(1)
            .returning(|_| Err(PushError::playback("decoder exploded")));
        let (pipeline, fixture) = pipeline_with(playback);

        pipeline
            .present_message(&UserPreferences::default(), message_with_body())
            .await;

        assert_eq!(fixture.presenter.presented().len(), 1);
    }

    #[tokio::test]
    async fn test_data_only_message_presents_serialized_payload() {
        let mut playback = MockSoundPlaybackPort::new();
        playback.expect_play().times(0);
        let (pipeline, fixture) = pipeline_with(playback);

        let message = PushMessage {
            notification: None,
            data: HashMap::from([("kind".to_string(), "daily".to_string())]),
        };
        pipeline
            .present_message(&UserPreferences::default(), message)
            .await;

        let presented = fixture.presenter.presented();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0].0, "notifications.data_title");
        assert_eq!(presented[0].1, r#"{"kind":"daily"}"#);
    }

    #[tokio::test]
    async fn test_empty_message_presents_nothing() {
        let mut playback = MockSoundPlaybackPort::new();
        playback.expect_play().times(0);
        let (pipeline, fixture) = pipeline_with(playback);

        pipeline
            .present_message(&UserPreferences::default(), PushMessage::default())
            .await;

        assert!(fixture.presenter.presented().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_registration_registers_at_most_once() {
        let gate = Arc::new(Notify::new());
        let gateway = Arc::new(MockPushGateway::new());
        let worker = Arc::new(MockWorkerRuntime::new().with_ready_gate(gate.clone()));
        let mut playback = MockSoundPlaybackPort::new();
        playback.expect_play().times(0);

        let pipeline = NotificationPipeline::new(
            gateway,
            worker.clone(),
            Arc::new(playback),
            Arc::new(MockAlertPresenter::new()),
            Arc::new(KeyEchoTranslator),
        );

        let (first, second, ()) = tokio::join!(
            pipeline.register_background_worker(),
            pipeline.register_background_worker(),
            async {
                tokio::task::yield_now().await;
                gate.notify_one();
            }
        );

        assert_eq!(first.unwrap(), RegistrationOutcome::Registered);
        assert_eq!(
            second.unwrap(),
            RegistrationOutcome::Skipped(RegistrationSkip::AlreadyAttempted)
        );
        assert_eq!(worker.register_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_registration_resets_latch_for_one_retry() {
        let gateway = Arc::new(MockPushGateway::new());
        let worker = Arc::new(MockWorkerRuntime::new());
        worker.set_fail_register(true);
        let mut playback = MockSoundPlaybackPort::new();
        playback.expect_play().times(0);

        let pipeline = NotificationPipeline::new(
            gateway,
            worker.clone(),
            Arc::new(playback),
            Arc::new(MockAlertPresenter::new()),
            Arc::new(KeyEchoTranslator),
        );

        assert!(pipeline.register_background_worker().await.is_err());

        worker.set_fail_register(false);
        assert_eq!(
            pipeline.register_background_worker().await.unwrap(),
            RegistrationOutcome::Registered
        );
        assert_eq!(worker.register_calls(), 2);
    }

    #[tokio::test]
    async fn test_registration_skips_without_worker_runtime() {
        let gateway = Arc::new(MockPushGateway::new());
        let worker = Arc::new(MockWorkerRuntime::unavailable());
        let mut playback = MockSoundPlaybackPort::new();
        playback.expect_play().times(0);

        let pipeline = NotificationPipeline::new(
            gateway,
            worker.clone(),
            Arc::new(playback),
            Arc::new(MockAlertPresenter::new()),
            Arc::new(KeyEchoTranslator),
        );

        assert_eq!(
            pipeline.register_background_worker().await.unwrap(),
            RegistrationOutcome::Skipped(RegistrationSkip::WorkerUnavailable)
        );
        assert_eq!(worker.register_calls(), 0);
    }

    #[tokio::test]
    async fn test_permission_denied_yields_no_token() {
        let mut playback = MockSoundPlaybackPort::new();
        playback.expect_play().times(0);
        let (pipeline, fixture) = pipeline_with(playback);
        fixture.gateway.deny_permission();

        let result = pipeline.request_permission_and_token().await;
        assert!(matches!(result, Err(PushError::PermissionDenied)));
    }

    #[tokio::test]
    async fn test_uninitialized_gateway_is_unsupported() {
        let gateway = Arc::new(MockPushGateway::uninitialized());
        let mut playback = MockSoundPlaybackPort::new();
        playback.expect_play().times(0);

        let pipeline = NotificationPipeline::new(
            gateway,
            Arc::new(MockWorkerRuntime::new()),
            Arc::new(playback),
            Arc::new(MockAlertPresenter::new()),
            Arc::new(KeyEchoTranslator),
        );

        assert!(matches!(
            pipeline.request_permission_and_token().await,
            Err(PushError::Unsupported)
        ));
        assert_eq!(
            pipeline.register_background_worker().await.unwrap(),
            RegistrationOutcome::Skipped(RegistrationSkip::GatewayUninitialized)
        );
    }

    #[tokio::test]
    async fn test_foreground_stream_presents_each_event_once() {
        let mut playback = MockSoundPlaybackPort::new();
        playback.expect_play().returning(|_| Ok(()));
        let (pipeline, fixture) = pipeline_with(playback);

        let pipeline = Arc::new(pipeline);
        let listener = {
            let pipeline = pipeline.clone();
            tokio::spawn(async move { pipeline.run_foreground(&UserPreferences::default()).await })
        };
        tokio::task::yield_now().await;

        let sender = fixture
            .gateway
            .take_message_sender()
            .expect("listener subscribed");
        sender.send(message_with_body()).unwrap();
        sender.send(message_with_body()).unwrap();
        drop(sender);

        listener.await.unwrap().unwrap();
        assert_eq!(fixture.presenter.presented().len(), 2);
    }
}
