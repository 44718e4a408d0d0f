mod alert_presenter_port;
mod auth_port;
mod config_document_port;
mod preference_store_port;
mod push_gateway_port;
mod session_store_port;
mod sound_playback_port;
mod translator_port;
mod worker_runtime_port;

pub use alert_presenter_port::AlertPresenterPort;
pub use auth_port::{AuthPort, AuthSnapshot};
pub use config_document_port::ConfigDocumentPort;
pub use preference_store_port::PreferenceStorePort;
pub use push_gateway_port::{DeliveryToken, PermissionStatus, PushGatewayPort};
pub use session_store_port::SessionStorePort;
pub use sound_playback_port::SoundPlaybackPort;
#[cfg(test)]
pub use sound_playback_port::MockSoundPlaybackPort;
pub use translator_port::TranslatorPort;
pub use worker_runtime_port::{WorkerBinding, WorkerRuntimePort};

#[cfg(test)]
pub mod mocks {
    pub use super::alert_presenter_port::mock::MockAlertPresenter;
    pub use super::auth_port::mock::MockAuthPort;
    pub use super::config_document_port::mock::{FetchBehavior, MockConfigDocuments};
    pub use super::preference_store_port::mock::MemoryPreferenceStore;
    pub use super::push_gateway_port::mock::MockPushGateway;
    pub use super::session_store_port::mock::MemorySessionStore;
    pub use super::worker_runtime_port::mock::MockWorkerRuntime;
}
