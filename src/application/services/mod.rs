//! Application services.

mod appearance_service;
mod config_service;
mod notification_pipeline;

pub use appearance_service::{AppearanceService, ResolvedAppearance};
pub use config_service::ConfigService;
pub use notification_pipeline::{NotificationPipeline, RegistrationOutcome, RegistrationSkip};
