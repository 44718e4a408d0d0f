//! Solace - a calm terminal companion client.
//!
//! This crate provides a terminal client with gated onboarding (splash,
//! disclaimer, authentication), remote feature configuration that degrades
//! gracefully when offline, and a push notification pipeline with
//! preference-aware presentation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing orchestration services and use cases.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "solace";
