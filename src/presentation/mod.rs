//! Presentation layer with UI components and event handling.

/// Terminal event helpers.
pub mod events;
/// Theme context and palettes.
pub mod theme;
/// Screens and the bootstrap orchestrator.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
