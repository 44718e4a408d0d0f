//! Screens and the bootstrap orchestrator.

mod app;
mod auth_screen;
mod disclaimer_screen;
mod main_screen;
mod splash_screen;

pub use app::App;
pub use auth_screen::{AuthAction, AuthMode, AuthScreen, AuthScreenState};
pub use disclaimer_screen::{DisclaimerAction, DisclaimerScreen};
pub use main_screen::{MainAction, MainScreenState};
pub use splash_screen::SplashScreen;
