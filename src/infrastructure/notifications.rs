//! Desktop alert presentation with conditional compilation.

use crate::domain::ports::AlertPresenterPort;

/// Desktop notification presenter.
#[cfg(feature = "notify")]
mod notify_impl {
    use super::*;
    use notify_rust::Notification;

    #[derive(Debug, Clone, Default)]
    pub struct DesktopAlertPresenter {
        enabled: bool,
    }

    impl DesktopAlertPresenter {
        #[must_use]
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }
    }

    impl AlertPresenterPort for DesktopAlertPresenter {
        fn present(&self, title: &str, body: &str) {
            if !self.enabled {
                return;
            }

            let title = title.to_string();
            let body = body.to_string();

            tokio::task::spawn_blocking(move || {
                if let Err(e) = Notification::new()
                    .summary(&title)
                    .body(&body)
                    .appname("Solace")
                    .show()
                {
                    tracing::warn!("Failed to show notification: {}", e);
                }
            });
        }
    }
}

/// Stub presenter when the notify feature is disabled.
#[cfg(not(feature = "notify"))]
mod stub_impl {
    use super::*;

    #[derive(Debug, Clone, Default)]
    pub struct DesktopAlertPresenter {
        _enabled: bool,
    }

    impl DesktopAlertPresenter {
        #[must_use]
        pub fn new(_enabled: bool) -> Self {
            Self { _enabled: false }
        }
    }

    impl AlertPresenterPort for DesktopAlertPresenter {
        fn present(&self, _title: &str, _body: &str) {
            // Desktop notifications disabled - do nothing
        }
    }
}

#[cfg(feature = "notify")]
pub use notify_impl::DesktopAlertPresenter;
#[cfg(not(feature = "notify"))]
pub use stub_impl::DesktopAlertPresenter;
