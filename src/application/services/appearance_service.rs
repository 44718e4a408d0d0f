//! Theme and font scale application.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{ThemeVariant, UserPreferences};
use crate::domain::ports::PreferenceStorePort;
use crate::domain::services::theme_resolver::resolve_theme;

/// Appearance derived from preferences, persisted choice, clock, and
/// system scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAppearance {
    /// Active theme.
    pub theme: ThemeVariant,
    /// Active font size in points.
    pub font_points: u16,
}

/// Resolves the active appearance and persists the theme choice.
///
/// Resolution itself is pure; this service adds the persistence step so the
/// derived choice sticks across restarts. Store failures are logged and the
/// resolved value is still returned.
pub struct AppearanceService {
    store: Arc<dyn PreferenceStorePort>,
}

impl AppearanceService {
    /// Creates a new service over the preference store.
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStorePort>) -> Self {
        Self { store }
    }

    /// Resolves the appearance for the given inputs and persists the theme.
    pub async fn resolve_and_persist(
        &self,
        prefs: &UserPreferences,
        hour: u32,
        system: Option<ThemeVariant>,
    ) -> ResolvedAppearance {
        let persisted = match self.store.theme().await {
            Ok(theme) => theme,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted theme");
                None
            }
        };

        let theme = resolve_theme(prefs.theme, persisted, hour, system);
        debug!(theme = %theme, "Theme resolved");

        if let Err(e) = self.store.set_theme(theme).await {
            warn!(error = %e, "Failed to persist theme choice");
        }

        ResolvedAppearance {
            theme,
            font_points: prefs.font_scale.points(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FontScale;
    use crate::domain::ports::mocks::MemoryPreferenceStore;

    #[tokio::test]
    async fn test_derived_theme_is_persisted() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let service = AppearanceService::new(store.clone());

        let resolved = service
            .resolve_and_persist(&UserPreferences::default(), 20, None)
            .await;

        assert_eq!(resolved.theme, ThemeVariant::Dark);
        assert_eq!(store.theme().await.unwrap(), Some(ThemeVariant::Dark));
    }

    #[tokio::test]
    async fn test_persisted_choice_survives_daytime() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set_theme(ThemeVariant::Dark).await.unwrap();
        let service = AppearanceService::new(store);

        let resolved = service
            .resolve_and_persist(&UserPreferences::default(), 10, None)
            .await;

        assert_eq!(resolved.theme, ThemeVariant::Dark);
    }

    #[tokio::test]
    async fn test_font_points_follow_explicit_preference_only() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let service = AppearanceService::new(store);

        let prefs = UserPreferences {
            font_scale: FontScale::Large,
            ..UserPreferences::default()
        };
        let resolved = service.resolve_and_persist(&prefs, 10, None).await;

        assert_eq!(resolved.font_points, 18);
    }
}
