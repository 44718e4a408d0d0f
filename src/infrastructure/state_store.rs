//! Durable preference store backed by a TOML file.

use async_trait::async_trait;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tracing::warn;

use crate::domain::entities::{DisclaimerStatus, ThemeVariant};
use crate::domain::errors::StoreError;
use crate::domain::ports::PreferenceStorePort;

const STATE_FILE_NAME: &str = "state.toml";

/// On-disk shape. Keys are stable: `disclaimer` holds
/// `"not_agreed"`/`"agreed"`, `locale` a BCP 47-ish tag, `theme`
/// `"dark"`/`"light"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    disclaimer: Option<String>,
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    theme: Option<String>,
}

/// File-backed implementation of the preference store.
#[derive(Clone)]
pub struct TomlPreferenceStore {
    state_path: Option<PathBuf>,
}

impl Default for TomlPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TomlPreferenceStore {
    /// Creates a store under the platform config directory.
    ///
    /// If project directories cannot be determined, persistence is disabled
    /// and a warning is logged; reads then yield defaults and writes are
    /// dropped.
    #[must_use]
    pub fn new() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("io", "solacehq", "solace") {
            Self {
                state_path: Some(proj_dirs.config_dir().join(STATE_FILE_NAME)),
            }
        } else {
            warn!("Failed to determine project directories. Preference persistence disabled.");
            Self { state_path: None }
        }
    }

    /// Creates a store at an explicit path (useful for testing).
    #[must_use]
    pub fn with_path(state_path: PathBuf) -> Self {
        Self {
            state_path: Some(state_path),
        }
    }

    async fn load(&self) -> Result<StateFile, StoreError> {
        let Some(path) = &self.state_path else {
            return Ok(StateFile::default());
        };

        if !path.exists() {
            return Ok(StateFile::default());
        }

        let content = fs::read_to_string(path).await?;
        match toml::from_str(&content) {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!(error = %e, "Failed to parse state file. Resetting state.");
                Ok(StateFile::default())
            }
        }
    }

    async fn save(&self, state: StateFile) -> Result<(), StoreError> {
        let Some(path) = &self.state_path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string(&state)?;
        fs::write(path, content).await?;

        Ok(())
    }

    async fn update<F>(&self, mutate: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut StateFile),
    {
        let mut state = self.load().await?;
        mutate(&mut state);
        self.save(state).await
    }
}

#[async_trait]
impl PreferenceStorePort for TomlPreferenceStore {
    async fn disclaimer_status(&self) -> Result<DisclaimerStatus, StoreError> {
        let state = self.load().await?;
        Ok(state
            .disclaimer
            .map(|value| DisclaimerStatus::parse(&value))
            .unwrap_or_default())
    }

    async fn set_disclaimer_status(&self, status: DisclaimerStatus) -> Result<(), StoreError> {
        self.update(|state| state.disclaimer = Some(status.as_str().to_string()))
            .await
    }

    async fn locale(&self) -> Result<Option<String>, StoreError> {
        Ok(self.load().await?.locale)
    }

    async fn set_locale(&self, locale: &str) -> Result<(), StoreError> {
        let locale = locale.to_string();
        self.update(|state| state.locale = Some(locale)).await
    }

    async fn theme(&self) -> Result<Option<ThemeVariant>, StoreError> {
        let state = self.load().await?;
        Ok(state.theme.as_deref().and_then(ThemeVariant::parse))
    }

    async fn set_theme(&self, theme: ThemeVariant) -> Result<(), StoreError> {
        self.update(|state| state.theme = Some(theme.as_str().to_string()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_defaults_before_first_write() {
        let dir = tempdir().unwrap();
        let store = TomlPreferenceStore::with_path(dir.path().join(STATE_FILE_NAME));

        assert_eq!(
            store.disclaimer_status().await.unwrap(),
            DisclaimerStatus::NotAgreed
        );
        assert_eq!(store.locale().await.unwrap(), None);
        assert_eq!(store.theme().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STATE_FILE_NAME);

        let store = TomlPreferenceStore::with_path(path.clone());
        store
            .set_disclaimer_status(DisclaimerStatus::Agreed)
            .await
            .unwrap();
        store.set_locale("uk").await.unwrap();
        store.set_theme(ThemeVariant::Dark).await.unwrap();

        let reopened = TomlPreferenceStore::with_path(path);
        assert_eq!(
            reopened.disclaimer_status().await.unwrap(),
            DisclaimerStatus::Agreed
        );
        assert_eq!(reopened.locale().await.unwrap(), Some("uk".to_string()));
        assert_eq!(reopened.theme().await.unwrap(), Some(ThemeVariant::Dark));
    }

    #[tokio::test]
    async fn test_partial_writes_keep_other_keys() {
        let dir = tempdir().unwrap();
        let store = TomlPreferenceStore::with_path(dir.path().join(STATE_FILE_NAME));

        store
            .set_disclaimer_status(DisclaimerStatus::Agreed)
            .await
            .unwrap();
        store.set_theme(ThemeVariant::Light).await.unwrap();

        assert_eq!(
            store.disclaimer_status().await.unwrap(),
            DisclaimerStatus::Agreed
        );
    }

    #[tokio::test]
    async fn test_corrupt_file_resets_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STATE_FILE_NAME);
        std::fs::write(&path, "not valid toml [").unwrap();

        let store = TomlPreferenceStore::with_path(path);
        assert_eq!(
            store.disclaimer_status().await.unwrap(),
            DisclaimerStatus::NotAgreed
        );
    }
}
