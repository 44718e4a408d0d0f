//! Persistent preference store port definition.

use async_trait::async_trait;

use crate::domain::entities::{DisclaimerStatus, ThemeVariant};
use crate::domain::errors::StoreError;

/// Port for the durable key/value preference store.
///
/// Three scalar keys survive process restarts: the disclaimer agreement
/// flag, the chosen locale, and the chosen theme.
#[async_trait]
pub trait PreferenceStorePort: Send + Sync {
    /// Reads the disclaimer agreement flag.
    async fn disclaimer_status(&self) -> Result<DisclaimerStatus, StoreError>;

    /// Writes the disclaimer agreement flag.
    async fn set_disclaimer_status(&self, status: DisclaimerStatus) -> Result<(), StoreError>;

    /// Reads the chosen locale, if any.
    async fn locale(&self) -> Result<Option<String>, StoreError>;

    /// Writes the chosen locale.
    async fn set_locale(&self, locale: &str) -> Result<(), StoreError>;

    /// Reads the persisted theme choice, if any.
    async fn theme(&self) -> Result<Option<ThemeVariant>, StoreError>;

    /// Writes the theme choice.
    async fn set_theme(&self, theme: ThemeVariant) -> Result<(), StoreError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// In-memory preference store recording every write.
    #[derive(Default)]
    pub struct MemoryPreferenceStore {
        disclaimer: Mutex<DisclaimerStatus>,
        locale: Mutex<Option<String>>,
        theme: Mutex<Option<ThemeVariant>>,
        disclaimer_writes: Mutex<Vec<DisclaimerStatus>>,
    }

    impl MemoryPreferenceStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every disclaimer value ever written, in order.
        pub fn disclaimer_writes(&self) -> Vec<DisclaimerStatus> {
            self.disclaimer_writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PreferenceStorePort for MemoryPreferenceStore {
        async fn disclaimer_status(&self) -> Result<DisclaimerStatus, StoreError> {
            Ok(*self.disclaimer.lock().unwrap())
        }

        async fn set_disclaimer_status(&self, status: DisclaimerStatus) -> Result<(), StoreError> {
            *self.disclaimer.lock().unwrap() = status;
            self.disclaimer_writes.lock().unwrap().push(status);
            Ok(())
        }

        async fn locale(&self) -> Result<Option<String>, StoreError> {
            Ok(self.locale.lock().unwrap().clone())
        }

        async fn set_locale(&self, locale: &str) -> Result<(), StoreError> {
            *self.locale.lock().unwrap() = Some(locale.to_string());
            Ok(())
        }

        async fn theme(&self) -> Result<Option<ThemeVariant>, StoreError> {
            Ok(*self.theme.lock().unwrap())
        }

        async fn set_theme(&self, theme: ThemeVariant) -> Result<(), StoreError> {
            *self.theme.lock().unwrap() = Some(theme);
            Ok(())
        }
    }
}
