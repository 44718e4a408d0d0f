//! User profile entity.

use serde::{Deserialize, Serialize};

use super::preferences::UserPreferences;

/// Authenticated user identity with its server-side preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    preferences: UserPreferences,
}

impl UserProfile {
    /// Creates a new profile.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: Option<String>,
        preferences: UserPreferences,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name,
            preferences,
        }
    }

    /// Stable user identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Account email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Name to show in the UI, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }

    /// Server-side presentation preferences.
    #[must_use]
    pub const fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email() {
        let profile = UserProfile::new("u1", "a@b.c", None, UserPreferences::default());
        assert_eq!(profile.display_name(), "a@b.c");

        let named = UserProfile::new(
            "u1",
            "a@b.c",
            Some("Ann".to_string()),
            UserPreferences::default(),
        );
        assert_eq!(named.display_name(), "Ann");
    }
}
