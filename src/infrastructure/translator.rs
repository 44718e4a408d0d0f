//! Static translation tables.

use crate::domain::ports::TranslatorPort;

/// Built-in string table keyed by the persisted locale choice.
///
/// The full translation catalog lives with the translation collaborator;
/// this table only covers the strings this client renders itself.
pub struct StaticTranslator {
    locale: String,
}

impl StaticTranslator {
    /// Creates a translator for the given locale, defaulting to English.
    #[must_use]
    pub fn new(locale: Option<String>) -> Self {
        Self {
            locale: locale.unwrap_or_else(|| "en".to_string()),
        }
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        let table: &[(&str, &str)] = match self.locale.as_str() {
            "uk" => &[
                ("notifications.default_title", "Solace"),
                ("notifications.data_title", "Оновлення"),
                ("auth.signing_in", "Вхід..."),
            ],
            _ => &[
                ("notifications.default_title", "Solace"),
                ("notifications.data_title", "Update"),
                ("auth.signing_in", "Signing in..."),
            ],
        };

        table
            .iter()
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, value)| *value)
    }
}

impl TranslatorPort for StaticTranslator {
    fn translate(&self, key: &str) -> String {
        self.lookup(key)
            .map_or_else(|| key.to_string(), ToString::to_string)
    }
}
