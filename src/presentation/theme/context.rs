//! Root presentation context and theme markers.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::domain::entities::ThemeVariant;

/// Marker applied for the dark theme.
pub const THEME_MARKER_DARK: &str = "theme-dark";
/// Marker applied for the light theme.
pub const THEME_MARKER_LIGHT: &str = "theme-light";

const KNOWN_THEME_MARKERS: [&str; 2] = [THEME_MARKER_DARK, THEME_MARKER_LIGHT];

const fn marker_for(variant: ThemeVariant) -> &'static str {
    match variant {
        ThemeVariant::Dark => THEME_MARKER_DARK,
        ThemeVariant::Light => THEME_MARKER_LIGHT,
    }
}

/// Marker set on the root presentation context.
///
/// Applying a theme replaces all known theme markers with exactly the
/// resolved one; markers outside the theme set are untouched. This is what
/// keeps variants from stacking when the theme is re-resolved.
#[derive(Debug, Clone, Default)]
pub struct RootContext {
    markers: BTreeSet<String>,
}

impl RootContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arbitrary marker.
    pub fn add_marker(&mut self, marker: impl Into<String>) {
        self.markers.insert(marker.into());
    }

    /// Replaces every known theme marker with the one for `variant`.
    pub fn apply_variant(&mut self, variant: ThemeVariant) {
        for marker in KNOWN_THEME_MARKERS {
            self.markers.remove(marker);
        }
        self.markers.insert(marker_for(variant).to_string());
    }

    /// The currently applied variant, if one has been applied.
    #[must_use]
    pub fn active_variant(&self) -> Option<ThemeVariant> {
        if self.markers.contains(THEME_MARKER_DARK) {
            Some(ThemeVariant::Dark)
        } else if self.markers.contains(THEME_MARKER_LIGHT) {
            Some(ThemeVariant::Light)
        } else {
            None
        }
    }

    /// All markers currently set.
    #[must_use]
    pub const fn markers(&self) -> &BTreeSet<String> {
        &self.markers
    }
}

/// Asks the terminal for its reported color scheme.
#[must_use]
pub fn detect_system_variant() -> Option<ThemeVariant> {
    match termbg::theme(Duration::from_millis(100)) {
        Ok(termbg::Theme::Dark) => Some(ThemeVariant::Dark),
        Ok(termbg::Theme::Light) => Some(ThemeVariant::Light),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_never_stack() {
        let mut context = RootContext::new();
        context.add_marker("compact");

        context.apply_variant(ThemeVariant::Dark);
        context.apply_variant(ThemeVariant::Light);
        context.apply_variant(ThemeVariant::Dark);

        let theme_markers: Vec<_> = context
            .markers()
            .iter()
            .filter(|m| KNOWN_THEME_MARKERS.contains(&m.as_str()))
            .collect();
        assert_eq!(theme_markers, vec![THEME_MARKER_DARK]);
        assert_eq!(context.active_variant(), Some(ThemeVariant::Dark));
        assert!(context.markers().contains("compact"));
    }

    #[test]
    fn test_fresh_context_has_no_variant() {
        assert_eq!(RootContext::new().active_variant(), None);
    }
}
