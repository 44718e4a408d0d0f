//! Theme resolution.

use crate::domain::entities::ThemeVariant;

/// Hours treated as night: [18, 24) and [0, 6).
#[must_use]
pub const fn is_night_hour(hour: u32) -> bool {
    hour >= 18 || hour < 6
}

/// Resolves the active theme deterministically.
///
/// Precedence: explicit user preference, then the previously persisted
/// choice, then the wall-clock hour (night selects dark), then the
/// platform-reported color scheme if it indicates dark, else light.
#[must_use]
pub fn resolve_theme(
    explicit: Option<ThemeVariant>,
    persisted: Option<ThemeVariant>,
    hour: u32,
    system: Option<ThemeVariant>,
) -> ThemeVariant {
    if let Some(explicit) = explicit {
        return explicit;
    }
    if let Some(persisted) = persisted {
        return persisted;
    }
    if is_night_hour(hour) {
        return ThemeVariant::Dark;
    }
    if system == Some(ThemeVariant::Dark) {
        return ThemeVariant::Dark;
    }
    ThemeVariant::Light
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(20, None => ThemeVariant::Dark; "evening defaults to dark")]
    #[test_case(10, None => ThemeVariant::Light; "morning defaults to light")]
    #[test_case(5, None => ThemeVariant::Dark; "small hours default to dark")]
    #[test_case(18, None => ThemeVariant::Dark; "boundary hour 18 is night")]
    #[test_case(6, None => ThemeVariant::Light; "boundary hour 6 is day")]
    #[test_case(17, None => ThemeVariant::Light; "boundary hour 17 is day")]
    #[test_case(10, Some(ThemeVariant::Dark) => ThemeVariant::Dark; "daytime follows dark system scheme")]
    #[test_case(10, Some(ThemeVariant::Light) => ThemeVariant::Light; "daytime follows light system scheme")]
    fn test_derived_resolution(hour: u32, system: Option<ThemeVariant>) -> ThemeVariant {
        resolve_theme(None, None, hour, system)
    }

    #[test]
    fn test_explicit_preference_wins() {
        let resolved = resolve_theme(
            Some(ThemeVariant::Light),
            Some(ThemeVariant::Dark),
            20,
            Some(ThemeVariant::Dark),
        );
        assert_eq!(resolved, ThemeVariant::Light);
    }

    #[test]
    fn test_persisted_choice_beats_clock() {
        let resolved = resolve_theme(None, Some(ThemeVariant::Light), 20, None);
        assert_eq!(resolved, ThemeVariant::Light);
    }
}
