//! Notification sound resolution.

/// Sound identifier used when the user has no explicit choice.
pub const DEFAULT_SOUND_ID: &str = "chime";

/// Sentinel identifier meaning "no sound"; resolves to no path at all.
pub const SILENT_SOUND_ID: &str = "silent";

/// Known sound identifiers and their bundled file paths.
const SOUND_TABLE: [(&str, &str); 4] = [
    ("chime", "sounds/chime.ogg"),
    ("bell", "sounds/bell.ogg"),
    ("drop", "sounds/drop.ogg"),
    (SILENT_SOUND_ID, ""),
];

/// Resolves a sound identifier to a playable file path.
///
/// Unknown identifiers fall back to [`DEFAULT_SOUND_ID`]. Returns `None`
/// when the resolved path is empty or the identifier is the silent
/// sentinel, in which case playback must be skipped entirely.
#[must_use]
pub fn sound_path_for(sound_id: &str) -> Option<&'static str> {
    let path = SOUND_TABLE
        .iter()
        .find(|(id, _)| *id == sound_id)
        .map(|(_, path)| *path)
        .or_else(|| lookup_default());

    match path {
        Some(path) if !path.is_empty() && path != SILENT_SOUND_ID => Some(path),
        _ => None,
    }
}

fn lookup_default() -> Option<&'static str> {
    SOUND_TABLE
        .iter()
        .find(|(id, _)| *id == DEFAULT_SOUND_ID)
        .map(|(_, path)| *path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sound_resolves() {
        assert_eq!(sound_path_for("bell"), Some("sounds/bell.ogg"));
    }

    #[test]
    fn test_unknown_sound_falls_back_to_default() {
        assert_eq!(sound_path_for("kazoo"), Some("sounds/chime.ogg"));
    }

    #[test]
    fn test_silent_sentinel_resolves_to_nothing() {
        assert_eq!(sound_path_for(SILENT_SOUND_ID), None);
    }
}
