//! Theme and font scale value objects.

use serde::{Deserialize, Serialize};

/// Visual theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Dark theme.
    Dark,
    /// Light theme.
    Light,
}

impl ThemeVariant {
    /// Stable identifier used for persistence and theme markers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parses a persisted identifier; unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete font size tier, sized by explicit preference only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontScale {
    /// 14 points.
    Small,
    /// 16 points.
    #[default]
    Base,
    /// 18 points.
    Large,
}

impl FontScale {
    /// Point size for this tier.
    #[must_use]
    pub const fn points(self) -> u16 {
        match self {
            Self::Small => 14,
            Self::Base => 16,
            Self::Large => 18,
        }
    }
}
