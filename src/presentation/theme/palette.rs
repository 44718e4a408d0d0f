use ratatui::style::{Color, Style};

use crate::domain::entities::ThemeVariant;

/// Styles derived from the active theme variant.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub base_style: Style,
    pub accent: Color,
    pub dimmed_style: Style,
    pub selection_style: Style,
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

impl Palette {
    #[must_use]
    pub fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            base_style: Style::default().fg(Color::White),
            accent: Color::Cyan,
            dimmed_style: Style::default().fg(Color::DarkGray),
            selection_style: Style::default().bg(Color::Rgb(40, 60, 70)).fg(Color::White),
            border: Color::Cyan,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            base_style: Style::default().fg(Color::Black),
            accent: Color::Blue,
            dimmed_style: Style::default().fg(Color::Gray),
            selection_style: Style::default()
                .bg(Color::Rgb(200, 220, 235))
                .fg(Color::Black),
            border: Color::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_selects_palette() {
        assert_eq!(Palette::for_variant(ThemeVariant::Dark).accent, Color::Cyan);
        assert_eq!(Palette::for_variant(ThemeVariant::Light).accent, Color::Blue);
    }
}
