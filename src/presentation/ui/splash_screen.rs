use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Text,
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

const LOGO_TEXT: &str = "
  _____       _
 / ____|     | |
| (___   ___ | | __ _  ___ ___
 \\___ \\ / _ \\| |/ _` |/ __/ _ \\
 ____) | (_) | | (_| | (_|  __/
|_____/ \\___/|_|\\__,_|\\___\\___|";

/// Splash screen shown for a fixed duration at startup.
///
/// The duration is owned by the orchestrator's timer; the screen only
/// animates whatever time it is given.
pub struct SplashScreen {
    intro_effect: Effect,
    pending_duration: Duration,
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            intro_effect: fx::coalesce((800, Interpolation::CircOut)),
            pending_duration: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_content = LOGO_TEXT.trim_matches('\n');
        let text = Text::from(text_content).centered();

        let text_width = u16::try_from(
            text.lines
                .iter()
                .map(ratatui::prelude::Line::width)
                .max()
                .unwrap_or(0),
        )
        .unwrap_or(0);
        let text_height = u16::try_from(text.lines.len()).unwrap_or(0);

        let x = area.x + (area.width.saturating_sub(text_width)) / 2;
        let y = area.y + (area.height.saturating_sub(text_height)) / 2;
        let center_area = Rect::new(
            x,
            y,
            text_width.min(area.width),
            text_height.min(area.height),
        );

        Paragraph::new(text).render(center_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        self.intro_effect.process(duration.into(), buf, center_area);
    }
}
