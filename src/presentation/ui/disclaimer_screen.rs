//! Disclaimer gate screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const DISCLAIMER_TEXT: &str = "Solace offers companionship and reflection, not medical, legal, \
or crisis advice. Conversations may be generated by an AI and can be wrong. If you are in \
immediate danger, contact local emergency services.";

/// What the user did on the disclaimer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclaimerAction {
    /// Nothing actionable.
    None,
    /// Explicit agreement; the only way past the gate.
    Agree,
    /// The user asked how to leave; informational only, no state changes.
    ShowExitHint,
}

/// Disclaimer gate shown until the agreement flag is persisted.
#[derive(Debug, Default)]
pub struct DisclaimerScreen {
    exit_hint_visible: bool,
}

impl DisclaimerScreen {
    /// Creates the screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> DisclaimerAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char('a') => DisclaimerAction::Agree,
            KeyCode::Char('e') => {
                self.exit_hint_visible = true;
                DisclaimerAction::ShowExitHint
            }
            _ => DisclaimerAction::None,
        }
    }
}

impl Widget for &DisclaimerScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(60),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Before you continue ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let [text_area, hint_area, keys_area] = inner_layout.areas(inner);

        Paragraph::new(DISCLAIMER_TEXT)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        if self.exit_hint_visible {
            Paragraph::new(Span::styled(
                "To leave without agreeing, close this window or press Ctrl+C.",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))
            .render(hint_area, buf);
        }

        let keys = Line::from(vec![
            Span::styled("Enter/a: I agree", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("e: How do I exit?", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(keys).render(keys_area, buf);
    }
}
