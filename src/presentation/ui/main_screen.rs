//! Main experience screen.

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

use crate::domain::entities::FeatureConfig;
use crate::presentation::theme::Palette;

const FEED_CAPACITY: usize = 50;

/// What the main screen asked the orchestrator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    /// Nothing actionable.
    None,
    /// Re-resolve the remote configuration.
    RefreshConfig,
    /// Sign the current user out.
    Logout,
}

/// Main experience state: resolved toggles plus the notification feed.
pub struct MainScreenState {
    user_name: String,
    config: Option<FeatureConfig>,
    config_note: Option<String>,
    feed: VecDeque<(String, String)>,
    palette: Palette,
    font_points: u16,
}

impl MainScreenState {
    /// Creates state for the signed-in user.
    #[must_use]
    pub fn new(user_name: impl Into<String>, palette: Palette, font_points: u16) -> Self {
        Self {
            user_name: user_name.into(),
            config: None,
            config_note: None,
            feed: VecDeque::new(),
            palette,
            font_points,
        }
    }

    /// Replaces the displayed configuration.
    pub fn set_config(&mut self, config: FeatureConfig) {
        self.config = Some(config);
        self.config_note = None;
    }

    /// Shows a note about the last resolution (offline fallback etc.).
    pub fn set_config_note(&mut self, note: impl Into<String>) {
        self.config_note = Some(note.into());
    }

    /// Appends a presented notification to the rolling feed.
    pub fn push_alert(&mut self, title: String, body: String) {
        if self.feed.len() == FEED_CAPACITY {
            self.feed.pop_front();
        }
        self.feed.push_back((title, body));
    }

    /// Applies a new appearance.
    pub fn set_appearance(&mut self, palette: Palette, font_points: u16) {
        self.palette = palette;
        self.font_points = font_points;
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> MainAction {
        match key.code {
            KeyCode::Char('r') => MainAction::RefreshConfig,
            KeyCode::Char('l') => MainAction::Logout,
            _ => MainAction::None,
        }
    }

    fn toggle_lines(&self) -> Vec<ListItem<'_>> {
        let Some(config) = &self.config else {
            return vec![ListItem::new("Resolving configuration...")];
        };

        let mut items = vec![
            toggle_item("Radio", config.show_radio),
            toggle_item("Companion", config.show_companion),
            toggle_item("Library", config.show_library),
            toggle_item("Sign-up", config.allow_sign_up),
            toggle_item("Avatar upload", config.allow_avatar_upload),
        ];
        if config.show_radio {
            items.push(ListItem::new(Line::from(vec![
                Span::raw("Stream: "),
                Span::styled(
                    config.radio_stream_url.clone(),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ),
            ])));
        }
        items
    }
}

fn toggle_item(name: &str, enabled: bool) -> ListItem<'_> {
    let marker = if enabled { "[on] " } else { "[off]" };
    ListItem::new(format!("{marker} {name}"))
}

impl Widget for &MainScreenState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [header_area, config_area, feed_area, footer_area] = layout.areas(area);

        let header = Line::from(vec![
            Span::styled(
                format!("Solace — {}", self.user_name),
                self.palette.base_style.add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("{}pt", self.font_points), self.palette.dimmed_style),
        ]);
        Paragraph::new(header).render(header_area, buf);

        let config_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .title(" Features ");
        let config_inner = config_block.inner(config_area);
        config_block.render(config_area, buf);
        List::new(self.toggle_lines()).render(config_inner, buf);

        if let Some(note) = &self.config_note {
            let note_area = Rect::new(
                config_area.x + 2,
                config_area.y + config_area.height.saturating_sub(1),
                config_area.width.saturating_sub(4),
                1,
            );
            Paragraph::new(Span::styled(note.clone(), self.palette.dimmed_style))
                .render(note_area, buf);
        }

        let feed_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .title(" Notifications ");
        let feed_inner = feed_block.inner(feed_area);
        feed_block.render(feed_area, buf);
        let feed_items: Vec<ListItem<'_>> = self
            .feed
            .iter()
            .rev()
            .map(|(title, body)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        title.clone(),
                        self.palette.base_style.add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(body.clone(), self.palette.base_style),
                ]))
            })
            .collect();
        List::new(feed_items).render(feed_inner, buf);

        let footer = Line::from(vec![
            Span::styled("r: Refresh config", self.palette.dimmed_style),
            Span::raw(" | "),
            Span::styled("l: Log out", self.palette.dimmed_style),
            Span::raw(" | "),
            Span::styled("q: Quit", self.palette.dimmed_style),
        ]);
        Paragraph::new(footer).render(footer_area, buf);
    }
}
