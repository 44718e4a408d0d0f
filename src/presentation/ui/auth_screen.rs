//! Authentication screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::widgets::TextInput;

/// Which credential flow the form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Existing account.
    SignIn,
    /// New account.
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScreenState {
    Input,
    Submitting,
    Error,
}

/// What the auth screen asked the orchestrator to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Nothing actionable.
    None,
    /// Submit the entered credentials.
    Submit {
        /// Selected flow.
        mode: AuthMode,
        /// Entered email.
        email: String,
        /// Entered password.
        password: String,
    },
}

/// Sign-in / sign-up form.
pub struct AuthScreen {
    email: TextInput,
    password: TextInput,
    focus: Field,
    mode: AuthMode,
    state: AuthScreenState,
    error_message: Option<String>,
    allow_sign_up: bool,
}

impl AuthScreen {
    /// Creates the screen.
    #[must_use]
    pub fn new(allow_sign_up: bool) -> Self {
        let mut email = TextInput::new("Email").placeholder("you@example.org");
        email.set_focused(true);
        let password = TextInput::new("Password").password();

        Self {
            email,
            password,
            focus: Field::Email,
            mode: AuthMode::SignIn,
            state: AuthScreenState::Input,
            error_message: None,
            allow_sign_up,
        }
    }

    /// Returns current state.
    #[must_use]
    pub const fn state(&self) -> AuthScreenState {
        self.state
    }

    /// Sets submitting state.
    pub fn set_submitting(&mut self) {
        self.state = AuthScreenState::Submitting;
        self.error_message = None;
    }

    /// Sets error state.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = AuthScreenState::Error;
        self.error_message = Some(message.into());
    }

    /// Resets to input state.
    pub fn reset(&mut self) {
        self.state = AuthScreenState::Input;
        self.error_message = None;
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Email => Field::Password,
            Field::Password => Field::Email,
        };
        self.email.set_focused(self.focus == Field::Email);
        self.password.set_focused(self.focus == Field::Password);
    }

    fn toggle_mode(&mut self) {
        if !self.allow_sign_up {
            return;
        }
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> AuthAction {
        if self.state == AuthScreenState::Submitting {
            return AuthAction::None;
        }

        if self.state == AuthScreenState::Error {
            self.reset();
            return AuthAction::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.toggle_focus();
                AuthAction::None
            }
            KeyCode::F(2) => {
                self.toggle_mode();
                AuthAction::None
            }
            KeyCode::Enter => {
                if self.email.value().is_empty() || self.password.value().is_empty() {
                    AuthAction::None
                } else {
                    AuthAction::Submit {
                        mode: self.mode,
                        email: self.email.value().to_string(),
                        password: self.password.value().to_string(),
                    }
                }
            }
            _ => {
                let input = match self.focus {
                    Field::Email => &mut self.email,
                    Field::Password => &mut self.password,
                };
                input.handle_key(key);
                AuthAction::None
            }
        }
    }
}

impl Widget for &AuthScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(13),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(50),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let title = match self.mode {
            AuthMode::SignIn => " Sign in to Solace ",
            AuthMode::SignUp => " Create your Solace account ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title);

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let [email_area, password_area, _, status_area, keys_area] = inner_layout.areas(inner);

        (&self.email).render(email_area, buf);
        (&self.password).render(password_area, buf);

        let status = match self.state {
            AuthScreenState::Input => Line::default(),
            AuthScreenState::Submitting => Line::from(Span::styled(
                "Signing in...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            AuthScreenState::Error => {
                let msg = self.error_message.as_deref().unwrap_or("Unknown error");
                Line::from(Span::styled(
                    format!("Error: {msg}"),
                    Style::default().fg(Color::Red),
                ))
            }
        };
        Paragraph::new(status).render(status_area, buf);

        let mut keys = vec![
            Span::styled("Enter: Submit", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Tab: Next field", Style::default().fg(Color::DarkGray)),
        ];
        if self.allow_sign_up {
            keys.push(Span::raw(" | "));
            let toggle = match self.mode {
                AuthMode::SignIn => "F2: Create account",
                AuthMode::SignUp => "F2: Sign in instead",
            };
            keys.push(Span::styled(toggle, Style::default().fg(Color::DarkGray)));
        }
        Paragraph::new(Line::from(keys)).render(keys_area, buf);
    }
}
