//! Terminal event helpers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Key classification helpers shared by the screens.
pub struct EventHandler;

impl EventHandler {
    /// Ctrl+C always quits, from any screen.
    #[must_use]
    pub fn is_force_quit(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Plain quit key, honored only on screens without text input.
    #[must_use]
    pub fn is_quit_key(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_force_quit() {
        assert!(EventHandler::is_force_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!EventHandler::is_force_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_quit_keys() {
        assert!(EventHandler::is_quit_key(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_quit_key(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_quit_key(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_submit_event() {
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }
}
