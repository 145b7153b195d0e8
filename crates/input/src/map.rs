//! Key mapping from terminal events to cursor actions.

use crate::types::CursorAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to cursor actions.
pub fn handle_key_event(key: KeyEvent) -> Option<CursorAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(CursorAction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(CursorAction::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(CursorAction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(CursorAction::Right)
        }

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => Some(CursorAction::Select),
        KeyCode::Esc | KeyCode::Backspace => Some(CursorAction::Cancel),

        KeyCode::Char('n') | KeyCode::Char('N') => Some(CursorAction::NewBoard),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
