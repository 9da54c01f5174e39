//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Left
        | KeyCode::Char('h' | 'H')
        | KeyCode::Char('a' | 'A') => Some(Command::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l' | 'L')
        | KeyCode::Char('d' | 'D') => Some(Command::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j' | 'J')
        | KeyCode::Char('s' | 'S') => Some(Command::SoftDrop),
        _ => None,
    }
}

/// `q`, `Q` or Ctrl-C
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map an abstract key symbol (`"left"`, `"right"`, `"down"`, `"q"`) to a command.
///
/// Matching is case-insensitive; unknown symbols map to `None`.
pub fn handle_key_symbol(symbol: &str) -> Option<Command> {
    match symbol.to_lowercase().as_str() {
        "left" => Some(Command::MoveLeft),
        "right" => Some(Command::MoveRight),
        "down" => Some(Command::SoftDrop),
        "q" => Some(Command::Quit),
        _ => None,
    }
}
