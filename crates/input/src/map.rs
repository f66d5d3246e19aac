//! Key mapping from terminal events to session commands.

use crate::types::{Command, MovementDirection, RotationDirection};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to session commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(Command::Move(MovementDirection::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(Command::Move(MovementDirection::Right))
        }
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Move(MovementDirection::Down)),

        // Rotation
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(Command::Rotate(RotationDirection::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(Command::Rotate(RotationDirection::Left))
        }

        // Actions
        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
