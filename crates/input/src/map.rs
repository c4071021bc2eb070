//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Letters are matched case-insensitively; anything unmapped yields `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Some(GameAction::SoftDrop),

        // Drops
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char(' ') => Some(GameAction::HardDrop),

        // Rotation
        KeyCode::Char('r') | KeyCode::Char('x') | KeyCode::Char('k') => Some(GameAction::Rotate),
        KeyCode::Char('z') => Some(GameAction::RotateCcw),

        // Game flow
        KeyCode::Char('p') => Some(GameAction::Pause),
        KeyCode::Char('n') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
