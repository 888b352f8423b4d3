//! Keyboard input mapping

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::actions::catalog::Action;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Perform(Action),
    Quit,
}

/// Map a key event to a command. Unbound keys map to `None`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    // Ignore release/repeat reports on terminals that send them
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char(c) => Action::from_key(c).map(Command::Perform),
        _ => None,
    }
}
