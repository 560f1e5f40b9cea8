use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Quit,
}

/// Arrow keys, vi keys (hjkl) and WASD steer; q, Esc and Ctrl+C quit.
/// Anything else is not a command.
pub fn map_key(key: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Up => Some(Command::Steer(Up)),
        KeyCode::Char('h') | KeyCode::Char('a') | KeyCode::Left => Some(Command::Steer(Left)),
        KeyCode::Char('j') | KeyCode::Char('s') | KeyCode::Down => Some(Command::Steer(Down)),
        KeyCode::Char('l') | KeyCode::Char('d') | KeyCode::Right => Some(Command::Steer(Right)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
