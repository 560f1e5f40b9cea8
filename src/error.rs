use std::{error::Error, fmt};

use crate::TermInt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The terminal cannot hold the play area.
    TerminalTooSmall { required: (TermInt, TermInt), actual: (TermInt, TermInt) },
    /// Every cell is covered by the snake.
    NoFreeCell,
    /// Free cells exist but random sampling never hit one.
    PlacementExhausted { attempts: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::TerminalTooSmall { required, actual } => write!(
                f,
                "Terminal is too small! Required: {} columns x {} rows for game area. \
                 Current: {} columns x {} rows.",
                required.0, required.1, actual.0, actual.1
            ),
            GameError::NoFreeCell => write!(f, "no free cell left for food"),
            GameError::PlacementExhausted { attempts } => {
                write!(f, "could not place food after {} attempts", attempts)
            }
        }
    }
}

impl Error for GameError {}
