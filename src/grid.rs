use crate::TermInt;
use crate::snake::Direction::{self, *};

pub const GAME_AREA_WIDTH: TermInt = 60;
pub const GAME_AREA_HEIGHT: TermInt = 30;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: TermInt,
    pub col: TermInt,
}

impl Position {
    pub fn new(row: TermInt, col: TermInt) -> Self {
        Position { row, col }
    }
}

/// Fixed playable area. Edges are not walls: stepping off one side comes
/// back in on the opposite side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: TermInt,
    height: TermInt,
}

impl Grid {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        assert!(width > 0 && height > 0, "grid must have at least one cell");
        Grid { width, height }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        match direction {
            Up => Position::new(wrapping_dec(pos.row, self.height), pos.col),
            Down => Position::new(wrapping_inc(pos.row, self.height), pos.col),
            Left => Position::new(pos.row, wrapping_dec(pos.col, self.width)),
            Right => Position::new(pos.row, wrapping_inc(pos.col, self.width)),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(GAME_AREA_WIDTH, GAME_AREA_HEIGHT)
    }
}

fn wrapping_inc(value: TermInt, max: TermInt) -> TermInt {
    if value >= max - 1 { 0 } else { value + 1 }
}

fn wrapping_dec(value: TermInt, max: TermInt) -> TermInt {
    if value == 0 { max - 1 } else { value - 1 }
}
