use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::error::GameError;
use crate::grid::{Grid, Position};

pub const FOOD_CHAR: char = '*';

/// Upper bound on random draws before placement is declared broken. With at
/// least one free cell on a 60x30 area the odds of reaching it are negligible.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Position,
    active: bool,
    glyph: char,
}

impl Food {
    pub fn new() -> Self {
        Food { position: Position::new(0, 0), active: false, glyph: FOOD_CHAR }
    }

    pub fn position(&self) -> Option<Position> {
        if self.active { Some(self.position) } else { None }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn place_at(&mut self, position: Position) {
        self.position = position;
        self.active = true;
    }

    pub fn clear(&mut self) {
        self.active = false;
    }
}

impl Default for Food {
    fn default() -> Self {
        Food::new()
    }
}

pub fn place_food<R: Rng + ?Sized>(
    grid: &Grid,
    occupied: &[Position],
    rng: &mut R,
) -> Result<Position, GameError> {
    place_food_within(grid, occupied, rng, MAX_PLACEMENT_ATTEMPTS)
}

fn place_food_within<R: Rng + ?Sized>(
    grid: &Grid,
    occupied: &[Position],
    rng: &mut R,
    max_attempts: usize,
) -> Result<Position, GameError> {
    let taken: HashSet<Position> =
        occupied.iter().copied().filter(|pos| grid.contains(*pos)).collect();
    if taken.len() >= grid.capacity() {
        return Err(GameError::NoFreeCell);
    }

    for attempt in 1..=max_attempts {
        let row = rng.gen_range(0..grid.height());
        let col = rng.gen_range(0..grid.width());
        let candidate = Position::new(row, col);
        if !taken.contains(&candidate) {
            debug!("Food placed at ({}, {}) after {} draw(s)", row, col, attempt);
            return Ok(candidate);
        }
    }

    Err(GameError::PlacementExhausted { attempts: max_attempts })
}
