use std::thread::sleep;
use std::time::Duration;

use crossterm::event::KeyEvent;
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::has_self_collision;
use crate::config::Timing;
use crate::error::GameError;
use crate::food::{place_food, Food};
use crate::grid::{Grid, Position};
use crate::input::{map_key, Command};
use crate::snake::{Direction::{self, *}, Snake};

const INITIAL_SNAKE_LENGTH: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    GameOver,
    Quit,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        self != GameState::Running
    }
}

/// Read-only view of a session handed to the presentation layer each frame.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a> {
    pub snake: &'a [Position],
    pub heading: Direction,
    pub food: Food,
    pub score: u32,
    pub state: GameState,
}

/// Drawing surface and key source the loop runs against.
pub trait Presenter {
    /// Waits at most `timeout` for a key press.
    fn poll_input(&mut self, timeout: Duration) -> anyhow::Result<Option<KeyEvent>>;
    fn render(&mut self, snapshot: &Snapshot) -> anyhow::Result<()>;
    fn show_game_over(&mut self, final_score: u32) -> anyhow::Result<()>;
}

pub struct GameSession<R: Rng = StdRng> {
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    state: GameState,
    rng: R,
}

impl GameSession<StdRng> {
    pub fn with_seed(grid: Grid, seed: Option<u64>) -> Result<Self, GameError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        GameSession::new(grid, rng)
    }
}

impl<R: Rng> GameSession<R> {
    pub fn new(grid: Grid, rng: R) -> Result<Self, GameError> {
        let start = Position::new(grid.height() / 2, grid.width() / 4);
        let snake = Snake::new(start, INITIAL_SNAKE_LENGTH, Right, &grid);
        let mut session = GameSession {
            grid,
            snake,
            food: Food::new(),
            score: 0,
            state: GameState::Running,
            rng,
        };
        session.respawn_food()?;

        info!(
            "New game on {}x{} grid, snake head at ({}, {})",
            grid.width(), grid.height(), start.row, start.col
        );
        Ok(session)
    }

    /// One game step. Terminal sessions ignore further ticks.
    pub fn tick(&mut self, command: Option<Command>) -> Result<(), GameError> {
        if self.state.is_terminal() {
            return Ok(());
        }

        match command {
            Some(Command::Quit) => {
                info!("Quit requested with score {}", self.score);
                self.state = GameState::Quit;
                return Ok(());
            }
            Some(Command::Steer(dir)) => {
                self.snake.steer(dir);
            }
            None => {}
        }

        let outcome = self.snake.advance(&self.grid, self.food.position());

        if outcome.ate_food {
            self.score += 1;
            let head = outcome.new_head;
            info!("Ate food at ({}, {}), score {}", head.row, head.col, self.score);
            self.respawn_food()?;
        }

        if has_self_collision(self.snake.body()) {
            let head = outcome.new_head;
            info!(
                "Snake ran into itself at ({}, {}), final score {}",
                head.row, head.col, self.score
            );
            self.state = GameState::GameOver;
        }

        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: self.snake.body(),
            heading: self.snake.direction(),
            food: self.food,
            score: self.score,
            state: self.state,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    ///////////////////////////////////////////////////////////////////////////

    fn respawn_food(&mut self) -> Result<(), GameError> {
        match place_food(&self.grid, self.snake.body(), &mut self.rng) {
            Ok(pos) => {
                self.food.place_at(pos);
                Ok(())
            }
            Err(e) => {
                error!("Food placement failed at score {}: {}", self.score, e);
                self.food.clear();
                Err(e)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, pos: Position) {
        self.food.place_at(pos);
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}

/// Drives the session until it reaches a terminal state: poll, update,
/// render, sleep. Returns the state the game ended in.
pub fn run<R: Rng, P: Presenter>(
    session: &mut GameSession<R>,
    presenter: &mut P,
    timing: Timing,
) -> anyhow::Result<GameState> {
    presenter.render(&session.snapshot())?;

    while !session.state().is_terminal() {
        let command = presenter.poll_input(timing.input_timeout)?.as_ref().and_then(map_key);
        session.tick(command)?;
        presenter.render(&session.snapshot())?;

        if !session.state().is_terminal() && timing.tick > Duration::from_millis(0) {
            sleep(timing.tick);
        }
    }

    if session.state() == GameState::GameOver {
        presenter.show_game_over(session.score())?;
    }

    Ok(session.state())
}
