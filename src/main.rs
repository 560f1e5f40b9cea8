use anyhow::Context;
use clap::Parser;
use log::{error, info};

use wrapsnake::config::{Args, Settings};
use wrapsnake::game::{self, GameSession, GameState};
use wrapsnake::grid::Grid;
use wrapsnake::logger::init_logger;
use wrapsnake::term::{self, TermManager};

fn main() -> anyhow::Result<()> {
    let settings = Settings::from(Args::parse());
    init_logger(settings.log_file.as_deref())?;
    info!("Starting with {:?}", settings);

    let result = play(&settings);
    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}

fn play(settings: &Settings) -> anyhow::Result<()> {
    let grid = Grid::default();

    // Refuse to start before any game state exists if the area doesn't fit.
    let size = term::terminal_size().context("reading terminal size")?;
    info!("Terminal is {}x{}", size.0, size.1);
    term::ensure_fits(&grid, size)?;

    let mut term = TermManager::new(grid, size, settings.color);
    term.setup().context("setting up terminal")?;

    let mut session = GameSession::with_seed(grid, settings.seed)?;
    let end = game::run(&mut session, &mut term, settings.timing)?;

    if end == GameState::GameOver {
        term.read_key_blocking()?;
    }

    term.restore().context("restoring terminal")?;
    info!("Exited with {:?}, score {}", end, session.score());
    Ok(())
}
