use std::fs::File;
use std::path::Path;

use anyhow::Context;
use simplelog::{Config, LevelFilter, WriteLogger};

/// Logs go to a file because stdout is the game screen. Without a path the
/// log macros stay no-ops.
pub fn init_logger(path: Option<&Path>) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None => return Ok(()),
    };

    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file).context("installing logger")?;
    Ok(())
}
