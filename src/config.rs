use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_TICK_MS: u64 = 150;
pub const INPUT_TIMEOUT_MS: u64 = 100;

#[derive(Parser, Debug)]
#[command(name = "wrapsnake", about = "Terminal snake on a wraparound 60x30 board")]
pub struct Args {
    /// Delay between game steps, in milliseconds
    #[arg(
        long,
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(10..=2000)
    )]
    pub tick_ms: u64,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a debug log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Draw without colors
    #[arg(long)]
    pub no_color: bool,
}

/// Time budget of one tick: how long to wait for a key, then how long to sleep.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timing {
    pub input_timeout: Duration,
    pub tick: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            input_timeout: Duration::from_millis(INPUT_TIMEOUT_MS),
            tick: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub timing: Timing,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub color: bool,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Settings {
            timing: Timing { tick: Duration::from_millis(args.tick_ms), ..Timing::default() },
            seed: args.seed,
            log_file: args.log_file,
            color: !args.no_color,
        }
    }
}
