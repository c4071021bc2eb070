//! Command-line interface for termtris.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::core::Randomizer;
use crate::types::FRAME_MS;

/// termtris - falling-block puzzle game for the terminal
#[derive(Parser, Debug)]
#[command(name = "termtris")]
#[command(about = "Falling-block puzzle game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the piece sequence (default: derived from the clock)
    #[arg(long, env = "TERMTRIS_SEED")]
    pub seed: Option<u32>,

    /// Piece selection policy: `uniform` or `bag`
    #[arg(
        long,
        env = "TERMTRIS_RANDOMIZER",
        default_value = "uniform",
        value_parser = parse_randomizer
    )]
    pub randomizer: Randomizer,

    /// Sleep between frames, in milliseconds
    #[arg(
        long,
        env = "TERMTRIS_FRAME_MS",
        default_value_t = FRAME_MS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub frame_ms: u32,

    /// Where tracing output goes (the terminal itself is busy)
    #[arg(long, env = "TERMTRIS_LOG_FILE", default_value = "termtris.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// The configured seed, or one taken from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms as u64)
    }
}

fn parse_randomizer(s: &str) -> Result<Randomizer, String> {
    Randomizer::from_str(s).ok_or_else(|| format!("unknown randomizer `{s}` (expected uniform or bag)"))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
