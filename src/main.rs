//! Terminal runner (default binary).
//!
//! Wires crossterm input, the framebuffer frontend and the wall clock into the
//! engine loop. Tracing goes to a file so it never tears the display.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use termtris::cli::Cli;
use termtris::core::GameState;
use termtris::engine::{GameLoop, SystemClock};
use termtris::input::CrosstermInput;
use termtris::term::TerminalFrontend;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let seed = cli.seed_or_clock();
    info!(
        seed,
        randomizer = cli.randomizer.as_str(),
        frame_ms = cli.frame_ms,
        "starting termtris"
    );

    let mut frontend = TerminalFrontend::new();
    frontend.enter()?;

    let result = run(&cli, seed, &mut frontend);

    // Always try to restore terminal state.
    let restored = frontend.exit();

    match result {
        Ok(state) => {
            restored?;
            println!(
                "score {}  lines {}  level {}  (seed {})",
                state.score(),
                state.lines(),
                state.level(),
                seed
            );
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "game loop failed");
            Err(err)
        }
    }
}

fn run(cli: &Cli, seed: u32, frontend: &mut TerminalFrontend) -> Result<GameState> {
    let state = GameState::with_randomizer(seed, cli.randomizer);
    let mut game = GameLoop::new(state, CrosstermInput::new(), frontend, SystemClock::new());
    game.run(cli.frame())?;
    Ok(game.into_state())
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TERMTRIS_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
