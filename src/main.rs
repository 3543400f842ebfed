//! RPS Commit
//!
//! Interactive console game. Moves come from the command line; commands
//! come from stdin. Logs go to stderr.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use rps_commit::{
    cli::{Cli, SEPARATOR_HINT, USAGE_HINT},
    GameRng, GameSession, VERSION,
};

/// Exit code for rejected move lists.
const EXIT_INVALID_ARGS: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {}", e);
            println!("{}", USAGE_HINT);
            println!("{}", SEPARATOR_HINT);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    info!("RPS Commit v{}", VERSION);
    info!(verbose, moves = %config.moves, "Starting game");

    match run(config.moves) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Fatal: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(moves: rps_commit::MoveSet) -> anyhow::Result<()> {
    let rng = GameRng::from_os().context("OS entropy source unavailable")?;
    let mut session = GameSession::new(moves, rng);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = session
        .run(stdin.lock(), stdout.lock())
        .context("game session aborted")?;

    info!(rounds = summary.rounds_played(), "Goodbye");
    Ok(())
}
