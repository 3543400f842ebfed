//! Command Line Configuration
//!
//! Parses the move list and logging flags, then validates them into a
//! [`GameConfig`].

use clap::Parser;
use tracing::Level;

use crate::game::moves::{MoveSet, ValidationError};

/// Printed after any argument validation failure.
pub const USAGE_HINT: &str =
    "Invalid command line arguments. Please provide an odd number of unique strings.";

/// Moves that look like flags are only read as moves after `--`.
pub const SEPARATOR_HINT: &str =
    "Moves starting with '-' (such as -v, -h or -V) must follow '--', e.g. rps-commit -- -v a b";

/// Command line arguments for the game binary.
#[derive(Parser, Debug)]
#[command(
    name = "rps-commit",
    author,
    version,
    about = "Rock-paper-scissors over any odd number of moves, with HMAC-committed computer moves",
    long_about = None,
    after_help = SEPARATOR_HINT
)]
pub struct Cli {
    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Moves in cycle order. Each move beats the N/2 moves before it.
    /// Put `--` first if a move starts with '-'.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true, value_name = "MOVE")]
    pub moves: Vec<String>,
}

/// Validated game configuration.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Moves in cycle order.
    pub moves: MoveSet,
    /// Maximum log level written to stderr.
    pub log_level: Level,
}

impl Cli {
    /// Validate arguments into a game configuration.
    pub fn into_config(self) -> Result<GameConfig, ValidationError> {
        let moves = MoveSet::new(self.moves)?;
        Ok(GameConfig {
            moves,
            log_level: log_level(self.verbose),
        })
    }
}

/// Map the `-v` count to a log level.
pub fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
