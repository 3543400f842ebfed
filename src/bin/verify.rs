//! RPS Verify
//!
//! Checks a round after the fact: given the HMAC shown before the round,
//! and the key and computer move shown after it, confirm they agree.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use rps_commit::Reveal;

/// Verify a revealed commitment against its published HMAC.
#[derive(Parser, Debug)]
#[command(name = "rps-verify", author, version, long_about = None)]
struct Args {
    /// Key printed after the round (base64).
    #[arg(long)]
    key: String,

    /// Computer move printed after the round.
    #[arg(long = "move", value_name = "MOVE")]
    committed_move: String,

    /// HMAC printed before the round (hex).
    #[arg(long)]
    hmac: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match verify(&args) {
        Ok(()) => {
            println!("OK: commitment verified");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("FAILED: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn verify(args: &Args) -> anyhow::Result<()> {
    let reveal = Reveal::from_base64(&args.key, args.committed_move.as_str())
        .context("could not decode key")?;
    reveal
        .verify(&args.hmac)
        .with_context(|| format!("move '{}' does not match the HMAC", args.committed_move))
}
