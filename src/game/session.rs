//! Interactive Game Session
//!
//! Runs rounds over any line reader and writer, so the console binary and
//! tests share the same loop.
//!
//! ## Round flow
//!
//! ```text
//! pick computer move ─► commit (HMAC shown) ─► read command ─┬─ 0 ─► exit
//!        ▲                                                   ├─ ? ─► table, re-read
//!        │                                                   ├─ ✗ ─► diagnostic, re-read
//!        └──────────── reveal key ◄── resolve ◄──────────────┘ n
//! ```
//!
//! `?` and invalid input never re-roll the commitment. The key is only
//! printed once a move has been resolved.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::rng::GameRng;
use crate::game::command::Command;
use crate::game::moves::MoveSet;
use crate::game::resolver::{MoveCycle, RoundResult, UnknownMove};
use crate::game::table;
use crate::proof::commitment::{Commitment, CommitmentError};

/// Printed when the player leaves.
pub const EXIT_MESSAGE: &str = "Exiting ....";

/// Printed for unrecognised commands.
pub const INVALID_MOVE_MESSAGE: &str = "Invalid move. Please try again.";

/// Session errors. All of them end the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Console read or write failed.
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),

    /// Commitment could not be created.
    #[error("commitment error: {0}")]
    Commitment(#[from] CommitmentError),

    /// Resolver was handed a move outside the set.
    #[error("resolver contract violated: {0}")]
    UnknownMove(#[from] UnknownMove),
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// Player entered `0`.
    Exit,
    /// Input closed.
    EndOfInput,
}

/// Summary returned when a session ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds that reached a result, in play order.
    pub rounds: Vec<RoundRecord>,
    /// Why the session stopped.
    pub end: SessionEnd,
}

impl SessionSummary {
    /// Number of resolved rounds.
    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }
}

/// One resolved round, as revealed to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundRecord {
    /// Published digest.
    pub digest: String,
    /// Player's move.
    pub player_move: String,
    /// Computer's committed move.
    pub computer_move: String,
    /// Outcome.
    pub result: RoundResult,
    /// Disclosed key, base64.
    pub key_base64: String,
}

/// What a single round produced.
enum RoundEnd {
    Resolved(RoundRecord),
    Stopped(SessionEnd),
}

/// A game over one move set and one random generator.
pub struct GameSession {
    cycle: MoveCycle,
    rng: GameRng,
}

impl GameSession {
    /// Create a session. `rng` is used for every round.
    pub fn new(moves: MoveSet, rng: GameRng) -> Self {
        Self {
            cycle: MoveCycle::new(moves),
            rng,
        }
    }

    /// The resolver.
    pub fn cycle(&self) -> &MoveCycle {
        &self.cycle
    }

    /// Play rounds until the player exits or input ends.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<SessionSummary, SessionError> {
        let mut rounds = Vec::new();

        loop {
            match self.play_round(&mut input, &mut output)? {
                RoundEnd::Resolved(record) => {
                    info!(
                        round = rounds.len() + 1,
                        digest = %record.digest,
                        player = %record.player_move,
                        computer = %record.computer_move,
                        result = ?record.result,
                        "Round resolved"
                    );
                    rounds.push(record);
                }
                RoundEnd::Stopped(end) => {
                    info!(rounds_played = rounds.len(), ?end, "Session ended");
                    return Ok(SessionSummary { rounds, end });
                }
            }
        }
    }

    /// Play one round: commit, read commands until one resolves, reveal.
    fn play_round<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<RoundEnd, SessionError> {
        let computer_move = self.cycle.pick_random(&mut self.rng).to_string();
        let commitment = Commitment::new(computer_move, &mut self.rng)?;
        debug!(digest = commitment.digest(), "Committed to computer move");

        let mut buf = Vec::new();
        loop {
            self.print_menu(output, commitment.digest())?;

            // Raw bytes: a line that is not UTF-8 is an invalid move, not an I/O failure.
            buf.clear();
            let read = input.read_until(b'\n', &mut buf)?;

            // Piped input is not echoed, so end the prompt line ourselves.
            writeln!(output)?;

            if read == 0 {
                writeln!(output, "{}", EXIT_MESSAGE)?;
                output.flush()?;
                return Ok(RoundEnd::Stopped(SessionEnd::EndOfInput));
            }

            let line = String::from_utf8_lossy(&buf);
            let command = Command::parse(&line, self.cycle.moves().len());
            debug!(?command, "Command received");

            match command {
                Command::Exit => {
                    writeln!(output, "{}", EXIT_MESSAGE)?;
                    output.flush()?;
                    return Ok(RoundEnd::Stopped(SessionEnd::Exit));
                }
                Command::Help => {
                    write!(output, "{}", table::render(&self.cycle.win_table()))?;
                }
                Command::Invalid(text) => {
                    warn!(input = %text, "Invalid move entered");
                    writeln!(output, "{}", INVALID_MOVE_MESSAGE)?;
                }
                Command::Play(index) => {
                    let record = self.finish_round(index, commitment, output)?;
                    return Ok(RoundEnd::Resolved(record));
                }
            }
        }
    }

    fn finish_round<W: Write>(
        &self,
        index: usize,
        commitment: Commitment,
        output: &mut W,
    ) -> Result<RoundRecord, SessionError> {
        let moves = self.cycle.moves();
        let player_move = &moves[index];
        let result = self.cycle.resolve(player_move, commitment.committed_move())?;

        let digest = commitment.digest().to_string();
        let reveal = commitment.reveal();
        let key_base64 = reveal.key_base64();

        writeln!(output, "Your move: {}", player_move)?;
        writeln!(output, "Computer move: {}", reveal.committed_move)?;
        writeln!(output, "{}", result)?;
        writeln!(output, "Key: {}", key_base64)?;
        writeln!(output)?;
        output.flush()?;

        Ok(RoundRecord {
            digest,
            player_move: player_move.to_string(),
            computer_move: reveal.committed_move,
            result,
            key_base64,
        })
    }

    fn print_menu<W: Write>(&self, output: &mut W, digest: &str) -> io::Result<()> {
        writeln!(output, "HMAC: {}", digest)?;
        writeln!(output, "Available Moves:")?;
        for (i, name) in self.cycle.moves().iter().enumerate() {
            writeln!(output, "{} - {}", i + 1, name)?;
        }
        writeln!(output, "0 - Exit")?;
        writeln!(output, "? - Help")?;
        write!(output, "Enter your move: ")?;
        output.flush()
    }
}
