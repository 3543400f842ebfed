//! Move Cycle Resolver
//!
//! Moves sit on a circle in the order they were supplied. A move beats the
//! `half` moves that precede it and loses to the `half` moves that follow it,
//! where `half = N / 2`. Everything here reduces to one distance formula in
//! [`MoveCycle::resolve_index`].

use std::fmt;

use thiserror::Error;

use crate::core::rng::GameRng;
use crate::game::moves::MoveSet;

/// Result of one round, from the table's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundResult {
    /// Computer's move beats the player's.
    ComputerWins,
    /// Player's move beats the computer's.
    PlayerWins,
    /// Same move.
    Draw,
}

impl RoundResult {
    /// Line printed to the player.
    pub fn message(self) -> &'static str {
        match self {
            Self::ComputerWins => "Computer Wins",
            Self::PlayerWins => "You Win!",
            Self::Draw => "It's a Draw",
        }
    }

    /// Same round seen with the roles swapped.
    pub fn swapped(self) -> Self {
        match self {
            Self::ComputerWins => Self::PlayerWins,
            Self::PlayerWins => Self::ComputerWins,
            Self::Draw => Self::Draw,
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of one move against another, from the first move's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// First move wins.
    Win,
    /// First move loses.
    Lose,
    /// Same move.
    Draw,
}

impl Outcome {
    /// Label used in the help table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Draw => "Draw",
        }
    }
}

impl From<RoundResult> for Outcome {
    /// Player's perspective.
    fn from(result: RoundResult) -> Self {
        match result {
            RoundResult::PlayerWins => Self::Win,
            RoundResult::ComputerWins => Self::Lose,
            RoundResult::Draw => Self::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A move name that is not part of the active set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move: '{0}'")]
pub struct UnknownMove(pub String);

/// Win/lose/draw resolver over a validated move set.
#[derive(Clone, Debug)]
pub struct MoveCycle {
    moves: MoveSet,
}

impl MoveCycle {
    /// Build a resolver. The set is already validated.
    pub fn new(moves: MoveSet) -> Self {
        Self { moves }
    }

    /// The underlying move set.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Pick a uniformly random move.
    pub fn pick_random(&self, rng: &mut GameRng) -> &str {
        // A MoveSet always holds at least three moves.
        rng.choose(self.moves.as_slice())
            .map_or(&self.moves[0], String::as_str)
    }

    /// Resolve a round by move name.
    pub fn resolve(&self, player: &str, computer: &str) -> Result<RoundResult, UnknownMove> {
        let p = self.lookup(player)?;
        let c = self.lookup(computer)?;
        Ok(self.resolve_index(p, c))
    }

    /// Resolve a round by cycle position.
    ///
    /// `d = (player - computer) mod N`; the player wins when `1 <= d <= N / 2`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn resolve_index(&self, player: usize, computer: usize) -> RoundResult {
        let n = self.moves.len();
        assert!(player < n && computer < n, "move index out of range");

        if player == computer {
            return RoundResult::Draw;
        }

        let d = (player + n - computer) % n;
        if d <= self.moves.half() {
            RoundResult::PlayerWins
        } else {
            RoundResult::ComputerWins
        }
    }

    /// Outcome of move `a` played against move `b`.
    pub fn outcome(&self, a: &str, b: &str) -> Result<Outcome, UnknownMove> {
        self.resolve(a, b).map(Outcome::from)
    }

    /// Moves that `name` beats, in cycle order.
    pub fn beats(&self, name: &str) -> Result<Vec<&str>, UnknownMove> {
        self.filter_against(name, Outcome::Win)
    }

    /// Moves that beat `name`, in cycle order.
    pub fn loses_to(&self, name: &str) -> Result<Vec<&str>, UnknownMove> {
        self.filter_against(name, Outcome::Lose)
    }

    /// Full outcome grid, rows against columns.
    pub fn win_table(&self) -> WinTable {
        let n = self.moves.len();
        let cells = (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| Outcome::from(self.resolve_index(row, col)))
                    .collect()
            })
            .collect();

        WinTable {
            moves: self.moves.clone(),
            cells,
        }
    }

    fn lookup(&self, name: &str) -> Result<usize, UnknownMove> {
        self.moves
            .index_of(name)
            .ok_or_else(|| UnknownMove(name.to_string()))
    }

    fn filter_against(&self, name: &str, wanted: Outcome) -> Result<Vec<&str>, UnknownMove> {
        let me = self.lookup(name)?;
        Ok((0..self.moves.len())
            .filter(|&other| Outcome::from(self.resolve_index(me, other)) == wanted)
            .map(|other| &self.moves[other])
            .collect())
    }
}

/// Outcome of every move (row) against every move (column).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinTable {
    moves: MoveSet,
    cells: Vec<Vec<Outcome>>,
}

impl WinTable {
    /// Moves labelling both axes.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Outcome at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Option<Outcome> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Rows of outcomes.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> {
        self.moves.iter().zip(self.cells.iter().map(Vec::as_slice))
    }
}
