//! Move Set Validation
//!
//! Turns raw command-line tokens into the ordered, immutable set of moves
//! that defines the game's cycle.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Index;

use thiserror::Error;

use crate::MIN_MOVES;

/// Reasons a list of moves cannot form a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Fewer than three moves.
    #[error("there must be at least {min} moves, got {count}", min = MIN_MOVES)]
    TooFew {
        /// Number of moves supplied.
        count: usize,
    },

    /// An even number of moves cannot be split into equal winning and losing halves.
    #[error("there must be an odd number of moves, got {count}")]
    EvenCount {
        /// Number of moves supplied.
        count: usize,
    },

    /// The same move appears more than once.
    #[error("duplicate move '{0}' found, all moves must be unique")]
    Duplicate(String),
}

/// Ordered set of unique move names.
///
/// Length is odd and at least three. The order defines circular adjacency,
/// so it is preserved exactly as supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    moves: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set.
    ///
    /// Duplicates are detected by case-sensitive exact match.
    pub fn new<I, S>(moves: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();
        let count = moves.len();

        if count % 2 == 0 {
            return Err(ValidationError::EvenCount { count });
        }
        if count < MIN_MOVES {
            return Err(ValidationError::TooFew { count });
        }

        let mut seen = BTreeSet::new();
        for name in &moves {
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::Duplicate(name.clone()));
            }
        }

        Ok(Self { moves })
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false; a valid set holds at least three moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves each move beats (and loses to).
    #[inline]
    pub fn half(&self) -> usize {
        self.moves.len() / 2
    }

    /// Position of a move in the cycle.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.moves.iter().position(|m| m == name)
    }

    /// Check membership.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Iterate moves in cycle order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str)
    }

    /// Borrow the underlying names.
    pub fn as_slice(&self) -> &[String] {
        &self.moves
    }
}

impl Index<usize> for MoveSet {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.moves[index]
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.moves.join(", "))
    }
}
