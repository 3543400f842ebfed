//! # RPS Commit
//!
//! Rock-paper-scissors generalized to any odd number of moves, where the
//! computer commits to its move with an HMAC before the player chooses.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       RPS COMMIT                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Primitives                                │
//! │  ├── rng.rs      - Process-wide CSPRNG                       │
//! │  └── hash.rs     - HMAC-SHA256 keyed hashing                 │
//! │                                                              │
//! │  game/           - Game logic                                │
//! │  ├── moves.rs    - Move set validation                       │
//! │  ├── resolver.rs - Circular win rule, win table              │
//! │  ├── table.rs    - Help table rendering                      │
//! │  ├── command.rs  - Player command parsing                    │
//! │  └── session.rs  - Interactive round loop                    │
//! │                                                              │
//! │  proof/          - Fair play                                 │
//! │  └── commitment.rs - Commit / reveal / verify                │
//! │                                                              │
//! │  cli.rs          - Argument parsing and configuration        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! Each round the computer picks a move, draws a fresh 256-bit key, and
//! publishes `HMAC-SHA256(key, move)`. After the player moves, the key is
//! disclosed. Anyone can recompute the HMAC and confirm the computer's move
//! was fixed before the player chose.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod core;
pub mod game;
pub mod proof;

// Re-export commonly used types
pub use core::rng::GameRng;
pub use game::moves::{MoveSet, ValidationError};
pub use game::resolver::{MoveCycle, Outcome, RoundResult, UnknownMove, WinTable};
pub use game::session::{GameSession, SessionError};
pub use proof::commitment::{Commitment, CommitmentError, Reveal};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest playable move set.
pub const MIN_MOVES: usize = 3;
