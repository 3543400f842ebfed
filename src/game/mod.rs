//! Game Logic Module
//!
//! Move validation, win resolution, and the interactive round loop.
//!
//! ## Module Structure
//!
//! - `moves`: Move set validation
//! - `resolver`: Circular win/lose/draw rule and win table
//! - `table`: Help table rendering
//! - `command`: Player command parsing
//! - `session`: Interactive round loop

pub mod moves;
pub mod resolver;
pub mod table;
pub mod command;
pub mod session;

// Re-export key types
pub use moves::{MoveSet, ValidationError};
pub use resolver::{MoveCycle, Outcome, RoundResult, UnknownMove, WinTable};
pub use command::Command;
pub use session::{GameSession, SessionEnd, SessionError, SessionSummary};
