//! Core primitives.
//!
//! Secure randomness and keyed hashing shared by the game and proof modules.

pub mod rng;
pub mod hash;

// Re-export core types
pub use rng::GameRng;
pub use hash::{keyed_hash, verify_keyed_hash, CommitKey, MoveDigest, KEY_LEN};
