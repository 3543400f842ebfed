//! Fair-Play Proofs
//!
//! The computer publishes an HMAC of its move before the player chooses and
//! discloses the key afterwards. Anyone holding the digest, key, and move can
//! recompute the HMAC and confirm the move was fixed in advance.

pub mod commitment;

// Re-export key types
pub use commitment::{Commitment, CommitmentError, Reveal};
