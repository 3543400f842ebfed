//! Move Commitment Protocol
//!
//! Commit to the computer's move before the player chooses.
//! Reveal the key at round end so anyone can verify the move was not changed.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

use crate::core::hash::{self, CommitKey, MoveDigest, KEY_LEN};
use crate::core::rng::GameRng;

/// Errors that can occur while committing or verifying.
#[derive(Debug, Error)]
pub enum CommitmentError {
    /// The random source could not supply a key.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] rand::Error),

    /// Recomputed digest doesn't match the published one.
    #[error("HMAC mismatch: key and move do not produce the published digest")]
    DigestMismatch,

    /// Published digest is not 64 hex characters.
    #[error("malformed HMAC digest: {0}")]
    MalformedDigest(String),

    /// Revealed key is not base64 of 32 bytes.
    #[error("malformed key: {0}")]
    MalformedKey(String),
}

/// Commitment to a single move.
///
/// The digest is published before the player moves. The key and move stay
/// private until [`Commitment::reveal`] is called.
#[derive(Clone)]
pub struct Commitment {
    key: CommitKey,
    committed_move: String,
    digest_hex: String,
}

impl Commitment {
    /// Commit to a move with a fresh 256-bit key.
    ///
    /// Membership of `committed_move` in the active move set is the caller's
    /// responsibility.
    pub fn new(committed_move: impl Into<String>, rng: &mut GameRng) -> Result<Self, CommitmentError> {
        let mut key = [0u8; KEY_LEN];
        rng.fill_key(&mut key)?;
        Ok(Self::with_key(key, committed_move))
    }

    /// Commit with a caller-supplied key.
    pub fn with_key(key: CommitKey, committed_move: impl Into<String>) -> Self {
        let committed_move = committed_move.into();
        let digest = hash::keyed_hash(&key, &committed_move);
        Self {
            key,
            committed_move,
            digest_hex: hash::to_hex(&digest),
        }
    }

    /// Public digest as lowercase hex.
    pub fn digest(&self) -> &str {
        &self.digest_hex
    }

    /// The committed move. Not to be shown before the player has moved.
    pub fn committed_move(&self) -> &str {
        &self.committed_move
    }

    /// Disclose key and move.
    ///
    /// Only call after the digest has been shown to the player.
    pub fn reveal(self) -> Reveal {
        Reveal {
            key: self.key,
            committed_move: self.committed_move,
        }
    }
}

impl std::fmt::Debug for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key and move stay hidden until reveal.
        f.debug_struct("Commitment")
            .field("digest", &self.digest_hex)
            .finish_non_exhaustive()
    }
}

/// Reveal structure (published after the round ends).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    /// Secret key.
    pub key: CommitKey,
    /// The move that was committed.
    pub committed_move: String,
}

impl Reveal {
    /// Rebuild a reveal from printed values.
    pub fn from_base64(key_b64: &str, committed_move: impl Into<String>) -> Result<Self, CommitmentError> {
        let bytes = BASE64
            .decode(key_b64.trim())
            .map_err(|e| CommitmentError::MalformedKey(e.to_string()))?;
        let key: CommitKey = bytes
            .try_into()
            .map_err(|b: Vec<u8>| CommitmentError::MalformedKey(format!("expected {} bytes, got {}", KEY_LEN, b.len())))?;

        Ok(Self {
            key,
            committed_move: committed_move.into(),
        })
    }

    /// Key as standard base64.
    pub fn key_base64(&self) -> String {
        BASE64.encode(self.key)
    }

    /// Recompute the digest for this key and move.
    pub fn recompute(&self) -> MoveDigest {
        hash::keyed_hash(&self.key, &self.committed_move)
    }

    /// Verify reveal against a published hex digest.
    pub fn verify(&self, digest_hex: &str) -> Result<(), CommitmentError> {
        let digest = hash::from_hex(digest_hex)
            .ok_or_else(|| CommitmentError::MalformedDigest(digest_hex.to_string()))?;

        if hash::verify_keyed_hash(&self.key, &self.committed_move, &digest) {
            Ok(())
        } else {
            Err(CommitmentError::DigestMismatch)
        }
    }
}
