//! Process-wide Random Number Generator
//!
//! One cryptographically secure generator is created at startup and reused
//! for both computer move selection and commitment key generation.
//! Rounds never reseed it, so back-to-back rounds cannot share a seed.

use rand::rngs::{OsRng, StdRng};
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

/// Secure game RNG.
///
/// Wraps [`StdRng`] (ChaCha-based CSPRNG) seeded from the operating system.
///
/// # Example
///
/// ```
/// use rps_commit::core::rng::GameRng;
///
/// let mut rng = GameRng::from_os().unwrap();
/// let moves = ["rock", "paper", "scissors"];
/// assert!(rng.choose(&moves).is_some());
/// ```
#[derive(Debug)]
pub struct GameRng {
    inner: StdRng,
}

impl GameRng {
    /// Create a generator seeded from the OS entropy source.
    ///
    /// Fails if the OS cannot supply entropy; callers must treat that as fatal.
    pub fn from_os() -> Result<Self, rand::Error> {
        let inner = StdRng::from_rng(OsRng)?;
        Ok(Self { inner })
    }

    /// Create a generator from a fixed 32-byte seed.
    ///
    /// Only for reproducible tests. A known seed makes every key predictable.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }

    /// Select a uniformly random element from a slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Fill a key buffer with secure random bytes.
    pub fn fill_key(&mut self, key: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(key)
    }
}

// =============================================================================
// TESTS
// =============================================================================
