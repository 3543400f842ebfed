//! Keyed Hashing for Move Commitments
//!
//! HMAC-SHA256 over the UTF-8 bytes of a move name, plus the text
//! encodings used when digests and keys are shown to the player.

use hmac::{Hmac, Mac};
use sha2::Sha256;

/// HMAC-SHA256 instance.
type HmacSha256 = Hmac<Sha256>;

/// Digest output type (256 bits / 32 bytes)
pub type MoveDigest = [u8; 32];

/// Commitment key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Commitment key type.
pub type CommitKey = [u8; KEY_LEN];

/// Compute HMAC-SHA256(key, move_name).
pub fn keyed_hash(key: &[u8], move_name: &str) -> MoveDigest {
    // HMAC accepts keys of any length, so construction cannot fail.
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key)
        .unwrap_or_else(|_| unreachable!("HMAC accepts any key length"));
    mac.update(move_name.as_bytes());
    mac.finalize().into_bytes().into()
}

/// Check a digest against HMAC-SHA256(key, move_name) in constant time.
pub fn verify_keyed_hash(key: &[u8], move_name: &str, digest: &[u8]) -> bool {
    let Ok(mut mac) = <HmacSha256 as Mac>::new_from_slice(key) else {
        return false;
    };
    mac.update(move_name.as_bytes());
    mac.verify_slice(digest).is_ok()
}

/// Render a digest as lowercase hex.
#[inline]
pub fn to_hex(digest: &[u8]) -> String {
    hex::encode(digest)
}

/// Parse a hex digest (either case).
pub fn from_hex(text: &str) -> Option<MoveDigest> {
    let bytes = hex::decode(text.trim()).ok()?;
    bytes.try_into().ok()
}
