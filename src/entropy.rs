// src/entropy.rs - Randomness, hashing and time primitives

use chrono::Utc;
use rand::{rng, Rng};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Ambient randomness and time, reified as a trait so deterministic tests
/// can substitute fixed identifiers, bytes and timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait EntropyProvider: Send + Sync {
    /// A fresh random 128-bit identifier (UUID v4).
    fn random_identifier(&self) -> Uuid;

    /// One uniform random byte, drawn independently of `random_identifier`.
    fn random_byte(&self) -> u8;

    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Production entropy: the OS secure random source and the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl EntropyProvider for SystemEntropy {
    fn random_identifier(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn random_byte(&self) -> u8 {
        rng().random()
    }

    fn now_millis(&self) -> u64 {
        Utc::now().timestamp_millis() as u64
    }
}

/// SHA-256 digest of the identifier's canonical lowercase hyphenated form.
///
/// Hashing the string form (not the raw 16 bytes) keeps digests stable for
/// any caller that logs or stores the identifier as text.
pub fn hash_identifier(id: &Uuid) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(id.hyphenated().to_string().as_bytes());
    hasher.finalize().into()
}
