// src/generator.rs - The three slug policies over an entropy provider

use tracing::trace;

use crate::base62;
use crate::config::{GeneratorConfig, LengthPadding};
use crate::entropy::{hash_identifier, EntropyProvider, SystemEntropy};
use crate::mixer;

/// Characters reserved for the timestamp suffix of safe slugs.
const SAFE_SUFFIX_LEN: usize = 4;

/// 62^4, the modulus for the safe timestamp suffix. Rolls over roughly
/// every 14.7 years of milliseconds.
const SAFE_SUFFIX_MODULUS: u64 = 14_776_336;

const PAD_CHAR: char = '0';

/// Produces URL-safe Base62 slugs from hashed entropy.
///
/// Three policies share the same codec and differ only in how entropy is
/// composed:
///
/// * [`plain`](Self::plain) — SHA-256 of a random UUID, encoded and cut to
///   the requested length.
/// * [`obscured`](Self::obscured) — the digest's leading bytes XOR-mixed
///   with the millisecond clock before encoding, so the output carries no
///   observable relationship to the generation time.
/// * [`safe`](Self::safe) — a hash prefix plus a visible 4-character
///   timestamp suffix; the only policy with a strict exact-length
///   guarantee.
pub struct SlugGenerator<E: EntropyProvider> {
    entropy: E,
    padding: LengthPadding,
}

impl SlugGenerator<SystemEntropy> {
    /// Generator over the OS random source and wall clock.
    pub fn new() -> Self {
        Self::with_entropy(SystemEntropy)
    }
}

impl Default for SlugGenerator<SystemEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropyProvider> SlugGenerator<E> {
    /// Generator over a caller-supplied entropy provider.
    pub fn with_entropy(entropy: E) -> Self {
        Self {
            entropy,
            padding: LengthPadding::default(),
        }
    }

    /// Choose how shorter-than-requested encodings are resolved.
    pub fn with_padding(mut self, padding: LengthPadding) -> Self {
        self.padding = padding;
        self
    }

    /// Plain policy: `encode_bytes(sha256(uuid))` cut to `length`.
    ///
    /// Under [`LengthPadding::Truncate`] the result may be shorter than
    /// `length` when the digest happens to start with zero bytes, or when
    /// `length` exceeds the 43 characters a 32-byte digest can encode to.
    pub fn plain(&self, length: usize) -> String {
        let digest = hash_identifier(&self.entropy.random_identifier());
        let encoded = base62::encode_bytes(&digest);
        trace!(policy = "plain", requested = length, encoded_len = encoded.len());
        self.fit(encoded, length)
    }

    /// Obscured policy: the digest's first 6 bytes are XOR-folded with
    /// `now_millis * 256 + random_byte` before encoding, then digest bytes
    /// 6..12 follow verbatim.
    ///
    /// Same length caveat as [`plain`](Self::plain); the mixed leading byte
    /// can be zero, so encoded length varies call to call.
    pub fn obscured(&self, length: usize) -> String {
        let digest = hash_identifier(&self.entropy.random_identifier());
        let buffer = mixer::mix(&digest, self.entropy.now_millis(), self.entropy.random_byte());
        let encoded = base62::encode_bytes(&buffer);
        trace!(policy = "obscured", requested = length, encoded_len = encoded.len());
        self.fit(encoded, length)
    }

    /// Safe policy: a hash prefix of `length - 4` characters followed by
    /// `now_millis() mod 62^4` as exactly 4 zero-padded characters.
    ///
    /// Always returns exactly `length` characters for `length >= 4`;
    /// shorter requests are treated as 4 (a bare timestamp suffix). The
    /// trade-off is a visible, rollover-prone timestamp in the output.
    pub fn safe(&self, length: usize) -> String {
        let length = length.max(SAFE_SUFFIX_LEN);
        let prefix_len = length - SAFE_SUFFIX_LEN;

        let digest = hash_identifier(&self.entropy.random_identifier());
        let mut prefix = base62::encode_bytes(&digest);
        prefix.truncate(prefix_len);

        let suffix = base62::encode_u64(self.entropy.now_millis() % SAFE_SUFFIX_MODULUS);
        trace!(policy = "safe", requested = length, prefix_len = prefix.len());

        let mut slug = String::with_capacity(length);
        for _ in 0..prefix_len - prefix.len() {
            slug.push(PAD_CHAR);
        }
        slug.push_str(&prefix);
        for _ in 0..SAFE_SUFFIX_LEN - suffix.len() {
            slug.push(PAD_CHAR);
        }
        slug.push_str(&suffix);
        slug
    }

    // Cut to the requested length, then left-pad if configured to.
    fn fit(&self, mut encoded: String, length: usize) -> String {
        if encoded.len() > length {
            encoded.truncate(length);
        }
        if self.padding == LengthPadding::ZeroPad && encoded.len() < length {
            let mut padded = String::with_capacity(length);
            for _ in 0..length - encoded.len() {
                padded.push(PAD_CHAR);
            }
            padded.push_str(&encoded);
            return padded;
        }
        encoded
    }
}

/// Generates a plain slug of `length` characters (defaults documented in
/// [`GeneratorConfig`]; the conventional length is 6).
pub fn generate_slug(length: usize) -> String {
    SlugGenerator::new().plain(length)
}

/// Generates an obscured slug of `length` characters (conventionally 10).
pub fn generate_obscured_slug(length: usize) -> String {
    SlugGenerator::new().obscured(length)
}

/// Generates a safe slug of exactly `length` characters for `length >= 4`
/// (conventionally 10).
pub fn generate_safe_slug(length: usize) -> String {
    SlugGenerator::new().safe(length)
}

/// Builds a generator with the padding choice from `config`.
pub fn from_config(config: &GeneratorConfig) -> SlugGenerator<SystemEntropy> {
    SlugGenerator::new().with_padding(config.padding)
}
