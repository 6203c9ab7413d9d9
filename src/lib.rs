//! Short, URL-safe, collision-resistant slug generation.
//!
//! Entropy (a random UUID, one random byte and the millisecond clock) is
//! hashed with SHA-256, optionally XOR-mixed, and Base62-encoded into a
//! short printable token suitable for object keys, short links or record
//! identifiers.
//!
//! ```
//! use slug_generator::{generate_obscured_slug, generate_safe_slug, generate_slug};
//!
//! let short = generate_slug(6); // e.g. "u0QEqo"
//! let hidden = generate_obscured_slug(10); // time-mixed, pattern-free
//! let exact = generate_safe_slug(10); // always exactly 10 characters
//! assert_eq!(exact.len(), 10);
//! ```
//!
//! For deterministic output in tests, inject your own entropy through
//! [`SlugGenerator::with_entropy`] with a custom [`EntropyProvider`].

pub mod base62;
pub mod config;
pub mod entropy;
pub mod generator;
pub mod mixer;

pub use config::{ConfigError, GeneratorConfig, LengthPadding};
pub use entropy::{EntropyProvider, SystemEntropy};
pub use generator::{
    from_config, generate_obscured_slug, generate_safe_slug, generate_slug, SlugGenerator,
};
