//! Error types for input validation.

use crate::variant::Variant;

/// Errors raised before any cipher computation starts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Key length does not match the configured variant.
    #[error("{variant} expects a {expected}-byte key, got {actual} bytes")]
    InvalidKeyLength {
        /// Variant the key was supplied for.
        variant: Variant,
        /// Key length required by the variant.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// Block input is not exactly one block long.
    #[error("block must be {expected} bytes, got {actual} bytes")]
    InvalidBlockLength {
        /// Always the block size, 16.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// No variant uses a key of this length.
    #[error("no AES variant takes a {actual}-byte key (expected 16, 24 or 32)")]
    UnsupportedKeyLength {
        /// Length actually supplied.
        actual: usize,
    },
    /// Variant name could not be parsed.
    #[error("unknown AES variant {name:?}")]
    UnknownVariant {
        /// Name that failed to parse.
        name: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
