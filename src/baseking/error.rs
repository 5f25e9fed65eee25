use thiserror::Error;
use rand::rand_core;

/// BaseKing Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// BaseKing Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate a BaseKing key with an input size that is not 12 words (192 bits).
    #[error("invalid key length: {len} words (expected 12)")]
    InvalidKeyLength { len: usize },

    /// Attempted to build a BaseKing key from a byte slice that is not exactly 24 bytes.
    #[error("invalid key length: {len} bytes (expected 24)")]
    InvalidKeyBytes { len: usize },

    /// Provided a block to encrypt or decrypt that is not exactly 12 words (192 bits).
    #[error("invalid block length: {len} words (expected 12)")]
    InvalidBlockLength { len: usize },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
