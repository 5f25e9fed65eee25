//! Defines the [`Key`] struct, which holds a valid 192-bit BaseKing key as
//! 12 16-bit words. Keys can be randomly generated, built from a word slice,
//! or built from a 24-byte slice in canonical text order.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::baseking::core::constants::BLOCK_WORDS;
use crate::baseking::error::{Error, Result};
use crate::baseking::util::words_from_bytes;

/// Contains a valid 192-bit BaseKing key. Can be instantiated with a random
/// key, from a slice of exactly 12 words, or from a slice of exactly 24 bytes.
/// A `Key` object is required to instantiate a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> baseking::Result<()> {
/// use baseking::Key;
///
/// // Instantiate a random key:
/// let rk = Key::random()?;
///
/// // Instantiate a key from words:
/// let words: [u16; 12] = [10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21];
/// let my_key = Key::try_from_words(&words)?;
/// assert_eq!(my_key.as_words(), &words);
///
/// // Attempting to instantiate with an invalid key size returns an
/// // InvalidKeyLength error:
/// assert!(Key::try_from_words(&words[..8]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    words: [u16; BLOCK_WORDS],
}

impl Key {
    /// Generate a random 192-bit key. Returns Error if OsRng fails.
    pub fn random() -> Result<Self> {
        let mut bytes = [0u8; 2 * BLOCK_WORDS];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self {
            words: words_from_bytes(&bytes),
        })
    }

    /// Attempts to build a key from a slice of 16-bit words. Will return an
    /// InvalidKeyLength error if the input slice is anything other than 12
    /// words long.
    pub fn try_from_words(words: &[u16]) -> Result<Self> {
        match words.try_into() {
            Ok(words) => Ok(Self { words }),
            Err(_) => Err(Error::InvalidKeyLength { len: words.len() }),
        }
    }

    /// Attempts to build a key from a slice of exactly 24 bytes, read in
    /// canonical text order: word 11 first, big-endian within each word.
    /// This is the order the reference test vectors are written in, so a
    /// published key can be pasted as a hex literal.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let len = bytes.len();
        let bytes: &[u8; 2 * BLOCK_WORDS] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyBytes { len })?;
        Ok(Self {
            words: words_from_bytes(bytes),
        })
    }

    /// Returns a reference to the internal key as an array of 12 words.
    pub fn as_words(&self) -> &[u16; BLOCK_WORDS] {
        &self.words
    }
}
