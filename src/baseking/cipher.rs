use crate::baseking::core::constants::{BLOCK_WORDS, RC_DECRYPT, RC_ENCRYPT};
use crate::baseking::core::{crypt_block, mu, theta};
use crate::baseking::error::{Error, Result};
use crate::baseking::key::Key;

/// Provides [encryption](crate::Cipher::encrypt_block) and
/// [decryption](crate::Cipher::decrypt_block) of single 192-bit BaseKing
/// blocks. Instantiated with a BaseKing [Key], from which the decryption key
/// is derived once and stored in the instance.
///
/// Both keys are immutable after construction, so a `Cipher` may be shared
/// across threads and used concurrently on independent blocks.
pub struct Cipher {
    /// Encryption key: a verbatim copy of the user key.
    ke: [u16; BLOCK_WORDS],
    /// Decryption key, derived as `mu(theta(0, ke, 0))`. Running the round
    /// driver with `kd` and the reversed round constants exactly undoes a
    /// run with `ke` and the forward constants.
    kd: [u16; BLOCK_WORDS],
}

impl Cipher {
    /// Runs the key schedule on the provided key and stores both direction
    /// keys in the returned instance.
    pub fn new(key: &Key) -> Self {
        let ke = *key.as_words();
        let mut kd = ke;
        theta(&[0u16; BLOCK_WORDS], &mut kd, 0);
        mu(&mut kd);
        Self { ke, kd }
    }

    /// Encrypts one 192-bit block in place.
    pub fn encrypt_block(&self, block: &mut [u16; BLOCK_WORDS]) {
        crypt_block(&self.ke, block, &RC_ENCRYPT);
    }

    /// Decrypts one 192-bit block in place.
    pub fn decrypt_block(&self, block: &mut [u16; BLOCK_WORDS]) {
        crypt_block(&self.kd, block, &RC_DECRYPT);
    }

    /// Length-checked variant of [encrypt_block](crate::Cipher::encrypt_block).
    /// Returns an InvalidBlockLength error, leaving the block untouched,
    /// unless the slice is exactly 12 words.
    pub fn encrypt(&self, block: &mut [u16]) -> Result<()> {
        let len = block.len();
        let block: &mut [u16; BLOCK_WORDS] = block
            .try_into()
            .map_err(|_| Error::InvalidBlockLength { len })?;
        self.encrypt_block(block);
        Ok(())
    }

    /// Length-checked variant of [decrypt_block](crate::Cipher::decrypt_block).
    pub fn decrypt(&self, block: &mut [u16]) -> Result<()> {
        let len = block.len();
        let block: &mut [u16; BLOCK_WORDS] = block
            .try_into()
            .map_err(|_| Error::InvalidBlockLength { len })?;
        self.decrypt_block(block);
        Ok(())
    }
}
