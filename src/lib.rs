//! BaseKing 192-bit block cipher.
//!
//! BaseKing is an 11-round substitution-permutation network over blocks of
//! twelve 16-bit words, built from five bit-level steps: `mu` (word-order
//! reversal), `theta` (linear diffusion with key and round-constant
//! injection), `pi1`/`pi2` (bitwise rotations), and `gamma` (the nonlinear
//! layer). Its algebra is chosen so the *same* round sequence decrypts as
//! well as encrypts: the key schedule derives a decryption key, and
//! decryption runs the identical code path with that key and the
//! round-constant table reversed.
//!
//! This crate is a single-block primitive. Chaining modes, padding, and
//! authentication are the caller's responsibility.
//!
//! # Examples
//!
//! Encrypt and decrypt the reference vector:
//!
//! ```
//! # fn main() -> baseking::Result<()> {
//! use baseking::{Cipher, Key};
//!
//! let key = Key::try_from_words(&[
//!     0x000A, 0x000B, 0x000C, 0x000D, 0x000E, 0x000F,
//!     0x0010, 0x0011, 0x0012, 0x0013, 0x0014, 0x0015,
//! ])?;
//! let cipher = Cipher::new(&key);
//!
//! let mut block: [u16; 12] = [
//!     0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005,
//!     0x0006, 0x0007, 0x0008, 0x0009, 0x000A, 0x000B,
//! ];
//!
//! cipher.encrypt_block(&mut block);
//! assert_eq!(block[0], 0xB7A0);
//!
//! cipher.decrypt_block(&mut block);
//! assert_eq!(block[0], 0x0000);
//! # Ok(())
//! # }
//! ```

mod baseking;

pub use baseking::{Cipher, Error, Key, Result};
