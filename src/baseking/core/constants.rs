//! Fixed lookup tables for the BaseKing round function. All tables are
//! read-only for the lifetime of the process; nothing here depends on the key.

/// Number of words in a block (192 bits / 16-bit words).
pub const BLOCK_WORDS: usize = 12;

/// Number of main rounds. A final theta + mu step follows the last round.
pub const ROUNDS: usize = 11;

/// Per-word rotation amounts shared by pi1 and pi2. Pi1 rotates word `j`
/// left by `ROTATION[j]`; pi2 rotates word `j` right by `ROTATION[11 - j]`.
pub const ROTATION: [u32; BLOCK_WORDS] = [0, 8, 1, 15, 5, 10, 7, 6, 13, 14, 2, 3];

/// Round constants for encryption, one per theta invocation (11 rounds plus
/// the final step). Generated by the byte LFSR `q <<= 1; if q & 0x100 { q ^= 0x111 }`
/// seeded with 0x000B; kept as a literal table so the hot path never branches.
pub const RC_ENCRYPT: [u16; ROUNDS + 1] = [
    0x000B, 0x0016, 0x002C, 0x0058, 0x00B0, 0x0071, //
    0x00E2, 0x00D5, 0x00BB, 0x0067, 0x00CE, 0x008D, //
];

/// Round constants for decryption: the encryption sequence in reverse.
/// Running the round function with the derived decryption key and these
/// constants exactly undoes an encryption run.
pub const RC_DECRYPT: [u16; ROUNDS + 1] = [
    0x008D, 0x00CE, 0x0067, 0x00BB, 0x00D5, 0x00E2, //
    0x0071, 0x00B0, 0x0058, 0x002C, 0x0016, 0x000B, //
];
