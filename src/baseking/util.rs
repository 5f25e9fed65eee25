use crate::baseking::core::constants::BLOCK_WORDS;

/// Unpacks 24 bytes into 12 words using canonical text order: the first two
/// bytes are word 11 big-endian, the last two are word 0. This matches the
/// order the reference test vectors are printed in.
pub(crate) fn words_from_bytes(bytes: &[u8; 2 * BLOCK_WORDS]) -> [u16; BLOCK_WORDS] {
    let mut words = [0u16; BLOCK_WORDS];
    for (i, pair) in bytes.chunks_exact(2).enumerate() {
        words[BLOCK_WORDS - 1 - i] = u16::from_be_bytes([pair[0], pair[1]]);
    }
    words
}
