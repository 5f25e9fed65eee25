//! The five BaseKing step transforms and the round driver that sequences
//! them. Encryption and decryption share `crypt_block`; the two directions
//! differ only in which key and round-constant table the caller supplies.

use super::constants::{BLOCK_WORDS, ROTATION, ROUNDS};

/// Core BaseKing round driver. Runs 11 rounds of theta/pi1/gamma/pi2 over
/// the block in place, followed by a final theta and mu. The same sequence
/// serves both directions: encryption supplies the user key with the forward
/// constants, decryption the derived key with the reversed constants.
#[inline(always)]
pub fn crypt_block(
    key: &[u16; BLOCK_WORDS],
    block: &mut [u16; BLOCK_WORDS],
    rc: &[u16; ROUNDS + 1],
) {
    for &round_constant in &rc[..ROUNDS] {
        theta(key, block, round_constant);
        pi_1(block);
        gamma(block);
        pi_2(block);
    }

    // the trailing step has no nonlinear layer
    theta(key, block, rc[ROUNDS]);
    mu(block);
}

/// Mu step. Reverses the word order of the block (word `i` <-> word `11 - i`).
/// Its own inverse.
#[inline(always)]
pub(crate) fn mu(state: &mut [u16; BLOCK_WORDS]) {
    state.reverse();
}

/// Theta step, the linear diffusion layer. XORs the key into every word and
/// the round constant into words 2, 3, 8, and 9, then folds in two parity
/// vectors so that every output word depends on at least five other words
/// of the pre-update block.
#[inline(always)]
pub(crate) fn theta(key: &[u16; BLOCK_WORDS], state: &mut [u16; BLOCK_WORDS], rc: u16) {
    for (word, k) in state.iter_mut().zip(key) {
        *word ^= k;
    }
    state[2] ^= rc;
    state[3] ^= rc;
    state[8] ^= rc;
    state[9] ^= rc;

    // three-way parities at offsets 4 and 8, then a cyclic difference
    let q = state[0] ^ state[4] ^ state[8];
    let mut a = [
        0,
        state[1] ^ state[5] ^ state[9],
        state[2] ^ state[6] ^ state[10],
        state[3] ^ state[7] ^ state[11],
    ];
    a[0] = q ^ a[1];
    a[1] ^= a[2];
    a[2] ^= a[3];
    a[3] ^= q;

    // two-way parities at offset 6
    let b = [
        state[0] ^ state[6],
        state[1] ^ state[7],
        state[2] ^ state[8],
        state[3] ^ state[9],
        state[4] ^ state[10],
        state[5] ^ state[11],
    ];

    state[0] ^= a[2] ^ b[3];
    state[1] ^= a[3] ^ b[4];
    state[2] ^= a[0] ^ b[5];
    state[3] ^= a[1] ^ b[0];
    state[4] ^= a[2] ^ b[1];
    state[5] ^= a[3] ^ b[2];
    state[6] ^= a[0] ^ b[3];
    state[7] ^= a[1] ^ b[4];
    state[8] ^= a[2] ^ b[5];
    state[9] ^= a[3] ^ b[0];
    state[10] ^= a[0] ^ b[1];
    state[11] ^= a[1] ^ b[2];
}

/// Pi1 step. Rotates word `j` left by `ROTATION[j]` bit positions.
#[inline(always)]
pub(crate) fn pi_1(state: &mut [u16; BLOCK_WORDS]) {
    for (word, &r) in state.iter_mut().zip(&ROTATION) {
        *word = word.rotate_left(r);
    }
}

/// Pi2 step. Rotates word `j` right by `ROTATION[11 - j]` bit positions.
/// Not the literal inverse of pi1 (the index mapping differs); the pair is
/// only undone through the key and constant substitution in `crypt_block`.
#[inline(always)]
pub(crate) fn pi_2(state: &mut [u16; BLOCK_WORDS]) {
    for (word, &r) in state.iter_mut().zip(ROTATION.iter().rev()) {
        *word = word.rotate_right(r);
    }
}

/// Gamma step, the nonlinear layer: `out[i] = a[i] ^ (a[i+4] | !a[i+8])`
/// with indices mod 12. Every output word is computed from the pre-update
/// block, so the state is copied before writing.
#[inline(always)]
pub(crate) fn gamma(state: &mut [u16; BLOCK_WORDS]) {
    let s = *state;
    for i in 0..BLOCK_WORDS {
        state[i] = s[i] ^ (s[(i + 4) % BLOCK_WORDS] | !s[(i + 8) % BLOCK_WORDS]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u16; 12] = [
        0x0123, 0x4567, 0x89AB, 0xCDEF, 0x0F1E, 0x2D3C, //
        0x4B5A, 0x6978, 0x8796, 0xA5B4, 0xC3D2, 0xE1F0, //
    ];

    const SAMPLE_KEY: [u16; 12] = [
        0x000A, 0x000B, 0x000C, 0x000D, 0x000E, 0x000F, //
        0x0010, 0x0011, 0x0012, 0x0013, 0x0014, 0x0015, //
    ];

    #[test]
    fn mu_reverses_word_order() {
        let mut state = SAMPLE;
        mu(&mut state);
        assert_eq!(
            state,
            [
                0xE1F0, 0xC3D2, 0xA5B4, 0x8796, 0x6978, 0x4B5A, //
                0x2D3C, 0x0F1E, 0xCDEF, 0x89AB, 0x4567, 0x0123, //
            ]
        );
    }

    #[test]
    fn mu_is_an_involution() {
        let mut state = SAMPLE;
        mu(&mut state);
        mu(&mut state);
        assert_eq!(state, SAMPLE);
    }

    #[test]
    fn pi_1_known_answer() {
        let mut state = SAMPLE;
        pi_1(&mut state);
        assert_eq!(
            state,
            [
                0x0123, 0x6745, 0x1357, 0xE6F7, 0xE3C1, 0xF0B4, //
                0xAD25, 0x5E1A, 0xD0F2, 0x296D, 0x0F4B, 0x0F87, //
            ]
        );
    }

    #[test]
    fn pi_2_known_answer() {
        let mut state = SAMPLE;
        pi_2(&mut state);
        assert_eq!(
            state,
            [
                0x6024, 0xD159, 0x26AE, 0x6F7E, 0x783C, 0x785A, //
                0xD692, 0xC34B, 0x0F2D, 0x52DA, 0xD2C3, 0xE1F0, //
            ]
        );
    }

    #[test]
    fn pi_pair_collapses_to_mu() {
        // pi2 . mu . pi1 == mu, the identity that lets one round driver
        // serve both directions
        let mut lhs = SAMPLE;
        pi_1(&mut lhs);
        mu(&mut lhs);
        pi_2(&mut lhs);

        let mut rhs = SAMPLE;
        mu(&mut rhs);

        assert_eq!(lhs, rhs);
    }

    #[test]
    fn gamma_known_answer() {
        let mut state = SAMPLE;
        gamma(&mut state);
        assert_eq!(
            state,
            [
                0x7E5C, 0x3A18, 0xF6D4, 0xB290, 0xF0C0, 0x9280, //
                0xBC8C, 0x9A88, 0x7675, 0x7253, 0x7E7D, 0x3E1F, //
            ]
        );
    }

    #[test]
    fn gamma_total_on_zero_block() {
        // 0 ^ (0 | !0) == 0xFFFF for every word; no special-case inputs
        let mut state = [0u16; 12];
        gamma(&mut state);
        assert_eq!(state, [0xFFFF; 12]);
    }

    #[test]
    fn gamma_inverse_is_mu_conjugate() {
        // gamma is not its own inverse, but mu . gamma . mu is
        let mut state = SAMPLE;
        gamma(&mut state);
        mu(&mut state);
        gamma(&mut state);
        mu(&mut state);
        assert_eq!(state, SAMPLE);
    }

    #[test]
    fn theta_known_answer() {
        let mut state = SAMPLE;
        theta(&SAMPLE_KEY, &mut state, 0x000B);
        assert_eq!(
            state,
            [
                0x2D29, 0x4569, 0x013F, 0x4B59, 0x6750, 0xEFC3, //
                0x674A, 0x696C, 0x0F1C, 0x231C, 0xAB86, 0x2315, //
            ]
        );
    }

    #[test]
    fn theta_inverse_is_mu_conjugate() {
        // with a zero key and zero constant, mu . theta . mu inverts theta
        let zero_key = [0u16; 12];
        let mut state = SAMPLE;
        theta(&zero_key, &mut state, 0);
        mu(&mut state);
        theta(&zero_key, &mut state, 0);
        mu(&mut state);
        assert_eq!(state, SAMPLE);
    }
}
