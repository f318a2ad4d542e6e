//! AES round transformations.

use crate::block::State;
use crate::field::gf_mul;
use crate::sbox::{inv_sbox, sbox};

/// First row of the MixColumns circulant matrix.
const MIX: [u8; 4] = [0x02, 0x03, 0x01, 0x01];

/// First row of the InvMixColumns circulant matrix.
const INV_MIX: [u8; 4] = [0x0e, 0x0b, 0x0d, 0x09];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut().iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut().iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut row = state.row(r);
        row.rotate_left(r);
        state.set_row(r, row);
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut row = state.row(r);
        row.rotate_right(r);
        state.set_row(r, row);
    }
}

/// Multiplies one column by the circulant matrix whose first row is `coeffs`.
fn mix_column(column: [u8; 4], coeffs: &[u8; 4]) -> [u8; 4] {
    core::array::from_fn(|row| {
        column
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &a)| acc ^ gf_mul(coeffs[(i + 4 - row) % 4], a))
    })
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = mix_column(state.column(col), &MIX);
        state.set_column(col, mixed);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = mix_column(state.column(col), &INV_MIX);
        state.set_column(col, mixed);
    }
}

/// Adds (XORs) a round key into the state. Byte `r` of word `c` lands on `(r, c)`.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &[u32; 4]) {
    for (col, word) in round_key.iter().enumerate() {
        for (row, byte) in word.to_be_bytes().into_iter().enumerate() {
            state.set(row, col, state.get(row, col) ^ byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn state_of(block: Block) -> State {
        State::from_block(&block)
    }

    fn sequential() -> Block {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn shift_rows_permutes_by_row_index() {
        let mut state = state_of(sequential());
        shift_rows(&mut state);
        assert_eq!(
            state.to_block(),
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    #[test]
    fn inv_shift_rows_permutes_by_row_index() {
        let mut state = state_of(sequential());
        inv_shift_rows(&mut state);
        assert_eq!(
            state.to_block(),
            [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3]
        );
    }

    #[test]
    fn mix_columns_matches_fips_round_one() {
        // Column 0 of round 1 in FIPS-197 Appendix B.
        let mut state = state_of([
            0xd4, 0xbf, 0x5d, 0x30, 0xe0, 0xb4, 0x52, 0xae, 0xb8, 0x41, 0x11, 0xf1, 0x1e, 0x27,
            0x98, 0xe5,
        ]);
        mix_columns(&mut state);
        assert_eq!(state.column(0), [0x04, 0x66, 0x81, 0xe5]);
        assert_eq!(state.column(1), [0xe0, 0xcb, 0x19, 0x9a]);
        assert_eq!(state.column(2), [0x48, 0xf8, 0xd3, 0x7a]);
        assert_eq!(state.column(3), [0x28, 0x06, 0x26, 0x4c]);
    }

    #[test]
    fn mix_columns_known_column() {
        let mut state = state_of([
            0xdb, 0x13, 0x53, 0x45, 0xf2, 0x0a, 0x22, 0x5c, 0x01, 0x01, 0x01, 0x01, 0xc6, 0xc6,
            0xc6, 0xc6,
        ]);
        mix_columns(&mut state);
        assert_eq!(state.column(0), [0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(state.column(1), [0x9f, 0xdc, 0x58, 0x9d]);
        assert_eq!(state.column(2), [0x01, 0x01, 0x01, 0x01]);
        assert_eq!(state.column(3), [0xc6, 0xc6, 0xc6, 0xc6]);
    }

    #[test]
    fn inverse_transforms_undo_forward_ones() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..64 {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            let original = state_of(block);

            let mut state = original;
            sub_bytes(&mut state);
            inv_sub_bytes(&mut state);
            assert_eq!(state, original);

            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);

            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn add_round_key_uses_big_endian_columns() {
        let mut state = state_of([0u8; 16]);
        add_round_key(&mut state, &[0x0102_0304, 0, 0, 0xaabb_ccdd]);
        assert_eq!(state.column(0), [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(state.column(3), [0xaa, 0xbb, 0xcc, 0xdd]);

        add_round_key(&mut state, &[0x0102_0304, 0, 0, 0xaabb_ccdd]);
        assert_eq!(state.to_block(), [0u8; 16]);
    }
}
