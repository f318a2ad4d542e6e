//! AES-128 single-block encryption and decryption.

use crate::block::{Block, State};
use crate::key::ExpandedKey;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// Number of rounds for AES-128.
pub const ROUNDS: usize = 10;

/// Encrypts a single 16-byte block with a pre-expanded key.
pub fn encrypt_block(block: &Block, key: &ExpandedKey) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, key.round_key(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, key.round_key(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, key.round_key(ROUNDS));

    state.to_block()
}

/// Decrypts a single 16-byte block with a pre-expanded key.
pub fn decrypt_block(block: &Block, key: &ExpandedKey) -> Block {
    let mut state = State::from_block(block);

    add_round_key(&mut state, key.round_key(ROUNDS));
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);

    // AddRoundKey must come before InvMixColumns; the two do not commute.
    for round in (1..ROUNDS).rev() {
        add_round_key(&mut state, key.round_key(round));
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }

    add_round_key(&mut state, key.round_key(0));

    state.to_block()
}
