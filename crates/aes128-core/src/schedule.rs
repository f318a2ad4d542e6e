//! AES-128 key schedule.

use crate::error::Result;
use crate::key::{Aes128Key, ExpandedKey, EXPANDED_WORDS};
use crate::sbox::sbox;

/// Round constants, indexed by `i / 4`. Entry 0 is never used.
const RCON: [u32; 11] = [
    0x0000_0000,
    0x0100_0000,
    0x0200_0000,
    0x0400_0000,
    0x0800_0000,
    0x1000_0000,
    0x2000_0000,
    0x4000_0000,
    0x8000_0000,
    0x1b00_0000,
    0x3600_0000,
];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Produces the 44 schedule words for `key`.
pub(crate) fn key_schedule(key: &Aes128Key) -> [u32; EXPANDED_WORDS] {
    let mut w = [0u32; EXPANDED_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 4..EXPANDED_WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ RCON[i / 4];
        }
        w[i] = w[i - 4] ^ temp;
    }
    w
}

/// Expands raw key bytes, rejecting anything other than 16 bytes.
pub fn expand_key(key: &[u8]) -> Result<ExpandedKey> {
    let key = Aes128Key::try_from(key)?;
    Ok(ExpandedKey::new(&key))
}
