//! Key types for AES-128.

use crate::error::Error;
use crate::schedule::key_schedule;

/// Number of 32-bit words in an expanded AES-128 key.
pub const EXPANDED_WORDS: usize = 44;

/// Number of round keys (initial key addition plus ten rounds).
pub const ROUND_KEYS: usize = 11;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = value
            .try_into()
            .map_err(|_| Error::InvalidKeyLength {
                actual: value.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl Aes128Key {
    /// Runs the key schedule for this key.
    pub fn expand(&self) -> ExpandedKey {
        ExpandedKey::new(self)
    }
}

/// Expanded AES-128 key: 11 round keys of four big-endian words each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandedKey([[u32; 4]; ROUND_KEYS]);

impl ExpandedKey {
    /// Expands `key` into its round keys.
    pub fn new(key: &Aes128Key) -> Self {
        let words = key_schedule(key);
        Self(core::array::from_fn(|round| {
            core::array::from_fn(|col| words[4 * round + col])
        }))
    }

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn round_key(&self, round: usize) -> &[u32; 4] {
        &self.0[round]
    }

    /// Returns word `index` (0..44) of the schedule.
    #[inline]
    pub fn word(&self, index: usize) -> u32 {
        self.0[index / 4][index % 4]
    }

    /// Flattens the schedule back into its 44 words.
    pub fn words(&self) -> [u32; EXPANDED_WORDS] {
        core::array::from_fn(|i| self.word(i))
    }
}

impl From<&Aes128Key> for ExpandedKey {
    fn from(key: &Aes128Key) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_conversion_checks_length() {
        let short = [0u8; 15];
        let long = [0u8; 17];
        assert_eq!(
            Aes128Key::try_from(&short[..]),
            Err(Error::InvalidKeyLength { actual: 15 })
        );
        assert_eq!(
            Aes128Key::try_from(&long[..]),
            Err(Error::InvalidKeyLength { actual: 17 })
        );
        assert_eq!(
            Aes128Key::try_from(&[7u8; 16][..]),
            Ok(Aes128Key([7u8; 16]))
        );
    }

    #[test]
    fn round_keys_slice_the_schedule() {
        let ek = Aes128Key::from([0u8; 16]).expand();
        let words = ek.words();
        for round in 0..ROUND_KEYS {
            assert_eq!(ek.round_key(round)[..], words[4 * round..4 * round + 4]);
        }
        assert_eq!(ek.round_key(0), &[0u32; 4]);
    }
}
