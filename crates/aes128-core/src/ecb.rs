//! Electronic codebook mode with PKCS#7 padding.
//!
//! Every block is encrypted independently under the same round keys, so equal
//! plaintext blocks produce equal ciphertext blocks. That leak is inherent to
//! ECB and is not hidden here.

use crate::block::{Block, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block};
use crate::error::{Error, Result};
use crate::key::{Aes128Key, ExpandedKey};
use crate::padding::{pad, unpad};

/// AES-128-ECB cipher holding one expanded key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Ecb {
    round_keys: ExpandedKey,
}

impl Aes128Ecb {
    /// Builds a cipher from raw key bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        Aes128Key::try_from(key).map(|key| Self::from_key(&key))
    }

    /// Builds a cipher from a typed key.
    pub fn from_key(key: &Aes128Key) -> Self {
        Self {
            round_keys: key.expand(),
        }
    }

    /// Returns the expanded key in use.
    pub fn round_keys(&self) -> &ExpandedKey {
        &self.round_keys
    }

    /// Pads `plaintext` and encrypts it block by block.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut data = pad(plaintext);
        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            let block = to_block(chunk);
            chunk.copy_from_slice(&encrypt_block(&block, &self.round_keys));
        }
        data
    }

    /// Decrypts `ciphertext` block by block and strips its padding.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(Error::InvalidCiphertextLength {
                actual: ciphertext.len(),
            });
        }
        let mut data = ciphertext.to_vec();
        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            let block = to_block(chunk);
            chunk.copy_from_slice(&decrypt_block(&block, &self.round_keys));
        }
        let message_len = unpad(&data)?.len();
        data.truncate(message_len);
        Ok(data)
    }
}

fn to_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}

/// Encrypts `plaintext` under `key` in ECB mode with PKCS#7 padding.
pub fn encrypt_ecb(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Ok(Aes128Ecb::new(key)?.encrypt(plaintext))
}

/// Decrypts ECB/PKCS#7 `ciphertext` under `key`.
pub fn decrypt_ecb(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Aes128Ecb::new(key)?.decrypt(ciphertext)
}
