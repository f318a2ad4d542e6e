//! AES-128 implemented from first principles, with an ECB/PKCS#7 wrapper.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - GF(2^8) arithmetic and the fixed substitution tables.
//! - The AES-128 key schedule.
//! - Single-block encryption and decryption over a column-major 4x4 state.
//! - PKCS#7 padding and electronic codebook mode over whole buffers.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod ecb;
mod error;
pub mod field;
mod key;
mod padding;
pub mod round;
pub mod sbox;
mod schedule;

pub use crate::block::{Block, State, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, ROUNDS};
pub use crate::ecb::{decrypt_ecb, encrypt_ecb, Aes128Ecb};
pub use crate::error::{Error, PaddingError, Result};
pub use crate::key::{Aes128Key, ExpandedKey, EXPANDED_WORDS, ROUND_KEYS};
pub use crate::padding::{pad, unpad};
pub use crate::schedule::expand_key;
