//! PKCS#7 padding for 16-byte blocks.

use crate::block::BLOCK_SIZE;
use crate::error::PaddingError;

/// Appends PKCS#7 padding. Aligned input still gains a full padding block.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Validates and strips PKCS#7 padding, returning the message prefix.
pub fn unpad(data: &[u8]) -> Result<&[u8], PaddingError> {
    let Some(&last) = data.last() else {
        return Err(PaddingError::Empty);
    };
    if data.len() % BLOCK_SIZE != 0 {
        return Err(PaddingError::Misaligned { len: data.len() });
    }
    let pad_len = usize::from(last);
    if pad_len == 0 || pad_len > BLOCK_SIZE {
        return Err(PaddingError::InvalidLength { value: last });
    }
    let (message, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| b != last) {
        return Err(PaddingError::Inconsistent { value: last });
    }
    Ok(message)
}
