//! Error types returned by the engine.

use thiserror::Error;

/// Failures reported by key expansion and the ECB wrapper.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The supplied key is not exactly 16 bytes.
    #[error("AES-128 key must be 16 bytes, got {actual}")]
    InvalidKeyLength {
        /// Length of the rejected key.
        actual: usize,
    },

    /// The ciphertext is empty or not a whole number of blocks.
    #[error("ciphertext length must be a non-zero multiple of 16 bytes, got {actual}")]
    InvalidCiphertextLength {
        /// Length of the rejected ciphertext.
        actual: usize,
    },

    /// The decrypted message does not end in valid PKCS#7 padding.
    #[error("invalid padding: {0}")]
    Padding(#[from] PaddingError),
}

/// Reasons a buffer fails PKCS#7 padding validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaddingError {
    /// Nothing to unpad.
    #[error("padded data is empty")]
    Empty,

    /// Length is not a multiple of the block size.
    #[error("padded length {len} is not a multiple of 16")]
    Misaligned {
        /// Length of the rejected buffer.
        len: usize,
    },

    /// The final byte is not a pad length in `1..=16`.
    #[error("pad length {value} is outside 1..=16")]
    InvalidLength {
        /// Value of the final byte.
        value: u8,
    },

    /// Not every padding byte equals the pad length.
    #[error("padding bytes do not all equal {value}")]
    Inconsistent {
        /// Pad length claimed by the final byte.
        value: u8,
    },
}

/// Result alias for engine operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_error_converts_into_error() {
        let err: Error = PaddingError::InvalidLength { value: 0 }.into();
        assert_eq!(err, Error::Padding(PaddingError::InvalidLength { value: 0 }));
        assert_eq!(err.to_string(), "invalid padding: pad length 0 is outside 1..=16");
    }

    #[test]
    fn length_errors_report_actual_size() {
        let err = Error::InvalidKeyLength { actual: 15 };
        assert_eq!(err.to_string(), "AES-128 key must be 16 bytes, got 15");
    }
}
