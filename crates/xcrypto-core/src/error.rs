//! Error types returned by the public entry points.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, XcryptoError>;

/// Failures surfaced by key validation, ciphertext framing, and the hex/UTF-8
/// boundary conversions.
#[derive(Debug, Error)]
pub enum XcryptoError {
    /// Key is empty or not made of whole cipher words.
    #[error("invalid key length: expected a positive multiple of {word} bytes, got {len}")]
    InvalidKeyLength {
        /// Length of the rejected key.
        len: usize,
        /// Cipher word size in bytes.
        word: usize,
    },
    /// Ciphertext cannot hold one block and the padding marker.
    #[error("ciphertext too short: {len} bytes, need at least {min}")]
    CiphertextTooShort {
        /// Length of the rejected ciphertext.
        len: usize,
        /// Smallest acceptable length.
        min: usize,
    },
    /// Ciphertext body is not made of whole blocks.
    #[error("ciphertext body of {len} bytes is not a multiple of the block size")]
    MisalignedCiphertext {
        /// Length of the body without the marker byte.
        len: usize,
    },
    /// Trailing marker byte outside the range the padding can produce.
    #[error("invalid padding marker: {marker}")]
    InvalidPaddingMarker {
        /// The rejected marker.
        marker: u8,
    },
    /// Hex input did not decode to a full digest.
    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidDigestLength {
        /// Required digest length.
        expected: usize,
        /// Decoded length.
        actual: usize,
    },
    /// Iterated hashing needs at least one pass.
    #[error("iteration count must be at least one")]
    ZeroIterations,
    /// Malformed hex string.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Decrypted bytes are not UTF-8.
    #[error("plaintext is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
