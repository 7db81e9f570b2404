//! Checksum padding.

use crate::params::PADDING_BYTE;

/// Byte used to pad `buffer`: [`PADDING_BYTE`] XORed with every byte of it.
#[inline]
pub fn padding_byte(buffer: &[u8]) -> u8 {
    buffer.iter().fold(PADDING_BYTE, |acc, &b| acc ^ b)
}

/// Pads `buffer` to a multiple of `order²` bytes and returns how many bytes
/// were appended.
///
/// At least one byte is always appended; an already aligned buffer grows by a
/// whole block. The count is therefore in `1..=order²`.
pub fn pad(buffer: &mut Vec<u8>, order: usize) -> usize {
    let block = order * order;
    let count = block - buffer.len() % block;
    let byte = padding_byte(buffer);
    buffer.resize(buffer.len() + count, byte);
    count
}
