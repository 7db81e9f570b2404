//! XWH: a Miyaguchi–Preneel hash over the 8×8 block transforms.

use log::trace;

use crate::block::{add_bytes, Digest, HalfDigest, HashBlock};
use crate::encoding::{bytes_to_hex, hex_to_bytes, str_to_bytes};
use crate::error::{Result, XcryptoError};
use crate::key::{HashRoundKeys, XWH_ROUND_KEYS};
use crate::pad::pad;
use crate::params::{XWH_IV, XWH_PARAMS, XWH_SPREAD_MATRIX};
use crate::round::{mix_columns, shift_rows, substitute, Direction};
use crate::schedule::expand_hash_key;
use crate::sbox::XWH_SBOX;

const ORDER: usize = XWH_PARAMS.order;
const BLOCK: usize = XWH_PARAMS.block_bytes();

/// One round of the internal keyed permutation.
#[inline]
pub fn hash_round(state: &mut HashBlock, round_key: &HashBlock) {
    substitute(state, &XWH_SBOX);
    shift_rows::<ORDER>(state, Direction::Forward);
    mix_columns::<ORDER>(state, &XWH_SPREAD_MATRIX, XWH_PARAMS.modulus);
    add_bytes(state, round_key);
}

/// Runs `block` through every round keyed by `round_keys`.
pub fn permute(block: &HashBlock, round_keys: &HashRoundKeys) -> HashBlock {
    let mut state = *block;
    for round in 0..XWH_ROUND_KEYS {
        hash_round(&mut state, round_keys.get(round));
    }
    state
}

/// Compression function: `block ^ chaining ^ E_chaining(block)`.
pub fn compress(chaining: &HashBlock, block: &HashBlock) -> HashBlock {
    let round_keys = expand_hash_key(chaining);
    let mut next = permute(block, &round_keys);
    add_bytes(&mut next, block);
    add_bytes(&mut next, chaining);
    next
}

/// Hashes `message` into a 64-byte digest.
///
/// The working buffer is the IV, the message length as decimal ASCII, and the
/// message itself, padded to whole blocks. The IV doubles as the first
/// chaining value.
pub fn hash(message: &[u8]) -> Digest {
    let length = message.len().to_string();
    let mut buffer = Vec::with_capacity(BLOCK + length.len() + message.len() + BLOCK);
    buffer.extend_from_slice(&XWH_IV);
    buffer.extend_from_slice(length.as_bytes());
    buffer.extend_from_slice(message);
    pad(&mut buffer, ORDER);
    trace!("hashing {} blocks", buffer.len() / BLOCK - 1);

    let mut blocks = buffer.chunks_exact(BLOCK).map(|chunk| {
        let mut block = [0u8; BLOCK];
        block.copy_from_slice(chunk);
        block
    });
    let iv = blocks.next().unwrap_or(XWH_IV);
    blocks.fold(iv, |chaining, block| compress(&chaining, &block))
}

/// XORs the two halves of a digest together.
///
/// The result is half as long and correspondingly weaker.
pub fn halve(digest: &Digest) -> HalfDigest {
    let mut half = [0u8; 32];
    half.copy_from_slice(&digest[..32]);
    add_bytes(&mut half, &digest[32..]);
    half
}

/// Applies [`hash`] `iterations` times, each pass hashing the previous digest.
///
/// No salt is mixed in; callers that want one prepend it to `input`.
pub fn iterate_hash(input: &[u8], iterations: u32) -> Result<Digest> {
    if iterations == 0 {
        return Err(XcryptoError::ZeroIterations);
    }
    let first = hash(input);
    Ok((1..iterations).fold(first, |digest, _| hash(&digest)))
}

/// Hex digest of a UTF-8 string.
pub fn hash_str(text: &str) -> String {
    bytes_to_hex(&hash(&str_to_bytes(text)))
}

/// Halves a hex digest, returning hex.
pub fn halve_hash_str(digest_hex: &str) -> Result<String> {
    let bytes = hex_to_bytes(digest_hex)?;
    let digest: Digest = bytes
        .as_slice()
        .try_into()
        .map_err(|_| XcryptoError::InvalidDigestLength {
            expected: BLOCK,
            actual: bytes.len(),
        })?;
    Ok(bytes_to_hex(&halve(&digest)))
}

/// Hex digest of a UTF-8 string hashed `iterations` times.
pub fn iterate_hash_str(text: &str, iterations: u32) -> Result<String> {
    Ok(bytes_to_hex(&iterate_hash(&str_to_bytes(text), iterations)?))
}
