//! XAE block cipher and XWH hash.
//!
//! Both algorithms are built from the same pieces:
//! - GF(2^8) multiplication parameterized by the field's reduction byte.
//! - Substitution, row rotation, and column mixing over a square byte state
//!   (4×4 for the cipher, 8×8 for the hash).
//! - A Rijndael-style cipher key schedule and a hash-internal schedule driven
//!   by the block transforms themselves.
//! - Checksum padding and hex/UTF-8 conversions at the API boundary.
//!
//! The algorithms are not AES or Whirlpool: the cipher mixes columns in its
//! final round and the hash strengthens with a decimal length prefix. Outputs
//! are reproduced byte for byte so that stored ciphertexts and digests stay
//! valid. Nothing here is side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod encoding;
mod error;
mod gf;
mod hash;
mod key;
mod pad;
mod params;
mod round;
mod sbox;
mod schedule;

pub use crate::block::{
    add_bytes, add_bytes_truncated, CipherBlock, Digest, HalfDigest, HashBlock,
};
pub use crate::cipher::{
    decrypt, decrypt_block, decrypt_round, decrypt_str, encrypt, encrypt_block, encrypt_round,
    encrypt_str,
};
pub use crate::encoding::{bytes_to_hex, bytes_to_str, hex_to_bytes, str_to_bytes};
pub use crate::error::{Result, XcryptoError};
pub use crate::gf::{gf_mul, xtime};
pub use crate::hash::{
    compress, halve, halve_hash_str, hash, hash_round, hash_str, iterate_hash, iterate_hash_str,
    permute,
};
pub use crate::key::{CipherKey, CipherRoundKeys, HashRoundKeys, XAE_ROUND_KEYS, XWH_ROUND_KEYS};
pub use crate::pad::{pad, padding_byte};
pub use crate::params::{
    AlgorithmParams, PADDING_BYTE, XAE_FOLD_MATRIX, XAE_PARAMS, XAE_RCON, XAE_SPREAD_MATRIX,
    XWH_IV, XWH_PARAMS, XWH_RCON, XWH_SPREAD_MATRIX,
};
pub use crate::round::{mix_columns, rotate_row, shift_rows, substitute, Direction};
pub use crate::sbox::{hash_sbox, inv_sbox, sbox, XAE_INV_SBOX, XAE_SBOX, XWH_SBOX};
pub use crate::schedule::{expand_cipher_key, expand_hash_key, round_constant};
