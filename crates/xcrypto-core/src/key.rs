//! Key and round key types.

use log::debug;

use crate::block::{CipherBlock, HashBlock};
use crate::error::{Result, XcryptoError};
use crate::params::{XAE_PARAMS, XWH_PARAMS};

/// Number of round keys in a cipher schedule.
pub const XAE_ROUND_KEYS: usize = XAE_PARAMS.rounds + 1;

/// Number of round keys in a hash schedule.
pub const XWH_ROUND_KEYS: usize = XWH_PARAMS.rounds + 1;

/// Validated XAE key: a positive number of 4-byte words.
#[derive(Clone, PartialEq, Eq)]
pub struct CipherKey(Vec<u8>);

impl CipherKey {
    /// Validates and wraps raw key bytes.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let word = XAE_PARAMS.order;
        if bytes.is_empty() || bytes.len() % word != 0 {
            debug!("rejecting cipher key of {} bytes", bytes.len());
            return Err(XcryptoError::InvalidKeyLength {
                len: bytes.len(),
                word,
            });
        }
        Ok(Self(bytes.to_vec()))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in cipher words.
    pub fn words(&self) -> usize {
        self.0.len() / XAE_PARAMS.order
    }
}

impl TryFrom<&[u8]> for CipherKey {
    type Error = XcryptoError;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::new(value)
    }
}

impl From<[u8; 32]> for CipherKey {
    fn from(value: [u8; 32]) -> Self {
        Self(value.to_vec())
    }
}

impl core::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CipherKey")
            .field("words", &self.words())
            .finish_non_exhaustive()
    }
}

/// Expanded round keys for XAE.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CipherRoundKeys(pub [CipherBlock; XAE_ROUND_KEYS]);

impl CipherRoundKeys {
    /// Returns the round key at the requested index (0..=14).
    #[inline]
    pub fn get(&self, round: usize) -> &CipherBlock {
        &self.0[round]
    }
}

/// One-time schedule derived from a hash chaining value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashRoundKeys(pub [HashBlock; XWH_ROUND_KEYS]);

impl HashRoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &HashBlock {
        &self.0[round]
    }
}
