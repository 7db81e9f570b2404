//! Block representation helpers.

/// Cipher state: a 4×4 byte matrix stored row-major.
pub type CipherBlock = [u8; 16];

/// Hash state: an 8×8 byte matrix stored row-major.
pub type HashBlock = [u8; 64];

/// Full XWH digest.
pub type Digest = HashBlock;

/// Digest folded in half by [`crate::halve`].
pub type HalfDigest = [u8; 32];

/// XORs `rhs` into `dst`. Both sides must have the same length.
#[inline]
pub fn add_bytes(dst: &mut [u8], rhs: &[u8]) {
    debug_assert_eq!(dst.len(), rhs.len());
    add_bytes_truncated(dst, rhs);
}

/// XORs the overlapping prefix of `rhs` into `dst`; the longer side's tail
/// is left untouched.
#[inline]
pub fn add_bytes_truncated(dst: &mut [u8], rhs: &[u8]) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
