//! GF(2^8) arithmetic parameterized by the reduction byte.

/// Multiplies `a` by `b` in GF(2^8), reducing with `modulus` (the low byte of
/// the field polynomial, e.g. `0x1b` for x^8 + x^4 + x^3 + x + 1).
#[inline]
pub fn gf_mul(mut a: u8, mut b: u8, modulus: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x80;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= modulus;
        }
        b >>= 1;
    }
    product
}

/// Doubles `byte` in GF(2^8) under `modulus`.
#[inline]
pub fn xtime(byte: u8, modulus: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ modulus
    } else {
        shifted
    }
}
