//! Algorithm parameters and the fixed tables shared by the cipher and the hash.

/// Static parameters of one block algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmParams {
    /// Side length of the square state matrix.
    pub order: usize,
    /// Number of schedule steps; rounds run over `rounds + 1` schedule blocks.
    pub rounds: usize,
    /// Reduction byte for GF(2^8) multiplication.
    pub modulus: u8,
}

impl AlgorithmParams {
    /// Bytes in one state block (`order²`).
    pub const fn block_bytes(&self) -> usize {
        self.order * self.order
    }

    /// Bytes in a full round key schedule (`(rounds + 1)·order²`).
    pub const fn schedule_bytes(&self) -> usize {
        (self.rounds + 1) * self.block_bytes()
    }
}

/// XAE: 4×4 state, 14 schedule steps, Rijndael field.
pub const XAE_PARAMS: AlgorithmParams = AlgorithmParams {
    order: 4,
    rounds: 14,
    modulus: 0x1b,
};

/// XWH: 8×8 state, 10 schedule steps.
pub const XWH_PARAMS: AlgorithmParams = AlgorithmParams {
    order: 8,
    rounds: 10,
    modulus: 0x1d,
};

/// Base value folded into every padding byte.
pub const PADDING_BYTE: u8 = 0x01;

/// First bytes of the cipher key schedule round constants.
pub const XAE_RCON: [u8; 8] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80];

/// Constant added to the leading bytes of every hash schedule block.
pub const XWH_RCON: [u8; 8] = [0x18, 0x23, 0xc6, 0xe8, 0x87, 0xb8, 0x01, 0x4f];

/// Cipher mixing matrix used on encryption.
pub static XAE_SPREAD_MATRIX: [u8; 16] = [
    0x02, 0x03, 0x01, 0x01,
    0x01, 0x02, 0x03, 0x01,
    0x01, 0x01, 0x02, 0x03,
    0x03, 0x01, 0x01, 0x02,
];

/// Cipher mixing matrix used on decryption.
pub static XAE_FOLD_MATRIX: [u8; 16] = [
    0x0e, 0x0b, 0x0d, 0x09,
    0x09, 0x0e, 0x0b, 0x0d,
    0x0d, 0x09, 0x0e, 0x0b,
    0x0b, 0x0d, 0x09, 0x0e,
];

/// Hash mixing matrix.
pub static XWH_SPREAD_MATRIX: [u8; 64] = [
    0x01, 0x01, 0x04, 0x01, 0x08, 0x05, 0x02, 0x09,
    0x09, 0x01, 0x01, 0x04, 0x01, 0x08, 0x05, 0x02,
    0x02, 0x09, 0x01, 0x01, 0x04, 0x01, 0x08, 0x05,
    0x05, 0x02, 0x09, 0x01, 0x01, 0x04, 0x01, 0x08,
    0x08, 0x05, 0x02, 0x09, 0x01, 0x01, 0x04, 0x01,
    0x01, 0x08, 0x05, 0x02, 0x09, 0x01, 0x01, 0x04,
    0x04, 0x01, 0x08, 0x05, 0x02, 0x09, 0x01, 0x01,
    0x01, 0x04, 0x01, 0x08, 0x05, 0x02, 0x09, 0x01,
];

/// Initial chaining value of the hash.
pub static XWH_IV: [u8; 64] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
    0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0x00, 0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70,
    0x80, 0x90, 0xa0, 0xb0, 0xc0, 0xd0, 0xe0, 0xf0,
    0x00, 0x1f, 0x2e, 0x3d, 0x4c, 0x5b, 0x6a, 0x79,
    0x88, 0x97, 0xa6, 0xb5, 0xc4, 0xd3, 0xe2, 0xf1,
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
    0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];
