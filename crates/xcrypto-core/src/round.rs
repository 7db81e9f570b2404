//! Block transforms shared by the cipher and the hash.
//!
//! Every transform works in place on a row-major `O×O` byte matrix; row `r`
//! occupies `state[r·O..(r+1)·O]` and column `c` is `state[r·O + c]` for
//! `r in 0..O`. The order is a const parameter so both the 4×4 cipher state
//! and the 8×8 hash state go through the same code.

use crate::gf::gf_mul;

/// Direction of a cyclic row rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Elements move towards lower indices (`[a, b, c] -> [b, c, a]`).
    Forward,
    /// Elements move towards higher indices (`[a, b, c] -> [c, a, b]`).
    Backward,
}

impl Direction {
    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Replaces every byte of `state` by its entry in `sbox`.
#[inline]
pub fn substitute(state: &mut [u8], sbox: &[u8; 256]) {
    for byte in state.iter_mut() {
        *byte = sbox[*byte as usize];
    }
}

/// Rotates `row` cyclically by `amount` positions.
#[inline]
pub fn rotate_row(row: &mut [u8], amount: usize, direction: Direction) {
    if row.is_empty() {
        return;
    }
    let amount = amount % row.len();
    match direction {
        Direction::Forward => row.rotate_left(amount),
        Direction::Backward => row.rotate_right(amount),
    }
}

/// Rotates row `r` of an `O×O` state by `r` positions.
#[inline]
pub fn shift_rows<const O: usize>(state: &mut [u8], direction: Direction) {
    debug_assert_eq!(state.len(), O * O);
    for (r, row) in state.chunks_exact_mut(O).enumerate() {
        rotate_row(row, r, direction);
    }
}

/// Mixes each column of an `O×O` state with `matrix` in GF(2^8) under
/// `modulus`.
///
/// The cell at row `i` of a column accumulates `matrix[i·O + k] · cell` over
/// every `k`, so each cell ends up scaled by the XOR of its matrix row. Stored
/// ciphertexts and published digests depend on this exact accumulation.
pub fn mix_columns<const O: usize>(state: &mut [u8], matrix: &[u8], modulus: u8) {
    debug_assert_eq!(state.len(), O * O);
    debug_assert_eq!(matrix.len(), O * O);
    for col in 0..O {
        let mut column = [0u8; O];
        for (row, cell) in column.iter_mut().enumerate() {
            *cell = state[row * O + col];
        }
        for (row, &cell) in column.iter().enumerate() {
            let coefficients = &matrix[row * O..(row + 1) * O];
            state[row * O + col] = coefficients
                .iter()
                .fold(0u8, |acc, &coefficient| acc ^ gf_mul(coefficient, cell, modulus));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{
        XAE_FOLD_MATRIX, XAE_PARAMS, XAE_SPREAD_MATRIX, XWH_PARAMS, XWH_SPREAD_MATRIX,
    };
    use crate::sbox::{XAE_INV_SBOX, XAE_SBOX};
    use proptest::prelude::*;

    const SEQUENCE: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];

    #[test]
    fn rotate_row_directions() {
        let mut row = [1u8, 2, 3, 4];
        rotate_row(&mut row, 1, Direction::Forward);
        assert_eq!(row, [2, 3, 4, 1]);
        rotate_row(&mut row, 2, Direction::Backward);
        assert_eq!(row, [4, 1, 2, 3]);
        rotate_row(&mut row, 5, Direction::Forward);
        assert_eq!(row, [1, 2, 3, 4]);
        rotate_row(&mut [0u8; 0], 3, Direction::Forward);
    }

    #[test]
    fn shift_rows_rotates_by_row_index() {
        let mut state = SEQUENCE;
        shift_rows::<4>(&mut state, Direction::Forward);
        assert_eq!(
            state,
            [1, 2, 3, 4, 6, 7, 8, 5, 11, 12, 9, 10, 16, 13, 14, 15]
        );
        shift_rows::<4>(&mut state, Direction::Backward);
        assert_eq!(state, SEQUENCE);
    }

    #[test]
    fn substitute_inverts_with_inverse_box() {
        let mut state = SEQUENCE;
        substitute(&mut state, &XAE_SBOX);
        assert_eq!(state[0], 0x7c);
        substitute(&mut state, &XAE_INV_SBOX);
        assert_eq!(state, SEQUENCE);
    }

    #[test]
    fn cipher_fold_undoes_spread() {
        let mut state = SEQUENCE;
        mix_columns::<4>(&mut state, &XAE_SPREAD_MATRIX, XAE_PARAMS.modulus);
        mix_columns::<4>(&mut state, &XAE_FOLD_MATRIX, XAE_PARAMS.modulus);
        assert_eq!(state, SEQUENCE);
    }

    #[test]
    fn hash_mix_scales_by_row_fold() {
        let mut state: [u8; 64] = core::array::from_fn(|i| i as u8);
        mix_columns::<8>(&mut state, &XWH_SPREAD_MATRIX, XWH_PARAMS.modulus);
        for (i, &cell) in state.iter().enumerate() {
            assert_eq!(cell, gf_mul(i as u8, 0x03, XWH_PARAMS.modulus));
        }
    }

    proptest! {
        #[test]
        fn shift_rows_roundtrip_proptest(state in any::<[u8; 16]>()) {
            let mut mixed = state;
            shift_rows::<4>(&mut mixed, Direction::Forward);
            shift_rows::<4>(&mut mixed, Direction::Forward.reverse());
            prop_assert_eq!(mixed, state);
        }

        #[test]
        fn hash_shift_rows_roundtrip_proptest(seed in any::<[u8; 32]>()) {
            let state: [u8; 64] = core::array::from_fn(|i| seed[i % 32] ^ i as u8);
            let mut mixed = state;
            shift_rows::<8>(&mut mixed, Direction::Forward);
            shift_rows::<8>(&mut mixed, Direction::Backward);
            prop_assert_eq!(mixed, state);
        }

        #[test]
        fn mix_columns_roundtrip_proptest(state in any::<[u8; 16]>()) {
            let mut mixed = state;
            mix_columns::<4>(&mut mixed, &XAE_SPREAD_MATRIX, XAE_PARAMS.modulus);
            mix_columns::<4>(&mut mixed, &XAE_FOLD_MATRIX, XAE_PARAMS.modulus);
            prop_assert_eq!(mixed, state);
        }

        #[test]
        fn substitute_roundtrip_proptest(state in any::<[u8; 16]>()) {
            let mut mixed = state;
            substitute(&mut mixed, &XAE_SBOX);
            substitute(&mut mixed, &XAE_INV_SBOX);
            prop_assert_eq!(mixed, state);
        }
    }
}
