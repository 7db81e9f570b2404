//! XAE block encryption/decryption and the padded multi-block wrappers.

use log::{debug, trace};

use crate::block::{add_bytes, CipherBlock};
use crate::encoding::{bytes_to_hex, bytes_to_str, hex_to_bytes, str_to_bytes};
use crate::error::{Result, XcryptoError};
use crate::key::{CipherKey, CipherRoundKeys, XAE_ROUND_KEYS};
use crate::pad::pad;
use crate::params::{XAE_FOLD_MATRIX, XAE_PARAMS, XAE_SPREAD_MATRIX};
use crate::round::{mix_columns, shift_rows, substitute, Direction};
use crate::schedule::expand_cipher_key;
use crate::sbox::{XAE_INV_SBOX, XAE_SBOX};

const ORDER: usize = XAE_PARAMS.order;
const BLOCK: usize = XAE_PARAMS.block_bytes();

/// One encryption round. Every round, the last included, mixes columns.
#[inline]
pub fn encrypt_round(state: &mut CipherBlock, round_key: &CipherBlock) {
    substitute(state, &XAE_SBOX);
    shift_rows::<ORDER>(state, Direction::Forward);
    mix_columns::<ORDER>(state, &XAE_SPREAD_MATRIX, XAE_PARAMS.modulus);
    add_bytes(state, round_key);
}

/// Inverse of [`encrypt_round`].
#[inline]
pub fn decrypt_round(state: &mut CipherBlock, round_key: &CipherBlock) {
    add_bytes(state, round_key);
    mix_columns::<ORDER>(state, &XAE_FOLD_MATRIX, XAE_PARAMS.modulus);
    shift_rows::<ORDER>(state, Direction::Backward);
    substitute(state, &XAE_INV_SBOX);
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &CipherBlock, round_keys: &CipherRoundKeys) -> CipherBlock {
    let mut state = *block;
    for round in 0..XAE_ROUND_KEYS {
        encrypt_round(&mut state, round_keys.get(round));
    }
    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &CipherBlock, round_keys: &CipherRoundKeys) -> CipherBlock {
    let mut state = *block;
    for round in (0..XAE_ROUND_KEYS).rev() {
        decrypt_round(&mut state, round_keys.get(round));
    }
    state
}

/// Encrypts `plaintext` under `key`.
///
/// The plaintext is padded to whole blocks and the number of padding bytes is
/// appended after the last ciphertext block.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let key = CipherKey::new(key)?;
    let round_keys = expand_cipher_key(&key);

    let mut data = plaintext.to_vec();
    let pad_len = pad(&mut data, ORDER);
    trace!(
        "encrypting {} blocks ({} padding bytes)",
        data.len() / BLOCK,
        pad_len
    );
    for chunk in data.chunks_exact_mut(BLOCK) {
        let mut block = [0u8; BLOCK];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&encrypt_block(&block, &round_keys));
    }
    // pad() never appends more than one block
    data.push(pad_len as u8);
    Ok(data)
}

/// Decrypts the output of [`encrypt`].
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let key = CipherKey::new(key)?;
    let (marker, body) = split_marker(ciphertext)?;
    let round_keys = expand_cipher_key(&key);

    trace!("decrypting {} blocks", body.len() / BLOCK);
    let mut data = body.to_vec();
    for chunk in data.chunks_exact_mut(BLOCK) {
        let mut block = [0u8; BLOCK];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&decrypt_block(&block, &round_keys));
    }
    data.truncate(data.len() - marker as usize);
    Ok(data)
}

/// Splits off and validates the trailing padding marker.
fn split_marker(ciphertext: &[u8]) -> Result<(u8, &[u8])> {
    let min = BLOCK + 1;
    let Some((&marker, body)) = ciphertext.split_last().filter(|_| ciphertext.len() >= min)
    else {
        debug!("ciphertext of {} bytes is too short", ciphertext.len());
        return Err(XcryptoError::CiphertextTooShort {
            len: ciphertext.len(),
            min,
        });
    };
    if body.len() % BLOCK != 0 {
        debug!("ciphertext body of {} bytes is misaligned", body.len());
        return Err(XcryptoError::MisalignedCiphertext { len: body.len() });
    }
    if marker == 0 || marker as usize > BLOCK {
        debug!("ciphertext carries padding marker {marker}");
        return Err(XcryptoError::InvalidPaddingMarker { marker });
    }
    Ok((marker, body))
}

/// Encrypts a UTF-8 string under a hex key, returning uppercase hex.
pub fn encrypt_str(plaintext: &str, key_hex: &str) -> Result<String> {
    let key = hex_to_bytes(key_hex)?;
    Ok(bytes_to_hex(&encrypt(&str_to_bytes(plaintext), &key)?))
}

/// Decrypts hex ciphertext under a hex key back into a string.
pub fn decrypt_str(ciphertext_hex: &str, key_hex: &str) -> Result<String> {
    let key = hex_to_bytes(key_hex)?;
    let ciphertext = hex_to_bytes(ciphertext_hex)?;
    bytes_to_str(decrypt(&ciphertext, &key)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::RngCore;

    const KEY_HEX: &str = "603eeb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

    fn test_key() -> Vec<u8> {
        hex_to_bytes(KEY_HEX).unwrap()
    }

    #[test]
    fn encrypt_matches_fixture() {
        assert_eq!(
            encrypt_str("TestsPassed", KEY_HEX).unwrap(),
            "056E7962EE1C2D58280292756EB951B705"
        );
        assert_eq!(
            encrypt_str("", KEY_HEX).unwrap(),
            "7FA3016C1C0FAC810A7FF73D8CAF58C210"
        );
        assert_eq!(
            encrypt_str("0123456789abcdef", KEY_HEX).unwrap(),
            "70F1D0683B7B91EB84F9EC162D7B1CEB\
             B4EABD2F4EA36C4240BB85F63435A1AA10"
        );
    }

    #[test]
    fn decrypt_str_recovers_plaintext() {
        let ct = encrypt_str("TestsPassed", KEY_HEX).unwrap();
        assert_eq!(decrypt_str(&ct, KEY_HEX).unwrap(), "TestsPassed");
        assert_eq!(
            decrypt_str(&ct.to_lowercase(), &KEY_HEX.to_uppercase()).unwrap(),
            "TestsPassed"
        );
    }

    #[test]
    fn encrypt_is_deterministic() {
        let key = test_key();
        assert_eq!(
            encrypt(b"TestsPassed", &key).unwrap(),
            encrypt(b"TestsPassed", &key).unwrap()
        );
    }

    #[test]
    fn ciphertext_layout() {
        let key = test_key();
        for len in [0usize, 1, 15, 16, 17, 100] {
            let ct = encrypt(&vec![7u8; len], &key).unwrap();
            let expected_pad = 16 - len % 16;
            assert_eq!(ct.len(), len + expected_pad + 1);
            assert_eq!(*ct.last().unwrap() as usize, expected_pad);
        }
    }

    #[test]
    fn block_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 32];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let rks = expand_cipher_key(&CipherKey::from(key_bytes));
            let ct = encrypt_block(&block, &rks);
            let pt = decrypt_block(&ct, &rks);
            assert_eq!(pt, block);
        }
    }

    #[test]
    fn rejects_bad_keys() {
        for key in [&[][..], &[1u8, 2, 3][..], &[0u8; 33][..]] {
            assert!(matches!(
                encrypt(b"data", key),
                Err(XcryptoError::InvalidKeyLength { .. })
            ));
            assert!(matches!(
                decrypt(&[0u8; 17], key),
                Err(XcryptoError::InvalidKeyLength { .. })
            ));
        }
    }

    #[test]
    fn rejects_malformed_ciphertext() {
        let key = test_key();
        assert!(matches!(
            decrypt(&[], &key),
            Err(XcryptoError::CiphertextTooShort { len: 0, min: 17 })
        ));
        assert!(matches!(
            decrypt(&[0u8; 16], &key),
            Err(XcryptoError::CiphertextTooShort { len: 16, .. })
        ));
        assert!(matches!(
            decrypt(&[1u8; 20], &key),
            Err(XcryptoError::MisalignedCiphertext { len: 19 })
        ));
        let mut ct = encrypt(b"TestsPassed", &key).unwrap();
        *ct.last_mut().unwrap() = 0;
        assert!(matches!(
            decrypt(&ct, &key),
            Err(XcryptoError::InvalidPaddingMarker { marker: 0 })
        ));
        *ct.last_mut().unwrap() = 17;
        assert!(matches!(
            decrypt(&ct, &key),
            Err(XcryptoError::InvalidPaddingMarker { marker: 17 })
        ));
    }

    #[test]
    fn decrypt_str_rejects_non_utf8() {
        let key = test_key();
        let ct = encrypt(&[0xff, 0xfe, 0xfd], &key).unwrap();
        assert!(matches!(
            decrypt_str(&bytes_to_hex(&ct), KEY_HEX),
            Err(XcryptoError::Utf8(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn round_trip_proptest(
            plaintext in proptest::collection::vec(any::<u8>(), 0..200),
            key_words in 1usize..=16,
            key_seed in any::<u64>(),
        ) {
            let key: Vec<u8> = (0..key_words * 4)
                .map(|i| (key_seed.rotate_left(i as u32 * 7) as u8) ^ i as u8)
                .collect();
            let ct = encrypt(&plaintext, &key).unwrap();
            prop_assert_eq!(decrypt(&ct, &key).unwrap(), plaintext);
        }
    }
}
