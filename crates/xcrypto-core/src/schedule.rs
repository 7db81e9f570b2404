//! Key schedules: the Rijndael-style cipher expansion and the hash-internal
//! schedule driven by the block transforms.

use log::trace;

use crate::block::{add_bytes, add_bytes_truncated, HashBlock};
use crate::gf::xtime;
use crate::key::{CipherKey, CipherRoundKeys, HashRoundKeys, XAE_ROUND_KEYS, XWH_ROUND_KEYS};
use crate::params::{XAE_PARAMS, XAE_RCON, XWH_PARAMS, XWH_RCON, XWH_SPREAD_MATRIX};
use crate::round::{mix_columns, rotate_row, shift_rows, substitute, Direction};
use crate::sbox::{XAE_SBOX, XWH_SBOX};

const WORD: usize = XAE_PARAMS.order;
const SCHEDULE_WORDS: usize = XAE_ROUND_KEYS * WORD;
const HASH_ORDER: usize = XWH_PARAMS.order;

type Word = [u8; WORD];

/// Round constant for schedule step `step` (1-based).
///
/// Steps beyond the table keep doubling in the cipher field, which is how the
/// table itself was built.
pub fn round_constant(step: usize) -> u8 {
    match step {
        0 => 0,
        s if s <= XAE_RCON.len() => XAE_RCON[s - 1],
        s => (XAE_RCON.len()..s).fold(XAE_RCON[XAE_RCON.len() - 1], |rc, _| {
            xtime(rc, XAE_PARAMS.modulus)
        }),
    }
}

/// Expands a cipher key into `rounds + 1` round keys.
///
/// Keys longer than the schedule contribute only their first words.
pub fn expand_cipher_key(key: &CipherKey) -> CipherRoundKeys {
    let key_words = key.words();
    let mid = key_words / 2;
    trace!("expanding {key_words}-word cipher key");

    let mut w: Vec<Word> = key
        .as_bytes()
        .chunks_exact(WORD)
        .take(SCHEDULE_WORDS)
        .map(|chunk| {
            let mut word = [0u8; WORD];
            word.copy_from_slice(chunk);
            word
        })
        .collect();

    for i in key_words..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % key_words == 0 {
            rotate_row(&mut temp, 1, Direction::Forward);
            substitute(&mut temp, &XAE_SBOX);
            temp[0] ^= round_constant(i / key_words);
        } else if key_words > 6 && i % key_words == mid {
            substitute(&mut temp, &XAE_SBOX);
        }
        add_bytes(&mut temp, &w[i - key_words]);
        w.push(temp);
    }

    let mut round_keys = [[0u8; 16]; XAE_ROUND_KEYS];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for (word_idx, bytes) in round_key.chunks_exact_mut(WORD).enumerate() {
            bytes.copy_from_slice(&w[round * WORD + word_idx]);
        }
    }
    CipherRoundKeys(round_keys)
}

/// Derives the one-time hash schedule from a 64-byte seed.
///
/// Block 0 is the seed; each following block is the previous one after
/// substitution, row shifting, column mixing, and the round constant.
pub fn expand_hash_key(seed: &HashBlock) -> HashRoundKeys {
    let mut blocks = [[0u8; 64]; XWH_ROUND_KEYS];
    blocks[0] = *seed;
    for i in 1..XWH_ROUND_KEYS {
        let mut block = blocks[i - 1];
        substitute(&mut block, &XWH_SBOX);
        shift_rows::<HASH_ORDER>(&mut block, Direction::Forward);
        mix_columns::<HASH_ORDER>(&mut block, &XWH_SPREAD_MATRIX, XWH_PARAMS.modulus);
        add_bytes_truncated(&mut block, &XWH_RCON);
        blocks[i] = block;
    }
    HashRoundKeys(blocks)
}
