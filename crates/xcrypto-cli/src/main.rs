//! Command-line interface for `xcrypto-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use xcrypto_core::{
    bytes_to_hex, decrypt, decrypt_str, encrypt, encrypt_str, halve, hash_str, iterate_hash,
    mix_columns, shift_rows, substitute, CipherKey, Direction, XAE_FOLD_MATRIX, XAE_INV_SBOX,
    XAE_PARAMS, XAE_SBOX, XAE_SPREAD_MATRIX,
};

/// XAE cipher and XWH hash CLI.
#[derive(Parser)]
#[command(name = "xcrypto", version, author, about = "XAE block cipher and XWH hash")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file.
    Enc {
        /// Cipher key as hex (a multiple of 8 hex characters).
        #[arg(long, value_name = "HEX", env = "XCRYPTO_KEY", hide_env_values = true)]
        key_hex: String,
        /// Plaintext input file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file produced by `enc`.
    Dec {
        /// Cipher key as hex (a multiple of 8 hex characters).
        #[arg(long, value_name = "HEX", env = "XCRYPTO_KEY", hide_env_values = true)]
        key_hex: String,
        /// Ciphertext input file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Encrypt a string and print the ciphertext as hex.
    EncStr {
        /// Cipher key as hex.
        #[arg(long, value_name = "HEX", env = "XCRYPTO_KEY", hide_env_values = true)]
        key_hex: String,
        /// Text to encrypt.
        text: String,
    },
    /// Decrypt hex ciphertext and print the recovered string.
    DecStr {
        /// Cipher key as hex.
        #[arg(long, value_name = "HEX", env = "XCRYPTO_KEY", hide_env_values = true)]
        key_hex: String,
        /// Ciphertext as hex.
        ciphertext: String,
    },
    /// Print the digest of a string or a file.
    Hash {
        /// Text to hash.
        #[arg(conflicts_with = "input", required_unless_present = "input")]
        text: Option<String>,
        /// Hash the contents of this file instead.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Number of chained hash passes.
        #[arg(long, default_value_t = 1)]
        iterations: u32,
        /// Fold the digest in half.
        #[arg(long, default_value_t = false)]
        half: bool,
    },
    /// Run the known-answer self test.
    Check,
    /// Run a local demo: generate a key, encrypt random data, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

const CHECK_KEY_HEX: &str = "603eeb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
const CHECK_TEXT: &str = "TestsPassed";
const CHECK_DIGEST: &str = "F16C66ECDEC5B3CE6F4734576D146BD5948368733B715E57F6762433AAC89CB1\
                            7B6BF7D1D383DEFF8EEA868FD0F5658464816B023F52878D36CF2D20CBC3CFE4";
const CHECK_DIGEST_X5: &str = "265BF37FFD201D5BACA2F1DC58BA3F5183A4B4490F636482BED7C9CD157CB00E\
                               0000875F3AD5F43504F8E95A27861E0A0CADAB903E546012E40A62F0A89167DD";
const CHECK_CIPHERTEXT: &str = "056E7962EE1C2D58280292756EB951B705";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            input,
            output,
        } => cmd_enc(&key_hex, &input, &output),
        Commands::Dec {
            key_hex,
            input,
            output,
        } => cmd_dec(&key_hex, &input, &output),
        Commands::EncStr { key_hex, text } => {
            println!("{}", encrypt_str(&text, key_hex.trim()).context("encrypt")?);
            Ok(())
        }
        Commands::DecStr {
            key_hex,
            ciphertext,
        } => {
            let text = decrypt_str(ciphertext.trim(), key_hex.trim()).context("decrypt")?;
            println!("{text}");
            Ok(())
        }
        Commands::Hash {
            text,
            input,
            iterations,
            half,
        } => cmd_hash(text, input, iterations, half),
        Commands::Check => cmd_check(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(key_hex: &str, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    info!("encrypting {} bytes from {}", data.len(), input_path.display());
    let ciphertext = encrypt(&data, key.as_bytes()).context("encrypt")?;
    fs::write(output_path, ciphertext)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_dec(key_hex: &str, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    info!("decrypting {} bytes from {}", data.len(), input_path.display());
    let plaintext = decrypt(&data, key.as_bytes()).context("decrypt")?;
    fs::write(output_path, plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_hash(
    text: Option<String>,
    input: Option<PathBuf>,
    iterations: u32,
    half: bool,
) -> Result<()> {
    let data = match (text, input) {
        (Some(text), None) => text.into_bytes(),
        (None, Some(path)) => {
            fs::read(&path).with_context(|| format!("read {}", path.display()))?
        }
        _ => bail!("provide either TEXT or --input"),
    };
    debug!("hashing {} bytes with {} passes", data.len(), iterations);
    let digest = iterate_hash(&data, iterations).context("hash")?;
    if half {
        println!("{}", bytes_to_hex(&halve(&digest)));
    } else {
        println!("{}", bytes_to_hex(&digest));
    }
    Ok(())
}

fn cmd_check() -> Result<()> {
    const ORDER: usize = XAE_PARAMS.order;
    let sample: [u8; 16] = std::array::from_fn(|i| i as u8 + 1);

    let mut state = sample;
    substitute(&mut state, &XAE_SBOX);
    substitute(&mut state, &XAE_INV_SBOX);
    ensure_eq("substitution inverse", &state, &sample)?;

    let mut state = sample;
    shift_rows::<ORDER>(&mut state, Direction::Forward);
    shift_rows::<ORDER>(&mut state, Direction::Backward);
    ensure_eq("row shift inverse", &state, &sample)?;

    let mut state = sample;
    mix_columns::<ORDER>(&mut state, &XAE_SPREAD_MATRIX, XAE_PARAMS.modulus);
    mix_columns::<ORDER>(&mut state, &XAE_FOLD_MATRIX, XAE_PARAMS.modulus);
    ensure_eq("column mix inverse", &state, &sample)?;

    let ciphertext = encrypt_str(CHECK_TEXT, CHECK_KEY_HEX)?;
    ensure_eq("cipher vector", ciphertext.as_str(), CHECK_CIPHERTEXT)?;
    let plaintext = decrypt_str(&ciphertext, CHECK_KEY_HEX)?;
    ensure_eq("cipher round trip", plaintext.as_str(), CHECK_TEXT)?;

    ensure_eq("digest vector", hash_str(CHECK_TEXT).as_str(), CHECK_DIGEST)?;
    let iterated = bytes_to_hex(&iterate_hash(CHECK_TEXT.as_bytes(), 5)?);
    ensure_eq("iterated digest vector", iterated.as_str(), CHECK_DIGEST_X5)?;

    println!("all checks passed");
    Ok(())
}

fn ensure_eq<T: PartialEq + std::fmt::Debug + ?Sized>(
    name: &str,
    actual: &T,
    expected: &T,
) -> Result<()> {
    if actual != expected {
        bail!("{name} mismatch: got {actual:?}, expected {expected:?}");
    }
    info!("{name}: ok");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 32];
    rng.fill_bytes(&mut key_bytes);
    let key = CipherKey::from(key_bytes);

    let mut message = [0u8; 40];
    rng.fill_bytes(&mut message);

    let ciphertext = encrypt(&message, key.as_bytes())?;
    let decrypted = decrypt(&ciphertext, key.as_bytes())?;

    println!("demo key: {}", bytes_to_hex(&key_bytes));
    println!("plaintext: {}", bytes_to_hex(&message));
    println!("ciphertext: {}", bytes_to_hex(&ciphertext));
    println!("decrypted: {}", bytes_to_hex(&decrypted));
    if decrypted != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<CipherKey> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    CipherKey::new(&bytes).context("cipher key must be a positive multiple of 4 bytes")
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn self_test_passes() {
        cmd_check().unwrap();
    }

    #[test]
    fn parses_hash_arguments() {
        let cli = Cli::try_parse_from(["xcrypto", "hash", "TestsPassed", "--iterations", "5"])
            .unwrap();
        match cli.command {
            Commands::Hash {
                text, iterations, ..
            } => {
                assert_eq!(text.as_deref(), Some("TestsPassed"));
                assert_eq!(iterations, 5);
            }
            _ => panic!("expected hash command"),
        }
        assert!(Cli::try_parse_from(["xcrypto", "hash"]).is_err());
    }

    #[test]
    fn rejects_partial_word_keys() {
        assert!(parse_key_hex("00112233").is_ok());
        assert!(parse_key_hex("001122").is_err());
        assert!(parse_key_hex("not hex").is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(7));
        let mut b = seeded_rng(Some(7));
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
