//! Encrypts a short message, decrypts it back, and hashes it.

use xcrypto_core::{bytes_to_hex, decrypt, encrypt, halve, hash, hex_to_bytes};

fn main() -> xcrypto_core::Result<()> {
    let key = hex_to_bytes("603eeb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4")?;
    let message = b"first block here, and a second one";

    let ciphertext = encrypt(message, &key)?;
    let plaintext = decrypt(&ciphertext, &key)?;
    assert_eq!(plaintext, message);

    let digest = hash(message);
    println!("ciphertext: {}", bytes_to_hex(&ciphertext));
    println!("digest:     {}", bytes_to_hex(&digest));
    println!("half:       {}", bytes_to_hex(&halve(&digest)));
    Ok(())
}
