//! Conversions used at the string boundary of the public API.

use crate::error::Result;

/// Encodes bytes as uppercase hex, two digits per byte.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Decodes a hex string (either case) into bytes.
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(hex_str)?)
}

/// UTF-8 bytes of `text`.
pub fn str_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Interprets `bytes` as UTF-8.
pub fn bytes_to_str(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XcryptoError;

    #[test]
    fn hex_is_uppercase_and_case_insensitive() {
        assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xab, 0xff]), "000FABFF");
        assert_eq!(hex_to_bytes("000fAbFF").unwrap(), vec![0x00, 0x0f, 0xab, 0xff]);
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(matches!(hex_to_bytes("abc"), Err(XcryptoError::Hex(_))));
        assert!(matches!(hex_to_bytes("zz"), Err(XcryptoError::Hex(_))));
    }

    #[test]
    fn utf8_roundtrip_and_rejection() {
        let bytes = str_to_bytes("contraseña");
        assert_eq!(bytes.len(), 11);
        assert_eq!(bytes_to_str(bytes).unwrap(), "contraseña");
        assert!(matches!(
            bytes_to_str(vec![0xff, 0xfe]),
            Err(XcryptoError::Utf8(_))
        ));
    }
}
