//! Base64URL encoding/decoding per RFC 4648
//!
//! Output is always unpadded. Input is decoded padding-indifferent, so a
//! segment that carries `=` padding still decodes, while characters outside
//! the URL-safe alphabet and non-canonical trailing bits are rejected.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes to an unpadded Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(input)
}

/// Encode a string to unpadded Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode a Base64URL string to bytes, padding optional
///
/// The error carries the decoder's reason; callers attach the segment name.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, String> {
    URL_SAFE_LENIENT.decode(input).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(b""), "");
        assert_eq!(encode_bytes(b"f"), "Zg");
        assert_eq!(encode_bytes(b"fo"), "Zm8");
        assert_eq!(encode_bytes(b"foo"), "Zm9v");
        assert_eq!(encode_bytes(b"foob"), "Zm9vYg");
        assert_eq!(encode_bytes(b"fooba"), "Zm9vYmE");
        assert_eq!(encode_bytes(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_padding_is_optional() {
        assert_eq!(decode_bytes("Zm8").unwrap(), b"fo");
        assert_eq!(decode_bytes("Zm8=").unwrap(), b"fo");
        assert_eq!(decode_bytes("Zg==").unwrap(), b"f");
    }

    #[test]
    fn test_decode_invalid() {
        assert!(decode_bytes("!!!").is_err());
        // Standard alphabet characters are not URL-safe
        assert!(decode_bytes("+/8").is_err());
        // A single trailing symbol cannot encode a byte
        assert!(decode_bytes("A").is_err());
        // "Zh" carries non-zero trailing bits; "Zg" is the canonical form
        assert!(decode_bytes("Zh").is_err());
    }

    #[test]
    fn test_url_safe_characters() {
        let encoded = encode_bytes(&[0xfb, 0xff]);
        assert!(encoded.contains('-') || encoded.contains('_'));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }
}
