//! Base64 helpers for encoding-agnostic text fields.
//!
//! Some upstream fields arrive either base64-encoded or as plain text. The
//! fallible decoders are the primitives; the `_or_original` form is the one
//! explicitly-named fallback policy for those fields, chosen at the call
//! site rather than buried inside a codec.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::borrow::Cow;
use thiserror::Error;

/// Errors from the fallible base64 decoders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64DecodeError {
    #[error("Input is not valid base64: {reason}")]
    Malformed { reason: String },

    #[error("Decoded bytes are not valid UTF-8")]
    NotUtf8,
}

/// Encodes text as standard base64 with padding.
pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Encodes raw bytes as standard base64 with padding.
pub fn base64_encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard base64 into raw bytes.
pub fn base64_decode(input: &str) -> Result<Vec<u8>, Base64DecodeError> {
    STANDARD
        .decode(input)
        .map_err(|e| Base64DecodeError::Malformed {
            reason: e.to_string(),
        })
}

/// Decodes standard base64 into UTF-8 text.
pub fn base64_decode_text(input: &str) -> Result<String, Base64DecodeError> {
    let bytes = base64_decode(input)?;
    String::from_utf8(bytes).map_err(|_| Base64DecodeError::NotUtf8)
}

/// Decodes base64 text, falling back to the input itself when it is not
/// valid base64 (or does not decode to UTF-8).
///
/// The fallback borrows the input; only successful decoding allocates.
pub fn base64_decode_text_or_original(input: &str) -> Cow<'_, str> {
    match base64_decode_text(input) {
        Ok(decoded) => Cow::Owned(decoded),
        Err(_) => Cow::Borrowed(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_text_roundtrips() {
        let encoded = base64_encode("hello, wire");
        assert_eq!(encoded, "aGVsbG8sIHdpcmU=");
        assert_eq!(base64_decode_text(&encoded).unwrap(), "hello, wire");
    }

    #[test]
    fn encode_bytes_roundtrips() {
        let bytes = [0u8, 155, 255, 7];
        let encoded = base64_encode_bytes(&bytes);
        assert_eq!(base64_decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        let err = base64_decode("not base64!!").unwrap_err();
        assert!(matches!(err, Base64DecodeError::Malformed { .. }));
    }

    #[test]
    fn decode_text_rejects_non_utf8_payload() {
        let encoded = base64_encode_bytes(&[0xff, 0xfe, 0xfd]);
        assert_eq!(base64_decode_text(&encoded), Err(Base64DecodeError::NotUtf8));
    }

    #[test]
    fn lenient_decode_returns_decoded_text() {
        let result = base64_decode_text_or_original("aGVsbG8=");
        assert_eq!(result, "hello");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn lenient_decode_falls_back_to_original() {
        let result = base64_decode_text_or_original("definitely not base64 content");
        assert_eq!(result, "definitely not base64 content");
        assert!(matches!(result, Cow::Borrowed(_)));
    }
}
