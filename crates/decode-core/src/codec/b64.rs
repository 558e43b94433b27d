//! UTF-8 safe Base64.
//!
//! Encoding emits the padded standard alphabet. Decoding is as forgiving as a
//! browser's `atob`: ASCII whitespace is ignored, padding is optional and
//! unused trailing bits are tolerated. The decoded bytes must be UTF-8.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use super::CodecError;

const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

pub fn decode(text: &str) -> Result<String, CodecError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = FORGIVING.decode(compact.as_bytes())?;
    String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        assert_eq!(encode("Hello"), "SGVsbG8=");
        assert_eq!(decode("SGVsbG8=").unwrap(), "Hello");
    }

    #[test]
    fn multibyte() {
        assert_eq!(encode("café"), "Y2Fmw6k=");
        assert_eq!(decode(&encode("héllo 🌍 世界")).unwrap(), "héllo 🌍 世界");
    }

    #[test]
    fn missing_padding_and_whitespace_accepted() {
        assert_eq!(decode("SGVsbG8").unwrap(), "Hello");
        assert_eq!(decode(" SGVs\nbG8= ").unwrap(), "Hello");
    }

    #[test]
    fn empty_is_ok() {
        assert_eq!(encode(""), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn bad_alphabet_is_error() {
        assert!(matches!(decode("SGVs*G8="), Err(CodecError::InvalidBase64(_))));
    }

    #[test]
    fn non_utf8_payload_is_error() {
        // 0xff 0xfe
        assert_eq!(decode("//4="), Err(CodecError::InvalidUtf8));
    }
}
