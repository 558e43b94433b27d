//! Decode failures for the codec registry.

use thiserror::Error;

/// Error returned when a decode direction cannot make sense of its input.
///
/// Encoding never fails; only base64, binary, hex and percent decoding do.
/// An empty input always decodes to an empty string, so `Err` is never
/// ambiguous with "decoded to nothing".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input is not in the standard Base64 alphabet or has a bad length.
    #[error("invalid base64 input: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Decoded bytes are not valid UTF-8.
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,

    /// A space-separated token contains something other than `0`/`1`.
    #[error("invalid binary token {token:?} at position {position}")]
    InvalidBinaryToken { token: String, position: usize },

    /// A space-separated token is not a hexadecimal number.
    #[error("invalid hex token {token:?} at position {position}")]
    InvalidHexToken { token: String, position: usize },

    /// Token parsed, but the value is not a Unicode scalar value.
    #[error("value {value:#x} at position {position} is not a valid character")]
    InvalidCodePoint { value: u32, position: usize },

    /// `%` not followed by two hex digits.
    #[error("malformed percent escape at byte offset {offset}")]
    InvalidPercentEscape { offset: usize },

    /// Cipher id outside the catalog (only produced by strict parsing).
    #[error("unknown cipher: {0}")]
    UnknownCipher(String),
}
