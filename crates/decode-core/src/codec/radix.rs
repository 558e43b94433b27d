//! Per-character binary and hexadecimal renderings.
//!
//! Each character's code point becomes one token (`{:08b}` or `{:02x}`) and
//! tokens are space-joined. Single-byte text (U+0000..=U+00FF) yields exactly
//! eight binary digits or two hex digits per token; wider code points simply
//! produce longer tokens and still decode.

use super::CodecError;

#[derive(Debug, Clone, Copy)]
enum Radix {
    Binary,
    Hex,
}

impl Radix {
    fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Hex => 16,
        }
    }

    fn is_digit(self, b: u8) -> bool {
        match self {
            Radix::Binary => b == b'0' || b == b'1',
            Radix::Hex => b.is_ascii_hexdigit(),
        }
    }

    fn bad_token(self, token: &str, position: usize) -> CodecError {
        let token = token.to_string();
        match self {
            Radix::Binary => CodecError::InvalidBinaryToken { token, position },
            Radix::Hex => CodecError::InvalidHexToken { token, position },
        }
    }
}

pub fn encode_binary(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:08b}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn decode_binary(text: &str) -> Result<String, CodecError> {
    decode_tokens(text, Radix::Binary)
}

pub fn encode_hex(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:02x}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn decode_hex(text: &str) -> Result<String, CodecError> {
    decode_tokens(text, Radix::Hex)
}

/// Whitespace-separated tokens; every token must be all digits of `radix`
/// (no sign, no prefix) and name a valid `char`.
fn decode_tokens(text: &str, radix: Radix) -> Result<String, CodecError> {
    let mut out = String::new();
    for (position, token) in text.split_whitespace().enumerate() {
        if !token.bytes().all(|b| radix.is_digit(b)) {
            return Err(radix.bad_token(token, position));
        }
        let value = u32::from_str_radix(token, radix.base())
            .map_err(|_| radix.bad_token(token, position))?;
        let c = char::from_u32(value).ok_or(CodecError::InvalidCodePoint { value, position })?;
        out.push(c);
    }
    Ok(out)
}
