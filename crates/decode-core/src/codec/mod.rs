//! Codec registry: a fixed catalog of named, reversible text transforms.
//!
//! Every codec exposes an encode (`encrypt`) and decode (`decrypt`) direction.
//! ROT13 and reverse are involutions, so both directions are the same
//! operation. Only the caesar codec reads the `shift` argument.

mod b64;
mod caesar;
mod error;
mod morse;
mod percent;
mod radix;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use error::CodecError;
pub use morse::alphabet as morse_alphabet;

/// Shift used when a caller does not pick one.
pub const DEFAULT_SHIFT: i64 = 3;

/// Identifier of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherId {
    Caesar,
    Base64,
    Rot13,
    Reverse,
    Morse,
    Binary,
    Hex,
    #[serde(alias = "url-percent-encode")]
    Url,
}

impl CipherId {
    /// All ids in catalog order.
    pub const ALL: [CipherId; 8] = [
        CipherId::Caesar,
        CipherId::Base64,
        CipherId::Rot13,
        CipherId::Reverse,
        CipherId::Morse,
        CipherId::Binary,
        CipherId::Hex,
        CipherId::Url,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CipherId::Caesar => "caesar",
            CipherId::Base64 => "base64",
            CipherId::Rot13 => "rot13",
            CipherId::Reverse => "reverse",
            CipherId::Morse => "morse",
            CipherId::Binary => "binary",
            CipherId::Hex => "hex",
            CipherId::Url => "url",
        }
    }

    pub fn descriptor(self) -> &'static CipherDescriptor {
        // CATALOG is declared in `ALL` order.
        &CATALOG[self as usize]
    }
}

impl fmt::Display for CipherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CipherId {
    type Err = CodecError;

    /// Case-insensitive; `url-percent-encode` is accepted for `url`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "url-percent-encode" {
            return Ok(CipherId::Url);
        }
        CipherId::ALL
            .into_iter()
            .find(|id| id.as_str() == lower)
            .ok_or_else(|| CodecError::UnknownCipher(s.to_string()))
    }
}

/// Catalog entry used to populate selection lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherDescriptor {
    pub id: CipherId,
    pub name: &'static str,
    pub description: &'static str,
    pub has_shift: bool,
}

static CATALOG: [CipherDescriptor; 8] = [
    CipherDescriptor {
        id: CipherId::Caesar,
        name: "Caesar Cipher",
        description: "Shift letters by a number",
        has_shift: true,
    },
    CipherDescriptor {
        id: CipherId::Base64,
        name: "Base64",
        description: "Standard encoding scheme",
        has_shift: false,
    },
    CipherDescriptor {
        id: CipherId::Rot13,
        name: "ROT13",
        description: "Caesar cipher with shift 13",
        has_shift: false,
    },
    CipherDescriptor {
        id: CipherId::Reverse,
        name: "Reverse",
        description: "Reverse the text",
        has_shift: false,
    },
    CipherDescriptor {
        id: CipherId::Morse,
        name: "Morse Code",
        description: "Dots and dashes",
        has_shift: false,
    },
    CipherDescriptor {
        id: CipherId::Binary,
        name: "Binary",
        description: "Convert to/from binary",
        has_shift: false,
    },
    CipherDescriptor {
        id: CipherId::Hex,
        name: "Hexadecimal",
        description: "Convert to/from hex",
        has_shift: false,
    },
    CipherDescriptor {
        id: CipherId::Url,
        name: "URL Encode",
        description: "Safe URL encoding",
        has_shift: false,
    },
];

/// The fixed catalog, in display order.
pub fn catalog() -> &'static [CipherDescriptor] {
    &CATALOG
}

/// Encode `text` with `cipher`. Never fails for any input; the `Result` keeps
/// the signature symmetric with [`decrypt`].
pub fn encrypt(text: &str, cipher: CipherId, shift: i64) -> Result<String, CodecError> {
    let out = match cipher {
        CipherId::Caesar => caesar::shift_letters(text, shift),
        CipherId::Base64 => b64::encode(text),
        CipherId::Rot13 => caesar::rot13(text),
        CipherId::Reverse => reverse(text),
        CipherId::Morse => morse::encode(text),
        CipherId::Binary => radix::encode_binary(text),
        CipherId::Hex => radix::encode_hex(text),
        CipherId::Url => percent::encode(text),
    };
    Ok(out)
}

/// Decode `text` with `cipher`. Malformed base64, binary, hex or percent input
/// is reported as a [`CodecError`].
pub fn decrypt(text: &str, cipher: CipherId, shift: i64) -> Result<String, CodecError> {
    let result = match cipher {
        CipherId::Caesar => Ok(caesar::unshift_letters(text, shift)),
        CipherId::Base64 => b64::decode(text),
        CipherId::Rot13 => Ok(caesar::rot13(text)),
        CipherId::Reverse => Ok(reverse(text)),
        CipherId::Morse => Ok(morse::decode(text)),
        CipherId::Binary => radix::decode_binary(text),
        CipherId::Hex => radix::decode_hex(text),
        CipherId::Url => percent::decode(text),
    };
    if let Err(err) = &result {
        tracing::debug!(cipher = %cipher, error = %err, "decode failed");
    }
    result
}

/// Like [`encrypt`], keyed by id string. Unknown ids return the input unchanged.
pub fn encrypt_named(text: &str, cipher: &str, shift: i64) -> Result<String, CodecError> {
    match cipher.parse::<CipherId>() {
        Ok(id) => encrypt(text, id, shift),
        Err(_) => Ok(text.to_string()),
    }
}

/// Like [`decrypt`], keyed by id string. Unknown ids return the input unchanged.
pub fn decrypt_named(text: &str, cipher: &str, shift: i64) -> Result<String, CodecError> {
    match cipher.parse::<CipherId>() {
        Ok(id) => decrypt(text, id, shift),
        Err(_) => Ok(text.to_string()),
    }
}

/// Reverse by code point.
fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
