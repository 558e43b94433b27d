//! Property tests for codec round-trips and analyzer score bounds.

use decode_core::codec::{decrypt, encrypt, morse_alphabet, CipherId};
use decode_core::link_risk::analyze;
use proptest::prelude::*;

fn latin1() -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<u8>(), 0..64)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

fn morse_text() -> impl Strategy<Value = String> {
    let chars: Vec<char> = morse_alphabet().collect();
    proptest::collection::vec(proptest::sample::select(chars), 0..40)
        .prop_map(|cs| cs.into_iter().collect())
}

proptest! {
    #[test]
    fn caesar_roundtrip_keeps_case_and_symbols(text in "[ -~]{0,80}", shift in any::<i64>()) {
        let enc = encrypt(&text, CipherId::Caesar, shift).unwrap();
        prop_assert_eq!(decrypt(&enc, CipherId::Caesar, shift).unwrap(), text.clone());
        for (a, b) in text.chars().zip(enc.chars()) {
            if a.is_ascii_alphabetic() {
                prop_assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
            } else {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn rot13_is_involution(text in "\\PC{0,80}") {
        let once = encrypt(&text, CipherId::Rot13, 0).unwrap();
        prop_assert_eq!(encrypt(&once, CipherId::Rot13, 0).unwrap(), text.clone());
        prop_assert_eq!(decrypt(&text, CipherId::Rot13, 0).unwrap(), encrypt(&text, CipherId::Rot13, 0).unwrap());
    }

    #[test]
    fn reverse_is_involution(text in "\\PC{0,80}") {
        let once = encrypt(&text, CipherId::Reverse, 0).unwrap();
        prop_assert_eq!(decrypt(&once, CipherId::Reverse, 0).unwrap(), text);
    }

    #[test]
    fn base64_roundtrip_unicode(text in "\\PC{0,80}") {
        let enc = encrypt(&text, CipherId::Base64, 0).unwrap();
        prop_assert_eq!(decrypt(&enc, CipherId::Base64, 0).unwrap(), text);
    }

    #[test]
    fn url_roundtrip_unicode(text in "\\PC{0,80}") {
        let enc = encrypt(&text, CipherId::Url, 0).unwrap();
        prop_assert_eq!(decrypt(&enc, CipherId::Url, 0).unwrap(), text);
    }

    #[test]
    fn morse_roundtrip_table_chars(text in morse_text()) {
        let enc = encrypt(&text, CipherId::Morse, 0).unwrap();
        prop_assert_eq!(decrypt(&enc, CipherId::Morse, 0).unwrap(), text);
    }

    #[test]
    fn morse_roundtrip_ignores_case(text in "[a-z0-9 ]{0,40}") {
        let enc = encrypt(&text, CipherId::Morse, 0).unwrap();
        prop_assert_eq!(decrypt(&enc, CipherId::Morse, 0).unwrap(), text.to_uppercase());
    }

    #[test]
    fn binary_and_hex_roundtrip_single_byte(text in latin1()) {
        for id in [CipherId::Binary, CipherId::Hex] {
            let enc = encrypt(&text, id, 0).unwrap();
            prop_assert_eq!(decrypt(&enc, id, 0).unwrap(), text.clone());
        }
    }

    #[test]
    fn confidence_bounded(candidate in "\\PC{0,60}") {
        let r = analyze(&candidate);
        if r.reasons.is_empty() {
            prop_assert_eq!(r.confidence, 40);
        } else {
            prop_assert!((40..=95).contains(&r.confidence));
        }
    }

    #[test]
    fn confidence_bounded_for_urls(path in "[a-z/@]{0,300}", port in 1u16..) {
        let r = analyze(&format!("https://login.example.tk:{port}/{path}"));
        prop_assert!(r.confidence >= 40 && r.confidence <= 95);
        prop_assert!(!r.reasons.is_empty());
    }
}

#[test]
fn malformed_decode_is_error_not_empty() {
    assert!(decrypt("01x0", CipherId::Binary, 0).is_err());
    assert!(decrypt("4g", CipherId::Hex, 0).is_err());
    assert!(decrypt("%E0%A4%A", CipherId::Url, 0).is_err());
    assert!(decrypt("@@@@", CipherId::Base64, 0).is_err());
}

#[test]
fn morse_unmapped_chars_pass_through() {
    let enc = encrypt("A1#", CipherId::Morse, 0).unwrap();
    assert_eq!(enc, ".- .---- #");
    assert_eq!(decrypt(&enc, CipherId::Morse, 0).unwrap(), "A1#");
}
