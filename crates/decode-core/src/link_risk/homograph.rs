//! Brand lookalike detection, including IDN homographs.
//!
//! Hosts arrive in ASCII form (`xn--` labels). Besides matching the typosquat
//! fragments directly, each punycode label is decoded and common Cyrillic,
//! Greek and Latin-extended confusables are folded to the Latin letter they
//! imitate. A folded host that names a brand its ASCII form does not is a
//! homograph of that brand.

use super::lists::{BrandLookalike, BRAND_LOOKALIKES};

const ACE_PREFIX: &str = "xn--";

/// True when `host` matches a known typosquat pattern, contains
/// `<brand>-secure`, or is a homograph of a brand name.
pub fn looks_like_brand_spoof(host: &str) -> bool {
    let lower = host.to_lowercase();
    if BRAND_LOOKALIKES.iter().any(|entry| matches_entry(entry, &lower)) {
        return true;
    }

    let folded = skeleton(&lower);
    if folded == lower {
        return false;
    }
    BRAND_LOOKALIKES.iter().any(|entry| {
        matches_entry(entry, &folded)
            || (folded.contains(entry.brand) && !lower.contains(entry.brand))
    })
}

fn matches_entry(entry: &BrandLookalike, host: &str) -> bool {
    entry.patterns.iter().any(|p| host.contains(p))
        || host.contains(&format!("{}-secure", entry.brand))
}

/// Decode punycode labels and fold confusable letters to Latin.
pub fn skeleton(host: &str) -> String {
    host.split('.')
        .map(|label| {
            let unicode = label
                .strip_prefix(ACE_PREFIX)
                .and_then(idna::punycode::decode_to_string)
                .unwrap_or_else(|| label.to_string());
            unicode.chars().map(fold_confusable).collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn fold_confusable(c: char) -> char {
    match c {
        // Cyrillic
        '\u{0430}' => 'a',
        '\u{0435}' => 'e',
        '\u{043e}' => 'o',
        '\u{0440}' => 'p',
        '\u{0441}' => 'c',
        '\u{0443}' => 'y',
        '\u{0445}' => 'x',
        '\u{0455}' => 's',
        '\u{0456}' => 'i',
        '\u{0458}' => 'j',
        '\u{0461}' => 'w',
        '\u{04bb}' => 'h',
        '\u{04cf}' => 'l',
        '\u{0501}' => 'd',
        '\u{051b}' => 'q',
        // Greek
        '\u{03b1}' => 'a',
        '\u{03b9}' => 'i',
        '\u{03ba}' => 'k',
        '\u{03bd}' => 'v',
        '\u{03bf}' => 'o',
        '\u{03c1}' => 'p',
        // Latin extended / Armenian
        '\u{0251}' => 'a',
        '\u{0261}' => 'g',
        '\u{0578}' => 'n',
        '\u{057d}' => 'u',
        '\u{217c}' => 'l',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typosquat_patterns() {
        assert!(looks_like_brand_spoof("paypa1.com"));
        assert!(looks_like_brand_spoof("www.secure-paypal.net"));
        assert!(looks_like_brand_spoof("g00gle.com"));
        assert!(looks_like_brand_spoof("ARNAZON.shop"));
    }

    #[test]
    fn brand_dash_secure() {
        assert!(looks_like_brand_spoof("google-secure.example"));
        assert!(looks_like_brand_spoof("microsoft-secure.net"));
    }

    #[test]
    fn real_domains_pass() {
        assert!(!looks_like_brand_spoof("paypal.com"));
        assert!(!looks_like_brand_spoof("www.apple.com"));
        assert!(!looks_like_brand_spoof("example.com"));
        assert!(!looks_like_brand_spoof(""));
    }

    #[test]
    fn skeleton_decodes_and_folds() {
        assert_eq!(skeleton("xn--pple-43d.com"), "apple.com");
        assert_eq!(skeleton("example.com"), "example.com");
    }

    #[test]
    fn cyrillic_homograph() {
        assert!(looks_like_brand_spoof("xn--pple-43d.com"));
    }

    #[test]
    fn unrelated_idn_is_not_a_brand() {
        // bücher.de
        assert!(!looks_like_brand_spoof("xn--bcher-kva.de"));
    }
}
