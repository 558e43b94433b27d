//! International Morse code.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Forward table. Codes are unique; the inverse is derived from this.
const MORSE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', "/"),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('!', "-.-.--"),
    ('\'', ".----."),
    ('"', ".-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('/', "-..-."),
    ('_', "..--.-"),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('@', ".--.-."),
];

fn table() -> &'static HashMap<char, &'static str> {
    static TABLE: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| MORSE.iter().copied().collect())
}

fn inverse() -> &'static HashMap<&'static str, char> {
    static INVERSE: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
    INVERSE.get_or_init(|| MORSE.iter().map(|&(c, code)| (code, c)).collect())
}

/// Characters the table can encode (upper-case letters, digits, space, punctuation).
pub fn alphabet() -> impl Iterator<Item = char> {
    MORSE.iter().map(|&(c, _)| c)
}

/// Upper-case, then map each character to its code; unknown characters are
/// emitted as themselves. Tokens are joined by single spaces.
pub fn encode(text: &str) -> String {
    let table = table();
    text.to_uppercase()
        .chars()
        .map(|c| match table.get(&c) {
            Some(code) => (*code).to_string(),
            None => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split on single spaces and map each token back; unknown tokens pass through.
pub fn decode(text: &str) -> String {
    let inverse = inverse();
    text.split(' ')
        .map(|token| match inverse.get(token) {
            Some(c) => c.to_string(),
            None => token.to_string(),
        })
        .collect()
}
