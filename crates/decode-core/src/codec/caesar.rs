//! Caesar shift over ASCII letters.

/// Shift every ASCII letter forward by `shift` (reduced mod 26), keeping case.
/// Everything else passes through unchanged.
pub fn shift_letters(text: &str, shift: i64) -> String {
    let k = shift.rem_euclid(26) as u8;
    text.chars()
        .map(|c| match c {
            'a'..='z' => rotate(c, b'a', k),
            'A'..='Z' => rotate(c, b'A', k),
            _ => c,
        })
        .collect()
}

/// Inverse of [`shift_letters`] for the same `shift`.
pub fn unshift_letters(text: &str, shift: i64) -> String {
    shift_letters(text, 26 - shift.rem_euclid(26))
}

/// ROT13 is its own inverse.
pub fn rot13(text: &str) -> String {
    shift_letters(text, 13)
}

fn rotate(c: char, base: u8, k: u8) -> char {
    (((c as u8 - base + k) % 26) + base) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_forward_keeping_case() {
        assert_eq!(shift_letters("Hello, World!", 3), "Khoor, Zruog!");
        assert_eq!(shift_letters("xyz XYZ", 3), "abc ABC");
    }

    #[test]
    fn unshift_restores() {
        assert_eq!(unshift_letters("Khoor, Zruog!", 3), "Hello, World!");
    }

    #[test]
    fn zero_negative_and_large_shifts() {
        assert_eq!(shift_letters("abc", 0), "abc");
        assert_eq!(shift_letters("abc", 26), "abc");
        assert_eq!(shift_letters("abc", -1), "zab");
        assert_eq!(shift_letters("abc", 29), "def");
        assert_eq!(unshift_letters(&shift_letters("Attack", -40), -40), "Attack");
        assert_eq!(unshift_letters(&shift_letters("Edge", i64::MIN), i64::MIN), "Edge");
    }

    #[test]
    fn non_ascii_letters_untouched() {
        assert_eq!(shift_letters("café ß 123", 1), "dbgé ß 123");
    }

    #[test]
    fn rot13_is_involution() {
        assert_eq!(rot13("Why did the chicken?"), "Jul qvq gur puvpxra?");
        assert_eq!(rot13(&rot13("Why did the chicken?")), "Why did the chicken?");
    }
}
