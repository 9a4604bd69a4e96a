//! Digit validation.
//!
//! Only ASCII `0`-`9` count. Other Unicode digits (Arabic-Indic, fullwidth)
//! are rejected.

/// True iff `s` is exactly one character and that character is `0`-`9`.
pub fn is_valid_digit(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit())
}

/// Extract the valid-digit sequence from arbitrary text.
///
/// Keeps ASCII digits in their original order and stops after `limit` of them.
pub fn valid_digits(text: &str, limit: usize) -> Vec<String> {
    text.chars()
        .filter(char::is_ascii_digit)
        .take(limit)
        .map(String::from)
        .collect()
}
