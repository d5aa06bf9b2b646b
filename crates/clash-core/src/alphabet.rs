//! Alphabet Transform Primitives
//!
//! Ring arithmetic over the 26-letter Latin alphabet. Upper and lower case
//! are two separate rings, so a shifted letter always keeps its case.

use crate::constants::ALPHABET_LEN;

/// Check for an ASCII letter (`A-Z` or `a-z`)
#[inline]
pub fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Position of a letter in its ring (`A`/`a` = 0 ... `Z`/`z` = 25)
///
/// Returns `None` for anything that is not an ASCII letter.
#[inline]
pub fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(c as u8 - b'A')
    } else if c.is_ascii_lowercase() {
        Some(c as u8 - b'a')
    } else {
        None
    }
}

/// Letter at `index` (taken mod 26) in the upper or lower ring
#[inline]
pub fn letter_from_index(index: u8, uppercase: bool) -> char {
    let base = if uppercase { b'A' } else { b'a' };
    (base + index % ALPHABET_LEN) as char
}

/// Shift a letter `n` positions within its own case ring
///
/// Negative `n` shifts backwards. Non-letters are returned unchanged.
///
/// # Examples
/// ```
/// use clash_core::shift_letter;
///
/// assert_eq!(shift_letter('x', 3), 'a');
/// assert_eq!(shift_letter('C', -3), 'Z');
/// assert_eq!(shift_letter('-', 5), '-');
/// ```
pub fn shift_letter(c: char, n: i32) -> char {
    match letter_index(c) {
        Some(index) => {
            let shifted = (index as i32 + n).rem_euclid(ALPHABET_LEN as i32) as u8;
            letter_from_index(shifted, c.is_ascii_uppercase())
        }
        None => c,
    }
}

/// Reflect a letter within its case ring (A↔Z, B↔Y, ...)
///
/// Non-letters are returned unchanged. Applying it twice is the identity.
pub fn mirror_letter(c: char) -> char {
    match letter_index(c) {
        Some(index) => letter_from_index(ALPHABET_LEN - 1 - index, c.is_ascii_uppercase()),
        None => c,
    }
}
