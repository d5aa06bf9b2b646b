//! Caesar Cipher
//!
//! Every letter moves `shift` places along its case ring; everything else
//! stays where it is.

use clash_core::{shift_letter, ALPHABET_LEN};

/// Shift every letter forward by `shift`
pub fn encode(text: &str, shift: u8) -> String {
    text.chars().map(|c| shift_letter(c, shift as i32)).collect()
}

/// Shift every letter back by `shift`
pub fn decode(text: &str, shift: u8) -> String {
    // Same as shifting forward by 26 - shift
    text.chars()
        .map(|c| shift_letter(c, ALPHABET_LEN as i32 - shift as i32))
        .collect()
}

/// Hint naming the shift
pub fn hint(shift: u8) -> String {
    format!("Caesar shift: {}", shift)
}
