//! Atbash Cipher
//!
//! Mirrors the alphabet. Encoding and decoding are the same function.

use clash_core::mirror_letter;

/// Mirror every letter (self-inverse)
pub fn transform(text: &str) -> String {
    text.chars().map(mirror_letter).collect()
}

/// Fixed hint text
pub fn hint() -> String {
    "Atbash: the alphabet is mirrored (A↔Z, B↔Y, ...)".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_words() {
        assert_eq!(transform("Hello, World"), "Svool, Dliow");
        assert_eq!(transform("AZ az"), "ZA za");
    }

    #[test]
    fn test_self_inverse() {
        for text in ["", "abc", "Wizard of Oz!", "0123 ~`'", "ÀB ç"] {
            assert_eq!(transform(&transform(text)), text);
        }
    }
}
