//! Reverse Cipher
//!
//! Reverses the character order of the whole string. Self-inverse.

/// Reverse `text` by Unicode scalar value
pub fn transform(text: &str) -> String {
    text.chars().rev().collect()
}

/// Fixed hint text
pub fn hint() -> String {
    "Reverse: read the message backwards".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(transform("HELLO WORLD"), "DLROW OLLEH");
        assert_eq!(transform(""), "");
    }

    #[test]
    fn test_self_inverse() {
        let text = "Never odd or even, 42.";
        assert_eq!(transform(&transform(text)), text);
    }
}
