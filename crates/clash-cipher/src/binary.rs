//! Binary and Hex Character Codes
//!
//! Each printable ASCII character (after uppercasing) becomes one 8-bit
//! group or one 2-digit hex group. Anything else is dropped.
//!
//! ```text
//! "HI"  -->  "01001000 01001001"   (binary)
//! "HI"  -->  "48 49"               (hex)
//! ```
//!
//! The decoder accepts either rendering: each whitespace-separated token
//! must be a run of 8-bit binary groups or a run of 2-digit hex groups.

use crate::errors::{CipherError, CipherResult};

/// Uppercased, printable ASCII only
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| is_encodable(*c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Space-separated 8-bit groups
pub fn encode(text: &str) -> String {
    normalize(text)
        .bytes()
        .map(|b| format!("{:08b}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Space-separated 2-digit uppercase hex groups
pub fn encode_hex(text: &str) -> String {
    normalize(text)
        .bytes()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode binary or hex groups back to text
pub fn decode(text: &str) -> CipherResult<String> {
    let mut out = String::new();
    for token in text.split_whitespace() {
        let bytes = if is_binary_token(token) {
            parse_groups(token, 8, 2)?
        } else if is_hex_token(token) {
            parse_groups(token, 2, 16)?
        } else {
            return Err(CipherError::MalformedCiphertext(format!(
                "{:?} is neither 8-bit binary nor 2-digit hex",
                token
            )));
        };
        out.extend(bytes.into_iter().map(char::from).filter(|c| is_encodable(*c)));
    }
    Ok(out)
}

/// Fixed hint text for the binary rendering
pub fn hint() -> String {
    "Binary code: each character is 8 bits".to_string()
}

/// Fixed hint text for the hex rendering
pub fn hex_hint() -> String {
    "Hexadecimal code: each character is two hex digits".to_string()
}

fn is_encodable(c: char) -> bool {
    c.is_ascii_graphic() || c == ' '
}

fn is_binary_token(token: &str) -> bool {
    !token.is_empty() && token.len() % 8 == 0 && token.bytes().all(|b| b == b'0' || b == b'1')
}

fn is_hex_token(token: &str) -> bool {
    !token.is_empty() && token.len() % 2 == 0 && token.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_groups(token: &str, width: usize, radix: u32) -> CipherResult<Vec<u8>> {
    token
        .as_bytes()
        .chunks(width)
        .map(|chunk| {
            // chunks of an ASCII token are valid UTF-8
            let digits = std::str::from_utf8(chunk).unwrap_or_default();
            u8::from_str_radix(digits, radix)
                .map_err(|e| CipherError::MalformedCiphertext(format!("{:?}: {}", digits, e)))
        })
        .collect()
}
