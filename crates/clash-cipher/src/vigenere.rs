//! Vigenère Cipher
//!
//! A repeating key stream of Caesar shifts. The stream position only
//! advances on letters, so punctuation and spaces never consume key
//! characters and encode/decode stay aligned.

use serde::{Deserialize, Serialize};
use std::fmt;

use clash_core::{is_ascii_letter, letter_index, shift_letter};

use crate::errors::{CipherError, CipherResult};

/// Validated Vigenère key, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VigenereKey(String);

impl VigenereKey {
    /// Build a key from letters only (case-insensitive)
    pub fn new(key: &str) -> CipherResult<Self> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey("Vigenère key is empty".into()));
        }
        if let Some(bad) = key.chars().find(|c| !is_ascii_letter(*c)) {
            return Err(CipherError::InvalidKey(format!(
                "Vigenère key contains non-letter {:?}",
                bad
            )));
        }
        Ok(Self(key.to_ascii_uppercase()))
    }

    /// Key text (uppercase)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of key characters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated key
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shift for each key character (`A` = 0 ... `Z` = 25)
    pub fn shifts(&self) -> Vec<i32> {
        self.0
            .chars()
            .filter_map(letter_index)
            .map(|i| i as i32)
            .collect()
    }
}

impl TryFrom<String> for VigenereKey {
    type Error = CipherError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        VigenereKey::new(&value)
    }
}

impl From<VigenereKey> for String {
    fn from(key: VigenereKey) -> Self {
        key.0
    }
}

impl fmt::Display for VigenereKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encrypt with the key stream
pub fn encode(text: &str, key: &VigenereKey) -> String {
    apply(text, key, 1)
}

/// Decrypt with the key stream
pub fn decode(text: &str, key: &VigenereKey) -> String {
    apply(text, key, -1)
}

/// Hint revealing the key
pub fn hint(key: &VigenereKey) -> String {
    format!(
        "Vigenère key: {} (each letter shifts by the matching key letter)",
        key
    )
}

fn apply(text: &str, key: &VigenereKey, direction: i32) -> String {
    let shifts = key.shifts();
    let mut stream = 0usize;

    text.chars()
        .map(|c| {
            if is_ascii_letter(c) {
                let shift = shifts[stream % shifts.len()];
                stream += 1;
                shift_letter(c, direction * shift)
            } else {
                c
            }
        })
        .collect()
}
