//! Cipher Variants
//!
//! The closed set of cipher families the registry knows about.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CipherError;
use crate::{binary, morse, playfair, transposition};

/// Cipher family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherVariant {
    /// Fixed shift of every letter
    Caesar,
    /// Mirrored alphabet (A↔Z)
    Atbash,
    /// Repeating key stream of shifts
    Vigenere,
    /// Arbitrary permutation of the alphabet
    Substitution,
    /// Columnar transposition
    Transposition,
    /// Digraph substitution over a 5x5 key square
    Playfair,
    /// Whole-string reversal
    Reverse,
    /// International Morse code
    Morse,
    /// 8-bit binary (or 2-digit hex) character codes
    Binary,
}

impl CipherVariant {
    /// Every variant, in registry order
    pub const ALL: [CipherVariant; 9] = [
        CipherVariant::Caesar,
        CipherVariant::Atbash,
        CipherVariant::Vigenere,
        CipherVariant::Substitution,
        CipherVariant::Transposition,
        CipherVariant::Playfair,
        CipherVariant::Reverse,
        CipherVariant::Morse,
        CipherVariant::Binary,
    ];

    /// Lowercase identifier
    pub fn name(self) -> &'static str {
        match self {
            CipherVariant::Caesar => "caesar",
            CipherVariant::Atbash => "atbash",
            CipherVariant::Vigenere => "vigenere",
            CipherVariant::Substitution => "substitution",
            CipherVariant::Transposition => "transposition",
            CipherVariant::Playfair => "playfair",
            CipherVariant::Reverse => "reverse",
            CipherVariant::Morse => "morse",
            CipherVariant::Binary => "binary",
        }
    }

    /// Human-readable family name, used in hints
    pub fn display_name(self) -> &'static str {
        match self {
            CipherVariant::Caesar => "Caesar Cipher",
            CipherVariant::Atbash => "Atbash Cipher",
            CipherVariant::Vigenere => "Vigenère Cipher",
            CipherVariant::Substitution => "Substitution Cipher",
            CipherVariant::Transposition => "Transposition Cipher",
            CipherVariant::Playfair => "Playfair Cipher",
            CipherVariant::Reverse => "Reverse Cipher",
            CipherVariant::Morse => "Morse Code",
            CipherVariant::Binary => "Binary Code",
        }
    }

    /// Whether the family needs key material
    pub fn has_params(self) -> bool {
        matches!(
            self,
            CipherVariant::Caesar
                | CipherVariant::Vigenere
                | CipherVariant::Substitution
                | CipherVariant::Transposition
                | CipherVariant::Playfair
        )
    }

    /// Whether decode(encode(x)) == x for arbitrary text
    ///
    /// Only these variants can be layered on top of each other.
    pub fn is_lossless(self) -> bool {
        matches!(
            self,
            CipherVariant::Caesar
                | CipherVariant::Atbash
                | CipherVariant::Vigenere
                | CipherVariant::Substitution
                | CipherVariant::Reverse
        )
    }

    /// What a round trip through this family yields for `text`
    pub fn normalize(self, text: &str) -> String {
        match self {
            CipherVariant::Caesar
            | CipherVariant::Atbash
            | CipherVariant::Vigenere
            | CipherVariant::Substitution
            | CipherVariant::Reverse => text.to_string(),
            CipherVariant::Transposition => transposition::normalize(text),
            CipherVariant::Playfair => playfair::normalize(text),
            CipherVariant::Morse => morse::normalize(text),
            CipherVariant::Binary => binary::normalize(text),
        }
    }
}

impl fmt::Display for CipherVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherVariant {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CipherVariant::ALL
            .into_iter()
            .find(|v| v.name() == wanted)
            .ok_or(CipherError::UnknownVariant(s.to_string()))
    }
}
