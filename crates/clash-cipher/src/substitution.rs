//! Monoalphabetic Substitution
//!
//! Each letter maps through a fixed permutation of the alphabet. The inverse
//! table is computed once when the key is built.

use serde::{Deserialize, Serialize};
use std::fmt;

use clash_core::{letter_from_index, letter_index, ALPHABET_LEN};

use crate::errors::{CipherError, CipherResult};

const N: usize = ALPHABET_LEN as usize;

/// Bijection over the 26 letters
///
/// Serialises as the 26-letter image of `A..Z`, e.g.
/// `"QWERTYUIOPASDFGHJKLZXCVBNM"`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubstitutionKey {
    forward: [u8; N],
    inverse: [u8; N],
}

impl SubstitutionKey {
    /// Build from a permutation of `0..26`
    pub fn from_permutation(forward: [u8; N]) -> CipherResult<Self> {
        let mut inverse = [u8::MAX; N];
        for (plain, &cipher) in forward.iter().enumerate() {
            let slot = inverse.get_mut(cipher as usize).ok_or_else(|| {
                CipherError::InvalidKey(format!("substitution target {} is not a letter", cipher))
            })?;
            if *slot != u8::MAX {
                return Err(CipherError::InvalidKey(format!(
                    "substitution maps two letters to {}",
                    letter_from_index(cipher, true)
                )));
            }
            *slot = plain as u8;
        }
        Ok(Self { forward, inverse })
    }

    /// Build from the image of `A..Z` (case-insensitive, 26 letters)
    pub fn from_mapping(mapping: &str) -> CipherResult<Self> {
        let indices: Vec<u8> = mapping
            .chars()
            .map(|c| {
                letter_index(c).ok_or_else(|| {
                    CipherError::InvalidKey(format!("substitution target {:?} is not a letter", c))
                })
            })
            .collect::<CipherResult<_>>()?;

        let forward: [u8; N] = indices.try_into().map_err(|v: Vec<u8>| {
            CipherError::InvalidKey(format!(
                "substitution mapping needs {} letters, got {}",
                N,
                v.len()
            ))
        })?;

        Self::from_permutation(forward)
    }

    /// Identity mapping (every letter maps to itself)
    pub fn identity() -> Self {
        let mut forward = [0u8; N];
        for (i, slot) in forward.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self {
            forward,
            inverse: forward,
        }
    }

    /// Image of a letter under the forward map, case preserved
    pub fn map(&self, c: char) -> char {
        Self::lookup(&self.forward, c)
    }

    /// Image of a letter under the inverse map, case preserved
    pub fn unmap(&self, c: char) -> char {
        Self::lookup(&self.inverse, c)
    }

    /// Forward mapping as 26 uppercase letters
    pub fn mapping(&self) -> String {
        self.forward
            .iter()
            .map(|&i| letter_from_index(i, true))
            .collect()
    }

    fn lookup(table: &[u8; N], c: char) -> char {
        match letter_index(c) {
            Some(i) => letter_from_index(table[i as usize], c.is_ascii_uppercase()),
            None => c,
        }
    }
}

impl TryFrom<String> for SubstitutionKey {
    type Error = CipherError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SubstitutionKey::from_mapping(&value)
    }
}

impl From<SubstitutionKey> for String {
    fn from(key: SubstitutionKey) -> Self {
        key.mapping()
    }
}

impl fmt::Debug for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubstitutionKey").field(&self.mapping()).finish()
    }
}

/// Map every letter through the key
pub fn encode(text: &str, key: &SubstitutionKey) -> String {
    text.chars().map(|c| key.map(c)).collect()
}

/// Map every letter through the inverse key
pub fn decode(text: &str, key: &SubstitutionKey) -> String {
    text.chars().map(|c| key.unmap(c)).collect()
}

/// Generic hint; tiered letter reveals are added by the puzzle layer
pub fn hint() -> String {
    "Substitution: each letter always stands for the same other letter".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const QWERTY: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

    #[test]
    fn test_encode_preserves_case() {
        let key = SubstitutionKey::from_mapping(QWERTY).unwrap();
        assert_eq!(encode("Hello, World", &key), "Itssg, Vgksr");
    }

    #[test]
    fn test_round_trip() {
        let key = SubstitutionKey::from_mapping(QWERTY).unwrap();
        let text = "Pack my box with five dozen liquor jugs!";
        assert_eq!(decode(&encode(text, &key), &key), text);
    }

    #[test]
    fn test_rejects_duplicate_target() {
        let err = SubstitutionKey::from_mapping("AACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap_err();
        assert!(matches!(err, CipherError::InvalidKey(_)));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(SubstitutionKey::from_mapping("ABC").is_err());
        assert!(SubstitutionKey::from_mapping("ABCDEFGHIJKLMNOPQRSTUVWXY1").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let mut perm = [0u8; N];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = i as u8;
        }
        perm[3] = 40;
        assert!(SubstitutionKey::from_permutation(perm).is_err());
    }

    #[test]
    fn test_identity() {
        let key = SubstitutionKey::identity();
        assert_eq!(encode("Same Text", &key), "Same Text");
        assert_eq!(key.mapping(), clash_core::ALPHABET);
    }

    #[test]
    fn test_serde_as_mapping_string() {
        let key = SubstitutionKey::from_mapping(QWERTY).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", QWERTY));
        let back: SubstitutionKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
