//! Cipher Parameters
//!
//! One payload shape per [`CipherVariant`]. Key types that need
//! preprocessing (Vigenère shifts, substitution tables) validate themselves
//! on construction, so a `CipherParams` that deserialised successfully only
//! needs the range checks in [`CipherParams::validate`].

use serde::{Deserialize, Serialize};

use clash_core::{CAESAR_SHIFT_RANGE, MIN_TRANSPOSITION_COLUMNS};

use crate::errors::{CipherError, CipherResult};
use crate::substitution::SubstitutionKey;
use crate::variant::CipherVariant;
use crate::vigenere::VigenereKey;

/// Key material for one cipher family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum CipherParams {
    Caesar { shift: u8 },
    Atbash,
    Vigenere { key: VigenereKey },
    Substitution { key: SubstitutionKey },
    Transposition { columns: usize },
    Playfair { key: String },
    Reverse,
    Morse,
    Binary,
}

impl CipherParams {
    /// Caesar shift, checked against 1..=25
    pub fn caesar(shift: u8) -> CipherResult<Self> {
        let params = CipherParams::Caesar { shift };
        params.validate()?;
        Ok(params)
    }

    /// Vigenère key (letters only, case-insensitive)
    pub fn vigenere(key: &str) -> CipherResult<Self> {
        Ok(CipherParams::Vigenere {
            key: VigenereKey::new(key)?,
        })
    }

    /// Substitution from a prebuilt key
    pub fn substitution(key: SubstitutionKey) -> Self {
        CipherParams::Substitution { key }
    }

    /// Columnar transposition with at least two columns
    pub fn transposition(columns: usize) -> CipherResult<Self> {
        let params = CipherParams::Transposition { columns };
        params.validate()?;
        Ok(params)
    }

    /// Playfair keyword
    pub fn playfair(key: &str) -> CipherResult<Self> {
        let params = CipherParams::Playfair {
            key: key.to_string(),
        };
        params.validate()?;
        Ok(params)
    }

    /// Parameters for a family that takes none
    ///
    /// Returns `None` for keyed families.
    pub fn stateless(variant: CipherVariant) -> Option<Self> {
        match variant {
            CipherVariant::Atbash => Some(CipherParams::Atbash),
            CipherVariant::Reverse => Some(CipherParams::Reverse),
            CipherVariant::Morse => Some(CipherParams::Morse),
            CipherVariant::Binary => Some(CipherParams::Binary),
            CipherVariant::Caesar
            | CipherVariant::Vigenere
            | CipherVariant::Substitution
            | CipherVariant::Transposition
            | CipherVariant::Playfair => None,
        }
    }

    /// Family this payload belongs to
    pub fn variant(&self) -> CipherVariant {
        match self {
            CipherParams::Caesar { .. } => CipherVariant::Caesar,
            CipherParams::Atbash => CipherVariant::Atbash,
            CipherParams::Vigenere { .. } => CipherVariant::Vigenere,
            CipherParams::Substitution { .. } => CipherVariant::Substitution,
            CipherParams::Transposition { .. } => CipherVariant::Transposition,
            CipherParams::Playfair { .. } => CipherVariant::Playfair,
            CipherParams::Reverse => CipherVariant::Reverse,
            CipherParams::Morse => CipherVariant::Morse,
            CipherParams::Binary => CipherVariant::Binary,
        }
    }

    /// Range checks for the plain-integer and plain-string payloads
    pub fn validate(&self) -> CipherResult<()> {
        match self {
            CipherParams::Caesar { shift } => {
                let (min, max) = CAESAR_SHIFT_RANGE;
                if !(min..=max).contains(shift) {
                    return Err(CipherError::InvalidKey(format!(
                        "Caesar shift {} is outside {}..={}",
                        shift, min, max
                    )));
                }
            }
            CipherParams::Transposition { columns } => {
                if *columns < MIN_TRANSPOSITION_COLUMNS {
                    return Err(CipherError::InvalidKey(format!(
                        "transposition needs at least {} columns, got {}",
                        MIN_TRANSPOSITION_COLUMNS, columns
                    )));
                }
            }
            CipherParams::Playfair { key } => {
                if !key.chars().any(|c| c.is_ascii_alphabetic()) {
                    return Err(CipherError::InvalidKey(
                        "Playfair key must contain at least one letter".into(),
                    ));
                }
            }
            CipherParams::Vigenere { .. }
            | CipherParams::Substitution { .. }
            | CipherParams::Atbash
            | CipherParams::Reverse
            | CipherParams::Morse
            | CipherParams::Binary => {}
        }
        Ok(())
    }
}
