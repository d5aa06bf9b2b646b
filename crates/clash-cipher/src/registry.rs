//! Codec Registry
//!
//! Single dispatch point from a ([`CipherVariant`], [`CipherParams`]) pair to
//! the codec functions. Parameters are checked here once, so the codec
//! modules can assume well-formed keys.

use tracing::debug;

use crate::errors::{CipherError, CipherResult};
use crate::params::CipherParams;
use crate::playfair::PlayfairMatrix;
use crate::variant::CipherVariant;
use crate::{atbash, binary, caesar, morse, playfair, reverse, substitution, transposition, vigenere};

/// Encode `plaintext`, returning `(ciphertext, hint)`
///
/// The hint is the family's base hint; difficulty scaling happens in the
/// puzzle layer. Text that this family would reduce to nothing (no
/// letters for Playfair, nothing in the table for Morse) is `EmptyInput`.
pub fn encode(
    plaintext: &str,
    variant: CipherVariant,
    params: &CipherParams,
) -> CipherResult<(String, String)> {
    check(plaintext, variant, params)?;
    if variant.normalize(plaintext).trim().is_empty() {
        return Err(CipherError::EmptyInput);
    }

    let encoded = match params {
        CipherParams::Caesar { shift } => (caesar::encode(plaintext, *shift), caesar::hint(*shift)),
        CipherParams::Atbash => (atbash::transform(plaintext), atbash::hint()),
        CipherParams::Vigenere { key } => (vigenere::encode(plaintext, key), vigenere::hint(key)),
        CipherParams::Substitution { key } => {
            (substitution::encode(plaintext, key), substitution::hint())
        }
        CipherParams::Transposition { columns } => (
            transposition::encode(plaintext, *columns),
            transposition::hint(*columns),
        ),
        CipherParams::Playfair { key } => (
            playfair::encode(plaintext, &PlayfairMatrix::from_key(key)),
            playfair::hint(key),
        ),
        CipherParams::Reverse => (reverse::transform(plaintext), reverse::hint()),
        CipherParams::Morse => (morse::encode(plaintext), morse::hint()),
        CipherParams::Binary => (binary::encode(plaintext), binary::hint()),
    };

    debug!(
        "Encoded {} chars with {} into {} chars",
        plaintext.chars().count(),
        variant,
        encoded.0.chars().count()
    );
    Ok(encoded)
}

/// Decode `ciphertext` with the same family and parameters used to encode
pub fn decode(
    ciphertext: &str,
    variant: CipherVariant,
    params: &CipherParams,
) -> CipherResult<String> {
    check(ciphertext, variant, params)?;

    let decoded = match params {
        CipherParams::Caesar { shift } => caesar::decode(ciphertext, *shift),
        CipherParams::Atbash => atbash::transform(ciphertext),
        CipherParams::Vigenere { key } => vigenere::decode(ciphertext, key),
        CipherParams::Substitution { key } => substitution::decode(ciphertext, key),
        CipherParams::Transposition { columns } => transposition::decode(ciphertext, *columns),
        CipherParams::Playfair { key } => {
            playfair::decode(ciphertext, &PlayfairMatrix::from_key(key))
        }
        CipherParams::Reverse => reverse::transform(ciphertext),
        CipherParams::Morse => morse::decode(ciphertext),
        CipherParams::Binary => binary::decode(ciphertext)?,
    };

    debug!("Decoded {} ciphertext", variant);
    Ok(decoded)
}

fn check(text: &str, variant: CipherVariant, params: &CipherParams) -> CipherResult<()> {
    if text.trim().is_empty() {
        return Err(CipherError::EmptyInput);
    }
    if params.variant() != variant {
        return Err(CipherError::ParamsMismatch {
            variant,
            params: params.variant(),
        });
    }
    params.validate()
}
