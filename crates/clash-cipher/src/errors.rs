//! Error types for clash-cipher

use thiserror::Error;

use crate::variant::CipherVariant;

/// Errors that can occur while encoding or decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Variant name is not part of the registry
    #[error("Unknown cipher variant: {0}")]
    UnknownVariant(String),

    /// Malformed or out-of-range key material
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Nothing to encode or decode
    #[error("Input text is empty")]
    EmptyInput,

    /// Parameters belong to a different cipher family
    #[error("Parameters for {params} cannot drive a {variant} codec")]
    ParamsMismatch {
        variant: CipherVariant,
        params: CipherVariant,
    },

    /// Ciphertext cannot be parsed by a table-driven decoder
    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),
}

/// Result type for clash-cipher operations
pub type CipherResult<T> = Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = CipherError::InvalidKey("shift 0 is outside 1..=25".into());
        assert_eq!(err.to_string(), "Invalid key: shift 0 is outside 1..=25");
    }

    #[test]
    fn test_display_params_mismatch() {
        let err = CipherError::ParamsMismatch {
            variant: CipherVariant::Caesar,
            params: CipherVariant::Vigenere,
        };
        assert_eq!(
            err.to_string(),
            "Parameters for vigenere cannot drive a caesar codec"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CipherError::EmptyInput, CipherError::EmptyInput);
        assert_ne!(
            CipherError::EmptyInput,
            CipherError::UnknownVariant("rot13".into())
        );
    }
}
