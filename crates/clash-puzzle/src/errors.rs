//! Puzzle Errors
//!
//! Error types for puzzle assembly and challenges.

use clash_core::Difficulty;
use thiserror::Error;

/// Result type for puzzle operations
pub type PuzzleResult<T> = Result<T, PuzzleError>;

/// Puzzle errors
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// Codec or key generation failed
    #[error("Cipher error: {0}")]
    Cipher(#[from] clash_cipher::CipherError),

    /// Phrase source had nothing for the requested tier
    #[error("No phrase available for {0} difficulty")]
    NoPhraseAvailable(Difficulty),

    /// Phrase bank could not be read or parsed
    #[error("Phrase bank error: {0}")]
    PhraseBank(String),

    /// Challenge step index out of range
    #[error("Challenge has {len} steps, no step {index}")]
    InvalidStep { index: usize, len: usize },
}
