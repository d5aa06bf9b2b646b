//! # Clash Puzzle
//!
//! Puzzle assembly on top of the Cipher Clash codecs.
//!
//! ## Components
//!
//! - **Keygen**: tier-scaled key material for every family
//! - **Hints**: reveals key material in proportion to tier complexity
//! - **Assembler**: phrase + tier in, immutable [`Puzzle`] out
//! - **Verifier**: similarity scoring of player answers
//! - **Phrases**: pluggable plaintext sources with a built-in bank
//! - **Challenge**: multi-layer puzzles built from lossless ciphers
//! - **Config**: TOML-backed engine settings
//!
//! ## Usage
//!
//! ```
//! use clash_core::Difficulty;
//! use clash_puzzle::{generate_puzzle, verify};
//!
//! let puzzle = generate_puzzle("HELLO WORLD", None, Difficulty::Easy, Some(7)).unwrap();
//! let verdict = verify(&puzzle, "hello world");
//! assert!(verdict.correct);
//! assert_eq!(verdict.score, 100);
//! ```

pub mod assembler;
pub mod challenge;
pub mod config;
pub mod errors;
pub mod hints;
pub mod keygen;
pub mod phrases;
pub mod puzzle;
pub mod verifier;

pub use assembler::{generate_puzzle, PuzzleAssembler};
pub use challenge::{build_challenge, build_scaled_challenge, Challenge, ChallengeStep};
pub use config::{ConfigError, EngineConfig, EngineConfigBuilder, TierSettings};
pub use errors::*;
pub use hints::HintLevel;
pub use phrases::{PhraseBank, PhraseSource};
pub use puzzle::Puzzle;
pub use verifier::{similarity, verify, Verdict, Verifier};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::assembler::{generate_puzzle, PuzzleAssembler};
    pub use crate::challenge::{Challenge, ChallengeStep};
    pub use crate::config::EngineConfig;
    pub use crate::errors::*;
    pub use crate::phrases::{PhraseBank, PhraseSource};
    pub use crate::puzzle::Puzzle;
    pub use crate::verifier::{verify, Verdict, Verifier};
    pub use clash_cipher::prelude::*;
    pub use clash_core::Difficulty;
}
