//! Puzzle Assembler
//!
//! Picks a family (when none is requested), generates its key material,
//! encodes the phrase and scales the hint to the tier.
//!
//! Hard binary puzzles are rendered as hex instead of 8-bit groups; the
//! binary decoder reads both.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use clash_cipher::{binary, encode, CipherVariant};
use clash_core::Difficulty;

use crate::challenge::{build_scaled_challenge, Challenge};
use crate::config::EngineConfig;
use crate::errors::{PuzzleError, PuzzleResult};
use crate::hints::scale_hint;
use crate::keygen::{choose_variant, generate_scaled_params};
use crate::phrases::PhraseSource;
use crate::puzzle::Puzzle;

/// Stateful puzzle factory owning its RNG
pub struct PuzzleAssembler {
    rng: StdRng,
    config: EngineConfig,
}

impl PuzzleAssembler {
    /// Seeded from `config.seed`, or from entropy when unset
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, config }
    }

    /// Default configuration with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        })
    }

    /// Build a puzzle hiding `phrase`
    ///
    /// A requested variant is honoured at any difficulty; otherwise one is
    /// drawn from the tier's pool.
    pub fn generate(
        &mut self,
        phrase: &str,
        variant: Option<CipherVariant>,
        difficulty: Difficulty,
    ) -> PuzzleResult<Puzzle> {
        let variant = variant.unwrap_or_else(|| choose_variant(difficulty, &mut self.rng));
        let complexity = self.config.tier(difficulty).complexity;
        let params = generate_scaled_params(variant, difficulty, complexity, &mut self.rng)?;

        let (mut ciphertext, mut base_hint) = encode(phrase, variant, &params)?;
        if variant == CipherVariant::Binary && difficulty == Difficulty::Hard {
            ciphertext = binary::encode_hex(phrase);
            base_hint = binary::hex_hint();
        }

        let hint = scale_hint(
            &base_hint,
            &params,
            self.config.hint_level(difficulty),
            phrase,
            &mut self.rng,
        );

        info!(
            "Generated {} puzzle at {} difficulty ({} chars)",
            variant,
            difficulty,
            phrase.chars().count()
        );
        Ok(Puzzle::new(
            phrase.to_string(),
            ciphertext,
            params,
            hint,
            difficulty,
        ))
    }

    /// Build a puzzle from a phrase drawn out of `source`
    pub fn generate_from(
        &mut self,
        source: &dyn PhraseSource,
        variant: Option<CipherVariant>,
        difficulty: Difficulty,
    ) -> PuzzleResult<Puzzle> {
        let phrase = source
            .phrase(difficulty, &mut self.rng)
            .ok_or(PuzzleError::NoPhraseAvailable(difficulty))?;
        self.generate(&phrase, variant, difficulty)
    }

    /// Build a layered challenge hiding `message`
    pub fn challenge(&mut self, message: &str, difficulty: Difficulty) -> PuzzleResult<Challenge> {
        let complexity = self.config.tier(difficulty).complexity;
        build_scaled_challenge(message, difficulty, complexity, &mut self.rng)
    }

    /// Build a layered challenge from a message drawn out of `source`
    pub fn challenge_from(
        &mut self,
        source: &dyn PhraseSource,
        difficulty: Difficulty,
    ) -> PuzzleResult<Challenge> {
        let message = source
            .phrase(difficulty, &mut self.rng)
            .ok_or(PuzzleError::NoPhraseAvailable(difficulty))?;
        self.challenge(&message, difficulty)
    }
}

/// One-shot puzzle generation
///
/// With `rng_seed` set, the same arguments always yield the same puzzle.
pub fn generate_puzzle(
    phrase: &str,
    variant: Option<CipherVariant>,
    difficulty: Difficulty,
    rng_seed: Option<u64>,
) -> PuzzleResult<Puzzle> {
    let config = EngineConfig {
        seed: rng_seed,
        ..EngineConfig::default()
    };
    PuzzleAssembler::new(config).generate(phrase, variant, difficulty)
}
