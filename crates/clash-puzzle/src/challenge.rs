//! Multi-Step Challenges
//!
//! A challenge layers several lossless ciphers over one message. Step 0 is
//! the outermost layer: its ciphertext is what the player starts with, and
//! its solution is the ciphertext of step 1.
//!
//! ```text
//! message --enc[n-1]--> ... --enc[1]--> c1 --enc[0]--> c0   (shown)
//! c0 --dec[0]--> c1 --dec[1]--> ... --dec[n-1]--> message
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use clash_cipher::{decode, encode, CipherParams, CipherVariant};
use clash_core::Difficulty;

use crate::errors::{PuzzleError, PuzzleResult};
use crate::keygen::{generate_scaled_params, variants_for};
use crate::verifier::{Verdict, Verifier};

/// One layer of a challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeStep {
    variant: CipherVariant,
    params: CipherParams,
    ciphertext: String,
    solution: String,
}

impl ChallengeStep {
    pub fn variant(&self) -> CipherVariant {
        self.variant
    }

    pub fn params(&self) -> &CipherParams {
        &self.params
    }

    /// Text presented for this step
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Text recovered by decoding this step
    pub fn solution(&self) -> &str {
        &self.solution
    }
}

/// Layered puzzle, outermost step first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    difficulty: Difficulty,
    message: String,
    steps: Vec<ChallengeStep>,
}

/// Number of layers for a tier
pub fn step_count(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 2,
        Difficulty::Medium => 3,
        Difficulty::Hard => 4,
    }
}

/// Families that may be layered at a tier
pub fn challenge_variants(difficulty: Difficulty) -> Vec<CipherVariant> {
    variants_for(difficulty)
        .iter()
        .copied()
        .filter(|v| v.is_lossless())
        .collect()
}

fn pick_variants<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Vec<CipherVariant> {
    let count = step_count(difficulty);
    let mut pool = challenge_variants(difficulty);
    pool.shuffle(rng);

    let mut picked: Vec<CipherVariant> = pool.iter().copied().take(count).collect();
    while picked.len() < count {
        let last = picked.last().copied();
        let candidates: Vec<CipherVariant> =
            pool.iter().copied().filter(|v| Some(*v) != last).collect();
        match candidates.choose(rng) {
            Some(v) => picked.push(*v),
            None => break,
        }
    }
    picked
}

/// Build a challenge hiding `message` at `difficulty`
pub fn build_challenge<R: Rng + ?Sized>(
    message: &str,
    difficulty: Difficulty,
    rng: &mut R,
) -> PuzzleResult<Challenge> {
    build_scaled_challenge(message, difficulty, difficulty.complexity(), rng)
}

/// Build a challenge whose layer keys follow `complexity`
pub fn build_scaled_challenge<R: Rng + ?Sized>(
    message: &str,
    difficulty: Difficulty,
    complexity: f64,
    rng: &mut R,
) -> PuzzleResult<Challenge> {
    let variants = pick_variants(difficulty, rng);

    let mut steps = Vec::with_capacity(variants.len());
    let mut current = message.to_string();
    for variant in variants {
        let params = generate_scaled_params(variant, difficulty, complexity, rng)?;
        let (ciphertext, _) = encode(&current, variant, &params)?;
        debug!("Challenge layer {} applied", variant);
        steps.push(ChallengeStep {
            variant,
            params,
            solution: std::mem::replace(&mut current, ciphertext.clone()),
            ciphertext,
        });
    }
    steps.reverse();

    info!(
        "Built {}-step challenge at {} difficulty",
        steps.len(),
        difficulty
    );
    Ok(Challenge {
        difficulty,
        message: message.to_string(),
        steps,
    })
}

impl Challenge {
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Final hidden message
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn steps(&self) -> &[ChallengeStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Ciphertext the player starts from
    pub fn ciphertext(&self) -> &str {
        self.steps
            .first()
            .map(|s| s.ciphertext.as_str())
            .unwrap_or(&self.message)
    }

    /// Check an answer for one step with the built-in verifier
    pub fn verify_step(&self, index: usize, answer: &str) -> PuzzleResult<Verdict> {
        self.verify_step_with(&Verifier::default(), index, answer)
    }

    /// Check an answer for one step
    pub fn verify_step_with(
        &self,
        verifier: &Verifier,
        index: usize,
        answer: &str,
    ) -> PuzzleResult<Verdict> {
        let step = self.steps.get(index).ok_or(PuzzleError::InvalidStep {
            index,
            len: self.steps.len(),
        })?;
        Ok(verifier.check(&step.solution, answer, self.difficulty))
    }

    /// Decode every layer, outermost first
    pub fn solve(&self) -> PuzzleResult<String> {
        let mut text = self.ciphertext().to_string();
        for step in &self.steps {
            text = decode(&text, step.variant, &step.params)?;
        }
        Ok(text)
    }
}
