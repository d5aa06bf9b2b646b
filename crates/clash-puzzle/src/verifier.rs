//! Answer Verifier
//!
//! Compares a player's answer with a puzzle's plaintext. Both sides are
//! uppercased with whitespace removed, then compared position by position:
//!
//! ```text
//! similarity = matching positions / max(len_a, len_b)
//! score      = round(100 × similarity × tier multiplier)
//! ```
//!
//! The score is reported whether or not the answer clears the threshold;
//! `correct` alone carries pass/fail. Verification always yields a verdict.

use serde::{Deserialize, Serialize};

use clash_core::{Difficulty, BASE_SCORE};

use crate::config::EngineConfig;
use crate::puzzle::Puzzle;

/// Outcome of checking one answer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    pub score: u32,
    pub similarity: f64,
}

/// Position-wise similarity in [0, 1]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = canonical(a);
    let b = canonical(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let matches = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    matches as f64 / a.len().max(b.len()) as f64
}

fn canonical(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Threshold and multipliers used to judge answers
#[derive(Debug, Clone)]
pub struct Verifier {
    threshold: f64,
    multipliers: [f64; 3],
}

impl Default for Verifier {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl Verifier {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            threshold: config.accept_threshold,
            multipliers: Difficulty::ALL.map(|d| config.score_multiplier(d)),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Judge `answer` against an expected solution at a tier
    pub fn check(&self, expected: &str, answer: &str, difficulty: Difficulty) -> Verdict {
        let similarity = similarity(expected, answer);
        let multiplier = self.multipliers[difficulty as usize];
        let score = (BASE_SCORE * similarity * multiplier).round() as u32;

        Verdict {
            correct: similarity >= self.threshold,
            score,
            similarity,
        }
    }

    /// Judge `answer` against a puzzle
    pub fn verify(&self, puzzle: &Puzzle, answer: &str) -> Verdict {
        self.check(puzzle.plaintext(), answer, puzzle.difficulty())
    }
}

/// Judge `answer` with the built-in threshold and multipliers
pub fn verify(puzzle: &Puzzle, answer: &str) -> Verdict {
    Verifier::default().verify(puzzle, answer)
}
