//! Phrase Sources
//!
//! Plaintexts come from a [`PhraseSource`]. [`PhraseBank`] is the stock
//! implementation: a list per difficulty, either built in or loaded from
//! JSON shaped like
//!
//! ```json
//! { "easy": ["HELLO WORLD"], "medium": ["..."], "hard": ["..."] }
//! ```

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use clash_core::Difficulty;

use crate::errors::{PuzzleError, PuzzleResult};

/// Supplies plaintext phrases for puzzles
pub trait PhraseSource {
    /// Pick a phrase for `difficulty`, or `None` if there is nothing to offer
    fn phrase(&self, difficulty: Difficulty, rng: &mut dyn RngCore) -> Option<String>;
}

const EASY_PHRASES: [&str; 5] = [
    "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG",
    "HELLO WORLD",
    "PRACTICE MAKES PERFECT",
    "KEEP IT SIMPLE",
    "TIME FLIES WHEN HAVING FUN",
];

const MEDIUM_PHRASES: [&str; 5] = [
    "CRYPTOGRAPHY IS THE PRACTICE OF SECURE COMMUNICATION",
    "THE ART OF WRITING AND SOLVING CODES",
    "KNOWLEDGE IS POWER BUT ENTHUSIASM PULLS THE SWITCH",
    "EVERY SOLUTION BREEDS NEW PROBLEMS",
    "THE ONLY WAY TO DO GREAT WORK IS TO LOVE WHAT YOU DO",
];

const HARD_PHRASES: [&str; 5] = [
    "CRYPTANALYSIS IS THE ART OF BREAKING CODES AND CIPHERS",
    "IN THE WORLD OF CRYPTOGRAPHY SECURITY DEPENDS ON THE KEY LENGTH",
    "THE SCIENCE OF MAKING AND BREAKING SECRET CODES HAS A LONG HISTORY",
    "QUANTUM COMPUTERS MAY SOMEDAY BREAK MANY ENCRYPTION SYSTEMS",
    "STEGANOGRAPHY HIDES THE EXISTENCE OF A SECRET MESSAGE",
];

/// Phrase lists keyed by difficulty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseBank {
    #[serde(default)]
    easy: Vec<String>,
    #[serde(default)]
    medium: Vec<String>,
    #[serde(default)]
    hard: Vec<String>,
}

impl Default for PhraseBank {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            easy: owned(&EASY_PHRASES),
            medium: owned(&MEDIUM_PHRASES),
            hard: owned(&HARD_PHRASES),
        }
    }
}

impl PhraseBank {
    pub fn new(easy: Vec<String>, medium: Vec<String>, hard: Vec<String>) -> Self {
        Self { easy, medium, hard }
    }

    /// Parse a JSON phrase bank
    pub fn from_json(json: &str) -> PuzzleResult<Self> {
        serde_json::from_str(json).map_err(|e| PuzzleError::PhraseBank(e.to_string()))
    }

    /// Load a JSON phrase bank from disk
    pub fn load_from_file(path: &Path) -> PuzzleResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PuzzleError::PhraseBank(format!("{}: {}", path.display(), e)))?;
        let bank = Self::from_json(&content)?;
        debug!(
            "Loaded phrase bank from {} ({} phrases)",
            path.display(),
            bank.len()
        );
        Ok(bank)
    }

    /// Phrases listed for exactly this tier
    pub fn phrases(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PhraseSource for PhraseBank {
    fn phrase(&self, difficulty: Difficulty, rng: &mut dyn RngCore) -> Option<String> {
        let mut list = self.phrases(difficulty);
        if list.is_empty() && difficulty != Difficulty::Medium {
            warn!("No {} phrases, falling back to medium", difficulty);
            list = self.phrases(Difficulty::Medium);
        }
        list.choose(rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_bank() {
        let bank = PhraseBank::default();
        assert_eq!(bank.len(), 15);
        assert!(bank
            .phrases(Difficulty::Easy)
            .contains(&"HELLO WORLD".to_string()));
    }

    #[test]
    fn test_phrase_comes_from_tier() {
        let bank = PhraseBank::default();
        let mut rng = StdRng::seed_from_u64(5);
        for difficulty in Difficulty::ALL {
            let phrase = bank.phrase(difficulty, &mut rng).unwrap();
            assert!(bank.phrases(difficulty).contains(&phrase));
        }
    }

    #[test]
    fn test_from_json_with_missing_tier_falls_back() {
        let bank = PhraseBank::from_json(r#"{"easy": ["ONE"], "medium": ["TWO"]}"#).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(bank.phrase(Difficulty::Easy, &mut rng).as_deref(), Some("ONE"));
        assert_eq!(bank.phrase(Difficulty::Hard, &mut rng).as_deref(), Some("TWO"));
    }

    #[test]
    fn test_empty_bank_yields_none() {
        let bank = PhraseBank::new(vec![], vec![], vec![]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(bank.is_empty());
        assert_eq!(bank.phrase(Difficulty::Hard, &mut rng), None);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            PhraseBank::from_json("[1, 2"),
            Err(PuzzleError::PhraseBank(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("clash-phrases-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"easy":["A"],"medium":["B"],"hard":["C"]}"#).unwrap();
        let bank = PhraseBank::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(bank.phrases(Difficulty::Hard), ["C".to_string()]);

        assert!(PhraseBank::load_from_file(Path::new("/nonexistent/phrases.json")).is_err());
    }
}
