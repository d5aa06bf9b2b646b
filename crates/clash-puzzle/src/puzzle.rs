//! Puzzle Record

use serde::{Deserialize, Serialize};

use clash_cipher::{CipherParams, CipherVariant};
use clash_core::Difficulty;

/// A finished puzzle
///
/// Built only by the assembler and never mutated afterwards. The params are
/// kept so the puzzle can be re-decoded or shown once solved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    plaintext: String,
    ciphertext: String,
    variant: CipherVariant,
    params: CipherParams,
    hint: String,
    difficulty: Difficulty,
}

impl Puzzle {
    pub(crate) fn new(
        plaintext: String,
        ciphertext: String,
        params: CipherParams,
        hint: String,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            plaintext,
            ciphertext,
            variant: params.variant(),
            params,
            hint,
            difficulty,
        }
    }

    /// Canonical answer
    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }

    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    pub fn variant(&self) -> CipherVariant {
        self.variant
    }

    pub fn params(&self) -> &CipherParams {
        &self.params
    }

    /// Hint already scaled to the puzzle's difficulty
    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_follows_params() {
        let puzzle = Puzzle::new(
            "HELLO".into(),
            "KHOOR".into(),
            CipherParams::caesar(3).unwrap(),
            "Caesar shift: 3".into(),
            Difficulty::Easy,
        );
        assert_eq!(puzzle.variant(), CipherVariant::Caesar);
        assert_eq!(puzzle.plaintext(), "HELLO");
        assert_eq!(puzzle.ciphertext(), "KHOOR");
    }

    #[test]
    fn test_json_shape() {
        let puzzle = Puzzle::new(
            "abc".into(),
            "zyx".into(),
            CipherParams::Atbash,
            "Atbash".into(),
            Difficulty::Medium,
        );
        let json = serde_json::to_value(&puzzle).unwrap();
        assert_eq!(json["variant"], "atbash");
        assert_eq!(json["difficulty"], "medium");
        assert_eq!(json["params"]["variant"], "atbash");

        let back: Puzzle = serde_json::from_value(json).unwrap();
        assert_eq!(back, puzzle);
    }
}
