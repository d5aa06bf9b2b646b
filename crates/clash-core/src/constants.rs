//! Engine Constants
//!
//! Alphabets, tier factors and thresholds shared by the cipher and puzzle
//! crates.

// =============================================================================
// ALPHABETS
// =============================================================================

/// Number of letters in each case ring
pub const ALPHABET_LEN: u8 = 26;

/// Uppercase Latin alphabet
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Playfair alphabet: 25 letters with J folded into I
pub const PLAYFAIR_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Side length of the Playfair key square
pub const PLAYFAIR_SIZE: usize = 5;

/// Filler inserted between doubled letters and after an odd tail
pub const PLAYFAIR_FILLER: char = 'X';

/// Padding sentinel for columnar transposition grids
pub const TRANSPOSITION_PAD: char = ' ';

/// Minimum column count for columnar transposition
pub const MIN_TRANSPOSITION_COLUMNS: usize = 2;

/// Valid Caesar shift range (inclusive)
pub const CAESAR_SHIFT_RANGE: (u8, u8) = (1, 25);

// =============================================================================
// DIFFICULTY TIERS
// =============================================================================

/// Complexity factor for the Easy tier
pub const EASY_COMPLEXITY: f64 = 0.3;

/// Complexity factor for the Medium tier
pub const MEDIUM_COMPLEXITY: f64 = 0.6;

/// Complexity factor for the Hard tier
pub const HARD_COMPLEXITY: f64 = 0.9;

/// Score multiplier for the Easy tier
pub const EASY_SCORE_MULTIPLIER: f64 = 1.0;

/// Score multiplier for the Medium tier
pub const MEDIUM_SCORE_MULTIPLIER: f64 = 1.5;

/// Score multiplier for the Hard tier
pub const HARD_SCORE_MULTIPLIER: f64 = 2.0;

// =============================================================================
// VERIFICATION
// =============================================================================

/// Minimum similarity for an answer to be accepted
pub const ACCEPT_THRESHOLD: f64 = 0.8;

/// Score for a perfect answer before the tier multiplier
pub const BASE_SCORE: f64 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playfair_alphabet_has_no_j() {
        assert_eq!(PLAYFAIR_ALPHABET.len(), PLAYFAIR_SIZE * PLAYFAIR_SIZE);
        assert!(!PLAYFAIR_ALPHABET.contains('J'));
    }

    #[test]
    fn test_alphabet_len() {
        assert_eq!(ALPHABET.len(), ALPHABET_LEN as usize);
    }

    #[test]
    fn test_tier_tables_increase() {
        assert!(EASY_COMPLEXITY < MEDIUM_COMPLEXITY && MEDIUM_COMPLEXITY < HARD_COMPLEXITY);
        assert!(EASY_SCORE_MULTIPLIER < MEDIUM_SCORE_MULTIPLIER);
        assert!(MEDIUM_SCORE_MULTIPLIER < HARD_SCORE_MULTIPLIER);
    }
}
