//! Difficulty Tiers
//!
//! Three ordered tiers. Each maps to a default complexity factor in [0, 1],
//! which sets how much a hint gives away, and to a default score multiplier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::*;

/// Difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Default complexity factor for this tier
    pub fn complexity(self) -> f64 {
        match self {
            Difficulty::Easy => EASY_COMPLEXITY,
            Difficulty::Medium => MEDIUM_COMPLEXITY,
            Difficulty::Hard => HARD_COMPLEXITY,
        }
    }

    /// Default score multiplier for this tier
    pub fn score_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => EASY_SCORE_MULTIPLIER,
            Difficulty::Medium => MEDIUM_SCORE_MULTIPLIER,
            Difficulty::Hard => HARD_SCORE_MULTIPLIER,
        }
    }

    /// Lowercase name, as used in config files and phrase banks
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a tier name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown difficulty: {0} (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ParseDifficultyError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_in_unit_range() {
        for tier in Difficulty::ALL {
            let c = tier.complexity();
            assert!((0.0..=1.0).contains(&c), "{} out of range: {}", tier, c);
        }
    }

    #[test]
    fn test_multiplier_monotonic() {
        assert!(Difficulty::Easy.score_multiplier() < Difficulty::Medium.score_multiplier());
        assert!(Difficulty::Medium.score_multiplier() < Difficulty::Hard.score_multiplier());
    }

    #[test]
    fn test_parse() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for tier in Difficulty::ALL {
            assert_eq!(tier.to_string().parse::<Difficulty>().unwrap(), tier);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let back: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(back, Difficulty::Hard);
    }
}
