//! Hint Scaling
//!
//! Codecs produce a base hint that names their parameters. The assembler
//! decides how much of it the player sees, based on the tier's complexity
//! factor:
//!
//! | Level    | Complexity   | Keyed families           | Substitution   |
//! |----------|--------------|--------------------------|----------------|
//! | Generous | below 0.45   | base hint + first letter | 3 mappings     |
//! | Standard | below 0.75   | base hint                | 2 mappings     |
//! | Minimal  | 0.75 and up  | Vigenère/Playfair: name  | family name    |

use rand::seq::SliceRandom;
use rand::Rng;

use clash_cipher::{CipherParams, CipherVariant, SubstitutionKey};

/// How much key material a hint reveals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintLevel {
    Generous,
    Standard,
    Minimal,
}

impl HintLevel {
    /// Map a complexity factor in [0, 1] to a hint level
    pub fn from_complexity(complexity: f64) -> Self {
        if complexity < 0.45 {
            HintLevel::Generous
        } else if complexity < 0.75 {
            HintLevel::Standard
        } else {
            HintLevel::Minimal
        }
    }

    /// Substitution mappings disclosed at this level
    pub fn revealed_mappings(self) -> usize {
        match self {
            HintLevel::Generous => 3,
            HintLevel::Standard => 2,
            HintLevel::Minimal => 0,
        }
    }
}

/// Scale `base_hint` for `params` to the given level
pub fn scale_hint<R: Rng + ?Sized>(
    base_hint: &str,
    params: &CipherParams,
    level: HintLevel,
    plaintext: &str,
    rng: &mut R,
) -> String {
    let variant = params.variant();

    if let CipherParams::Substitution { key } = params {
        return substitution_hint(key, level, plaintext, rng);
    }

    match (level, variant) {
        (HintLevel::Minimal, CipherVariant::Vigenere | CipherVariant::Playfair) => {
            variant.display_name().to_string()
        }
        (HintLevel::Generous, _) => match first_letter(plaintext) {
            Some(c) => format!("{} | First letter: {}", base_hint, c),
            None => base_hint.to_string(),
        },
        _ => base_hint.to_string(),
    }
}

fn substitution_hint<R: Rng + ?Sized>(
    key: &SubstitutionKey,
    level: HintLevel,
    plaintext: &str,
    rng: &mut R,
) -> String {
    let name = CipherVariant::Substitution.display_name();

    let mut letters: Vec<char> = Vec::new();
    for c in plaintext.chars().filter(char::is_ascii_alphabetic) {
        let upper = c.to_ascii_uppercase();
        if !letters.contains(&upper) {
            letters.push(upper);
        }
    }

    let mut revealed: Vec<char> = letters
        .choose_multiple(rng, level.revealed_mappings())
        .copied()
        .collect();
    if revealed.is_empty() {
        return name.to_string();
    }
    revealed.sort_unstable();

    let pairs: Vec<String> = revealed
        .into_iter()
        .map(|c| format!("{}={}", c, key.map(c)))
        .collect();
    format!("{} | Revealed: {}", name, pairs.join(", "))
}

fn first_letter(plaintext: &str) -> Option<char> {
    plaintext
        .chars()
        .find(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clash_core::Difficulty;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_levels_from_default_complexity() {
        assert_eq!(HintLevel::from_complexity(Difficulty::Easy.complexity()), HintLevel::Generous);
        assert_eq!(HintLevel::from_complexity(Difficulty::Medium.complexity()), HintLevel::Standard);
        assert_eq!(HintLevel::from_complexity(Difficulty::Hard.complexity()), HintLevel::Minimal);
    }

    #[test]
    fn test_generous_adds_first_letter() {
        let params = CipherParams::caesar(3).unwrap();
        let hint = scale_hint("Caesar shift: 3", &params, HintLevel::Generous, "  hello", &mut rng());
        assert_eq!(hint, "Caesar shift: 3 | First letter: H");
    }

    #[test]
    fn test_standard_keeps_base_hint() {
        let params = CipherParams::Atbash;
        let hint = scale_hint("Atbash", &params, HintLevel::Standard, "hello", &mut rng());
        assert_eq!(hint, "Atbash");
    }

    #[test]
    fn test_minimal_withholds_vigenere_and_playfair_keys() {
        let vigenere = CipherParams::vigenere("LEMON").unwrap();
        let hint = scale_hint("Key: LEMON", &vigenere, HintLevel::Minimal, "text", &mut rng());
        assert!(!hint.contains("LEMON"));
        assert_eq!(hint, CipherVariant::Vigenere.display_name());

        let playfair = CipherParams::playfair("SECRET").unwrap();
        let hint = scale_hint("Key: SECRET", &playfair, HintLevel::Minimal, "text", &mut rng());
        assert!(!hint.contains("SECRET"));
    }

    #[test]
    fn test_minimal_keeps_caesar_hint() {
        let params = CipherParams::caesar(20).unwrap();
        let hint = scale_hint("Caesar shift: 20", &params, HintLevel::Minimal, "text", &mut rng());
        assert_eq!(hint, "Caesar shift: 20");
    }

    #[test]
    fn test_substitution_reveals_plaintext_letters() {
        let key = SubstitutionKey::from_mapping("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
        let params = CipherParams::substitution(key.clone());
        let plaintext = "Hello";

        let hint = scale_hint("", &params, HintLevel::Generous, plaintext, &mut rng());
        let revealed = hint.split("Revealed: ").nth(1).unwrap();
        let pairs: Vec<&str> = revealed.split(", ").collect();
        assert_eq!(pairs.len(), 3);
        for pair in pairs {
            let plain = pair.chars().next().unwrap();
            let cipher = pair.chars().last().unwrap();
            assert!("HELO".contains(plain));
            assert_eq!(key.map(plain), cipher);
        }

        let hint = scale_hint("", &params, HintLevel::Standard, plaintext, &mut rng());
        assert_eq!(hint.matches('=').count(), 2);
    }

    #[test]
    fn test_substitution_minimal_is_name_only() {
        let params = CipherParams::substitution(SubstitutionKey::identity());
        let hint = scale_hint("", &params, HintLevel::Minimal, "hello", &mut rng());
        assert_eq!(hint, CipherVariant::Substitution.display_name());
    }

    #[test]
    fn test_substitution_reveal_capped_by_distinct_letters() {
        let params = CipherParams::substitution(SubstitutionKey::identity());
        let hint = scale_hint("", &params, HintLevel::Generous, "aaa", &mut rng());
        assert_eq!(hint.matches('=').count(), 1);
    }
}
