//! Key/Parameter Generator
//!
//! Produces validated [`CipherParams`] for a family and tier. Every range
//! grows with difficulty:
//!
//! ```text
//!                 Easy    Medium   Hard
//! Caesar shift    1-5     6-15     16-25
//! Vigenère len    2-3     4-6      7-10
//! Columns         2-3     4-6      7-10
//! Playfair key    short   medium   long keyword
//! ```
//!
//! Within a tier, the complexity factor slides a half-width window from the
//! bottom of the range (0.0) to the top (1.0), so a harder configuration
//! draws longer keys, larger shifts and more columns.
//!
//! Randomness is injected, so a seeded `StdRng` reproduces the same keys.

use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::debug;

use clash_cipher::{CipherParams, CipherResult, CipherVariant, SubstitutionKey};
use clash_core::{letter_from_index, Difficulty, ALPHABET_LEN};

/// Playfair keywords for the Easy tier
pub const EASY_PLAYFAIR_KEYS: [&str; 5] = ["CIPHER", "PUZZLE", "SECRET", "ENIGMA", "CRYPTO"];

/// Playfair keywords for the Medium tier
pub const MEDIUM_PLAYFAIR_KEYS: [&str; 5] =
    ["KEYBOARD", "ALGORITHM", "CHALLENGE", "QUESTION", "SOLUTION"];

/// Playfair keywords for the Hard tier
pub const HARD_PLAYFAIR_KEYS: [&str; 5] = [
    "CRYPTOGRAPHY",
    "INTELLIGENCE",
    "MATHEMATICS",
    "COMPLEXITY",
    "ENCRYPTION",
];

/// Families offered at each tier when the caller does not pick one
pub fn variants_for(difficulty: Difficulty) -> &'static [CipherVariant] {
    use CipherVariant::*;
    match difficulty {
        Difficulty::Easy => &[Caesar, Atbash, Reverse, Morse, Binary],
        Difficulty::Medium => &[Caesar, Atbash, Reverse, Vigenere, Substitution, Morse, Binary],
        Difficulty::Hard => &[Caesar, Vigenere, Substitution, Transposition, Playfair, Binary],
    }
}

/// Pick a family uniformly from those valid for `difficulty`
pub fn choose_variant<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> CipherVariant {
    let pool = variants_for(difficulty);
    pool[rng.gen_range(0..pool.len())]
}

/// Caesar shift range for a tier
pub fn caesar_shift_range(difficulty: Difficulty) -> RangeInclusive<u8> {
    match difficulty {
        Difficulty::Easy => 1..=5,
        Difficulty::Medium => 6..=15,
        Difficulty::Hard => 16..=25,
    }
}

/// Vigenère key length range for a tier
pub fn vigenere_length_range(difficulty: Difficulty) -> RangeInclusive<usize> {
    match difficulty {
        Difficulty::Easy => 2..=3,
        Difficulty::Medium => 4..=6,
        Difficulty::Hard => 7..=10,
    }
}

/// Transposition column range for a tier
pub fn transposition_column_range(difficulty: Difficulty) -> RangeInclusive<usize> {
    match difficulty {
        Difficulty::Easy => 2..=3,
        Difficulty::Medium => 4..=6,
        Difficulty::Hard => 7..=10,
    }
}

/// Playfair keyword list for a tier
pub fn playfair_keys(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => &EASY_PLAYFAIR_KEYS,
        Difficulty::Medium => &MEDIUM_PLAYFAIR_KEYS,
        Difficulty::Hard => &HARD_PLAYFAIR_KEYS,
    }
}

/// Sub-range of `range` that a complexity factor selects
///
/// The window covers half of `range`. It starts at the bottom for 0.0 and
/// ends at the top for 1.0; out-of-range factors are clamped.
pub fn scaled_window(range: RangeInclusive<usize>, complexity: f64) -> RangeInclusive<usize> {
    let (lo, hi) = (*range.start(), *range.end());
    let span = hi.saturating_sub(lo) as f64;
    let c = complexity.clamp(0.0, 1.0);

    let low = lo + (span * c / 2.0).round() as usize;
    let high = lo + (span * (1.0 + c) / 2.0).round() as usize;
    low..=high.min(hi)
}

fn widen(range: RangeInclusive<u8>) -> RangeInclusive<usize> {
    *range.start() as usize..=*range.end() as usize
}

/// Random permutation of the alphabet
pub fn generate_substitution_key<R: Rng + ?Sized>(rng: &mut R) -> CipherResult<SubstitutionKey> {
    let mut forward: [u8; ALPHABET_LEN as usize] = std::array::from_fn(|i| i as u8);
    forward.shuffle(rng);
    SubstitutionKey::from_permutation(forward)
}

/// Key material for `variant` at `difficulty`, using the tier's default
/// complexity factor
pub fn generate_params<R: Rng + ?Sized>(
    variant: CipherVariant,
    difficulty: Difficulty,
    rng: &mut R,
) -> CipherResult<CipherParams> {
    generate_scaled_params(variant, difficulty, difficulty.complexity(), rng)
}

/// Key material for `variant` at `difficulty` with an explicit complexity
/// factor
pub fn generate_scaled_params<R: Rng + ?Sized>(
    variant: CipherVariant,
    difficulty: Difficulty,
    complexity: f64,
    rng: &mut R,
) -> CipherResult<CipherParams> {
    let params = match variant {
        CipherVariant::Caesar => {
            let window = scaled_window(widen(caesar_shift_range(difficulty)), complexity);
            // window stays inside 1..=25
            CipherParams::caesar(rng.gen_range(window) as u8)?
        }
        CipherVariant::Vigenere => {
            let window = scaled_window(vigenere_length_range(difficulty), complexity);
            let len = rng.gen_range(window);
            let key: String = (0..len)
                .map(|_| letter_from_index(rng.gen_range(0..ALPHABET_LEN), true))
                .collect();
            CipherParams::vigenere(&key)?
        }
        CipherVariant::Substitution => CipherParams::substitution(generate_substitution_key(rng)?),
        CipherVariant::Transposition => {
            let window = scaled_window(transposition_column_range(difficulty), complexity);
            CipherParams::transposition(rng.gen_range(window))?
        }
        CipherVariant::Playfair => {
            let keys = playfair_keys(difficulty);
            CipherParams::playfair(keys[rng.gen_range(0..keys.len())])?
        }
        CipherVariant::Atbash => CipherParams::Atbash,
        CipherVariant::Reverse => CipherParams::Reverse,
        CipherVariant::Morse => CipherParams::Morse,
        CipherVariant::Binary => CipherParams::Binary,
    };

    debug!(
        "Generated {} parameters for {} difficulty (complexity {:.2})",
        variant, difficulty, complexity
    );
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        for variant in CipherVariant::ALL {
            let a = generate_params(variant, Difficulty::Hard, &mut StdRng::seed_from_u64(7)).unwrap();
            let b = generate_params(variant, Difficulty::Hard, &mut StdRng::seed_from_u64(7)).unwrap();
            assert_eq!(a, b, "variant {}", variant);
        }
    }

    #[test]
    fn test_generated_params_are_valid_and_match_variant() {
        let mut rng = StdRng::seed_from_u64(42);
        for difficulty in Difficulty::ALL {
            for variant in CipherVariant::ALL {
                let params = generate_params(variant, difficulty, &mut rng).unwrap();
                assert_eq!(params.variant(), variant);
                assert!(params.validate().is_ok());
            }
        }
    }

    #[test]
    fn test_caesar_within_tier_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for difficulty in Difficulty::ALL {
            let range = caesar_shift_range(difficulty);
            for _ in 0..200 {
                match generate_params(CipherVariant::Caesar, difficulty, &mut rng).unwrap() {
                    CipherParams::Caesar { shift } => assert!(range.contains(&shift)),
                    other => panic!("unexpected params {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_vigenere_length_within_tier_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for difficulty in Difficulty::ALL {
            let range = vigenere_length_range(difficulty);
            for _ in 0..100 {
                match generate_params(CipherVariant::Vigenere, difficulty, &mut rng).unwrap() {
                    CipherParams::Vigenere { key } => assert!(range.contains(&key.len())),
                    other => panic!("unexpected params {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_ranges_increase_with_difficulty() {
        let tiers = Difficulty::ALL;
        for pair in tiers.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            assert!(caesar_shift_range(lo).end() < caesar_shift_range(hi).start());
            assert!(vigenere_length_range(lo).end() < vigenere_length_range(hi).start());
            assert!(
                transposition_column_range(lo).end() < transposition_column_range(hi).start()
            );
        }
    }

    #[test]
    fn test_scaled_window() {
        assert_eq!(scaled_window(1..=5, 0.0), 1..=3);
        assert_eq!(scaled_window(1..=5, 0.3), 2..=4);
        assert_eq!(scaled_window(1..=5, 1.0), 3..=5);
        assert_eq!(scaled_window(16..=25, 0.9), 20..=25);
        assert_eq!(scaled_window(7..=10, 7.0), scaled_window(7..=10, 1.0));
        assert_eq!(scaled_window(4..=4, 0.5), 4..=4);
    }

    fn magnitude(params: &CipherParams) -> usize {
        match params {
            CipherParams::Caesar { shift } => *shift as usize,
            CipherParams::Vigenere { key } => key.len(),
            CipherParams::Transposition { columns } => *columns,
            other => panic!("unexpected params {:?}", other),
        }
    }

    #[test]
    fn test_higher_complexity_gives_larger_keys() {
        let variants = [
            CipherVariant::Caesar,
            CipherVariant::Vigenere,
            CipherVariant::Transposition,
        ];
        for difficulty in Difficulty::ALL {
            for variant in variants {
                let mut rng = StdRng::seed_from_u64(3);
                let low: Vec<usize> = (0..100)
                    .map(|_| {
                        magnitude(&generate_scaled_params(variant, difficulty, 0.0, &mut rng).unwrap())
                    })
                    .collect();
                let high: Vec<usize> = (0..100)
                    .map(|_| {
                        magnitude(&generate_scaled_params(variant, difficulty, 1.0, &mut rng).unwrap())
                    })
                    .collect();

                let low_max = *low.iter().max().unwrap();
                let high_min = *high.iter().min().unwrap();
                assert!(low_max <= high_min, "{} at {}", variant, difficulty);
                assert!(
                    high.iter().sum::<usize>() > low.iter().sum::<usize>(),
                    "{} at {}",
                    variant,
                    difficulty
                );
            }
        }
    }

    #[test]
    fn test_substitution_key_is_permutation() {
        let key = generate_substitution_key(&mut StdRng::seed_from_u64(3)).unwrap();
        let mut letters: Vec<char> = key.mapping().chars().collect();
        letters.sort_unstable();
        let expected: Vec<char> = clash_core::ALPHABET.chars().collect();
        assert_eq!(letters, expected);
    }

    #[test]
    fn test_choose_variant_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(9);
        for difficulty in Difficulty::ALL {
            for _ in 0..50 {
                let v = choose_variant(difficulty, &mut rng);
                assert!(variants_for(difficulty).contains(&v));
            }
        }
    }

    #[test]
    fn test_hard_pool_has_playfair_and_transposition() {
        let hard = variants_for(Difficulty::Hard);
        assert!(hard.contains(&CipherVariant::Playfair));
        assert!(hard.contains(&CipherVariant::Transposition));
        assert!(!variants_for(Difficulty::Easy).contains(&CipherVariant::Playfair));
    }
}
