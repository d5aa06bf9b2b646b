//! # Clash Core
//!
//! Foundation layer of the Cipher Clash engine.
//!
//! ## Components
//!
//! - **Alphabet**: character-level ring arithmetic (shift, mirror) that every
//!   letter cipher is built from
//! - **Difficulty**: the three ordered tiers and their complexity factors
//! - **Constants**: alphabets and tier tables shared by the upper crates
//!
//! All functions here are total: any `char` is accepted, and characters
//! that are not ASCII letters come back unchanged.
//!
//! ```text
//! shift_letter('a', 3)  = 'd'
//! shift_letter('Z', 1)  = 'A'
//! mirror_letter('B')    = 'Y'
//! shift_letter('!', 7)  = '!'
//! ```

pub mod alphabet;
pub mod constants;
pub mod difficulty;

pub use alphabet::*;
pub use constants::*;
pub use difficulty::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::alphabet::*;
    pub use crate::constants::*;
    pub use crate::difficulty::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_covers_whole_alphabet() {
        let shifted: String = ALPHABET.chars().map(|c| shift_letter(c, 13)).collect();
        let restored: String = shifted.chars().map(|c| shift_letter(c, -13)).collect();
        assert_eq!(restored, ALPHABET);
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
        assert!(Difficulty::Easy.complexity() < Difficulty::Hard.complexity());
    }
}
