//! # Clash Cipher
//!
//! Classical cipher codecs for the Cipher Clash engine.
//!
//! ## Families
//!
//! - **Caesar**: fixed shift of 1..=25
//! - **Atbash**: mirrored alphabet
//! - **Vigenère**: repeating key stream, advancing on letters only
//! - **Substitution**: arbitrary bijection of the alphabet
//! - **Transposition**: columnar, natural column order
//! - **Playfair**: digraphs over a 5x5 key square
//! - **Reverse**: whole-string reversal
//! - **Morse** / **Binary**: fixed public tables
//!
//! These are puzzle-grade transforms and offer no secrecy.
//!
//! ## Usage
//!
//! ```
//! use clash_cipher::{decode, encode, CipherParams, CipherVariant};
//!
//! let params = CipherParams::vigenere("KEY").unwrap();
//! let (ciphertext, hint) = encode("Hello, World", CipherVariant::Vigenere, &params).unwrap();
//! assert_eq!(ciphertext, "Rijvs, Uyvjn");
//! assert!(hint.contains("KEY"));
//!
//! let plaintext = decode(&ciphertext, CipherVariant::Vigenere, &params).unwrap();
//! assert_eq!(plaintext, "Hello, World");
//! ```

pub mod atbash;
pub mod binary;
pub mod caesar;
pub mod errors;
pub mod morse;
pub mod params;
pub mod playfair;
pub mod registry;
pub mod reverse;
pub mod substitution;
pub mod transposition;
pub mod variant;
pub mod vigenere;

pub use errors::*;
pub use params::CipherParams;
pub use playfair::PlayfairMatrix;
pub use registry::{decode, encode};
pub use substitution::SubstitutionKey;
pub use variant::CipherVariant;
pub use vigenere::VigenereKey;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::params::CipherParams;
    pub use crate::playfair::PlayfairMatrix;
    pub use crate::registry::{decode, encode};
    pub use crate::substitution::SubstitutionKey;
    pub use crate::variant::CipherVariant;
    pub use crate::vigenere::VigenereKey;
}
