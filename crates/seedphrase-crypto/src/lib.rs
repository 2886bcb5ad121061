//! Mnemonic phrase codec and seed derivation.
//!
//! Converts secret entropy to and from checksum-protected word phrases
//! in ten languages, and stretches a phrase into a 64-byte seed.
//!
//! # Modules
//!
//! - [`wordlist`]: embedded 2048-word lists and the once-built lookup
//!   registry
//! - [`bits`]: fixed-width MSB-first bit buffer used by the codec
//! - [`entropy`]: validated entropy, SHA-256 checksum, secure generation
//! - [`mnemonic`]: encoding, generation, validation and decoding
//! - [`seed`]: PBKDF2-HMAC-SHA512 seed derivation
//!
//! # Example
//!
//! ```
//! use seedphrase_crypto::{entropy_to_mnemonic, mnemonic_to_seed, validate_mnemonic};
//! use seedphrase_types::Language;
//!
//! # fn main() -> seedphrase_types::Result<()> {
//! let mnemonic = entropy_to_mnemonic(&[0u8; 16], Language::English)?;
//! validate_mnemonic(mnemonic.as_str(), Language::English)?;
//! let seed = mnemonic_to_seed(mnemonic.as_str(), "")?;
//! assert_eq!(seed.as_bytes().len(), 64);
//! # Ok(())
//! # }
//! ```

pub mod bits;
pub mod entropy;
pub mod mnemonic;
pub mod seed;
pub mod wordlist;

pub use entropy::Entropy;
pub use mnemonic::{
    entropy_to_mnemonic, generate_mnemonic, generate_mnemonic_with_rng, mnemonic_to_entropy,
    validate_mnemonic, Mnemonic, MnemonicCodec,
};
pub use seed::{mnemonic_to_seed, Seed};
pub use wordlist::{WordList, WordListRegistry};
