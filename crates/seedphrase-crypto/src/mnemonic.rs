//! Mnemonic encoding, validation and decoding.
//!
//! 1. **Encoding**: entropy → SHA-256 checksum (ENT/32 bits) → entropy
//!    bits followed by checksum bits → 11-bit groups → words joined by
//!    the language's separator.
//! 2. **Validation**: NFKD-normalize the phrase, split on whitespace,
//!    look every word up, rebuild the bit string, recompute and compare
//!    the checksum.
//! 3. **Generation**: draw ENT bits from a secure random source and
//!    encode them.
//!
//! [`MnemonicCodec`] performs these against an injected
//! [`WordListRegistry`]. The free functions use the global registry.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use seedphrase_types::{Language, Result, SeedPhraseError, WordCount};
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::bits::BitBuffer;
use crate::entropy::Entropy;
use crate::seed::{mnemonic_to_seed, Seed};
use crate::wordlist::{WordList, WordListRegistry};

const BITS_PER_WORD: usize = WordCount::BITS_PER_WORD;

// ---------------------------------------------------------------------------
// Mnemonic
// ---------------------------------------------------------------------------

/// A checksum-valid mnemonic phrase in a known language.
///
/// Words are NFKD-normalized and joined by [`Language::separator`].
/// The phrase is zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    phrase: String,
    #[zeroize(skip)]
    language: Language,
    #[zeroize(skip)]
    word_count: WordCount,
}

impl Mnemonic {
    /// Parses and validates `phrase` against the global registry.
    ///
    /// The returned value is in canonical form: normalized words joined
    /// by the language's separator, whatever whitespace the input used.
    pub fn parse(phrase: &str, language: Language) -> Result<Self> {
        MnemonicCodec::default().parse(phrase, language)
    }

    /// Returns the phrase as a string slice.
    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    /// Returns the individual words.
    pub fn words(&self) -> Vec<&str> {
        self.phrase.split(self.language.separator()).collect()
    }

    /// Number of words.
    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    /// Language of the word list the phrase was built from.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Recovers the entropy this phrase encodes.
    pub fn to_entropy(&self) -> Result<Entropy> {
        MnemonicCodec::default().decode(&self.phrase, self.language)
    }

    /// Derives the 64-byte seed for this phrase and `passphrase`.
    pub fn to_seed(&self, passphrase: &str) -> Result<Seed> {
        mnemonic_to_seed(&self.phrase, passphrase)
    }
}

// Mnemonic does not implement Clone/Debug to prevent leakage.

// ---------------------------------------------------------------------------
// MnemonicCodec
// ---------------------------------------------------------------------------

/// Encoder/validator bound to a word list registry.
#[derive(Clone, Copy)]
pub struct MnemonicCodec<'r> {
    registry: &'r WordListRegistry,
}

impl Default for MnemonicCodec<'static> {
    fn default() -> Self {
        Self::new(WordListRegistry::global())
    }
}

impl<'r> MnemonicCodec<'r> {
    /// Creates a codec over `registry`.
    pub fn new(registry: &'r WordListRegistry) -> Self {
        Self { registry }
    }

    /// The registry this codec resolves languages against.
    pub fn registry(&self) -> &'r WordListRegistry {
        self.registry
    }

    /// Encodes raw entropy bytes as a phrase in `language`.
    ///
    /// # Errors
    ///
    /// - [`SeedPhraseError::InvalidEntropyLength`] unless `entropy` is
    ///   16, 20, 24, 28 or 32 bytes. Checked before anything is hashed.
    /// - [`SeedPhraseError::UnsupportedLanguage`] if `language` is not
    ///   enabled in the registry.
    pub fn encode(&self, entropy: &[u8], language: Language) -> Result<Mnemonic> {
        let entropy = Entropy::new(entropy)?;
        self.encode_entropy(&entropy, language)
    }

    /// Encodes an already validated [`Entropy`].
    pub fn encode_entropy(&self, entropy: &Entropy, language: Language) -> Result<Mnemonic> {
        let list = self.registry.get(language)?;
        encode_with(list, entropy)
    }

    /// Generates a fresh `word_count`-word phrase from the OS CSPRNG.
    pub fn generate(&self, word_count: usize, language: Language) -> Result<Mnemonic> {
        self.generate_with_rng(&mut OsRng, word_count, language)
    }

    /// Generates a fresh `word_count`-word phrase from `rng`.
    ///
    /// # Errors
    ///
    /// - [`SeedPhraseError::InvalidWordListLength`] unless `word_count`
    ///   is 12, 15, 18, 21 or 24.
    /// - [`SeedPhraseError::UnsupportedLanguage`] if `language` is not
    ///   enabled. No randomness is drawn in that case.
    /// - [`SeedPhraseError::RandomSourceFailure`] if `rng` fails.
    pub fn generate_with_rng<R>(
        &self,
        rng: &mut R,
        word_count: usize,
        language: Language,
    ) -> Result<Mnemonic>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let word_count = WordCount::new(word_count)?;
        let list = self.registry.get(language)?;
        let entropy = Entropy::generate_with_rng(rng, word_count)?;
        let mnemonic = encode_with(list, &entropy)?;

        tracing::debug!(%language, words = word_count.get(), "mnemonic generated");
        Ok(mnemonic)
    }

    /// Validates `phrase` and returns the entropy it encodes.
    ///
    /// # Errors
    ///
    /// - [`SeedPhraseError::UnsupportedLanguage`] if `language` is not
    ///   enabled.
    /// - [`SeedPhraseError::InvalidWordListLength`] unless the phrase has
    ///   12, 15, 18, 21 or 24 words.
    /// - [`SeedPhraseError::UnknownWord`] for the first word missing
    ///   from the list.
    /// - [`SeedPhraseError::ChecksumMismatch`] if the embedded checksum
    ///   does not match the recovered entropy.
    pub fn decode(&self, phrase: &str, language: Language) -> Result<Entropy> {
        let list = self.registry.get(language)?;

        // NFKD maps U+3000 to U+0020, and split_whitespace covers both.
        let normalized = Zeroizing::new(phrase.nfkd().collect::<String>());
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let word_count = WordCount::new(words.len())?;

        let mut bits = BitBuffer::with_capacity(word_count.total_bits());
        for (position, word) in words.iter().enumerate() {
            let idx = list
                .index_of(word)
                .ok_or_else(|| SeedPhraseError::UnknownWord {
                    word: (*word).to_string(),
                    position,
                })?;
            bits.push_bits(u32::from(idx), BITS_PER_WORD);
        }

        // ENT is a whole number of bytes, so the entropy is exactly the
        // leading entropy_len() bytes; leading zeros are kept.
        let entropy_bytes = bits
            .as_bytes()
            .get(..word_count.entropy_len())
            .ok_or_else(|| SeedPhraseError::CryptoError {
                reason: "mnemonic bit string shorter than its entropy".into(),
            })?;
        let entropy = Entropy::new(entropy_bytes)?;

        let actual = bits
            .read_bits(word_count.entropy_bits(), word_count.checksum_bits())
            .ok_or_else(|| SeedPhraseError::CryptoError {
                reason: "mnemonic bit string shorter than its checksum".into(),
            })?;
        let expected = entropy.checksum();

        if u32::from(expected) != actual {
            return Err(SeedPhraseError::ChecksumMismatch {
                expected,
                // actual < 2^8: at most 8 checksum bits.
                actual: actual as u8,
            });
        }

        Ok(entropy)
    }

    /// Checks that `phrase` is a valid mnemonic in `language`.
    ///
    /// Same checks and errors as [`MnemonicCodec::decode`].
    pub fn validate(&self, phrase: &str, language: Language) -> Result<()> {
        self.decode(phrase, language).map(|_| ())
    }

    /// Validates `phrase` and returns it in canonical form.
    pub fn parse(&self, phrase: &str, language: Language) -> Result<Mnemonic> {
        let entropy = self.decode(phrase, language)?;
        self.encode_entropy(&entropy, language)
    }
}

/// Core encoder: entropy bits ‖ checksum bits → 11-bit word indices.
fn encode_with(list: &WordList, entropy: &Entropy) -> Result<Mnemonic> {
    let word_count = entropy.word_count();
    let language = list.language();

    let mut bits = BitBuffer::with_capacity(word_count.total_bits());
    bits.push_bytes(entropy.as_bytes());
    bits.push_bits(u32::from(entropy.checksum()), word_count.checksum_bits());

    let separator = language.separator();
    let mut phrase = String::new();

    for (i, idx) in bits.groups(BITS_PER_WORD).enumerate() {
        // idx < 2048: groups are 11 bits wide.
        let word = list
            .word(idx as u16)
            .ok_or_else(|| SeedPhraseError::CryptoError {
                reason: format!("word index {idx} out of range"),
            })?;
        if i > 0 {
            phrase.push(separator);
        }
        phrase.push_str(word);
    }

    Ok(Mnemonic {
        phrase,
        language,
        word_count,
    })
}

// ---------------------------------------------------------------------------
// Free functions over the global registry
// ---------------------------------------------------------------------------

/// Encodes `entropy` (16, 20, 24, 28 or 32 bytes) as a phrase in
/// `language`.
pub fn entropy_to_mnemonic(entropy: &[u8], language: Language) -> Result<Mnemonic> {
    MnemonicCodec::default().encode(entropy, language)
}

/// Generates a new random `word_count`-word phrase in `language`.
pub fn generate_mnemonic(word_count: usize, language: Language) -> Result<Mnemonic> {
    MnemonicCodec::default().generate(word_count, language)
}

/// Generates a new `word_count`-word phrase using entropy from `rng`.
pub fn generate_mnemonic_with_rng<R>(
    rng: &mut R,
    word_count: usize,
    language: Language,
) -> Result<Mnemonic>
where
    R: RngCore + CryptoRng + ?Sized,
{
    MnemonicCodec::default().generate_with_rng(rng, word_count, language)
}

/// Validates a phrase: word count, word membership and checksum.
pub fn validate_mnemonic(phrase: &str, language: Language) -> Result<()> {
    MnemonicCodec::default().validate(phrase, language)
}

/// Validates a phrase and returns the entropy it encodes.
pub fn mnemonic_to_entropy(phrase: &str, language: Language) -> Result<Entropy> {
    MnemonicCodec::default().decode(phrase, language)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
