//! Core shared types for the seedphrase workspace.
//!
//! This crate defines the vocabulary used by every other crate: the
//! closed set of supported [`Language`]s, the validated [`WordCount`],
//! the unified [`SeedPhraseError`] and the [`Result`] alias.

pub mod config;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// A natural language with its own 2048-word list.
///
/// The set is closed: every variant maps to exactly one embedded word
/// list and one word separator. Text that names no variant is rejected
/// with [`SeedPhraseError::UnsupportedLanguage`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Simplified Chinese characters.
    ChineseSimplified,
    /// Traditional Chinese characters.
    ChineseTraditional,
    /// Czech.
    Czech,
    /// English.
    English,
    /// French.
    French,
    /// Italian.
    Italian,
    /// Japanese (hiragana), joined with the ideographic space.
    Japanese,
    /// Korean (hangul).
    Korean,
    /// Portuguese.
    Portuguese,
    /// Spanish.
    Spanish,
}

impl Language {
    /// Every supported language, in declaration order.
    pub const ALL: [Language; 10] = [
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Czech,
        Language::English,
        Language::French,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Portuguese,
        Language::Spanish,
    ];

    /// Character placed between words when a phrase is rendered.
    ///
    /// Japanese phrases use U+3000 IDEOGRAPHIC SPACE; all other
    /// languages use an ordinary space.
    pub fn separator(self) -> char {
        match self {
            Self::Japanese => '\u{3000}',
            _ => ' ',
        }
    }

    /// Stable snake_case identifier, identical to the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ChineseSimplified => "chinese_simplified",
            Self::ChineseTraditional => "chinese_traditional",
            Self::Czech => "czech",
            Self::English => "english",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Portuguese => "portuguese",
            Self::Spanish => "spanish",
        }
    }

    /// Position of this language in [`Language::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = SeedPhraseError;

    /// Accepts the snake_case identifier as well as `CamelCase`,
    /// kebab-case and any ASCII casing of it.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str().replace('_', "") == key)
            .ok_or_else(|| SeedPhraseError::UnsupportedLanguage {
                language: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// WordCount
// ---------------------------------------------------------------------------

/// Number of words in a mnemonic: one of 12, 15, 18, 21 or 24.
///
/// | ENT | CS | ENT+CS | MS |
/// |-----|----|--------|----|
/// | 128 | 4  | 132    | 12 |
/// | 160 | 5  | 165    | 15 |
/// | 192 | 6  | 198    | 18 |
/// | 224 | 7  | 231    | 21 |
/// | 256 | 8  | 264    | 24 |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct WordCount(usize);

impl WordCount {
    /// Smallest valid word count.
    pub const MIN: usize = 12;
    /// Largest valid word count.
    pub const MAX: usize = 24;
    /// Bits encoded by a single word.
    pub const BITS_PER_WORD: usize = 11;

    /// Validates a raw word count.
    ///
    /// # Errors
    ///
    /// [`SeedPhraseError::InvalidWordListLength`] unless `count` is a
    /// multiple of 3 within `12..=24`.
    pub fn new(count: usize) -> Result<Self> {
        if count % 3 != 0 || !(Self::MIN..=Self::MAX).contains(&count) {
            return Err(SeedPhraseError::InvalidWordListLength { count });
        }
        Ok(Self(count))
    }

    /// Derives the word count for an entropy buffer of `len` bytes.
    ///
    /// # Errors
    ///
    /// [`SeedPhraseError::InvalidEntropyLength`] unless `len` is one of
    /// 16, 20, 24, 28 or 32.
    pub fn from_entropy_len(len: usize) -> Result<Self> {
        if len % 4 != 0 || !(16..=32).contains(&len) {
            return Err(SeedPhraseError::InvalidEntropyLength { len });
        }
        Ok(Self(len / 4 * 3))
    }

    /// Raw number of words.
    pub fn get(self) -> usize {
        self.0
    }

    /// Entropy length in bytes (`MS × 4 / 3`).
    pub fn entropy_len(self) -> usize {
        self.0 * 4 / 3
    }

    /// Entropy length in bits.
    pub fn entropy_bits(self) -> usize {
        self.entropy_len() * 8
    }

    /// Checksum length in bits (`MS / 3`).
    pub fn checksum_bits(self) -> usize {
        self.0 / 3
    }

    /// Total encoded bits (`MS × 11`).
    pub fn total_bits(self) -> usize {
        self.0 * Self::BITS_PER_WORD
    }
}

impl TryFrom<usize> for WordCount {
    type Error = SeedPhraseError;

    fn try_from(count: usize) -> std::result::Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<WordCount> for usize {
    fn from(count: WordCount) -> Self {
        count.0
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// SeedPhraseError
// ---------------------------------------------------------------------------

/// Central error type for the seedphrase workspace.
///
/// Every fallible operation returns one of these variants directly to
/// its caller. Nothing is retried and nothing falls back to a default.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SeedPhraseError {
    /// Entropy length is not 16, 20, 24, 28 or 32 bytes.
    #[error("invalid entropy length: {len} bytes (expected 16, 20, 24, 28 or 32)")]
    InvalidEntropyLength {
        /// Offending length in bytes.
        len: usize,
    },

    /// Word count is not one of 12, 15, 18, 21 or 24.
    #[error("invalid word list length: {count} words (expected 12, 15, 18, 21 or 24)")]
    InvalidWordListLength {
        /// Offending number of words.
        count: usize,
    },

    /// A word of the phrase is absent from the language's word list.
    #[error("word `{word}` at position {position} not found in word list")]
    UnknownWord {
        /// The normalized word that failed lookup.
        word: String,
        /// Zero-based position of the word in the phrase.
        position: usize,
    },

    /// The checksum recomputed from the entropy differs from the one
    /// embedded in the phrase.
    #[error("mnemonic checksum mismatch (expected {expected:#04x}, found {actual:#04x})")]
    ChecksumMismatch {
        /// Checksum bits recomputed from the recovered entropy.
        expected: u8,
        /// Checksum bits carried by the phrase.
        actual: u8,
    },

    /// The secure random source could not supply enough bytes.
    #[error("random source failure: {reason}")]
    RandomSourceFailure {
        /// Description reported by the random source.
        reason: String,
    },

    /// The language name is unknown, or the language is not enabled in
    /// the word list registry.
    #[error("unsupported language: {language}")]
    UnsupportedLanguage {
        /// The language as it was requested.
        language: String,
    },

    /// An embedded word list violates the 2048 unique words invariant.
    #[error("invalid word list for {language}: {reason}")]
    InvalidWordList {
        /// Language whose list is broken.
        language: Language,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// Seed derivation was asked to stretch an empty phrase.
    #[error("mnemonic is empty")]
    EmptyMnemonic,

    /// A configuration value is invalid or missing.
    #[error("config error: {reason}")]
    ConfigError {
        /// Human-readable description of the configuration problem.
        reason: String,
    },

    /// A cryptographic primitive reported a failure.
    #[error("crypto error: {reason}")]
    CryptoError {
        /// Human-readable description of the failure.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Result alias
// ---------------------------------------------------------------------------

/// Convenience result type using [`SeedPhraseError`].
pub type Result<T> = std::result::Result<T, SeedPhraseError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_japanese_uses_ideographic_space() {
        for lang in Language::ALL {
            let expected = if lang == Language::Japanese { '\u{3000}' } else { ' ' };
            assert_eq!(lang.separator(), expected, "{lang}");
        }
    }

    #[test]
    fn language_index_matches_all_order() {
        for (i, lang) in Language::ALL.iter().enumerate() {
            assert_eq!(lang.index(), i);
        }
    }

    #[test]
    fn language_parses_common_spellings() -> std::result::Result<(), SeedPhraseError> {
        assert_eq!("english".parse::<Language>()?, Language::English);
        assert_eq!("English".parse::<Language>()?, Language::English);
        assert_eq!("ChineseSimplified".parse::<Language>()?, Language::ChineseSimplified);
        assert_eq!("chinese-traditional".parse::<Language>()?, Language::ChineseTraditional);
        assert_eq!(" JAPANESE ".parse::<Language>()?, Language::Japanese);
        Ok(())
    }

    #[test]
    fn language_display_roundtrips() -> std::result::Result<(), SeedPhraseError> {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>()?, lang);
        }
        Ok(())
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = "klingon".parse::<Language>();
        assert_eq!(
            err,
            Err(SeedPhraseError::UnsupportedLanguage {
                language: "klingon".into()
            })
        );
    }

    #[test]
    fn language_serde_uses_snake_case() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&Language::ChineseSimplified)?;
        assert_eq!(json, "\"chinese_simplified\"");
        let parsed: Language = serde_json::from_str("\"korean\"")?;
        assert_eq!(parsed, Language::Korean);
        Ok(())
    }

    #[test]
    fn word_count_accepts_valid_values() -> std::result::Result<(), SeedPhraseError> {
        for (count, ent_len, cs_bits) in [(12, 16, 4), (15, 20, 5), (18, 24, 6), (21, 28, 7), (24, 32, 8)] {
            let wc = WordCount::new(count)?;
            assert_eq!(wc.entropy_len(), ent_len);
            assert_eq!(wc.checksum_bits(), cs_bits);
            assert_eq!(wc.entropy_bits() + wc.checksum_bits(), wc.total_bits());
            assert_eq!(WordCount::from_entropy_len(ent_len)?, wc);
        }
        Ok(())
    }

    #[test]
    fn word_count_rejects_invalid_values() {
        for count in [0, 1, 9, 11, 13, 25, 27] {
            assert_eq!(
                WordCount::new(count),
                Err(SeedPhraseError::InvalidWordListLength { count })
            );
        }
    }

    #[test]
    fn entropy_len_rejects_invalid_values() {
        for len in [0, 1, 12, 15, 17, 33, 36] {
            assert_eq!(
                WordCount::from_entropy_len(len),
                Err(SeedPhraseError::InvalidEntropyLength { len })
            );
        }
    }

    #[test]
    fn word_count_serde_is_validated() {
        assert!(serde_json::from_str::<WordCount>("24").is_ok());
        assert!(serde_json::from_str::<WordCount>("13").is_err());
    }

    #[test]
    fn error_messages_carry_context() {
        let err = SeedPhraseError::UnknownWord {
            word: "women".into(),
            position: 11,
        };
        assert_eq!(
            err.to_string(),
            "word `women` at position 11 not found in word list"
        );
    }
}
