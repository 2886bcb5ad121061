//! Per-language word lists and their reverse lookup tables.
//!
//! The word lists themselves are plain text files (one word per line)
//! under `wordlists/`, embedded at compile time. A [`WordListRegistry`]
//! turns them into [`WordList`]s on demand: each language's list and
//! its word → index table are built at most once, even under
//! concurrent first use, and are read-only afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use seedphrase_types::config::RegistryConfig;
use seedphrase_types::{Language, Result, SeedPhraseError};
use unicode_normalization::UnicodeNormalization;

/// Number of words in every list.
pub const WORDLIST_LEN: usize = 2048;

const LANGUAGE_COUNT: usize = Language::ALL.len();

/// Embedded raw text for `language`.
fn raw_wordlist(language: Language) -> &'static str {
    match language {
        Language::ChineseSimplified => include_str!("../wordlists/chinese_simplified.txt"),
        Language::ChineseTraditional => include_str!("../wordlists/chinese_traditional.txt"),
        Language::Czech => include_str!("../wordlists/czech.txt"),
        Language::English => include_str!("../wordlists/english.txt"),
        Language::French => include_str!("../wordlists/french.txt"),
        Language::Italian => include_str!("../wordlists/italian.txt"),
        Language::Japanese => include_str!("../wordlists/japanese.txt"),
        Language::Korean => include_str!("../wordlists/korean.txt"),
        Language::Portuguese => include_str!("../wordlists/portuguese.txt"),
        Language::Spanish => include_str!("../wordlists/spanish.txt"),
    }
}

// ---------------------------------------------------------------------------
// WordList
// ---------------------------------------------------------------------------

/// An ordered list of exactly [`WORDLIST_LEN`] unique words plus its
/// reverse lookup table.
#[derive(Debug)]
pub struct WordList {
    language: Language,
    words: Vec<&'static str>,
    // Keyed by the NFKD form of each word.
    index: HashMap<String, u16>,
}

impl WordList {
    /// Parses and checks the embedded list for `language`.
    fn build(language: Language) -> Result<Self> {
        let words: Vec<&'static str> = raw_wordlist(language)
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect();

        if words.len() != WORDLIST_LEN {
            return Err(SeedPhraseError::InvalidWordList {
                language,
                reason: format!("expected {WORDLIST_LEN} words, found {}", words.len()),
            });
        }

        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            let key: String = word.nfkd().collect();
            // i < 2048 always fits in u16.
            if index.insert(key, i as u16).is_some() {
                return Err(SeedPhraseError::InvalidWordList {
                    language,
                    reason: format!("duplicate word `{word}` at index {i}"),
                });
            }
        }

        tracing::debug!(%language, words = words.len(), "word list index built");

        Ok(Self {
            language,
            words,
            index,
        })
    }

    /// Language this list belongs to.
    pub fn language(&self) -> Language {
        self.language
    }

    /// All words in index order.
    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    /// Returns the word at `index`, or `None` if `index >= 2048`.
    pub fn word(&self, index: u16) -> Option<&'static str> {
        self.words.get(usize::from(index)).copied()
    }

    /// Returns the index of `word`, or `None` if it is not in the list.
    ///
    /// The lookup is performed on the NFKD form of `word`, so composed
    /// and decomposed spellings of accented words both match.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        if let Some(idx) = self.index.get(word) {
            return Some(*idx);
        }
        let normalized: String = word.nfkd().collect();
        self.index.get(&normalized).copied()
    }
}

// ---------------------------------------------------------------------------
// WordListRegistry
// ---------------------------------------------------------------------------

/// Read-only set of word lists, one lazily built slot per language.
///
/// Construct one from a [`RegistryConfig`] and hand it to a
/// [`MnemonicCodec`](crate::mnemonic::MnemonicCodec), or use the
/// process-wide [`WordListRegistry::global`] instance which enables
/// every language.
#[derive(Debug)]
pub struct WordListRegistry {
    config: RegistryConfig,
    slots: [OnceLock<Result<WordList>>; LANGUAGE_COUNT],
}

impl WordListRegistry {
    /// Creates a registry from a validated config.
    ///
    /// With `preload` set, every enabled language is built before this
    /// returns and the first broken list is reported as an error.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        config.validate()?;
        let registry = Self::from_config(config);

        if registry.config.preload {
            for lang in &registry.config.languages {
                registry.get(*lang)?;
            }
            tracing::debug!(
                languages = registry.config.languages.len(),
                "word list registry preloaded"
            );
        }

        Ok(registry)
    }

    /// Process-wide registry with every language enabled.
    pub fn global() -> &'static WordListRegistry {
        static GLOBAL: OnceLock<WordListRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| Self::from_config(RegistryConfig::default()))
    }

    fn from_config(config: RegistryConfig) -> Self {
        Self {
            config,
            slots: std::array::from_fn(|_| OnceLock::new()),
        }
    }

    /// The configuration this registry was built from.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Language used when the caller does not name one.
    pub fn default_language(&self) -> Language {
        self.config.default_language
    }

    /// Returns `true` if `language` may be used with this registry.
    pub fn supports(&self, language: Language) -> bool {
        self.config.is_enabled(language)
    }

    /// Returns the word list for `language`, building it on first use.
    ///
    /// # Errors
    ///
    /// - [`SeedPhraseError::UnsupportedLanguage`] if `language` is not
    ///   enabled.
    /// - [`SeedPhraseError::InvalidWordList`] if the embedded list is
    ///   malformed. The failure is cached like a success.
    pub fn get(&self, language: Language) -> Result<&WordList> {
        if !self.supports(language) {
            return Err(SeedPhraseError::UnsupportedLanguage {
                language: language.to_string(),
            });
        }

        self.slots[language.index()]
            .get_or_init(|| WordList::build(language))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// All words of `language` in index order.
    pub fn words(&self, language: Language) -> Result<&[&'static str]> {
        Ok(self.get(language)?.words())
    }

    /// Index of `word` in `language`'s list, `None` if absent.
    pub fn index_of(&self, language: Language, word: &str) -> Result<Option<u16>> {
        Ok(self.get(language)?.index_of(word))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
