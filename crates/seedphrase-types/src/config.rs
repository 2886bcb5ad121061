//! Word list registry configuration with sensible defaults.
//!
//! The registry is built from a [`RegistryConfig`] once at startup and
//! then shared read-only. The config can be constructed in code or
//! loaded from a JSON file.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Language, Result, SeedPhraseError};

/// Configuration of the word list registry.
///
/// Example `seedphrase.json`:
/// ```json
/// {
///   "languages": ["english", "japanese"],
///   "default_language": "english",
///   "preload": true
/// }
/// ```
///
/// Missing fields take their [`Default`] values.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Languages whose word lists may be used. Requests for any other
    /// language fail with [`SeedPhraseError::UnsupportedLanguage`].
    pub languages: Vec<Language>,

    /// Language used by callers that do not name one explicitly.
    /// Must be a member of `languages`.
    pub default_language: Language,

    /// Build every enabled language's lookup table at construction
    /// instead of on first use.
    pub preload: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            languages: Language::ALL.to_vec(),
            default_language: Language::English,
            preload: false,
        }
    }
}

impl RegistryConfig {
    /// Validates all configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(SeedPhraseError::ConfigError {
                reason: "languages must not be empty".into(),
            });
        }

        let mut seen = HashSet::with_capacity(self.languages.len());
        for lang in &self.languages {
            if !seen.insert(*lang) {
                return Err(SeedPhraseError::ConfigError {
                    reason: format!("language {lang} listed more than once"),
                });
            }
        }

        if !seen.contains(&self.default_language) {
            return Err(SeedPhraseError::ConfigError {
                reason: format!(
                    "default_language {} is not in languages",
                    self.default_language
                ),
            });
        }

        Ok(())
    }

    /// Returns `true` if `language` is enabled.
    pub fn is_enabled(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// Parses and validates a config from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|e| SeedPhraseError::ConfigError {
            reason: format!("invalid config JSON: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| SeedPhraseError::ConfigError {
            reason: format!("failed to read config file {}: {e}", path.display()),
        })?;
        Self::from_json_str(&text)
    }
}
