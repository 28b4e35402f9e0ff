//! Locale tags as handed over by the platform layer.

use serde::{Deserialize, Serialize};

/// A BCP 47-ish locale identifier such as `en`, `es-MX` or `ja_JP`.
///
/// Only the primary language subtag drives behavior; the rest is kept for
/// display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocaleTag {
    raw: String,
    language: String,
}

impl LocaleTag {
    /// Parses a locale identifier. Empty input falls back to `en`.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let language = trimmed
            .split(['-', '_'])
            .next()
            .filter(|subtag| !subtag.is_empty())
            .map_or_else(|| "en".to_string(), str::to_ascii_lowercase);

        Self {
            raw: trimmed.to_string(),
            language,
        }
    }

    /// Lower-case primary language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The identifier as it was supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::new("en")
    }
}

impl From<&str> for LocaleTag {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for LocaleTag {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.raw
    }
}

impl std::fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
