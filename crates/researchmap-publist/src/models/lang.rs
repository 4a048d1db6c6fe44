//! Bilingual (Japanese/English) field representation.

use serde::{Deserialize, Serialize};

/// A field carried in both supported languages, either of which may be
/// missing. Empty strings count as missing.
///
/// Every renderer resolves these the same way: prefer Japanese, fall back to
/// English, fall back to a fixed placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    /// Japanese value.
    #[serde(default)]
    pub ja: Option<String>,

    /// English value.
    #[serde(default)]
    pub en: Option<String>,
}

impl Bilingual {
    /// Build from two optional values (mostly useful in tests).
    #[must_use]
    pub fn new(ja: Option<&str>, en: Option<&str>) -> Self {
        Self { ja: ja.map(str::to_string), en: en.map(str::to_string) }
    }

    /// The Japanese value, if present and non-empty.
    #[must_use]
    pub fn ja(&self) -> Option<&str> {
        self.ja.as_deref().filter(|s| !s.is_empty())
    }

    /// The English value, if present and non-empty.
    #[must_use]
    pub fn en(&self) -> Option<&str> {
        self.en.as_deref().filter(|s| !s.is_empty())
    }

    /// Language-preference resolution: Japanese first, then English.
    #[must_use]
    pub fn preferred(&self) -> Option<&str> {
        self.ja().or_else(|| self.en())
    }

    /// Like [`Bilingual::preferred`], with a fixed placeholder when neither
    /// language has a usable value.
    #[must_use]
    pub fn preferred_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.preferred().unwrap_or(placeholder)
    }

    /// True when neither language has a usable value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.preferred().is_none()
    }
}
