//! Storefront locales and localized display text.
//!
//! The storefront serves English, Arabic, and French. Translated fields are
//! carried as a [`LocalizedText`] with English as the canonical variant;
//! every consumer resolves a locale through the same fallback so there is
//! exactly one answer to "which string do I show".

use serde::{Deserialize, Serialize};

/// A storefront display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
    Fr,
}

impl Locale {
    /// All supported locales, English first.
    pub const ALL: [Self; 3] = [Self::En, Self::Ar, Self::Fr];

    /// Parse from a URL or cookie parameter value.
    ///
    /// Unknown values fall back to English.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "ar" => Self::Ar,
            "fr" => Self::Fr,
            _ => Self::En,
        }
    }

    /// The locale code as used in URLs and translation keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
            Self::Fr => "fr",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display text translated into the storefront locales.
///
/// English is required; Arabic and French are optional. [`Self::resolve`]
/// falls back to English when the requested variant is absent, so every
/// caller sees the same deterministic resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fr: Option<String>,
}

impl LocalizedText {
    /// Create text with only the English variant.
    #[must_use]
    pub fn new(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: None,
            fr: None,
        }
    }

    /// Builder-style setter for a locale variant.
    #[must_use]
    pub fn with(mut self, locale: Locale, text: impl Into<String>) -> Self {
        match locale {
            Locale::En => self.en = text.into(),
            Locale::Ar => self.ar = Some(text.into()),
            Locale::Fr => self.fr = Some(text.into()),
        }
        self
    }

    /// The exact variant for `locale`, if present.
    #[must_use]
    pub fn get(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::En => Some(&self.en),
            Locale::Ar => self.ar.as_deref(),
            Locale::Fr => self.fr.as_deref(),
        }
    }

    /// The variant for `locale`, falling back to English when absent.
    #[must_use]
    pub fn resolve(&self, locale: Locale) -> &str {
        self.get(locale).unwrap_or(&self.en)
    }

    /// All present variants, English first.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        Locale::ALL.iter().filter_map(|locale| self.get(*locale))
    }
}

impl From<&str> for LocalizedText {
    fn from(en: &str) -> Self {
        Self::new(en)
    }
}
