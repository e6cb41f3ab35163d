//! Locale management and the preferred-locale signal

use crate::error::{TranslationError, TranslationResult};
use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

/// Supported locales
///
/// The set is closed: catalogs are shipped with the app, so an unknown tag
/// can never resolve to anything. `SpanishSpainLegacy` is the underscore
/// form (`es_ES`) still sent by a third-party identity-verification SDK; it
/// canonicalizes to `es-ES` before any lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "es-ES")]
    SpanishSpain,
    #[serde(rename = "es_ES")]
    SpanishSpainLegacy,
}

impl Default for Locale {
    fn default() -> Self {
        Self::English
    }
}

impl Locale {
    /// The locale every cascade ends on
    pub const DEFAULT: Locale = Locale::English;

    /// Get the language tag for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::SpanishSpain => "es-ES",
            Self::SpanishSpainLegacy => "es_ES",
        }
    }

    /// Parse a locale from a language tag
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "es" => Some(Self::Spanish),
            "es-ES" => Some(Self::SpanishSpain),
            "es_ES" => Some(Self::SpanishSpainLegacy),
            _ => None,
        }
    }

    /// Map legacy aliases onto the locale they stand for
    ///
    /// Must run before any resource lookup, cache access, or formatter
    /// construction, so the alias never becomes a table key.
    pub fn canonicalize(self) -> Self {
        match self {
            Self::SpanishSpainLegacy => Self::SpanishSpain,
            other => other,
        }
    }

    /// Get the 2-letter language locale this locale falls back to
    pub fn abbreviation(self) -> Self {
        match self {
            Self::English => Self::English,
            Self::Spanish | Self::SpanishSpain | Self::SpanishSpainLegacy => Self::Spanish,
        }
    }

    /// Convert to a [`LanguageIdentifier`] for plural-rule construction
    pub fn language_identifier(&self) -> TranslationResult<LanguageIdentifier> {
        self.canonicalize()
            .code()
            .parse()
            .map_err(|_| TranslationError::InvalidLanguageId(self.code().to_string()))
    }

    /// Get all supported locales
    pub fn all() -> Vec<Self> {
        vec![
            Self::English,
            Self::Spanish,
            Self::SpanishSpain,
            Self::SpanishSpainLegacy,
        ]
    }

    /// Get the display name for this locale
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish | Self::SpanishSpain | Self::SpanishSpainLegacy => "Español",
        }
    }

    /// Get the catalog file name for this locale
    pub fn resource_file(&self) -> String {
        format!("{}.json", self.code())
    }

    /// Pick the best supported locale for an ordered device preference list
    ///
    /// Matches on the language subtag against the languages the app ships
    /// (`en`, `es`); falls back to the default locale when nothing matches.
    pub fn best_available(preferences: &[&str]) -> Self {
        for preference in preferences {
            let Ok(wanted) = preference.parse::<LanguageIdentifier>() else {
                continue;
            };
            for candidate in [Self::English, Self::Spanish] {
                if let Ok(supported) = candidate.language_identifier() {
                    if supported.language == wanted.language {
                        return candidate;
                    }
                }
            }
        }
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Preferred-locale cell owned by the session/locale subsystem
///
/// The value is updated whenever the user (or the device) changes language.
/// Resolver operations never read it implicitly: callers take a snapshot
/// with [`CurrentLocale::get`] and pass it in, so a locale change mid-flight
/// cannot leak into an in-progress resolution or pollute cache keys.
#[derive(Debug)]
pub struct CurrentLocale {
    inner: ArcSwap<Locale>,
}

impl CurrentLocale {
    pub fn new(locale: Locale) -> Self {
        Self {
            inner: ArcSwap::from_pointee(locale),
        }
    }

    /// Snapshot the current preferred locale
    pub fn get(&self) -> Locale {
        **self.inner.load()
    }

    /// Replace the preferred locale (called by the locale-change listener)
    pub fn set(&self, locale: Locale) {
        self.inner.store(Arc::new(locale));
    }
}

impl Default for CurrentLocale {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
