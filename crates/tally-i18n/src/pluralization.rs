//! CLDR plural-category selection
//!
//! Plural categories come from the CLDR cardinal rules via
//! `intl_pluralrules`, so a Spanish count of 1 maps to "one" while an
//! English 0 maps to "other" without any hand-written per-language tables.

use crate::error::{TranslationError, TranslationResult};
use crate::locale::Locale;
use intl_pluralrules::{PluralRuleType, PluralRules};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

/// A CLDR plural category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Get the CLDR name of this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<intl_pluralrules::PluralCategory> for PluralCategory {
    fn from(category: intl_pluralrules::PluralCategory) -> Self {
        use intl_pluralrules::PluralCategory as Cldr;
        match category {
            Cldr::ZERO => Self::Zero,
            Cldr::ONE => Self::One,
            Cldr::TWO => Self::Two,
            Cldr::FEW => Self::Few,
            Cldr::MANY => Self::Many,
            Cldr::OTHER => Self::Other,
        }
    }
}

/// Lazily-built cardinal plural rules, one instance per canonical locale
///
/// Rule construction parses CLDR data, so instances are kept for the life
/// of the process. The table only grows and an entry is never replaced.
#[derive(Default)]
pub struct PluralRuleSet {
    rules: RwLock<HashMap<Locale, PluralRules>>,
}

impl PluralRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the plural category for a count under a locale's rules
    pub fn select(&self, locale: Locale, count: i64) -> TranslationResult<PluralCategory> {
        let locale = locale.canonicalize();

        {
            let rules = self.rules.read().unwrap();
            if let Some(rules) = rules.get(&locale) {
                return Self::category_for(rules, locale, count);
            }
        }

        // Cardinal rules are defined at language granularity; regional
        // variants share their language's rules.
        let langid = locale.abbreviation().language_identifier()?;
        let rules = PluralRules::create(langid, PluralRuleType::CARDINAL).map_err(|reason| {
            TranslationError::PluralRules {
                locale: locale.code().to_string(),
                reason: reason.to_string(),
            }
        })?;
        let category = Self::category_for(&rules, locale, count)?;
        self.rules.write().unwrap().entry(locale).or_insert(rules);
        Ok(category)
    }

    fn category_for(
        rules: &PluralRules,
        locale: Locale,
        count: i64,
    ) -> TranslationResult<PluralCategory> {
        rules
            .select(count as f64)
            .map(PluralCategory::from)
            .map_err(|reason| TranslationError::PluralRules {
                locale: locale.code().to_string(),
                reason: reason.to_string(),
            })
    }
}

impl fmt::Debug for PluralRuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locales: Vec<Locale> = self.rules.read().unwrap().keys().copied().collect();
        f.debug_struct("PluralRuleSet")
            .field("locales", &locales)
            .finish()
    }
}
