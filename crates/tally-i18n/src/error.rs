//! Error types for localization operations

use thiserror::Error;

/// Errors that can occur during localization operations
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// The full fallback cascade was exhausted without a result
    ///
    /// Raised only in development so missing phrases surface while the
    /// feature is being authored; production and staging degrade to a
    /// placeholder instead.
    #[error("{path} was not found in the default language")]
    NotFound { path: String },

    /// Plural rules could not be built or applied for a locale
    #[error("Failed to apply plural rules for locale {locale}: {reason}")]
    PluralRules { locale: String, reason: String },

    /// Failed to read a locale catalog file
    #[error("Failed to load locale catalog: {path}")]
    ResourceLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A locale catalog file was readable but malformed
    #[error("Failed to parse locale catalog {path}: {detail}")]
    ResourceParse { path: String, detail: String },
}

/// Result type for localization operations
pub type TranslationResult<T> = Result<T, TranslationError>;

impl From<TranslationError> for tally_common::TallyError {
    fn from(err: TranslationError) -> Self {
        let locale = match &err {
            TranslationError::PluralRules { locale, .. } => Some(locale.clone()),
            TranslationError::InvalidLanguageId(id) => Some(id.clone()),
            _ => None,
        };
        tally_common::TallyError::Localization {
            message: err.to_string(),
            locale,
            source: Some(Box::new(err)),
        }
    }
}
