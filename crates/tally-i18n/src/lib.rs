//! Localization support for the Tally expense management app
//!
//! This crate is the translation core behind every user-visible string in
//! Tally. It resolves dotted phrase paths against per-locale resource
//! tables with cascading fallback, memoizes parameterless phrases, selects
//! CLDR plural forms, and formats locale-aware conjunction lists. It
//! includes:
//!
//! - Locale management with legacy-alias canonicalization
//! - A resource table of literal and template phrases, loadable from JSON
//!   catalogs
//! - Fallback resolution: full locale → language → default locale
//! - CLDR plural-category dispatch with graceful degradation
//! - Conjunction list formatting, including rich-element re-threading
//!
//! # Example
//!
//! ```rust
//! use tally_common::Environment;
//! use tally_i18n::{Locale, Localizer, ResourceTable};
//!
//! let mut resources = ResourceTable::new();
//! resources.set_literal(Locale::English, "common.save", "Save");
//! resources.set_literal(Locale::SpanishSpain, "common.save", "Guardar");
//!
//! let localizer = Localizer::new(resources, Environment::Development);
//!
//! let phrase = localizer.translate(Locale::SpanishSpain, "common.save", None).unwrap();
//! assert_eq!(phrase, "Guardar");
//!
//! // "es" has no phrase of its own, so resolution falls back to the default locale.
//! let phrase = localizer.translate(Locale::Spanish, "common.save", None).unwrap();
//! assert_eq!(phrase, "Save");
//! ```

pub mod cache;
pub mod context;
pub mod error;
pub mod list_format;
pub mod locale;
pub mod manager;
pub mod pluralization;
pub mod resource;

pub use cache::TranslationCache;
pub use context::{ParamValue, TranslationContext};
pub use error::{TranslationError, TranslationResult};
pub use list_format::{
    ConjunctionFormatter, ListFormatterTable, ListFragment, ListPart, MessageElement, TextFragment,
};
pub use locale::{CurrentLocale, Locale};
pub use manager::{Localizer, MISSING_TRANSLATION};
pub use pluralization::{PluralCategory, PluralRuleSet};
pub use resource::{PluralForms, ResourceTable, TemplateFn, TemplateOutput, TranslationEntry};
