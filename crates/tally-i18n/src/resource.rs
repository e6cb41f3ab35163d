//! Translation resource tables and locale catalogs

use crate::context::TranslationContext;
use crate::error::{TranslationError, TranslationResult};
use crate::locale::Locale;
use crate::pluralization::PluralCategory;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// A template closure: renders a phrase from call-site parameters
pub type TemplateFn = Box<dyn Fn(&TranslationContext) -> TemplateOutput + Send + Sync>;

/// One leaf translation resource
pub enum TranslationEntry {
    /// A plain phrase with no parameters; eligible for memoization
    Literal(String),
    /// A parameterized phrase; rendered fresh on every resolution
    Template(TemplateFn),
}

impl fmt::Debug for TranslationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Template(_) => f.debug_tuple("Template").field(&"<fn>").finish(),
        }
    }
}

/// What a template produced for one invocation
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateOutput {
    /// A finished phrase
    Text(String),
    /// Per-category phrases still awaiting plural selection
    Plural(PluralForms),
}

/// Phrases for the CLDR plural categories
///
/// "other" is mandatory: it is both a category in its own right and the
/// degradation target when a translator skipped one the locale's rules can
/// select.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralForms {
    zero: Option<String>,
    one: Option<String>,
    two: Option<String>,
    few: Option<String>,
    many: Option<String>,
    other: String,
}

impl PluralForms {
    /// Create plural forms with the mandatory "other" phrase
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            zero: None,
            one: None,
            two: None,
            few: None,
            many: None,
            other: other.into(),
        }
    }

    pub fn zero(mut self, phrase: impl Into<String>) -> Self {
        self.zero = Some(phrase.into());
        self
    }

    pub fn one(mut self, phrase: impl Into<String>) -> Self {
        self.one = Some(phrase.into());
        self
    }

    pub fn two(mut self, phrase: impl Into<String>) -> Self {
        self.two = Some(phrase.into());
        self
    }

    pub fn few(mut self, phrase: impl Into<String>) -> Self {
        self.few = Some(phrase.into());
        self
    }

    pub fn many(mut self, phrase: impl Into<String>) -> Self {
        self.many = Some(phrase.into());
        self
    }

    /// Get the phrase for a category, if the catalog provides one
    pub fn get(&self, category: PluralCategory) -> Option<&str> {
        match category {
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Two => self.two.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
            PluralCategory::Other => Some(&self.other),
        }
    }

    /// Get the mandatory "other" phrase
    pub fn other(&self) -> &str {
        &self.other
    }
}

/// All translation resources, keyed by canonical locale and dotted path
///
/// Built once at process start and read-only afterwards. Literal entries
/// come either from code or from per-locale JSON catalogs; template entries
/// are registered from code, since they are closures.
#[derive(Debug, Default)]
pub struct ResourceTable {
    entries: HashMap<Locale, HashMap<String, TranslationEntry>>,
    lookups: AtomicU64,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a literal phrase
    pub fn set_literal(
        &mut self,
        locale: Locale,
        path: impl Into<String>,
        phrase: impl Into<String>,
    ) {
        self.entries
            .entry(locale.canonicalize())
            .or_default()
            .insert(path.into(), TranslationEntry::Literal(phrase.into()));
    }

    /// Register a template phrase
    pub fn set_template<F>(&mut self, locale: Locale, path: impl Into<String>, template: F)
    where
        F: Fn(&TranslationContext) -> TemplateOutput + Send + Sync + 'static,
    {
        self.entries
            .entry(locale.canonicalize())
            .or_default()
            .insert(path.into(), TranslationEntry::Template(Box::new(template)));
    }

    /// Look up the entry for a locale and path
    ///
    /// Counts toward [`lookup_count`](Self::lookup_count); resolution code
    /// reaches the table through here, so the counter exposes how well the
    /// memoization cache is shielding it.
    pub fn entry(&self, locale: Locale, path: &str) -> Option<&TranslationEntry> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.entries
            .get(&locale.canonicalize())
            .and_then(|phrases| phrases.get(path))
    }

    /// Check whether a phrase exists for a locale without counting a lookup
    pub fn contains(&self, locale: Locale, path: &str) -> bool {
        self.entries
            .get(&locale.canonicalize())
            .is_some_and(|phrases| phrases.contains_key(path))
    }

    /// Locales with at least one registered phrase
    pub fn locales(&self) -> Vec<Locale> {
        self.entries.keys().copied().collect()
    }

    /// Number of phrases registered for a locale
    pub fn len(&self, locale: Locale) -> usize {
        self.entries
            .get(&locale.canonicalize())
            .map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }

    /// Number of resolution lookups performed against this table
    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Load a locale's literal phrases from a JSON catalog file
    ///
    /// The catalog is a nested object whose string leaves become literal
    /// entries at dotted paths (`{"settings": {"title": "Settings"}}` →
    /// `settings.title`). Returns the number of phrases added.
    pub fn load_locale_file(
        &mut self,
        locale: Locale,
        path: impl AsRef<Path>,
    ) -> TranslationResult<usize> {
        let path = path.as_ref();
        debug!("Loading catalog for locale {locale} from {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| TranslationError::ResourceLoad {
            path: path.display().to_string(),
            source,
        })?;
        let document: Value =
            serde_json::from_str(&content).map_err(|err| TranslationError::ResourceParse {
                path: path.display().to_string(),
                detail: err.to_string(),
            })?;
        let Value::Object(root) = document else {
            return Err(TranslationError::ResourceParse {
                path: path.display().to_string(),
                detail: "catalog root must be an object".to_string(),
            });
        };

        let added = self.flatten_object(locale, "", &root, path)?;
        info!(
            "Loaded {added} phrases for locale {locale} from {}",
            path.display()
        );
        Ok(added)
    }

    /// Load every canonical locale's catalog from a directory
    ///
    /// Missing files are skipped: a locale may ship templates from code
    /// only. Returns the total number of phrases added.
    pub fn load_dir(&mut self, base_dir: impl AsRef<Path>) -> TranslationResult<usize> {
        let base_dir = base_dir.as_ref();
        let mut added = 0;
        for locale in Locale::all() {
            if locale != locale.canonicalize() {
                continue;
            }
            let file = base_dir.join(locale.resource_file());
            if !file.exists() {
                debug!("No catalog for locale {locale} at {}", file.display());
                continue;
            }
            added += self.load_locale_file(locale, &file)?;
        }
        Ok(added)
    }

    fn flatten_object(
        &mut self,
        locale: Locale,
        prefix: &str,
        object: &serde_json::Map<String, Value>,
        file: &Path,
    ) -> TranslationResult<usize> {
        let mut added = 0;
        for (key, value) in object {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match value {
                Value::String(phrase) => {
                    self.set_literal(locale, path, phrase.clone());
                    added += 1;
                }
                Value::Object(nested) => {
                    added += self.flatten_object(locale, &path, nested, file)?;
                }
                other => {
                    return Err(TranslationError::ResourceParse {
                        path: file.display().to_string(),
                        detail: format!(
                            "unsupported value at {path}: expected string or object, found {}",
                            json_type_name(other)
                        ),
                    });
                }
            }
        }
        Ok(added)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
