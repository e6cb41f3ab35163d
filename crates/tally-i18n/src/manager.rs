//! The translation resolver

use crate::cache::TranslationCache;
use crate::context::TranslationContext;
use crate::error::{TranslationError, TranslationResult};
use crate::list_format::{ListFormatterTable, ListFragment, MessageElement};
use crate::locale::Locale;
use crate::pluralization::PluralRuleSet;
use crate::resource::{PluralForms, ResourceTable, TemplateOutput, TranslationEntry};
use std::fmt;
use std::sync::{Arc, RwLock};
use tally_common::logging::{AlertHandler, TracingAlertHandler};
use tally_common::Environment;
use tracing::{debug, warn};

/// Placeholder returned to internal accounts when a phrase is missing from
/// every locale in production
pub const MISSING_TRANSLATION: &str = "MISSING TRANSLATION";

/// Session email domain treated as internal/maintainer accounts
const INTERNAL_EMAIL_DOMAIN: &str = "@usetally.app";

/// Resolves phrases against the resource table with cascading fallback
///
/// Resolution tries the full locale, then its 2-letter language, then the
/// default locale, returning the first hit. Parameterless literals are
/// memoized per locale in an owned [`TranslationCache`]; plural templates
/// dispatch through CLDR cardinal rules. What happens when the whole
/// cascade misses depends on the [`Environment`]: development fails with
/// [`TranslationError::NotFound`], production and staging alert and degrade
/// to a placeholder.
///
/// Every operation takes the locale as an explicit argument. Callers that
/// track the user's preference snapshot it from
/// [`CurrentLocale`](crate::CurrentLocale) once per call, so a concurrent
/// locale change can never pollute cache keys.
pub struct Localizer {
    resources: Arc<ResourceTable>,
    cache: TranslationCache,
    plural_rules: PluralRuleSet,
    list_formatters: ListFormatterTable,
    environment: Environment,
    user_email: RwLock<Option<String>>,
    alerts: Arc<dyn AlertHandler>,
}

impl Localizer {
    /// Create a localizer with a fresh cache
    pub fn new(resources: ResourceTable, environment: Environment) -> Self {
        Self::with_cache(resources, TranslationCache::new(), environment)
    }

    /// Create a localizer around an externally constructed cache
    pub fn with_cache(
        resources: ResourceTable,
        cache: TranslationCache,
        environment: Environment,
    ) -> Self {
        Self {
            resources: Arc::new(resources),
            cache,
            plural_rules: PluralRuleSet::new(),
            list_formatters: ListFormatterTable::new(),
            environment,
            user_email: RwLock::new(None),
            alerts: Arc::new(TracingAlertHandler),
        }
    }

    /// Replace the alert sink (tests count alerts through this)
    pub fn with_alert_handler(mut self, alerts: Arc<dyn AlertHandler>) -> Self {
        self.alerts = alerts;
        self
    }

    /// Record the session email, used only to pick the degraded output for
    /// missing phrases in production
    pub fn set_user_email(&self, email: impl Into<String>) {
        *self.user_email.write().unwrap() = Some(email.into());
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn resources(&self) -> &ResourceTable {
        &self.resources
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Resolve a phrase for a locale
    ///
    /// `params` feeds template entries; literal entries ignore it. Plural
    /// templates require `params` to carry a count — resolving one without
    /// it is a caller contract violation and degrades to the "other" form.
    pub fn translate(
        &self,
        locale: Locale,
        path: &str,
        params: Option<&TranslationContext>,
    ) -> TranslationResult<String> {
        let language = locale.canonicalize();
        let abbreviation = language.abbreviation();

        // Ordered cascade: full locale, then its language. The default
        // locale runs last, after the not-found alert for the language.
        let mut steps = vec![language];
        if abbreviation != language {
            steps.push(abbreviation);
        }

        for (position, step) in steps.iter().enumerate() {
            if let Some(phrase) = self.lookup(*step, path, params)? {
                if position > 0 {
                    debug!("Resolved {path} via fallback locale {step}");
                }
                return Ok(phrase);
            }
        }

        if abbreviation != Locale::DEFAULT {
            self.alerts
                .alert(&format!("{path} was not found in the {abbreviation} locale"));
        }

        if !steps.contains(&Locale::DEFAULT) {
            if let Some(phrase) = self.lookup(Locale::DEFAULT, path, params)? {
                debug!("Resolved {path} via default locale");
                return Ok(phrase);
            }
        }

        self.resolve_missing(path)
    }

    /// Resolve a phrase, substituting a default when resolution fails
    pub fn translate_or_default(
        &self,
        locale: Locale,
        path: &str,
        params: Option<&TranslationContext>,
        default: &str,
    ) -> String {
        self.translate(locale, path, params).unwrap_or_else(|_| {
            warn!("Phrase {path} not found, using default: {default}");
            default.to_string()
        })
    }

    /// Resolve a pluralized phrase for a count
    pub fn translate_plural(
        &self,
        locale: Locale,
        path: &str,
        count: i64,
    ) -> TranslationResult<String> {
        let context = TranslationContext::with_count(count);
        self.translate(locale, path, Some(&context))
    }

    /// Check whether any locale in the cascade can resolve a path
    pub fn has_translation(&self, locale: Locale, path: &str) -> bool {
        let language = locale.canonicalize();
        self.resources.contains(language, path)
            || self.resources.contains(language.abbreviation(), path)
            || self.resources.contains(Locale::DEFAULT, path)
    }

    /// Join items with the locale's separators and conjunction
    pub fn format_list<S: AsRef<str>>(&self, locale: Locale, items: &[S]) -> String {
        self.list_formatters.get(locale).format(items)
    }

    /// Format rich elements into a localized list, keeping the original
    /// element values at the non-separator positions
    pub fn format_element_list<E: MessageElement>(
        &self,
        locale: Locale,
        elements: Vec<E>,
    ) -> Vec<ListFragment<E>> {
        self.list_formatters.get(locale).format_element_list(elements)
    }

    /// Resolve against a single locale: cache, then table
    fn lookup(
        &self,
        locale: Locale,
        path: &str,
        params: Option<&TranslationContext>,
    ) -> TranslationResult<Option<String>> {
        if let Some(cached) = self.cache.get(locale, path) {
            return Ok(Some(cached));
        }

        let Some(entry) = self.resources.entry(locale, path) else {
            return Ok(None);
        };

        match entry {
            TranslationEntry::Literal(phrase) => {
                // Only parameterless literals are memoized; a template's
                // output depends on call-site parameters.
                self.cache.insert(locale, path, phrase);
                Ok(Some(phrase.clone()))
            }
            TranslationEntry::Template(template) => {
                let empty = TranslationContext::new();
                let context = params.unwrap_or(&empty);
                match template(context) {
                    TemplateOutput::Text(phrase) => Ok(Some(phrase)),
                    TemplateOutput::Plural(forms) => self
                        .select_plural(locale, path, context, &forms)
                        .map(Some),
                }
            }
        }
    }

    /// Pick the plural form for the context's count under the locale's rules
    fn select_plural(
        &self,
        locale: Locale,
        path: &str,
        context: &TranslationContext,
        forms: &PluralForms,
    ) -> TranslationResult<String> {
        let Some(count) = context.count else {
            // Caller contract: plural templates require a count parameter.
            warn!("Plural phrase {path} resolved without a count, using 'other' form");
            return Ok(forms.other().to_string());
        };

        let category = self.plural_rules.select(locale, count)?;
        if let Some(phrase) = forms.get(category) {
            return Ok(phrase.to_string());
        }

        self.alerts.alert(&format!(
            "Plural form {category} is not found for {path}, using 'other' form"
        ));
        Ok(forms.other().to_string())
    }

    /// The whole cascade came up empty
    fn resolve_missing(&self, path: &str) -> TranslationResult<String> {
        if self.environment.is_production_like() {
            self.alerts.alert(&format!(
                "{path} was not found in the {} locale",
                Locale::DEFAULT
            ));
            if self.is_internal_user() {
                return Ok(MISSING_TRANSLATION.to_string());
            }
            // Show the raw path to end users; it reads better than a sentinel.
            return Ok(path.to_string());
        }
        Err(TranslationError::NotFound {
            path: path.to_string(),
        })
    }

    fn is_internal_user(&self) -> bool {
        self.user_email
            .read()
            .unwrap()
            .as_deref()
            .is_some_and(|email| email.contains(INTERNAL_EMAIL_DOMAIN))
    }
}

impl fmt::Debug for Localizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localizer")
            .field("environment", &self.environment)
            .field("locales", &self.resources.locales())
            .field("cached_phrases", &self.cache.len())
            .finish()
    }
}
