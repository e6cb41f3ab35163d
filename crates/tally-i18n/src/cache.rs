//! Memoized translation cache

use crate::locale::Locale;
use std::collections::HashMap;
use std::sync::RwLock;

/// Cache of resolved parameterless phrases, keyed by canonical locale and path
///
/// Only literal entries are memoized: a templated phrase depends on the
/// call-site parameters, so caching one rendering would hand stale text to
/// the next caller. Entries are never evicted or replaced; a duplicate
/// insert keeps the first value, which by the resource-table immutability
/// invariant is identical anyway.
///
/// The cache is owned by its [`Localizer`](crate::Localizer) rather than
/// living in a module-level static, so tests get isolation by constructing
/// a fresh instance.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: RwLock<HashMap<Locale, HashMap<String, String>>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached phrase
    pub fn get(&self, locale: Locale, path: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap()
            .get(&locale)
            .and_then(|phrases| phrases.get(path))
            .cloned()
    }

    /// Store a resolved literal phrase; an existing entry is kept as-is
    pub fn insert(&self, locale: Locale, path: &str, value: &str) {
        self.entries
            .write()
            .unwrap()
            .entry(locale)
            .or_default()
            .entry(path.to_string())
            .or_insert_with(|| value.to_string());
    }

    /// Total number of cached phrases across all locales
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap()
            .values()
            .map(HashMap::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
