/*!
 * Read-only data accessors the search and translation core depends on.
 *
 * The host application owns the tables; the core only sees these traits.
 * `InMemoryLexicon` is a ready-made implementation for hosts that preload
 * their tables at startup.
 */

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::errors::LookupUnavailable;
use crate::i18n::TranslationKey;
use crate::search::normalize_term;

/// One row of the synonym/intent table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    /// Free-text search term
    pub term: String,

    /// Shared category, if the term belongs to one
    #[serde(default)]
    pub category: Option<String>,
}

impl SynonymEntry {
    /// Create an entry mapped to a category
    pub fn new(term: &str, category: &str) -> Self {
        Self {
            term: term.to_string(),
            category: Some(category.to_string()),
        }
    }

    /// Create an entry with no category
    pub fn uncategorized(term: &str) -> Self {
        Self {
            term: term.to_string(),
            category: None,
        }
    }
}

/// Lookups against the synonym/intent table
pub trait SynonymSource: Send + Sync {
    /// Category of a term, matched exactly and case-insensitively
    fn lookup_synonym_category(&self, term: &str) -> Result<Option<String>, LookupUnavailable>;

    /// Every term mapped to a category, in store order
    fn lookup_terms_by_category(&self, category: &str) -> Result<Vec<String>, LookupUnavailable>;
}

/// Lookups against the translation table
pub trait TranslationSource: Send + Sync {
    /// Value stored for exactly this (key, language, context), if any
    fn lookup_translation(&self, key: &TranslationKey) -> Result<Option<String>, LookupUnavailable>;
}

impl<S: SynonymSource + ?Sized> SynonymSource for &S {
    fn lookup_synonym_category(&self, term: &str) -> Result<Option<String>, LookupUnavailable> {
        (**self).lookup_synonym_category(term)
    }

    fn lookup_terms_by_category(&self, category: &str) -> Result<Vec<String>, LookupUnavailable> {
        (**self).lookup_terms_by_category(category)
    }
}

impl<S: SynonymSource + ?Sized> SynonymSource for Arc<S> {
    fn lookup_synonym_category(&self, term: &str) -> Result<Option<String>, LookupUnavailable> {
        (**self).lookup_synonym_category(term)
    }

    fn lookup_terms_by_category(&self, category: &str) -> Result<Vec<String>, LookupUnavailable> {
        (**self).lookup_terms_by_category(category)
    }
}

impl<S: TranslationSource + ?Sized> TranslationSource for &S {
    fn lookup_translation(&self, key: &TranslationKey) -> Result<Option<String>, LookupUnavailable> {
        (**self).lookup_translation(key)
    }
}

impl<S: TranslationSource + ?Sized> TranslationSource for Arc<S> {
    fn lookup_translation(&self, key: &TranslationKey) -> Result<Option<String>, LookupUnavailable> {
        (**self).lookup_translation(key)
    }
}

/// Thread-safe in-memory synonym and translation tables
#[derive(Debug, Default)]
pub struct InMemoryLexicon {
    /// Synonym rows in insertion order
    synonyms: RwLock<Vec<SynonymEntry>>,

    /// Translation rows, one per key
    translations: RwLock<HashMap<TranslationKey, String>>,
}

impl InMemoryLexicon {
    /// Create empty tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a synonym row
    pub fn add_synonym(&self, entry: SynonymEntry) {
        self.synonyms.write().push(entry);
    }

    /// Insert or replace a translation
    pub fn set_translation(&self, key: TranslationKey, value: &str) {
        self.translations.write().insert(key, value.to_string());
    }

    /// Remove a translation, returning whether a row existed
    pub fn remove_translation(&self, key: &TranslationKey) -> bool {
        self.translations.write().remove(key).is_some()
    }

    /// Number of synonym rows
    pub fn synonym_count(&self) -> usize {
        self.synonyms.read().len()
    }

    /// Number of translation rows
    pub fn translation_count(&self) -> usize {
        self.translations.read().len()
    }
}

impl SynonymSource for InMemoryLexicon {
    fn lookup_synonym_category(&self, term: &str) -> Result<Option<String>, LookupUnavailable> {
        let needle = normalize_term(term);
        let synonyms = self.synonyms.read();

        Ok(synonyms
            .iter()
            .filter(|entry| entry.category.is_some())
            .find(|entry| normalize_term(&entry.term) == needle)
            .and_then(|entry| entry.category.clone()))
    }

    fn lookup_terms_by_category(&self, category: &str) -> Result<Vec<String>, LookupUnavailable> {
        let synonyms = self.synonyms.read();

        Ok(synonyms
            .iter()
            .filter(|entry| entry.category.as_deref() == Some(category))
            .map(|entry| entry.term.clone())
            .collect())
    }
}

impl TranslationSource for InMemoryLexicon {
    fn lookup_translation(&self, key: &TranslationKey) -> Result<Option<String>, LookupUnavailable> {
        Ok(self.translations.read().get(key).cloned())
    }
}
