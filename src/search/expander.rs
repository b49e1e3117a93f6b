/*!
 * Search term expansion.
 *
 * A colloquial search word should also find listings filed under the
 * category it belongs to, and vice versa. The expander looks the term up in
 * the synonym/intent table and returns the term followed by every other
 * term sharing its category.
 */

use std::collections::HashSet;

use log::{debug, warn};

use crate::app_config::Config;
use crate::errors::LookupUnavailable;
use crate::lookup::SynonymSource;

use super::predicate::{AnyMatchPredicate, build_any_match_predicate};

/// Upper bound on expanded terms when none is configured
pub const DEFAULT_MAX_TERMS: usize = 20;

/// Normalize a raw search term: trim and lowercase
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Ordered, case-insensitively deduplicated, capped term list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedTerms {
    terms: Vec<String>,
    seen: HashSet<String>,
    max_terms: usize,
    truncated: bool,
}

impl ExpandedTerms {
    /// Start a list holding only the normalized original term
    fn starting_with(original: String, max_terms: usize) -> Self {
        let mut expanded = Self {
            terms: Vec::new(),
            seen: HashSet::new(),
            max_terms: max_terms.max(1),
            truncated: false,
        };
        expanded.push(&original);
        expanded
    }

    /// Append a term unless it is empty, already present, or the list is full
    ///
    /// Returns whether the term was added.
    fn push(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }

        let dedup_key = term.to_lowercase();
        if self.seen.contains(&dedup_key) {
            return false;
        }

        if self.terms.len() >= self.max_terms {
            self.truncated = true;
            return false;
        }

        self.seen.insert(dedup_key);
        self.terms.push(term.to_string());
        true
    }

    /// The normalized original term, absent only for blank input
    pub fn original(&self) -> Option<&str> {
        self.terms.first().map(String::as_str)
    }

    /// Terms in discovery order
    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True only when the input was blank
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether synonyms were dropped to respect the cap
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Consume into the plain term list
    pub fn into_vec(self) -> Vec<String> {
        self.terms
    }
}

/// Expands search terms through an injected synonym store
#[derive(Debug, Clone)]
pub struct TermExpander<S> {
    source: S,
    max_terms: usize,
}

impl<S: SynonymSource> TermExpander<S> {
    /// Create an expander with the default cap
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_terms: DEFAULT_MAX_TERMS,
        }
    }

    /// Create an expander from application configuration
    pub fn from_config(source: S, config: &Config) -> Self {
        Self::new(source).with_max_terms(config.search.max_terms)
    }

    /// Override the cap; values below 1 are raised to 1
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms.max(1);
        self
    }

    /// Configured cap
    pub fn max_terms(&self) -> usize {
        self.max_terms
    }

    /// Borrow the underlying store
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Expand a term, never failing
    ///
    /// The normalized term always comes first. When the store cannot be
    /// reached the result is just that term. Blank input gives an empty list.
    pub fn expand(&self, term: &str) -> Vec<String> {
        let normalized = normalize_term(term);
        if normalized.is_empty() {
            return Vec::new();
        }

        match self.try_expand(&normalized) {
            Ok(expanded) => expanded.into_vec(),
            Err(e) => {
                warn!("Synonym expansion for '{}' unavailable, searching literal term: {}", normalized, e);
                vec![normalized]
            }
        }
    }

    /// Expand a term, surfacing store failures
    ///
    /// Blank input gives an empty list without querying the store.
    pub fn try_expand(&self, term: &str) -> Result<ExpandedTerms, LookupUnavailable> {
        let normalized = normalize_term(term);
        let mut expanded = ExpandedTerms::starting_with(normalized.clone(), self.max_terms);
        if normalized.is_empty() {
            return Ok(expanded);
        }

        let Some(category) = self.source.lookup_synonym_category(&normalized)? else {
            debug!("No synonym category for '{}'", normalized);
            return Ok(expanded);
        };

        let related = self.source.lookup_terms_by_category(&category)?;
        for synonym in &related {
            expanded.push(synonym);
        }

        if expanded.is_truncated() {
            debug!("Expansion of '{}' capped at {} terms", normalized, self.max_terms);
        }
        debug!("Expanded '{}' via '{}' to {:?}", normalized, category, expanded.as_slice());

        Ok(expanded)
    }

    /// Expand a term and build the matching predicate over a column
    pub fn expand_to_predicate(&self, column: &str, term: &str) -> (AnyMatchPredicate, Vec<String>) {
        let terms = self.expand(term);
        build_any_match_predicate(column, &terms)
    }
}
