/*!
 * Translation caching functionality.
 *
 * `CachedTranslations` memoizes row lookups of any `TranslationSource`
 * keyed by `TranslationKey`. Misses are cached too, so a page asking for
 * an untranslated key does not hit the store on every render. Store
 * failures are never cached. Admin edits must call `invalidate`.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::errors::LookupUnavailable;
use crate::lookup::TranslationSource;

use super::key::TranslationKey;

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: usize,
    /// Lookups forwarded to the store
    pub misses: usize,
    /// hits / (hits + misses), 0 when unused
    pub hit_rate: f64,
}

/// Memoizing decorator over a translation store
pub struct CachedTranslations<S> {
    /// Wrapped store
    inner: S,

    /// Stored value per key, `None` for a confirmed miss
    cache: Arc<RwLock<HashMap<TranslationKey, Option<String>>>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,

    /// Bumped by every invalidation, under the cache write lock
    generation: Arc<RwLock<u64>>,

    /// Whether caching is enabled
    enabled: bool,
}

impl<S: TranslationSource> CachedTranslations<S> {
    /// Wrap a store
    pub fn new(inner: S, enabled: bool) -> Self {
        Self {
            inner,
            cache: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            generation: Arc::new(RwLock::new(0)),
            enabled,
        }
    }

    /// Drop the cached row for one key
    pub fn invalidate(&self, key: &TranslationKey) {
        let mut cache = self.cache.write();
        *self.generation.write() += 1;
        if cache.remove(key).is_some() {
            debug!("Invalidated cached translation {}", key);
        }
    }

    /// Drop every cached row for a message key, across languages and contexts
    pub fn invalidate_key(&self, key: &str) {
        let mut cache = self.cache.write();
        *self.generation.write() += 1;
        let before = cache.len();
        cache.retain(|cached, _| cached.key != key);
        debug!("Invalidated {} cached rows for '{}'", before - cache.len(), key);
    }

    /// Drop every cached row and reset counters
    pub fn invalidate_all(&self) {
        let mut cache = self.cache.write();
        *self.generation.write() += 1;
        cache.clear();
        drop(cache);

        *self.hits.write() = 0;
        *self.misses.write() = 0;

        debug!("Translation cache cleared");
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        CacheStats { hits, misses, hit_rate }
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Check if the cache is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Borrow the wrapped store
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: TranslationSource> TranslationSource for CachedTranslations<S> {
    fn lookup_translation(&self, key: &TranslationKey) -> Result<Option<String>, LookupUnavailable> {
        if !self.enabled {
            return self.inner.lookup_translation(key);
        }

        if let Some(cached) = self.cache.read().get(key) {
            *self.hits.write() += 1;
            debug!("Cache hit for {}", key);
            return Ok(cached.clone());
        }

        *self.misses.write() += 1;
        debug!("Cache miss for {}", key);

        let generation = *self.generation.read();
        let value = self.inner.lookup_translation(key)?;

        // An invalidation during the store read may have made `value` stale
        let mut cache = self.cache.write();
        if *self.generation.read() == generation {
            cache.insert(key.clone(), value.clone());
        } else {
            debug!("Not caching {}, invalidated during lookup", key);
        }
        Ok(value)
    }
}

impl<S: Clone> Clone for CachedTranslations<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            cache: self.cache.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            generation: self.generation.clone(),
            enabled: self.enabled,
        }
    }
}

impl<S> std::fmt::Debug for CachedTranslations<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedTranslations")
            .field("entries", &self.cache.read().len())
            .field("enabled", &self.enabled)
            .finish()
    }
}
