/*!
 * Translation lookup with fallback.
 *
 * Candidates are tried in order and the first stored value wins:
 * 1. requested language and context
 * 2. default language, same context
 * 3. requested language, fallback context
 * 4. the key itself
 *
 * A store failure at any step collapses to the literal key in `resolve`,
 * so a missing or unreachable translation never breaks page rendering.
 */

use log::{debug, warn};

use crate::app_config::Config;
use crate::errors::LookupUnavailable;
use crate::language_utils::normalize_locale;
use crate::lookup::TranslationSource;

use super::key::TranslationKey;

/// Context used by the third fallback step
pub const DEFAULT_FALLBACK_CONTEXT: &str = "default";

/// Language used by the second fallback step when none is configured
pub const DEFAULT_LANGUAGE: &str = "en-us";

/// Which step of the fallback chain produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Requested language and context
    Exact,
    /// Default language, requested context
    DefaultLanguage,
    /// Requested language, fallback context
    FallbackContext,
    /// No row found, the key itself was returned
    Literal,
}

/// Resolved value together with the step that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Localized string, or the key when nothing matched
    pub value: String,

    /// Fallback step that produced the value
    pub source: ResolutionSource,
}

/// Resolves translation keys against an injected store
#[derive(Debug, Clone)]
pub struct TranslationResolver<S> {
    source: S,
    default_language: String,
    fallback_context: String,
}

impl<S: TranslationSource> TranslationResolver<S> {
    /// Create a resolver with the given default language and the `default` fallback context
    pub fn new(source: S, default_language: &str) -> Self {
        Self {
            source,
            default_language: normalize_locale(default_language),
            fallback_context: DEFAULT_FALLBACK_CONTEXT.to_string(),
        }
    }

    /// Create a resolver from application configuration
    pub fn from_config(source: S, config: &Config) -> Self {
        Self::new(source, &config.default_language).with_fallback_context(&config.fallback_context)
    }

    /// Override the context used by the third fallback step
    pub fn with_fallback_context(mut self, context: &str) -> Self {
        self.fallback_context = context.to_string();
        self
    }

    /// Normalized default language
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Context used by the third fallback step
    pub fn fallback_context(&self) -> &str {
        &self.fallback_context
    }

    /// Borrow the underlying store
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve a key, never failing
    pub fn resolve(&self, key: &str, language: &str, context: &str) -> String {
        match self.try_resolve(key, language, context) {
            Ok(resolution) => resolution.value,
            Err(e) => {
                warn!("Translation lookup for '{}' failed, using key: {}", key, e);
                key.to_string()
            }
        }
    }

    /// Resolve a key and substitute `{name}` placeholders
    pub fn resolve_with(
        &self,
        key: &str,
        language: &str,
        context: &str,
        params: &[(&str, &str)],
    ) -> String {
        interpolate(&self.resolve(key, language, context), params)
    }

    /// Resolve a key, surfacing store failures
    pub fn try_resolve(
        &self,
        key: &str,
        language: &str,
        context: &str,
    ) -> Result<Resolution, LookupUnavailable> {
        let requested = TranslationKey::new(key, language, context);

        for (candidate, source) in self.fallback_chain(&requested) {
            match self.source.lookup_translation(&candidate)? {
                Some(value) if !value.is_empty() => {
                    debug!("Resolved {} via {:?}", requested, source);
                    return Ok(Resolution { value, source });
                }
                Some(_) => debug!("Empty translation stored for {}, skipping", candidate),
                None => {}
            }
        }

        debug!("No translation for {}, using key", requested);
        Ok(Resolution {
            value: key.to_string(),
            source: ResolutionSource::Literal,
        })
    }

    /// Candidate rows for a key, in lookup order, without repeats
    pub fn fallback_chain(&self, requested: &TranslationKey) -> Vec<(TranslationKey, ResolutionSource)> {
        let candidates = [
            (requested.clone(), ResolutionSource::Exact),
            (
                requested.with_language(&self.default_language),
                ResolutionSource::DefaultLanguage,
            ),
            (
                requested.with_context(&self.fallback_context),
                ResolutionSource::FallbackContext,
            ),
        ];

        let mut chain: Vec<(TranslationKey, ResolutionSource)> = Vec::with_capacity(candidates.len());
        for (candidate, source) in candidates {
            if !chain.iter().any(|(seen, _)| *seen == candidate) {
                chain.push((candidate, source));
            }
        }
        chain
    }
}

/// Replace `{name}` placeholders with their values
///
/// Placeholders without a matching parameter are left as they are.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}
