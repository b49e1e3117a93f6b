/*!
 * Typed address of a translation row.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language_utils::normalize_locale;

/// (key, language, context) triple identifying at most one translation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationKey {
    /// Message key, e.g. `greeting`
    pub key: String,

    /// Normalized locale code, e.g. `en-us`
    pub language: String,

    /// Namespace grouping related keys, e.g. `email_templates`
    pub context: String,
}

impl TranslationKey {
    /// Create a key, normalizing the language code
    pub fn new(key: &str, language: &str, context: &str) -> Self {
        Self {
            key: key.to_string(),
            language: normalize_locale(language),
            context: context.to_string(),
        }
    }

    /// Same key and context in another language
    pub fn with_language(&self, language: &str) -> Self {
        Self {
            key: self.key.clone(),
            language: normalize_locale(language),
            context: self.context.clone(),
        }
    }

    /// Same key and language in another context
    pub fn with_context(&self, context: &str) -> Self {
        Self {
            key: self.key.clone(),
            language: self.language.clone(),
            context: context.to_string(),
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.context, self.language, self.key)
    }
}
