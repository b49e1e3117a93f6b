/*!
 * Database entity models and DTOs.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::LexisError;
use crate::i18n::TranslationKey;
use crate::language_utils::normalize_locale;
use crate::lookup::SynonymEntry;

/// Row of the `search_intents` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymRecord {
    /// Row id; ascending ids are discovery order
    pub id: i64,
    /// Search term as stored
    pub term: String,
    /// Shared category, if any
    pub category: Option<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl From<SynonymRecord> for SynonymEntry {
    fn from(record: SynonymRecord) -> Self {
        Self {
            term: record.term,
            category: record.category,
        }
    }
}

/// Row of the `translations` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Message key
    pub key: String,
    /// Locale code, normalized on write
    pub language_code: String,
    /// Namespace of the key
    pub context: String,
    /// Localized text
    pub value: String,
    /// Last update timestamp (RFC 3339); empty for records not yet stored
    #[serde(default)]
    pub updated_at: String,
}

impl TranslationRecord {
    /// Create a new record ready to be stored
    pub fn new(key: &str, language_code: &str, context: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            language_code: normalize_locale(language_code),
            context: context.to_string(),
            value: value.to_string(),
            updated_at: String::new(),
        }
    }

    /// Typed address of this row
    pub fn translation_key(&self) -> TranslationKey {
        TranslationKey::new(&self.key, &self.language_code, &self.context)
    }
}

/// JSON document used to bulk-load the tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFile {
    /// Synonym rows, in discovery order
    #[serde(default)]
    pub synonyms: Vec<SynonymEntry>,

    /// Translation rows
    #[serde(default)]
    pub translations: Vec<TranslationRecord>,
}

impl SeedFile {
    /// Read a seed file from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexisError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| LexisError::Seed(format!("Failed to open seed file {:?}: {}", path, e)))?;

        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| LexisError::Seed(format!("Failed to parse seed file {:?}: {}", path, e)))
    }

    /// Check if the seed file holds no rows
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty() && self.translations.is_empty()
    }
}
