/*!
 * Repository layer for database operations.
 *
 * This module provides a high-level API over the synonym and translation
 * tables, abstracting away the SQL details. `Repository` is also the SQLite
 * implementation of both lookup traits.
 */

use anyhow::Result;
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension, params};

use super::connection::{DatabaseConnection, DatabaseStats};
use super::models::{SeedFile, SynonymRecord, TranslationRecord};
use crate::errors::LookupUnavailable;
use crate::i18n::TranslationKey;
use crate::language_utils::normalize_locale;
use crate::lookup::{SynonymSource, TranslationSource};
use crate::search::normalize_term;

/// Repository for database operations
#[derive(Clone, Debug)]
pub struct Repository {
    /// Database connection
    db: DatabaseConnection,
}

/// Rows written by a seed import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    /// Synonym rows inserted
    pub synonyms: usize,
    /// Translation rows inserted or replaced
    pub translations: usize,
}

impl Repository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Underlying connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Table statistics
    pub fn stats(&self) -> Result<DatabaseStats> {
        self.db.stats()
    }

    // =========================================================================
    // Synonym Operations
    // =========================================================================

    /// Category of a term, exact case-insensitive match, earliest row wins
    ///
    /// Matches on `term_folded`, written with the same Unicode folding as
    /// the search input, since SQLite's `lower` only folds ASCII.
    pub fn find_synonym_category(&self, term: &str) -> Result<Option<String>> {
        let needle = normalize_term(term);

        self.db.execute(move |conn| {
            let category = conn
                .query_row(
                    r#"
                    SELECT category FROM search_intents
                    WHERE term_folded = ?1 AND category IS NOT NULL
                    ORDER BY id
                    LIMIT 1
                    "#,
                    [needle],
                    |row| row.get(0),
                )
                .optional()?;

            Ok(category)
        })
    }

    /// Every term in a category, in discovery order
    pub fn find_terms_by_category(&self, category: &str) -> Result<Vec<String>> {
        self.db.execute(|conn| {
            let mut stmt =
                conn.prepare("SELECT term FROM search_intents WHERE category = ?1 ORDER BY id")?;

            let terms = stmt
                .query_map([category], |row| row.get(0))?
                .collect::<rusqlite::Result<Vec<String>>>()?;

            Ok(terms)
        })
    }

    /// Append a synonym row, returning its id
    pub fn add_synonym(&self, term: &str, category: Option<&str>) -> Result<i64> {
        let now = chrono::Utc::now().to_rfc3339();

        self.db.execute(|conn| {
            let id = Self::insert_synonym_sync(conn, term, category, &now)?;
            debug!("Added synonym '{}' -> {:?}", term, category);
            Ok(id)
        })
    }

    fn insert_synonym_sync(
        conn: &Connection,
        term: &str,
        category: Option<&str>,
        created_at: &str,
    ) -> Result<i64> {
        conn.execute(
            "INSERT INTO search_intents (term, term_folded, category, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![term.trim(), normalize_term(term), category, created_at],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Remove every row for a term, case-insensitively
    pub fn remove_synonym(&self, term: &str) -> Result<usize> {
        let needle = normalize_term(term);

        self.db.execute(move |conn| {
            let deleted = conn.execute("DELETE FROM search_intents WHERE term_folded = ?1", [needle])?;
            Ok(deleted)
        })
    }

    /// All synonym rows in discovery order
    pub fn list_synonyms(&self) -> Result<Vec<SynonymRecord>> {
        self.db.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, term, category, created_at FROM search_intents ORDER BY id",
            )?;

            let records = stmt
                .query_map([], |row| {
                    Ok(SynonymRecord {
                        id: row.get(0)?,
                        term: row.get(1)?,
                        category: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(records)
        })
    }

    // =========================================================================
    // Translation Operations
    // =========================================================================

    /// Value stored for exactly this key
    pub fn find_translation(&self, key: &TranslationKey) -> Result<Option<String>> {
        self.db.execute(|conn| {
            let value = conn
                .query_row(
                    r#"
                    SELECT value FROM translations
                    WHERE key = ?1 AND language_code = ?2 AND context = ?3
                    "#,
                    params![key.key, key.language, key.context],
                    |row| row.get(0),
                )
                .optional()?;

            Ok(value)
        })
    }

    /// Insert a translation or replace the value of the existing row
    pub fn upsert_translation(&self, record: &TranslationRecord) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();

        self.db.execute(|conn| {
            Self::upsert_translation_sync(conn, record, &now)?;
            debug!("Stored translation {}", record.translation_key());
            Ok(())
        })
    }

    fn upsert_translation_sync(
        conn: &Connection,
        record: &TranslationRecord,
        updated_at: &str,
    ) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO translations (key, language_code, context, value, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(key, language_code, context)
            DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
            params![
                record.key,
                normalize_locale(&record.language_code),
                record.context,
                record.value,
                updated_at,
            ],
        )?;
        Ok(())
    }

    /// Delete a translation, returning whether a row existed
    pub fn delete_translation(&self, key: &TranslationKey) -> Result<bool> {
        self.db.execute(|conn| {
            let deleted = conn.execute(
                "DELETE FROM translations WHERE key = ?1 AND language_code = ?2 AND context = ?3",
                params![key.key, key.language, key.context],
            )?;
            Ok(deleted > 0)
        })
    }

    /// All translations of a language and context, ordered by key
    pub fn list_translations(&self, language: &str, context: &str) -> Result<Vec<TranslationRecord>> {
        let language = normalize_locale(language);

        self.db.execute(|conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT key, language_code, context, value, updated_at
                FROM translations
                WHERE language_code = ?1 AND context = ?2
                ORDER BY key
                "#,
            )?;

            let records = stmt
                .query_map(params![language, context], |row| {
                    Ok(TranslationRecord {
                        key: row.get(0)?,
                        language_code: row.get(1)?,
                        context: row.get(2)?,
                        value: row.get(3)?,
                        updated_at: row.get(4)?,
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(records)
        })
    }

    // =========================================================================
    // Bulk Operations
    // =========================================================================

    /// Load a seed file in a single transaction
    ///
    /// Synonyms are appended in file order. Translations replace existing
    /// rows with the same (key, language, context).
    pub async fn import_seed(&self, seed: SeedFile) -> Result<ImportSummary> {
        let now = chrono::Utc::now().to_rfc3339();

        let summary = self
            .db
            .transaction_async(move |tx| {
                let mut summary = ImportSummary::default();

                for entry in &seed.synonyms {
                    if entry.term.trim().is_empty() {
                        continue;
                    }
                    Self::insert_synonym_sync(tx, &entry.term, entry.category.as_deref(), &now)?;
                    summary.synonyms += 1;
                }

                for record in &seed.translations {
                    Self::upsert_translation_sync(tx, record, &now)?;
                    summary.translations += 1;
                }

                Ok(summary)
            })
            .await?;

        info!(
            "Imported {} synonyms and {} translations",
            summary.synonyms, summary.translations
        );
        Ok(summary)
    }
}

impl SynonymSource for Repository {
    fn lookup_synonym_category(&self, term: &str) -> Result<Option<String>, LookupUnavailable> {
        Ok(self.find_synonym_category(term)?)
    }

    fn lookup_terms_by_category(&self, category: &str) -> Result<Vec<String>, LookupUnavailable> {
        Ok(self.find_terms_by_category(category)?)
    }
}

impl TranslationSource for Repository {
    fn lookup_translation(&self, key: &TranslationKey) -> Result<Option<String>, LookupUnavailable> {
        Ok(self.find_translation(key)?)
    }
}
