/*!
 * Database schema definitions and migrations.
 *
 * This module contains the SQL schema for the synonym and translation
 * tables and handles schema migrations for version upgrades.
 */

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use rusqlite::{Connection, params};

use crate::search::normalize_term;

/// Current schema version
///
/// v2 added `search_intents.term_folded`.
pub const SCHEMA_VERSION: i32 = 2;

/// Initialize the database schema
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        info!("Initializing database schema v{}", SCHEMA_VERSION);
        create_all_tables(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if current_version < SCHEMA_VERSION {
        info!(
            "Migrating database schema from v{} to v{}",
            current_version, SCHEMA_VERSION
        );
        migrate_schema(conn, current_version)?;
    } else if current_version > SCHEMA_VERSION {
        return Err(anyhow!(
            "Database schema v{} is newer than supported v{}",
            current_version,
            SCHEMA_VERSION
        ));
    } else {
        debug!("Database schema is up to date (v{})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database
fn get_schema_version(conn: &Connection) -> Result<i32> {
    let table_exists: bool = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='schema_version'",
            [],
            |row| row.get(0),
        )
        .context("Failed to check schema_version table existence")?;

    if !table_exists {
        return Ok(0);
    }

    let version: i32 = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .unwrap_or(0);

    Ok(version)
}

/// Set the schema version in the database
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (id, version, updated_at) VALUES (1, ?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

/// Create all database tables
fn create_all_tables(conn: &Connection) -> Result<()> {
    // WAL is silently ignored for in-memory databases
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            version INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    // Synonym/intent table; rowid order is discovery order
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS search_intents (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            term TEXT NOT NULL,
            term_folded TEXT NOT NULL,
            category TEXT,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_search_intents_term_folded ON search_intents(term_folded);
        CREATE INDEX IF NOT EXISTS idx_search_intents_category ON search_intents(category);
        "#,
    )?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS translations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            key TEXT NOT NULL,
            language_code TEXT NOT NULL,
            context TEXT NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(key, language_code, context)
        );

        CREATE INDEX IF NOT EXISTS idx_translations_language_context ON translations(language_code, context);
        "#,
    )?;

    Ok(())
}

/// Migrate schema from an older version
fn migrate_schema(conn: &Connection, from_version: i32) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    if from_version < 2 {
        migrate_v1_to_v2(&tx).context("Failed to migrate schema to v2")?;
    }

    set_schema_version(&tx, SCHEMA_VERSION)?;
    tx.commit()?;
    Ok(())
}

/// Add `term_folded` and fill it for existing rows
fn migrate_v1_to_v2(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        ALTER TABLE search_intents ADD COLUMN term_folded TEXT NOT NULL DEFAULT '';
        DROP INDEX IF EXISTS idx_search_intents_term;
        CREATE INDEX IF NOT EXISTS idx_search_intents_term_folded ON search_intents(term_folded);
        "#,
    )?;

    let rows: Vec<(i64, String)> = {
        let mut stmt = conn.prepare("SELECT id, term FROM search_intents")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows
    };

    let mut update = conn.prepare("UPDATE search_intents SET term_folded = ?1 WHERE id = ?2")?;
    for (id, term) in &rows {
        update.execute(params![normalize_term(term), id])?;
    }

    debug!("Folded {} existing synonym terms", rows.len());
    Ok(())
}
