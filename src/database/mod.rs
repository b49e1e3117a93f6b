/*!
 * Database module for the synonym and translation tables.
 *
 * This module provides SQLite-based persistence for:
 * - The synonym/intent table used by search expansion
 * - The translation table used by the resolver
 * - Bulk loading from JSON seed files
 */

pub mod schema;
pub mod connection;
pub mod repository;
pub mod models;

// Re-export main types
pub use connection::{DatabaseConnection, DatabaseStats};
pub use models::{SeedFile, SynonymRecord, TranslationRecord};
pub use repository::{ImportSummary, Repository};
