/*!
 * Error types for the lexis library.
 *
 * Lookups against a backing store can only fail one way, so they share a
 * single `LookupUnavailable` error. Loading the config and seed files
 * reports through `LexisError`; database plumbing uses `anyhow`.
 */

use thiserror::Error;

/// The backing store could not be reached or a lookup query failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Lookup unavailable: {reason}")]
pub struct LookupUnavailable {
    /// Underlying cause, as reported by the store
    pub reason: String,
}

impl LookupUnavailable {
    /// Create a new lookup error with the given cause
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<rusqlite::Error> for LookupUnavailable {
    fn from(error: rusqlite::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<anyhow::Error> for LookupUnavailable {
    fn from(error: anyhow::Error) -> Self {
        // Keep the whole context chain, not just the outermost message
        Self::new(format!("{:#}", error))
    }
}

/// Errors from the surfaces around the lookup core
#[derive(Error, Debug)]
pub enum LexisError {
    /// Invalid, unreadable or unwritable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Seed file could not be read or parsed
    #[error("Seed file error: {0}")]
    Seed(String),
}
