/*!
 * # lexis - search expansion and localized strings for listings sites
 *
 * A Rust library used by a classifieds/listings web application to broaden
 * free-text searches through a synonym table and to resolve localized
 * interface strings with a predictable fallback.
 *
 * ## Features
 *
 * - Expand a search term into same-category synonyms (capped, ordered,
 *   deduplicated)
 * - Build parameterized "contains any" predicates for the expanded terms
 * - Resolve (key, language, context) to a localized string, falling back to
 *   the default language, then the default context, then the key itself
 * - Fail open: a broken store degrades results, never errors out
 * - SQLite-backed store with JSON seed import
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `lookup`: Read-only store interfaces and an in-memory store
 * - `search`: Term expansion and predicate building:
 *   - `search::expander`: Synonym expansion
 *   - `search::predicate`: OR-of-substring predicate descriptors
 * - `i18n`: Translation resolution:
 *   - `i18n::resolver`: Fallback chain
 *   - `i18n::cache`: Memoizing store decorator
 * - `database`: SQLite persistence and repository
 * - `app_config`: Configuration management
 * - `language_utils`: Locale code utilities
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod database;
pub mod errors;
pub mod i18n;
pub mod language_utils;
pub mod lookup;
pub mod search;

// Re-export main types for easier usage
pub use app_config::Config;
pub use database::Repository;
pub use errors::{LexisError, LookupUnavailable};
pub use i18n::{CachedTranslations, TranslationKey, TranslationResolver};
pub use lookup::{InMemoryLexicon, SynonymEntry, SynonymSource, TranslationSource};
pub use search::{AnyMatchPredicate, TermExpander, build_any_match_predicate};
