/*!
 * Broadened listing search.
 *
 * - `expander`: term -> term plus same-category synonyms
 * - `predicate`: terms -> parameterized OR-of-substring predicate
 */

pub mod expander;
pub mod predicate;

pub use expander::{DEFAULT_MAX_TERMS, ExpandedTerms, TermExpander, normalize_term};
pub use predicate::{AnyMatchPredicate, build_any_match_predicate, wrap_substring};
