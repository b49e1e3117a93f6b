/*!
 * "Match any substring" predicate construction.
 *
 * The builder never runs SQL. It hands the caller a descriptor to splice
 * into its own query and the bound values to pass alongside, one per term,
 * in term order.
 */

use std::fmt;

/// Parameterized OR-of-LIKE predicate over a single column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyMatchPredicate {
    column: String,
    arity: usize,
}

impl AnyMatchPredicate {
    /// Column the predicate tests
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Number of bound parameters the predicate expects
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Render with anonymous `?` placeholders
    pub fn to_sql(&self) -> String {
        self.render(|_| "?".to_string())
    }

    /// Render with numbered `?N` placeholders starting at `first_index`
    pub fn to_sql_numbered(&self, first_index: usize) -> String {
        self.render(|i| format!("?{}", first_index + i))
    }

    /// Evaluate the predicate against a value in memory
    ///
    /// Same semantics as the SQL form: each bound value is a LIKE pattern
    /// where `%` matches any run and `_` exactly one character. Case is
    /// folded for ASCII letters only, as SQLite's `LOWER` does.
    pub fn matches(&self, value: &str, bound: &[String]) -> bool {
        bound
            .iter()
            .take(self.arity)
            .any(|pattern| like_matches(value, pattern))
    }

    fn render<F: Fn(usize) -> String>(&self, placeholder: F) -> String {
        if self.arity == 0 {
            return "(1 = 0)".to_string();
        }

        let column = quote_identifier(&self.column);
        let clauses: Vec<String> = (0..self.arity)
            .map(|i| format!("LOWER({}) LIKE LOWER({})", column, placeholder(i)))
            .collect();

        format!("({})", clauses.join(" OR "))
    }
}

impl fmt::Display for AnyMatchPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sql())
    }
}

/// Build a predicate that matches when `column` contains any of `terms`
pub fn build_any_match_predicate<T: AsRef<str>>(
    column: &str,
    terms: &[T],
) -> (AnyMatchPredicate, Vec<String>) {
    let bound: Vec<String> = terms.iter().map(|t| wrap_substring(t.as_ref())).collect();

    let predicate = AnyMatchPredicate {
        column: column.to_string(),
        arity: bound.len(),
    };

    (predicate, bound)
}

/// Wrap a term in substring wildcards
pub fn wrap_substring(term: &str) -> String {
    format!("%{}%", term)
}

/// Anchored LIKE match with ASCII-only case folding
fn like_matches(value: &str, pattern: &str) -> bool {
    let value: Vec<char> = value.chars().map(|c| c.to_ascii_lowercase()).collect();
    let pattern: Vec<char> = pattern.chars().map(|c| c.to_ascii_lowercase()).collect();

    let (mut v, mut p) = (0, 0);
    // Last `%` seen and the value position it is currently absorbing up to
    let mut backtrack: Option<(usize, usize)> = None;

    while v < value.len() {
        match pattern.get(p) {
            Some('%') => {
                backtrack = Some((p, v));
                p += 1;
            }
            Some(&c) if c == '_' || c == value[v] => {
                v += 1;
                p += 1;
            }
            _ => match backtrack {
                Some((star, absorbed)) => {
                    backtrack = Some((star, absorbed + 1));
                    p = star + 1;
                    v = absorbed + 1;
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '%')
}

/// Quote a possibly table-qualified identifier
fn quote_identifier(column: &str) -> String {
    column
        .split('.')
        .map(|part| format!("\"{}\"", part.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(".")
}
