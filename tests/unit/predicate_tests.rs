/*!
 * Tests for the "match any substring" predicate builder
 */

use lexis::search::{build_any_match_predicate, wrap_substring};

#[test]
fn test_build_withTwoTerms_shouldBindWrappedValuesInOrder() {
    let (predicate, bound) = build_any_match_predicate("title", &["a", "b"]);

    assert_eq!(predicate.arity(), 2);
    assert_eq!(bound, vec!["%a%".to_string(), "%b%".to_string()]);
    assert_eq!(bound[0], wrap_substring("a"));
}

#[test]
fn test_toSql_shouldOrOneClausePerTerm() {
    let (predicate, _) = build_any_match_predicate("title", &["morena", "brunette_woman"]);

    assert_eq!(
        predicate.to_sql(),
        "(LOWER(\"title\") LIKE LOWER(?) OR LOWER(\"title\") LIKE LOWER(?))"
    );
    assert_eq!(predicate.to_string(), predicate.to_sql());
}

#[test]
fn test_toSqlNumbered_shouldContinueFromGivenIndex() {
    let (predicate, _) = build_any_match_predicate("l.description", &["x", "y", "z"]);

    assert_eq!(
        predicate.to_sql_numbered(3),
        "(LOWER(\"l\".\"description\") LIKE LOWER(?3) OR LOWER(\"l\".\"description\") LIKE LOWER(?4) OR LOWER(\"l\".\"description\") LIKE LOWER(?5))"
    );
}

#[test]
fn test_build_withNoTerms_shouldMatchNothing() {
    let terms: [&str; 0] = [];
    let (predicate, bound) = build_any_match_predicate("title", &terms);

    assert_eq!(predicate.arity(), 0);
    assert!(bound.is_empty());
    assert_eq!(predicate.to_sql(), "(1 = 0)");
    assert!(!predicate.matches("anything", &bound));
}

#[test]
fn test_build_withOwnedStrings_shouldAcceptAsRefStr() {
    let terms = vec!["spa".to_string()];
    let (predicate, bound) = build_any_match_predicate("name", &terms);

    assert_eq!(predicate.column(), "name");
    assert_eq!(bound, vec!["%spa%"]);
}

#[test]
fn test_matches_shouldTestSubstringIgnoringCase() {
    let (predicate, bound) = build_any_match_predicate("title", &["morena", "brunette_woman"]);

    assert!(predicate.matches("Linda MORENA no centro", &bound));
    assert!(predicate.matches("a Brunette_Woman here", &bound));
    assert!(!predicate.matches("loira", &bound));
}

#[test]
fn test_build_withWildcardCharactersInTerm_shouldWrapVerbatim() {
    let (_, bound) = build_any_match_predicate("title", &["50%_off"]);

    assert_eq!(bound, vec!["%50%_off%"]);
}
