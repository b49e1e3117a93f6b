/*!
 * Tests for locale utility functions
 */

use lexis::language_utils::{normalize_locale, validate_locale};

#[test]
fn test_normalize_locale_withVariousForms_shouldProduceLowerHyphenated() {
    assert_eq!(normalize_locale("en-us"), "en-us");
    assert_eq!(normalize_locale("EN_US"), "en-us");
    assert_eq!(normalize_locale("  pt_BR "), "pt-br");
    assert_eq!(normalize_locale("fr"), "fr");
}

#[test]
fn test_validate_locale_withValidCodes_shouldSucceed() {
    assert!(validate_locale("en").is_ok());
    assert!(validate_locale("en-us").is_ok());
    assert!(validate_locale("PT_BR").is_ok());
    assert!(validate_locale("es-419").is_ok());
}

#[test]
fn test_validate_locale_withInvalidCodes_shouldFail() {
    assert!(validate_locale("").is_err());
    assert!(validate_locale("xx").is_err());
    assert!(validate_locale("eng").is_err());
    assert!(validate_locale("en-u").is_err());
    assert!(validate_locale("en-us-x").is_err());
}
