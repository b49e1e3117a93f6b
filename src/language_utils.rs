//! Language utilities for locale code handling
//!
//! Translation rows are keyed by short locale codes such as `en-us` or
//! `pt-br`. Hosts pass these in whatever casing and separator their request
//! layer produced, so every code goes through `normalize_locale` first.

use anyhow::{Result, anyhow};
use isolang::Language;

/// Normalize a locale code: trim, lowercase, `_` becomes `-`
pub fn normalize_locale(code: &str) -> String {
    code.trim().to_lowercase().replace('_', "-")
}

/// Validate a locale code
///
/// The primary subtag must be an ISO 639-1 code. A region subtag, when
/// present, must be 2 letters or 3 digits.
pub fn validate_locale(code: &str) -> Result<()> {
    let normalized = normalize_locale(code);
    if normalized.is_empty() {
        return Err(anyhow!("Locale code cannot be empty"));
    }

    let mut parts = normalized.split('-');
    let primary = parts.next().unwrap_or_default();
    if primary.len() != 2 || Language::from_639_1(primary).is_none() {
        return Err(anyhow!("Invalid language in locale code: {}", code));
    }

    if let Some(region) = parts.next() {
        let valid_region = (region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()))
            || (region.len() == 3 && region.chars().all(|c| c.is_ascii_digit()));
        if !valid_region {
            return Err(anyhow!("Invalid region in locale code: {}", code));
        }
    }

    if parts.next().is_some() {
        return Err(anyhow!("Unsupported locale code: {}", code));
    }

    Ok(())
}
