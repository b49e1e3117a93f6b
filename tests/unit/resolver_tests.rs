/*!
 * Tests for translation resolution with fallback
 */

use lexis::app_config::Config;
use lexis::i18n::{ResolutionSource, TranslationKey, TranslationResolver};
use lexis::lookup::InMemoryLexicon;

use crate::common::{CountingStore, FlakyStore, UnavailableStore, init_logging, sample_lexicon};

fn resolver() -> TranslationResolver<InMemoryLexicon> {
    TranslationResolver::new(sample_lexicon(), "en-us")
}

#[test]
fn test_resolve_withExactRow_shouldReturnIt() {
    assert_eq!(resolver().resolve("greeting", "pt-br", "email_templates"), "Olá");
}

#[test]
fn test_resolve_withMissingLanguage_shouldFallBackToDefaultLanguage() {
    let resolution = resolver()
        .try_resolve("greeting", "fr-fr", "email_templates")
        .expect("in-memory lookups cannot fail");

    assert_eq!(resolution.value, "Hello");
    assert_eq!(resolution.source, ResolutionSource::DefaultLanguage);
}

#[test]
fn test_resolve_withOnlyFallbackContextRow_shouldUseIt() {
    let resolution = resolver()
        .try_resolve("search", "es-es", "ui_messages")
        .expect("in-memory lookups cannot fail");

    assert_eq!(resolution.value, "Buscar");
    assert_eq!(resolution.source, ResolutionSource::FallbackContext);
}

#[test]
fn test_resolve_withDefaultLanguageRow_shouldWinOverFallbackContext() {
    let lexicon = sample_lexicon();
    lexicon.set_translation(TranslationKey::new("search", "en-us", "ui_messages"), "Search");
    let resolver = TranslationResolver::new(lexicon, "en-us");

    assert_eq!(resolver.resolve("search", "es-es", "ui_messages"), "Search");
}

#[test]
fn test_resolve_withEmptyStoredValue_shouldContinueDownTheChain() {
    let lexicon = sample_lexicon();
    lexicon.set_translation(TranslationKey::new("greeting", "fr-fr", "email_templates"), "");
    let resolver = TranslationResolver::new(lexicon, "en-us");

    let resolution = resolver.try_resolve("greeting", "fr-fr", "email_templates").unwrap();
    assert_eq!(resolution.value, "Hello");
    assert_eq!(resolution.source, ResolutionSource::DefaultLanguage);
}

#[test]
fn test_resolve_withOnlyEmptyValues_shouldReturnKey() {
    let lexicon = InMemoryLexicon::new();
    lexicon.set_translation(TranslationKey::new("title", "en-us", "header"), "");
    let resolver = TranslationResolver::new(lexicon, "en-us");

    assert_eq!(resolver.resolve("title", "en-us", "header"), "title");
}

#[test]
fn test_resolve_withNoRowAnywhere_shouldReturnKeyVerbatim() {
    let resolution = resolver()
        .try_resolve("totally_unknown_key", "en-us", "ui_messages")
        .expect("in-memory lookups cannot fail");

    assert_eq!(resolution.value, "totally_unknown_key");
    assert_eq!(resolution.source, ResolutionSource::Literal);
}

#[test]
fn test_resolve_withUnnormalizedLanguage_shouldNormalizeBeforeLookup() {
    assert_eq!(resolver().resolve("greeting", " PT_BR ", "email_templates"), "Olá");
}

#[test]
fn test_resolve_withDefaultLanguageRequested_shouldNotQueryTwice() {
    let store = CountingStore::new(InMemoryLexicon::new());
    let resolver = TranslationResolver::new(&store, "en-us");

    let value = resolver.resolve("missing", "en-us", "header");

    assert_eq!(value, "missing");
    // exact, then fallback context; the default-language step repeats the exact row
    assert_eq!(store.lookup_count(), 2);
}

#[test]
fn test_resolve_withUnavailableStore_shouldReturnKey() {
    init_logging();
    let resolver = TranslationResolver::new(UnavailableStore, "en-us");

    assert_eq!(resolver.resolve("greeting", "fr-fr", "email_templates"), "greeting");
    assert!(resolver.try_resolve("greeting", "fr-fr", "email_templates").is_err());
}

#[test]
fn test_resolve_withStoreFailingMidChain_shouldReturnKey() {
    let resolver = TranslationResolver::new(FlakyStore::failing_after(1), "en-us");

    assert_eq!(resolver.resolve("greeting", "fr-fr", "email_templates"), "greeting");
}

#[test]
fn test_withFallbackContext_shouldChangeThirdStep() {
    let lexicon = InMemoryLexicon::new();
    lexicon.set_translation(TranslationKey::new("logout", "de-de", "common"), "Abmelden");
    let resolver = TranslationResolver::new(lexicon, "en-us").with_fallback_context("common");

    assert_eq!(resolver.fallback_context(), "common");
    assert_eq!(resolver.resolve("logout", "de-de", "header"), "Abmelden");
}

#[test]
fn test_fromConfig_shouldUseConfiguredDefaults() {
    let mut config = Config::default();
    config.default_language = "PT_BR".to_string();
    config.fallback_context = "shared".to_string();

    let resolver = TranslationResolver::from_config(sample_lexicon(), &config);

    assert_eq!(resolver.default_language(), "pt-br");
    assert_eq!(resolver.fallback_context(), "shared");
    assert_eq!(resolver.resolve("greeting", "it-it", "email_templates"), "Olá");
}

#[test]
fn test_resolveWith_shouldSubstitutePlaceholders() {
    let value = resolver().resolve_with("welcome", "en-us", "header", &[("name", "Ana")]);

    assert_eq!(value, "Welcome back, Ana!");
}

#[test]
fn test_resolveWith_onLiteralFallback_shouldStillReturnKey() {
    let value = resolver().resolve_with("no_such_key", "en-us", "header", &[("name", "Ana")]);

    assert_eq!(value, "no_such_key");
}
