/*!
 * Tests for the in-memory lexicon store
 */

use std::sync::Arc;

use lexis::i18n::TranslationKey;
use lexis::lookup::{InMemoryLexicon, SynonymEntry, SynonymSource, TranslationSource};

use crate::common::sample_lexicon;

#[test]
fn test_lookupSynonymCategory_shouldMatchExactTermIgnoringCase() {
    let lexicon = sample_lexicon();

    assert_eq!(lexicon.lookup_synonym_category("LOIRA").unwrap(), Some("blonde".to_string()));
    assert_eq!(lexicon.lookup_synonym_category("loi").unwrap(), None);
}

#[test]
fn test_lookupSynonymCategory_withRepeatedTerm_shouldUseEarliestCategorizedRow() {
    let lexicon = InMemoryLexicon::new();
    lexicon.add_synonym(SynonymEntry::uncategorized("club"));
    lexicon.add_synonym(SynonymEntry::new("club", "nightlife"));
    lexicon.add_synonym(SynonymEntry::new("club", "sports"));

    assert_eq!(lexicon.lookup_synonym_category("club").unwrap(), Some("nightlife".to_string()));
}

#[test]
fn test_lookupTermsByCategory_shouldReturnInsertionOrder() {
    let lexicon = sample_lexicon();

    assert_eq!(
        lexicon.lookup_terms_by_category("brunette").unwrap(),
        vec!["morena", "brunette_woman"]
    );
    assert!(lexicon.lookup_terms_by_category("unknown").unwrap().is_empty());
}

#[test]
fn test_translations_shouldBeAddressedByNormalizedKey() {
    let lexicon = InMemoryLexicon::new();
    lexicon.set_translation(TranslationKey::new("title", "EN_GB", "header"), "Colour");

    let found = lexicon
        .lookup_translation(&TranslationKey::new("title", "en-gb", "header"))
        .unwrap();
    assert_eq!(found, Some("Colour".to_string()));
    assert_eq!(lexicon.translation_count(), 1);
}

#[test]
fn test_removeTranslation_shouldReportWhetherRowExisted() {
    let lexicon = sample_lexicon();
    let key = TranslationKey::new("greeting", "en-us", "email_templates");

    assert!(lexicon.remove_translation(&key));
    assert!(!lexicon.remove_translation(&key));
    assert_eq!(lexicon.lookup_translation(&key).unwrap(), None);
}

#[test]
fn test_sharedSource_throughArc_shouldDelegate() {
    let shared: Arc<InMemoryLexicon> = Arc::new(sample_lexicon());

    assert_eq!(shared.synonym_count(), 5);
    assert_eq!(
        SynonymSource::lookup_synonym_category(&shared, "morena").unwrap(),
        Some("brunette".to_string())
    );
}
