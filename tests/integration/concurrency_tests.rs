/*!
 * Shared expanders and resolvers used from many threads
 */

use std::sync::Arc;
use std::thread;

use lexis::database::{Repository, TranslationRecord};
use lexis::i18n::{CachedTranslations, TranslationResolver};
use lexis::search::TermExpander;

use crate::common::sample_lexicon;

#[test]
fn test_sharedExpander_acrossThreads_shouldGiveIdenticalResults() {
    let expander = Arc::new(TermExpander::new(sample_lexicon()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let expander = expander.clone();
            thread::spawn(move || expander.expand("morena"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["morena", "brunette_woman"]);
    }
}

#[test]
fn test_sharedCachedResolver_acrossThreads_shouldBeThreadSafe() {
    let repo = Repository::new_in_memory().expect("Failed to create repository");
    for i in 0..10 {
        repo.upsert_translation(&TranslationRecord::new(
            &format!("key{}", i),
            "en-us",
            "header",
            &format!("value{}", i),
        ))
        .expect("Failed to store translation");
    }

    let resolver = Arc::new(TranslationResolver::new(CachedTranslations::new(repo, true), "en-us"));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let resolver = resolver.clone();
            thread::spawn(move || {
                let value = resolver.resolve(&format!("key{}", i), "fr-fr", "header");
                (i, value)
            })
        })
        .collect();

    for handle in handles {
        let (i, value) = handle.join().unwrap();
        assert_eq!(value, format!("value{}", i));
    }

    // a cached miss for fr-fr and a cached value for en-us per key
    assert_eq!(resolver.source().len(), 20);
}
