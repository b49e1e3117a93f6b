/*!
 * End-to-end translation tests over the SQLite repository
 */

use anyhow::Result;
use tempfile::TempDir;

use lexis::app_config::Config;
use lexis::database::{DatabaseConnection, Repository, SeedFile, TranslationRecord};
use lexis::i18n::{CachedTranslations, TranslationKey, TranslationResolver};
use lexis::search::TermExpander;

const SEED_JSON: &str = r#"{
    "synonyms": [
        { "term": "morena", "category": "brunette" },
        { "term": "brunette_woman", "category": "brunette" }
    ],
    "translations": [
        { "key": "greeting", "language_code": "en-us", "context": "email_templates", "value": "Hello" },
        { "key": "greeting", "language_code": "pt-br", "context": "email_templates", "value": "Olá" },
        { "key": "search", "language_code": "es-es", "context": "default", "value": "Buscar" }
    ]
}"#;

#[tokio::test]
async fn test_importSeedFile_thenResolveAndExpand_shouldUseImportedRows() -> Result<()> {
    let dir = TempDir::new()?;
    let seed_path = dir.path().join("seed.json");
    std::fs::write(&seed_path, SEED_JSON)?;

    let repo = Repository::new(DatabaseConnection::new(dir.path().join("lexis.db"))?);
    let summary = repo.import_seed(SeedFile::from_path(&seed_path)?).await?;
    assert_eq!((summary.synonyms, summary.translations), (2, 3));

    let config = Config::default();
    let resolver = TranslationResolver::from_config(&repo, &config);
    assert_eq!(resolver.resolve("greeting", "fr-fr", "email_templates"), "Hello");
    assert_eq!(resolver.resolve("greeting", "pt-br", "email_templates"), "Olá");
    assert_eq!(resolver.resolve("search", "es-es", "ui_messages"), "Buscar");
    assert_eq!(
        resolver.resolve("totally_unknown_key", "en-us", "ui_messages"),
        "totally_unknown_key"
    );

    let expander = TermExpander::from_config(&repo, &config);
    assert_eq!(expander.expand("morena"), vec!["morena", "brunette_woman"]);
    Ok(())
}

#[test]
fn test_reopenDatabase_shouldKeepRows() -> Result<()> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("nested").join("lexis.db");

    {
        let repo = Repository::new(DatabaseConnection::new(&db_path)?);
        repo.upsert_translation(&TranslationRecord::new("title", "de-de", "header", "Anzeigen"))?;
    }

    let repo = Repository::new(DatabaseConnection::new(&db_path)?);
    let resolver = TranslationResolver::new(&repo, "en-us");
    assert_eq!(resolver.resolve("title", "DE_de", "header"), "Anzeigen");
    Ok(())
}

#[test]
fn test_cachedRepository_afterAdminEdit_shouldServeNewValueOnceInvalidated() -> Result<()> {
    let repo = Repository::new_in_memory()?;
    repo.upsert_translation(&TranslationRecord::new("greeting", "en-us", "header", "Hello"))?;

    let cache = CachedTranslations::new(repo.clone(), true);
    let resolver = TranslationResolver::new(cache.clone(), "en-us");
    assert_eq!(resolver.resolve("greeting", "en-us", "header"), "Hello");

    repo.upsert_translation(&TranslationRecord::new("greeting", "en-us", "header", "Howdy"))?;
    assert_eq!(resolver.resolve("greeting", "en-us", "header"), "Hello");

    cache.invalidate(&TranslationKey::new("greeting", "en-us", "header"));
    assert_eq!(resolver.resolve("greeting", "en-us", "header"), "Howdy");
    Ok(())
}

#[test]
fn test_resolve_withDroppedTranslationTable_shouldReturnKey() -> Result<()> {
    let repo = Repository::new_in_memory()?;
    repo.connection().execute(|conn| {
        conn.execute_batch("DROP TABLE translations;")?;
        Ok(())
    })?;

    let resolver = TranslationResolver::new(&repo, "en-us");

    assert!(resolver.try_resolve("greeting", "en-us", "header").is_err());
    assert_eq!(resolver.resolve("greeting", "en-us", "header"), "greeting");
    Ok(())
}
