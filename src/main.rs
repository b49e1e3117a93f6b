// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;
use std::path::PathBuf;

use lexis::app_config::{Config, LogLevel};
use lexis::database::{DatabaseConnection, Repository, SeedFile, TranslationRecord};
use lexis::i18n::{CachedTranslations, TranslationResolver};
use lexis::search::TermExpander;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Expand a search term into its synonyms
    Expand {
        /// Raw search term
        term: String,

        /// Override the configured cap on expanded terms
        #[arg(long)]
        max_terms: Option<usize>,
    },

    /// Print the SQL predicate and bound values for a search term
    Predicate {
        /// Raw search term
        term: String,

        /// Column the predicate should test
        #[arg(long, default_value = "title")]
        column: String,
    },

    /// Resolve a translation key with fallback
    Resolve {
        /// Message key
        key: String,

        /// Locale code; the configured default when omitted
        #[arg(short = 'L', long)]
        language: Option<String>,

        /// Translation context
        #[arg(short = 'C', long, default_value = "default")]
        context: String,

        /// Placeholder value as name=value, repeatable
        #[arg(short = 'P', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Add a row to the synonym table
    AddSynonym {
        /// Search term
        term: String,

        /// Category shared with related terms
        #[arg(long)]
        category: Option<String>,
    },

    /// Insert or replace a translation
    SetTranslation {
        key: String,
        language: String,
        context: String,
        value: String,
    },

    /// Load synonyms and translations from a JSON seed file
    Import {
        /// Seed file path
        #[arg(value_name = "SEED_FILE")]
        path: PathBuf,
    },

    /// Show table statistics
    Stats,

    /// Generate shell completions for lexis
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// lexis - search expansion and localized strings for listings sites
#[derive(Parser, Debug)]
#[command(name = "lexis")]
#[command(version = "0.1.0")]
#[command(about = "Search term expansion and translation lookup")]
#[command(long_about = "lexis expands search terms through a synonym table and resolves translation keys with fallback.

EXAMPLES:
    lexis import seed.json                         # Load synonyms and translations
    lexis expand morena                            # Show expanded terms
    lexis predicate --column l.title morena        # Show SQL predicate and bound values
    lexis resolve greeting -L fr-fr -C email_templates
    lexis resolve welcome -P name=Ana              # Substitute {name}
    lexis completions bash > lexis.bash            # Generate bash completions

CONFIGURATION:
    Configuration is stored in lexis.json by default. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "lexis.json", global = true)]
    config_path: PathBuf,

    /// SQLite database path, overrides the config
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

// @struct: Custom logger implementation; filtering follows log::max_level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Warn)?;

    let cli = CommandLineOptions::parse();

    // Completions need neither config nor database
    if let Commands::Completions { shell } = cli.command {
        print_completions(shell);
        return Ok(());
    }

    if let Some(log_level) = &cli.log_level {
        log::set_max_level(LogLevel::from(log_level.clone()).to_level_filter());
    }

    let mut config = Config::load_or_create(&cli.config_path)?;
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }
    if let Some(database) = &cli.database {
        config.database.path = Some(database.clone());
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    let db = match &config.database.path {
        Some(path) => DatabaseConnection::new(path)?,
        None => DatabaseConnection::new_default()?,
    };
    let repository = Repository::new(db);

    run_command(cli.command, &config, repository).await
}

fn print_completions(shell: Shell) {
    let mut cmd = CommandLineOptions::command();
    generate(shell, &mut cmd, "lexis", &mut std::io::stdout());
}

async fn run_command(command: Commands, config: &Config, repository: Repository) -> Result<()> {
    let mut stdout = std::io::stdout();

    match command {
        Commands::Expand { term, max_terms } => {
            let expander = TermExpander::from_config(&repository, config)
                .with_max_terms(max_terms.unwrap_or(config.search.max_terms));
            let expanded = expander.try_expand(&term)?;

            for expanded_term in expanded.as_slice() {
                writeln!(stdout, "{}", expanded_term)?;
            }
            if expanded.is_truncated() {
                info!("Expansion truncated at {} terms", expander.max_terms());
            }
        }
        Commands::Predicate { term, column } => {
            let expander = TermExpander::from_config(&repository, config);
            let (predicate, bound) = expander.expand_to_predicate(&column, &term);

            writeln!(stdout, "{}", predicate)?;
            writeln!(stdout, "{}", serde_json::to_string(&bound)?)?;
        }
        Commands::Resolve { key, language, context, params } => {
            let source = CachedTranslations::new(&repository, config.translations.cache_enabled);
            let resolver = TranslationResolver::from_config(source, config);
            let language = language.unwrap_or_else(|| config.default_language.clone());

            let params: Vec<(&str, &str)> = params
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();

            let resolution = resolver.try_resolve(&key, &language, &context)?;
            info!("Resolved via {:?}", resolution.source);
            writeln!(stdout, "{}", lexis::i18n::interpolate(&resolution.value, &params))?;
        }
        Commands::AddSynonym { term, category } => {
            if term.trim().is_empty() {
                return Err(anyhow!("Term cannot be empty"));
            }
            let id = repository.add_synonym(&term, category.as_deref())?;
            info!("Added synonym #{}", id);
        }
        Commands::SetTranslation { key, language, context, value } => {
            lexis::language_utils::validate_locale(&language)?;
            repository.upsert_translation(&TranslationRecord::new(&key, &language, &context, &value))?;
            info!("Stored translation for '{}'", key);
        }
        Commands::Import { path } => {
            let seed = SeedFile::from_path(&path)?;
            if seed.is_empty() {
                info!("Seed file {:?} is empty, nothing to import", path);
                return Ok(());
            }
            let summary = repository.import_seed(seed).await?;
            writeln!(
                stdout,
                "Imported {} synonyms and {} translations",
                summary.synonyms, summary.translations
            )?;
        }
        Commands::Stats => {
            writeln!(stdout, "{}", repository.stats()?)?;
        }
        Commands::Completions { shell } => print_completions(shell),
    }

    Ok(())
}
