use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::LexisError;
use crate::i18n::{DEFAULT_FALLBACK_CONTEXT, DEFAULT_LANGUAGE};
use crate::language_utils::{normalize_locale, validate_locale};
use crate::search::DEFAULT_MAX_TERMS;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Locale used when a translation is missing in the requested language
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Context used when a translation is missing in the requested context
    #[serde(default = "default_fallback_context")]
    pub fallback_context: String,

    /// Search expansion config
    #[serde(default)]
    pub search: SearchConfig,

    /// Translation lookup config
    #[serde(default)]
    pub translations: TranslationsConfig,

    /// Storage config
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Search expansion configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of terms an expansion may produce
    #[serde(default = "default_max_terms")]
    pub max_terms: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_terms: default_max_terms(),
        }
    }
}

/// Translation lookup configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslationsConfig {
    /// Memoize translation rows in process
    #[serde(default = "default_true")]
    pub cache_enabled: bool,
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            cache_enabled: default_true(),
        }
    }
}

/// Storage configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DatabaseConfig {
    /// SQLite file path; the platform data directory when absent
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Equivalent `log` crate filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_fallback_context() -> String {
    DEFAULT_FALLBACK_CONTEXT.to_string()
}

fn default_max_terms() -> usize {
    DEFAULT_MAX_TERMS
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LexisError> {
        validate_locale(&self.default_language).map_err(|e| {
            LexisError::Config(format!("Invalid default_language '{}': {}", self.default_language, e))
        })?;

        if self.fallback_context.trim().is_empty() {
            return Err(LexisError::Config("fallback_context cannot be empty".to_string()));
        }

        if self.search.max_terms == 0 {
            return Err(LexisError::Config("search.max_terms must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexisError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            LexisError::Config(format!("Failed to open config file {:?}: {}", path, e))
        })?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader).map_err(|e| {
            LexisError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        config.default_language = normalize_locale(&config.default_language);
        Ok(config)
    }

    /// Load configuration, writing the defaults first when the file is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self, LexisError> {
        let path = path.as_ref();
        if path.exists() {
            info!("Loading config from {:?}", path);
            return Self::load(path);
        }

        warn!("Config file not found at {:?}, creating default config.", path);
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LexisError> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self).map_err(|e| {
            LexisError::Config(format!("Failed to serialize config to JSON: {}", e))
        })?;

        std::fs::write(path, config_json).map_err(|e| {
            LexisError::Config(format!("Failed to write config to file {:?}: {}", path, e))
        })?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            fallback_context: default_fallback_context(),
            search: SearchConfig::default(),
            translations: TranslationsConfig::default(),
            database: DatabaseConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
