//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::LocaleTag;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Locale configuration.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Key-value storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Simulated purchase configuration.
    #[serde(default)]
    pub purchase: PurchaseConfig,
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Active language tag (e.g. "en", "es-MX", "ja").
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Key-value storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file backing the store.
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
    /// Keep everything in memory and never touch the filesystem.
    #[serde(default)]
    pub in_memory: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            in_memory: false,
        }
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("fintrack.json")
}

/// Simulated purchase configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseConfig {
    /// Artificial delay before a purchase completes, in milliseconds.
    #[serde(default = "default_purchase_delay_ms")]
    pub delay_ms: u64,
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_purchase_delay_ms(),
        }
    }
}

fn default_purchase_delay_ms() -> u64 {
    1000
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FINTRACK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Returns the configured locale as a parsed tag.
    #[must_use]
    pub fn locale_tag(&self) -> LocaleTag {
        LocaleTag::new(&self.locale.language)
    }
}
