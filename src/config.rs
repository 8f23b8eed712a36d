//! Application configuration.
//!
//! Settings are compiled-in defaults, optionally overridden by a YAML file
//! passed on the command line. A missing file is not an error; a file that
//! exists but fails to parse is.
//!
//! ```yaml
//! scraping:
//!   timeout_secs: 10
//!   max_retries: 3
//!   max_items: 30
//! text:
//!   min_word_length: 3
//!   top_words: 20
//! custom_stopwords:
//!   english: ["breaking", "live"]
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;
use tracing::{debug, info};

/// Default User-Agent header sent with every HTTP request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Top-level configuration, one section per concern.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scraping: ScrapingConfig,
    pub text: TextConfig,
    pub storage: StorageConfig,
    /// Extra stopwords merged into the base list, keyed by language tag.
    pub custom_stopwords: HashMap<String, Vec<String>>,
}

/// HTTP and extraction settings shared by all collectors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapingConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum retry attempts for a failed page fetch.
    pub max_retries: usize,
    /// Base delay between retry attempts, in milliseconds.
    pub retry_base_delay_ms: u64,
    /// User-Agent header value.
    pub user_agent: String,
    /// Maximum headline records kept per scrape run.
    pub max_items: usize,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_retries: 3,
            retry_base_delay_ms: 1_000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_items: 30,
        }
    }
}

/// Text-processing knobs consumed by the core pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Minimum length a token must have to survive tokenization.
    pub min_word_length: usize,
    /// Default size of the ranked frequency table.
    pub top_words: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            min_word_length: 3,
            top_words: 20,
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database filename, created under the data directory.
    pub db_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_name: "news_data.db".to_string(),
        }
    }
}

/// Load configuration, overlaying the YAML file at `path` when given.
///
/// # Errors
///
/// Returns an error if an explicitly provided file cannot be read or parsed.
pub fn load(path: Option<&str>) -> Result<AppConfig, Box<dyn Error>> {
    match path {
        Some(p) if Path::new(p).exists() => {
            let raw = std::fs::read_to_string(p)?;
            let config: AppConfig = serde_yaml::from_str(&raw)?;
            info!(path = %p, "Loaded configuration file");
            Ok(config)
        }
        Some(p) => Err(format!("config file not found: {p}").into()),
        None => {
            debug!("No config file given; using defaults");
            Ok(AppConfig::default())
        }
    }
}
