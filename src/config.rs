use crate::error::PantryError;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PantryConfig {
    /// CSV file holding the ingredient list
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Number of days ahead of today considered "expiring soon"
    #[serde(default = "default_lookahead_days")]
    pub lookahead_days: u32,
    /// Recipe API settings
    #[serde(default)]
    pub api: RecipeApiConfig,
}

/// Configuration for the recipe-matching API
#[derive(Debug, Deserialize, Clone)]
pub struct RecipeApiConfig {
    /// Base URL of the provider (the endpoint path is appended)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key for authentication (usually supplied via the API_KEY variable)
    pub api_key: Option<String>,
}

impl Default for RecipeApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
        }
    }
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            lookahead_days: default_lookahead_days(),
            api: RecipeApiConfig::default(),
        }
    }
}

// Default value functions
fn default_store_path() -> PathBuf {
    PathBuf::from("ingredients.csv")
}

fn default_lookahead_days() -> u32 {
    3
}

fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

impl PantryConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. The API_KEY environment variable (api key only)
    /// 2. Environment variables with PANTRY__ prefix
    /// 3. pantry.toml file in current directory
    /// 4. Default values
    ///
    /// Environment variable format: PANTRY__API__BASE_URL
    pub fn load() -> Result<Self, PantryError> {
        let mut config = load_config()?;
        config.apply_api_key(std::env::var("API_KEY").ok());
        Ok(config)
    }

    /// Whether an API key is available for recipe queries
    pub fn has_api_key(&self) -> bool {
        self.api.api_key.is_some()
    }

    fn apply_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api.api_key = Some(key);
        }
    }
}

/// Load configuration from pantry.toml and PANTRY__ environment variables
pub fn load_config() -> Result<PantryConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("pantry").required(false))
        // Use double underscore for nested: PANTRY__API__API_KEY
        .add_source(
            Environment::with_prefix("PANTRY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    deserialize_settings(settings)
}

/// A blank `api_key` from any source counts as no key at all
fn deserialize_settings(settings: Config) -> Result<PantryConfig, ConfigError> {
    let mut config: PantryConfig = settings.try_deserialize()?;
    config.api.api_key = config.api.api_key.filter(|k| !k.trim().is_empty());
    Ok(config)
}
