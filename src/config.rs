use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ChefConfig {
    /// Origin of the recipe API, without a trailing `/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// File backing the client-local storage
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
    /// Page navigated to after a recipe is stored
    #[serde(default = "default_results_page")]
    pub results_page: String,
    /// Request timeout in seconds; no timeout when unset
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for ChefConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            storage_path: default_storage_path(),
            results_page: default_results_page(),
            timeout: None,
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".leftover-chef/storage.json")
}

fn default_results_page() -> String {
    "recipe.html".to_string()
}

impl ChefConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with LEFTOVER_CHEF__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: LEFTOVER_CHEF__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<ChefConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("LEFTOVER_CHEF")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
