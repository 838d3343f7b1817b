//! Configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API token. Required for the live client; every endpoint this
    /// crate calls is authenticated.
    #[serde(default = "token_from_env")]
    pub token: Option<String>,

    /// API transport settings
    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: token_from_env(),
            api: ApiConfig::default(),
        }
    }
}

fn token_from_env() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty())
}

/// API transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Locate a config file: `./gitscout.toml`, then the platform config
/// directory (`<config dir>/gitscout/config.toml`).
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("gitscout.toml");
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("gitscout").join("config.toml"))
        .filter(|path| path.is_file())
}

/// Load configuration from a file, with `GITSCOUT_*` environment variables
/// layered on top.
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("GITSCOUT").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Configuration from environment and defaults alone.
pub fn get_config() -> Config {
    Config::default()
}
