// src/config.rs
//
// Engine configuration
//
// PRINCIPLES:
// - Explicit construction, no config files
// - Environment overrides only where the binary needs them

use std::path::PathBuf;
use std::time::Duration;

use crate::integrations::DEFAULT_API_URL;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Origin API root, e.g. "https://swapi.dev/api/"
    pub api_base_url: String,

    /// Cache database location; None selects the platform data directory
    pub database_path: Option<PathBuf>,

    /// HTTP client timeout
    pub http_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            database_path: None,
            http_timeout: Duration::from_secs(30),
        }
    }
}

impl EngineConfig {
    /// Configuration with environment overrides applied:
    /// HOLOCRON_API_URL and HOLOCRON_DB
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("HOLOCRON_API_URL") {
            config.api_base_url = url;
        }
        if let Ok(path) = std::env::var("HOLOCRON_DB") {
            config.database_path = Some(PathBuf::from(path));
        }

        config
    }
}
