use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub catalog_path: PathBuf,
    pub provider_timeout: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("STACKWATCH_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            catalog_path: env::var("STACKWATCH_CATALOG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("projects.json")),
            provider_timeout: Duration::from_secs(
                env::var("STACKWATCH_PROVIDER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            log_level: env::var("STACKWATCH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
