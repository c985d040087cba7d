//! Configuration management for the administration client

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the library REST API, e.g. `http://localhost:5000`
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    /// Directory holding the stored session record.
    /// Defaults to the platform data directory.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// Log file; stderr when unset
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let api = ApiConfig::default();
        let logging = LoggingConfig::default();

        let config = Config::builder()
            .set_default("api.base_url", api.base_url)?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format)?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix LIBRARY_ADMIN__)
            .add_source(
                Environment::with_prefix("LIBRARY_ADMIN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override API URL from LIBRARY_API_URL env var if present
            .set_override_option("api.base_url", env::var("LIBRARY_API_URL").ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Directory where the session record is stored
    pub fn session_dir(&self) -> PathBuf {
        self.session.dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(env::temp_dir)
                .join("library-admin")
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
