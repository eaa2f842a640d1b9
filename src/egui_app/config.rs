use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError, FileConfig, DEFAULT_TIMEOUT_SECS};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Name of the optional config file inside the data directory
pub const CONFIG_FILE_NAME: &str = "shopagent.toml";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                server_url: Some(DEFAULT_SERVER_URL.to_string()),
                data_dir: None,
                request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the configuration from the environment and the config file.
    ///
    /// `SHOP_API_URL` and `SHOP_DATA_DIR` take precedence over
    /// `shopagent.toml` in the data directory.
    pub fn load() -> Result<Self, ConfigError> {
        let env_dir = env_data_dir();
        let base_dir = match &env_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };

        let file_path = base_dir.join(CONFIG_FILE_NAME);
        let file = FileConfig::load(&file_path)?;
        debug!(path = %file_path.display(), "loaded config file");

        let data_dir = match env_dir {
            Some(dir) => dir,
            None => file.data_dir.clone().unwrap_or(base_dir),
        };
        let config = Self::with_builder(env_builder().data_dir(data_dir).merge_file(file))?;
        info!(server = config.server_url(), "configuration resolved");
        Ok(config)
    }

    /// Environment variables and defaults only, skipping the config file
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = env_builder();
        if let Some(dir) = env_data_dir().or_else(|| default_data_dir().ok()) {
            builder = builder.data_dir(dir);
        }
        Self::with_builder(builder)
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Directory for the persisted token and theme, if one is configured
    pub fn data_dir(&self) -> Option<&Path> {
        self.app.data_dir.as_deref()
    }

    pub fn request_timeout(&self) -> Duration {
        self.app.request_timeout()
    }
}

fn env_builder() -> AppConfigBuilder {
    let mut builder = AppConfig::builder();
    if let Ok(url) = std::env::var("SHOP_API_URL") {
        builder = builder.server_url(url);
    }
    builder
}

fn env_data_dir() -> Option<PathBuf> {
    std::env::var_os("SHOP_DATA_DIR").map(PathBuf::from)
}

fn default_data_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("shopagent"))
        .ok_or(ConfigError::MissingValue("config directory"))
}
