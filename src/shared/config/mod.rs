//! Application configuration module
//!
//! Configuration is layered: built-in defaults, then an optional TOML file at
//! `<config dir>/liggs/config.toml`, then environment variables.
//!
//! ```toml
//! server_url = "http://127.0.0.1:5000"
//! autosave_quiet_ms = 2000
//! search_quiet_ms = 300
//! intro_duration_ms = 4900
//! export_dir = "/home/ada/Downloads"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
/// Quiet period before an autosave fires
pub const DEFAULT_AUTOSAVE_QUIET: Duration = Duration::from_millis(2000);
/// Quiet period before a search query is sent
pub const DEFAULT_SEARCH_QUIET: Duration = Duration::from_millis(300);
/// Length of the intro animation
pub const DEFAULT_INTRO_DURATION: Duration = Duration::from_millis(4900);

const SERVER_URL_ENV: &str = "LIGGS_SERVER_URL";
const EXPORT_DIR_ENV: &str = "LIGGS_EXPORT_DIR";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the notes server, without a trailing slash
    pub server_url: String,
    pub autosave_quiet: Duration,
    pub search_quiet: Duration,
    pub intro_duration: Duration,
    /// Where exports are written; `None` means the user's download directory
    pub export_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            autosave_quiet: DEFAULT_AUTOSAVE_QUIET,
            search_quiet: DEFAULT_SEARCH_QUIET,
            intro_duration: DEFAULT_INTRO_DURATION,
            export_dir: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load defaults, the user's config file, and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(default_config_path().as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Load from an explicit file path and environment lookup.
    ///
    /// A missing file is skipped; a file that exists but cannot be read or
    /// parsed is an error.
    pub fn from_sources<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();

        if let Some(path) = path.filter(|p| p.exists()) {
            let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            let file: FileConfig = toml::from_str(&text).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            tracing::debug!(path = %path.display(), "loaded config file");
            builder = builder.merge_file(file);
        }

        if let Some(url) = env(SERVER_URL_ENV) {
            builder = builder.server_url(url);
        }
        if let Some(dir) = env(EXPORT_DIR_ENV) {
            builder = builder.export_dir(PathBuf::from(dir));
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.server_url.clone()));
        }
        if self.autosave_quiet.is_zero() {
            return Err(ConfigError::InvalidValue("autosave_quiet_ms"));
        }
        if self.search_quiet.is_zero() {
            return Err(ConfigError::InvalidValue("search_quiet_ms"));
        }
        Ok(())
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    /// Directory exports are written into
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// `<config dir>/liggs/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("liggs").join("config.toml"))
}

/// On-disk shape of the config file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    server_url: Option<String>,
    autosave_quiet_ms: Option<u64>,
    search_quiet_ms: Option<u64>,
    intro_duration_ms: Option<u64>,
    export_dir: Option<PathBuf>,
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    autosave_quiet: Option<Duration>,
    search_quiet: Option<Duration>,
    intro_duration: Option<Duration>,
    export_dir: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    pub fn autosave_quiet(mut self, quiet: Duration) -> Self {
        self.autosave_quiet = Some(quiet);
        self
    }

    pub fn search_quiet(mut self, quiet: Duration) -> Self {
        self.search_quiet = Some(quiet);
        self
    }

    pub fn intro_duration(mut self, duration: Duration) -> Self {
        self.intro_duration = Some(duration);
        self
    }

    pub fn export_dir(mut self, dir: PathBuf) -> Self {
        self.export_dir = Some(dir);
        self
    }

    fn merge_file(mut self, file: FileConfig) -> Self {
        if let Some(url) = file.server_url {
            self.server_url = Some(url);
        }
        if let Some(ms) = file.autosave_quiet_ms {
            self.autosave_quiet = Some(Duration::from_millis(ms));
        }
        if let Some(ms) = file.search_quiet_ms {
            self.search_quiet = Some(Duration::from_millis(ms));
        }
        if let Some(ms) = file.intro_duration_ms {
            self.intro_duration = Some(Duration::from_millis(ms));
        }
        if let Some(dir) = file.export_dir {
            self.export_dir = Some(dir);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            server_url: self
                .server_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.server_url),
            autosave_quiet: self.autosave_quiet.unwrap_or(defaults.autosave_quiet),
            search_quiet: self.search_quiet.unwrap_or(defaults.search_quiet),
            intro_duration: self.intro_duration.unwrap_or(defaults.intro_duration),
            export_dir: self.export_dir,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {0}")]
    InvalidValue(&'static str),
    #[error("failed to read {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },
    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}
