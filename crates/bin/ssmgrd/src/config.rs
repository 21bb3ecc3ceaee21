//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `ssmgr.toml` in the working directory, or the file named by
//! `SSMGR_CONFIG`. Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use ssmgr_domain::error::InvalidArgumentError;
use ssmgr_domain::grid::ColumnsPerRow;

const DEFAULT_PATH: &str = "ssmgr.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Card grid settings for the manager view.
    pub grid: GridConfig,
    /// Where the catalog records come from.
    pub catalog: CatalogConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Manager view display density.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cards per row when a request does not ask for a specific count.
    pub columns_per_row: i64,
}

/// Catalog source.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML seed file; the built-in sample data is used when unset.
    pub seed_path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `ssmgr.toml` (or `SSMGR_CONFIG`, if set)
    /// then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SSMGR_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides read through `var`, so tests need not touch the
    /// process environment.
    ///
    /// A set variable that does not parse is an error, never a silent
    /// fallback to the file or default value.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(val) = var("SSMGR_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("SSMGR_PORT") {
            self.server.port = parse_override("SSMGR_PORT", val)?;
        }
        if let Some(val) = var("SSMGR_BIND") {
            let Some((host, port)) = val.rsplit_once(':') else {
                return Err(ConfigError::Override {
                    key: "SSMGR_BIND",
                    value: val,
                });
            };
            let port = parse_override("SSMGR_BIND", port.to_string())?;
            self.server.host = host.to_string();
            self.server.port = port;
        }
        if let Some(val) = var("SSMGR_COLUMNS") {
            self.grid.columns_per_row = parse_override("SSMGR_COLUMNS", val)?;
        }
        if let Some(val) = var("SSMGR_SEED") {
            self.catalog.seed_path = Some(PathBuf::from(val));
        }
        if let Some(val) = var("SSMGR_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.columns_per_row()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the configured grid density.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Columns`] when the value is not positive.
    pub fn columns_per_row(&self) -> Result<ColumnsPerRow, ConfigError> {
        Ok(ColumnsPerRow::new(self.grid.columns_per_row)?)
    }
}

fn parse_override<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Override { key, value })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { columns_per_row: 3 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ssmgrd=info,ssmgr=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// The grid density setting is unusable.
    #[error("invalid grid configuration")]
    Columns(#[from] InvalidArgumentError),
    /// An environment override is set but does not parse.
    #[error("invalid value {value:?} for {key}")]
    Override { key: &'static str, value: String },
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
