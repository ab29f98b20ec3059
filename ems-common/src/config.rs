//! Configuration loading
//!
//! Settings are resolved in priority order:
//! 1. Command-line arguments / environment variables (applied via [`ConfigOverrides`])
//! 2. TOML config file
//! 3. Compiled defaults
//!
//! The resolved [`ServiceConfig`] is built once at startup and passed down.
//! Nothing below the binary reads the process environment.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Top-level service configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// HTTP listen host
    pub host: String,

    /// HTTP listen port
    pub port: u16,

    /// Database connection settings
    pub database: DatabaseConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path to SQLite database file (created if missing)
    pub path: PathBuf,

    /// Upper bound on concurrently open connections
    pub max_connections: u32,

    /// How long a statement waits on a locked database before failing
    pub busy_timeout_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("ems").join("employees.db"))
        .unwrap_or_else(|| PathBuf::from("./ems_data/employees.db"))
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: 5,
            busy_timeout_ms: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Settings for a database file at `path`, everything else default
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    /// Layer these values on top of `config`
    pub fn apply(self, config: &mut ServiceConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(path) = self.database_path {
            config.database.path = path;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}

impl ServiceConfig {
    /// Parse a TOML document. Every key is optional.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    /// Load configuration from `explicit` if given, else from the default
    /// config file location.
    ///
    /// An explicit path that cannot be read is an error. A missing default
    /// file is not: the compiled defaults are used instead.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let content = std::fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
            })?;
            info!("Loaded config file: {}", path.display());
            return Self::from_toml_str(&content);
        }

        match default_config_file() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                info!("Loaded config file: {}", path.display());
                Self::from_toml_str(&content)
            }
            _ => {
                warn!("No config file found, using compiled defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject settings the service cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }
        if self.database.path.as_os_str().is_empty() {
            return Err(Error::Config("database.path must not be empty".to_string()));
        }
        if self.database.max_connections == 0 {
            return Err(Error::Config(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `~/.config/ems/config.toml` (or the platform equivalent)
fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ems").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.logging.level, "info");
        assert!(config.database.path.ends_with("employees.db"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let mut config = ServiceConfig::default();
        ConfigOverrides {
            port: Some(9100),
            database_path: Some(PathBuf::from("/tmp/ems-override.db")),
            ..Default::default()
        }
        .apply(&mut config);

        assert_eq!(config.port, 9100);
        assert_eq!(config.database.path, PathBuf::from("/tmp/ems-override.db"));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_bind_address() {
        let config = ServiceConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_validate_rejects_zero_connections() {
        let mut config = ServiceConfig::default();
        config.database.max_connections = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let config = ServiceConfig {
            host: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
