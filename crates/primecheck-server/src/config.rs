//! Server configuration.
//!
//! Values are layered, later sources winning:
//! 1. built-in defaults
//! 2. an optional YAML file
//! 3. `PRIMECHECK_`-prefixed environment variables, `__` between sections
//!    and keys (`PRIMECHECK_SERVER__PORT=9090` sets `server.port`)
//!
//! ```ignore
//! let config = ServerConfig::load("config.yaml")?;
//! let config = ServerConfig::from_env()?;
//! ```

use std::path::Path;

use config::{
    builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat,
};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "PRIMECHECK";

/// Log levels accepted in `logging.level`, compared case-insensitively.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration for the primecheck process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub metrics: MetricsSettings,
}

/// Listener address and request size cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Bodies above this many bytes are answered with 413 and never
    /// classified.
    pub body_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            body_limit_bytes: 1 << 20,
        }
    }
}

/// Log output settings. `RUST_LOG` overrides `level` at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    /// JSON lines instead of pretty text.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
        }
    }
}

/// Prometheus exposition toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSettings {
    /// Install the global recorder and mount `/metrics`.
    pub enabled: bool,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Why a configuration could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

impl ConfigLoadError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

impl ServerConfig {
    /// Loads defaults, then the YAML file at `path`, then the environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigLoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Self::assemble(Self::defaults()?.add_source(File::from(path).format(FileFormat::Yaml)))
    }

    /// Loads defaults overridden by the environment.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Self::assemble(Self::defaults()?)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder().add_source(Config::try_from(&Self::default())?))
    }

    /// Applies the environment on top of `builder`, then validates.
    fn assemble(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigLoadError> {
        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values the types alone cannot rule out.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.server.port == 0 {
            return Err(ConfigLoadError::invalid("server.port must be non-zero"));
        }
        if self.server.body_limit_bytes == 0 {
            return Err(ConfigLoadError::invalid(
                "server.body_limit_bytes must be non-zero",
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigLoadError::invalid(format!(
                "logging.level {:?} is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// `host:port` for the HTTP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
