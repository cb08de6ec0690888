//! Configuration loading and typed config structures for the drone simulator.
//!
//! The canonical configuration lives in `dronesim-config.yaml` at the
//! project root. Every field has a default, so an empty file (or no file
//! at all) yields a working service on port 5000.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::drone::{DEFAULT_BATTERY, DroneState};
use crate::operations::{DroneOperations, LOW_BATTERY_THRESHOLD};

/// Configuration file read when `DRONESIM_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "dronesim-config.yaml";

/// Environment variable pointing at an alternative configuration file.
pub const CONFIG_PATH_ENV: &str = "DRONESIM_CONFIG";

/// Environment variable overriding `server.host`.
pub const HOST_ENV: &str = "DRONESIM_HOST";

/// Environment variable overriding `server.port`.
pub const PORT_ENV: &str = "DRONESIM_PORT";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value was syntactically valid but unusable.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DroneSimConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Initial drone state and alert thresholds.
    #[serde(default)]
    pub drone: DroneConfig,

    /// Sensor simulator settings.
    #[serde(default)]
    pub sensors: SensorConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// A configuration together with where it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    /// The effective configuration, overrides applied.
    pub config: DroneSimConfig,
    /// The file that was looked for.
    pub path: PathBuf,
    /// `false` when the file was absent and defaults were used.
    pub from_file: bool,
}

impl DroneSimConfig {
    /// Resolve the config file path: `DRONESIM_CONFIG` if set, else
    /// `dronesim-config.yaml` in the working directory.
    pub fn resolve_path(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
        lookup(CONFIG_PATH_ENV).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
    }

    /// Load the file at `path`, or fall back to defaults if it does not exist.
    ///
    /// Listener overrides from `lookup` are applied either way.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidValue`] if an override or field is unusable.
    pub fn load_or_default(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<LoadedConfig, ConfigError> {
        let (mut config, from_file) = match std::fs::read_to_string(path) {
            Ok(contents) => (Self::parse(&contents)?, true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => (Self::default(), false),
            Err(e) => return Err(e.into()),
        };
        config.apply_overrides(lookup)?;
        Ok(LoadedConfig {
            config,
            path: path.to_path_buf(),
            from_file,
        })
    }

    /// Parse configuration from a YAML string. No environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::InvalidValue`] if a field is unusable.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply listener overrides looked up through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the port override is not a
    /// valid `u16` or the host override is empty.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup(HOST_ENV) {
            self.server.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
                field: "server.port",
                message: format!("{PORT_ENV}={port:?}: {e}"),
            })?;
        }
        self.validate()
    }

    /// Build the operation handler seeded from `drone` settings.
    pub const fn build_operations(&self) -> DroneOperations {
        DroneOperations::new(
            DroneState::with_battery(self.drone.initial_battery),
            self.drone.low_battery_threshold,
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host",
                message: String::from("must not be empty"),
            });
        }
        Ok(())
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Drone configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DroneConfig {
    /// Battery level at startup.
    #[serde(default = "default_initial_battery")]
    pub initial_battery: i64,

    /// Battery level strictly below which `GET /battery` alerts.
    #[serde(default = "default_low_battery_threshold")]
    pub low_battery_threshold: i64,
}

impl Default for DroneConfig {
    fn default() -> Self {
        Self {
            initial_battery: default_initial_battery(),
            low_battery_threshold: default_low_battery_threshold(),
        }
    }
}

/// Sensor simulator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SensorConfig {
    /// Fixed RNG seed. Absent means seed from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    5000
}

const fn default_initial_battery() -> i64 {
    DEFAULT_BATTERY
}

const fn default_low_battery_threshold() -> i64 {
    LOW_BATTERY_THRESHOLD
}

fn default_log_level() -> String {
    String::from("info")
}
