//! Service configuration.
//!
//! Settings are read from an `apiary.toml` file and can be overridden through
//! environment variables:
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [display]
//! default_preference = "metric"
//! precision = 2
//! ```
//!
//! | Variable                   | Overrides                    |
//! |----------------------------|------------------------------|
//! | `HOST`                     | `server.host`                |
//! | `PORT`                     | `server.port`                |
//! | `APIARY_UNIT_PREFERENCE`   | `display.default_preference` |
//! | `APIARY_DISPLAY_PRECISION` | `display.precision`          |

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use apiary_units::{UnitPreference, DEFAULT_PRECISION};

use crate::error::{ServiceError, ServiceResult};

/// Largest number of decimals a label may carry.
pub const MAX_PRECISION: usize = 10;

/// File name searched for by [`ServiceConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "apiary.toml";

pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_UNIT_PREFERENCE: &str = "APIARY_UNIT_PREFERENCE";
pub const ENV_DISPLAY_PRECISION: &str = "APIARY_DISPLAY_PRECISION";

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Bind address settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Defaults applied when a request leaves preference or precision out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub default_preference: UnitPreference,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_preference: UnitPreference::default(),
            precision: default_precision(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ServiceConfig)` if successful
    /// * `Err(ServiceError::Configuration)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ServiceError::configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ServiceResult<Self> {
        let config: ServiceConfig = toml::from_str(content).map_err(|e| {
            ServiceError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `apiary.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> ServiceResult<Self> {
        match Self::default_path() {
            Some(path) => Self::from_file(path),
            None => Err(ServiceError::configuration(format!(
                "No {} found in standard locations",
                CONFIG_FILE_NAME
            ))),
        }
    }

    /// First existing config file among the standard locations.
    pub fn default_path() -> Option<PathBuf> {
        [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Configuration used by the server binary.
    ///
    /// Reads the default file when one exists (built-in defaults otherwise),
    /// then applies environment overrides.
    pub fn load() -> ServiceResult<Self> {
        let mut config = match Self::default_path() {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => {
                log::info!("No {} found, using built-in defaults", CONFIG_FILE_NAME);
                Self::default()
            }
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> ServiceResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ServiceResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get(ENV_HOST) {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = get(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| {
                ServiceError::configuration(format!("{} must be a port number, got '{}'", ENV_PORT, port))
            })?;
        }
        if let Some(pref) = get(ENV_UNIT_PREFERENCE) {
            self.display.default_preference = pref.parse().map_err(|_| {
                ServiceError::configuration(format!(
                    "{} must be 'metric' or 'imperial', got '{}'",
                    ENV_UNIT_PREFERENCE, pref
                ))
            })?;
        }
        if let Some(precision) = get(ENV_DISPLAY_PRECISION) {
            self.display.precision = precision.trim().parse().map_err(|_| {
                ServiceError::configuration(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_DISPLAY_PRECISION, precision
                ))
            })?;
        }

        self.validate()
    }

    /// Check value ranges.
    pub fn validate(&self) -> ServiceResult<()> {
        if self.display.precision > MAX_PRECISION {
            return Err(ServiceError::configuration(format!(
                "display.precision must be at most {}, got {}",
                MAX_PRECISION, self.display.precision
            )));
        }
        if self.server.host.trim().is_empty() {
            return Err(ServiceError::configuration("server.host must not be empty"));
        }
        Ok(())
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> ServiceResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                ServiceError::configuration(format!(
                    "Invalid bind address {}:{}: {}",
                    self.server.host, self.server.port, e
                ))
            })
    }
}
